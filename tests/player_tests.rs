use std::io::Cursor;

use game2048::{
    CliPlayer, Direction, EngineError, Game2048Env, GameEngine, Grid, Player, PlayerNode,
    ScriptedPlayer,
};

#[test]
fn test_scripted_player_parses_tokens() {
    let mut player = ScriptedPlayer::from_tokens("w a, s d").unwrap();
    assert_eq!(player.remaining(), 4);
    let grid = Grid::new();
    let legal = grid.legal_moves();
    let mut seen = Vec::new();
    while let Some(direction) = player.select_action(&grid, &legal).unwrap() {
        seen.push(direction);
    }
    assert_eq!(
        seen,
        vec![Direction::Up, Direction::Left, Direction::Down, Direction::Right]
    );
}

#[test]
fn test_scripted_player_rejects_bad_tokens() {
    let err = ScriptedPlayer::from_tokens("wasdx").unwrap_err();
    assert_eq!(err, EngineError::InvalidDirectionToken('x'));
}

#[test]
fn test_node_runs_scripted_episode() {
    let player = ScriptedPlayer::from_tokens("wasd".repeat(5).as_str()).unwrap();
    let mut node = PlayerNode::new(Box::new(player), Game2048Env::new(Some(12)));
    let summary = node.run().unwrap();
    assert_eq!(summary.seed, 12);
    assert_eq!(summary.score, node.env().score());
    assert_eq!(summary.moves, node.env().moves());
    assert!(summary.moves <= 20);
    if !node.env().is_done() {
        assert_eq!(summary.moves, 20);
    }
    assert_eq!(summary, node.summary());
}

#[test]
fn test_node_stops_at_terminal_board() {
    let start = Grid::from_rows([[10, 10, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
    let env = Game2048Env::from_engine(GameEngine::with_grid(start, 0));
    let player = ScriptedPlayer::from_tokens("aaaa").unwrap();
    let mut node = PlayerNode::new(Box::new(player), env);
    let summary = node.run().unwrap();
    assert_eq!(summary.moves, 1);
    assert_eq!(summary.score, 2048);
    assert_eq!(summary.max_tile, 2048);
    assert!(summary.status.is_terminal());
}

#[test]
fn test_cli_player_reads_tokens_until_quit() {
    let input = Cursor::new(b"x\nhelp\n\nw\nleft\nq\n".to_vec());
    let mut player = CliPlayer::with_input(Box::new(input));
    let grid = Grid::new();
    let legal = grid.legal_moves();
    assert_eq!(player.select_action(&grid, &legal).unwrap(), Some(Direction::Up));
    assert_eq!(player.select_action(&grid, &legal).unwrap(), Some(Direction::Left));
    assert_eq!(player.select_action(&grid, &legal).unwrap(), None);
    // end of input also stops the episode
    assert_eq!(player.select_action(&grid, &legal).unwrap(), None);
}
