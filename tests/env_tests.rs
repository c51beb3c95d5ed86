use game2048::{
    Direction, EngineError, Environment, Game2048Env, GameEngine, GameStatus, Grid,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn play_until_done(env: &mut Game2048Env) -> u64 {
    let mut total = 0;
    let mut i = 0;
    while !env.is_done() {
        let step = env.step(Direction::ALL[i % 4]).unwrap();
        total += u64::from(step.reward);
        i += 1;
        assert!(i < 100_000, "episode did not terminate");
    }
    total
}

#[test]
fn test_reset_returns_two_tile_observation() {
    let mut env = Game2048Env::new(Some(3));
    let obs = env.reset(Some(3));
    let tiles = obs.iter().flatten().filter(|&&c| c != 0).count();
    assert_eq!(tiles, 2);
    assert!(Game2048Env::observation_space().contains(&obs));
    assert_eq!(obs, env.observation());
    assert_eq!(env.score(), 0);
    assert_eq!(env.moves(), 0);
    assert!(!env.is_done());
}

#[test]
fn test_same_seed_same_observations() {
    let mut a = Game2048Env::new(Some(10));
    let mut b = Game2048Env::new(Some(10));
    assert_eq!(a.observation(), b.observation());
    for token in "wasdwwddssaa".chars() {
        let sa = a.step_token(token).unwrap();
        let sb = b.step_token(token).unwrap();
        assert_eq!(sa, sb);
        if sa.terminated {
            break;
        }
    }
}

#[test]
fn test_tokens_and_indices_map_to_directions() {
    let start = Grid::from_rows([[0, 0, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]).unwrap();
    let expected = [(0usize, 'a', (1, 0)), (1, 'w', (0, 1)), (2, 'd', (1, 3)), (3, 's', (3, 1))];
    for (index, token, (r, c)) in expected {
        let mut by_index = Game2048Env::from_engine(GameEngine::with_grid(start, 0));
        let mut by_token = Game2048Env::from_engine(GameEngine::with_grid(start, 0));
        let a = by_index.step_index(index).unwrap();
        let b = by_token.step_token(token).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.observation[r][c], 1, "action {}", index);
        assert!(a.info.moved);
    }
}

#[test]
fn test_invalid_actions_are_rejected() {
    let mut env = Game2048Env::new(Some(1));
    let before = env.observation();

    let err = env.step_token('x').unwrap_err();
    assert_eq!(err, EngineError::InvalidDirectionToken('x'));
    assert!(err.is_invalid_argument());

    let err = env.step_index(4).unwrap_err();
    assert_eq!(err, EngineError::InvalidActionIndex(4));
    assert!(err.is_invalid_argument());

    assert_eq!(env.observation(), before);
    assert_eq!(env.moves(), 0);
}

#[test]
fn test_step_after_terminal_is_refused() {
    let mut env = Game2048Env::new(Some(42));
    let total = play_until_done(&mut env);
    assert_eq!(total, env.score());
    assert!(env.status().is_terminal());

    let err = env.step(Direction::Left).unwrap_err();
    assert_eq!(err, EngineError::GameOver);
    assert!(err.is_invalid_operation());
    assert_eq!(err.to_string(), "InvalidOperation: move requested on terminal board");

    env.reset(None);
    assert!(!env.is_done());
    assert_eq!(env.score(), 0);
    assert!(env.step(Direction::Left).is_ok());
}

#[test]
fn test_step_info_tracks_episode() {
    let start = Grid::from_rows([[1, 1, 0, 0], [2, 2, 0, 0], [0; 4], [0; 4]]).unwrap();
    let mut env = Game2048Env::from_engine(GameEngine::with_grid(start, 5));
    let step = env.step(Direction::Left).unwrap();
    assert_eq!(step.reward, 4 + 8);
    assert!(!step.terminated);
    assert_eq!(step.info.score, 12);
    assert_eq!(step.info.moves, 1);
    assert_eq!(step.info.max_tile, 8);
    assert_eq!(step.info.status, GameStatus::InProgress);
}

#[test]
fn test_win_terminates_episode() {
    let start = Grid::from_rows([[0, 0, 10, 10], [0; 4], [0; 4], [0; 4]]).unwrap();
    let mut env = Game2048Env::from_engine(GameEngine::with_grid(start, 5));
    let step = env.step(Direction::Right).unwrap();
    assert!(step.terminated);
    assert_eq!(step.reward, 2048);
    assert_eq!(step.info.status, GameStatus::Won);
    assert!(env.is_done());
}

#[test]
fn test_seed_reports_effective_seed() {
    let mut env = Game2048Env::new(Some(1));
    assert_eq!(env.seed(Some(123)), 123);
    assert_eq!(env.engine().seed(), 123);
    let drawn = env.seed(None);
    assert_eq!(env.engine().seed(), drawn);

    let obs_a = env.reset(Some(77));
    let obs_b = Game2048Env::new(Some(77)).observation();
    assert_eq!(obs_a, obs_b);
}

#[test]
fn test_unseeded_reset_reports_reproducible_seed() {
    let mut env = Game2048Env::new(Some(21));
    for token in "wasd".chars() {
        env.step_token(token).unwrap();
    }
    let obs = env.reset(None);
    let seed = env.engine().seed();
    assert_ne!(seed, 21);
    assert_eq!(Game2048Env::new(Some(seed)).observation(), obs);

    let mut twin = Game2048Env::new(Some(21));
    for token in "wasd".chars() {
        twin.step_token(token).unwrap();
    }
    assert_eq!(twin.reset(None), obs);
    assert_eq!(twin.engine().seed(), seed);
}

#[test]
fn test_spaces() {
    let actions = Game2048Env::action_space();
    assert_eq!(actions.n, 4);
    assert!(actions.contains(&3));
    assert!(!actions.contains(&4));

    let obs = Game2048Env::observation_space();
    assert_eq!(obs.shape, [4, 4]);
    assert_eq!((obs.low, obs.high), (0, 11));
    assert!(!obs.contains(&[[12, 0, 0, 0], [0; 4], [0; 4], [0; 4]]));

    let mut rng = SmallRng::seed_from_u64(9);
    for _ in 0..100 {
        let a = actions.sample(&mut rng).unwrap();
        assert!(actions.contains(&a));
        assert!(Direction::from_index(a).is_ok());
        assert!(obs.contains(&obs.sample(&mut rng)));
    }
}

#[test]
fn test_render_shows_face_values() {
    let start = Grid::from_rows([[1, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 11]]).unwrap();
    let env = Game2048Env::from_engine(GameEngine::with_grid(start, 0));
    let text = env.render();
    assert!(text.contains("2048"));
    assert!(text.contains("     2"));
    assert_eq!(text.lines().count(), 6);
    assert!(!text.contains("11"));
}
