use clap::{Parser, Subcommand};
use game2048::{
    init_logging, print_board, print_summary, Cells, CliPlayer, Direction, Environment,
    Game2048Env, Grid, Player, PlayerNode, ScriptedPlayer, Step, NUM_DIRECTIONS,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively with w/a/s/d.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Replay a fixed move sequence and print every step.
    Replay {
        #[arg(long, help = "Moves as w/a/s/d tokens (e.g., --moves wwasd)")]
        moves: String,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed } => {
            let env = Game2048Env::new(seed);
            println!("Starting game with seed {}", env.engine().seed());
            let mut node = PlayerNode::new(Box::new(CliPlayer::new()), env);
            let summary = node.run()?;
            print_board(node.env().engine().grid());
            print_summary(&summary);
        }
        Commands::Replay { moves, seed } => {
            let player = ScriptedPlayer::from_tokens(&moves)?;
            let env = Game2048Env::new(seed);
            println!(
                "Replaying {} moves with seed {}",
                player.remaining(),
                env.engine().seed()
            );
            println!("{}", env.render());
            let mut node = PlayerNode::new(Box::new(Echo(player)), env);
            let summary = node.run()?;
            print_summary(&summary);
            if !node.env().is_done() {
                println!("\nEpisode still running after the scripted moves.");
            }
        }
    }
    Ok(())
}

/// Scripted player that prints the board after every step.
struct Echo(ScriptedPlayer);

impl Player for Echo {
    fn select_action(
        &mut self,
        grid: &Grid,
        legal: &[bool; NUM_DIRECTIONS],
    ) -> anyhow::Result<Option<Direction>> {
        self.0.select_action(grid, legal)
    }

    fn handle_step(&mut self, direction: Direction, step: &Step<Cells>) {
        println!(
            "\n#{} {} reward={} score={}",
            step.info.moves, direction, step.reward, step.info.score
        );
        if let Ok(grid) = Grid::from_rows(step.observation) {
            print_board(&grid);
        }
    }
}
