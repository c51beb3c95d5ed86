use std::io::{self, BufRead, Write};

use crate::core::{Cells, Direction, Grid, NUM_DIRECTIONS};
use crate::env::Step;
use crate::ui::{print_board, print_legal_moves};

use super::Player;

/// Interactive player reading one token per line.
pub struct CliPlayer {
    input: Box<dyn BufRead>,
}

impl CliPlayer {
    /// Read moves from stdin.
    pub fn new() -> Self {
        Self::with_input(Box::new(io::BufReader::new(io::stdin())))
    }

    /// Read moves from any line source.
    pub fn with_input(input: Box<dyn BufRead>) -> Self {
        Self { input }
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for CliPlayer {
    fn select_action(
        &mut self,
        grid: &Grid,
        legal: &[bool; NUM_DIRECTIONS],
    ) -> anyhow::Result<Option<Direction>> {
        print_board(grid);
        print_legal_moves(legal);
        loop {
            std::print!("Move [w/a/s/d, q to quit, help]: ");
            io::stdout().flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                return Ok(None);
            }
            if line.eq_ignore_ascii_case("help") {
                print_help();
                continue;
            }
            match line.parse::<Direction>() {
                Ok(direction) => {
                    if !legal[direction.index()] {
                        std::println!("✗ Moving {} changes nothing; a tile still spawns.", direction);
                    }
                    return Ok(Some(direction));
                }
                Err(e) => std::println!("✗ {}", e),
            }
        }
    }

    fn handle_step(&mut self, direction: Direction, step: &Step<Cells>) {
        if step.reward > 0 {
            std::println!(
                "\n{} merged for +{} (score {})",
                direction,
                step.reward,
                step.info.score
            );
        } else {
            std::println!("\n{} (score {})", direction, step.info.score);
        }
    }
}

fn print_help() {
    std::println!("\n╔════════════════════════════════════════╗");
    std::println!("║                 HELP                   ║");
    std::println!("╠════════════════════════════════════════╣");
    std::println!("║  w / up     slide tiles up             ║");
    std::println!("║  a / left   slide tiles left           ║");
    std::println!("║  s / down   slide tiles down           ║");
    std::println!("║  d / right  slide tiles right          ║");
    std::println!("║  q          quit the game              ║");
    std::println!("║                                        ║");
    std::println!("║  Equal tiles merge once per move. The  ║");
    std::println!("║  game ends at 2048 or when stuck.      ║");
    std::println!("╚════════════════════════════════════════╝\n");
}
