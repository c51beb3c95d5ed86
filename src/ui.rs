#![cfg(feature = "std")]

use std::fmt::Write;

use crate::{
    core::{config::face_value, Direction, Grid, BOARD_SIZE},
    player::EpisodeSummary,
};

const CELL_WIDTH: usize = 6;

/// Render the board with face values (empty cells shown as 0).
pub fn render_board(grid: &Grid) -> String {
    let inner = BOARD_SIZE * CELL_WIDTH;
    let mut out = String::new();
    let _ = writeln!(out, "╔{}╗", "═".repeat(inner));
    for row in grid.rows() {
        out.push('║');
        for &cell in row {
            let _ = write!(out, "{:>width$}", face_value(cell), width = CELL_WIDTH);
        }
        out.push_str("║\n");
    }
    let _ = write!(out, "╚{}╝", "═".repeat(inner));
    out
}

/// Print the board to stdout.
pub fn print_board(grid: &Grid) {
    std::println!("{}", render_board(grid));
}

/// Print which directions currently change the board.
pub fn print_legal_moves(legal: &[bool; 4]) {
    let names: Vec<String> = Direction::ALL
        .iter()
        .zip(legal.iter())
        .filter(|&(_, &ok)| ok)
        .map(|(d, _)| format!("{} ({})", d, d.token()))
        .collect();
    if names.is_empty() {
        std::println!("No legal moves.");
    } else {
        std::println!("Legal moves: {}", names.join(", "));
    }
}

/// Print the end-of-episode summary.
pub fn print_summary(summary: &EpisodeSummary) {
    std::println!("\n════════════════════════════════");
    std::println!("          GAME OVER");
    std::println!("════════════════════════════════");
    std::println!("  Seed:     {}", summary.seed);
    std::println!("  Status:   {:?}", summary.status);
    std::println!("  Score:    {}", summary.score);
    std::println!("  Moves:    {}", summary.moves);
    std::println!("  Max tile: {}", summary.max_tile);
}
