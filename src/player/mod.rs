//! Action sources and the episode driver
//!
//! This module defines the Player trait and provides concrete implementations:
//! - CliPlayer: Interactive command-line player reading WASD tokens
//! - ScriptedPlayer: Replays a fixed token sequence
//! - PlayerNode: Drives one Player against one environment until the episode ends

#![cfg(feature = "std")]

use crate::core::{Direction, Grid, NUM_DIRECTIONS};
use crate::env::Step;
use crate::core::Cells;

/// Interface implemented by anything that supplies moves.
///
/// A Player is responsible for:
/// - Choosing the next direction (or ending the episode)
/// - Receiving feedback after each step
pub trait Player {
    /// Choose the next move given the board and the legality of each
    /// direction. `Ok(None)` ends the episode early.
    fn select_action(
        &mut self,
        grid: &Grid,
        legal: &[bool; NUM_DIRECTIONS],
    ) -> anyhow::Result<Option<Direction>>;

    /// Inform the player of the result of its last move.
    fn handle_step(&mut self, _direction: Direction, _step: &Step<Cells>) {}
}

pub mod cli;
pub use cli::CliPlayer;

pub mod scripted;
pub use scripted::ScriptedPlayer;

pub mod node;
pub use node::{EpisodeSummary, PlayerNode};
