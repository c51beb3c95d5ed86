//! Core 2048 board engine (no_std compatible)
//!
//! This module contains the pure game logic: the grid, the rotation-based move
//! algorithm, legality and terminal checks, and the engine that owns the
//! random source used to spawn tiles. It depends only on `rand` and `log`.

pub mod common;
pub mod config;
pub mod direction;
pub mod game;
pub mod grid;
pub mod rng;

// Re-export commonly used types
pub use common::EngineError;
pub use config::*;
pub use direction::Direction;
pub use game::{GameEngine, GameState, GameStatus, MoveOutcome};
pub use grid::{Cells, EmptyCells, Grid, Row};
pub use rng::StreamPosition;
