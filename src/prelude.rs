//! Commonly used types and utilities for ease of import.

pub use crate::{
    Direction, EngineError, Environment, Game2048Env, GameEngine, GameStatus, Grid, MoveOutcome,
    Player, PlayerNode, ScriptedPlayer, Step,
};
