#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;
pub mod spaces;
#[cfg(feature = "std")]
pub mod env;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod player;
#[cfg(feature = "std")]
pub mod prelude;
#[cfg(feature = "std")]
pub mod ui;

pub use crate::core::*;
pub use spaces::{BoxSpace, Discrete};
#[cfg(feature = "std")]
pub use env::{Environment, Game2048Env, Step, StepInfo};
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV_VAR};
#[cfg(feature = "std")]
pub use player::{CliPlayer, EpisodeSummary, Player, PlayerNode, ScriptedPlayer};
#[cfg(feature = "std")]
pub use ui::{print_board, print_summary, render_board};
