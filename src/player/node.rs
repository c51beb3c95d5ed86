use crate::core::GameStatus;
use crate::env::{Environment, Game2048Env};

use super::Player;

/// Final statistics of one episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct EpisodeSummary {
    pub seed: u64,
    pub score: u64,
    pub moves: u32,
    pub max_tile: u32,
    pub status: GameStatus,
}

/// Drives one player against one environment.
pub struct PlayerNode {
    player: Box<dyn Player>,
    env: Game2048Env,
}

impl PlayerNode {
    pub fn new(player: Box<dyn Player>, env: Game2048Env) -> Self {
        Self { player, env }
    }

    /// Environment being played.
    pub fn env(&self) -> &Game2048Env {
        &self.env
    }

    /// Play until the board is terminal or the player stops supplying moves.
    pub fn run(&mut self) -> anyhow::Result<EpisodeSummary> {
        while !self.env.is_done() {
            let grid = *self.env.engine().grid();
            let legal = self.env.legal_actions();
            let Some(direction) = self.player.select_action(&grid, &legal)? else {
                log::info!("player stopped after {} moves", self.env.moves());
                break;
            };
            let step = self.env.step(direction)?;
            self.player.handle_step(direction, &step);
        }
        let summary = self.summary();
        log::info!(
            "episode finished: status={:?} score={} moves={} max_tile={}",
            summary.status,
            summary.score,
            summary.moves,
            summary.max_tile
        );
        Ok(summary)
    }

    /// Statistics of the episode so far.
    pub fn summary(&self) -> EpisodeSummary {
        EpisodeSummary {
            seed: self.env.engine().seed(),
            score: self.env.score(),
            moves: self.env.moves(),
            max_tile: self.env.engine().grid().max_tile(),
            status: self.env.status(),
        }
    }
}
