use std::collections::VecDeque;

use crate::core::{Direction, EngineError, Grid, NUM_DIRECTIONS};

use super::Player;

/// Replays a fixed sequence of moves, then stops.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    queue: VecDeque<Direction>,
}

impl ScriptedPlayer {
    pub fn new<I>(moves: I) -> Self
    where
        I: IntoIterator<Item = Direction>,
    {
        Self {
            queue: moves.into_iter().collect(),
        }
    }

    /// Parse a token string such as `"wasd"`. Whitespace and commas are
    /// ignored; any other character outside `a`/`w`/`d`/`s` is rejected.
    pub fn from_tokens(tokens: &str) -> Result<Self, EngineError> {
        let queue = tokens
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(Direction::from_token)
            .collect::<Result<VecDeque<_>, _>>()?;
        Ok(Self { queue })
    }

    /// Moves not yet played.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl Player for ScriptedPlayer {
    fn select_action(
        &mut self,
        _grid: &Grid,
        _legal: &[bool; NUM_DIRECTIONS],
    ) -> anyhow::Result<Option<Direction>> {
        Ok(self.queue.pop_front())
    }
}
