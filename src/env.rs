#![cfg(feature = "std")]

//! Reinforcement-learning adapter around [`GameEngine`].
//!
//! Maps the reset / step / render / seed lifecycle onto the engine, keeps
//! per-episode statistics, and refuses moves once an episode has ended.

use rand::Rng;

use crate::core::{Cells, Direction, EngineError, GameEngine, GameStatus, NUM_DIRECTIONS};
use crate::spaces::{BoxSpace, Discrete};

/// Lifecycle of an episodic environment.
pub trait Environment {
    /// Observation handed to the agent.
    type Obs;
    /// Action accepted from the agent.
    type Act;

    /// Start a new episode. `None` derives the next episode's seed from the
    /// current stream, so runs stay reproducible from the first seed.
    fn reset(&mut self, seed: Option<u64>) -> Self::Obs;

    /// Apply one action.
    fn step(&mut self, action: Self::Act) -> Result<Step<Self::Obs>, EngineError>;

    /// Human-readable view of the current state.
    fn render(&self) -> String;

    /// Reseed the random source and return the seed in effect. `None` draws a
    /// fresh seed from the thread RNG.
    fn seed(&mut self, seed: Option<u64>) -> u64;
}

/// Extra information reported with every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct StepInfo {
    /// Cumulative reward of the episode so far.
    pub score: u64,
    /// Moves taken in the episode so far.
    pub moves: u32,
    /// Whether this move changed the board before the spawn.
    pub moved: bool,
    /// Face value of the largest tile.
    pub max_tile: u32,
    pub status: GameStatus,
}

/// Outcome of [`Environment::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct Step<O> {
    pub observation: O,
    pub reward: u32,
    pub terminated: bool,
    pub info: StepInfo,
}

/// 2048 on a 4×4 board.
#[derive(Debug, Clone)]
pub struct Game2048Env {
    engine: GameEngine,
    score: u64,
    moves: u32,
    done: bool,
}

impl Game2048Env {
    /// Create an environment with an initialized board. `None` picks a random seed.
    pub fn new(seed: Option<u64>) -> Self {
        Self::from_engine(GameEngine::new(resolve_seed(seed)))
    }

    /// Wrap an engine as-is, e.g. one built around a known position.
    pub fn from_engine(engine: GameEngine) -> Self {
        let done = engine.is_terminal();
        Self {
            engine,
            score: 0,
            moves: 0,
            done,
        }
    }

    /// Numeric action space: `Discrete(4)` ordered Left, Up, Right, Down.
    pub fn action_space() -> Discrete {
        Discrete::directions()
    }

    /// Observation space: 4×4 exponents in `0..=11`.
    pub fn observation_space() -> BoxSpace {
        BoxSpace::board()
    }

    /// Step with a keyboard token (`a`, `w`, `d`, `s`).
    pub fn step_token(&mut self, token: char) -> Result<Step<Cells>, EngineError> {
        let direction = Direction::from_token(token)?;
        self.step(direction)
    }

    /// Step with a numeric action from [`Self::action_space`].
    pub fn step_index(&mut self, index: usize) -> Result<Step<Cells>, EngineError> {
        let direction = Direction::from_index(index)?;
        self.step(direction)
    }

    /// Underlying engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Current observation.
    pub fn observation(&self) -> Cells {
        self.engine.grid().into_rows()
    }

    /// Legality of each action in action-index order.
    pub fn legal_actions(&self) -> [bool; NUM_DIRECTIONS] {
        self.engine.legal_moves()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn status(&self) -> GameStatus {
        self.engine.status()
    }
}

impl Environment for Game2048Env {
    type Obs = Cells;
    type Act = Direction;

    fn reset(&mut self, seed: Option<u64>) -> Cells {
        let seed = seed.unwrap_or_else(|| self.engine.next_seed());
        self.engine.reseed(seed);
        let grid = self.engine.initialize();
        self.score = 0;
        self.moves = 0;
        self.done = grid.is_terminal();
        log::debug!("reset with seed {}", self.engine.seed());
        grid.into_rows()
    }

    fn step(&mut self, action: Direction) -> Result<Step<Cells>, EngineError> {
        if self.done {
            return Err(EngineError::GameOver);
        }
        let outcome = self.engine.apply_move(action);
        self.score += u64::from(outcome.reward);
        self.moves += 1;
        self.done = outcome.terminal;
        log::debug!(
            "step {} {}: reward={} score={} done={}",
            self.moves,
            action,
            outcome.reward,
            self.score,
            self.done
        );
        Ok(Step {
            observation: outcome.grid.into_rows(),
            reward: outcome.reward,
            terminated: outcome.terminal,
            info: StepInfo {
                score: self.score,
                moves: self.moves,
                moved: outcome.moved,
                max_tile: outcome.grid.max_tile(),
                status: self.engine.status(),
            },
        })
    }

    fn render(&self) -> String {
        crate::ui::render_board(self.engine.grid())
    }

    fn seed(&mut self, seed: Option<u64>) -> u64 {
        let seed = resolve_seed(seed);
        self.engine.reseed(seed);
        seed
    }
}

fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| rand::rng().random())
}
