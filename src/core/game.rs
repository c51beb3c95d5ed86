use rand::Rng;

use crate::core::{
    config::{BOARD_SIZE, INITIAL_TILES, NUM_DIRECTIONS, SPAWN_TWO_PROBABILITY},
    direction::Direction,
    grid::Grid,
    rng::{StreamPosition, TrackedRng},
};

/// Result of a single move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveOutcome {
    /// Board after the slide and the spawn.
    pub grid: Grid,
    /// Sum of face values of the tiles created by merges.
    pub reward: u32,
    /// Whether the board is terminal after this move.
    pub terminal: bool,
    /// Whether the slide changed the board before the spawn.
    pub moved: bool,
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    /// A 2048 tile is on the board.
    Won,
    /// No direction changes the board.
    Lost,
}

impl GameStatus {
    /// Returns `true` for `Won` and `Lost`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Serializable snapshot of an engine, including how far its random stream
/// has advanced since `seed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub grid: Grid,
    pub seed: u64,
    pub position: StreamPosition,
}

/// Board engine: owns the grid and the random source that spawns tiles.
#[derive(Clone, Debug)]
pub struct GameEngine {
    grid: Grid,
    rng: TrackedRng,
    seed: u64,
}

impl GameEngine {
    /// Create an engine seeded with `seed` and spawn the opening tiles.
    pub fn new(seed: u64) -> Self {
        let mut engine = Self::with_grid(Grid::EMPTY, seed);
        engine.initialize();
        engine
    }

    /// Create an engine around an existing board without spawning anything.
    pub fn with_grid(grid: Grid, seed: u64) -> Self {
        Self {
            grid,
            rng: TrackedRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Restore an engine from a snapshot. The restored engine spawns exactly
    /// the tiles the snapshotted one would have.
    pub fn from_state(state: GameState) -> Self {
        Self {
            grid: state.grid,
            rng: TrackedRng::resume(state.seed, state.position),
            seed: state.seed,
        }
    }

    /// Snapshot of the board and seed.
    pub fn state(&self) -> GameState {
        GameState {
            grid: self.grid,
            seed: self.seed,
            position: self.rng.position(),
        }
    }

    /// Seed the random source was last seeded with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restart the random source from `seed`. The board is left alone.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = TrackedRng::seed_from_u64(seed);
        self.seed = seed;
    }

    /// Draw a seed for a follow-up episode from the current stream.
    pub fn next_seed(&mut self) -> u64 {
        self.rng.random()
    }

    /// Current board.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Clear the board and spawn the opening tiles.
    pub fn initialize(&mut self) -> Grid {
        self.grid = Grid::EMPTY;
        for _ in 0..INITIAL_TILES {
            self.spawn_tile();
        }
        self.grid
    }

    /// Slide in `direction`, spawn one tile and report the outcome.
    ///
    /// The board is replaced even when the slide changes nothing, and the
    /// call is not refused on a terminal board; callers stop once
    /// `terminal` is reported.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let (slid, reward) = self.grid.slide(direction);
        let moved = slid != self.grid;
        self.grid = slid;
        self.spawn_tile();
        let terminal = self.grid.is_terminal();
        log::trace!(
            "move {} reward={} moved={} terminal={}",
            direction,
            reward,
            moved,
            terminal
        );
        MoveOutcome {
            grid: self.grid,
            reward,
            terminal,
            moved,
        }
    }

    /// Returns `true` if moving in `direction` would change the board.
    pub fn is_legal_move(&self, direction: Direction) -> bool {
        self.grid.can_slide(direction)
    }

    /// Legality of each direction in action-index order.
    pub fn legal_moves(&self) -> [bool; NUM_DIRECTIONS] {
        self.grid.legal_moves()
    }

    /// Returns `true` once the game is won or stuck.
    pub fn is_terminal(&self) -> bool {
        self.grid.is_terminal()
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.grid.has_won() {
            GameStatus::Won
        } else if self.grid.is_terminal() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Place a 2 (90%) or a 4 (10%) on a uniformly chosen empty cell.
    ///
    /// Returns the `(row, col, exponent)` written, or `None` on a full board.
    pub fn spawn_tile(&mut self) -> Option<(usize, usize, u8)> {
        if !self.grid.has_empty_cell() {
            return None;
        }
        let exponent = if self.rng.random::<f64>() < SPAWN_TWO_PROBABILITY {
            1
        } else {
            2
        };
        loop {
            let r = self.rng.random_range(0..BOARD_SIZE);
            let c = self.rng.random_range(0..BOARD_SIZE);
            if self.grid.get(r, c).ok() == Some(0) {
                self.grid.set(r, c, exponent).ok()?;
                log::trace!("spawned exponent {} at ({}, {})", exponent, r, c);
                return Some((r, c, exponent));
            }
        }
    }
}
