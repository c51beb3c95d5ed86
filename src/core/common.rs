//! Errors shared by the engine and the environment adapter.

/// Errors returned by grid, engine and environment operations.
///
/// Variants split into two families: invalid arguments (bad tokens, indices
/// or exponents) and invalid operations (a move on a finished episode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Direction token outside `a`/`w`/`d`/`s`.
    InvalidDirectionToken(char),
    /// Direction name that is neither a token nor `left`/`up`/`right`/`down`.
    UnknownDirection,
    /// Numeric action outside `0..4`.
    InvalidActionIndex(usize),
    /// Cell exponent above the maximum tile.
    ExponentOutOfRange { row: usize, col: usize, exponent: u8 },
    /// Row or column outside the board.
    IndexOutOfBounds { row: usize, col: usize },
    /// Move requested after the episode reached a terminal state.
    GameOver,
}

impl EngineError {
    /// Returns `true` for the invalid-argument family.
    pub fn is_invalid_argument(&self) -> bool {
        !self.is_invalid_operation()
    }

    /// Returns `true` for the invalid-operation family.
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, EngineError::GameOver)
    }
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EngineError::InvalidDirectionToken(token) => {
                write!(f, "InvalidArgument: unknown direction token '{}'", token)
            }
            EngineError::UnknownDirection => write!(f, "InvalidArgument: unknown direction name"),
            EngineError::InvalidActionIndex(index) => {
                write!(f, "InvalidArgument: action index {} is outside 0..4", index)
            }
            EngineError::ExponentOutOfRange { row, col, exponent } => write!(
                f,
                "InvalidArgument: exponent {} at row={}, col={} exceeds {}",
                exponent,
                row,
                col,
                crate::core::config::MAX_EXPONENT
            ),
            EngineError::IndexOutOfBounds { row, col } => {
                write!(f, "InvalidArgument: row={}, col={} is off the board", row, col)
            }
            EngineError::GameOver => {
                write!(f, "InvalidOperation: move requested on terminal board")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}
