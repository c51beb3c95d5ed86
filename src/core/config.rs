/// Side length of the square board.
pub const BOARD_SIZE: usize = 4;
/// Number of directional actions.
pub const NUM_DIRECTIONS: usize = 4;
/// Largest exponent a cell may hold (2^11 = 2048).
pub const MAX_EXPONENT: u8 = 11;
/// A tile with this exponent ends the game as a win.
pub const WIN_EXPONENT: u8 = 11;
/// Tiles spawned onto a freshly initialized board.
pub const INITIAL_TILES: usize = 2;
/// Probability that a spawned tile is a 2 (exponent 1) rather than a 4.
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// Face value of a cell exponent; an empty cell is worth 0.
pub const fn face_value(exponent: u8) -> u32 {
    if exponent == 0 {
        0
    } else {
        1u32 << exponent
    }
}
