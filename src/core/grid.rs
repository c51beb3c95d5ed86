//! The fixed 4×4 board of cell exponents and the move algorithm over it.
//!
//! A cell holds `0` when empty and `k` for a tile of face value `2^k`. Every
//! direction is handled by rotating the board so that the direction becomes
//! "left", running a single left sweep, and rotating back.

use core::fmt;

use crate::core::common::EngineError;
use crate::core::config::{face_value, BOARD_SIZE, MAX_EXPONENT, NUM_DIRECTIONS, WIN_EXPONENT};
use crate::core::direction::Direction;

/// One row of cell exponents.
pub type Row = [u8; BOARD_SIZE];
/// Raw row-major cell exponents; this is also the observation handed to agents.
pub type Cells = [Row; BOARD_SIZE];

/// A 4×4 board of cell exponents in `0..=MAX_EXPONENT`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "Cells", into = "Cells"))]
pub struct Grid {
    cells: Cells,
}

impl Grid {
    /// Board with every cell empty.
    pub const EMPTY: Grid = Grid {
        cells: [[0; BOARD_SIZE]; BOARD_SIZE],
    };

    /// Create an empty board.
    #[inline]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Build a board from raw exponents, rejecting values above the maximum tile.
    pub fn from_rows(cells: Cells) -> Result<Self, EngineError> {
        for (row, values) in cells.iter().enumerate() {
            for (col, &exponent) in values.iter().enumerate() {
                if exponent > MAX_EXPONENT {
                    return Err(EngineError::ExponentOutOfRange { row, col, exponent });
                }
            }
        }
        Ok(Grid { cells })
    }

    /// Borrow the raw exponents.
    #[inline]
    pub fn rows(&self) -> &Cells {
        &self.cells
    }

    /// Consume the board and return the raw exponents.
    #[inline]
    pub fn into_rows(self) -> Cells {
        self.cells
    }

    /// Exponent at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<u8, EngineError> {
        check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Write an exponent at (row, col).
    pub fn set(&mut self, row: usize, col: usize, exponent: u8) -> Result<(), EngineError> {
        check_bounds(row, col)?;
        if exponent > MAX_EXPONENT {
            return Err(EngineError::ExponentOutOfRange { row, col, exponent });
        }
        self.cells[row][col] = exponent;
        Ok(())
    }

    /// Returns `true` if at least one cell is empty.
    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().flatten().any(|&c| c == 0)
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == 0).count()
    }

    /// Number of occupied cells.
    pub fn tile_count(&self) -> usize {
        BOARD_SIZE * BOARD_SIZE - self.empty_count()
    }

    /// Iterator over the `(row, col)` positions of empty cells.
    #[inline]
    pub fn iter_empty(&self) -> EmptyCells<'_> {
        EmptyCells { grid: self, idx: 0 }
    }

    /// Largest exponent on the board (0 for an empty board).
    pub fn max_exponent(&self) -> u8 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Face value of the largest tile.
    pub fn max_tile(&self) -> u32 {
        face_value(self.max_exponent())
    }

    /// Sum of face values over the board.
    pub fn tile_sum(&self) -> u64 {
        self.cells
            .iter()
            .flatten()
            .map(|&c| u64::from(face_value(c)))
            .sum()
    }

    /// Face values instead of exponents, with empty cells as 0.
    pub fn face_values(&self) -> [[u32; BOARD_SIZE]; BOARD_SIZE] {
        core::array::from_fn(|r| core::array::from_fn(|c| face_value(self.cells[r][c])))
    }

    /// Copy of the board rotated counter-clockwise by `quarter_turns`.
    pub fn rotated(&self, quarter_turns: u8) -> Grid {
        let mut cells = self.cells;
        for _ in 0..quarter_turns % 4 {
            cells = rotate_ccw(&cells);
        }
        Grid { cells }
    }

    /// Compact and merge every row towards column 0, returning the merge reward.
    pub fn sweep_left(&mut self) -> u32 {
        self.cells.iter_mut().map(sweep_row).sum()
    }

    /// Returns `true` if sweeping left would change at least one row.
    pub fn can_sweep_left(&self) -> bool {
        self.cells.iter().any(row_can_sweep_left)
    }

    /// Board after moving in `direction`, without spawning, and the merge reward.
    pub fn slide(&self, direction: Direction) -> (Grid, u32) {
        let turns = direction.quarter_turns();
        let mut view = self.rotated(turns);
        let reward = view.sweep_left();
        (view.rotated((4 - turns) % 4), reward)
    }

    /// Returns `true` if moving in `direction` would change the board.
    pub fn can_slide(&self, direction: Direction) -> bool {
        self.rotated(direction.quarter_turns()).can_sweep_left()
    }

    /// Legality of each direction in action-index order.
    pub fn legal_moves(&self) -> [bool; NUM_DIRECTIONS] {
        Direction::ALL.map(|d| self.can_slide(d))
    }

    /// Returns `true` if a 2048 tile is on the board.
    pub fn has_won(&self) -> bool {
        self.cells.iter().flatten().any(|&c| c == WIN_EXPONENT)
    }

    /// Won, or no direction changes the board.
    pub fn is_terminal(&self) -> bool {
        self.has_won() || !Direction::ALL.iter().any(|&d| self.can_slide(d))
    }
}

#[inline]
fn check_bounds(row: usize, col: usize) -> Result<(), EngineError> {
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        Err(EngineError::IndexOutOfBounds { row, col })
    } else {
        Ok(())
    }
}

/// One counter-clockwise quarter turn: `out[i][j] = cells[j][n - 1 - i]`.
fn rotate_ccw(cells: &Cells) -> Cells {
    core::array::from_fn(|i| core::array::from_fn(|j| cells[j][BOARD_SIZE - 1 - i]))
}

/// Slide and merge one row towards index 0.
///
/// Cells are visited in index order and each walks left one slot at a time.
/// `boundary` is the index of the last slot produced by a merge in this row;
/// no cell may walk onto or past it, so a merged tile never merges again
/// within the same move. Two 2048 tiles do not merge; the board is already
/// won and exponents stay within `MAX_EXPONENT`.
pub(crate) fn sweep_row(row: &mut Row) -> u32 {
    let mut reward = 0;
    let mut boundary: Option<usize> = None;
    for col in 1..BOARD_SIZE {
        let value = row[col];
        if value == 0 {
            continue;
        }
        let mut pos = col;
        while pos > 0 && boundary.map_or(true, |b| pos - 1 > b) {
            let target = pos - 1;
            if row[target] == 0 {
                row[target] = value;
                row[pos] = 0;
                pos = target;
            } else if row[target] == value && value < MAX_EXPONENT {
                row[target] += 1;
                row[pos] = 0;
                reward += face_value(row[target]);
                boundary = Some(target);
                break;
            } else {
                break;
            }
        }
    }
    reward
}

/// A row can move left if two equal mergeable tiles touch or a tile sits
/// after a gap.
fn row_can_sweep_left(row: &Row) -> bool {
    let mut gap = false;
    let mut previous: Option<u8> = None;
    for &cell in row {
        if cell != 0 && cell < MAX_EXPONENT && previous == Some(cell) {
            return true;
        }
        previous = Some(cell);
        if cell == 0 {
            gap = true;
        } else if gap {
            return true;
        }
    }
    false
}

impl TryFrom<Cells> for Grid {
    type Error = EngineError;

    fn try_from(cells: Cells) -> Result<Self, Self::Error> {
        Grid::from_rows(cells)
    }
}

impl From<Grid> for Cells {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}x{}>:", BOARD_SIZE, BOARD_SIZE)?;
        for row in self.cells.iter() {
            for cell in row.iter() {
                write!(f, "{:>3}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Face values, one row per line, 0 for empty cells.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "[")?;
            for (c, &cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>4}", face_value(cell))?;
            }
            write!(f, "]")?;
            if r + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the empty cells of a grid in row-major order.
#[derive(Clone, Copy)]
pub struct EmptyCells<'a> {
    grid: &'a Grid,
    idx: usize,
}

impl<'a> Iterator for EmptyCells<'a> {
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < BOARD_SIZE * BOARD_SIZE {
            let (r, c) = (self.idx / BOARD_SIZE, self.idx % BOARD_SIZE);
            self.idx += 1;
            if self.grid.cells[r][c] == 0 {
                return Some((r, c));
            }
        }
        None
    }
}
