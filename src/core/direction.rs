//! Move directions and their encodings.

use core::fmt;
use core::str::FromStr;

use crate::core::common::EngineError;
use crate::core::config::NUM_DIRECTIONS;

/// Direction of a move. The discriminant order matches the numeric action
/// space: `0 = Left, 1 = Up, 2 = Right, 3 = Down`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// All directions in action-index order.
    pub const ALL: [Direction; NUM_DIRECTIONS] =
        [Direction::Left, Direction::Up, Direction::Right, Direction::Down];

    /// Counter-clockwise quarter turns that make this direction "left".
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Direction::Left => 0,
            Direction::Up => 1,
            Direction::Right => 2,
            Direction::Down => 3,
        }
    }

    /// Position in the numeric action space.
    pub const fn index(self) -> usize {
        self.quarter_turns() as usize
    }

    /// Keyboard token used by the text adapter.
    pub const fn token(self) -> char {
        match self {
            Direction::Left => 'a',
            Direction::Up => 'w',
            Direction::Right => 'd',
            Direction::Down => 's',
        }
    }

    /// Map a numeric action onto a direction.
    pub fn from_index(index: usize) -> Result<Self, EngineError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(EngineError::InvalidActionIndex(index))
    }

    /// Map a keyboard token (`a`, `w`, `d`, `s`; any case) onto a direction.
    pub fn from_token(token: char) -> Result<Self, EngineError> {
        match token.to_ascii_lowercase() {
            'a' => Ok(Direction::Left),
            'w' => Ok(Direction::Up),
            'd' => Ok(Direction::Right),
            's' => Ok(Direction::Down),
            _ => Err(EngineError::InvalidDirectionToken(token)),
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = EngineError;

    fn try_from(token: char) -> Result<Self, Self::Error> {
        Direction::from_token(token)
    }
}

impl TryFrom<usize> for Direction {
    type Error = EngineError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Direction::from_index(index)
    }
}

impl FromStr for Direction {
    type Err = EngineError;

    /// Accepts a single token character or a direction name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        if let (Some(token), None) = (chars.next(), chars.next()) {
            return Direction::from_token(token);
        }
        if s.eq_ignore_ascii_case("left") {
            Ok(Direction::Left)
        } else if s.eq_ignore_ascii_case("up") {
            Ok(Direction::Up)
        } else if s.eq_ignore_ascii_case("right") {
            Ok(Direction::Right)
        } else if s.eq_ignore_ascii_case("down") {
            Ok(Direction::Down)
        } else {
            Err(EngineError::UnknownDirection)
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}
