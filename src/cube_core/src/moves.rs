use std::{fmt, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{CubeError, Face};

/// The direction of a quarter turn, as seen from outside the turned face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// The modifier of a move token.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
    Double,
}

impl Turn {
    pub const ALL: [Self; 3] = [Turn::Clockwise, Turn::CounterClockwise, Turn::Double];

    /// The quarter turns this modifier stands for. A double turn is two
    /// clockwise quarter turns.
    #[must_use]
    pub fn quarter_turns(self) -> (Direction, usize) {
        match self {
            Turn::Clockwise => (Direction::Clockwise, 1),
            Turn::CounterClockwise => (Direction::CounterClockwise, 1),
            Turn::Double => (Direction::Clockwise, 2),
        }
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
            Turn::Double => Turn::Double,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::CounterClockwise => "'",
            Turn::Double => "2",
        }
    }
}

/// A single face turn written in standard notation, e.g. `R`, `U'` or `F2`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

impl Move {
    /// Every move of the 3x3x3 in face-major order.
    pub const ALL: [Self; 18] = {
        let mut out = [Move::new(Face::U, Turn::Clockwise); 18];
        let mut i = 0;
        while i < out.len() {
            out[i] = Move::new(Face::ALL[i / 3], Turn::ALL[i % 3]);
            i += 1;
        }
        out
    };

    #[must_use]
    pub const fn new(face: Face, turn: Turn) -> Self {
        Move { face, turn }
    }

    /// The move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Move::new(self.face, self.turn.inverse())
    }
}

impl FromStr for Move {
    type Err = CubeError;

    /// Parse a token like `r`, `U'` or `F2`. Face letters are accepted in
    /// either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CubeError::InvalidMove(s.to_owned());

        let mut chars = s.chars();
        let face = chars.next().and_then(Face::from_letter).ok_or_else(invalid)?;
        let turn = match chars.as_str() {
            "" => Turn::Clockwise,
            "'" => Turn::CounterClockwise,
            "2" => Turn::Double,
            _ => return Err(invalid()),
        };

        Ok(Move::new(face, turn))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.turn.suffix())
    }
}

impl TryFrom<String> for Move {
    type Error = CubeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Move> for String {
    fn from(value: Move) -> Self {
        value.to_string()
    }
}

/// Parse a whitespace separated move sequence. Either every token parses or
/// the first bad token is reported.
///
/// # Errors
///
/// If any token is not a valid move.
pub fn parse_moves(sequence: &str) -> Result<Vec<Move>, CubeError> {
    sequence.split_whitespace().map(str::parse).collect()
}

/// Render a move sequence the way `parse_moves` reads it.
pub fn format_moves<'a>(moves: impl IntoIterator<Item = &'a Move>) -> String {
    moves.into_iter().join(" ")
}

/// The sequence that undoes `moves`.
#[must_use]
pub fn invert_moves(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|move_| move_.inverse()).collect()
}
