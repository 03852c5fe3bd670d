// SPDX-License-Identifier: MIT OR Apache-2.0

//! Coordinate notation and compass directions
//!
//! Columns are lettered `a` through `t` (case-insensitive) and rows are
//! numbered `1` through `20`, so `c3` is column 2, row 2 internally.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Coord, GameError, BOARD_SIZE};

/// Parse a coordinate such as `"c3"` or `"T20"`
pub fn parse(text: &str) -> Result<Coord, GameError> {
    let trimmed = text.trim();
    let invalid = || GameError::InvalidCoordinate(text.to_string());

    let mut chars = trimmed.chars();
    let letter = chars.next().ok_or_else(invalid)?.to_ascii_lowercase();
    if !('a'..='t').contains(&letter) {
        return Err(invalid());
    }

    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let row: u8 = digits.parse().map_err(|_| invalid())?;
    if row == 0 || row > BOARD_SIZE {
        return Err(invalid());
    }

    Ok(Coord::new(letter as u8 - b'a', row - 1))
}

/// Column letter for a column index
pub fn column_char(x: u8) -> char {
    (b'a' + x) as char
}

impl FromStr for Coord {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", column_char(self.x), self.y as u16 + 1)
    }
}

/// One of the eight compass directions a cluster can travel in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All eight directions, clockwise from north
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Unit step as `(dx, dy)`; north is negative `dy`
    pub fn unit(&self) -> (i8, i8) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Classify a move delta.
    ///
    /// Returns `None` for a zero delta or for anything that is not purely
    /// horizontal, purely vertical, or an exact 45-degree diagonal.
    pub fn from_delta(dx: i16, dy: i16) -> Option<Direction> {
        if dx != 0 && dy != 0 && dx.abs() != dy.abs() {
            return None;
        }
        let unit = (dx.signum() as i8, dy.signum() as i8);
        Direction::ALL.into_iter().find(|d| d.unit() == unit)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::NorthEast => "north-east",
            Direction::East => "east",
            Direction::SouthEast => "south-east",
            Direction::South => "south",
            Direction::SouthWest => "south-west",
            Direction::West => "west",
            Direction::NorthWest => "north-west",
        };
        f.write_str(name)
    }
}
