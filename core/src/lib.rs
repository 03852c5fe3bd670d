// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gess Core - Board, Move Legality and Turn Logic
//!
//! This crate provides the core game functionality including:
//! - The 20x20 Gess board and its fixed starting layout
//! - Coordinate notation (`a1` .. `t20`) and compass directions
//! - Cluster selection, direction/distance/obstruction checks
//! - Move execution with edge cleanup
//! - Ring detection and the turn/state machine driving a game
//!
//! Rendering, input translation, persistence and networking are left to
//! callers; the engine only takes coordinate pairs and resignations.

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod cluster;
pub mod coord;
pub mod executor;
pub mod rings;
pub mod rules;
pub mod session;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use board::{Board, Cell};
pub use coord::Direction;
pub use executor::MoveFootprint;
pub use rings::RingCount;
pub use session::{GameSession, MoveOutcome};

/// Number of cells along each side of the board
pub const BOARD_SIZE: u8 = 20;

/// Largest distance a cluster without a center stone may travel
pub const EMPTY_CENTER_MAX_DISTANCE: u8 = 3;

/// Player color (Black or White)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Black player (moves first)
    Black,
    /// White player
    White,
}

impl Color {
    /// Returns the opposite color
    pub fn opposite(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// Board coordinate
///
/// `x` is the column (0 = `a`) and `y` the row (0 = row `1`). Row indices
/// grow towards the south, so "north" means a smaller `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// X coordinate (column)
    pub x: u8,
    /// Y coordinate (row)
    pub y: u8,
}

impl Coord {
    /// Create a new coordinate
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Check if the coordinate lies on the board at all
    pub fn is_valid(&self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// Check if the coordinate lies in the outer edge band (row/column 0 or 19)
    pub fn is_edge(&self) -> bool {
        let last = BOARD_SIZE - 1;
        self.x == 0 || self.y == 0 || self.x == last || self.y == last
    }

    /// Check if the coordinate can be the center of a cluster or ring
    pub fn is_interior(&self) -> bool {
        self.is_valid() && !self.is_edge()
    }

    /// Step one cell in the given direction.
    ///
    /// Returns `None` when the step would leave the board.
    pub fn step(&self, direction: Direction) -> Option<Coord> {
        self.offset(direction.unit())
    }

    /// Shift by a signed `(dx, dy)` delta, staying on the board
    pub fn offset(&self, (dx, dy): (i8, i8)) -> Option<Coord> {
        let x = self.x as i16 + dx as i16;
        let y = self.y as i16 + dy as i16;
        let size = BOARD_SIZE as i16;
        if (0..size).contains(&x) && (0..size).contains(&y) {
            Some(Coord::new(x as u8, y as u8))
        } else {
            None
        }
    }

    /// The 3x3 neighborhood centered on this coordinate, row by row from
    /// the north-west corner.
    ///
    /// The center must be interior so all nine cells are on the board.
    /// Use [`Board::neighborhood`] to read around any coordinate.
    pub fn neighborhood(&self) -> [Coord; 9] {
        debug_assert!(self.is_interior(), "neighborhood of edge coordinate {self}");
        std::array::from_fn(|i| {
            let (dx, dy) = ((i % 3) as u8, (i / 3) as u8);
            Coord::new(self.x + dx - 1, self.y + dy - 1)
        })
    }
}

/// Overall status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still being accepted
    Unfinished,
    /// Black won; terminal
    BlackWon,
    /// White won; terminal
    WhiteWon,
}

impl GameStatus {
    /// Whether the game has ended
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameStatus::Unfinished)
    }

    /// The winning color, if any
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameStatus::Unfinished => None,
            GameStatus::BlackWon => Some(Color::Black),
            GameStatus::WhiteWon => Some(Color::White),
        }
    }

    /// Status in which `color` has won
    pub fn won_by(color: Color) -> Self {
        match color {
            Color::Black => GameStatus::BlackWon,
            Color::White => GameStatus::WhiteWon,
        }
    }

    /// Decide the status from freshly counted rings.
    ///
    /// Black running out is checked first and White running out second, so
    /// the second check wins if both counts are zero.
    pub fn from_ring_counts(rings: RingCount) -> Self {
        let mut status = GameStatus::Unfinished;
        if rings.black == 0 {
            status = GameStatus::WhiteWon;
        }
        if rings.white == 0 {
            status = GameStatus::BlackWon;
        }
        status
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Unfinished => write!(f, "Unfinished"),
            GameStatus::BlackWon => write!(f, "Black won"),
            GameStatus::WhiteWon => write!(f, "White won"),
        }
    }
}

/// Reasons a move attempt is rejected
///
/// None of these are fatal: the board, status and player to move are left
/// exactly as they were before the attempt.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The coordinate text is malformed or out of range
    #[error("Invalid coordinate: {0:?}")]
    InvalidCoordinate(String),

    /// The selected footprint holds opponent stones or sits on the edge band
    #[error("Selected cluster cannot be moved by this player")]
    IllegalCluster,

    /// The move is not along a compass line or the cluster has no stone on that side
    #[error("Cluster cannot move in that direction")]
    IllegalDirection,

    /// A cluster without a center stone tried to move more than three cells
    #[error("Cluster cannot move that far")]
    IllegalDistance,

    /// A stone lies in the path swept by the cluster
    #[error("Path is obstructed")]
    PathObstructed,

    /// The move would leave the mover without any ring
    #[error("Move would leave the mover without a ring")]
    SelfElimination,

    /// The game has already ended
    #[error("Game is already over")]
    GameOver,
}
