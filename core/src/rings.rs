// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ring detection
//!
//! A ring is an empty interior cell whose eight neighbors all hold stones of
//! one color. Clusters overlap, so a single move can make or break rings
//! anywhere near either footprint; counts are always taken from a full scan.

use serde::{Deserialize, Serialize};

use crate::{
    board::{interior_coords, Board},
    Color, Coord,
};

/// Number of rings each player has on a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RingCount {
    /// Black rings
    pub black: usize,
    /// White rings
    pub white: usize,
}

impl RingCount {
    /// Rings belonging to `color`
    pub fn of(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }
}

/// Owner of the ring centered on `center`, if there is one
pub fn ring_at(board: &Board, center: Coord) -> Option<Color> {
    if !center.is_interior() || board.get(center).is_some() {
        return None;
    }
    let cells = board.neighborhood(center);
    let owner = cells[0]?;
    cells
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 4)
        .all(|(_, cell)| *cell == Some(owner))
        .then_some(owner)
}

/// Count every ring on the board
pub fn count_rings(board: &Board) -> RingCount {
    let mut rings = RingCount::default();
    for center in interior_coords() {
        match ring_at(board, center) {
            Some(Color::Black) => rings.black += 1,
            Some(Color::White) => rings.white += 1,
            None => {}
        }
    }
    rings
}
