// SPDX-License-Identifier: MIT OR Apache-2.0

//! Committing cluster moves and clearing the edge band

use crate::{
    board::{edge_coords, Board, Cell},
    Color, Coord,
};

/// What a single move did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveFootprint {
    /// Black stones overwritten in the destination footprint
    pub black_overwritten: u8,
    /// White stones overwritten in the destination footprint
    pub white_overwritten: u8,
}

impl MoveFootprint {
    /// Stones of `color` that were overwritten
    pub fn overwritten(&self, color: Color) -> u8 {
        match color {
            Color::Black => self.black_overwritten,
            Color::White => self.white_overwritten,
        }
    }
}

/// Lift the cluster at `from` and set it down at `to`.
///
/// The destination footprint is replaced cell for cell, empties included,
/// so any opponent stone under it is gone. Overlapping footprints are fine:
/// the source is read out before anything is written. Both centers must be
/// interior; the session only calls this after the move checks pass.
pub fn apply(board: &mut Board, from: Coord, to: Coord) -> MoveFootprint {
    let lifted: [Cell; 9] = board.neighborhood(from);

    for cell in from.neighborhood() {
        board.set(cell, None);
    }

    let mut footprint = MoveFootprint::default();
    for (target, stone) in to.neighborhood().into_iter().zip(lifted) {
        match board.get(target) {
            Some(Color::Black) => footprint.black_overwritten += 1,
            Some(Color::White) => footprint.white_overwritten += 1,
            None => {}
        }
        board.set(target, stone);
    }
    footprint
}

/// Empty every cell of the edge band.
///
/// Runs after every committed move whether or not the move reached the
/// edge. Returns the number of stones removed.
pub fn clean_edges(board: &mut Board) -> usize {
    let mut removed = 0;
    for coord in edge_coords() {
        if board.remove(coord).is_some() {
            removed += 1;
        }
    }
    removed
}
