// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cluster selection
//!
//! A cluster is any interior coordinate taken together with its eight
//! neighbors. It is not stored anywhere; it is read off the board at the
//! moment a move is attempted.

use crate::{board::Board, Color, Coord, GameError};

/// Whether `player` may pick up the cluster centered on `center`.
///
/// The center must be off the edge band and no cell of the footprint may
/// hold an opponent stone. A footprint with none of the player's own stones
/// is still selectable; whether it can go anywhere is decided by the
/// direction check.
pub fn is_selectable(board: &Board, center: Coord, player: Color) -> bool {
    if !center.is_interior() {
        return false;
    }
    let opponent = Some(player.opposite());
    board.neighborhood(center).iter().all(|cell| *cell != opponent)
}

/// [`is_selectable`] as a `Result` for use with `?`
pub fn check_selectable(board: &Board, center: Coord, player: Color) -> Result<(), GameError> {
    if is_selectable(board, center, player) {
        Ok(())
    } else {
        Err(GameError::IllegalCluster)
    }
}
