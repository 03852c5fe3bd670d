// SPDX-License-Identifier: MIT OR Apache-2.0

//! Move legality: destination, direction, distance and obstruction checks

use crate::{board::Board, Color, Coord, Direction, GameError, EMPTY_CENTER_MAX_DISTANCE};

/// Validates the geometry of a cluster move
///
/// The gates run in a fixed order and the first failing one decides the
/// rejection reason. Cluster ownership and self-elimination are checked
/// elsewhere; see [`crate::cluster`] and [`crate::session`].
pub struct MoveValidator<'a> {
    /// The board being checked
    board: &'a Board,
    /// The player making the move
    player: Color,
}

impl<'a> MoveValidator<'a> {
    /// Create a new move validator
    pub fn new(board: &'a Board, player: Color) -> Self {
        Self { board, player }
    }

    /// Check if a move is geometrically legal.
    ///
    /// On success returns the compass direction of travel.
    pub fn check_move(&self, from: Coord, to: Coord) -> Result<Direction, GameError> {
        self.check_destination(to)?;
        let direction = self.check_direction(from, to)?;
        self.check_distance(from, to)?;
        self.check_path(from, to, direction)?;
        Ok(direction)
    }

    /// The destination center must not sit on the edge band
    pub fn check_destination(&self, to: Coord) -> Result<(), GameError> {
        if to.is_interior() {
            Ok(())
        } else {
            // Same reason the cluster selector gives for an edge center
            Err(GameError::IllegalCluster)
        }
    }

    /// The move must follow a compass line, and the cluster must have one of
    /// the mover's stones on the side it travels towards.
    pub fn check_direction(&self, from: Coord, to: Coord) -> Result<Direction, GameError> {
        let (dx, dy) = delta(from, to);
        let direction = Direction::from_delta(dx, dy).ok_or(GameError::IllegalDirection)?;

        let anchor = from.step(direction).ok_or(GameError::IllegalDirection)?;
        if self.board.get(anchor) != Some(self.player) {
            return Err(GameError::IllegalDirection);
        }
        Ok(direction)
    }

    /// A cluster without its own stone in the center may move at most three cells
    pub fn check_distance(&self, from: Coord, to: Coord) -> Result<(), GameError> {
        if self.board.get(from) == Some(self.player) {
            return Ok(());
        }
        if move_distance(from, to) > EMPTY_CENTER_MAX_DISTANCE as u16 {
            return Err(GameError::IllegalDistance);
        }
        Ok(())
    }

    /// Every intermediate position must have an empty leading edge.
    ///
    /// A single-step move has no intermediate positions and is never blocked.
    pub fn check_path(&self, from: Coord, to: Coord, direction: Direction) -> Result<(), GameError> {
        let (ux, uy) = direction.unit();
        let distance = move_distance(from, to) as i8;

        for k in 1..distance {
            let Some(center) = from.offset((ux * k, uy * k)) else {
                return Err(GameError::PathObstructed);
            };
            if let Some(blocker) = leading_edge(center, direction)
                .into_iter()
                .find(|c| self.board.get(*c).is_some())
            {
                tracing::debug!(%from, %to, %blocker, "path obstructed");
                return Err(GameError::PathObstructed);
            }
        }
        Ok(())
    }
}

/// Signed `(dx, dy)` from one coordinate to another
pub fn delta(from: Coord, to: Coord) -> (i16, i16) {
    (
        to.x as i16 - from.x as i16,
        to.y as i16 - from.y as i16,
    )
}

/// Number of steps along the longer axis
pub fn move_distance(from: Coord, to: Coord) -> u16 {
    let (dx, dy) = delta(from, to);
    dx.unsigned_abs().max(dy.unsigned_abs())
}

/// The cells on the front of a cluster centered at `center` when it travels
/// in `direction`.
///
/// Orthogonal travel gives the three cells of the front row or column.
/// Diagonal travel gives both the front row and the front column, five
/// distinct cells sharing the leading corner.
pub fn leading_edge(center: Coord, direction: Direction) -> Vec<Coord> {
    let (dx, dy) = direction.unit();
    let mut cells = Vec::with_capacity(5);

    if dy != 0 {
        cells.extend((-1..=1).filter_map(|k| center.offset((k, dy))));
    }
    if dx != 0 {
        for k in -1..=1 {
            if let Some(c) = center.offset((dx, k)) {
                if !cells.contains(&c) {
                    cells.push(c);
                }
            }
        }
    }
    cells
}
