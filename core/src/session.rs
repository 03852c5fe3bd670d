// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turn and state machine for a single game
//!
//! Every move attempt is all-or-nothing: the board, status and player to
//! move are only touched once every check, including the speculative
//! self-elimination check, has passed.

use serde::{Deserialize, Serialize};

use crate::{
    board::Board,
    cluster, coord, executor,
    rings::{self, RingCount},
    rules::MoveValidator,
    Color, Coord, Direction, GameError, GameStatus,
};

/// Report for a committed move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Who moved
    pub mover: Color,
    /// Source center
    pub from: Coord,
    /// Destination center
    pub to: Coord,
    /// Direction of travel
    pub direction: Direction,
    /// Opponent stones overwritten by the destination footprint
    pub captured: u8,
    /// Stones swept off the edge band after the move
    pub edge_removed: usize,
    /// Ring counts after the move
    pub rings: RingCount,
    /// Game status after the move
    pub status: GameStatus,
}

/// A game in progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    /// Live board
    board: Board,
    /// The player whose turn it is
    current_player: Color,
    /// Overall status
    status: GameStatus,
}

impl GameSession {
    /// Start a game from the standard layout with Black to move
    pub fn new() -> Self {
        Self::with_board(Board::starting(), Color::Black)
    }

    /// Start a game from an arbitrary position.
    ///
    /// The edge band is cleared on entry. The status starts as unfinished
    /// even if one side has no ring yet; it is only decided by moves.
    pub fn with_board(mut board: Board, to_move: Color) -> Self {
        executor::clean_edges(&mut board);
        Self {
            board,
            current_player: to_move,
            status: GameStatus::Unfinished,
        }
    }

    /// Read-only view of the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Overall status
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Ring counts on the live board
    pub fn rings(&self) -> RingCount {
        rings::count_rings(&self.board)
    }

    /// Check whether a move would be accepted, without making it
    pub fn check_move(&self, from: &str, to: &str) -> Result<Direction, GameError> {
        if self.status.is_finished() {
            return Err(GameError::GameOver);
        }
        let (from, to) = parse_pair(from, to)?;
        self.check_move_coords(from, to)
    }

    /// [`GameSession::check_move`] for already-parsed coordinates
    pub fn check_move_coords(&self, from: Coord, to: Coord) -> Result<Direction, GameError> {
        if self.status.is_finished() {
            return Err(GameError::GameOver);
        }

        let player = self.current_player;
        cluster::check_selectable(&self.board, from, player)?;
        let direction = MoveValidator::new(&self.board, player).check_move(from, to)?;

        let mut scratch = self.board.clone();
        executor::apply(&mut scratch, from, to);
        executor::clean_edges(&mut scratch);
        if rings::count_rings(&scratch).of(player) == 0 {
            return Err(GameError::SelfElimination);
        }

        Ok(direction)
    }

    /// Move the current player's cluster centered at `from` to `to`.
    ///
    /// On rejection nothing changes and the same player is still to move.
    pub fn make_move(&mut self, from: &str, to: &str) -> Result<MoveOutcome, GameError> {
        if self.status.is_finished() {
            tracing::debug!(from, to, "move attempted after game end");
            return Err(GameError::GameOver);
        }
        let (from, to) = parse_pair(from, to)
            .inspect_err(|e| tracing::debug!(error = %e, "move rejected"))?;
        self.make_move_coords(from, to)
    }

    /// [`GameSession::make_move`] for already-parsed coordinates
    pub fn make_move_coords(&mut self, from: Coord, to: Coord) -> Result<MoveOutcome, GameError> {
        let mover = self.current_player;
        let direction = self.check_move_coords(from, to).inspect_err(|e| {
            tracing::debug!(player = %mover, %from, %to, error = %e, "move rejected")
        })?;

        let footprint = executor::apply(&mut self.board, from, to);
        let edge_removed = executor::clean_edges(&mut self.board);
        let rings = rings::count_rings(&self.board);
        self.status = GameStatus::from_ring_counts(rings);

        tracing::info!(
            player = %mover,
            %from,
            %to,
            %direction,
            captured = footprint.overwritten(mover.opposite()),
            edge_removed,
            black_rings = rings.black,
            white_rings = rings.white,
            "move committed"
        );

        if self.status.is_finished() {
            tracing::info!(status = %self.status, "game over");
        } else {
            self.current_player = mover.opposite();
        }

        Ok(MoveOutcome {
            mover,
            from,
            to,
            direction,
            captured: footprint.overwritten(mover.opposite()),
            edge_removed,
            rings,
            status: self.status,
        })
    }

    /// The current player concedes; the opponent wins.
    ///
    /// This always succeeds and overwrites any earlier result.
    pub fn resign(&mut self) {
        if self.status.is_finished() {
            tracing::warn!(status = %self.status, "resign called on a finished game");
        }
        let winner = self.current_player.opposite();
        self.status = GameStatus::won_by(winner);
        tracing::info!(loser = %self.current_player, status = %self.status, "player resigned");
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_pair(from: &str, to: &str) -> Result<(Coord, Coord), GameError> {
    Ok((coord::parse(from)?, coord::parse(to)?))
}
