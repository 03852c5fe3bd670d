// SPDX-License-Identifier: MIT OR Apache-2.0

use gess_core::{
    board::Board,
    cluster::is_selectable,
    rules::{leading_edge, MoveValidator},
    Color, Coord, Direction, GameError,
};

fn c(text: &str) -> Coord {
    text.parse().unwrap()
}

#[test]
fn cluster_with_opponent_stone_is_never_selectable() {
    let center = c("j10");
    for spoiler in center.neighborhood() {
        let mut board = Board::empty();
        // fill the footprint with black, then swap one cell to white
        for cell in center.neighborhood() {
            board.set(cell, Some(Color::Black));
        }
        board.set(spoiler, Some(Color::White));

        assert!(!is_selectable(&board, center, Color::Black), "spoiled at {spoiler}");
        assert!(!is_selectable(&board, center, Color::White), "spoiled at {spoiler}");
    }
}

#[test]
fn direction_needs_a_stone_on_that_side() {
    let center = c("j10");
    for anchored in Direction::ALL {
        let mut board = Board::empty();
        board.set(center, Some(Color::Black));
        board.set(center.step(anchored).unwrap(), Some(Color::Black));
        let validator = MoveValidator::new(&board, Color::Black);

        for attempted in Direction::ALL {
            let target = center.step(attempted).unwrap();
            let result = validator.check_move(center, target);
            if attempted == anchored {
                assert_eq!(result, Ok(attempted));
            } else {
                assert_eq!(result, Err(GameError::IllegalDirection), "{anchored} vs {attempted}");
            }
        }
    }
}

#[test]
fn empty_center_moves_at_most_three() {
    let center = c("j10");
    for direction in Direction::ALL {
        let (dx, dy) = direction.unit();
        let mut board = Board::empty();
        board.set(center.step(direction).unwrap(), Some(Color::White));
        let validator = MoveValidator::new(&board, Color::White);

        let three = center.offset((dx * 3, dy * 3)).unwrap();
        let four = center.offset((dx * 4, dy * 4)).unwrap();
        assert_eq!(validator.check_move(center, three), Ok(direction));
        assert_eq!(
            validator.check_move(center, four),
            Err(GameError::IllegalDistance),
            "{direction}"
        );
    }
}

#[test]
fn center_stone_moves_any_clear_distance() {
    let center = c("j10");
    let mut board = Board::empty();
    board.set(center, Some(Color::Black));
    board.set(c("k10"), Some(Color::Black));
    let validator = MoveValidator::new(&board, Color::Black);

    assert_eq!(validator.check_move(center, c("s10")), Ok(Direction::East));
}

#[test]
fn any_stone_on_a_swept_edge_blocks() {
    let from = c("j10");
    for direction in Direction::ALL {
        let (dx, dy) = direction.unit();
        let to = from.offset((dx * 4, dy * 4)).unwrap();

        for step in 1..4i8 {
            let center = from.offset((dx * step, dy * step)).unwrap();
            for blocker in leading_edge(center, direction) {
                let mut board = Board::empty();
                board.set(from, Some(Color::Black));
                board.set(from.step(direction).unwrap(), Some(Color::Black));
                board.set(blocker, Some(Color::White));
                let validator = MoveValidator::new(&board, Color::Black);

                assert_eq!(
                    validator.check_move(from, to),
                    Err(GameError::PathObstructed),
                    "{direction} blocked by {blocker}"
                );
            }
        }
    }
}

#[test]
fn stones_beside_the_path_do_not_block() {
    let mut board = Board::empty();
    board.set(c("j10"), Some(Color::Black));
    board.set(c("j9"), Some(Color::Black));
    // one column outside the sliding footprint on each side
    board.set(c("l6"), Some(Color::White));
    board.set(c("h6"), Some(Color::White));
    let validator = MoveValidator::new(&board, Color::Black);

    assert_eq!(validator.check_move(c("j10"), c("j5")), Ok(Direction::North));
}

#[test]
fn diagonal_front_includes_the_leading_corner() {
    let mut board = Board::empty();
    board.set(c("e5"), Some(Color::Black));
    board.set(c("f4"), Some(Color::Black));

    // the corner of the front row and column, one step along the path
    let mut cornered = board.clone();
    cornered.set(c("g3"), Some(Color::White));
    let validator = MoveValidator::new(&cornered, Color::Black);
    assert_eq!(validator.check_move(c("e5"), c("g3")), Err(GameError::PathObstructed));

    // behind the front row, outside every intermediate leading edge
    let mut behind = board;
    behind.set(c("d3"), Some(Color::White));
    let validator = MoveValidator::new(&behind, Color::Black);
    assert_eq!(validator.check_move(c("e5"), c("g3")), Ok(Direction::NorthEast));
}

#[test]
fn gates_report_in_order() {
    let mut board = Board::empty();
    board.set(c("k10"), Some(Color::Black));
    board.set(c("l10"), Some(Color::White));
    let validator = MoveValidator::new(&board, Color::Black);

    // an edge-band destination wins over every other problem
    assert_eq!(validator.check_move(c("j10"), c("t10")), Err(GameError::IllegalCluster));
    // direction is checked before distance
    assert_eq!(validator.check_move(c("j10"), c("j15")), Err(GameError::IllegalDirection));
    // distance is checked before obstruction
    assert_eq!(validator.check_move(c("j10"), c("o10")), Err(GameError::IllegalDistance));
    assert_eq!(validator.check_move(c("j10"), c("m10")), Err(GameError::PathObstructed));
}
