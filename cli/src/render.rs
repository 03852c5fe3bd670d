// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text board rendering for the CLI.

use gess_core::{coord::column_char, Board, Color, Coord, GameSession, GameStatus, BOARD_SIZE};

use crate::config::CliConfig;

/// Render the board as text, row 1 at the top
pub fn render_board(board: &Board, config: &CliConfig) -> String {
    let mut output = String::new();

    if config.show_coordinates {
        push_column_labels(&mut output);
    }

    for y in 0..BOARD_SIZE {
        if config.show_coordinates {
            output.push_str(&format!("{:2} ", y + 1));
        }

        let cells: Vec<&str> = (0..BOARD_SIZE)
            .map(|x| match board.get(Coord::new(x, y)) {
                Some(Color::Black) => config.black_symbol.as_str(),
                Some(Color::White) => config.white_symbol.as_str(),
                None => config.empty_symbol.as_str(),
            })
            .collect();
        output.push_str(&cells.join(" "));

        if config.show_coordinates {
            output.push_str(&format!(" {}", y + 1));
        }
        output.push('\n');
    }

    if config.show_coordinates {
        push_column_labels(&mut output);
    }

    output
}

fn push_column_labels(output: &mut String) {
    let labels: Vec<String> = (0..BOARD_SIZE).map(|x| column_char(x).to_string()).collect();
    output.push_str("   ");
    output.push_str(&labels.join(" "));
    output.push('\n');
}

/// One-line summary of whose turn it is and the ring and stone counts
pub fn render_status(game: &GameSession) -> String {
    let board = game.board();
    let rings = game.rings();
    let counts = format!(
        "rings: Black {}, White {}; stones: Black {}, White {}",
        rings.black,
        rings.white,
        board.count_stones(Color::Black),
        board.count_stones(Color::White)
    );
    match game.status() {
        GameStatus::Unfinished => format!("{} to move ({})", game.current_player(), counts),
        status => format!("Game over: {} ({})", status, counts),
    }
}
