// SPDX-License-Identifier: MIT OR Apache-2.0

//! Input line parsing

use anyhow::{bail, Result};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move the cluster centered on `from` to `to`.
    ///
    /// The coordinates are kept as text; the engine validates them.
    Move { from: String, to: String },
    /// Concede the game
    Resign,
    /// Print the board again
    Board,
    /// Print the command summary
    Help,
    /// Leave the program
    Quit,
}

/// Short usage text printed by `help`
pub const HELP: &str = "\
Commands:
  <from> <to>   move the cluster centered on <from> to <to>, e.g. 'c3 c6'
  <from>-<to>   same as above, e.g. 'c3-c6'
  resign        concede the game
  board         show the board
  help          show this text
  quit          leave";

/// Parse a single input line.
///
/// Blank lines and lines starting with `#` yield `Ok(None)` so scripts can
/// carry comments.
pub fn parse(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let lowered = line.to_lowercase();
    let command = match lowered.as_str() {
        "resign" => Command::Resign,
        "board" => Command::Board,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => {
            let parts: Vec<&str> = lowered
                .split(|c: char| c.is_whitespace() || c == '-')
                .filter(|part| !part.is_empty())
                .collect();
            match parts.as_slice() {
                [from, to] => Command::Move {
                    from: from.to_string(),
                    to: to.to_string(),
                },
                _ => bail!("Unrecognised input '{}'. Type 'help' for commands.", line),
            }
        }
    };

    Ok(Some(command))
}
