// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line-driven game loop

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use gess_core::GameSession;

use crate::{
    command::{self, Command, HELP},
    config::CliConfig,
    render::{render_board, render_status},
};

/// Drive `game` from `input` until the game ends, the player quits, or the
/// input runs out.
///
/// Rejected moves and unreadable lines are reported on `output` and the same
/// player is asked again.
pub fn run<R: BufRead, W: Write>(
    game: &mut GameSession,
    config: &CliConfig,
    input: R,
    mut output: W,
) -> Result<()> {
    let _span = tracing::info_span!("cli.play").entered();

    print_position(game, config, &mut output)?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;

        let command = match command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        match command {
            Command::Move { from, to } => match game.make_move(&from, &to) {
                Ok(outcome) => {
                    if outcome.captured > 0 {
                        writeln!(
                            output,
                            "{} {}-{} captures {}",
                            outcome.mover, outcome.from, outcome.to, outcome.captured
                        )?;
                    }
                    print_position(game, config, &mut output)?;
                }
                Err(e) => {
                    writeln!(output, "Illegal move {}-{}: {}", from, to, e)?;
                    writeln!(output, "{}", render_status(game))?;
                }
            },
            Command::Resign => {
                let loser = game.current_player();
                game.resign();
                writeln!(output, "{} resigns", loser)?;
                writeln!(output, "{}", render_status(game))?;
            }
            Command::Board => print_position(game, config, &mut output)?,
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Quit => break,
        }

        if game.status().is_finished() {
            break;
        }
    }

    output.flush()?;
    Ok(())
}

fn print_position<W: Write>(game: &GameSession, config: &CliConfig, output: &mut W) -> Result<()> {
    write!(output, "{}", render_board(game.board(), config))?;
    writeln!(output, "{}", render_status(game))?;
    Ok(())
}
