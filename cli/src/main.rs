// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gess CLI - play Gess in the terminal
//!
//! Two players share one terminal and take turns typing moves. With
//! `--script` the moves are read from a file instead, which is handy for
//! replaying games and for tests.

use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use gess_cli::{run, CliConfig};
use gess_core::GameSession;
use tracing_subscriber::EnvFilter;

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(name = "gess-cli", about = "Play Gess in the terminal", version)]
struct Args {
    /// JSON config file
    #[clap(long)]
    config: Option<PathBuf>,

    /// Read moves from this file instead of stdin
    #[clap(long)]
    script: Option<PathBuf>,

    /// Enable debug logging
    #[clap(long)]
    debug: bool,

    /// Draw stones with plain ASCII symbols
    #[clap(long)]
    ascii: bool,
}

/// Main entry point
fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    if args.ascii {
        config = config.with_ascii_symbols();
    }

    init_logging(&config, args.debug)?;
    tracing::info!(script = ?args.script, "starting gess-cli");

    let mut game = GameSession::new();
    let stdout = io::stdout();

    match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            run(&mut game, &config, BufReader::new(file), stdout.lock())?;
        }
        None => {
            println!("Type 'help' for commands.");
            run(&mut game, &config, io::stdin().lock(), stdout.lock())?;
        }
    }

    tracing::info!(status = %game.status(), "session ended");
    Ok(())
}

/// Install the tracing subscriber. `RUST_LOG` wins over the config file,
/// and `--debug` wins over both.
fn init_logging(config: &CliConfig, debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.log_filter))
            .context("invalid log filter")?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))?;

    Ok(())
}
