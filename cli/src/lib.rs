// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal front end for the Gess engine
//!
//! The binary is a thin wrapper around these modules so the input handling,
//! rendering and configuration can be tested without a terminal.

pub mod command;
pub mod config;
pub mod play;
pub mod render;

pub use command::Command;
pub use config::CliConfig;
pub use play::run;
