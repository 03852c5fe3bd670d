// SPDX-License-Identifier: MIT OR Apache-2.0

//! CLI configuration file

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Settings read from the optional `--config` JSON file.
///
/// Every field has a default, so a file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Symbol drawn for a black stone
    pub black_symbol: String,
    /// Symbol drawn for a white stone
    pub white_symbol: String,
    /// Symbol drawn for an empty cell
    pub empty_symbol: String,
    /// Print column letters and row numbers around the board
    pub show_coordinates: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            black_symbol: "●".to_string(),
            white_symbol: "○".to_string(),
            empty_symbol: "+".to_string(),
            show_coordinates: true,
        }
    }
}

impl CliConfig {
    /// Load a config file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Swap the stone symbols for plain ASCII
    pub fn with_ascii_symbols(mut self) -> Self {
        self.black_symbol = "X".to_string();
        self.white_symbol = "O".to_string();
        self.empty_symbol = ".".to_string();
        self
    }
}
