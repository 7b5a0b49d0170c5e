//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading.

use crate::error::CliError;
use incpath::{Config, ConfigBuilder};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file, replacing discovery.
    pub config: Option<PathBuf>,
}

/// Load layered configuration with `overrides` on top.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Command-line flags (highest priority)
/// 2. Environment variables
/// 3. The `--config` file, or discovered project files
pub fn load_configuration(global: &GlobalOptions, overrides: Config) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        if !path.is_file() {
            return Err(CliError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        builder = builder.with_config_file(path);
    }

    let config = builder.with_config(overrides).build()?;
    Ok(config)
}

/// `Some(list)` unless `list` is empty.
pub fn non_empty(list: Vec<PathBuf>) -> Option<Vec<PathBuf>> {
    if list.is_empty() {
        None
    } else {
        Some(list)
    }
}
