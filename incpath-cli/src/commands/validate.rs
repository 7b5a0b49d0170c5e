//! Command to validate incpath configuration files.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use incpath::config::{ConfigLoader, ConfigValidator};
use std::path::PathBuf;

/// Validate an incpath configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate (defaults to `--config` or the
    /// discovered project files)
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: Option<PathBuf>,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Decide which files to check
        let paths = match self.config_path.or_else(|| global.config.clone()) {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::InvalidArguments(format!(
                        "File not found: {}",
                        path.display()
                    )));
                }
                vec![path]
            }
            None => {
                let cwd = std::env::current_dir()?;
                let sources = ConfigLoader::load_all(&cwd).map_err(|e| {
                    eprintln!("Parse error: {e}");
                    CliError::SemanticFailure("Configuration file is invalid".to_string())
                })?;
                if sources.is_empty() {
                    return Err(CliError::InvalidArguments(
                        "No configuration file found".to_string(),
                    ));
                }
                sources.into_iter().map(|s| s.path).collect()
            }
        };

        // 2. Parse and validate each one
        for path in &paths {
            let config = match ConfigLoader::load_file(path) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Parse error: {e}");
                    return Err(CliError::SemanticFailure(
                        "Configuration file is invalid".to_string(),
                    ));
                }
            };

            if let Err(e) = ConfigValidator::validate(&config) {
                eprintln!("Validation error in {}: {e}", path.display());
                return Err(CliError::SemanticFailure(
                    "Configuration validation failed".to_string(),
                ));
            }
        }

        println!("Configuration is valid");
        Ok(())
    }
}
