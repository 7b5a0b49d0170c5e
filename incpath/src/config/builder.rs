//! Builder assembling the effective configuration from all sources.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds the effective configuration.
///
/// Sources are layered lowest precedence first: discovered project files (or
/// the explicit file given to [`Self::with_config_file`]), then `INCPATH_*`
/// environment variables, then programmatic overrides.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder with discovery and environment overrides enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory where project file discovery starts.
    ///
    /// Defaults to the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Load exactly this file instead of discovering project files.
    #[must_use]
    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Do not read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `INCPATH_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Layer `config` over every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merge all sources and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed, if
    /// an environment variable is malformed, or if the merged configuration
    /// fails validation.
    pub fn build(self) -> Result<Config> {
        let sources = self.load_sources()?;
        for source in &sources {
            log::debug!("using configuration {}", source.path.display());
            ConfigValidator::validate(&source.config)?;
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate_complete(&config)?;
        Ok(config)
    }

    fn load_sources(&self) -> Result<Vec<ConfigSource>> {
        if self.skip_files {
            return Ok(Vec::new());
        }

        if let Some(ref path) = self.config_file {
            let config = ConfigLoader::load_file(path)?;
            return Ok(vec![ConfigSource {
                path: path.clone(),
                precedence: 1,
                config,
            }]);
        }

        let working_dir = match self.working_dir {
            Some(ref dir) => dir.clone(),
            None => std::env::current_dir()?,
        };
        ConfigLoader::load_all(&working_dir)
    }
}
