//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Name of the shared project configuration file.
pub const CONFIG_FILE_NAME: &str = "incpath.yaml";

/// Name of the private, uncommitted project configuration file.
pub const LOCAL_CONFIG_FILE_NAME: &str = "incpath.local.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from files.
///
/// # Examples
///
/// ```no_run
/// use incpath::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new(".")).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all project configuration files.
    ///
    /// Walks up from `working_dir` to the first directory holding
    /// `incpath.yaml` (precedence 1) or `incpath.local.yaml` (precedence 2).
    /// Sources come back sorted lowest precedence first.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut sources = Self::discover_project_configs(working_dir)?;
        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    /// Discover project configurations by walking up directories.
    ///
    /// Stops at the first directory containing either file.
    ///
    /// # Errors
    ///
    /// Returns an error if any discovered file cannot be read or parsed.
    pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut configs = Vec::new();
        let mut current = start_dir.to_path_buf();

        loop {
            for (name, precedence) in [(CONFIG_FILE_NAME, 1), (LOCAL_CONFIG_FILE_NAME, 2)] {
                let candidate = current.join(name);
                if candidate.is_file() {
                    let config = Self::load_file(&candidate)?;
                    configs.push(ConfigSource {
                        path: candidate,
                        precedence,
                        config,
                    });
                }
            }

            if !configs.is_empty() || !current.pop() {
                break;
            }
        }

        Ok(configs)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// Relative folder paths in the file are taken relative to the directory
    /// holding the file, so a project config works from any subdirectory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        let mut config: Config =
            serde_yaml::from_str(&contents).map_err(|source| Error::Configuration {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some(base) = path.parent() {
            Self::rebase_folders(&mut config, base);
        }
        Ok(config)
    }

    /// Join every relative folder of `config` onto `base`.
    ///
    /// Absolute, `~`-prefixed and empty entries are kept as written.
    fn rebase_folders(config: &mut Config, base: &Path) {
        for (_, list) in config.folder_lists_mut() {
            for folder in list.iter_mut().flatten() {
                if !folder.as_os_str().is_empty()
                    && folder.is_relative()
                    && !folder.starts_with("~")
                {
                    *folder = base.join(&*folder);
                }
            }
        }
    }
}
