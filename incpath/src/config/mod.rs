//! Configuration system for incpath.
//!
//! This module provides layered configuration with support for:
//! - YAML project files (`incpath.yaml` and `incpath.local.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Sources are merged from lowest to highest precedence:
//!
//! 1. Project config (`incpath.yaml`), or the file named by `--config`
//! 2. Private project config (`incpath.local.yaml`)
//! 3. Environment variables (`INCPATH_*`)
//! 4. Programmatic overrides (via `ConfigBuilder::with_config`)
//!
//! Folder lists accumulate across all layers. Scalar settings take the value
//! of the highest layer that sets them.
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use incpath::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use incpath::config::{Config, ConfigBuilder};
//! use std::path::PathBuf;
//!
//! let custom = Config {
//!     parse_folders: Some(vec![PathBuf::from("src")]),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.to_settings().parse_folders, vec![PathBuf::from("src")]);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, CONFIG_FILE_NAME, LOCAL_CONFIG_FILE_NAME};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
