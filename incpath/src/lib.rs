#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # incpath
//!
//! A library for discovering the include search folders a C/C++ source tree
//! needs.
//!
//! Starting from the project's own sources, every `#include` directive is
//! matched against a universe of candidate folders. The result is the minimal
//! set of search folders, plus every include that is ambiguous or cannot be
//! found at all.
//!
//! ## Core Types
//!
//! - [`ResolverSettings`]: the three folder lists driving a run
//! - [`ResolutionResult`]: search folders, conflicts, unresolved includes and
//!   invalid paths
//! - [`FilenameIndex`]: base-name lookup over the resolve universe
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use incpath::{resolve, ResolverSettings};
//!
//! let settings = ResolverSettings::new()
//!     .with_parse_folder("src")
//!     .with_include_folder("include")
//!     .with_resolve_folder("third_party");
//!
//! let result = resolve(&settings).unwrap();
//! for folder in &result.search_folders {
//!     println!("-I{folder}");
//! }
//! ```

pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod output;
pub mod path;
pub mod resolve;
pub mod scan;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use index::FilenameIndex;
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, OutputFormatter};
pub use path::CanonicalPath;
pub use resolve::{
    resolve, resolve_with_progress, ConflictedInclude, IncludeLocation, ResolutionEngine,
    ResolutionResult, ResolverSettings, ScanProgress, UnresolvedInclude,
};
