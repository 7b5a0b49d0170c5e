//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Compute the include folders a source tree needs
//! - `scan`: List the include directives of one file
//! - `files`: List the source files under folders
//! - `validate`: Validate configuration files
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod files;
pub mod resolve;
pub mod scan;
pub mod validate;

pub use completions::CompletionsCommand;
pub use files::FilesCommand;
pub use resolve::ResolveCommand;
pub use scan::ScanCommand;
pub use validate::ValidateCommand;
