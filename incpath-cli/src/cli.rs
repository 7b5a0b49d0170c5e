//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, FilesCommand, ResolveCommand, ScanCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for discovering the include folders of a C/C++ tree.
#[derive(Parser)]
#[command(name = "incpath")]
#[command(version, about = "Discover the include folders a C/C++ tree needs", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Use this configuration file instead of discovering incpath.yaml
    #[arg(long, value_name = "FILE", global = true, env = "INCPATH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute the include folders a source tree needs
    Resolve(ResolveCommand),

    /// List the include directives found in a file
    Scan(ScanCommand),

    /// List the C/C++ source files under folders
    Files(FilesCommand),

    /// Validate configuration files
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
