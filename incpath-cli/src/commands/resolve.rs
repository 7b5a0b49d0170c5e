//! Resolve command implementation.
//!
//! This module implements the `resolve` command, which runs include
//! resolution over the configured trees and prints the report.

use crate::error::CliError;
use crate::utils::{load_configuration, non_empty, GlobalOptions};
use clap::{Args, ValueEnum};
use incpath::{resolve, resolve_with_progress, Config, OutputFormat};
use std::path::PathBuf;

/// Compute the include folders a source tree needs.
#[derive(Args)]
pub struct ResolveCommand {
    /// Folder holding the project's own sources (repeatable)
    #[arg(short = 'p', long = "parse", value_name = "DIR")]
    pub parse: Vec<PathBuf>,

    /// Folder trusted as a search folder (repeatable)
    #[arg(short = 'I', long = "include", value_name = "DIR")]
    pub include: Vec<PathBuf>,

    /// Folder searched to locate included files (repeatable)
    #[arg(short = 'r', long = "resolve", value_name = "DIR")]
    pub resolve: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,

    /// Print a line per scanned file to stderr
    #[arg(long)]
    pub progress: bool,

    /// Exit with status 1 if any include issue is found
    #[arg(long)]
    pub fail_on_issues: bool,
}

/// Output format for the resolve command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// Sectioned report (human-readable)
    Human,
    /// JSON format
    Json,
    /// Compiler `-I` flags, one per line
    Flags,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Human => OutputFormat::Human,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Flags => OutputFormat::Flags,
        }
    }
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Layer the flags over files and environment
        let overrides = Config {
            parse_folders: non_empty(self.parse),
            include_folders: non_empty(self.include),
            resolve_folders: non_empty(self.resolve),
            output_format: self.format.map(OutputFormat::from),
            fail_on_issues: self.fail_on_issues.then_some(true),
        };
        let config = load_configuration(global, overrides)?;

        // 2. Run the engine
        let settings = config.to_settings();
        let result = if self.progress {
            resolve_with_progress(&settings, |progress| eprintln!("{progress}"))?
        } else {
            resolve(&settings)?
        };

        // 3. Format and output to stdout
        let format = config.output_format.unwrap_or_default();
        let output = format.create_formatter().format(&result)?;
        if !output.is_empty() {
            println!("{output}");
        }

        if !result.is_clean() {
            if format == OutputFormat::Flags {
                log::warn!(
                    "{} include issue(s) not shown; use --format human to list them",
                    result.issue_count()
                );
            }
            if config.fail_on_issues.unwrap_or(false) {
                return Err(CliError::SemanticFailure(format!(
                    "{} include issue(s) found",
                    result.issue_count()
                )));
            }
        }

        Ok(())
    }
}
