//! Files command implementation.
//!
//! Lists the source files the enumerator finds under a set of roots.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use incpath::scan::enumerate;
use std::io::Write;
use std::path::PathBuf;

/// List the C/C++ source files under one or more folders.
#[derive(Args)]
pub struct FilesCommand {
    /// Folders to enumerate
    #[arg(value_name = "DIR", required = true)]
    pub roots: Vec<PathBuf>,
}

impl FilesCommand {
    /// Execute the files command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut found = enumerate(&self.roots)?;

        for root in &found.invalid_roots {
            log::warn!("{} is not a directory", root.display());
        }

        found.files.sort();
        found.files.dedup();

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        for file in &found.files {
            writeln!(handle, "{file}")?;
        }

        Ok(())
    }
}
