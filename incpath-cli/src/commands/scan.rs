//! Scan command implementation.
//!
//! Prints the include directives recognized in a single file, one
//! `line: text` pair per directive.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

/// List the include directives found in a file.
#[derive(Args)]
pub struct ScanCommand {
    /// File to scan
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

impl ScanCommand {
    /// Execute the scan command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if !self.file.is_file() {
            return Err(CliError::InvalidArguments(format!(
                "Not a file: {}",
                self.file.display()
            )));
        }

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        for directive in incpath::scan::scan(&self.file)? {
            let directive = directive?;
            writeln!(handle, "{}: {}", directive.line, directive.text)?;
        }

        Ok(())
    }
}
