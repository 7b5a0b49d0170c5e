//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "incpath";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        eprintln!("# Generating {} completion script", self.shell);
        eprintln!("# Run the following command to enable completions:");

        match self.shell {
            Shell::Bash => {
                eprintln!(
                    "#   incpath completions bash > ~/.local/share/bash-completion/completions/incpath"
                );
                eprintln!("# Or source it directly in ~/.bashrc:");
                eprintln!("#   eval \"$(incpath completions bash)\"");
            }
            Shell::Zsh => {
                eprintln!("#   incpath completions zsh > ~/.zsh/completions/_incpath");
                eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
            }
            Shell::Fish => {
                eprintln!("#   incpath completions fish > ~/.config/fish/completions/incpath.fish");
                eprintln!("# Or add to config.fish:");
                eprintln!("#   incpath completions fish | source");
            }
            Shell::PowerShell => {
                eprintln!("#   incpath completions powershell > $PROFILE");
                eprintln!("# Or run:");
                eprintln!("#   incpath completions powershell | Out-String | Invoke-Expression");
            }
            _ => {}
        }

        eprintln!();

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
