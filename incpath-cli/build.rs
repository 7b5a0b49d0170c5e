//! Build script for incpath-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("incpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Discover the include folders a C/C++ tree needs")
        .long_about(
            "Command-line tool that scans C/C++ sources and computes the minimal set of \
             include search folders, reporting ambiguous and unresolvable includes",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Use this configuration file instead of discovering incpath.yaml")
                .value_name("FILE")
                .global(true)
                .env("INCPATH_CONFIG"),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Compute the include folders a source tree needs")
                .long_about(
                    "Scan the parse folders, follow every include through the include and \
                     resolve folders, and print the required search folders",
                ),
            Command::new("scan")
                .about("List the include directives found in a file")
                .long_about("Print each recognized include directive as line: text"),
            Command::new("files")
                .about("List the C/C++ source files under folders")
                .long_about("Enumerate source files recursively, sorted, one per line"),
            Command::new("validate")
                .about("Validate configuration files")
                .long_about("Check incpath.yaml and incpath.local.yaml for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("incpath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
