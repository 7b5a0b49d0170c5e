//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary source tree
//! - Command builder helpers with a clean environment

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary reads.
const INCPATH_VARS: [&str; 7] = [
    "INCPATH_CONFIG",
    "INCPATH_LOG_MODE",
    "INCPATH_PARSE_FOLDERS",
    "INCPATH_INCLUDE_FOLDERS",
    "INCPATH_RESOLVE_FOLDERS",
    "INCPATH_OUTPUT_FORMAT",
    "INCPATH_FAIL_ON_ISSUES",
];

/// Test environment with an isolated source tree.
///
/// Commands run with the tree root as their working directory and with
/// every `INCPATH_*` variable removed.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder for the incpath binary.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("incpath").expect("Failed to find incpath binary");
        cmd.current_dir(&self.temp_path);
        for var in INCPATH_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Absolute path of an entry in the tree, with slash separators.
    pub fn display(&self, relative: &str) -> String {
        self.temp_path
            .join(relative)
            .to_string_lossy()
            .replace('\\', "/")
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file with the given lines, creating parent directories.
    pub fn write_file(&self, name: &str, lines: &[&str]) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(path.parent().expect("file has a parent"))
            .expect("Failed to create parent directory");
        let mut contents = lines.join("\n");
        contents.push('\n');
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Lay out a tree with one local include, one vendored library, one
    /// ambiguous header and one missing header.
    pub fn sample_project(&self) {
        self.write_file(
            "src/main.cpp",
            &[
                "#include \"local.h\"",
                "#include <fmt/core.h>",
                "#include \"common/util.hpp\"",
                "#include \"missing/thing.hpp\"",
            ],
        );
        self.write_file("src/local.h", &["#pragma once"]);
        self.write_file("vendor/fmt/include/fmt/core.h", &["#pragma once"]);
        self.write_file("libA/common/util.hpp", &[]);
        self.write_file("libB/common/util.hpp", &[]);
    }

    /// Lay out a tree that resolves without issues.
    pub fn clean_project(&self) {
        self.write_file("src/main.cpp", &["#include <fmt/core.h>"]);
        self.write_file("vendor/fmt/include/fmt/core.h", &["#pragma once"]);
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
