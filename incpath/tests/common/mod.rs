//! Common test utilities for integration tests.
//!
//! This module provides a fixture builder for laying out small C/C++ source
//! trees in a temporary directory.

use std::fs;
use std::path::{Path, PathBuf};

use incpath::{CanonicalPath, ResolverSettings};
use tempfile::TempDir;

/// Builder for a throwaway source tree.
///
/// # Examples
///
/// ```no_run
/// # use common::SourceTree;
/// let tree = SourceTree::new()
///     .file("src/main.cpp", &["#include \"util.hpp\""])
///     .file("src/util.hpp", &[]);
/// let settings = tree.settings(&["src"], &[], &[]);
/// ```
pub struct SourceTree {
    dir: TempDir,
}

#[allow(dead_code)]
impl SourceTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Adds a file with the given lines, creating parent directories.
    pub fn file(self, relative: &str, lines: &[&str]) -> Self {
        let path = self.dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let mut contents = lines.join("\n");
        contents.push('\n');
        fs::write(path, contents).unwrap();
        self
    }

    /// Adds an empty directory.
    pub fn dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.dir.path().join(relative)).unwrap();
        self
    }

    /// Root of the tree.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a tree entry.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Canonical form of a tree entry, as it appears in results.
    pub fn canonical(&self, relative: &str) -> CanonicalPath {
        incpath::path::normalize(&self.path(relative)).unwrap()
    }

    /// Resolver settings with each folder list given relative to the root.
    pub fn settings(&self, parse: &[&str], include: &[&str], resolve: &[&str]) -> ResolverSettings {
        let mut settings = ResolverSettings::new();
        for folder in parse {
            settings = settings.with_parse_folder(self.path(folder));
        }
        for folder in include {
            settings = settings.with_include_folder(self.path(folder));
        }
        for folder in resolve {
            settings = settings.with_resolve_folder(self.path(folder));
        }
        settings
    }
}
