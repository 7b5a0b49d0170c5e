//! Core types for path handling.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// An absolute, symlink-resolved filesystem path.
///
/// Two `CanonicalPath`s compare equal iff they name the same file on disk,
/// which is what lets the resolver deduplicate files reached through
/// different include spellings. Instances are produced by
/// [`crate::path::normalize::normalize`] or derived from another canonical
/// path by the resolver.
///
/// # Examples
///
/// ```no_run
/// use incpath::path::normalize::normalize;
/// use std::path::Path;
///
/// let canonical = normalize(Path::new("./src")).unwrap();
/// assert!(canonical.as_path().is_absolute());
/// assert!(!canonical.pretty_string().contains('\\'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalPath {
    path: PathBuf,
}

impl CanonicalPath {
    /// Wrap a path that is already canonical.
    ///
    /// The caller vouches for the path having come out of canonicalization
    /// (or being a prefix or join of such a path that names an existing
    /// entry).
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not absolute.
    pub(crate) fn from_canonical(path: PathBuf) -> Result<Self> {
        if !path.is_absolute() {
            return Err(Error::InvalidPath {
                path,
                reason: "Path must be absolute after canonicalization".to_string(),
            });
        }
        Ok(Self { path })
    }

    /// Get a reference to the path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// Convert into the underlying `PathBuf`.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }

    /// The final component of the path, lossily decoded.
    ///
    /// Returns an empty string for a filesystem root.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// The directory containing this path, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&Path> {
        self.path.parent()
    }

    /// Render the path with `/` as the only separator.
    ///
    /// Used for display and for suffix comparisons against include text,
    /// which is always written with forward slashes.
    ///
    /// # Examples
    ///
    /// ```
    /// use incpath::path::pretty_string;
    /// use std::path::Path;
    ///
    /// assert_eq!(pretty_string(Path::new("C:\\libs\\a.h")), "C:/libs/a.h");
    /// ```
    #[must_use]
    pub fn pretty_string(&self) -> String {
        pretty_string(&self.path)
    }
}

/// Render any path with `/` as the only separator.
#[must_use]
pub fn pretty_string(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

impl AsRef<Path> for CanonicalPath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty_string())
    }
}

impl Serialize for CanonicalPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.pretty_string())
    }
}
