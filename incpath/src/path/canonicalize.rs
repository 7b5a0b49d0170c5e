//! Path canonicalization functions.
//!
//! Canonicalization follows symlinks to the real path on disk, so the path
//! must exist.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Canonicalize a path by following symlinks.
///
/// # Errors
///
/// Returns an error if:
/// - The path does not exist (`PathNotFound`)
/// - Permission is denied (`PermissionDenied`)
/// - An I/O error occurs
///
/// # Examples
///
/// ```no_run
/// use incpath::path::canonicalize::canonicalize;
/// use std::path::Path;
///
/// let canonical = canonicalize(Path::new("/tmp")).unwrap();
/// assert!(canonical.is_absolute());
/// ```
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::PathNotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => Error::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })
}
