//! Path normalization functions.
//!
//! Configured folders arrive in whatever spelling the user typed them
//! (`~/libs`, `../vendor/./boost`, relative to the working directory).
//! [`absolutize`] turns such a spelling into an absolute path lexically, and
//! [`normalize`] asks the filesystem for the real path so that every spelling
//! of the same file yields the same [`CanonicalPath`].

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::canonicalize::canonicalize;
use crate::path::types::CanonicalPath;

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
/// Paths without a leading `~` component are returned untouched, whatever
/// their encoding.
///
/// # Errors
///
/// Returns an error if:
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use incpath::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/vendor")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("vendor"));
///
/// let expanded = expand_tilde(Path::new("/absolute")).unwrap();
/// assert_eq!(expanded, Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let mut components = path.components();
    let Some(Component::Normal(first)) = components.next() else {
        return Ok(path.to_path_buf());
    };
    if !first.to_string_lossy().starts_with('~') {
        return Ok(path.to_path_buf());
    }

    if first.to_str() != Some("~") {
        return Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        });
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    let rest = components.as_path();
    if rest.as_os_str().is_empty() {
        Ok(home)
    } else {
        Ok(home.join(rest))
    }
}

/// Resolve `.` and `..` components in an absolute path.
///
/// # Errors
///
/// Returns an error if the path contains too many `..` components that would
/// escape the root directory.
///
/// # Examples
///
/// ```
/// use incpath::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_components(Path::new("/a/./b/../c")).unwrap();
/// assert_eq!(resolved, PathBuf::from("/a/c"));
/// ```
pub fn resolve_components(path: &Path) -> Result<PathBuf> {
    let mut result = PathBuf::new();
    let mut has_root = false;

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Prefix(prefix) => {
                result.push(prefix.as_os_str());
                has_root = true;
            }
            Component::Normal(c) => {
                result.push(c);
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if !result.pop() {
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "Path contains too many '..' components (escapes root)".to_string(),
                    });
                }
            }
        }
    }

    if has_root && result.as_os_str().is_empty() {
        result.push(Component::RootDir);
    }

    Ok(result)
}

/// Make a path absolute without touching the filesystem.
///
/// Expands a leading tilde, joins relative paths onto the current directory
/// and resolves `.` and `..` lexically. Symlinks are left alone and the path
/// does not need to exist.
///
/// # Errors
///
/// Returns an error if tilde expansion fails, the current directory cannot be
/// determined, or the path escapes the root.
///
/// # Examples
///
/// ```no_run
/// use incpath::path::normalize::absolutize;
/// use std::path::Path;
///
/// let absolute = absolutize(Path::new("./src")).unwrap();
/// assert!(absolute.is_absolute());
/// ```
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        current_dir(path)?.join(expanded)
    };

    resolve_components(&absolute)
}

/// Normalize an existing path to its canonical form.
///
/// `.` and `..` are left for the filesystem to resolve, so `link/..` names
/// the parent of the link's target rather than the directory holding the
/// link.
///
/// # Errors
///
/// Returns `PathNotFound` if the path does not exist, `PermissionDenied` if
/// it cannot be inspected, or an error if tilde expansion fails or the
/// current directory cannot be determined.
///
/// # Examples
///
/// ```no_run
/// use incpath::path::normalize::normalize;
/// use std::path::Path;
///
/// let a = normalize(Path::new("include")).unwrap();
/// let b = normalize(Path::new("./src/../include")).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn normalize(path: &Path) -> Result<CanonicalPath> {
    let expanded = expand_tilde(path)?;
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        current_dir(path)?.join(expanded)
    };
    CanonicalPath::from_canonical(canonicalize(&absolute)?)
}

fn current_dir(path: &Path) -> Result<PathBuf> {
    env::current_dir().map_err(|e| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: format!("Cannot get current directory: {e}"),
    })
}
