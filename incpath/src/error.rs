//! Error types for the incpath library.
//!
//! Only failures that abort a run live here. Missing configured folders,
//! unresolved includes and ambiguous includes are outcomes, and are recorded
//! in [`crate::ResolutionResult`] instead.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an incpath error.
///
/// # Examples
///
/// ```
/// use incpath::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the incpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// A symlink loop was detected.
    #[error("symlink loop detected: {}", path.display())]
    SymlinkLoop {
        /// The path where the loop was detected.
        path: PathBuf,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A file discovered during resolution could not be read.
    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        /// The file being scanned.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A directory tree could not be enumerated.
    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        /// The root being enumerated.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: walkdir::Error,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error in {}: {source}", path.display())]
    Configuration {
        /// The configuration file.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_yaml::Error,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A result could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use incpath::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::PathNotFound { .. } => true,
            Self::ReadFile { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use incpath::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Self::PermissionDenied { .. } => true,
            Self::ReadFile { source, .. } => {
                source.kind() == std::io::ErrorKind::PermissionDenied
            }
            _ => false,
        }
    }
}
