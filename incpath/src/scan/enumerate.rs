//! Source tree enumeration.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::path::normalize::{absolutize, normalize};
use crate::path::CanonicalPath;

/// File name suffixes that mark a file as C or C++ source.
///
/// Matching is an exact, case-sensitive suffix match on the file name.
pub const SOURCE_EXTENSIONS: [&str; 7] = [".h", ".hpp", ".hxx", ".hh", ".c", ".cpp", ".cxx"];

/// Whether the file name of `path` ends with one of [`SOURCE_EXTENSIONS`].
///
/// # Examples
///
/// ```
/// use incpath::scan::is_source_file;
/// use std::path::Path;
///
/// assert!(is_source_file(Path::new("src/widget.hpp")));
/// assert!(!is_source_file(Path::new("src/widget.HPP")));
/// assert!(!is_source_file(Path::new("README.md")));
/// ```
#[must_use]
pub fn is_source_file(path: &Path) -> bool {
    path.file_name().is_some_and(|name| {
        let name = name.to_string_lossy();
        SOURCE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
    })
}

/// Files found under a set of roots, plus the roots that could not be walked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enumeration {
    /// Every source file found, in walk order.
    pub files: Vec<CanonicalPath>,
    /// Roots that do not exist (or are not directories), as supplied.
    pub invalid_roots: Vec<PathBuf>,
}

/// Recursively collect every source file under each of `roots`.
///
/// Roots are walked in the given order and each directory's entries are
/// visited sorted by file name, so the order is stable for a given snapshot
/// of the filesystem. Symlinked directories are followed. A root that is
/// missing is reported in [`Enumeration::invalid_roots`] and skipped.
///
/// # Errors
///
/// Returns an error if a directory inside an existing root cannot be read or
/// a symlink loop is found.
///
/// # Examples
///
/// ```no_run
/// use incpath::scan::enumerate;
/// use std::path::PathBuf;
///
/// let found = enumerate(&[PathBuf::from("src"), PathBuf::from("missing")]).unwrap();
/// for file in &found.files {
///     println!("{file}");
/// }
/// assert_eq!(found.invalid_roots, vec![PathBuf::from("missing")]);
/// ```
pub fn enumerate<P: AsRef<Path>>(roots: &[P]) -> Result<Enumeration> {
    let mut enumeration = Enumeration::default();

    for root in roots {
        let root = root.as_ref();
        match absolutize(root) {
            Ok(absolute) if absolute.is_dir() => {
                collect_source_files(&absolute, &mut enumeration.files)?;
            }
            _ => {
                log::debug!("Skipping missing root {}", root.display());
                enumeration.invalid_roots.push(root.to_path_buf());
            }
        }
    }

    Ok(enumeration)
}

/// Append every source file under the existing directory `root` to `files`.
fn collect_source_files(root: &Path, files: &mut Vec<CanonicalPath>) -> Result<()> {
    let walker = WalkDir::new(root).follow_links(true).sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                if let Some(ancestor) = err.loop_ancestor() {
                    return Err(Error::SymlinkLoop {
                        path: ancestor.to_path_buf(),
                    });
                }
                // Dangling symlinks are not source files.
                if err.io_error().is_some_and(|io| io.kind() == ErrorKind::NotFound) {
                    log::warn!("Skipping dangling entry under {}: {err}", root.display());
                    continue;
                }
                return Err(Error::Walk {
                    path: root.to_path_buf(),
                    source: err,
                });
            }
        };

        if entry.file_type().is_file() && is_source_file(entry.path()) {
            files.push(normalize(entry.path())?);
        }
    }

    Ok(())
}
