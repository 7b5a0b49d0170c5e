//! Result types produced by a resolution run.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::path::CanonicalPath;

/// Where an include directive was written.
///
/// Ordered by file, then line, which gives reports a stable order.
///
/// # Examples
///
/// ```no_run
/// use incpath::path::normalize;
/// use incpath::IncludeLocation;
/// use std::path::Path;
///
/// let location = IncludeLocation::new(normalize(Path::new("src/main.cpp")).unwrap(), 12);
/// assert!(location.to_string().ends_with("main.cpp:12"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct IncludeLocation {
    /// File containing the directive.
    pub file: CanonicalPath,
    /// 1-based line of the directive.
    pub line: u32,
}

impl IncludeLocation {
    /// Create a location.
    #[must_use]
    pub fn new(file: CanonicalPath, line: u32) -> Self {
        Self { file, line }
    }
}

impl fmt::Display for IncludeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// An include whose text matched nothing the run could search.
///
/// One entry per call site: the same text written in two places gives two
/// entries.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct UnresolvedInclude {
    /// Where the include was written.
    pub location: IncludeLocation,
    /// The literal include text.
    pub include: String,
}

impl fmt::Display for UnresolvedInclude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.location, self.include)
    }
}

/// An include text that more than one folder can resolve.
///
/// Keyed by the include text in [`ResolutionResult::conflicted`]; every call
/// site writing that text is folded into the same entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConflictedInclude {
    /// Every location where the include is written.
    pub locations: BTreeSet<IncludeLocation>,
    /// Every folder that resolves the include.
    pub folders: BTreeSet<CanonicalPath>,
}

impl fmt::Display for ConflictedInclude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\tincluded by:\n\t[")?;
        for location in &self.locations {
            write!(f, "\n\t\t{location}")?;
        }
        write!(f, "\n\t]\n\tcan be resolved by:\n\t[")?;
        for folder in &self.folders {
            write!(f, "\n\t\t{folder}")?;
        }
        write!(f, "\n\t]")
    }
}

/// Everything a resolution run found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionResult {
    /// Configured folders that do not exist, exactly as they reached
    /// [`ResolverSettings`](crate::ResolverSettings).
    ///
    /// Relative folders read from a configuration file arrive already joined
    /// onto that file's directory, so they are reported in that form.
    pub invalid_paths: BTreeSet<PathBuf>,
    /// Includes that nothing could resolve.
    pub unresolved: BTreeSet<UnresolvedInclude>,
    /// Ambiguous includes, keyed by include text.
    pub conflicted: BTreeMap<String, ConflictedInclude>,
    /// Folders to add to the include path so every resolvable include resolves.
    pub search_folders: BTreeSet<CanonicalPath>,
}

impl ResolutionResult {
    /// Whether the run found nothing needing attention.
    ///
    /// Invalid configured paths, unresolved includes and conflicts all count.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issue_count() == 0
    }

    /// Number of invalid paths, unresolved includes and conflicted texts.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.invalid_paths.len() + self.unresolved.len() + self.conflicted.len()
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn canonical(path: &str) -> CanonicalPath {
        CanonicalPath::from_canonical(PathBuf::from(path)).unwrap()
    }

    #[test]
    fn test_location_display_and_order() {
        let a = IncludeLocation::new(canonical("/src/a.cpp"), 10);
        let b = IncludeLocation::new(canonical("/src/a.cpp"), 9);
        let c = IncludeLocation::new(canonical("/src/b.cpp"), 1);
        assert_eq!(a.to_string(), "/src/a.cpp:10");
        assert!(b < a);
        assert!(a < c);
    }

    #[test]
    fn test_unresolved_display() {
        let unresolved = UnresolvedInclude {
            location: IncludeLocation::new(canonical("/src/a.cpp"), 3),
            include: "missing/thing.hpp".to_string(),
        };
        assert_eq!(unresolved.to_string(), "/src/a.cpp:3 : missing/thing.hpp");
    }

    #[test]
    fn test_conflicted_display_block() {
        let mut conflict = ConflictedInclude::default();
        conflict
            .locations
            .insert(IncludeLocation::new(canonical("/src/a.cpp"), 4));
        conflict.folders.insert(canonical("/libA"));
        conflict.folders.insert(canonical("/libB"));

        assert_eq!(
            conflict.to_string(),
            "\tincluded by:\n\t[\n\t\t/src/a.cpp:4\n\t]\n\tcan be resolved by:\n\t[\n\t\t/libA\n\t\t/libB\n\t]"
        );
    }

    #[test]
    fn test_issue_count() {
        let mut result = ResolutionResult::default();
        assert!(result.is_clean());

        result.invalid_paths.insert(PathBuf::from("nope"));
        result.search_folders.insert(canonical("/libA"));
        assert_eq!(result.issue_count(), 1);
        assert!(!result.is_clean());
    }
}
