//! Base-name index over the resolve universe.
//!
//! The resolve universe is every source file under the configured resolve
//! folders. Looking an include up by its base name narrows the candidates to
//! a handful of files, which are then checked for a full directory suffix
//! match against the include text.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use crate::path::CanonicalPath;

/// One-to-many map from file name to every file carrying that name.
///
/// Built once per run and read-only afterwards.
///
/// # Examples
///
/// ```no_run
/// use incpath::index::FilenameIndex;
/// use incpath::scan::enumerate;
/// use std::path::PathBuf;
///
/// let universe = enumerate(&[PathBuf::from("/opt/libs")]).unwrap();
/// let index = FilenameIndex::build(universe.files);
/// for candidate in index.lookup("config.hpp") {
///     println!("{candidate}");
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilenameIndex {
    by_name: HashMap<String, BTreeSet<CanonicalPath>>,
}

impl FilenameIndex {
    /// Index every file in `files` by its base name.
    #[must_use]
    pub fn build<I>(files: I) -> Self
    where
        I: IntoIterator<Item = CanonicalPath>,
    {
        let mut by_name: HashMap<String, BTreeSet<CanonicalPath>> = HashMap::new();
        for file in files {
            by_name.entry(file.file_name()).or_default().insert(file);
        }
        Self { by_name }
    }

    /// Every indexed file whose base name is exactly `base_name`.
    pub fn lookup(&self, base_name: &str) -> impl Iterator<Item = &CanonicalPath> {
        self.by_name.get(base_name).into_iter().flatten()
    }

    /// Number of indexed files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.values().map(BTreeSet::len).sum()
    }

    /// Whether no file was indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Find every folder from which `include` resolves to an indexed file.
    ///
    /// A candidate qualifies only if its slash-rendered path ends with
    /// `"/" + include`, so `"common/util.hpp"` matches
    /// `/libA/common/util.hpp` (folder `/libA`) but not `/libB/util.hpp`.
    /// The returned map goes from each qualifying folder to the file the
    /// include names inside it. An empty map means no candidate matched.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use incpath::index::FilenameIndex;
    /// use incpath::scan::enumerate;
    /// use std::path::PathBuf;
    ///
    /// let universe = enumerate(&[PathBuf::from("/opt/libs")]).unwrap();
    /// let index = FilenameIndex::build(universe.files);
    /// let folders = index.find_candidate_folders("common/util.hpp");
    /// if folders.len() > 1 {
    ///     println!("ambiguous include");
    /// }
    /// ```
    #[must_use]
    pub fn find_candidate_folders(&self, include: &str) -> BTreeMap<CanonicalPath, CanonicalPath> {
        let mut folders = BTreeMap::new();

        let Some(base_name) = Path::new(include).file_name() else {
            return folders;
        };
        let suffix = format!("/{include}");

        for candidate in self.lookup(&base_name.to_string_lossy()) {
            let rendered = candidate.pretty_string();
            let Some(folder) = rendered.strip_suffix(&suffix) else {
                continue;
            };
            let folder = if folder.is_empty() { "/" } else { folder };
            match CanonicalPath::from_canonical(PathBuf::from(folder)) {
                Ok(folder) => {
                    folders.insert(folder, candidate.clone());
                }
                Err(err) => log::debug!("Ignoring candidate {candidate}: {err}"),
            }
        }

        folders
    }
}
