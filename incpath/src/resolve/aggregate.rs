//! Accumulation of run outcomes into a [`ResolutionResult`].

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::path::CanonicalPath;
use crate::resolve::types::{ConflictedInclude, IncludeLocation, ResolutionResult, UnresolvedInclude};

/// Collects outcomes while the engine runs.
///
/// Every set only grows. Finishing hands the collected state over as an
/// immutable [`ResolutionResult`].
#[derive(Debug, Default)]
pub struct ResultAggregator {
    result: ResolutionResult,
}

impl ResultAggregator {
    /// Create an empty aggregator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a configured folder that does not exist.
    pub fn record_invalid_path(&mut self, path: PathBuf) {
        self.result.invalid_paths.insert(path);
    }

    /// Add a folder to the settled search folders.
    ///
    /// Returns `true` if the folder was not already settled.
    pub fn settle_folder(&mut self, folder: CanonicalPath) -> bool {
        self.result.search_folders.insert(folder)
    }

    /// The folders settled so far.
    #[must_use]
    pub fn search_folders(&self) -> &BTreeSet<CanonicalPath> {
        &self.result.search_folders
    }

    /// Whether `include` already has a conflict entry.
    #[must_use]
    pub fn is_conflicted(&self, include: &str) -> bool {
        self.result.conflicted.contains_key(include)
    }

    /// Fold another call site into the existing conflict for `include`.
    ///
    /// Returns `false`, without recording anything, if `include` is not
    /// conflicted.
    pub fn add_conflict_location(&mut self, include: &str, location: &IncludeLocation) -> bool {
        match self.result.conflicted.get_mut(include) {
            Some(conflict) => {
                conflict.locations.insert(location.clone());
                true
            }
            None => false,
        }
    }

    /// Record `include` as resolvable from every folder in `folders`.
    pub fn record_conflict(
        &mut self,
        include: String,
        location: IncludeLocation,
        folders: impl IntoIterator<Item = CanonicalPath>,
    ) {
        let conflict = self
            .result
            .conflicted
            .entry(include)
            .or_insert_with(ConflictedInclude::default);
        conflict.locations.insert(location);
        conflict.folders.extend(folders);
    }

    /// Record an include nothing could resolve.
    pub fn record_unresolved(&mut self, location: IncludeLocation, include: String) {
        self.result
            .unresolved
            .insert(UnresolvedInclude { location, include });
    }

    /// Hand over the final result.
    #[must_use]
    pub fn finish(self) -> ResolutionResult {
        self.result
    }
}
