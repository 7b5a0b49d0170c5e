//! Input folder lists for a resolution run.

use std::path::PathBuf;

/// The three ordered folder lists a run is configured with.
///
/// # Examples
///
/// ```
/// use incpath::ResolverSettings;
///
/// let settings = ResolverSettings::new()
///     .with_parse_folder("src")
///     .with_include_folder("include")
///     .with_resolve_folder("/opt/vendor");
/// assert_eq!(settings.parse_folders.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverSettings {
    /// The project's own source trees; every source file under them is scanned.
    pub parse_folders: Vec<PathBuf>,
    /// Folders trusted a priori as search folders.
    pub include_folders: Vec<PathBuf>,
    /// Folders whose files are searched to find where an include lives.
    pub resolve_folders: Vec<PathBuf>,
}

impl ResolverSettings {
    /// Create empty settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a folder to parse.
    #[must_use]
    pub fn with_parse_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.parse_folders.push(folder.into());
        self
    }

    /// Add a trusted include folder.
    #[must_use]
    pub fn with_include_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.include_folders.push(folder.into());
        self
    }

    /// Add a folder to the resolve universe.
    #[must_use]
    pub fn with_resolve_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.resolve_folders.push(folder.into());
        self
    }
}
