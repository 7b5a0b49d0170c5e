//! Configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;
use crate::resolve::ResolverSettings;

/// Complete configuration structure.
///
/// Every field is optional so that files, environment variables and command
/// line flags can each supply a part of it.
///
/// # Examples
///
/// ```
/// use incpath::config::Config;
/// use std::path::PathBuf;
///
/// let config: Config = serde_yaml::from_str(
///     "parse_folders: [src]\ninclude_folders: [include]\noutput_format: flags\n",
/// )
/// .unwrap();
/// assert_eq!(config.parse_folders, Some(vec![PathBuf::from("src")]));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The project's own source trees.
    pub parse_folders: Option<Vec<PathBuf>>,

    /// Folders trusted as search folders.
    pub include_folders: Option<Vec<PathBuf>>,

    /// Folders searched to find where includes live.
    pub resolve_folders: Option<Vec<PathBuf>>,

    /// Report format.
    pub output_format: Option<OutputFormat>,

    /// Treat invalid paths, unresolved includes and conflicts as failure.
    pub fail_on_issues: Option<bool>,
}

impl Config {
    /// The folder lists as resolver input.
    #[must_use]
    pub fn to_settings(&self) -> ResolverSettings {
        ResolverSettings {
            parse_folders: self.parse_folders.clone().unwrap_or_default(),
            include_folders: self.include_folders.clone().unwrap_or_default(),
            resolve_folders: self.resolve_folders.clone().unwrap_or_default(),
        }
    }

    /// Mutable access to every folder list, with its field name.
    pub(crate) fn folder_lists_mut(&mut self) -> [(&'static str, &mut Option<Vec<PathBuf>>); 3] {
        [
            ("parse_folders", &mut self.parse_folders),
            ("include_folders", &mut self.include_folders),
            ("resolve_folders", &mut self.resolve_folders),
        ]
    }

    /// Every folder list, with its field name.
    pub(crate) fn folder_lists(&self) -> [(&'static str, &Option<Vec<PathBuf>>); 3] {
        [
            ("parse_folders", &self.parse_folders),
            ("include_folders", &self.include_folders),
            ("resolve_folders", &self.resolve_folders),
        ]
    }
}
