//! Configuration merging and precedence handling.
//!
//! Scalar fields are overwritten by higher-precedence sources. Folder lists
//! accumulate: every source adds its folders, and exact duplicates are
//! dropped keeping the first occurrence.

use std::path::PathBuf;

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use incpath::config::{Config, ConfigMerger};
/// use std::path::PathBuf;
///
/// let low = Config { parse_folders: Some(vec![PathBuf::from("src")]), ..Default::default() };
/// let high = Config { parse_folders: Some(vec![PathBuf::from("tools")]), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(
///     result.parse_folders,
///     Some(vec![PathBuf::from("src"), PathBuf::from("tools")])
/// );
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target.
    ///
    /// # Merging Rules
    ///
    /// - Scalar fields: source overwrites if Some
    /// - Folder lists: concatenated, duplicates removed
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.fail_on_issues.is_some() {
            target.fail_on_issues = source.fail_on_issues;
        }

        for ((_, target_list), (_, source_list)) in target
            .folder_lists_mut()
            .into_iter()
            .zip(source.folder_lists())
        {
            if let Some(folders) = source_list {
                Self::append_folders(target_list, folders);
            }
        }
    }

    fn append_folders(target: &mut Option<Vec<PathBuf>>, folders: &[PathBuf]) {
        let list = target.get_or_insert_with(Vec::new);
        for folder in folders {
            if !list.contains(folder) {
                list.push(folder.clone());
            }
        }
    }
}
