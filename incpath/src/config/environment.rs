//! Environment variable handling for configuration overrides.

use std::env;
use std::path::PathBuf;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::output::OutputFormat;

/// Folders appended to `parse_folders`, in platform path-list syntax.
pub const PARSE_FOLDERS_ENV: &str = "INCPATH_PARSE_FOLDERS";
/// Folders appended to `include_folders`, in platform path-list syntax.
pub const INCLUDE_FOLDERS_ENV: &str = "INCPATH_INCLUDE_FOLDERS";
/// Folders appended to `resolve_folders`, in platform path-list syntax.
pub const RESOLVE_FOLDERS_ENV: &str = "INCPATH_RESOLVE_FOLDERS";
/// Overrides `output_format`.
pub const OUTPUT_FORMAT_ENV: &str = "INCPATH_OUTPUT_FORMAT";
/// Overrides `fail_on_issues`.
pub const FAIL_ON_ISSUES_ENV: &str = "INCPATH_FAIL_ON_ISSUES";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use incpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `INCPATH_*` environment variables to `config`.
    ///
    /// Folder variables are appended to the existing lists; scalar variables
    /// replace the configured value.
    ///
    /// # Errors
    ///
    /// Returns an error if a scalar variable holds an invalid value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        let folder_vars = [PARSE_FOLDERS_ENV, INCLUDE_FOLDERS_ENV, RESOLVE_FOLDERS_ENV];
        for (var, (_, list)) in folder_vars.into_iter().zip(config.folder_lists_mut()) {
            if let Some(value) = env::var_os(var) {
                let folders: Vec<PathBuf> = env::split_paths(&value)
                    .filter(|p| !p.as_os_str().is_empty())
                    .collect();
                list.get_or_insert_with(Vec::new).extend(folders);
            }
        }

        if let Ok(value) = env::var(OUTPUT_FORMAT_ENV) {
            let format = OutputFormat::parse(&value).map_err(|message| Error::Validation {
                field: OUTPUT_FORMAT_ENV.into(),
                message,
            })?;
            config.output_format = Some(format);
        }

        if let Ok(value) = env::var(FAIL_ON_ISSUES_ENV) {
            config.fail_on_issues = Some(Self::parse_bool(FAIL_ON_ISSUES_ENV, &value)?);
        }

        Ok(())
    }

    /// Parse a boolean from environment variable value.
    ///
    /// Accepts true/false, 1/0 and yes/no, case-insensitively.
    fn parse_bool(var_name: &str, value: &str) -> Result<bool> {
        match value.to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(Error::Validation {
                field: var_name.into(),
                message: format!("Invalid boolean value: {value}"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ALL_VARS: [&str; 5] = [
        PARSE_FOLDERS_ENV,
        INCLUDE_FOLDERS_ENV,
        RESOLVE_FOLDERS_ENV,
        OUTPUT_FORMAT_ENV,
        FAIL_ON_ISSUES_ENV,
    ];

    fn clear_env() {
        for var in ALL_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_parse_bool() {
        assert!(EnvironmentConfig::parse_bool("X", "TRUE").unwrap());
        assert!(EnvironmentConfig::parse_bool("X", "1").unwrap());
        assert!(EnvironmentConfig::parse_bool("X", "yes").unwrap());
        assert!(!EnvironmentConfig::parse_bool("X", "false").unwrap());
        assert!(!EnvironmentConfig::parse_bool("X", "0").unwrap());
        assert!(EnvironmentConfig::parse_bool("X", "maybe").is_err());
    }

    #[test]
    #[serial]
    fn test_no_env_leaves_config_untouched() {
        clear_env();
        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_folder_lists_are_appended() {
        clear_env();
        let joined = env::join_paths(["/opt/a", "/opt/b"]).unwrap();
        env::set_var(RESOLVE_FOLDERS_ENV, &joined);

        let mut config = Config {
            resolve_folders: Some(vec![PathBuf::from("/existing")]),
            ..Default::default()
        };
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        clear_env();

        assert_eq!(
            config.resolve_folders,
            Some(vec![
                PathBuf::from("/existing"),
                PathBuf::from("/opt/a"),
                PathBuf::from("/opt/b"),
            ])
        );
        assert_eq!(config.parse_folders, None);
    }

    #[test]
    #[serial]
    fn test_scalar_overrides() {
        clear_env();
        env::set_var(OUTPUT_FORMAT_ENV, "json");
        env::set_var(FAIL_ON_ISSUES_ENV, "yes");

        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        clear_env();

        assert_eq!(config.output_format, Some(OutputFormat::Json));
        assert_eq!(config.fail_on_issues, Some(true));
    }

    #[test]
    #[serial]
    fn test_invalid_output_format() {
        clear_env();
        env::set_var(OUTPUT_FORMAT_ENV, "xml");

        let mut config = Config::default();
        let result = EnvironmentConfig::apply_overrides(&mut config);
        clear_env();

        assert!(matches!(result, Err(Error::Validation { .. })));
    }
}
