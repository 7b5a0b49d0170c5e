//! Configuration validation.

use std::path::Path;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use incpath::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// assert!(ConfigValidator::validate_complete(&config).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the entries of a single configuration source.
    ///
    /// A source may leave any field unset; only the values present are
    /// checked.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty folder entry or one holding a
    /// null byte.
    pub fn validate(config: &Config) -> Result<()> {
        for (field, list) in config.folder_lists() {
            for folder in list.iter().flatten() {
                Self::validate_folder(field, folder)?;
            }
        }
        Ok(())
    }

    /// Validate a fully merged configuration before resolving.
    ///
    /// # Errors
    ///
    /// Returns a validation error if [`Self::validate`] fails or if no parse
    /// folder is configured.
    pub fn validate_complete(config: &Config) -> Result<()> {
        Self::validate(config)?;

        if config.parse_folders.as_ref().map_or(true, Vec::is_empty) {
            return Err(Error::Validation {
                field: "parse_folders".into(),
                message: "At least one parse folder is required".into(),
            });
        }

        Ok(())
    }

    fn validate_folder(field: &str, folder: &Path) -> Result<()> {
        let text = folder.to_string_lossy();

        if text.trim().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Folder entries cannot be empty".into(),
            });
        }

        if text.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Folder '{text}' contains a null byte"),
            });
        }

        Ok(())
    }
}
