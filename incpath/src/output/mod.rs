//! Output formatting module for resolution results.
//!
//! This module renders a [`ResolutionResult`] as a human-readable report, as
//! JSON, or as compiler `-I` flags.

mod formatters;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ResolutionResult, Result};

pub use formatters::{FlagsFormatter, HumanFormatter, JsonFormatter};

/// Trait for formatting resolution results into different output formats.
pub trait OutputFormatter {
    /// Format the given result into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the result cannot be serialized.
    fn format(&self, result: &ResolutionResult) -> Result<String>;
}

/// Available output formats for resolution results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Sectioned report of issues and search folders.
    #[default]
    Human,
    /// JSON object.
    Json,
    /// One `-I<folder>` line per search folder.
    Flags,
}

impl OutputFormat {
    /// Parses a format name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns a message naming the rejected value.
    ///
    /// # Examples
    ///
    /// ```
    /// use incpath::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
    /// assert!(OutputFormat::parse("xml").is_err());
    /// ```
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "flags" => Ok(Self::Flags),
            _ => Err(format!("invalid output format: {s} (expected human, json or flags)")),
        }
    }

    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Flags => Box::new(FlagsFormatter),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
            Self::Flags => write!(f, "flags"),
        }
    }
}
