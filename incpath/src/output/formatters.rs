//! Output formatter implementations.

use super::OutputFormatter;
use crate::path::pretty_string;
use crate::{ResolutionResult, Result};

/// Formatter for the human-readable report.
///
/// Empty sections are omitted. A clean run with no search folders renders as
/// a single line.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, result: &ResolutionResult) -> Result<String> {
        let mut sections = Vec::new();

        if !result.invalid_paths.is_empty() {
            let mut lines = vec!["Invalid paths:".to_string()];
            lines.extend(
                result
                    .invalid_paths
                    .iter()
                    .map(|p| format!("\t{}", pretty_string(p))),
            );
            sections.push(lines.join("\n"));
        }

        if !result.unresolved.is_empty() {
            let mut lines = vec!["Unresolved includes:".to_string()];
            lines.extend(result.unresolved.iter().map(|u| format!("\t{u}")));
            sections.push(lines.join("\n"));
        }

        if !result.conflicted.is_empty() {
            let mut lines = vec!["Conflicted includes:".to_string()];
            for (include, conflict) in &result.conflicted {
                lines.push(include.clone());
                lines.push(conflict.to_string());
            }
            sections.push(lines.join("\n"));
        }

        if !result.search_folders.is_empty() {
            let mut lines = vec!["Include folders:".to_string()];
            lines.extend(result.search_folders.iter().map(|f| format!("\t{f}")));
            sections.push(lines.join("\n"));
        }

        if sections.is_empty() {
            return Ok("No include folders required.".to_string());
        }

        Ok(sections.join("\n\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &ResolutionResult) -> Result<String> {
        Ok(serde_json::to_string_pretty(result)?)
    }
}

/// Formatter for compiler flags, one `-I<folder>` per line.
///
/// Issues are not rendered; they go to the log instead.
pub struct FlagsFormatter;

impl OutputFormatter for FlagsFormatter {
    fn format(&self, result: &ResolutionResult) -> Result<String> {
        let lines: Vec<String> = result
            .search_folders
            .iter()
            .map(|folder| format!("-I{folder}"))
            .collect();

        Ok(lines.join("\n"))
    }
}
