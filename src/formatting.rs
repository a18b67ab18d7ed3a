//! Formatting helper functions for the command line
//!
//! This module renders diagnostics and decorations for display. Positions are
//! printed 1-based, the way editors and compilers show them.

use crate::decorations::Decoration;
use crate::diagnostic::{Diagnostic, Severity};
use anyhow::Result;
use serde::Serialize;

/// Keep diagnostics at least as urgent as `min_severity`
///
/// # Arguments
/// * `diagnostics` - Diagnostics to filter in place
/// * `min_severity` - Least urgent severity to keep
pub fn apply_severity_filter(diagnostics: &mut Vec<Diagnostic>, min_severity: Severity) {
    diagnostics.retain(|d| d.severity.rank() >= min_severity.rank());
}

/// Format diagnostics one per line as `path:line:col: severity: message`
///
/// # Arguments
/// * `path` - Document name shown in front of each diagnostic
/// * `diagnostics` - Diagnostics to format
///
/// # Returns
/// Formatted string, or "No diagnostics found" when there is nothing to show
pub fn format_diagnostics(path: &str, diagnostics: &[Diagnostic]) -> String {
    if diagnostics.is_empty() {
        return "No diagnostics found\n".to_string();
    }

    let mut result = String::new();
    for diagnostic in diagnostics {
        let start = diagnostic.range.start;
        result.push_str(&format!(
            "{}:{}:{}: {}: {}\n",
            path,
            start.line + 1,
            start.column + 1,
            diagnostic.severity,
            diagnostic.message
        ));
    }
    result
}

/// Format decorations as `line: text`
pub fn format_decorations<'a>(decorations: impl IntoIterator<Item = &'a Decoration>) -> String {
    let mut result = String::new();
    for decoration in decorations {
        result.push_str(&format!("{}: {}\n", decoration.line + 1, decoration.text));
    }
    result
}

#[derive(Serialize)]
struct Report<'a> {
    path: &'a str,
    diagnostics: &'a [Diagnostic],
}

/// Format diagnostics as a TOML document with one `[[diagnostics]]` table each
pub fn format_diagnostics_toml(path: &str, diagnostics: &[Diagnostic]) -> Result<String> {
    Ok(toml::to_string_pretty(&Report { path, diagnostics })?)
}
