//! Report aggregation over diagnostics.

use serde_json::json;

use super::{Diagnostic, Severity};

/// The aggregated outcome of a lint run.
#[derive(Debug, Default)]
pub struct Report {
    diagnostics: Vec<Diagnostic>,
    files_checked: usize,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a file was checked.
    pub fn add_file(&mut self) {
        self.files_checked += 1;
    }

    /// Add a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Merge another report into this one.
    pub fn merge(&mut self, other: Report) {
        self.diagnostics.extend(other.diagnostics);
        self.files_checked += other.files_checked;
    }

    /// All diagnostics, in the order they were produced.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of files checked.
    pub fn files_checked(&self) -> usize {
        self.files_checked
    }

    /// True if no diagnostics were produced.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Count diagnostics at exactly the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// Render diagnostics at or above `min_severity` as human-readable text.
    ///
    /// The summary counts cover the same filtered set as the listing.
    pub fn format_human(&self, min_severity: Severity) -> String {
        let shown: Vec<_> = self
            .diagnostics
            .iter()
            .filter(|d| d.severity >= min_severity)
            .collect();

        let mut output = String::new();

        for diag in &shown {
            output.push_str(&diag.format_human());
            output.push('\n');
        }

        let count =
            |severity| shown.iter().filter(|d| d.severity == severity).count();

        output.push_str(&format!(
            "{} files checked: {} errors, {} warnings, {} notes\n",
            self.files_checked,
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Info),
        ));

        output
    }

    /// Render diagnostics at or above `min_severity` as JSON.
    pub fn format_json(&self, min_severity: Severity) -> String {
        let diagnostics: Vec<_> = self
            .diagnostics
            .iter()
            .filter(|d| d.severity >= min_severity)
            .collect();

        let errors = diagnostics.iter().filter(|d| d.severity == Severity::Error).count();
        let warnings = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count();

        serde_json::to_string_pretty(&json!({
            "files_checked": self.files_checked,
            "errors": errors,
            "warnings": warnings,
            "diagnostics": diagnostics,
        }))
        .unwrap_or_default()
    }

    /// Process exit code: 0 = clean, 1 = errors present, 2 = warnings only.
    pub fn exit_code(&self) -> i32 {
        if self
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
        {
            1
        } else if self
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Warning)
        {
            2
        } else {
            0
        }
    }
}
