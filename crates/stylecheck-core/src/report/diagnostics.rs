//! Diagnostic types for convention violations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity level of a diagnostic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single convention violation.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// Severity after configuration overrides.
    pub severity: Severity,
    /// The ID of the rule that produced this diagnostic.
    pub rule: String,
    /// Human-readable message.
    pub message: String,
    /// File the violation was found in.
    pub file: String,
    /// 1-based source line.
    pub line: u32,
    /// Offending source fragment (selector, class name, or comment text).
    pub context: String,
    /// Suggested fixes, possibly empty.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(
        severity: Severity,
        rule: impl Into<String>,
        message: impl Into<String>,
        file: impl Into<String>,
        line: u32,
        context: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            rule: rule.into(),
            message: message.into(),
            file: file.into(),
            line,
            context: context.into(),
            suggestions: Vec::new(),
        }
    }

    /// Attach fix suggestions.
    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Format as a human-readable block.
    pub fn format_human(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}:{} {}: {}\n",
            self.file, self.line, self.severity, self.rule
        ));
        output.push_str(&format!("    {}\n", self.context));
        output.push_str(&format!("  {}\n", self.message));

        for suggestion in &self.suggestions {
            output.push_str(&format!("  suggestion: {}\n", suggestion));
        }

        output
    }
}
