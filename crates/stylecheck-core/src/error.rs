//! Error types for the linting engine.

use std::path::PathBuf;

/// Result type alias for lint operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while linting.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// CSS parsing error.
    #[error("CSS parse error at line {line}: {message}")]
    Parse { message: String, line: u32 },

    /// Selector parsing error.
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    /// Markup scanning error.
    #[error("Failed to scan markup '{path}': {message}")]
    Markup { path: PathBuf, message: String },

    /// File I/O error.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file error.
    #[error("Invalid configuration '{path}': {message}")]
    Config { path: PathBuf, message: String },

    /// Invalid naming pattern in configuration.
    #[error("Invalid pattern for {kind}: {source}")]
    Pattern {
        kind: String,
        #[source]
        source: regex::Error,
    },
}

impl Error {
    /// Create a parse error.
    pub fn parse(message: impl Into<String>, line: u32) -> Self {
        Self::Parse {
            message: message.into(),
            line,
        }
    }

    /// Create a selector error.
    pub fn invalid_selector(selector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            message: message.into(),
        }
    }

    /// Create a markup error.
    pub fn markup(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Markup {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a pattern error.
    pub fn pattern(kind: impl Into<String>, source: regex::Error) -> Self {
        Self::Pattern {
            kind: kind.into(),
            source,
        }
    }
}
