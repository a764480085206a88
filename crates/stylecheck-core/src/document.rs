//! Parsed stylesheet documents.

use std::path::{Path, PathBuf};

use crate::selector::{Selector, Specificity};
use crate::{Error, Result};

/// A single property declaration inside a rule block.
///
/// Values are kept as raw source text; convention checks reason about
/// property names and the `!important` flag, never about computed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Property name, lowercased (e.g., "background-color").
    pub property: String,
    /// Raw value text with `!important` stripped.
    pub value: String,
    /// Whether the declaration carried `!important`.
    pub important: bool,
    /// 1-based source line of the property name.
    pub line: u32,
}

/// A block comment captured from the stylesheet source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Comment text without the `/*` and `*/` delimiters, trimmed.
    pub text: String,
    /// 1-based source line where the comment opens.
    pub line: u32,
}

/// A style rule: one or more selectors sharing a declaration block.
#[derive(Debug, Clone)]
pub struct CssRule {
    /// The selectors this block applies to (comma-separated in source).
    pub selectors: Vec<Selector>,
    /// The declarations in the block, in source order.
    pub declarations: Vec<Declaration>,
    /// 1-based source line where the rule starts.
    pub line: u32,
    /// Source order (for tie-breaking and late-wins checks).
    pub order: u32,
}

impl CssRule {
    /// Create a new rule.
    pub fn new(selectors: Vec<Selector>, declarations: Vec<Declaration>, line: u32, order: u32) -> Self {
        Self {
            selectors,
            declarations,
            line,
            order,
        }
    }

    /// Highest specificity among the rule's selectors.
    pub fn max_specificity(&self) -> Specificity {
        self.selectors
            .iter()
            .map(Specificity::of_selector)
            .max()
            .unwrap_or(Specificity::ZERO)
    }
}

/// A parsed stylesheet with its comments.
#[derive(Debug, Clone)]
pub struct StyleDocument {
    /// The rules in this stylesheet, in source order.
    pub rules: Vec<CssRule>,
    /// Block comments, in source order.
    pub comments: Vec<Comment>,
    /// Source file path, if loaded from disk.
    pub path: Option<PathBuf>,
}

impl StyleDocument {
    /// Parse a stylesheet from CSS text.
    pub fn from_css(css: &str) -> Result<Self> {
        let rules = crate::parser::parse_css(css)?;
        let comments = crate::parser::scan_comments(css);
        Ok(Self {
            rules,
            comments,
            path: None,
        })
    }

    /// Load and parse a stylesheet from a CSS file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        let mut doc = Self::from_css(&content)?;
        doc.path = Some(path.to_path_buf());
        Ok(doc)
    }

    /// Display name for diagnostics.
    pub fn display_name(&self) -> String {
        self.path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<input>".to_string())
    }

    /// Get the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the document has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over rules.
    pub fn iter(&self) -> impl Iterator<Item = &CssRule> {
        self.rules.iter()
    }
}
