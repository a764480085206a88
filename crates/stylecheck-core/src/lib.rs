//! Convention linting engine for CSS and HTML class naming.
//!
//! This crate checks stylesheets and markup against a class-naming and
//! authoring convention, featuring:
//!
//! - **Taxonomy**: classifies class names as components, fragments, states,
//!   modifiers, signals, utilities, or overrides
//! - **Selectors**: a structural selector model with CSS specificity
//! - **Rules**: a registry of convention checks over parsed documents
//! - **Reporting**: severity-ranked diagnostics with human and JSON output
//!
//! # Example
//!
//! ```ignore
//! use stylecheck_core::prelude::*;
//!
//! let config = LintConfig::default();
//! let engine = LintEngine::new(config)?;
//!
//! let report = engine.lint_css_str(".search-form { color: red; }", "app.css")?;
//! assert!(report.is_clean());
//! ```

pub mod config;
pub mod document;
pub mod engine;
pub mod markup;
pub mod parser;
pub mod report;
pub mod rules;
pub mod selector;
pub mod taxonomy;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::config::{Limits, LintConfig, SectionSpec};
    pub use crate::document::{Comment, CssRule, Declaration, StyleDocument};
    pub use crate::engine::LintEngine;
    pub use crate::markup::{ClassUse, MarkupDocument};
    pub use crate::report::{Diagnostic, Report, Severity};
    pub use crate::rules::{LintRule, Registry, RuleContext};
    pub use crate::selector::{Combinator, PseudoClass, Selector, SelectorPart, Specificity};
    pub use crate::taxonomy::{ClassKind, Taxonomy};
}
