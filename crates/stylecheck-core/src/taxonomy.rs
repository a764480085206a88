//! Class-name taxonomy.
//!
//! Every class name in a checked codebase is expected to fall into one of
//! the convention's kinds. Classification is pattern-based and every pattern
//! can be overridden from configuration.

use std::fmt;

use regex::Regex;

use crate::config::Conventions;
use crate::{Error, Result};

/// The convention kind of a class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    /// A named, reusable grouping of rules applied to a markup subtree
    /// (e.g., `search-form`).
    Component,
    /// A rule styling a component's descendant content (e.g., `title`).
    Fragment,
    /// A dynamic/runtime style variation (e.g., `is-open`).
    State,
    /// A static variant of a component (e.g., `-compact`).
    Modifier,
    /// A document-level toggle broadcasting a condition to many components
    /// at once (e.g., `when-dark`).
    Signal,
    /// A single-purpose helper class (e.g., `u-hidden`).
    Utility,
    /// A rule intentionally declared after, and superseding, earlier styling
    /// (e.g., `_legacy-header`).
    Override,
    /// Matches no configured pattern. Always a naming violation.
    Unknown,
}

impl ClassKind {
    /// All kinds with a configurable pattern, in classification precedence
    /// order. Prefixed kinds come first so they are never mistaken for
    /// components or fragments.
    pub const PRECEDENCE: [ClassKind; 7] = [
        ClassKind::Utility,
        ClassKind::State,
        ClassKind::Signal,
        ClassKind::Override,
        ClassKind::Modifier,
        ClassKind::Component,
        ClassKind::Fragment,
    ];
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClassKind::Component => "component",
            ClassKind::Fragment => "fragment",
            ClassKind::State => "state",
            ClassKind::Modifier => "modifier",
            ClassKind::Signal => "signal",
            ClassKind::Utility => "utility",
            ClassKind::Override => "override",
            ClassKind::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// Compiled naming patterns for every class kind.
#[derive(Debug)]
pub struct Taxonomy {
    component: Regex,
    fragment: Regex,
    state: Regex,
    modifier: Regex,
    signal: Regex,
    utility: Regex,
    override_: Regex,
}

impl Taxonomy {
    /// Compile a taxonomy from convention patterns.
    pub fn new(conventions: &Conventions) -> Result<Self> {
        let compile = |kind: ClassKind, pattern: &str| {
            Regex::new(pattern).map_err(|e| Error::pattern(kind.to_string(), e))
        };

        Ok(Self {
            component: compile(ClassKind::Component, &conventions.component)?,
            fragment: compile(ClassKind::Fragment, &conventions.fragment)?,
            state: compile(ClassKind::State, &conventions.state)?,
            modifier: compile(ClassKind::Modifier, &conventions.modifier)?,
            signal: compile(ClassKind::Signal, &conventions.signal)?,
            utility: compile(ClassKind::Utility, &conventions.utility)?,
            override_: compile(ClassKind::Override, &conventions.override_)?,
        })
    }

    /// Compile the default taxonomy.
    pub fn default_patterns() -> Self {
        Self::new(&Conventions::default()).expect("default patterns are valid")
    }

    fn pattern(&self, kind: ClassKind) -> Option<&Regex> {
        match kind {
            ClassKind::Component => Some(&self.component),
            ClassKind::Fragment => Some(&self.fragment),
            ClassKind::State => Some(&self.state),
            ClassKind::Modifier => Some(&self.modifier),
            ClassKind::Signal => Some(&self.signal),
            ClassKind::Utility => Some(&self.utility),
            ClassKind::Override => Some(&self.override_),
            ClassKind::Unknown => None,
        }
    }

    /// Classify a class name.
    ///
    /// Patterns are tried in [`ClassKind::PRECEDENCE`] order; the first match
    /// wins. Names matching nothing classify as [`ClassKind::Unknown`].
    pub fn classify(&self, name: &str) -> ClassKind {
        for kind in ClassKind::PRECEDENCE {
            if let Some(re) = self.pattern(kind)
                && re.is_match(name)
            {
                return kind;
            }
        }
        ClassKind::Unknown
    }

    /// Suggest conforming spellings for a name that failed to classify.
    pub fn suggestions(&self, name: &str) -> Vec<String> {
        let mut out = vec![];

        let normalized = name
            .to_lowercase()
            .replace('_', "-")
            .trim_matches('-')
            .to_string();

        if !normalized.is_empty() && normalized != name {
            if self.classify(&normalized) != ClassKind::Unknown {
                out.push(format!("rename to '{}'", normalized));
            }
            let hyphenated = camel_to_kebab(name);
            if hyphenated != normalized && self.classify(&hyphenated) != ClassKind::Unknown {
                out.push(format!("rename to '{}'", hyphenated));
            }
        }

        if out.is_empty() {
            out.push("use a component (two-word), fragment (one-word), or prefixed kind name".to_string());
        }

        out
    }
}

/// Convert camelCase/PascalCase to kebab-case.
fn camel_to_kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else if ch == '_' {
            out.push('-');
        } else {
            out.push(ch);
        }
    }
    out
}
