//! Convention rules and the rule registry.

use regex::Regex;

use crate::config::LintConfig;
use crate::document::StyleDocument;
use crate::markup::MarkupDocument;
use crate::report::{Diagnostic, Severity};
use crate::taxonomy::Taxonomy;

mod comments;
mod markup;
mod naming;
mod order;
mod specificity;
mod structure;

pub use comments::BannerFormat;
pub use markup::{MarkupClassPattern, OrphanState};
pub use naming::{ClassPattern, ElementSelectors};
pub use order::{OverridesLast, Sections};
pub use specificity::{ImportantUsage, SpecificityCeiling};
pub use structure::{Depth, FragmentScope, QualifiedState};

/// Shared state passed to every rule invocation.
pub struct RuleContext<'a> {
    /// The active configuration.
    pub config: &'a LintConfig,
    /// Compiled naming patterns.
    pub taxonomy: &'a Taxonomy,
    /// Compiled section banner pattern.
    pub banner: &'a Regex,
}

impl RuleContext<'_> {
    /// Effective severity for a rule, honoring configuration overrides.
    pub fn severity(&self, rule: &dyn LintRule) -> Severity {
        self.config
            .severity_for(rule.id(), rule.default_severity())
    }
}

/// A single convention check.
///
/// A rule checks stylesheets, markup, or both; the default method bodies make
/// either side optional.
pub trait LintRule: Send + Sync {
    /// Stable rule ID (e.g., "naming/class-pattern").
    fn id(&self) -> &'static str;

    /// One-line description for `--list-rules`.
    fn description(&self) -> &'static str;

    /// Severity before configuration overrides.
    fn default_severity(&self) -> Severity;

    /// Check a parsed stylesheet.
    fn check_css(&self, doc: &StyleDocument, ctx: &RuleContext<'_>, out: &mut Vec<Diagnostic>) {
        let _ = (doc, ctx, out);
    }

    /// Check a scanned markup document.
    fn check_markup(&self, doc: &MarkupDocument, ctx: &RuleContext<'_>, out: &mut Vec<Diagnostic>) {
        let _ = (doc, ctx, out);
    }
}

/// The rule registry: convention IDs mapped to their checks.
pub struct Registry {
    rules: Vec<Box<dyn LintRule>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { rules: vec![] }
    }

    /// Create a registry with the full default rule set.
    pub fn with_default_rules() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ClassPattern));
        registry.register(Box::new(ElementSelectors));
        registry.register(Box::new(SpecificityCeiling));
        registry.register(Box::new(ImportantUsage));
        registry.register(Box::new(Depth));
        registry.register(Box::new(FragmentScope));
        registry.register(Box::new(QualifiedState));
        registry.register(Box::new(Sections));
        registry.register(Box::new(OverridesLast));
        registry.register(Box::new(BannerFormat));
        registry.register(Box::new(MarkupClassPattern));
        registry.register(Box::new(OrphanState));
        registry
    }

    /// Register a rule.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        debug_assert!(
            self.find(rule.id()).is_none(),
            "duplicate rule id: {}",
            rule.id()
        );
        self.rules.push(rule);
    }

    /// Look up a rule by ID.
    pub fn find(&self, id: &str) -> Option<&dyn LintRule> {
        self.rules.iter().find(|r| r.id() == id).map(|r| r.as_ref())
    }

    /// Iterate over registered rules.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_default_rules()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_is_complete() {
        let registry = Registry::with_default_rules();

        for id in [
            "naming/class-pattern",
            "naming/element-selectors",
            "specificity/ceiling",
            "specificity/important",
            "structure/depth",
            "structure/fragment-scope",
            "structure/qualified-state",
            "order/sections",
            "order/overrides-last",
            "comment/banner-format",
            "markup/class-pattern",
            "markup/orphan-state",
        ] {
            assert!(registry.find(id).is_some(), "missing rule: {}", id);
        }
    }

    #[test]
    fn rule_ids_are_unique() {
        let registry = Registry::with_default_rules();
        let mut ids: Vec<_> = registry.iter().map(|r| r.id()).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }
}
