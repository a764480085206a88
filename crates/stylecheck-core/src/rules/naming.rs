//! Naming rules: class patterns and element selector usage.

use std::collections::HashSet;

use super::{LintRule, RuleContext};
use crate::document::StyleDocument;
use crate::report::{Diagnostic, Severity};
use crate::taxonomy::ClassKind;

/// Every class in every selector must classify to a known kind.
pub struct ClassPattern;

impl LintRule for ClassPattern {
    fn id(&self) -> &'static str {
        "naming/class-pattern"
    }

    fn description(&self) -> &'static str {
        "class names must match a convention kind"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check_css(&self, doc: &StyleDocument, ctx: &RuleContext<'_>, out: &mut Vec<Diagnostic>) {
        let file = doc.display_name();

        for rule in doc.iter() {
            let mut seen: HashSet<&str> = HashSet::new();

            for selector in &rule.selectors {
                for class in selector.all_classes() {
                    if !seen.insert(class) {
                        continue;
                    }
                    if ctx.taxonomy.classify(class) == ClassKind::Unknown {
                        out.push(
                            Diagnostic::new(
                                ctx.severity(self),
                                self.id(),
                                format!("class '{}' matches no convention kind", class),
                                &file,
                                rule.line,
                                selector.to_string(),
                            )
                            .with_suggestions(ctx.taxonomy.suggestions(class)),
                        );
                    }
                }
            }
        }
    }
}

/// Bare element selectors are discouraged outside a small allowlist.
pub struct ElementSelectors;

impl LintRule for ElementSelectors {
    fn id(&self) -> &'static str {
        "naming/element-selectors"
    }

    fn description(&self) -> &'static str {
        "bare element selectors are restricted to an allowlist"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_css(&self, doc: &StyleDocument, ctx: &RuleContext<'_>, out: &mut Vec<Diagnostic>) {
        let file = doc.display_name();
        let allowed = &ctx.config.elements.allowed;

        for rule in doc.iter() {
            for selector in &rule.selectors {
                for part in &selector.parts {
                    if !part.is_bare_element() {
                        continue;
                    }
                    let name = part.element_name().unwrap_or_default();
                    if !allowed.iter().any(|a| a.eq_ignore_ascii_case(name)) {
                        out.push(Diagnostic::new(
                            ctx.severity(self),
                            self.id(),
                            format!("bare element selector '{}' is not in the allowlist", name),
                            &file,
                            rule.line,
                            selector.to_string(),
                        ));
                    }
                }
            }
        }
    }
}
