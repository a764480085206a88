//! Specificity rules: the ceiling and `!important` discipline.

use super::{LintRule, RuleContext};
use crate::document::{CssRule, StyleDocument};
use crate::report::{Diagnostic, Severity};
use crate::selector::Specificity;
use crate::taxonomy::{ClassKind, Taxonomy};

/// Per-selector specificity must stay under the configured ceiling.
pub struct SpecificityCeiling;

impl LintRule for SpecificityCeiling {
    fn id(&self) -> &'static str {
        "specificity/ceiling"
    }

    fn description(&self) -> &'static str {
        "selector specificity must not exceed the configured ceiling"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check_css(&self, doc: &StyleDocument, ctx: &RuleContext<'_>, out: &mut Vec<Diagnostic>) {
        let file = doc.display_name();
        let ceiling = ctx.config.limits.specificity_ceiling();

        for rule in doc.iter() {
            for selector in &rule.selectors {
                let spec = Specificity::of_selector(selector);
                if !spec.exceeds(&ceiling) {
                    continue;
                }

                let message = if spec.ids() > ceiling.ids() {
                    format!(
                        "selector uses {} ID selector(s); ceiling is {}",
                        spec.ids(),
                        ceiling.ids()
                    )
                } else {
                    format!("selector specificity {} exceeds ceiling {}", spec, ceiling)
                };

                out.push(Diagnostic::new(
                    ctx.severity(self),
                    self.id(),
                    message,
                    &file,
                    rule.line,
                    selector.to_string(),
                ));
            }
        }
    }
}

/// `!important` is reserved for utility and override rules.
pub struct ImportantUsage;

impl LintRule for ImportantUsage {
    fn id(&self) -> &'static str {
        "specificity/important"
    }

    fn description(&self) -> &'static str {
        "!important is allowed only in utility and override rules"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check_css(&self, doc: &StyleDocument, ctx: &RuleContext<'_>, out: &mut Vec<Diagnostic>) {
        let file = doc.display_name();

        for rule in doc.iter() {
            if is_late_wins_rule(rule, ctx.taxonomy) {
                continue;
            }

            for decl in &rule.declarations {
                if decl.important {
                    out.push(Diagnostic::new(
                        ctx.severity(self),
                        self.id(),
                        format!(
                            "'{}' uses !important outside a utility or override rule",
                            decl.property
                        ),
                        &file,
                        decl.line,
                        format!("{}: {} !important", decl.property, decl.value),
                    ));
                }
            }
        }
    }
}

/// A rule is late-wins when every selector's subject carries a utility or
/// override class.
pub(crate) fn is_late_wins_rule(rule: &CssRule, taxonomy: &Taxonomy) -> bool {
    !rule.selectors.is_empty()
        && rule.selectors.iter().all(|selector| {
            selector.subject().is_some_and(|subject| {
                subject.classes.iter().any(|class| {
                    matches!(
                        taxonomy.classify(class),
                        ClassKind::Utility | ClassKind::Override
                    )
                })
            })
        })
}
