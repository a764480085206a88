//! Structural rules: nesting depth and class co-occurrence.

use super::{LintRule, RuleContext};
use crate::document::StyleDocument;
use crate::report::{Diagnostic, Severity};
use crate::selector::SelectorPart;
use crate::taxonomy::{ClassKind, Taxonomy};

/// Selectors may use at most the configured number of combinators.
pub struct Depth;

impl LintRule for Depth {
    fn id(&self) -> &'static str {
        "structure/depth"
    }

    fn description(&self) -> &'static str {
        "selector nesting depth must stay under the configured maximum"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_css(&self, doc: &StyleDocument, ctx: &RuleContext<'_>, out: &mut Vec<Diagnostic>) {
        let file = doc.display_name();
        let max_depth = ctx.config.limits.max_depth;

        for rule in doc.iter() {
            for selector in &rule.selectors {
                if selector.depth() > max_depth {
                    out.push(Diagnostic::new(
                        ctx.severity(self),
                        self.id(),
                        format!(
                            "selector uses {} combinators; maximum is {}",
                            selector.depth(),
                            max_depth
                        ),
                        &file,
                        rule.line,
                        selector.to_string(),
                    ));
                }
            }
        }
    }
}

/// A fragment must be styled in the scope of a component.
pub struct FragmentScope;

impl LintRule for FragmentScope {
    fn id(&self) -> &'static str {
        "structure/fragment-scope"
    }

    fn description(&self) -> &'static str {
        "fragment classes must be scoped to a component"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check_css(&self, doc: &StyleDocument, ctx: &RuleContext<'_>, out: &mut Vec<Diagnostic>) {
        let file = doc.display_name();

        for rule in doc.iter() {
            for selector in &rule.selectors {
                let Some(subject) = selector.subject() else {
                    continue;
                };

                let subject_fragment = subject
                    .classes
                    .iter()
                    .find(|c| ctx.taxonomy.classify(c) == ClassKind::Fragment);

                let Some(fragment) = subject_fragment else {
                    continue;
                };

                let names_component = |part: &SelectorPart| {
                    part.classes
                        .iter()
                        .any(|c| ctx.taxonomy.classify(c) == ClassKind::Component)
                };

                let has_component =
                    names_component(subject) || selector.ancestors().iter().any(names_component);

                if !has_component {
                    out.push(Diagnostic::new(
                        ctx.severity(self),
                        self.id(),
                        format!(
                            "fragment '{}' is styled outside any component scope",
                            fragment
                        ),
                        &file,
                        rule.line,
                        selector.to_string(),
                    ));
                }
            }
        }
    }
}

/// State and modifier classes must be qualified within their selector part.
pub struct QualifiedState;

impl LintRule for QualifiedState {
    fn id(&self) -> &'static str {
        "structure/qualified-state"
    }

    fn description(&self) -> &'static str {
        "state and modifier classes must co-occur with what they vary"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check_css(&self, doc: &StyleDocument, ctx: &RuleContext<'_>, out: &mut Vec<Diagnostic>) {
        let file = doc.display_name();

        for rule in doc.iter() {
            for selector in &rule.selectors {
                for part in &selector.parts {
                    let Some(varying) = part.classes.iter().find(|c| {
                        matches!(
                            ctx.taxonomy.classify(c),
                            ClassKind::State | ClassKind::Modifier
                        )
                    }) else {
                        continue;
                    };

                    if !is_qualified(part, ctx.taxonomy) {
                        let kind = ctx.taxonomy.classify(varying);
                        out.push(Diagnostic::new(
                            ctx.severity(self),
                            self.id(),
                            format!(
                                "{} '{}' does not name what it varies",
                                kind, varying
                            ),
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

/// A part qualifies a state/modifier when it also names an element, a
/// component, a fragment, or a utility.
fn is_qualified(part: &SelectorPart, taxonomy: &Taxonomy) -> bool {
    part.element_name().is_some()
        || part.classes.iter().any(|c| {
            matches!(
                taxonomy.classify(c),
                ClassKind::Component | ClassKind::Fragment | ClassKind::Utility
            )
        })
}
