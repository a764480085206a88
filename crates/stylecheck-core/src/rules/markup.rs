//! Markup-side rules: class usage in HTML.

use std::collections::HashSet;

use super::{LintRule, RuleContext};
use crate::markup::MarkupDocument;
use crate::report::{Diagnostic, Severity};
use crate::taxonomy::ClassKind;

/// Every class used in markup must classify to a known kind.
pub struct MarkupClassPattern;

impl LintRule for MarkupClassPattern {
    fn id(&self) -> &'static str {
        "markup/class-pattern"
    }

    fn description(&self) -> &'static str {
        "classes used in markup must match a convention kind"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check_markup(
        &self,
        doc: &MarkupDocument,
        ctx: &RuleContext<'_>,
        out: &mut Vec<Diagnostic>,
    ) {
        let file = doc.display_name();
        let mut seen: HashSet<&str> = HashSet::new();

        for (name, line) in doc.class_names() {
            if !seen.insert(name) {
                continue;
            }
            if ctx.taxonomy.classify(name) == ClassKind::Unknown {
                out.push(
                    Diagnostic::new(
                        ctx.severity(self),
                        self.id(),
                        format!("class '{}' matches no convention kind", name),
                        &file,
                        line,
                        format!("class=\"{}\"", name),
                    )
                    .with_suggestions(ctx.taxonomy.suggestions(name)),
                );
            }
        }
    }
}

/// A state or modifier class on an element must accompany the class it
/// varies.
pub struct OrphanState;

impl LintRule for OrphanState {
    fn id(&self) -> &'static str {
        "markup/orphan-state"
    }

    fn description(&self) -> &'static str {
        "state and modifier classes in markup must accompany a base class"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check_markup(
        &self,
        doc: &MarkupDocument,
        ctx: &RuleContext<'_>,
        out: &mut Vec<Diagnostic>,
    ) {
        let file = doc.display_name();

        for use_ in &doc.uses {
            let kinds: Vec<ClassKind> = use_
                .classes
                .iter()
                .map(|c| ctx.taxonomy.classify(c))
                .collect();

            let has_base = kinds.iter().any(|k| {
                matches!(
                    k,
                    ClassKind::Component | ClassKind::Fragment | ClassKind::Utility
                )
            });

            if has_base {
                continue;
            }

            for (class, kind) in use_.classes.iter().zip(&kinds) {
                if matches!(kind, ClassKind::State | ClassKind::Modifier) {
                    out.push(Diagnostic::new(
                        ctx.severity(self),
                        self.id(),
                        format!("{} '{}' has no base class on its element", kind, class),
                        &file,
                        use_.line,
                        format!("class=\"{}\"", use_.classes.join(" ")),
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LintConfig;
    use crate::taxonomy::Taxonomy;
    use regex::Regex;

    fn run(rule: &dyn LintRule, html: &str) -> Vec<Diagnostic> {
        let config = LintConfig::default();
        let taxonomy = Taxonomy::new(&config.conventions).unwrap();
        let banner = Regex::new(&config.sections.banner).unwrap();
        let ctx = RuleContext {
            config: &config,
            taxonomy: &taxonomy,
            banner: &banner,
        };

        let doc = MarkupDocument::from_str(html).unwrap();
        let mut out = vec![];
        rule.check_markup(&doc, &ctx, &mut out);
        out
    }

    #[test]
    fn bad_markup_class_is_flagged() {
        let out = run(
            &MarkupClassPattern,
            r#"<div class="SearchForm">x</div>"#,
        );
        assert_eq!(out.len(), 1);
        assert!(out[0].message.contains("SearchForm"));
    }

    #[test]
    fn repeated_bad_class_reports_once() {
        let html = r#"<div class="BadName"><span class="BadName">x</span></div>"#;
        assert_eq!(run(&MarkupClassPattern, html).len(), 1);
    }

    #[test]
    fn conforming_markup_is_silent() {
        let html = r#"<div class="search-form is-open"><span class="title">x</span></div>"#;
        assert!(run(&MarkupClassPattern, html).is_empty());
    }

    #[test]
    fn orphan_state_is_flagged() {
        let out = run(&OrphanState, r#"<div class="is-open">x</div>"#);
        assert_eq!(out.len(), 1);
        assert!(out[0].message.contains("is-open"));
    }

    #[test]
    fn accompanied_state_is_fine() {
        assert!(run(&OrphanState, r#"<div class="search-form is-open">x</div>"#).is_empty());
    }

    #[test]
    fn signals_may_stand_alone() {
        assert!(run(&OrphanState, r#"<body class="when-dark">x</body>"#).is_empty());
    }
}
