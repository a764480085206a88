//! Ordering rules: section banners and late-wins overrides.

use super::specificity::is_late_wins_rule;
use super::{LintRule, RuleContext};
use crate::document::StyleDocument;
use crate::report::{Diagnostic, Severity};
use crate::taxonomy::ClassKind;

/// Section banners must appear in the configured order.
pub struct Sections;

impl LintRule for Sections {
    fn id(&self) -> &'static str {
        "order/sections"
    }

    fn description(&self) -> &'static str {
        "section banners must follow the configured order"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_css(&self, doc: &StyleDocument, ctx: &RuleContext<'_>, out: &mut Vec<Diagnostic>) {
        let order = &ctx.config.sections.order;
        if order.is_empty() {
            return;
        }

        let file = doc.display_name();
        let mut last_index: Option<usize> = None;

        for comment in &doc.comments {
            let Some(caps) = ctx.banner.captures(&comment.text) else {
                continue;
            };
            let Some(name) = caps.get(1).map(|m| m.as_str().trim()) else {
                continue;
            };

            let Some(index) = order.iter().position(|s| s.eq_ignore_ascii_case(name)) else {
                out.push(Diagnostic::new(
                    ctx.severity(self),
                    self.id(),
                    format!("unknown section '{}'", name),
                    &file,
                    comment.line,
                    comment.text.clone(),
                ));
                continue;
            };

            if let Some(last) = last_index
                && index < last
            {
                out.push(Diagnostic::new(
                    ctx.severity(self),
                    self.id(),
                    format!(
                        "section '{}' appears after '{}'; expected order: {}",
                        name,
                        order[last],
                        order.join(", ")
                    ),
                    &file,
                    comment.line,
                    comment.text.clone(),
                ));
                continue;
            }

            last_index = Some(index);
        }
    }
}

/// Override rules must come after everything they may supersede.
pub struct OverridesLast;

impl LintRule for OverridesLast {
    fn id(&self) -> &'static str {
        "order/overrides-last"
    }

    fn description(&self) -> &'static str {
        "override rules must appear after all non-override rules"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_css(&self, doc: &StyleDocument, ctx: &RuleContext<'_>, out: &mut Vec<Diagnostic>) {
        let file = doc.display_name();

        let last_regular = doc
            .iter()
            .filter(|r| !is_override_rule(r, ctx))
            .map(|r| r.order)
            .max();

        let Some(last_regular) = last_regular else {
            return;
        };

        for rule in doc.iter() {
            if rule.order < last_regular && is_override_rule(rule, ctx) {
                let selector = rule
                    .selectors
                    .first()
                    .map(|s| s.to_string())
                    .unwrap_or_default();
                out.push(Diagnostic::new(
                    ctx.severity(self),
                    self.id(),
                    "override rule is declared before rules it may supersede".to_string(),
                    &file,
                    rule.line,
                    selector,
                ));
            }
        }
    }
}

fn is_override_rule(rule: &crate::document::CssRule, ctx: &RuleContext<'_>) -> bool {
    is_late_wins_rule(rule, ctx.taxonomy)
        && rule.selectors.iter().any(|selector| {
            selector.subject().is_some_and(|subject| {
                subject
                    .classes
                    .iter()
                    .any(|c| ctx.taxonomy.classify(c) == ClassKind::Override)
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LintConfig;
    use crate::taxonomy::Taxonomy;
    use regex::Regex;

    fn run_with(rule: &dyn LintRule, config: &LintConfig, css: &str) -> Vec<Diagnostic> {
        let taxonomy = Taxonomy::new(&config.conventions).unwrap();
        let banner = Regex::new(&config.sections.banner).unwrap();
        let ctx = RuleContext {
            config,
            taxonomy: &taxonomy,
            banner: &banner,
        };

        let doc = StyleDocument::from_css(css).unwrap();
        let mut out = vec![];
        rule.check_css(&doc, &ctx, &mut out);
        out
    }

    fn run(rule: &dyn LintRule, css: &str) -> Vec<Diagnostic> {
        run_with(rule, &LintConfig::default(), css)
    }

    #[test]
    fn sections_in_order_are_fine() {
        let css = r#"
            /* == settings == */
            html { color: black; }
            /* == components == */
            .search-form { color: red; }
            /* == overrides == */
            ._legacy-header { color: blue; }
        "#;
        assert!(run(&Sections, css).is_empty());
    }

    #[test]
    fn out_of_order_sections_are_flagged() {
        let css = r#"
            /* == utilities == */
            .u-hidden { display: none; }
            /* == components == */
            .search-form { color: red; }
        "#;
        let out = run(&Sections, css);
        assert_eq!(out.len(), 1);
        assert!(out[0].message.contains("'components' appears after 'utilities'"));
    }

    #[test]
    fn unknown_section_is_flagged() {
        let out = run(&Sections, "/* == misc == */\n.search-form { color: red; }");
        assert_eq!(out.len(), 1);
        assert!(out[0].message.contains("unknown section 'misc'"));
    }

    #[test]
    fn non_banner_comments_are_ignored() {
        let css = "/* just a note */\n.search-form { color: red; }";
        assert!(run(&Sections, css).is_empty());
    }

    #[test]
    fn empty_order_disables_check() {
        let mut config = LintConfig::default();
        config.sections.order.clear();

        let css = "/* == zzz == */\n.search-form { color: red; }";
        assert!(run_with(&Sections, &config, css).is_empty());
    }

    #[test]
    fn early_override_is_flagged() {
        let css = r#"
            ._legacy-header { color: blue; }
            .search-form { color: red; }
        "#;
        let out = run(&OverridesLast, css);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].rule, "order/overrides-last");
    }

    #[test]
    fn trailing_override_is_fine() {
        let css = r#"
            .search-form { color: red; }
            ._legacy-header { color: blue; }
        "#;
        assert!(run(&OverridesLast, css).is_empty());
    }

    #[test]
    fn utilities_do_not_count_as_overrides() {
        let css = r#"
            .u-hidden { display: none; }
            .search-form { color: red; }
        "#;
        assert!(run(&OverridesLast, css).is_empty());
    }
}
