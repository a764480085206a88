//! Comment formatting rules.

use super::{LintRule, RuleContext};
use crate::document::StyleDocument;
use crate::report::{Diagnostic, Severity};

/// A comment that looks like an attempted section banner must match the
/// banner pattern exactly.
pub struct BannerFormat;

impl LintRule for BannerFormat {
    fn id(&self) -> &'static str {
        "comment/banner-format"
    }

    fn description(&self) -> &'static str {
        "section banners must match the configured banner format"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_css(&self, doc: &StyleDocument, ctx: &RuleContext<'_>, out: &mut Vec<Diagnostic>) {
        let file = doc.display_name();

        for comment in &doc.comments {
            let looks_like_banner = comment.text.starts_with('=');
            if looks_like_banner && !ctx.banner.is_match(&comment.text) {
                out.push(Diagnostic::new(
                    ctx.severity(self),
                    self.id(),
                    format!(
                        "banner comment does not match the pattern '{}'",
                        ctx.config.sections.banner
                    ),
                    &file,
                    comment.line,
                    comment.text.clone(),
                ));
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

    fn run(css: &str) -> Vec<Diagnostic> {
        let config = LintConfig::default();
        let taxonomy = Taxonomy::new(&config.conventions).unwrap();
        let banner = Regex::new(&config.sections.banner).unwrap();
        let ctx = RuleContext {
            config: &config,
            taxonomy: &taxonomy,
            banner: &banner,
        };

        let doc = StyleDocument::from_css(css).unwrap();
        let mut out = vec![];
        BannerFormat.check_css(&doc, &ctx, &mut out);
        out
    }

    #[test]
    fn well_formed_banner_is_fine() {
        assert!(run("/* == components == */\n.search-form { color: red; }").is_empty());
    }

    #[test]
    fn malformed_banner_is_flagged() {
        let out = run("/* ==components== */\n.search-form { color: red; }");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].rule, "comment/banner-format");
    }

    #[test]
    fn ordinary_comments_are_ignored() {
        assert!(run("/* fallback for older engines */\n.search-form { color: red; }").is_empty());
    }
}
