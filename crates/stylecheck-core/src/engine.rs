//! The lint engine: configuration, registry, and document walking.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::config::LintConfig;
use crate::document::StyleDocument;
use crate::markup::MarkupDocument;
use crate::report::Report;
use crate::rules::{Registry, RuleContext};
use crate::taxonomy::Taxonomy;
use crate::{Error, Result};

/// Drives the registered rules over stylesheets and markup.
pub struct LintEngine {
    config: LintConfig,
    registry: Registry,
    taxonomy: Taxonomy,
    banner: Regex,
}

impl LintEngine {
    /// Create an engine with the default rule set.
    ///
    /// Fails if the configuration carries an invalid naming or banner
    /// pattern.
    pub fn new(config: LintConfig) -> Result<Self> {
        Self::with_registry(config, Registry::with_default_rules())
    }

    /// Create an engine with a custom rule registry.
    pub fn with_registry(config: LintConfig, registry: Registry) -> Result<Self> {
        let taxonomy = Taxonomy::new(&config.conventions)?;
        let banner = Regex::new(&config.sections.banner)
            .map_err(|e| Error::pattern("banner", e))?;

        Ok(Self {
            config,
            registry,
            taxonomy,
            banner,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// The rule registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    fn context(&self) -> RuleContext<'_> {
        RuleContext {
            config: &self.config,
            taxonomy: &self.taxonomy,
            banner: &self.banner,
        }
    }

    /// Lint CSS text.
    pub fn lint_css_str(&self, css: &str, name: &str) -> Result<Report> {
        let mut doc = StyleDocument::from_css(css)?;
        doc.path = Some(PathBuf::from(name));
        Ok(self.run_css(&doc))
    }

    /// Lint a CSS file.
    pub fn lint_css_file(&self, path: impl AsRef<Path>) -> Result<Report> {
        let doc = StyleDocument::from_file(path)?;
        Ok(self.run_css(&doc))
    }

    /// Lint markup text.
    pub fn lint_markup_str(&self, html: &str, name: &str) -> Result<Report> {
        let mut doc = MarkupDocument::from_str(html)?;
        doc.path = Some(PathBuf::from(name));
        Ok(self.run_markup(&doc))
    }

    /// Lint a markup file.
    pub fn lint_markup_file(&self, path: impl AsRef<Path>) -> Result<Report> {
        let doc = MarkupDocument::from_file(path)?;
        Ok(self.run_markup(&doc))
    }

    /// Lint a file or a directory tree.
    ///
    /// Directories are walked recursively; `.css`, `.html`, and `.htm`
    /// files are linted, everything else is ignored.
    pub fn lint_path(&self, path: impl AsRef<Path>) -> Result<Report> {
        let path = path.as_ref();
        let mut report = Report::new();

        if path.is_dir() {
            let mut files = vec![];
            collect_files(path, &mut files)?;
            files.sort();

            for file in files {
                report.merge(self.lint_file(&file)?);
            }
        } else {
            report.merge(self.lint_file(path)?);
        }

        Ok(report)
    }

    fn lint_file(&self, path: &Path) -> Result<Report> {
        match extension(path) {
            Some("css") => {
                tracing::debug!("Linting stylesheet {}", path.display());
                self.lint_css_file(path)
            }
            Some("html") | Some("htm") => {
                tracing::debug!("Linting markup {}", path.display());
                self.lint_markup_file(path)
            }
            _ => Err(Error::io(
                path,
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "not a stylesheet or markup file",
                ),
            )),
        }
    }

    fn run_css(&self, doc: &StyleDocument) -> Report {
        let ctx = self.context();
        let mut diagnostics = vec![];

        for rule in self.registry.iter() {
            if self.config.is_disabled(rule.id()) {
                continue;
            }
            rule.check_css(doc, &ctx, &mut diagnostics);
        }

        diagnostics.sort_by_key(|d| d.line);

        let mut report = Report::new();
        report.add_file();
        for diag in diagnostics {
            report.push(diag);
        }
        report
    }

    fn run_markup(&self, doc: &MarkupDocument) -> Report {
        let ctx = self.context();
        let mut diagnostics = vec![];

        for rule in self.registry.iter() {
            if self.config.is_disabled(rule.id()) {
                continue;
            }
            rule.check_markup(doc, &ctx, &mut diagnostics);
        }

        diagnostics.sort_by_key(|d| d.line);

        let mut report = Report::new();
        report.add_file();
        for diag in diagnostics {
            report.push(diag);
        }
        report
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();

        if path.is_dir() {
            collect_files(&path, out)?;
        } else if matches!(extension(&path), Some("css") | Some("html") | Some("htm")) {
            out.push(path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;
    use std::io::Write;

    fn engine() -> LintEngine {
        LintEngine::new(LintConfig::default()).unwrap()
    }

    #[test]
    fn conforming_stylesheet_is_clean() {
        let css = r#"
            /* == components == */
            .search-form { color: red; }
            .search-form .title { font-weight: bold; }
            .search-form.is-open { display: block; }
            /* == utilities == */
            .u-hidden { display: none !important; }
        "#;
        let report = engine().lint_css_str(css, "app.css").unwrap();
        assert!(report.is_clean(), "{}", report.format_human(Severity::Info));
    }

    #[test]
    fn violations_surface_with_rule_ids() {
        let css = "#submit { color: red; }\n.Bad_Name { color: blue; }";
        let report = engine().lint_css_str(css, "app.css").unwrap();

        let rules: Vec<_> = report.diagnostics().iter().map(|d| d.rule.as_str()).collect();
        assert!(rules.contains(&"specificity/ceiling"));
        assert!(rules.contains(&"naming/class-pattern"));
    }

    #[test]
    fn disabled_rules_are_skipped() {
        let mut config = LintConfig::default();
        config.rules.disabled.push("specificity/ceiling".to_string());
        let engine = LintEngine::new(config).unwrap();

        let report = engine.lint_css_str("#submit { color: red; }", "app.css").unwrap();
        assert!(
            report
                .diagnostics()
                .iter()
                .all(|d| d.rule != "specificity/ceiling")
        );
    }

    #[test]
    fn severity_overrides_apply() {
        let mut config = LintConfig::default();
        config
            .rules
            .severity
            .insert("naming/class-pattern".to_string(), Severity::Info);
        let engine = LintEngine::new(config).unwrap();

        let report = engine.lint_css_str(".BadName { color: red; }", "app.css").unwrap();
        assert_eq!(report.diagnostics()[0].severity, Severity::Info);
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn invalid_convention_pattern_fails_construction() {
        let mut config = LintConfig::default();
        config.conventions.component = "([".to_string();
        assert!(LintEngine::new(config).is_err());
    }

    #[test]
    fn markup_linting() {
        let html = r#"<div class="search-form is-open"><b class="Oops">x</b></div>"#;
        let report = engine().lint_markup_str(html, "page.html").unwrap();

        assert_eq!(report.diagnostics().len(), 1);
        assert_eq!(report.diagnostics()[0].rule, "markup/class-pattern");
    }

    #[test]
    fn directory_walk() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("styles");
        std::fs::create_dir(&sub).unwrap();

        let mut css = std::fs::File::create(sub.join("app.css")).unwrap();
        writeln!(css, ".search-form {{ color: red; }}").unwrap();

        let mut html = std::fs::File::create(dir.path().join("index.html")).unwrap();
        writeln!(html, r#"<div class="search-form">x</div>"#).unwrap();

        let mut other = std::fs::File::create(dir.path().join("notes.txt")).unwrap();
        writeln!(other, "ignored").unwrap();

        let report = engine().lint_path(dir.path()).unwrap();
        assert_eq!(report.files_checked(), 2);
        assert!(report.is_clean());
    }

    #[test]
    fn lint_file_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "x").unwrap();

        let engine = engine();
        assert!(engine.lint_path(&path).is_err());
    }
}
