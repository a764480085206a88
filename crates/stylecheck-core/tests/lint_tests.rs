//! End-to-end lint tests over whole documents.

use std::io::Write;

use stylecheck_core::config::LintConfig;
use stylecheck_core::engine::LintEngine;
use stylecheck_core::report::Severity;

fn engine() -> LintEngine {
    LintEngine::new(LintConfig::default()).unwrap()
}

fn rule_ids(report: &stylecheck_core::report::Report) -> Vec<String> {
    let mut ids: Vec<String> = report
        .diagnostics()
        .iter()
        .map(|d| d.rule.clone())
        .collect();
    ids.sort();
    ids.dedup();
    ids
}

#[test]
fn conforming_stylesheet_produces_empty_report() {
    let css = r#"
        /* == settings == */
        html { font-size: 16px; }
        body { margin: 0; }

        /* == components == */
        .site-nav { display: flex; }
        .site-nav .item { padding: 4px; }
        .site-nav .item.is-active { font-weight: bold; }
        .site-nav.-compact .item { padding: 2px; }

        .search-form { display: block; }
        .search-form > .title { font-size: 20px; }
        .when-dark .search-form { background: black; }

        /* == utilities == */
        .u-hidden { display: none !important; }

        /* == overrides == */
        ._legacy-header { color: red !important; }
    "#;

    let report = engine().lint_css_str(css, "app.css").unwrap();
    assert!(
        report.is_clean(),
        "expected clean report, got:\n{}",
        report.format_human(Severity::Info)
    );
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn seeded_violations_fire_the_expected_rules() {
    let css = r#"
        /* == utilities == */
        .u-hidden { display: none !important; }

        /* ==components== */

        /* == components == */
        #main-header { color: red; }
        .SearchForm { color: blue; }
        .title { color: green; }
        .is-open { display: block; }
        .search-form { margin: 0 !important; }
        .page-shell .site-nav .nav-list .item { color: gray; }
        section { padding: 0; }
    "#;

    let report = engine().lint_css_str(css, "app.css").unwrap();
    assert_eq!(
        rule_ids(&report),
        vec![
            "comment/banner-format",
            "naming/class-pattern",
            "naming/element-selectors",
            "order/sections",
            "specificity/ceiling",
            "specificity/important",
            "structure/depth",
            "structure/fragment-scope",
            "structure/qualified-state",
        ]
    );
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn markup_violations() {
    let html = r#"
        <body class="when-dark">
          <div class="search-form is-open">
            <span class="Title">Search</span>
            <span class="is-loading">...</span>
          </div>
        </body>
    "#;

    let report = engine().lint_markup_str(html, "index.html").unwrap();
    assert_eq!(
        rule_ids(&report),
        vec!["markup/class-pattern", "markup/orphan-state"]
    );
}

#[test]
fn warnings_only_exit_code() {
    // A deep selector is a warning by default; nothing else is wrong
    let css = ".page-shell .site-nav a .nav-link { color: red; }";

    let mut config = LintConfig::default();
    config.rules.disabled.push("order/sections".to_string());

    let engine = LintEngine::new(config).unwrap();
    let report = engine.lint_css_str(css, "app.css").unwrap();

    assert_eq!(report.count(Severity::Error), 0);
    assert!(report.count(Severity::Warning) > 0);
    assert_eq!(report.exit_code(), 2);
}

#[test]
fn config_reshapes_the_conventions() {
    let toml = r#"
        [conventions]
        state = "^has-[a-z-]+$"

        [limits]
        max-depth = 1

        [rules]
        disabled = ["order/sections", "structure/fragment-scope"]
    "#;
    let config: LintConfig = toml::from_str(toml).unwrap();
    let engine = LintEngine::new(config).unwrap();

    // "has-focus" is now a state and must be qualified
    let report = engine
        .lint_css_str(".has-focus { outline: none; }", "app.css")
        .unwrap();
    assert_eq!(rule_ids(&report), vec!["structure/qualified-state"]);

    // "is-open" no longer matches the state pattern; it degrades to a
    // component name and passes the naming check
    let report = engine
        .lint_css_str(".is-open { display: block; }", "app.css")
        .unwrap();
    assert!(report.is_clean());
}

#[test]
fn lint_directory_end_to_end() {
    let dir = tempfile::tempdir().unwrap();

    let styles = dir.path().join("styles");
    std::fs::create_dir(&styles).unwrap();

    let mut good = std::fs::File::create(styles.join("components.css")).unwrap();
    writeln!(good, ".search-form {{ color: red; }}").unwrap();

    let mut bad = std::fs::File::create(styles.join("legacy.css")).unwrap();
    writeln!(bad, "#header {{ color: blue; }}").unwrap();

    let mut page = std::fs::File::create(dir.path().join("index.html")).unwrap();
    writeln!(page, r#"<div class="search-form">x</div>"#).unwrap();

    let report = engine().lint_path(dir.path()).unwrap();

    assert_eq!(report.files_checked(), 3);
    assert_eq!(rule_ids(&report), vec!["specificity/ceiling"]);
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn json_report_shape() {
    let report = engine()
        .lint_css_str("#x { color: red; }", "app.css")
        .unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&report.format_json(Severity::Info)).unwrap();

    assert_eq!(json["files_checked"], 1);
    assert_eq!(json["errors"], 1);
    assert_eq!(json["diagnostics"][0]["rule"], "specificity/ceiling");
    assert_eq!(json["diagnostics"][0]["file"], "app.css");
}

#[test]
fn attribute_selectors_do_not_escape_checks() {
    // Attribute selectors are common in form styling; rules using them must
    // still be parsed and checked wherever the [...] falls
    let css = r#"
        input[type="text"].search-form { color: red; }
        .SearchForm[hidden] { color: blue; }
    "#;

    let report = engine().lint_css_str(css, "forms.css").unwrap();
    assert_eq!(rule_ids(&report), vec!["naming/class-pattern"]);
    assert!(report.diagnostics()[0].message.contains("SearchForm"));
}

#[test]
fn string_values_cannot_fabricate_banners() {
    let css = r#"
        /* == components == */
        .site-badge { content: "/* == overrides == */"; }
        .search-form { color: red; }
    "#;

    let report = engine().lint_css_str(css, "app.css").unwrap();
    assert!(
        report.is_clean(),
        "expected clean report, got:\n{}",
        report.format_human(Severity::Info)
    );
}

#[test]
fn parse_recovery_keeps_linting() {
    // The first rule is malformed; the ID selector after it must still be
    // caught
    let css = "% { color: red; }\n#submit { color: red; }";
    let report = engine().lint_css_str(css, "app.css").unwrap();

    assert!(
        report
            .diagnostics()
            .iter()
            .any(|d| d.rule == "specificity/ceiling")
    );
}
