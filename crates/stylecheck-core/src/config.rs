//! Linter configuration.
//!
//! Configuration is a TOML file (conventionally `stylecheck.toml`). Every
//! table is optional; a missing file means defaults throughout.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::report::Severity;
use crate::selector::Specificity;
use crate::{Error, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "stylecheck.toml";

/// Naming patterns for each class kind, as regex source strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Conventions {
    /// Component: two or more lowercase words joined by single hyphens.
    pub component: String,
    /// Fragment: a single lowercase word.
    pub fragment: String,
    /// State: `is-` prefix.
    pub state: String,
    /// Modifier: leading hyphen.
    pub modifier: String,
    /// Signal: `when-` prefix.
    pub signal: String,
    /// Utility: `u-` prefix.
    pub utility: String,
    /// Override: leading underscore.
    #[serde(rename = "override")]
    pub override_: String,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            component: r"^[a-z][a-z0-9]*(-[a-z0-9]+)+$".to_string(),
            fragment: r"^[a-z][a-z0-9]*$".to_string(),
            state: r"^is-[a-z][a-z0-9]*(-[a-z0-9]+)*$".to_string(),
            modifier: r"^-[a-z][a-z0-9]*(-[a-z0-9]+)*$".to_string(),
            signal: r"^when-[a-z0-9]+(-[a-z0-9]+)*$".to_string(),
            utility: r"^u-[a-z0-9]+(-[a-z0-9]+)*$".to_string(),
            override_: r"^_[a-z][a-z0-9]*(-[a-z0-9]+)*$".to_string(),
        }
    }
}

/// Structural ceilings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// Maximum per-selector specificity as `[ids, classes, types]`,
    /// checked component-wise.
    #[serde(rename = "max-specificity")]
    pub max_specificity: [u32; 3],
    /// Maximum number of combinators per selector.
    #[serde(rename = "max-depth")]
    pub max_depth: usize,
}

impl Limits {
    /// The specificity ceiling as a [`Specificity`] value.
    pub fn specificity_ceiling(&self) -> Specificity {
        Specificity(
            self.max_specificity[0],
            self.max_specificity[1],
            self.max_specificity[2],
        )
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_specificity: [0, 3, 2],
            max_depth: 2,
        }
    }
}

/// Section banner conventions and required ordering.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SectionSpec {
    /// Required section order. Empty disables the ordering check.
    pub order: Vec<String>,
    /// Pattern a banner comment's text must match; the first capture group
    /// is the section name.
    pub banner: String,
}

impl Default for SectionSpec {
    fn default() -> Self {
        Self {
            order: vec![
                "settings".to_string(),
                "components".to_string(),
                "utilities".to_string(),
                "overrides".to_string(),
            ],
            banner: r"^== (.+) ==$".to_string(),
        }
    }
}

/// Rule enablement and severity overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    /// Rule IDs to disable.
    pub disabled: Vec<String>,
    /// Per-rule severity overrides.
    pub severity: HashMap<String, Severity>,
}

/// Element selector allowances.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElementsConfig {
    /// Element names that may appear as bare type selectors.
    pub allowed: Vec<String>,
}

impl Default for ElementsConfig {
    fn default() -> Self {
        Self {
            allowed: ["html", "body", "a", "img", "ul", "ol", "li", "p"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Complete linter configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    pub conventions: Conventions,
    pub limits: Limits,
    pub sections: SectionSpec,
    pub rules: RulesConfig,
    pub elements: ElementsConfig,
}

impl LintConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        toml::from_str(&content).map_err(|e| Error::config(path, e.to_string()))
    }

    /// Load `stylecheck.toml` from a directory if present, else defaults.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Self> {
        let candidate = dir.as_ref().join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!("Using configuration from {}", candidate.display());
            Self::from_file(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Whether a rule ID is disabled.
    pub fn is_disabled(&self, rule_id: &str) -> bool {
        self.rules.disabled.iter().any(|id| id == rule_id)
    }

    /// Severity for a rule, honoring overrides.
    pub fn severity_for(&self, rule_id: &str, default: Severity) -> Severity {
        self.rules
            .severity
            .get(rule_id)
            .copied()
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_sane() {
        let config = LintConfig::default();
        assert_eq!(config.limits.specificity_ceiling(), Specificity(0, 3, 2));
        assert_eq!(config.limits.max_depth, 2);
        assert!(!config.is_disabled("naming/class-pattern"));
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
            [conventions]
            utility = "^util-[a-z-]+$"

            [limits]
            max-specificity = [0, 2, 1]
            max-depth = 1

            [sections]
            order = ["components", "overrides"]

            [rules]
            disabled = ["order/sections"]

            [rules.severity]
            "naming/element-selectors" = "info"

            [elements]
            allowed = ["html", "body"]
        "#;
        let config: LintConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.conventions.utility, "^util-[a-z-]+$");
        assert_eq!(config.limits.specificity_ceiling(), Specificity(0, 2, 1));
        assert!(config.is_disabled("order/sections"));
        assert_eq!(
            config.severity_for("naming/element-selectors", Severity::Warning),
            Severity::Info
        );
        assert_eq!(
            config.severity_for("naming/class-pattern", Severity::Error),
            Severity::Error
        );
        assert_eq!(config.elements.allowed, vec!["html", "body"]);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let toml = "[limits]\nmax-nesting = 3\n";
        assert!(toml::from_str::<LintConfig>(toml).is_err());
    }

    #[test]
    fn discover_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = LintConfig::discover(dir.path()).unwrap();
        assert_eq!(config.limits.max_depth, 2);
    }

    #[test]
    fn discover_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "[limits]\nmax-depth = 5").unwrap();

        let config = LintConfig::discover(dir.path()).unwrap();
        assert_eq!(config.limits.max_depth, 5);
    }

    #[test]
    fn malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "not [valid toml").unwrap();

        assert!(matches!(
            LintConfig::from_file(&path),
            Err(crate::Error::Config { .. })
        ));
    }
}
