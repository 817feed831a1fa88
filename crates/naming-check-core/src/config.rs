//! Configuration types for naming-check.

use crate::rule::{RuleFilter, RuleId};
use crate::types::Severity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::warn;

/// Top-level configuration for naming-check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Severity at or above which the CLI exits with a failure status
    /// (default: "error").
    #[serde(default)]
    pub fail_on: Option<Severity>,

    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Per-rule configurations, keyed by rule name or code.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        for key in config.rules.keys() {
            if RuleId::parse(key).is_none() {
                warn!("Ignoring configuration for unknown rule: {}", key);
            }
        }
        Ok(config)
    }

    /// Threshold for a failing exit status.
    #[must_use]
    pub fn fail_on(&self) -> Severity {
        self.fail_on.unwrap_or(Severity::Error)
    }

    fn rule_config(&self, rule: RuleId) -> Option<&RuleConfig> {
        self.rules
            .iter()
            .find(|(key, _)| RuleId::parse(key) == Some(rule))
            .map(|(_, c)| c)
    }

    /// Checks if a rule is enabled, falling back to the rule's default.
    #[must_use]
    pub fn is_rule_enabled(&self, rule: RuleId) -> bool {
        self.rule_config(rule)
            .and_then(|c| c.enabled)
            .unwrap_or_else(|| rule.enabled_by_default())
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule: RuleId) -> Option<Severity> {
        self.rule_config(rule).and_then(|c| c.severity)
    }

    /// Builds the set of rules a scan should evaluate.
    #[must_use]
    pub fn rule_filter(&self) -> RuleFilter {
        RuleFilter::only(
            RuleId::ALL
                .into_iter()
                .filter(|r| self.is_rule_enabled(*r)),
        )
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Glob patterns to exclude from directory walks.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            respect_gitignore: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<Severity>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.analyzer.respect_gitignore);
        assert!(config.rules.is_empty());
        assert_eq!(config.fail_on(), Severity::Error);
        assert_eq!(config.rule_filter(), RuleFilter::defaults());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
fail_on = "warning"

[analyzer]
exclude = ["**/generated/**"]
respect_gitignore = false

[rules.variable-min-length]
enabled = false

[rules.NC004]
severity = "error"

[rules.py-function-snake-case]
enabled = true
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.fail_on(), Severity::Warning);
        assert_eq!(config.analyzer.exclude, vec!["**/generated/**"]);
        assert!(!config.analyzer.respect_gitignore);
        assert!(!config.is_rule_enabled(RuleId::VariableMinLength));
        assert!(config.is_rule_enabled(RuleId::PointerConsistency));
        assert!(config.is_rule_enabled(RuleId::PyFunctionSnakeCase));
        assert_eq!(
            config.rule_severity(RuleId::FunctionLowerCase),
            Some(Severity::Error)
        );
        assert_eq!(config.rule_severity(RuleId::EnumPascalCase), None);

        let filter = config.rule_filter();
        assert!(!filter.is_enabled(RuleId::VariableMinLength));
        assert!(filter.is_enabled(RuleId::PyFunctionSnakeCase));
    }

    #[test]
    fn test_severity_accepts_report_tag_spelling() {
        let config = Config::parse("fail_on = \"warn\"\n[rules.NC001]\nseverity = \"warn\"\n")
            .expect("warn is a severity name");
        assert_eq!(config.fail_on(), Severity::Warning);
        assert_eq!(
            config.rule_severity(RuleId::StructLowerCase),
            Some(Severity::Warning)
        );

        let err = Config::parse("[rules.NC001]\nseverity = \"fatal\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_unknown_rule_is_ignored() {
        let config = Config::parse("[rules.no-such-rule]\nenabled = false\n")
            .expect("unknown rules should not fail parsing");
        assert_eq!(config.rule_filter(), RuleFilter::defaults());
    }

    #[test]
    fn test_invalid_severity_is_parse_error() {
        let err = Config::parse("[rules.NC001]\nseverity = \"fatal\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Config::from_file(std::path::Path::new("/definitely/missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
