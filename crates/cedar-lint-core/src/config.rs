//! Configuration types for cedar-lint.

use crate::types::Severity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration for cedar-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preset to use ("recommended", "accessibility", "minimal").
    #[serde(default)]
    pub preset: Option<String>,

    /// Severity threshold for failure (default: "error").
    /// Violations at or above this severity fail `check` and `check!()`.
    #[serde(default)]
    pub fail_on: Option<String>,

    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Per-rule configurations.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
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
    /// Returns an error if the TOML is invalid or `fail_on` is not a
    /// severity name.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.fail_on_severity()?;
        Ok(config)
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }

    /// The failure threshold, `Error` when unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `fail_on` names no severity.
    pub fn fail_on_severity(&self) -> Result<Severity, ConfigError> {
        match self.fail_on.as_deref() {
            None => Ok(Severity::Error),
            Some(name) => Severity::from_name(name).ok_or_else(|| ConfigError::Parse {
                message: format!("unknown fail_on severity \"{name}\" (expected error, warning or info)"),
            }),
        }
    }

    /// The configured preset name, `"recommended"` when unset.
    #[must_use]
    pub fn preset_name(&self) -> &str {
        self.preset.as_deref().unwrap_or("recommended")
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to analyze (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from analysis.
    #[serde(default = "default_excludes")]
    pub exclude: Vec<String>,

    /// Glob patterns to include (if empty, every file a dialect reads).
    #[serde(default)]
    pub include: Vec<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,

    /// Maximum number of parallel file analyses.
    #[serde(default)]
    pub parallelism: Option<usize>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: default_excludes(),
            include: Vec::new(),
            respect_gitignore: true,
            parallelism: None,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_excludes() -> Vec<String> {
    vec!["**/node_modules/**".to_string(), "**/dist/**".to_string()]
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
        assert_eq!(config.preset_name(), "recommended");
        assert_eq!(config.fail_on_severity().ok(), Some(Severity::Error));
        assert!(config.analyzer.exclude.contains(&"**/node_modules/**".to_string()));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
preset = "minimal"
fail_on = "warning"

[analyzer]
root = "./web"
exclude = ["**/generated/**"]
parallelism = 2

[rules.button-type]
enabled = false

[rules.image-missing-alt]
severity = "warning"
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.analyzer.root, PathBuf::from("./web"));
        assert_eq!(config.analyzer.exclude, vec!["**/generated/**".to_string()]);
        assert_eq!(config.analyzer.parallelism, Some(2));
        assert_eq!(config.preset_name(), "minimal");
        assert_eq!(config.fail_on_severity().ok(), Some(Severity::Warning));
        assert!(!config.is_rule_enabled("button-type"));
        assert!(config.is_rule_enabled("button-variant"));
        assert_eq!(
            config.rule_severity("image-missing-alt"),
            Some(Severity::Warning)
        );
    }

    #[test]
    fn unknown_fail_on_is_rejected() {
        let err = Config::parse("fail_on = \"fatal\"").expect_err("should reject");
        assert!(err.to_string().contains("fatal"));
    }

    #[test]
    fn unknown_severity_is_a_parse_error() {
        let toml = "[rules.button-type]\nseverity = \"loud\"\n";
        assert!(matches!(Config::parse(toml), Err(ConfigError::Parse { .. })));
    }
}
