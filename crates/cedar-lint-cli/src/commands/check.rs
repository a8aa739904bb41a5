//! Check command implementation.

use anyhow::{Context, Result};
use cedar_lint_core::{Analyzer, Config, RuleBox, Severity};
use cedar_lint_rules::{find_rule, Preset};
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Flags of the check command.
pub struct CheckOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Comma-separated rule names or codes.
    pub rules: Option<String>,
    /// Preset name, overriding the config file.
    pub preset: Option<String>,
    /// Extra exclude globs.
    pub exclude: Vec<String>,
    /// Failure threshold, overriding the config file.
    pub fail_on: Option<String>,
}

/// Runs the check command.
pub fn run(path: &Path, options: CheckOptions, source: &ConfigSource) -> Result<()> {
    let config = load_config(source)?;

    let fail_on = match options.fail_on.as_deref() {
        Some(name) => Severity::from_name(name)
            .with_context(|| format!("Unknown --fail-on severity: {name}"))?,
        None => config.fail_on_severity()?,
    };

    let rules = select_rules(
        options.rules.as_deref(),
        options.preset.as_deref().unwrap_or(config.preset_name()),
    )?;

    let analyzer = Analyzer::builder()
        .root(path)
        .config(config)
        .excludes(options.exclude)
        .dialects(cedar_lint_dialects::all())
        .rules(rules)
        .build()
        .context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print(&result, options.format, analyzer.root())?;

    if result.has_violations_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    let Some(path) = source.path() else {
        return Ok(Config::default());
    };
    if source.is_global() {
        tracing::info!("Using global config: {}", path.display());
    }
    Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}

/// Rules named by `--rules`, or the preset's rules when no filter is given.
fn select_rules(filter: Option<&str>, preset: &str) -> Result<Vec<RuleBox>> {
    let Some(filter) = filter else {
        let preset: Preset = preset.parse().map_err(anyhow::Error::msg)?;
        return Ok(preset.rules());
    };

    let mut rules = Vec::new();
    for name in filter.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        match find_rule(name) {
            Some(rule) => rules.push(rule),
            None => tracing::warn!("Unknown rule: {}", name),
        }
    }
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(rules: &[RuleBox]) -> Vec<&'static str> {
        rules.iter().map(|r| r.name()).collect()
    }

    #[test]
    fn filter_accepts_names_and_codes() {
        let rules = select_rules(Some("button-type, CDR1408,unknown-rule"), "recommended")
            .expect("filter should resolve");
        assert_eq!(names(&rules), vec!["button-type", "image-missing-alt"]);
    }

    #[test]
    fn preset_is_used_without_filter() {
        let minimal = select_rules(None, "minimal").expect("preset should resolve");
        assert!(names(&minimal).contains(&"kicker-missing-base"));
        assert!(!names(&minimal).contains(&"button-type"));
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let err = select_rules(None, "strict").err().expect("should fail");
        assert!(err.to_string().contains("unknown preset"));
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let config = load_config(&ConfigSource::Default).expect("defaults");
        assert_eq!(config.preset_name(), "recommended");
    }
}
