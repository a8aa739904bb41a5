//! # cedar-lint
//!
//! Component class convention linter for `cdr-` markup.
//!
//! This is the facade crate: it re-exports the core engine, the dialects
//! and the rule catalog, and adds two conveniences.
//!
//! ## Quick Start: `cargo test` Integration
//!
//! ```toml
//! [dev-dependencies]
//! cedar-lint = "0.4"
//! ```
//!
//! ```rust,ignore
//! // tests/markup.rs
//! cedar_lint::check!();
//! ```
//!
//! This lints every recognised source file under the workspace root as part
//! of `cargo test`. Configure via `cedar-lint.toml`; the macro accepts
//! `preset = "..."`, `config = "..."` and `fail_on = "..."` to override it.
//!
//! ## Linting a Snippet
//!
//! ```
//! use std::path::Path;
//!
//! let result = cedar_lint::lint_source(
//!     Path::new("card.html"),
//!     r#"<div class="cdr-container cdr-container--static cdr-container--fluid"></div>"#,
//! )
//! .expect("analyzer");
//! assert_eq!(result.violations[0].rule, "container-conflicting-modifiers");
//! ```
//!
//! ## Programmatic Usage
//!
//! ```rust,ignore
//! use cedar_lint::Analyzer;
//! use cedar_lint::rules::Preset;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./web")
//!     .dialects(cedar_lint::dialects::all())
//!     .rules(Preset::Accessibility.rules())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]

use std::path::Path;

// Re-export core types and traits
pub use cedar_lint_core::*;

/// Built-in rules and presets.
pub mod rules {
    pub use cedar_lint_rules::*;
}

/// Markup dialects.
pub mod dialects {
    pub use cedar_lint_dialects::*;
}

mod runner;

#[doc(hidden)]
pub mod __internal {
    pub use crate::runner::{run_check, CheckOptions};
}

/// Lints one in-memory source unit with every dialect and the recommended
/// rules. `path` selects the dialect by its file name.
///
/// # Errors
///
/// Returns an error if the analyzer cannot resolve the working directory.
pub fn lint_source(path: &Path, content: &str) -> Result<LintResult, AnalyzerError> {
    lint_source_with(path, content, rules::recommended_rules())
}

/// Like [`lint_source`] with an explicit rule set.
///
/// # Errors
///
/// Returns an error if the analyzer cannot resolve the working directory.
pub fn lint_source_with(
    path: &Path,
    content: &str,
    rules: Vec<RuleBox>,
) -> Result<LintResult, AnalyzerError> {
    let analyzer = Analyzer::builder()
        .dialects(dialects::all())
        .rules(rules)
        .build()?;
    Ok(analyzer.analyze_source(path, content))
}

/// Generates a `#[test]` that lints the workspace.
///
/// ```rust,ignore
/// cedar_lint::check!();
/// cedar_lint::check!(preset = "accessibility", fail_on = "warning");
/// cedar_lint::check!(config = "web/cedar-lint.toml");
/// ```
///
/// The test fails with a report of every violation at or above `fail_on`.
#[macro_export]
macro_rules! check {
    ($($key:ident = $value:literal),* $(,)?) => {
        #[test]
        fn cedar_lint_check() {
            #[allow(unused_mut)]
            let mut options = $crate::__internal::CheckOptions::default();
            $( options.set(stringify!($key), $value); )*
            $crate::__internal::run_check(&options);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lint_source_picks_the_dialect_from_the_name() {
        let markup = r#"<button class="cdr-button cdr-button--primary">Go</button>"#;
        let html = lint_source(Path::new("a.html"), markup).expect("analyzer");
        assert_eq!(html.violations.len(), 1);
        assert_eq!(html.violations[0].message_id, "missingButtonType");

        let css = lint_source(Path::new("a.css"), markup).expect("analyzer");
        assert!(css.violations.is_empty());
    }

    #[test]
    fn lint_source_with_limits_the_rules() {
        let result = lint_source_with(
            Path::new("Card.jsx"),
            r#"const c = <img className="cdr-image" />;"#,
            vec![rules::find_rule("image-missing-alt").expect("rule exists")],
        )
        .expect("analyzer");
        let rules: Vec<&str> = result.violations.iter().map(|v| v.rule.as_str()).collect();
        assert_eq!(rules, vec!["image-missing-alt"]);
    }
}
