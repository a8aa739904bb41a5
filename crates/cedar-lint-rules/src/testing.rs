//! Helpers for rule unit tests.

use cedar_lint_core::{FileContext, RuleBox, SourceDialect, Violation};
use cedar_lint_dialects::HtmlDialect;
use std::path::Path;

/// Runs `rules` over an HTML snippet.
pub(crate) fn lint_html(rules: &[RuleBox], html: &str) -> Vec<Violation> {
    let ctx = FileContext::new(Path::new("snippet.html"), html, Path::new(""));
    let occurrences = HtmlDialect::new().extract(&ctx);
    rules
        .iter()
        .flat_map(|rule| rule.check(&ctx, &occurrences))
        .collect()
}

/// `(rule, message id)` pairs, in report order.
pub(crate) fn ids(violations: &[Violation]) -> Vec<(&str, &str)> {
    violations
        .iter()
        .map(|v| (v.rule.as_str(), v.message_id.as_str()))
        .collect()
}

/// Rendered messages, in report order.
pub(crate) fn messages(violations: &[Violation]) -> Vec<&str> {
    violations.iter().map(|v| v.message.as_str()).collect()
}
