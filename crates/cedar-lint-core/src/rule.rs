//! Rule traits and metadata for lint rules.

use crate::context::FileContext;
use crate::tag::TagOccurrence;
use crate::types::{Severity, Violation};
use std::collections::BTreeMap;

/// Category of finding a rule reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// The markup is wrong and should be fixed.
    Problem,
}

/// Static description of a rule: what it checks and how its messages read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMeta {
    /// Category of finding.
    pub kind: RuleKind,
    /// One-line documentation string.
    pub description: &'static str,
    /// Message templates keyed by message id, in declaration order.
    pub messages: Vec<(&'static str, &'static str)>,
}

impl RuleMeta {
    /// Creates metadata with no messages.
    #[must_use]
    pub fn new(description: &'static str) -> Self {
        Self {
            kind: RuleKind::Problem,
            description,
            messages: Vec::new(),
        }
    }

    /// Template registered for `message_id`.
    #[must_use]
    pub fn message(&self, message_id: &str) -> Option<&'static str> {
        self.messages
            .iter()
            .find(|(id, _)| *id == message_id)
            .map(|(_, template)| *template)
    }

    /// Renders the message for `message_id` with `data`.
    ///
    /// An id without a template renders as the id itself.
    #[must_use]
    pub fn render(&self, message_id: &str, data: &BTreeMap<String, String>) -> String {
        self.message(message_id)
            .map_or_else(|| message_id.to_string(), |t| interpolate(t, data))
    }
}

/// Replaces `{{ key }}` placeholders in `template` with values from `data`.
///
/// Whitespace inside the braces is ignored. Placeholders without a value are
/// left as written.
#[must_use]
pub fn interpolate(template: &str, data: &BTreeMap<String, String>) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            output.push_str(&rest[start..]);
            return output;
        };
        let key = after[..end].trim();
        match data.get(key) {
            Some(value) => output.push_str(value),
            None => output.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    output.push_str(rest);
    output
}

/// A lint rule run against the tag occurrences of one source unit.
///
/// Rules never see raw source text: every dialect has already reduced the
/// unit to [`TagOccurrence`]s, so the same rule body serves HTML files,
/// component files, templates and story literals alike.
///
/// Most rules are built with [`RuleDef`](crate::RuleDef) rather than by
/// implementing this trait directly.
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "button-variant").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "CDR0101").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        self.meta().description
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Returns the rule's metadata.
    fn meta(&self) -> &RuleMeta;

    /// Checks the occurrences extracted from one file.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked
    /// * `occurrences` - Every tag occurrence the dialects found in it
    fn check(&self, ctx: &FileContext, occurrences: &[TagOccurrence]) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::AttributeMap;
    use crate::types::Location;
    use std::path::{Path, PathBuf};

    struct TestRule {
        meta: RuleMeta,
    }

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "CDR9901"
        }
        fn meta(&self) -> &RuleMeta {
            &self.meta
        }

        fn check(&self, _ctx: &FileContext, occurrences: &[TagOccurrence]) -> Vec<Violation> {
            occurrences
                .iter()
                .map(|occ| {
                    Violation::new(
                        self.code(),
                        self.name(),
                        self.default_severity(),
                        occ.location.clone(),
                        "Test violation",
                    )
                })
                .collect()
        }
    }

    fn data(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule {
            meta: RuleMeta::new("A test rule"),
        };
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.description(), "A test rule");
        assert_eq!(rule.default_severity(), Severity::Error);

        let ctx = FileContext::new(Path::new("a.html"), "", Path::new(""));
        let occ = TagOccurrence::new(
            "div",
            AttributeMap::new(),
            Location::new(PathBuf::from("a.html"), 1, 1),
        );
        assert_eq!(rule.check(&ctx, &[occ]).len(), 1);
    }

    #[test]
    fn interpolate_replaces_known_keys() {
        let out = interpolate(
            "Unknown image modifier \"{{className}}\".",
            &data(&[("className", "cdr-image--x")]),
        );
        assert_eq!(out, "Unknown image modifier \"cdr-image--x\".");
    }

    #[test]
    fn interpolate_tolerates_spaces_and_unknown_keys() {
        let out = interpolate("{{ a }} and {{b}} and {{", &data(&[("a", "1")]));
        assert_eq!(out, "1 and {{b}} and {{");
    }

    #[test]
    fn render_falls_back_to_id() {
        let mut meta = RuleMeta::new("d");
        meta.messages.push(("missingBase", "Base required."));
        assert_eq!(meta.render("missingBase", &BTreeMap::new()), "Base required.");
        assert_eq!(meta.render("other", &BTreeMap::new()), "other");
        assert_eq!(meta.kind, RuleKind::Problem);
    }
}
