//! Rules for `cdr-list`.

use crate::common::{modifier_rules, modifier_tag_rule};
use cedar_lint_core::classes::ComponentSpec;
use cedar_lint_core::RuleBox;

/// Vocabulary of the list family.
pub const SPEC: ComponentSpec = ComponentSpec::new("cdr-list")
    .with_modifiers(&["ordered", "unordered", "compact", "inline"])
    .with_host_tags(&["ul", "ol"]);

/// List rules (`CDR12xx`).
#[must_use]
pub fn rules() -> Vec<RuleBox> {
    let mut rules = Vec::from(modifier_rules!(
        SPEC,
        family: "list",
        base: "cdr-list",
        code: "12",
        example: "unordered"
    ));
    rules.push(modifier_tag_rule(
        "list-invalid-tag",
        "CDR1205",
        SPEC,
        SPEC.host_tags,
        "Restrict cdr-list classes to valid tags.",
        "cdr-list classes are only valid on <ul> or <ol> elements.",
    ));
    rules
}
