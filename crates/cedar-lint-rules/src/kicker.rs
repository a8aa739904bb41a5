//! Rules for `cdr-kicker`.

use crate::common::modifier_rules;
use cedar_lint_core::classes::ComponentSpec;
use cedar_lint_core::RuleBox;

/// Vocabulary of the kicker family. No modifiers.
pub const SPEC: ComponentSpec = ComponentSpec::new("cdr-kicker");

/// Kicker rules (`CDR07xx`).
#[must_use]
pub fn rules() -> Vec<RuleBox> {
    modifier_rules!(SPEC, family: "kicker", base: "cdr-kicker", code: "07", example: "foo").into()
}
