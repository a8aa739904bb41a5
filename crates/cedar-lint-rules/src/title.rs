//! Rules for `cdr-title`.

use crate::common::modifier_rules;
use cedar_lint_core::classes::ComponentSpec;
use cedar_lint_core::RuleBox;

/// Vocabulary of the title family. No modifiers.
pub const SPEC: ComponentSpec = ComponentSpec::new("cdr-title");

/// Title rules (`CDR09xx`).
#[must_use]
pub fn rules() -> Vec<RuleBox> {
    modifier_rules!(SPEC, family: "title", base: "cdr-title", code: "09", example: "foo").into()
}
