//! Rules for `cdr-abstract`, the summary paragraph under a heading.
//!
//! The family has no modifiers, so every `cdr-abstract--*` class is
//! reported as unknown and the base must be present whenever one appears.

use crate::common::modifier_rules;
use cedar_lint_core::classes::ComponentSpec;
use cedar_lint_core::RuleBox;

/// Vocabulary of the abstract family.
pub const SPEC: ComponentSpec = ComponentSpec::new("cdr-abstract");

/// Abstract rules (`CDR08xx`).
#[must_use]
pub fn rules() -> Vec<RuleBox> {
    modifier_rules!(SPEC, family: "abstract", base: "cdr-abstract", code: "08", example: "foo").into()
}
