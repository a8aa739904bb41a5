//! Rules for `cdr-icon`.
//!
//! Size modifiers accept an optional breakpoint suffix
//! (`cdr-icon--small@md`); `inherit-color` does not.

use crate::common::modifier_rules;
use cedar_lint_core::classes::ComponentSpec;
use cedar_lint_core::RuleBox;

/// Vocabulary of the icon family.
pub const SPEC: ComponentSpec = ComponentSpec::new("cdr-icon").with_modifiers(&[
    "small",
    "medium",
    "large",
    "inherit-color",
    "small@xs",
    "small@sm",
    "small@md",
    "small@lg",
    "medium@xs",
    "medium@sm",
    "medium@md",
    "medium@lg",
    "large@xs",
    "large@sm",
    "large@md",
    "large@lg",
]);

/// Icon rules (`CDR10xx`).
#[must_use]
pub fn rules() -> Vec<RuleBox> {
    modifier_rules!(SPEC, family: "icon", base: "cdr-icon", code: "10", example: "small").into()
}
