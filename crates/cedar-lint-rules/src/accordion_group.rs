//! Rules for `cdr-accordion-group`.

use crate::common::{invalid_class, rule_def, vocabulary_duplicate, with_vocabulary};
use cedar_lint_core::classes::{ComponentSpec, FamilyTag};
use cedar_lint_core::RuleBox;

/// Vocabulary of the accordion group. The base class only.
pub const SPEC: ComponentSpec =
    ComponentSpec::new("cdr-accordion-group").with_host_tags(&["div", "ul", "ol"]);

/// Accordion group rules (`CDR03xx`).
#[must_use]
pub fn rules() -> Vec<RuleBox> {
    vec![
        invalid_class(
            "accordion-group-invalid-class",
            "CDR0301",
            SPEC,
            "Validate cdr-accordion-group class usage.",
            "Unknown accordion group class \"{{className}}\".",
        ),
        vocabulary_duplicate(
            "accordion-group-duplicate",
            "CDR0302",
            SPEC,
            "Prevent duplicate cdr-accordion-group classes.",
            "Duplicate accordion group class \"{{className}}\" is not allowed.",
        ),
        with_vocabulary(
            rule_def(
                "accordion-group-invalid-tag",
                "CDR0303",
                "Restrict cdr-accordion-group to valid tags.",
                "invalidTag",
                "cdr-accordion-group should be used on <div>, <ul>, or <ol> elements.",
            ),
            SPEC,
        )
        .check(|tag, _occ, report| {
            if tag.has(SPEC.base_class) && !tag.tag_is(SPEC.host_tags) {
                report.report("invalidTag");
            }
        })
        .boxed(),
    ]
}
