//! Rules for `cdr-caption`.

use crate::common::{element_tag_rule, invalid_class, rule_def, vocabulary_duplicate, with_vocabulary};
use cedar_lint_core::classes::ComponentSpec;
use cedar_lint_core::RuleBox;

/// Vocabulary of the caption family.
pub const SPEC: ComponentSpec = ComponentSpec::new("cdr-caption").with_elements(&["summary", "cite"]);

/// Caption rules (`CDR16xx`).
#[must_use]
pub fn rules() -> Vec<RuleBox> {
    vec![
        invalid_class(
            "caption-invalid-class",
            "CDR1601",
            SPEC,
            "Validate cdr-caption class usage.",
            "Unknown caption class \"{{className}}\".",
        ),
        vocabulary_duplicate(
            "caption-duplicate",
            "CDR1602",
            SPEC,
            "Prevent duplicate cdr-caption classes.",
            "Duplicate caption class \"{{className}}\" is not allowed.",
        ),
        element_tag_rule(
            with_vocabulary(
                rule_def(
                    "caption-summary-tag",
                    "CDR1603",
                    "Restrict cdr-caption__summary to <p>.",
                    "invalidSummaryTag",
                    "cdr-caption__summary should be used on a <p> element.",
                ),
                SPEC,
            ),
            "invalidSummaryTag",
            &["cdr-caption__summary"],
            &["p"],
        ),
        element_tag_rule(
            with_vocabulary(
                rule_def(
                    "caption-cite-tag",
                    "CDR1604",
                    "Restrict caption cite usage to <cite>.",
                    "invalidCiteTag",
                    "Caption credit should be rendered with a <cite> element.",
                ),
                SPEC,
            ),
            "invalidCiteTag",
            &["cdr-caption__cite"],
            &["cite"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ids, lint_html};

    #[test]
    fn a_caption_with_summary_and_credit_is_clean() {
        let found = lint_html(
            &rules(),
            r#"<div class="cap"><p class="cap__sum">Trail</p><cite class="cdr-caption__cite">REI</cite></div>"#,
        );
        assert!(found.is_empty(), "{found:?}");
    }

    #[test]
    fn wrong_tags_and_unknown_classes() {
        let found = lint_html(
            &rules(),
            r#"<span class="cdr-caption__summary cdr-caption__summary"></span><p class="cdr-caption__cite cdr-caption--small"></p>"#,
        );
        assert_eq!(
            ids(&found),
            vec![
                ("caption-invalid-class", "invalidClass"),
                ("caption-duplicate", "duplicateClass"),
                ("caption-summary-tag", "invalidSummaryTag"),
                ("caption-cite-tag", "invalidCiteTag"),
            ]
        );
    }
}
