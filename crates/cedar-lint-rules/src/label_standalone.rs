//! Rules for `cdr-label-standalone`.
//!
//! The family is a closed set of element classes, each tied to one tag.

use crate::common::{element_tag_rule, invalid_class, rule_def, vocabulary_duplicate, with_vocabulary};
use cedar_lint_core::classes::ComponentSpec;
use cedar_lint_core::RuleBox;

/// Vocabulary of the standalone label family.
pub const SPEC: ComponentSpec = ComponentSpec::new("cdr-label-standalone").with_elements(&[
    "label-wrapper",
    "label",
    "label--sr-only",
    "label--disabled",
    "optional",
    "helper",
    "info",
    "post-content",
    "info-action",
    "input-wrap",
    "input-spacing",
]);

/// One element tag rule.
struct ElementRule {
    name: &'static str,
    code: &'static str,
    description: &'static str,
    message_id: &'static str,
    message: &'static str,
    classes: &'static [&'static str],
    tags: &'static [&'static str],
}

const ELEMENT_RULES: &[ElementRule] = &[
    ElementRule {
        name: "label-standalone-label-wrapper-tag",
        code: "CDR0503",
        description: "Restrict cdr-label-standalone__label-wrapper to <div>.",
        message_id: "invalidLabelWrapperTag",
        message: "cdr-label-standalone__label-wrapper should be used on a <div> element.",
        classes: &["cdr-label-standalone__label-wrapper"],
        tags: &["div"],
    },
    ElementRule {
        name: "label-standalone-label-tag",
        code: "CDR0504",
        description: "Restrict cdr-label-standalone__label to <label>.",
        message_id: "invalidLabelTag",
        message: "cdr-label-standalone__label should be used on a <label> element.",
        classes: &[
            "cdr-label-standalone__label",
            "cdr-label-standalone__label--sr-only",
            "cdr-label-standalone__label--disabled",
        ],
        tags: &["label"],
    },
    ElementRule {
        name: "label-standalone-optional-tag",
        code: "CDR0505",
        description: "Restrict cdr-label-standalone__optional to <span>.",
        message_id: "invalidOptionalTag",
        message: "cdr-label-standalone__optional should be used on a <span> element.",
        classes: &["cdr-label-standalone__optional"],
        tags: &["span"],
    },
    ElementRule {
        name: "label-standalone-helper-tag",
        code: "CDR0506",
        description: "Restrict cdr-label-standalone__helper to <span>.",
        message_id: "invalidHelperTag",
        message: "cdr-label-standalone__helper should be used on a <span> element.",
        classes: &["cdr-label-standalone__helper"],
        tags: &["span"],
    },
    ElementRule {
        name: "label-standalone-info-tag",
        code: "CDR0507",
        description: "Restrict cdr-label-standalone__info to <span>.",
        message_id: "invalidInfoTag",
        message: "cdr-label-standalone__info should be used on a <span> element.",
        classes: &["cdr-label-standalone__info"],
        tags: &["span"],
    },
    ElementRule {
        name: "label-standalone-input-wrap-tag",
        code: "CDR0508",
        description: "Restrict cdr-label-standalone__input-wrap to <div>.",
        message_id: "invalidInputWrapTag",
        message: "cdr-label-standalone__input-wrap should be used on a <div> element.",
        classes: &["cdr-label-standalone__input-wrap"],
        tags: &["div"],
    },
    ElementRule {
        name: "label-standalone-input-spacing-tag",
        code: "CDR0509",
        description: "Restrict cdr-label-standalone__input-spacing to <div>.",
        message_id: "invalidInputSpacingTag",
        message: "cdr-label-standalone__input-spacing should be used on a <div> element.",
        classes: &["cdr-label-standalone__input-spacing"],
        tags: &["div"],
    },
    ElementRule {
        name: "label-standalone-info-action-tag",
        code: "CDR0510",
        description: "Restrict cdr-label-standalone__info-action to <div>.",
        message_id: "invalidInfoActionTag",
        message: "cdr-label-standalone__info-action should be used on a <div> element.",
        classes: &["cdr-label-standalone__info-action"],
        tags: &["div"],
    },
    ElementRule {
        name: "label-standalone-post-content-tag",
        code: "CDR0511",
        description: "Restrict cdr-label-standalone__post-content to <div>.",
        message_id: "invalidPostContentTag",
        message: "cdr-label-standalone__post-content should be used on a <div> element.",
        classes: &["cdr-label-standalone__post-content"],
        tags: &["div"],
    },
];

/// Standalone label rules (`CDR05xx`).
#[must_use]
pub fn rules() -> Vec<RuleBox> {
    let mut rules = vec![
        invalid_class(
            "label-standalone-invalid-class",
            "CDR0501",
            SPEC,
            "Validate cdr-label-standalone class usage.",
            "Unknown label-standalone class \"{{className}}\".",
        ),
        vocabulary_duplicate(
            "label-standalone-duplicate",
            "CDR0502",
            SPEC,
            "Prevent duplicate cdr-label-standalone classes.",
            "Duplicate label-standalone class \"{{className}}\" is not allowed.",
        ),
    ];
    rules.extend(ELEMENT_RULES.iter().map(|rule| {
        element_tag_rule(
            with_vocabulary(
                rule_def(rule.name, rule.code, rule.description, rule.message_id, rule.message),
                SPEC,
            ),
            rule.message_id,
            rule.classes,
            rule.tags,
        )
    }));
    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ids, lint_html, messages};

    #[test]
    fn a_complete_label_is_clean() {
        let found = lint_html(
            &rules(),
            concat!(
                r#"<div class="cdr-label-standalone">"#,
                r#"<div class="cdr-label-standalone__label-wrapper">"#,
                r#"<label class="cdr-label-standalone__label cdr-label-standalone__label--disabled">Name</label>"#,
                r#"<span class="cdr-label-standalone__optional">(optional)</span>"#,
                r#"<span class="cdr-label-standalone__helper">Help</span></div>"#,
                r#"<div class="cdr-label-standalone__input-wrap"><input></div></div>"#,
            ),
        );
        assert!(found.is_empty(), "{found:?}");
    }

    #[test]
    fn every_element_tag_rule_fires_on_the_wrong_tag() {
        let found = lint_html(
            &rules(),
            concat!(
                r#"<span class="cdr-label-standalone__label-wrapper"></span>"#,
                r#"<span class="cdr-label-standalone__label--sr-only"></span>"#,
                r#"<div class="cdr-label-standalone__optional"></div>"#,
                r#"<div class="cdr-label-standalone__helper"></div>"#,
                r#"<div class="cdr-label-standalone__info"></div>"#,
                r#"<span class="cdr-label-standalone__input-wrap"></span>"#,
                r#"<span class="cdr-label-standalone__input-spacing"></span>"#,
                r#"<span class="cdr-label-standalone__info-action"></span>"#,
                r#"<span class="cdr-label-standalone__post-content"></span>"#,
            ),
        );
        let fired: Vec<&str> = ids(&found).into_iter().map(|(_, id)| id).collect();
        assert_eq!(
            fired,
            vec![
                "invalidLabelWrapperTag",
                "invalidLabelTag",
                "invalidOptionalTag",
                "invalidHelperTag",
                "invalidInfoTag",
                "invalidInputWrapTag",
                "invalidInputSpacingTag",
                "invalidInfoActionTag",
                "invalidPostContentTag",
            ]
        );
    }

    #[test]
    fn unknown_and_duplicate_classes() {
        let found = lint_html(
            &rules(),
            r#"<div class="cdr-label-standalone cdr-label-standalone--large cdr-label-standalone"></div>"#,
        );
        assert_eq!(
            messages(&found),
            vec![
                "Unknown label-standalone class \"cdr-label-standalone--large\".",
                "Duplicate label-standalone class \"cdr-label-standalone\" is not allowed.",
            ]
        );
    }
}
