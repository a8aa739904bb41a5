//! Rules for `cdr-label-wrapper`.

use crate::common::{element_host_rule, element_rules, element_tag_rule, rule_def, with_elements};
use cedar_lint_core::classes::ComponentSpec;
use cedar_lint_core::RuleBox;

/// Vocabulary of the label wrapper family.
pub const SPEC: ComponentSpec = ComponentSpec::new("cdr-label-wrapper")
    .with_modifiers(&[
        "primary",
        "secondary",
        "disabled",
        "hide-figure",
        "small",
        "medium",
        "large",
        "small@xs",
        "medium@xs",
        "large@xs",
        "small@sm",
        "medium@sm",
        "large@sm",
        "small@md",
        "medium@md",
        "large@md",
        "small@lg",
        "medium@lg",
        "large@lg",
    ])
    .with_elements(&["container", "figure", "content"])
    .with_host_tags(&["label"]);

/// Label wrapper rules (`CDR06xx`).
#[must_use]
pub fn rules() -> Vec<RuleBox> {
    let mut rules = element_rules!(
        SPEC,
        family: "label-wrapper",
        code: "06",
        missing_base: (
            "Require cdr-label-wrapper base class for modifiers.",
            "cdr-label-wrapper modifiers require the base class."
        ),
        invalid_modifier: (
            "Validate cdr-label-wrapper modifier values.",
            "Unknown label-wrapper modifier \"{{className}}\"."
        ),
        invalid_prefix: (
            "Validate cdr-label-wrapper modifier prefixes.",
            "cdr-label-wrapper modifiers must use the \"--\" separator (for example, cdr-label-wrapper--small)."
        ),
        invalid_element_class: (
            "Validate cdr-label-wrapper element class usage.",
            "Unknown label-wrapper element class \"{{className}}\"."
        ),
        duplicate: (
            "Prevent duplicate cdr-label-wrapper classes.",
            "Duplicate label-wrapper class \"{{className}}\" is not allowed."
        ),
    );

    rules.push(element_host_rule(
        SPEC,
        "label-wrapper-invalid-tag",
        "CDR0606",
        "Restrict cdr-label-wrapper to <label>.",
        "cdr-label-wrapper classes are only valid on <label> elements.",
    ));
    rules.push(element_tag_rule(
        with_elements(
            rule_def(
                "label-wrapper-container-tag",
                "CDR0607",
                "Restrict cdr-label-wrapper__container to <div>.",
                "invalidContainerTag",
                "cdr-label-wrapper__container should be used on a <div> element.",
            ),
            SPEC,
        ),
        "invalidContainerTag",
        &["cdr-label-wrapper__container"],
        &["div"],
    ));
    rules.push(element_tag_rule(
        with_elements(
            rule_def(
                "label-wrapper-figure-tag",
                "CDR0608",
                "Restrict cdr-label-wrapper__figure to <span>.",
                "invalidFigureTag",
                "cdr-label-wrapper__figure should be used on a <span> element.",
            ),
            SPEC,
        ),
        "invalidFigureTag",
        &["cdr-label-wrapper__figure"],
        &["span"],
    ));
    rules.push(element_tag_rule(
        with_elements(
            rule_def(
                "label-wrapper-content-tag",
                "CDR0609",
                "Restrict cdr-label-wrapper__content to <span>.",
                "invalidContentTag",
                "cdr-label-wrapper__content should be used on a <span> element.",
            ),
            SPEC,
        ),
        "invalidContentTag",
        &["cdr-label-wrapper__content"],
        &["span"],
    ));
    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ids, lint_html, messages};

    #[test]
    fn a_checkbox_label_is_clean() {
        let found = lint_html(
            &rules(),
            concat!(
                r#"<label class="cdr-label-wrapper cdr-label-wrapper--primary cdr-label-wrapper--small@md">"#,
                r#"<div class="cdr-label-wrapper__container"><span class="cdr-label-wrapper__figure"></span>"#,
                r#"<span class="cdr-label-wrapper__content">Remember me</span></div></label>"#,
            ),
        );
        assert!(found.is_empty(), "{found:?}");
    }

    #[test]
    fn modifiers_without_base_on_a_div() {
        let found = lint_html(
            &rules(),
            r#"<div class="cdr-label-wrapper--huge cdr-label-wrapper__box"></div>"#,
        );
        assert_eq!(
            ids(&found),
            vec![
                ("label-wrapper-missing-base", "missingBase"),
                ("label-wrapper-invalid-modifier", "invalidModifier"),
                ("label-wrapper-invalid-element-class", "invalidClass"),
                ("label-wrapper-invalid-tag", "invalidTag"),
            ]
        );
        assert_eq!(
            messages(&found)[2],
            "Unknown label-wrapper element class \"cdr-label-wrapper__box\"."
        );
    }

    #[test]
    fn element_tags_are_checked() {
        let found = lint_html(
            &rules(),
            r#"<span class="cdr-label-wrapper__container"></span><div class="cdr-label-wrapper__figure"></div><p class="cdr-label-wrapper__content"></p>"#,
        );
        assert_eq!(
            ids(&found),
            vec![
                ("label-wrapper-container-tag", "invalidContainerTag"),
                ("label-wrapper-figure-tag", "invalidFigureTag"),
                ("label-wrapper-content-tag", "invalidContentTag"),
            ]
        );
    }
}
