//! Rules for `cdr-input` and `cdr-input-wrap`.

use crate::common::{element_tag_rule, invalid_class, rule_def, vocabulary_duplicate, with_elements};
use cedar_lint_core::classes::{ComponentSpec, FamilyTag};
use cedar_lint_core::RuleBox;

/// Vocabulary of the input family.
pub const SPEC: ComponentSpec = ComponentSpec::new("cdr-input")
    .with_modifiers(&[
        "focus",
        "multiline",
        "preicon",
        "posticon",
        "posticons",
        "primary",
        "secondary",
        "error",
        "large",
        "large@xs",
        "large@sm",
        "large@md",
        "large@lg",
    ])
    .with_elements(&["pre-icon", "post-icon", "helper-text", "button"])
    .with_companions(&[WRAP])
    .with_host_tags(&["input", "textarea"]);

const WRAP: &str = "cdr-input-wrap";

/// Applied by scripts on wrappers, so it may appear without the base.
const FOCUS: &str = "cdr-input--focus";

/// Input rules (`CDR04xx`).
#[must_use]
pub fn rules() -> Vec<RuleBox> {
    let tag_rule = |name, code, description, message_id, message| {
        with_elements(rule_def(name, code, description, message_id, message), SPEC)
    };

    vec![
        invalid_class(
            "input-invalid-class",
            "CDR0401",
            SPEC,
            "Validate cdr-input class usage.",
            "Unknown input class \"{{className}}\".",
        ),
        vocabulary_duplicate(
            "input-duplicate",
            "CDR0402",
            SPEC,
            "Prevent duplicate cdr-input classes.",
            "Duplicate input class \"{{className}}\" is not allowed.",
        ),
        with_elements(
            rule_def(
                "input-missing-base",
                "CDR0403",
                "Require cdr-input base class for modifiers.",
                "missingBase",
                "cdr-input modifiers require the base class.",
            ),
            SPEC,
        )
        .check(|tag, _occ, report| {
            let styled = tag.info.modifiers.iter().any(|m| m != FOCUS);
            if !tag.info.has_base && styled {
                report.report("missingBase");
            }
        })
        .boxed(),
        tag_rule(
            "input-base-tag",
            "CDR0404",
            "Restrict cdr-input base class to input elements.",
            "invalidTag",
            "cdr-input should be used on <input> or <textarea> elements.",
        )
        .check(|tag, _occ, report| {
            if tag.has(SPEC.base_class) && !tag.tag_is(SPEC.host_tags) {
                report.report("invalidTag");
            }
        })
        .boxed(),
        element_tag_rule(
            tag_rule(
                "input-wrap-tag",
                "CDR0405",
                "Restrict cdr-input-wrap to <div>.",
                "invalidWrapTag",
                "cdr-input-wrap should be used on a <div> element.",
            ),
            "invalidWrapTag",
            &[WRAP],
            &["div"],
        ),
        element_tag_rule(
            tag_rule(
                "input-pre-icon-tag",
                "CDR0406",
                "Restrict cdr-input__pre-icon to <span>.",
                "invalidPreIconTag",
                "cdr-input__pre-icon should be used on a <span> element.",
            ),
            "invalidPreIconTag",
            &["cdr-input__pre-icon"],
            &["span"],
        ),
        element_tag_rule(
            tag_rule(
                "input-post-icon-tag",
                "CDR0407",
                "Restrict cdr-input__post-icon to <span>.",
                "invalidPostIconTag",
                "cdr-input__post-icon should be used on a <span> element.",
            ),
            "invalidPostIconTag",
            &["cdr-input__post-icon"],
            &["span"],
        ),
        element_tag_rule(
            tag_rule(
                "input-helper-text-tag",
                "CDR0408",
                "Restrict cdr-input__helper-text to <span>.",
                "invalidHelperTextTag",
                "cdr-input__helper-text should be used on a <span> element.",
            ),
            "invalidHelperTextTag",
            &["cdr-input__helper-text"],
            &["span"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ids, lint_html, messages};

    #[test]
    fn a_wrapped_input_is_clean() {
        let found = lint_html(
            &rules(),
            concat!(
                r#"<div class="cdr-input-wrap cdr-input--focus">"#,
                r#"<span class="cdr-input__pre-icon"></span>"#,
                r#"<input class="cdr-input cdr-input--preicon cdr-input--large@md">"#,
                r#"<span class="cdr-input__helper-text">Help</span></div>"#,
            ),
        );
        assert!(found.is_empty(), "{found:?}");
    }

    #[test]
    fn unknown_and_duplicate_classes() {
        let found = lint_html(
            &rules(),
            r#"<input class="cdr-input cdr-input--huge cdr-input__x cdr-input">"#,
        );
        assert_eq!(
            messages(&found),
            vec![
                "Unknown input class \"cdr-input--huge\".",
                "Unknown input class \"cdr-input__x\".",
                "Duplicate input class \"cdr-input\" is not allowed.",
            ]
        );
    }

    #[test]
    fn focus_alone_does_not_need_the_base() {
        let found = lint_html(
            &rules(),
            r#"<div class="cdr-input-wrap cdr-input--focus"></div><input class="cdr-input--error">"#,
        );
        assert_eq!(ids(&found), vec![("input-missing-base", "missingBase")]);
    }

    #[test]
    fn tags_are_checked_per_class() {
        let found = lint_html(
            &rules(),
            concat!(
                r#"<div class="cdr-input"></div><span class="cdr-input-wrap"></span>"#,
                r#"<div class="cdr-input__pre-icon"></div><p class="cdr-input__post-icon"></p>"#,
                r#"<p class="cdr-input__helper-text"></p>"#,
            ),
        );
        assert_eq!(
            ids(&found),
            vec![
                ("input-base-tag", "invalidTag"),
                ("input-wrap-tag", "invalidWrapTag"),
                ("input-pre-icon-tag", "invalidPreIconTag"),
                ("input-post-icon-tag", "invalidPostIconTag"),
                ("input-helper-text-tag", "invalidHelperTextTag"),
            ]
        );
    }
}
