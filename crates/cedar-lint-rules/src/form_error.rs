//! Rules for `cdr-form-error`.
//!
//! The active state is the bare `--active-error` class, so it is a
//! companion of the family rather than a modifier.

use crate::common::{element_tag_rule, invalid_class, rule_def, vocabulary_duplicate, with_vocabulary};
use cedar_lint_core::classes::{ComponentSpec, FamilyTag};
use cedar_lint_core::RuleBox;

/// Vocabulary of the form error family.
pub const SPEC: ComponentSpec = ComponentSpec::new("cdr-form-error")
    .with_elements(&["icon"])
    .with_companions(&[ACTIVE])
    .with_host_tags(&["div"]);

const ACTIVE: &str = "--active-error";

/// Form error rules (`CDR18xx`).
#[must_use]
pub fn rules() -> Vec<RuleBox> {
    vec![
        invalid_class(
            "form-error-invalid-class",
            "CDR1801",
            SPEC,
            "Validate cdr-form-error class usage.",
            "Unknown form-error class \"{{className}}\".",
        ),
        vocabulary_duplicate(
            "form-error-duplicate",
            "CDR1802",
            SPEC,
            "Prevent duplicate cdr-form-error classes.",
            "Duplicate form-error class \"{{className}}\" is not allowed.",
        ),
        with_vocabulary(
            rule_def(
                "form-error-missing-base",
                "CDR1803",
                "Require cdr-form-error base class for active state.",
                "missingBase",
                "Active form errors require the cdr-form-error base class.",
            ),
            SPEC,
        )
        .check(|tag, _occ, report| {
            if tag.has(ACTIVE) && !tag.has(SPEC.base_class) {
                report.report("missingBase");
            }
        })
        .boxed(),
        with_vocabulary(
            rule_def(
                "form-error-base-tag",
                "CDR1804",
                "Restrict cdr-form-error to <div>.",
                "invalidTag",
                "cdr-form-error classes are only valid on <div> elements.",
            ),
            SPEC,
        )
        .check(|tag, _occ, report| {
            if tag.has(SPEC.base_class) && !tag.tag_is(SPEC.host_tags) {
                report.report("invalidTag");
            }
        })
        .boxed(),
        element_tag_rule(
            with_vocabulary(
                rule_def(
                    "form-error-icon-tag",
                    "CDR1805",
                    "Restrict cdr-form-error__icon to <span>.",
                    "invalidIconTag",
                    "cdr-form-error__icon should be used on a <span> element.",
                ),
                SPEC,
            ),
            "invalidIconTag",
            &["cdr-form-error__icon"],
            &["span"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ids, lint_html, messages};

    #[test]
    fn an_active_error_is_clean() {
        let found = lint_html(
            &rules(),
            r#"<div class="cdr-form-error --active-error"><span class="ferr__icon"></span>Required</div>"#,
        );
        assert!(found.is_empty(), "{found:?}");
    }

    #[test]
    fn active_state_needs_the_base() {
        let found = lint_html(&rules(), r#"<div class="--active-error"></div>"#);
        assert_eq!(
            messages(&found),
            vec!["Active form errors require the cdr-form-error base class."]
        );
    }

    #[test]
    fn unknown_classes_and_tags() {
        let found = lint_html(
            &rules(),
            r#"<p class="cdr-form-error cdr-form-error--big"></p><div class="cdr-form-error__icon"></div>"#,
        );
        assert_eq!(
            ids(&found),
            vec![
                ("form-error-invalid-class", "invalidClass"),
                ("form-error-base-tag", "invalidTag"),
                ("form-error-icon-tag", "invalidIconTag"),
            ]
        );
    }
}
