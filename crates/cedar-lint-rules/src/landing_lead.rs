//! Rules for `cdr-landing-lead`.

use crate::common::{invalid_class, vocabulary_duplicate};
use cedar_lint_core::classes::ComponentSpec;
use cedar_lint_core::RuleBox;

/// Vocabulary of the landing lead family.
pub const SPEC: ComponentSpec = ComponentSpec::new("cdr-landing-lead").with_elements(&["image", "copy-block"]);

/// Landing lead rules (`CDR19xx`).
#[must_use]
pub fn rules() -> Vec<RuleBox> {
    vec![
        invalid_class(
            "landing-lead-invalid-class",
            "CDR1901",
            SPEC,
            "Validate cdr-landing-lead class usage.",
            "Unknown landing lead class \"{{className}}\".",
        ),
        vocabulary_duplicate(
            "landing-lead-duplicate",
            "CDR1902",
            SPEC,
            "Prevent duplicate landing lead classes.",
            "Duplicate landing lead class \"{{className}}\" is not allowed.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{lint_html, messages};

    #[test]
    fn known_elements_are_clean() {
        let found = lint_html(
            &rules(),
            r#"<section class="cdr-landing-lead"><img class="cdr-landing-lead__image"><div class="cdr-landing-lead__copy-block"></div></section>"#,
        );
        assert!(found.is_empty(), "{found:?}");
    }

    #[test]
    fn unknown_and_repeated_classes() {
        let found = lint_html(
            &rules(),
            r#"<div class="cdr-landing-lead__copy cdr-landing-lead__image cdr-landing-lead__image"></div>"#,
        );
        assert_eq!(
            messages(&found),
            vec![
                "Unknown landing lead class \"cdr-landing-lead__copy\".",
                "Duplicate landing lead class \"cdr-landing-lead__image\" is not allowed.",
            ]
        );
    }
}
