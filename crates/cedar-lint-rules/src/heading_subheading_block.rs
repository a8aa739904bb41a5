//! Rules for `cdr-heading-subheading-block`.

use crate::common::{invalid_class, vocabulary_duplicate};
use cedar_lint_core::classes::ComponentSpec;
use cedar_lint_core::RuleBox;

/// Vocabulary of the heading/subheading block.
pub const SPEC: ComponentSpec =
    ComponentSpec::new("cdr-heading-subheading-block").with_elements(&["heading", "subheading"]);

/// Heading/subheading block rules (`CDR20xx`).
#[must_use]
pub fn rules() -> Vec<RuleBox> {
    vec![
        invalid_class(
            "heading-subheading-block-invalid-class",
            "CDR2001",
            SPEC,
            "Validate cdr-heading-subheading-block class usage.",
            "Unknown heading/subheading block class \"{{className}}\".",
        ),
        vocabulary_duplicate(
            "heading-subheading-block-duplicate",
            "CDR2002",
            SPEC,
            "Prevent duplicate heading/subheading block classes.",
            "Duplicate heading/subheading block class \"{{className}}\" is not allowed.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ids, lint_html};

    #[test]
    fn aliases_resolve_to_known_elements() {
        let found = lint_html(
            &rules(),
            r#"<hgroup class="cdr-heading-subheading-block"><h2 class="hsb__head">A</h2><p class="hsb__sub">B</p></hgroup>"#,
        );
        assert!(found.is_empty(), "{found:?}");
    }

    #[test]
    fn modifiers_are_not_part_of_the_vocabulary() {
        let found = lint_html(
            &rules(),
            r#"<div class="cdr-heading-subheading-block--wide cdr-heading-subheading-block--wide"></div>"#,
        );
        assert_eq!(
            ids(&found),
            vec![
                ("heading-subheading-block-invalid-class", "invalidClass"),
                ("heading-subheading-block-duplicate", "duplicateClass"),
            ]
        );
    }
}
