//! Rules for `cdr-split-surface`.

use crate::common::{element_rules, rule_def, with_elements};
use cedar_lint_core::classes::ComponentSpec;
use cedar_lint_core::RuleBox;

/// Vocabulary of the split surface family.
pub const SPEC: ComponentSpec = ComponentSpec::new("cdr-split-surface")
    .with_modifiers(&["top", "bottom"])
    .with_elements(&["top", "bottom"]);

/// Split surface rules (`CDR21xx`).
#[must_use]
pub fn rules() -> Vec<RuleBox> {
    let mut rules = element_rules!(
        SPEC,
        family: "split-surface",
        code: "21",
        missing_base: (
            "Require cdr-split-surface base class for modifiers.",
            "cdr-split-surface modifiers require the base class."
        ),
        invalid_modifier: (
            "Validate cdr-split-surface modifier values.",
            "Unknown split surface modifier \"{{className}}\"."
        ),
        invalid_prefix: (
            "Validate cdr-split-surface modifier prefixes.",
            "cdr-split-surface modifiers must use the \"--\" separator (for example, cdr-split-surface--bottom)."
        ),
        invalid_element_class: (
            "Validate cdr-split-surface element class usage.",
            "Unknown split surface element class \"{{className}}\"."
        ),
        duplicate: (
            "Prevent duplicate split surface classes.",
            "Duplicate split surface class \"{{className}}\" is not allowed."
        ),
    );

    rules.push(
        with_elements(
            rule_def(
                "split-surface-missing-modifier",
                "CDR2106",
                "Require a split surface modifier.",
                "missingModifier",
                "cdr-split-surface should include cdr-split-surface--top or cdr-split-surface--bottom.",
            ),
            SPEC,
        )
        .check(|tag, _occ, report| {
            if tag.info.has_base && tag.info.modifiers.is_empty() {
                report.report("missingModifier");
            }
        })
        .boxed(),
    );
    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ids, lint_html, messages};

    #[test]
    fn a_split_surface_with_halves_is_clean() {
        let found = lint_html(
            &rules(),
            concat!(
                r#"<div class="cdr-split-surface cdr-split-surface--top">"#,
                r#"<div class="cdr-split-surface__top"></div><div class="cdr-split-surface__bottom"></div></div>"#,
            ),
        );
        assert!(found.is_empty(), "{found:?}");
    }

    #[test]
    fn the_base_needs_a_modifier() {
        let found = lint_html(&rules(), r#"<div class="cdr-split-surface"></div>"#);
        assert_eq!(
            messages(&found),
            vec!["cdr-split-surface should include cdr-split-surface--top or cdr-split-surface--bottom."]
        );
    }

    #[test]
    fn modifiers_and_elements_are_validated() {
        let found = lint_html(
            &rules(),
            r#"<div class="cdr-split-surface--left cdr-split-surface__middle"></div><div class="cdr-split-surface cdr-split-surface--top cdr-split-surface--top"></div>"#,
        );
        assert_eq!(
            ids(&found),
            vec![
                ("split-surface-missing-base", "missingBase"),
                ("split-surface-invalid-modifier", "invalidModifier"),
                ("split-surface-invalid-element-class", "invalidClass"),
                ("split-surface-duplicate", "duplicateClass"),
            ]
        );
    }
}
