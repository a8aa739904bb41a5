//! Rules for `cdr-quote`.

use crate::common::{element_host_rule, element_rules, element_tag_rule, rule_def, with_elements};
use cedar_lint_core::classes::ComponentSpec;
use cedar_lint_core::RuleBox;

/// Vocabulary of the quote family.
pub const SPEC: ComponentSpec = ComponentSpec::new("cdr-quote")
    .with_modifiers(&["pull"])
    .with_elements(&["summary", "citation"])
    .with_host_tags(&["blockquote", "aside", "q", "div"]);

/// Quote rules (`CDR17xx`).
#[must_use]
pub fn rules() -> Vec<RuleBox> {
    let mut rules = element_rules!(
        SPEC,
        family: "quote",
        code: "17",
        missing_base: (
            "Require cdr-quote base class for modifiers.",
            "cdr-quote modifiers require the base class."
        ),
        invalid_modifier: (
            "Validate cdr-quote modifier values.",
            "Unknown quote modifier \"{{className}}\"."
        ),
        invalid_prefix: (
            "Validate cdr-quote modifier prefixes.",
            "cdr-quote modifiers must use the \"--\" separator (for example, cdr-quote--pull)."
        ),
        invalid_element_class: (
            "Validate cdr-quote element class usage.",
            "Unknown quote element class \"{{className}}\"."
        ),
        duplicate: (
            "Prevent duplicate cdr-quote classes.",
            "Duplicate quote class \"{{className}}\" is not allowed."
        ),
    );

    rules.push(element_tag_rule(
        with_elements(
            rule_def(
                "quote-summary-tag",
                "CDR1706",
                "Restrict cdr-quote__summary to <p>.",
                "invalidSummaryTag",
                "cdr-quote__summary should be used on a <p> element.",
            ),
            SPEC,
        ),
        "invalidSummaryTag",
        &["cdr-quote__summary"],
        &["p"],
    ));
    rules.push(element_tag_rule(
        with_elements(
            rule_def(
                "quote-citation-tag",
                "CDR1707",
                "Restrict cdr-quote__citation to <cite>.",
                "invalidCitationTag",
                "Quote citations should be rendered with <cite>.",
            ),
            SPEC,
        ),
        "invalidCitationTag",
        &["cdr-quote__citation"],
        &["cite"],
    ));
    rules.push(element_host_rule(
        SPEC,
        "quote-invalid-tag",
        "CDR1708",
        "Restrict cdr-quote to valid tags.",
        "cdr-quote classes are only valid on <blockquote>, <aside>, <q>, or <div>.",
    ));
    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ids, lint_html, messages};

    #[test]
    fn a_pull_quote_is_clean() {
        let found = lint_html(
            &rules(),
            concat!(
                r#"<aside class="cdr-quote cdr-quote--pull"><p class="qt__sum">Go outside.</p>"#,
                r#"<cite class="cdr-quote__citation">REI</cite></aside>"#,
            ),
        );
        assert!(found.is_empty(), "{found:?}");
    }

    #[test]
    fn modifier_problems() {
        let found = lint_html(
            &rules(),
            r#"<blockquote class="cdr-quote--push cdr-quote-pull cdr-quote__credit"></blockquote>"#,
        );
        assert_eq!(
            ids(&found),
            vec![
                ("quote-missing-base", "missingBase"),
                ("quote-invalid-modifier", "invalidModifier"),
                ("quote-invalid-element-class", "invalidClass"),
            ]
        );
        assert_eq!(messages(&found)[1], "Unknown quote modifier \"cdr-quote--push\".");
    }

    #[test]
    fn hosts_and_elements_are_checked() {
        let found = lint_html(
            &rules(),
            r#"<section class="cdr-quote cdr-quote"></section><span class="cdr-quote__summary"></span><p class="cdr-quote__citation"></p>"#,
        );
        assert_eq!(
            ids(&found),
            vec![
                ("quote-duplicate", "duplicateClass"),
                ("quote-summary-tag", "invalidSummaryTag"),
                ("quote-citation-tag", "invalidCitationTag"),
                ("quote-invalid-tag", "invalidTag"),
            ]
        );
    }

    #[test]
    fn elements_alone_do_not_need_a_host_tag() {
        let found = lint_html(&rules(), r#"<p class="cdr-quote__summary"></p>"#);
        assert!(found.is_empty(), "{found:?}");
    }
}
