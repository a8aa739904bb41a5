//! Rules for `cdr-accordion` and its elements.
//!
//! Every class that is the base or starts with `cdr-accordion--` /
//! `cdr-accordion__` makes a tag relevant. Modifier checks run over the
//! non-element classes only, so `cdr-accordion-group` never reaches them.

use cedar_lint_core::classes::{analyze_elements, ComponentSpec, ElementTag, FamilyTag};
use cedar_lint_core::{RuleBox, RuleDef, TagOccurrence};

/// Vocabulary of the accordion family.
pub const SPEC: ComponentSpec = ComponentSpec::new("cdr-accordion")
    .with_modifiers(&["compact", "border-aligned", "no-spacing", "unwrap", "open", "closed"])
    .with_elements(&[
        "header",
        "header--unwrapped",
        "button",
        "label",
        "icon",
        "content-container",
        "content",
    ])
    .with_host_tags(&["div", "li"]);

const HEADER: &str = "cdr-accordion__header";
const HEADER_UNWRAPPED: &str = "cdr-accordion__header--unwrapped";
const BUTTON: &str = "cdr-accordion__button";
const LABEL: &str = "cdr-accordion__label";
const ICON: &str = "cdr-accordion__icon";
const CONTENT_CONTAINER: &str = "cdr-accordion__content-container";
const CONTENT: &str = "cdr-accordion__content";

/// Modifiers that style the accordion itself and need the base class.
const BASE_REQUIRED_MODIFIERS: &[&str] = &[
    "cdr-accordion--compact",
    "cdr-accordion--border-aligned",
    "cdr-accordion--no-spacing",
];

/// Builds the accordion analysis of a tag.
#[must_use]
pub fn analyze_tag(occurrence: &TagOccurrence) -> Option<ElementTag> {
    analyze_elements(occurrence, &SPEC)
}

fn accordion_rule(name: &'static str, code: &'static str, description: &'static str) -> RuleDef {
    RuleDef::new(name, code)
        .base_class(SPEC.base_class)
        .describe(description)
}

/// Accordion rules (`CDR02xx`).
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn rules() -> Vec<RuleBox> {
    vec![
        accordion_rule(
            "accordion-invalid-class",
            "CDR0201",
            "Validate cdr-accordion element class usage.",
        )
        .message("invalidClass", "Unknown accordion element class \"{{className}}\".")
        .analyze(analyze_tag)
        .check(|tag, _occ, report| report.report_unique_classes("invalidClass", &tag.invalid_elements))
        .boxed(),
        accordion_rule(
            "accordion-invalid-modifier",
            "CDR0202",
            "Validate cdr-accordion modifier values.",
        )
        .message("invalidModifier", "Unknown accordion modifier \"{{className}}\".")
        .analyze(analyze_tag)
        .check(|tag, _occ, report| {
            report.report_unique_classes("invalidModifier", &tag.info.invalid_modifiers);
        })
        .boxed(),
        accordion_rule(
            "accordion-invalid-prefix",
            "CDR0203",
            "Validate cdr-accordion modifier prefixes.",
        )
        .message(
            "invalidPrefix",
            "cdr-accordion modifiers must use the \"--\" separator (for example, cdr-accordion--compact).",
        )
        .analyze(analyze_tag)
        .check(|tag, _occ, report| {
            report.report_unique_classes("invalidPrefix", &tag.info.invalid_prefixes);
        })
        .boxed(),
        accordion_rule(
            "accordion-duplicate",
            "CDR0204",
            "Prevent duplicate cdr-accordion classes.",
        )
        .message("duplicateClass", "Duplicate accordion class \"{{className}}\" is not allowed.")
        .analyze(analyze_tag)
        .check(|tag, _occ, report| {
            report.report_classes("duplicateClass", &tag.vocabulary.duplicate_classes);
        })
        .boxed(),
        accordion_rule(
            "accordion-missing-base",
            "CDR0205",
            "Require cdr-accordion base class for modifiers.",
        )
        .message("missingBase", "cdr-accordion modifiers require the base class.")
        .analyze(analyze_tag)
        .check(|tag, _occ, report| {
            let needs_base = tag
                .info
                .modifiers
                .iter()
                .any(|modifier| BASE_REQUIRED_MODIFIERS.contains(&modifier.as_str()));
            if !tag.info.has_base && needs_base {
                report.report("missingBase");
            }
        })
        .boxed(),
        accordion_rule(
            "accordion-base-tag",
            "CDR0206",
            "Restrict cdr-accordion to valid tags.",
        )
        .message("invalidTag", "cdr-accordion should be used on <div> or <li> elements.")
        .analyze(analyze_tag)
        .check(|tag, _occ, report| {
            if tag.has(SPEC.base_class) && !tag.tag_is(SPEC.host_tags) {
                report.report("invalidTag");
            }
        })
        .boxed(),
        accordion_rule(
            "accordion-header-tag",
            "CDR0207",
            "Restrict cdr-accordion__header to heading tags.",
        )
        .message(
            "invalidHeaderTag",
            "cdr-accordion__header should be used on a heading element.",
        )
        .analyze(analyze_tag)
        .check(|tag, _occ, report| {
            if (tag.has(HEADER) || tag.has(HEADER_UNWRAPPED)) && !tag.tag_is(&["h1", "h2", "h3", "h4", "h5", "h6"]) {
                report.report("invalidHeaderTag");
            }
        })
        .boxed(),
        accordion_rule(
            "accordion-header-modifier",
            "CDR0208",
            "Require cdr-accordion__header for header modifiers.",
        )
        .message(
            "missingHeader",
            "cdr-accordion__header--unwrapped should be used with cdr-accordion__header.",
        )
        .analyze(analyze_tag)
        .check(|tag, _occ, report| {
            if tag.has(HEADER_UNWRAPPED) && !tag.has(HEADER) {
                report.report("missingHeader");
            }
        })
        .boxed(),
        accordion_rule(
            "accordion-button-tag",
            "CDR0209",
            "Restrict cdr-accordion__button to button tags.",
        )
        .message(
            "invalidButtonTag",
            "cdr-accordion__button should be used on a <button> or <div> element.",
        )
        .analyze(analyze_tag)
        .check(|tag, _occ, report| {
            if tag.has(BUTTON) && !tag.tag_is(&["button", "div"]) {
                report.report("invalidButtonTag");
            }
        })
        .boxed(),
        accordion_rule(
            "accordion-label-tag",
            "CDR0210",
            "Restrict cdr-accordion__label to <span>.",
        )
        .message(
            "invalidLabelTag",
            "cdr-accordion__label should be used on a <span> element.",
        )
        .analyze(analyze_tag)
        .check(|tag, _occ, report| {
            if tag.has(LABEL) && !tag.tag_is(&["span"]) {
                report.report("invalidLabelTag");
            }
        })
        .boxed(),
        accordion_rule(
            "accordion-icon-tag",
            "CDR0211",
            "Restrict cdr-accordion__icon to valid tags.",
        )
        .message(
            "invalidIconTag",
            "cdr-accordion__icon should be used on a <span> or <svg> element.",
        )
        .analyze(analyze_tag)
        .check(|tag, _occ, report| {
            if tag.has(ICON) && !tag.tag_is(&["span", "svg"]) {
                report.report("invalidIconTag");
            }
        })
        .boxed(),
        accordion_rule(
            "accordion-content-container-tag",
            "CDR0212",
            "Restrict cdr-accordion__content-container to <div>.",
        )
        .message(
            "invalidContainerTag",
            "cdr-accordion__content-container should be used on a <div> element.",
        )
        .analyze(analyze_tag)
        .check(|tag, _occ, report| {
            if tag.has(CONTENT_CONTAINER) && !tag.tag_is(&["div"]) {
                report.report("invalidContainerTag");
            }
        })
        .boxed(),
        accordion_rule(
            "accordion-content-tag",
            "CDR0213",
            "Restrict cdr-accordion__content to <div>.",
        )
        .message(
            "invalidContentTag",
            "cdr-accordion__content should be used on a <div> element.",
        )
        .analyze(analyze_tag)
        .check(|tag, _occ, report| {
            if tag.has(CONTENT) && !tag.tag_is(&["div"]) {
                report.report("invalidContentTag");
            }
        })
        .boxed(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ids, lint_html};

    #[test]
    fn a_complete_accordion_is_clean() {
        let found = lint_html(
            &rules(),
            concat!(
                r#"<li class="cdr-accordion cdr-accordion--compact cdr-accordion--open">"#,
                r#"<h3 class="cdr-accordion__header cdr-accordion__header--unwrapped">"#,
                r#"<button class="cdr-accordion__button"><span class="cdr-accordion__label">Q</span>"#,
                r#"<svg class="cdr-accordion__icon"></svg></button></h3>"#,
                r#"<div class="cdr-accordion__content-container"><div class="cdr-accordion__content">A</div></div>"#,
                r#"</li>"#,
            ),
        );
        assert!(found.is_empty(), "{found:?}");
    }

    #[test]
    fn element_tags_are_checked() {
        let found = lint_html(
            &rules(),
            r#"<p class="cdr-accordion__header"></p><a class="cdr-accordion__button"></a><div class="cdr-accordion__label"></div><span class="cdr-accordion__content"></span>"#,
        );
        assert_eq!(
            ids(&found),
            vec![
                ("accordion-header-tag", "invalidHeaderTag"),
                ("accordion-button-tag", "invalidButtonTag"),
                ("accordion-label-tag", "invalidLabelTag"),
                ("accordion-content-tag", "invalidContentTag"),
            ]
        );
    }

    #[test]
    fn only_styling_modifiers_need_the_base() {
        let found = lint_html(
            &rules(),
            r#"<div class="cdr-accordion--open"></div><div class="cdr-accordion--no-spacing"></div>"#,
        );
        assert_eq!(ids(&found), vec![("accordion-missing-base", "missingBase")]);
    }

    #[test]
    fn unknown_elements_and_modifiers() {
        let found = lint_html(
            &rules(),
            r#"<section class="cdr-accordion cdr-accordion__footer cdr-accordion--wide cdr-accordion__footer"></section>"#,
        );
        assert_eq!(
            ids(&found),
            vec![
                ("accordion-invalid-class", "invalidClass"),
                ("accordion-invalid-modifier", "invalidModifier"),
                ("accordion-duplicate", "duplicateClass"),
                ("accordion-base-tag", "invalidTag"),
            ]
        );
    }

    #[test]
    fn unwrapped_header_needs_the_header_class() {
        let found = lint_html(&rules(), r#"<h2 class="cdr-accordion__header--unwrapped"></h2>"#);
        assert_eq!(ids(&found), vec![("accordion-header-modifier", "missingHeader")]);
    }

    #[test]
    fn accordion_group_is_not_an_accordion_class() {
        let found = lint_html(&rules(), r#"<ul class="cdr-accordion-group"></ul>"#);
        assert!(found.is_empty(), "{found:?}");
    }
}
