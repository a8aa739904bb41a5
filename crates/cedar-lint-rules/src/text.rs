//! Rules for the typography classes (`cdr-text`, `cdr-body`, the heading
//! families and the utility families).
//!
//! A tag is relevant when it carries one of the bases or a `base--`
//! modifier. Each base that prefixes any class on the tag is analyzed on
//! its own, so one tag may report for several bases.

use cedar_lint_core::classes::{
    analyze_modifiers, find_duplicate_classes, tag_classes, unique, ComponentSpec, ModifierAnalysis,
    TagClasses,
};
use cedar_lint_core::{RuleBox, RuleDef, TagOccurrence};

/// The typography bases and their modifiers.
pub static SPECS: [ComponentSpec; 9] = [
    ComponentSpec::new("cdr-text"),
    ComponentSpec::new("cdr-body").with_modifiers(&["scale-0", "scale-1", "strong"]),
    ComponentSpec::new("cdr-eyebrow"),
    ComponentSpec::new("cdr-heading-display")
        .with_modifiers(&["scale-2", "scale-3", "scale-4", "scale-5", "scale-6", "scale-7"]),
    ComponentSpec::new("cdr-heading-sans").with_modifiers(&["scale-1", "scale-2", "scale-3"]),
    ComponentSpec::new("cdr-heading-serif")
        .with_modifiers(&["scale-1", "scale-2", "scale-3", "scale-4", "scale-5", "strong"]),
    ComponentSpec::new("cdr-subheading-sans")
        .with_modifiers(&["scale-minus-1", "scale-0", "scale-1", "scale-2"]),
    ComponentSpec::new("cdr-utility-sans")
        .with_modifiers(&["scale-minus-1", "scale-0", "scale-1", "scale-2", "scale-3", "strong"]),
    ComponentSpec::new("cdr-utility-serif")
        .with_modifiers(&["scale-minus-1", "scale-0", "scale-1", "scale-2", "scale-3", "strong"]),
];

/// Literal gate shared by every text rule.
const GATE: &str = "cdr-";

/// Facts about one typography base on a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextComponent {
    /// The base class.
    pub base_class: &'static str,
    /// Modifier facts over every class on the tag.
    pub info: ModifierAnalysis,
    /// `base--scale-*` classes, in order.
    pub scale_modifiers: Vec<String>,
}

/// Analysis record for the text rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTag {
    /// All resolved classes.
    pub classes: Vec<String>,
    /// Classes starting with any base.
    pub text_classes: Vec<String>,
    /// Repeated entries of `text_classes`.
    pub duplicate_classes: Vec<String>,
    /// One entry per base that prefixes a class on the tag.
    pub components: Vec<TextComponent>,
}

fn is_text_class(class: &str) -> bool {
    SPECS
        .iter()
        .any(|spec| class == spec.base_class || spec.is_modifier_class(class))
}

/// Builds the text analysis of a tag.
#[must_use]
pub fn analyze_tag(occurrence: &TagOccurrence) -> Option<TextTag> {
    let TagClasses { classes, .. } = tag_classes(occurrence)?;
    if !classes.iter().any(|class| is_text_class(class)) {
        return None;
    }

    let text_classes: Vec<String> = classes
        .iter()
        .filter(|class| SPECS.iter().any(|spec| class.starts_with(spec.base_class)))
        .cloned()
        .collect();

    let components = SPECS
        .iter()
        .filter(|spec| classes.iter().any(|class| class.starts_with(spec.base_class)))
        .map(|spec| {
            let scale_prefix = spec.modifier("scale-");
            TextComponent {
                base_class: spec.base_class,
                info: analyze_modifiers(spec, &classes),
                scale_modifiers: classes
                    .iter()
                    .filter(|class| class.starts_with(&scale_prefix))
                    .cloned()
                    .collect(),
            }
        })
        .collect();

    Some(TextTag {
        duplicate_classes: find_duplicate_classes(&text_classes),
        text_classes,
        components,
        classes,
    })
}

fn text_rule(name: &'static str, code: &'static str, description: &'static str) -> RuleDef {
    SPECS
        .iter()
        .fold(RuleDef::new(name, code).base_class(GATE), |def, spec| {
            def.base_class(spec.base_class)
        })
        .describe(description)
}

/// Text rules (`CDR22xx`).
#[must_use]
pub fn rules() -> Vec<RuleBox> {
    vec![
        text_rule("text-missing-base", "CDR2201", "Require text base classes for modifiers.")
            .message("missingBase", "\"{{baseClass}}\" modifiers require the base class.")
            .analyze(analyze_tag)
            .check(|tag, _occ, report| {
                for component in &tag.components {
                    if !component.info.has_base && !component.info.modifiers.is_empty() {
                        report.report_with("missingBase", [("baseClass", component.base_class)]);
                    }
                }
            })
            .boxed(),
        text_rule("text-invalid-modifier", "CDR2202", "Validate text modifier values.")
            .message("invalidModifier", "Unknown text modifier \"{{className}}\".")
            .analyze(analyze_tag)
            .check(|tag, _occ, report| {
                let invalid: Vec<String> = tag
                    .components
                    .iter()
                    .flat_map(|c| c.info.invalid_modifiers.iter().cloned())
                    .collect();
                report.report_unique_classes("invalidModifier", &invalid);
            })
            .boxed(),
        text_rule("text-invalid-prefix", "CDR2203", "Validate text modifier prefixes.")
            .message(
                "invalidPrefix",
                "Text modifiers must use the \"--\" separator (for example, cdr-heading-sans--scale-2).",
            )
            .analyze(analyze_tag)
            .check(|tag, _occ, report| {
                let invalid: Vec<String> = tag
                    .components
                    .iter()
                    .flat_map(|c| c.info.invalid_prefixes.iter().cloned())
                    .collect();
                report.report_unique_classes("invalidPrefix", &invalid);
            })
            .boxed(),
        text_rule("text-duplicate", "CDR2204", "Prevent duplicate text classes.")
            .message("duplicateClass", "Duplicate text class \"{{className}}\" is not allowed.")
            .analyze(analyze_tag)
            .check(|tag, _occ, report| {
                report.report_unique_classes("duplicateClass", &tag.duplicate_classes);
            })
            .boxed(),
        text_rule("text-multiple-scale", "CDR2205", "Prevent multiple text scale modifiers.")
            .message(
                "multipleScale",
                "\"{{baseClass}}\" should only include one scale modifier (found: {{classList}}).",
            )
            .analyze(analyze_tag)
            .check(|tag, _occ, report| {
                for component in &tag.components {
                    let scales = unique(&component.scale_modifiers);
                    if scales.len() > 1 {
                        report.report_with(
                            "multipleScale",
                            [
                                ("baseClass", component.base_class.to_string()),
                                ("classList", scales.join(", ")),
                            ],
                        );
                    }
                }
            })
            .boxed(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ids, lint_html, messages};

    #[test]
    fn scaled_text_is_clean() {
        let found = lint_html(
            &rules(),
            r#"<h2 class="cdr-heading-sans cdr-heading-sans--scale-2">A</h2><p class="body body--str">B</p>"#,
        );
        assert!(found.is_empty(), "{found:?}");
    }

    #[test]
    fn unrelated_classes_are_ignored() {
        let found = lint_html(&rules(), r#"<p class="cdr-textual other"></p>"#);
        assert!(found.is_empty(), "{found:?}");
    }

    #[test]
    fn modifiers_need_their_own_base() {
        let found = lint_html(&rules(), r#"<p class="cdr-body--scale-1 cdr-utility-sans--strong"></p>"#);
        assert_eq!(
            messages(&found),
            vec![
                "\"cdr-body\" modifiers require the base class.",
                "\"cdr-utility-sans\" modifiers require the base class.",
            ]
        );
    }

    #[test]
    fn multiple_scales_are_listed() {
        let found = lint_html(
            &rules(),
            r#"<h1 class="cdr-heading-display cdr-heading-display--scale-2 cdr-heading-display--scale-5"></h1>"#,
        );
        assert_eq!(
            messages(&found),
            vec![
                "\"cdr-heading-display\" should only include one scale modifier (found: cdr-heading-display--scale-2, cdr-heading-display--scale-5)."
            ]
        );
    }

    #[test]
    fn invalid_modifiers_prefixes_and_duplicates() {
        let found = lint_html(
            &rules(),
            r#"<p class="cdr-body cdr-body--scale-9 cdr-body-strong cdr-body"></p>"#,
        );
        assert_eq!(
            ids(&found),
            vec![
                ("text-invalid-modifier", "invalidModifier"),
                ("text-invalid-prefix", "invalidPrefix"),
                ("text-duplicate", "duplicateClass"),
            ]
        );
    }
}
