//! Building blocks shared by the family modules.
//!
//! Most families start from the same four modifier checks (missing base,
//! unknown modifier, separator misuse, duplicates) and then add a handful
//! of tag or vocabulary rules. The helpers here build those rules from a
//! [`ComponentSpec`] and the family's message texts.

use cedar_lint_core::classes::{
    analyze_elements, analyze_tag_with_modifiers, analyze_vocabulary, ComponentSpec, ElementTag,
    FamilyTag, ModifierTag, VocabularyTag,
};
use cedar_lint_core::{is_dynamic, Analyzed, RuleBox, RuleDef};

/// Builds the four modifier rules of a family.
///
/// Codes are `CDR<code>01` to `CDR<code>04`; names are `<family>-missing-base`,
/// `<family>-invalid-modifier`, `<family>-invalid-prefix` and
/// `<family>-duplicate`.
macro_rules! modifier_rules {
    ($spec:expr, family: $family:literal, base: $base:literal, code: $code:literal, example: $example:literal) => {
        [
            $crate::common::missing_base(
                concat!($family, "-missing-base"),
                concat!("CDR", $code, "01"),
                $spec,
                concat!("Require ", $base, " base class for modifiers."),
                concat!($base, " modifiers require the base class."),
            ),
            $crate::common::invalid_modifier(
                concat!($family, "-invalid-modifier"),
                concat!("CDR", $code, "02"),
                $spec,
                concat!("Validate ", $base, " modifier values."),
                concat!("Unknown ", $family, " modifier \"{{className}}\"."),
            ),
            $crate::common::invalid_prefix(
                concat!($family, "-invalid-prefix"),
                concat!("CDR", $code, "03"),
                $spec,
                concat!("Validate ", $base, " modifier prefixes."),
                concat!(
                    $base,
                    " modifiers must use the \"--\" separator (for example, ",
                    $base,
                    "--",
                    $example,
                    ")."
                ),
            ),
            $crate::common::duplicate(
                concat!($family, "-duplicate"),
                concat!("CDR", $code, "04"),
                $spec,
                concat!("Prevent duplicate ", $base, " classes."),
                concat!("Duplicate ", $family, " class \"{{className}}\" is not allowed."),
            ),
        ]
    };
}

pub(crate) use modifier_rules;

/// Builds the five shared rules of a family with elements and modifiers.
///
/// Codes are `CDR<code>01` to `CDR<code>05`. Each text pair is the rule
/// description followed by its message.
macro_rules! element_rules {
    (
        $spec:expr,
        family: $family:literal,
        code: $code:literal,
        missing_base: ($d1:literal, $m1:literal),
        invalid_modifier: ($d2:literal, $m2:literal),
        invalid_prefix: ($d3:literal, $m3:literal),
        invalid_element_class: ($d4:literal, $m4:literal),
        duplicate: ($d5:literal, $m5:literal) $(,)?
    ) => {
        $crate::common::element_family_rules(
            $spec,
            [
                concat!($family, "-missing-base"),
                concat!($family, "-invalid-modifier"),
                concat!($family, "-invalid-prefix"),
                concat!($family, "-invalid-element-class"),
                concat!($family, "-duplicate"),
            ],
            [
                concat!("CDR", $code, "01"),
                concat!("CDR", $code, "02"),
                concat!("CDR", $code, "03"),
                concat!("CDR", $code, "04"),
                concat!("CDR", $code, "05"),
            ],
            [($d1, $m1), ($d2, $m2), ($d3, $m3), ($d4, $m4), ($d5, $m5)],
        )
    };
}

pub(crate) use element_rules;

/// Attaches the [`ModifierTag`] analyzer of `spec` to `def`.
pub(crate) fn with_modifiers(def: RuleDef, spec: ComponentSpec) -> Analyzed<ModifierTag> {
    def.base_class(spec.base_class)
        .analyze(move |occ| analyze_tag_with_modifiers(occ, &spec))
}

/// Attaches the [`ElementTag`] analyzer of `spec` to `def`.
pub(crate) fn with_elements(def: RuleDef, spec: ComponentSpec) -> Analyzed<ElementTag> {
    def.base_class(spec.base_class)
        .analyze(move |occ| analyze_elements(occ, &spec))
}

/// Attaches the [`VocabularyTag`] analyzer of `spec` to `def`.
pub(crate) fn with_vocabulary(def: RuleDef, spec: ComponentSpec) -> Analyzed<VocabularyTag> {
    def.base_class(spec.base_class)
        .analyze(move |occ| analyze_vocabulary(occ, &spec))
}

/// A rule definition with one message.
pub(crate) fn rule_def(
    name: &'static str,
    code: &'static str,
    description: &'static str,
    message_id: &'static str,
    message: &'static str,
) -> RuleDef {
    RuleDef::new(name, code)
        .describe(description)
        .message(message_id, message)
}

pub(crate) fn missing_base(
    name: &'static str,
    code: &'static str,
    spec: ComponentSpec,
    description: &'static str,
    message: &'static str,
) -> RuleBox {
    with_modifiers(rule_def(name, code, description, "missingBase", message), spec)
        .check(|tag, _occ, report| {
            if !tag.info.has_base && !tag.info.modifiers.is_empty() {
                report.report("missingBase");
            }
        })
        .boxed()
}

pub(crate) fn invalid_modifier(
    name: &'static str,
    code: &'static str,
    spec: ComponentSpec,
    description: &'static str,
    message: &'static str,
) -> RuleBox {
    with_modifiers(rule_def(name, code, description, "invalidModifier", message), spec)
        .check(|tag, _occ, report| {
            report.report_unique_classes("invalidModifier", &tag.info.invalid_modifiers);
        })
        .boxed()
}

pub(crate) fn invalid_prefix(
    name: &'static str,
    code: &'static str,
    spec: ComponentSpec,
    description: &'static str,
    message: &'static str,
) -> RuleBox {
    with_modifiers(rule_def(name, code, description, "invalidPrefix", message), spec)
        .check(|tag, _occ, report| {
            report.report_unique_classes("invalidPrefix", &tag.info.invalid_prefixes);
        })
        .boxed()
}

pub(crate) fn duplicate(
    name: &'static str,
    code: &'static str,
    spec: ComponentSpec,
    description: &'static str,
    message: &'static str,
) -> RuleBox {
    with_modifiers(rule_def(name, code, description, "duplicateClass", message), spec)
        .check(|tag, _occ, report| {
            report.report_classes("duplicateClass", &tag.info.duplicate_classes);
        })
        .boxed()
}

/// Reports `invalidTag` when a tag carrying the base or a modifier of
/// `spec` is not one of `tags`. Tag names are compared as extracted.
pub(crate) fn modifier_tag_rule(
    name: &'static str,
    code: &'static str,
    spec: ComponentSpec,
    tags: &'static [&'static str],
    description: &'static str,
    message: &'static str,
) -> RuleBox {
    with_modifiers(rule_def(name, code, description, "invalidTag", message), spec)
        .check(move |tag, _occ, report| {
            if !tags.contains(&tag.tag_name.as_str()) {
                report.report("invalidTag");
            }
        })
        .boxed()
}

/// Reports `invalidClass` for family classes outside the vocabulary.
pub(crate) fn invalid_class(
    name: &'static str,
    code: &'static str,
    spec: ComponentSpec,
    description: &'static str,
    message: &'static str,
) -> RuleBox {
    with_vocabulary(rule_def(name, code, description, "invalidClass", message), spec)
        .check(|tag, _occ, report| {
            report.report_unique_classes("invalidClass", &tag.invalid_classes);
        })
        .boxed()
}

/// Reports `duplicateClass` for family classes repeated on a tag.
pub(crate) fn vocabulary_duplicate(
    name: &'static str,
    code: &'static str,
    spec: ComponentSpec,
    description: &'static str,
    message: &'static str,
) -> RuleBox {
    with_vocabulary(rule_def(name, code, description, "duplicateClass", message), spec)
        .check(|tag, _occ, report| {
            report.report_classes("duplicateClass", &tag.duplicate_classes);
        })
        .boxed()
}

/// Reports `message_id` when a tag carrying any of `classes` is not one
/// of `tags`.
pub(crate) fn element_tag_rule<A: FamilyTag + 'static>(
    analyzed: Analyzed<A>,
    message_id: &'static str,
    classes: &'static [&'static str],
    tags: &'static [&'static str],
) -> RuleBox {
    analyzed
        .check(move |tag, _occ, report| {
            let carries = classes.iter().any(|class| tag.has(class));
            if carries && !tag.tag_is(tags) {
                report.report(message_id);
            }
        })
        .boxed()
}

/// Backs [`element_rules!`]: missing base, invalid modifier, invalid
/// prefix, invalid element class and duplicates, in that order.
pub(crate) fn element_family_rules(
    spec: ComponentSpec,
    names: [&'static str; 5],
    codes: [&'static str; 5],
    texts: [(&'static str, &'static str); 5],
) -> Vec<RuleBox> {
    let def = |i: usize, message_id: &'static str| {
        rule_def(names[i], codes[i], texts[i].0, message_id, texts[i].1)
    };
    vec![
        with_elements(def(0, "missingBase"), spec)
            .check(|tag, _occ, report| {
                if !tag.info.has_base && !tag.info.modifiers.is_empty() {
                    report.report("missingBase");
                }
            })
            .boxed(),
        with_elements(def(1, "invalidModifier"), spec)
            .check(|tag, _occ, report| {
                report.report_unique_classes("invalidModifier", &tag.info.invalid_modifiers);
            })
            .boxed(),
        with_elements(def(2, "invalidPrefix"), spec)
            .check(|tag, _occ, report| {
                report.report_unique_classes("invalidPrefix", &tag.info.invalid_prefixes);
            })
            .boxed(),
        with_elements(def(3, "invalidClass"), spec)
            .check(|tag, _occ, report| {
                report.report_unique_classes("invalidClass", &tag.invalid_elements);
            })
            .boxed(),
        with_elements(def(4, "duplicateClass"), spec)
            .check(|tag, _occ, report| {
                report.report_classes("duplicateClass", &tag.vocabulary.duplicate_classes);
            })
            .boxed(),
    ]
}

/// Reports `invalidTag` when a tag carrying the base or a modifier is not
/// one of the family's host tags.
pub(crate) fn element_host_rule(
    spec: ComponentSpec,
    name: &'static str,
    code: &'static str,
    description: &'static str,
    message: &'static str,
) -> RuleBox {
    with_elements(rule_def(name, code, description, "invalidTag", message), spec)
        .check(move |tag, _occ, report| {
            let styled = tag.info.has_base || !tag.info.modifiers.is_empty();
            if styled && !tag.tag_is(spec.host_tags) {
                report.report("invalidTag");
            }
        })
        .boxed()
}

/// A non-empty value that is not a dynamic expression.
pub(crate) fn is_literal(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty() && !is_dynamic(v))
}
