//! Rules for `cdr-image`.
//!
//! Image modifiers come in four categories (ratio, fit, position, radius)
//! and at most one of each applies. The companion attribute rules only
//! look at `<img>` tags; other hosts are left to `image-invalid-tag`.

use crate::common::{is_literal, modifier_rules, modifier_tag_rule, with_modifiers};
use cedar_lint_core::classes::{unique, ComponentSpec};
use cedar_lint_core::{RuleBox, RuleDef};

/// Vocabulary of the image family.
pub const SPEC: ComponentSpec = ComponentSpec::new("cdr-image")
    .with_modifiers(&[
        "ratio-1-1",
        "ratio-1-2",
        "ratio-3-4",
        "ratio-9-16",
        "ratio-2-1",
        "ratio-4-3",
        "ratio-16-9",
        "fit-cover",
        "fit-contain",
        "fit-none",
        "fit-fill",
        "fit-scale-down",
        "position-center",
        "position-top",
        "position-right",
        "position-bottom",
        "position-left",
        "radius-sharp",
        "radius-soft",
        "radius-softer",
        "radius-round",
    ])
    .with_host_tags(&["img"]);

/// Modifier categories, by the prefix after `cdr-image--`.
const CATEGORIES: &[&str] = &["ratio", "fit", "position", "radius"];

fn category_members<'a>(classes: &'a [String], category: &str) -> Vec<String> {
    let members: Vec<String> = classes
        .iter()
        .filter(|class| {
            SPEC.is_allowed_modifier(class)
                && SPEC
                    .modifier_suffix(class)
                    .and_then(|suffix| suffix.strip_prefix(category))
                    .is_some_and(|rest| rest.starts_with('-'))
        })
        .cloned()
        .collect();
    unique(&members)
}

/// Image rules (`CDR14xx`).
#[must_use]
pub fn rules() -> Vec<RuleBox> {
    let mut rules = Vec::from(modifier_rules!(
        SPEC,
        family: "image",
        base: "cdr-image",
        code: "14",
        example: "ratio-16-9"
    ));

    rules.push(
        with_modifiers(
            RuleDef::new("image-multiple-modifier", "CDR1405")
                .describe("Prevent multiple image modifiers of the same type.")
                .message(
                    "multipleModifier",
                    "cdr-image should include only one {{modifierType}} modifier (found: {{classList}}).",
                ),
            SPEC,
        )
        .check(|tag, _occ, report| {
            for category in CATEGORIES {
                let members = category_members(&tag.classes, category);
                if members.len() > 1 {
                    report.report_with(
                        "multipleModifier",
                        [
                            ("modifierType", (*category).to_string()),
                            ("classList", members.join(", ")),
                        ],
                    );
                }
            }
        })
        .boxed(),
    );

    rules.push(modifier_tag_rule(
        "image-invalid-tag",
        "CDR1406",
        SPEC,
        SPEC.host_tags,
        "Restrict cdr-image classes to <img>.",
        "cdr-image classes are only valid on <img> elements.",
    ));

    rules.push(
        with_modifiers(
            RuleDef::new("image-missing-src", "CDR1407")
                .describe("Require src on images.")
                .message("missingSrc", "<img> elements with cdr-image must include a src."),
            SPEC,
        )
        .check(|tag, occ, report| {
            if tag.tag_name == "img" && !is_literal(occ.attributes.get("src")) {
                report.report("missingSrc");
            }
        })
        .boxed(),
    );

    rules.push(
        with_modifiers(
            RuleDef::new("image-missing-alt", "CDR1408")
                .describe("Require alt on images.")
                .message(
                    "missingAlt",
                    "<img> elements with cdr-image must include an alt attribute.",
                ),
            SPEC,
        )
        .check(|tag, occ, report| {
            if tag.tag_name == "img" && !occ.attributes.contains("alt") {
                report.report("missingAlt");
            }
        })
        .boxed(),
    );

    rules
}
