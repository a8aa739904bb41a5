//! Rules for `cdr-button`.
//!
//! # Class grammar
//!
//! - exactly one variant: `primary`, `secondary`, `sale`, `dark`, `link`
//! - text sizes `small|medium|large`, optionally at a breakpoint
//!   (`cdr-button--small@md`)
//! - `full-width`, optionally at a breakpoint
//! - icon-only buttons take `icon-only`, optionally `with-background`,
//!   and size with `icon-only-small|medium|large`
//! - `has-icon-left` / `has-icon-right` for text buttons with an icon
//!
//! Buttons live on `<button>` or `<a>`. On any other tag only
//! `button-tag` reports; the remaining rules skip the tag.

use std::sync::LazyLock;

use crate::common::is_literal;
use cedar_lint_core::classes::{find_duplicate_classes, has_icon_label, tag_classes, unique};
use cedar_lint_core::{is_dynamic, Analyzed, RuleBox, RuleDef, TagOccurrence};
use regex::Regex;

/// Base class of the family.
pub const BASE_CLASS: &str = "cdr-button";

const MODIFIER_PREFIX: &str = "cdr-button--";
const FULL_WIDTH_PREFIX: &str = "cdr-button--full-width";
const ICON_ONLY_PREFIX: &str = "cdr-button--icon-only-";
const ICON_ONLY: &str = "cdr-button--icon-only";
const WITH_BACKGROUND: &str = "cdr-button--with-background";
const ICON_LEFT: &str = "cdr-button--has-icon-left";
const ICON_RIGHT: &str = "cdr-button--has-icon-right";

const VARIANTS: &[&str] = &[
    "cdr-button--primary",
    "cdr-button--secondary",
    "cdr-button--sale",
    "cdr-button--dark",
    "cdr-button--link",
];

const EXACT_MODIFIERS: &[&str] = &[
    "cdr-button--primary",
    "cdr-button--secondary",
    "cdr-button--sale",
    "cdr-button--dark",
    "cdr-button--link",
    ICON_ONLY,
    WITH_BACKGROUND,
    ICON_LEFT,
    ICON_RIGHT,
];

const BUTTON_TYPES: &[&str] = &["button", "submit", "reset"];
const VALID_TAGS: &[&str] = &["button", "a"];

#[allow(clippy::expect_used)]
static SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^cdr-button--(small|medium|large)(@xs|@sm|@md|@lg)?$").expect("valid regex")
});
#[allow(clippy::expect_used)]
static BASE_SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^cdr-button--(small|medium|large)$").expect("valid regex"));
#[allow(clippy::expect_used)]
static FULL_WIDTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^cdr-button--full-width(@xs|@sm|@md|@lg)?$").expect("valid regex")
});
#[allow(clippy::expect_used)]
static ICON_ONLY_SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^cdr-button--icon-only-(small|medium|large)$").expect("valid regex")
});

/// Class facts of one button-like tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonClasses {
    /// `cdr-button--icon-only` is present.
    pub has_icon_only: bool,
    /// `cdr-button--with-background` is present.
    pub has_with_background: bool,
    /// `has-icon-left` or `has-icon-right` is present.
    pub has_icon_side: bool,
    /// Variant classes, in order.
    pub variants: Vec<String>,
    /// Text size classes, with or without breakpoint.
    pub sizes: Vec<String>,
    /// Text size classes without breakpoint.
    pub base_sizes: Vec<String>,
    /// Valid icon-only size classes.
    pub icon_only_sizes: Vec<String>,
    /// Every class starting with the full-width prefix.
    pub full_width: Vec<String>,
    /// Repeated classes.
    pub duplicates: Vec<String>,
    /// Classes starting with the base but missing the `--` separator.
    pub invalid_prefixes: Vec<String>,
    /// Breakpoint classes that are neither a size nor full width.
    pub invalid_sizes: Vec<String>,
    /// Full-width prefixed classes outside the grammar.
    pub invalid_full_width: Vec<String>,
    /// Icon-only prefixed classes outside the grammar.
    pub invalid_icon_only_sizes: Vec<String>,
    /// Modifiers that match nothing in the grammar.
    pub unknown_modifiers: Vec<String>,
}

/// Classifies every class of a button tag in one pass.
#[must_use]
pub fn analyze_classes(classes: &[String]) -> ButtonClasses {
    let mut info = ButtonClasses {
        duplicates: find_duplicate_classes(classes),
        ..ButtonClasses::default()
    };

    for class in classes {
        let class = class.as_str();
        let is_modifier = class.starts_with(MODIFIER_PREFIX);
        let is_size = SIZE_RE.is_match(class);
        let is_full_width = FULL_WIDTH_RE.is_match(class);
        let is_icon_only_size = ICON_ONLY_SIZE_RE.is_match(class);

        if class.starts_with(BASE_CLASS) && class != BASE_CLASS && !is_modifier {
            info.invalid_prefixes.push(class.to_string());
        }
        if VARIANTS.contains(&class) {
            info.variants.push(class.to_string());
        }
        if is_size {
            info.sizes.push(class.to_string());
        }
        if BASE_SIZE_RE.is_match(class) {
            info.base_sizes.push(class.to_string());
        }
        if is_icon_only_size {
            info.icon_only_sizes.push(class.to_string());
        }
        if class.starts_with(FULL_WIDTH_PREFIX) {
            info.full_width.push(class.to_string());
            if !is_full_width {
                info.invalid_full_width.push(class.to_string());
            }
        }
        if class.starts_with(ICON_ONLY_PREFIX) && !is_icon_only_size {
            info.invalid_icon_only_sizes.push(class.to_string());
        }
        if is_modifier {
            if class.contains('@') && !is_size && !is_full_width {
                info.invalid_sizes.push(class.to_string());
            } else if !is_size
                && !is_full_width
                && !is_icon_only_size
                && !EXACT_MODIFIERS.contains(&class)
            {
                info.unknown_modifiers.push(class.to_string());
            }
        }

        match class {
            ICON_ONLY => info.has_icon_only = true,
            WITH_BACKGROUND => info.has_with_background = true,
            ICON_LEFT | ICON_RIGHT => info.has_icon_side = true,
            _ => {}
        }
    }

    info
}

/// Analysis record for button rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonTag {
    /// Lower-cased tag name.
    pub tag_name: String,
    /// Whether the tag may carry button classes.
    pub is_valid_tag: bool,
    /// Resolved classes.
    pub classes: Vec<String>,
    /// Class facts.
    pub info: ButtonClasses,
}

/// Builds a [`ButtonTag`] when the tag carries the base or any
/// `cdr-button--` class.
#[must_use]
pub fn analyze_tag(occurrence: &TagOccurrence) -> Option<ButtonTag> {
    let tagged = tag_classes(occurrence)?;
    let relevant = tagged
        .classes
        .iter()
        .any(|class| class == BASE_CLASS || class.starts_with(MODIFIER_PREFIX));
    if !relevant {
        return None;
    }
    let tag_name = tagged.tag_name.to_lowercase();
    Some(ButtonTag {
        is_valid_tag: VALID_TAGS.contains(&tag_name.as_str()),
        tag_name,
        info: analyze_classes(&tagged.classes),
        classes: tagged.classes,
    })
}

fn button_rule(def: RuleDef) -> Analyzed<ButtonTag> {
    def.base_class(BASE_CLASS).analyze(analyze_tag)
}

/// Button rules (`CDR01xx`).
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn rules() -> Vec<RuleBox> {
    vec![
        button_rule(
            RuleDef::new("button-variant", "CDR0101")
                .describe("Validate cdr-button variant class usage.")
                .message(
                    "missingVariant",
                    "Button must include exactly one variant class: cdr-button--primary|secondary|sale|dark|link.",
                )
                .message(
                    "multipleVariants",
                    "Button has multiple variant classes; keep only one of cdr-button--primary|secondary|sale|dark|link.",
                ),
        )
        .check(|tag, _occ, report| {
            if !tag.is_valid_tag {
                return;
            }
            match unique(&tag.info.variants).len() {
                0 => report.report("missingVariant"),
                1 => {}
                _ => report.report("multipleVariants"),
            }
        })
        .boxed(),
        button_rule(
            RuleDef::new("button-size", "CDR0102")
                .describe("Validate cdr-button size and full-width classes.")
                .message(
                    "invalidSizeClass",
                    "Invalid size class \"{{className}}\". Use cdr-button--small|medium|large with optional @xs|@sm|@md|@lg.",
                )
                .message(
                    "invalidFullWidth",
                    "Invalid full-width class \"{{className}}\". Use cdr-button--full-width with optional @xs|@sm|@md|@lg.",
                )
                .message(
                    "multipleBaseSizes",
                    "Button has multiple base size classes; keep only one of cdr-button--small|medium|large.",
                ),
        )
        .check(|tag, _occ, report| {
            if !tag.is_valid_tag {
                return;
            }
            report.report_unique_classes("invalidFullWidth", &tag.info.invalid_full_width);
            let invalid_sizes: Vec<String> = tag
                .info
                .invalid_sizes
                .iter()
                .chain(&tag.info.invalid_icon_only_sizes)
                .cloned()
                .collect();
            report.report_unique_classes("invalidSizeClass", &invalid_sizes);
            if unique(&tag.info.base_sizes).len() > 1 {
                report.report("multipleBaseSizes");
            }
        })
        .boxed(),
        button_rule(
            RuleDef::new("button-icon", "CDR0103")
                .describe("Validate icon-only and icon placement rules for cdr-button.")
                .message(
                    "iconOnlyWithTextSize",
                    "Icon-only button must not use text size classes (cdr-button--small|medium|large).",
                )
                .message(
                    "textSizeWithIconOnlyClass",
                    "Text button must not use icon-only size classes (cdr-button--icon-only-*).",
                )
                .message(
                    "withBackgroundRequiresIconOnly",
                    "cdr-button--with-background only applies to icon-only buttons; add cdr-button--icon-only.",
                )
                .message(
                    "fullWidthWithIconOnly",
                    "cdr-button--full-width cannot be combined with cdr-button--icon-only.",
                )
                .message(
                    "iconOnlyWithIconSide",
                    "Icon-only button must not use cdr-button--has-icon-left/right.",
                )
                .message(
                    "iconOnlyNeedsLabel",
                    "Icon-only button must include aria-label or aria-labelledby for an accessible name.",
                ),
        )
        .check(|tag, occ, report| {
            if !tag.is_valid_tag {
                return;
            }
            let info = &tag.info;
            if info.has_with_background && !info.has_icon_only {
                report.report("withBackgroundRequiresIconOnly");
            }
            if info.has_icon_only && !info.full_width.is_empty() {
                report.report("fullWidthWithIconOnly");
            }
            if info.has_icon_only && info.has_icon_side {
                report.report("iconOnlyWithIconSide");
            }
            if info.has_icon_only {
                if !info.sizes.is_empty() {
                    report.report("iconOnlyWithTextSize");
                }
                if !has_icon_label(&occ.attributes) {
                    report.report("iconOnlyNeedsLabel");
                }
            }
            if !info.has_icon_only && !info.icon_only_sizes.is_empty() {
                report.report("textSizeWithIconOnlyClass");
            }
        })
        .boxed(),
        button_rule(
            RuleDef::new("button-modifier", "CDR0104")
                .describe("Validate cdr-button modifier class names.")
                .message(
                    "invalidModifier",
                    "Unknown cdr-button modifier \"{{className}}\". Use a valid size, variant, icon, or full-width class.",
                )
                .message(
                    "invalidModifierPrefix",
                    "cdr-button modifiers must use the \"--\" separator (found \"{{className}}\").",
                ),
        )
        .check(|tag, _occ, report| {
            if !tag.is_valid_tag {
                return;
            }
            report.report_unique_classes("invalidModifierPrefix", &tag.info.invalid_prefixes);
            report.report_unique_classes("invalidModifier", &tag.info.unknown_modifiers);
        })
        .boxed(),
        button_rule(
            RuleDef::new("button-duplicate", "CDR0105")
                .describe("Prevent duplicate cdr-button classes.")
                .message(
                    "duplicateClass",
                    "Duplicate class \"{{className}}\" is not allowed on cdr-button elements.",
                ),
        )
        .check(|tag, _occ, report| {
            if tag.is_valid_tag {
                report.report_classes("duplicateClass", &tag.info.duplicates);
            }
        })
        .boxed(),
        button_rule(
            RuleDef::new("button-tag", "CDR0106")
                .describe("Restrict cdr-button usage to <button> or <a>.")
                .message(
                    "invalidTag",
                    "cdr-button classes may only be used on <button> or <a> elements (found <{{tagName}}>).",
                ),
        )
        .check(|tag, _occ, report| {
            if !tag.is_valid_tag {
                report.report_with("invalidTag", [("tagName", tag.tag_name.as_str())]);
            }
        })
        .boxed(),
        button_rule(
            RuleDef::new("button-type", "CDR0107")
                .describe("Validate button type attributes for cdr-button.")
                .message(
                    "invalidButtonType",
                    "Button type must be \"button\", \"submit\", or \"reset\" (found {{typeValue}}).",
                )
                .message(
                    "missingButtonType",
                    "Button must include type=\"button\", \"submit\", or \"reset\".",
                ),
        )
        .check(|tag, occ, report| {
            if tag.tag_name != "button" {
                return;
            }
            let type_value = occ.attributes.get("type").unwrap_or("");
            if type_value.is_empty() {
                report.report("missingButtonType");
            } else if !is_dynamic(type_value) && !BUTTON_TYPES.contains(&type_value) {
                report.report_with("invalidButtonType", [("typeValue", type_value)]);
            }
        })
        .boxed(),
        button_rule(
            RuleDef::new("button-anchor", "CDR0108")
                .describe("Validate anchor usage for cdr-button links.")
                .message(
                    "anchorWithType",
                    "Anchor tags (<a>) should not include a type attribute; use <button> instead.",
                )
                .message(
                    "anchorMissingHref",
                    "Anchor tags (<a>) must include an href attribute.",
                ),
        )
        .check(|tag, occ, report| {
            if tag.tag_name != "a" {
                return;
            }
            let href = occ.attributes.get("href").unwrap_or("");
            if href.is_empty() {
                report.report("anchorMissingHref");
            } else if is_dynamic(href) {
                return;
            }
            if is_literal(occ.attributes.get("type")) {
                report.report("anchorWithType");
            }
        })
        .boxed(),
    ]
}
