//! Rule presets for common configurations.

use crate::{
    abstract_block, accordion, accordion_group, button, caption, container, form_error,
    heading_subheading_block, icon, image, input, kicker, label_standalone, label_wrapper,
    landing_lead, link, list, prose, quote, split_surface, text, title,
};
use cedar_lint_core::RuleBox;
use std::str::FromStr;

/// Preset configurations for cedar-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Every rule.
    Recommended,
    /// Host tag and companion attribute rules.
    Accessibility,
    /// Class vocabulary rules for gradual adoption.
    Minimal,
}

impl Preset {
    /// Every preset, in display order.
    pub const ALL: [Self; 3] = [Self::Recommended, Self::Accessibility, Self::Minimal];

    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Accessibility => accessibility_rules(),
            Self::Minimal => minimal_rules(),
        }
    }

    /// The name used in configuration files.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Accessibility => "accessibility",
            Self::Minimal => "minimal",
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| format!("unknown preset \"{s}\" (expected recommended, accessibility or minimal)"))
    }
}

/// Every family, by name, with its rule constructor.
pub const FAMILIES: &[(&str, fn() -> Vec<RuleBox>)] = &[
    ("button", button::rules),
    ("accordion", accordion::rules),
    ("accordion-group", accordion_group::rules),
    ("input", input::rules),
    ("label-standalone", label_standalone::rules),
    ("label-wrapper", label_wrapper::rules),
    ("kicker", kicker::rules),
    ("abstract", abstract_block::rules),
    ("title", title::rules),
    ("icon", icon::rules),
    ("container", container::rules),
    ("list", list::rules),
    ("prose", prose::rules),
    ("image", image::rules),
    ("link", link::rules),
    ("caption", caption::rules),
    ("quote", quote::rules),
    ("form-error", form_error::rules),
    ("landing-lead", landing_lead::rules),
    ("heading-subheading-block", heading_subheading_block::rules),
    ("split-surface", split_surface::rules),
    ("text", text::rules),
];

/// Returns all available rules, ordered by code.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    FAMILIES.iter().flat_map(|(_, rules)| rules()).collect()
}

/// Returns the rules of one family, or `None` for an unknown family.
#[must_use]
pub fn family_rules(family: &str) -> Option<Vec<RuleBox>> {
    FAMILIES
        .iter()
        .find(|(name, _)| *name == family)
        .map(|(_, rules)| rules())
}

/// Finds a rule by name (`button-type`) or code (`CDR0107`).
#[must_use]
pub fn find_rule(name_or_code: &str) -> Option<RuleBox> {
    all_rules()
        .into_iter()
        .find(|rule| rule.name() == name_or_code || rule.code().eq_ignore_ascii_case(name_or_code))
}

/// Returns the recommended set of rules: every rule.
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    all_rules()
}

/// Rules about where a class may be placed and which attributes its tag
/// needs.
const ACCESSIBILITY_RULES: &[&str] = &[
    "button-icon",
    "button-type",
    "button-anchor",
    "accordion-header-modifier",
    "image-missing-src",
    "image-missing-alt",
    "link-anchor-href",
    "link-blank-rel",
];

fn is_accessibility_rule(name: &str) -> bool {
    name.ends_with("-tag") || ACCESSIBILITY_RULES.contains(&name)
}

/// Returns the accessibility set of rules.
///
/// Includes every tag rule (`*-tag`, `*-invalid-tag`) plus the rules for
/// button type, anchor and icon labels, link `href`/`rel` and image
/// `src`/`alt`.
#[must_use]
pub fn accessibility_rules() -> Vec<RuleBox> {
    all_rules()
        .into_iter()
        .filter(|rule| is_accessibility_rule(rule.name()))
        .collect()
}

const VOCABULARY_SUFFIXES: &[&str] = &[
    "-missing-base",
    "-invalid-modifier",
    "-invalid-prefix",
    "-invalid-class",
    "-invalid-element-class",
    "-duplicate",
];

fn is_vocabulary_rule(name: &str) -> bool {
    name == "button-modifier" || VOCABULARY_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Returns the minimal set of rules.
///
/// For gradual adoption, only includes class vocabulary rules: missing
/// base, unknown modifiers, prefixes and classes, and duplicates.
#[must_use]
pub fn minimal_rules() -> Vec<RuleBox> {
    all_rules()
        .into_iter()
        .filter(|rule| is_vocabulary_rule(rule.name()))
        .collect()
}
