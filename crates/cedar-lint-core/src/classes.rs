//! Class list analysis primitives shared by every component rule.
//!
//! A component family is described once by a static [`ComponentSpec`]. The
//! helpers here turn a [`TagOccurrence`] into resolved class tokens and the
//! structural facts rules check: base presence, modifiers, separator misuse,
//! unknown vocabulary and duplicates.

use crate::aliases::resolve_class_alias;
use crate::tag::{is_dynamic, AttributeMap, TagOccurrence};
use std::collections::HashSet;

/// Separator between a block and its modifier.
pub const MODIFIER_SEPARATOR: &str = "--";
/// Separator between a block and its element.
pub const ELEMENT_SEPARATOR: &str = "__";

/// Splits a class attribute value on whitespace and resolves aliases.
/// Empty tokens are dropped.
#[must_use]
pub fn split_classes(value: &str) -> Vec<String> {
    value
        .split_whitespace()
        .map(resolve_class_alias)
        .filter(|class| !class.is_empty())
        .collect()
}

/// Returns each class that occurs more than once, in the order the second
/// occurrence was seen, once per class.
#[must_use]
pub fn find_duplicate_classes(classes: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for class in classes {
        if !seen.insert(class.as_str()) && reported.insert(class.as_str()) {
            duplicates.push(class.clone());
        }
    }
    duplicates
}

/// Order-preserving dedup.
#[must_use]
pub fn unique(items: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(item.as_str()))
        .cloned()
        .collect()
}

/// Static vocabulary of one component family.
///
/// Modifier and element lists hold the part after the separator, so
/// `cdr-container--fluid` is listed as `"fluid"` and
/// `cdr-accordion__header--unwrapped` as `"header--unwrapped"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentSpec {
    /// Canonical base class, e.g. `cdr-container`.
    pub base_class: &'static str,
    /// Allowed modifier suffixes.
    pub modifiers: &'static [&'static str],
    /// Allowed element suffixes.
    pub elements: &'static [&'static str],
    /// Tags the base class may be placed on. Empty means any tag.
    pub host_tags: &'static [&'static str],
    /// Whole classes that belong to the family without its prefix,
    /// e.g. `cdr-input-wrap` or `--active-error`.
    pub companions: &'static [&'static str],
}

impl ComponentSpec {
    /// A family with no modifiers, elements or tag restriction.
    #[must_use]
    pub const fn new(base_class: &'static str) -> Self {
        Self {
            base_class,
            modifiers: &[],
            elements: &[],
            host_tags: &[],
            companions: &[],
        }
    }

    /// Sets the allowed modifier suffixes.
    #[must_use]
    pub const fn with_modifiers(self, modifiers: &'static [&'static str]) -> Self {
        Self { modifiers, ..self }
    }

    /// Sets the allowed element suffixes.
    #[must_use]
    pub const fn with_elements(self, elements: &'static [&'static str]) -> Self {
        Self { elements, ..self }
    }

    /// Sets the tags the base class may be placed on.
    #[must_use]
    pub const fn with_host_tags(self, host_tags: &'static [&'static str]) -> Self {
        Self { host_tags, ..self }
    }

    /// Sets the companion classes.
    #[must_use]
    pub const fn with_companions(self, companions: &'static [&'static str]) -> Self {
        Self { companions, ..self }
    }

    /// `base--`.
    #[must_use]
    pub fn modifier_prefix(&self) -> String {
        format!("{}{MODIFIER_SEPARATOR}", self.base_class)
    }

    /// `base__`.
    #[must_use]
    pub fn element_prefix(&self) -> String {
        format!("{}{ELEMENT_SEPARATOR}", self.base_class)
    }

    /// Full class name for a modifier suffix.
    #[must_use]
    pub fn modifier(&self, suffix: &str) -> String {
        format!("{}{MODIFIER_SEPARATOR}{suffix}", self.base_class)
    }

    /// Full class name for an element suffix.
    #[must_use]
    pub fn element(&self, suffix: &str) -> String {
        format!("{}{ELEMENT_SEPARATOR}{suffix}", self.base_class)
    }

    /// The modifier suffix of `class`, if it is written `base--suffix`.
    #[must_use]
    pub fn modifier_suffix<'a>(&self, class: &'a str) -> Option<&'a str> {
        class
            .strip_prefix(self.base_class)?
            .strip_prefix(MODIFIER_SEPARATOR)
    }

    /// The element suffix of `class`, if it is written `base__suffix`.
    #[must_use]
    pub fn element_suffix<'a>(&self, class: &'a str) -> Option<&'a str> {
        class
            .strip_prefix(self.base_class)?
            .strip_prefix(ELEMENT_SEPARATOR)
    }

    /// True for `base--x`.
    #[must_use]
    pub fn is_modifier_class(&self, class: &str) -> bool {
        self.modifier_suffix(class).is_some()
    }

    /// True for `base__x`.
    #[must_use]
    pub fn is_element_class(&self, class: &str) -> bool {
        self.element_suffix(class).is_some()
    }

    /// True when `class` is a modifier in the allow-list.
    #[must_use]
    pub fn is_allowed_modifier(&self, class: &str) -> bool {
        self.modifier_suffix(class)
            .is_some_and(|suffix| self.modifiers.contains(&suffix))
    }

    /// True when `class` is an element in the allow-list.
    #[must_use]
    pub fn is_allowed_element(&self, class: &str) -> bool {
        self.element_suffix(class)
            .is_some_and(|suffix| self.elements.contains(&suffix))
    }

    /// True for a companion class.
    #[must_use]
    pub fn is_companion(&self, class: &str) -> bool {
        self.companions.contains(&class)
    }

    /// True when `class` is the base, a companion, an allowed modifier or
    /// an allowed element.
    #[must_use]
    pub fn is_allowed_class(&self, class: &str) -> bool {
        class == self.base_class
            || self.is_companion(class)
            || self.is_allowed_modifier(class)
            || self.is_allowed_element(class)
    }

    /// True when `class` belongs to this family: the base, a companion, or
    /// the base followed by either separator.
    #[must_use]
    pub fn owns(&self, class: &str) -> bool {
        class == self.base_class
            || self.is_companion(class)
            || self.is_modifier_class(class)
            || self.is_element_class(class)
    }

    /// True when `tag` may carry the base class.
    #[must_use]
    pub fn allows_host(&self, tag: &str) -> bool {
        self.host_tags.is_empty() || self.host_tags.contains(&tag)
    }
}

/// Structural facts about a class list relative to one base class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifierAnalysis {
    /// The base class itself is present.
    pub has_base: bool,
    /// Every `base--*` class, in order.
    pub modifiers: Vec<String>,
    /// Classes repeated in the list.
    pub duplicate_classes: Vec<String>,
    /// Classes that start with the base but use neither separator.
    pub invalid_prefixes: Vec<String>,
    /// Modifiers outside the allow-list.
    pub invalid_modifiers: Vec<String>,
}

/// Single pass over `classes` against `spec`.
///
/// A class that starts with the base string but is not the base either
/// starts with the modifier prefix (a modifier, possibly not allowed) or is
/// an invalid prefix.
#[must_use]
pub fn analyze_modifiers(spec: &ComponentSpec, classes: &[String]) -> ModifierAnalysis {
    let mut info = ModifierAnalysis {
        has_base: classes.iter().any(|class| class == spec.base_class),
        duplicate_classes: find_duplicate_classes(classes),
        ..ModifierAnalysis::default()
    };

    for class in classes {
        if !class.starts_with(spec.base_class)
            || class == spec.base_class
            || spec.is_companion(class)
        {
            continue;
        }
        if spec.is_modifier_class(class) {
            info.modifiers.push(class.clone());
            if !spec.is_allowed_modifier(class) {
                info.invalid_modifiers.push(class.clone());
            }
        } else {
            info.invalid_prefixes.push(class.clone());
        }
    }

    info
}

/// Tag name and resolved classes of an occurrence whose class list can be
/// trusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagClasses {
    /// Tag name as extracted.
    pub tag_name: String,
    /// Resolved class tokens in source order.
    pub classes: Vec<String>,
}

/// Reads the class list of an occurrence.
///
/// Returns `None` when the tag name is absent, the class attribute is
/// missing or empty, or the class value is dynamic.
#[must_use]
pub fn tag_classes(occurrence: &TagOccurrence) -> Option<TagClasses> {
    let tag_name = occurrence.tag()?;
    let value = occurrence.attributes.class_value();
    if value.is_empty() || is_dynamic(value) {
        return None;
    }
    Some(TagClasses {
        tag_name: tag_name.to_string(),
        classes: split_classes(value),
    })
}

/// Analysis record for single-modifier-family rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierTag {
    /// Tag name as extracted.
    pub tag_name: String,
    /// All resolved classes on the tag.
    pub classes: Vec<String>,
    /// Modifier facts for the family.
    pub info: ModifierAnalysis,
}

/// Builds a [`ModifierTag`] when the tag carries the base class or any
/// modifier of it.
#[must_use]
pub fn analyze_tag_with_modifiers(
    occurrence: &TagOccurrence,
    spec: &ComponentSpec,
) -> Option<ModifierTag> {
    let TagClasses { tag_name, classes } = tag_classes(occurrence)?;
    if !classes
        .iter()
        .any(|class| class == spec.base_class || spec.is_modifier_class(class))
    {
        return None;
    }
    let info = analyze_modifiers(spec, &classes);
    Some(ModifierTag {
        tag_name,
        classes,
        info,
    })
}

/// Analysis record for families validated against a closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyTag {
    /// Lower-cased tag name.
    pub tag_name: String,
    /// All resolved classes on the tag.
    pub classes: Vec<String>,
    /// Classes owned by the family, in order.
    pub family_classes: Vec<String>,
    /// Family classes outside the vocabulary.
    pub invalid_classes: Vec<String>,
    /// Family classes repeated on the tag.
    pub duplicate_classes: Vec<String>,
}

/// Shared view of analysis records that know a tag's family classes.
pub trait FamilyTag {
    /// Lower-cased tag name.
    fn tag_name(&self) -> &str;

    /// True when the tag carries the family class `class`.
    fn has(&self, class: &str) -> bool;

    /// True when the tag is one of `tags`.
    fn tag_is(&self, tags: &[&str]) -> bool {
        tags.contains(&self.tag_name())
    }
}

impl FamilyTag for VocabularyTag {
    fn tag_name(&self) -> &str {
        &self.tag_name
    }

    fn has(&self, class: &str) -> bool {
        self.family_classes.iter().any(|c| c == class)
    }
}

/// Builds a [`VocabularyTag`] when the tag carries any class owned by the
/// family.
#[must_use]
pub fn analyze_vocabulary(occurrence: &TagOccurrence, spec: &ComponentSpec) -> Option<VocabularyTag> {
    let TagClasses { tag_name, classes } = tag_classes(occurrence)?;
    let family_classes: Vec<String> = classes
        .iter()
        .filter(|class| spec.owns(class))
        .cloned()
        .collect();
    if family_classes.is_empty() {
        return None;
    }
    let invalid_classes = family_classes
        .iter()
        .filter(|class| !spec.is_allowed_class(class))
        .cloned()
        .collect();
    let duplicate_classes = find_duplicate_classes(&family_classes);
    Some(VocabularyTag {
        tag_name: tag_name.to_lowercase(),
        classes,
        family_classes,
        invalid_classes,
        duplicate_classes,
    })
}

/// Analysis record for families with both modifiers and elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementTag {
    /// Family classes and vocabulary facts.
    pub vocabulary: VocabularyTag,
    /// Modifier facts over the family classes that are not elements.
    pub info: ModifierAnalysis,
    /// `base__*` classes outside the element list.
    pub invalid_elements: Vec<String>,
}

impl FamilyTag for ElementTag {
    fn tag_name(&self) -> &str {
        &self.vocabulary.tag_name
    }

    fn has(&self, class: &str) -> bool {
        self.vocabulary.has(class)
    }
}

/// Builds an [`ElementTag`] when the tag carries any class owned by the
/// family. Element classes never reach the modifier analysis, so
/// `base__x--y` is judged as an element only.
#[must_use]
pub fn analyze_elements(occurrence: &TagOccurrence, spec: &ComponentSpec) -> Option<ElementTag> {
    let vocabulary = analyze_vocabulary(occurrence, spec)?;
    let (elements, others): (Vec<String>, Vec<String>) = vocabulary
        .family_classes
        .iter()
        .cloned()
        .partition(|class| spec.is_element_class(class));
    let invalid_elements = elements
        .into_iter()
        .filter(|class| !spec.is_allowed_element(class))
        .collect();
    Some(ElementTag {
        info: analyze_modifiers(spec, &others),
        invalid_elements,
        vocabulary,
    })
}

/// Whether an icon-only control has an accessible name.
///
/// A dynamic `aria-label` or `aria-labelledby` counts as labelled. The
/// check fails when both are absent or both are empty.
#[must_use]
pub fn has_icon_label(attrs: &AttributeMap) -> bool {
    if attrs.is_dynamic("aria-label") || attrs.is_dynamic("aria-labelledby") {
        return true;
    }
    let label = attrs.get("aria-label").unwrap_or("");
    let labelled_by = attrs.get("aria-labelledby").unwrap_or("");
    !(label.is_empty() && labelled_by.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Location;
    use std::path::PathBuf;

    const CONTAINER: ComponentSpec =
        ComponentSpec::new("cdr-container").with_modifiers(&["static", "fluid"]);

    fn classes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    fn occurrence(tag: &str, attrs: &[(&str, &str)]) -> TagOccurrence {
        TagOccurrence::new(
            tag,
            attrs.iter().copied().collect(),
            Location::new(PathBuf::from("t.html"), 1, 1),
        )
    }

    #[test]
    fn split_resolves_aliases_and_drops_blanks() {
        assert_eq!(
            split_classes("  btn   btn--pri\tcustom \n"),
            classes(&["cdr-button", "cdr-button--primary", "custom"])
        );
        assert!(split_classes("   ").is_empty());
    }

    #[test]
    fn duplicates_reported_once_in_first_duplicate_order() {
        let list = classes(&[
            "cdr-button",
            "b",
            "cdr-button--primary",
            "b",
            "cdr-button--primary",
            "cdr-button--primary",
            "cdr-button--primary",
        ]);
        assert_eq!(
            find_duplicate_classes(&list),
            classes(&["b", "cdr-button--primary"])
        );
    }

    #[test]
    fn container_with_one_modifier_is_clean() {
        for modifier in ["cdr-container--static", "cdr-container--fluid"] {
            let info = analyze_modifiers(&CONTAINER, &classes(&["cdr-container", modifier]));
            assert!(info.has_base);
            assert_eq!(info.modifiers, classes(&[modifier]));
            assert!(info.invalid_modifiers.is_empty());
            assert!(info.invalid_prefixes.is_empty());
            assert!(info.duplicate_classes.is_empty());
        }
    }

    #[test]
    fn modifier_without_base_is_not_invalid() {
        let info = analyze_modifiers(&CONTAINER, &classes(&["cdr-container--fluid"]));
        assert!(!info.has_base);
        assert_eq!(info.modifiers, classes(&["cdr-container--fluid"]));
        assert!(info.invalid_modifiers.is_empty());
    }

    #[test]
    fn separator_misuse_is_an_invalid_prefix() {
        let info = analyze_modifiers(
            &CONTAINER,
            &classes(&["cdr-container", "cdr-container-fluid", "cdr-containerfluid"]),
        );
        assert_eq!(
            info.invalid_prefixes,
            classes(&["cdr-container-fluid", "cdr-containerfluid"])
        );
        assert!(info.modifiers.is_empty());
    }

    #[test]
    fn unknown_modifier_is_recorded_twice() {
        let info = analyze_modifiers(&CONTAINER, &classes(&["cdr-container", "cdr-container--wide"]));
        assert_eq!(info.modifiers, classes(&["cdr-container--wide"]));
        assert_eq!(info.invalid_modifiers, classes(&["cdr-container--wide"]));
    }

    #[test]
    fn analysis_is_skipped_for_dynamic_or_missing_classes() {
        assert!(analyze_tag_with_modifiers(&occurrence("div", &[]), &CONTAINER).is_none());
        assert!(analyze_tag_with_modifiers(&occurrence("div", &[("class", "")]), &CONTAINER).is_none());
        for value in [
            "cdr-container __EXPR__",
            "cdr-container ${x}",
            "cdr-container {{x}}",
        ] {
            let occ = occurrence("div", &[("class", value)]);
            assert!(analyze_tag_with_modifiers(&occ, &CONTAINER).is_none(), "{value}");
            assert!(analyze_vocabulary(&occ, &CONTAINER).is_none(), "{value}");
        }
        let nameless = occurrence("", &[("class", "cdr-container")]);
        assert!(analyze_tag_with_modifiers(&nameless, &CONTAINER).is_none());
    }

    #[test]
    fn analysis_requires_base_or_modifier() {
        let occ = occurrence("div", &[("class", "cdr-containerx other")]);
        assert!(analyze_tag_with_modifiers(&occ, &CONTAINER).is_none());

        let occ = occurrence("div", &[("class", "cont--stat")]);
        let tag = analyze_tag_with_modifiers(&occ, &CONTAINER).expect("relevant");
        assert_eq!(tag.info.modifiers, classes(&["cdr-container--static"]));
    }

    #[test]
    fn vocabulary_flags_unknown_family_classes() {
        const CAPTION: ComponentSpec =
            ComponentSpec::new("cdr-caption").with_elements(&["summary", "cite"]);
        let occ = occurrence(
            "P",
            &[("class", "cdr-caption__summary cdr-caption__title cdr-caption--x cdr-captionx")],
        );
        let tag = analyze_vocabulary(&occ, &CAPTION).expect("relevant");
        assert_eq!(tag.tag_name, "p");
        assert_eq!(
            tag.family_classes,
            classes(&["cdr-caption__summary", "cdr-caption__title", "cdr-caption--x"])
        );
        assert_eq!(
            tag.invalid_classes,
            classes(&["cdr-caption__title", "cdr-caption--x"])
        );
        assert!(tag.has("cdr-caption__summary"));
    }

    #[test]
    fn companions_belong_to_the_family() {
        const INPUT: ComponentSpec = ComponentSpec::new("cdr-input")
            .with_elements(&["button"])
            .with_companions(&["cdr-input-wrap"]);
        let occ = occurrence("DIV", &[("class", "cdr-input-wrap cdr-input-wrapper")]);
        let tag = analyze_vocabulary(&occ, &INPUT).expect("relevant");
        assert_eq!(tag.family_classes, classes(&["cdr-input-wrap"]));
        assert!(tag.invalid_classes.is_empty());
        assert!(tag.tag_is(&["div"]));

        let info = analyze_modifiers(&INPUT, &classes(&["cdr-input", "cdr-input-wrap"]));
        assert!(info.invalid_prefixes.is_empty());
    }

    #[test]
    fn elements_are_kept_out_of_modifier_analysis() {
        const QUOTE: ComponentSpec = ComponentSpec::new("cdr-quote")
            .with_modifiers(&["pull"])
            .with_elements(&["summary", "citation"]);
        let occ = occurrence(
            "blockquote",
            &[("class", "cdr-quote cdr-quote--pull cdr-quote__summary--x cdr-quote__byline")],
        );
        let tag = analyze_elements(&occ, &QUOTE).expect("relevant");
        assert!(tag.info.has_base);
        assert_eq!(tag.info.modifiers, classes(&["cdr-quote--pull"]));
        assert!(tag.info.invalid_modifiers.is_empty());
        assert_eq!(
            tag.invalid_elements,
            classes(&["cdr-quote__summary--x", "cdr-quote__byline"])
        );
        assert!(tag.has("cdr-quote--pull"));
    }

    #[test]
    fn icon_label_rules() {
        let attrs = |pairs: &[(&str, &str)]| pairs.iter().copied().collect::<AttributeMap>();
        assert!(!has_icon_label(&attrs(&[])));
        assert!(!has_icon_label(&attrs(&[("aria-label", "")])));
        assert!(!has_icon_label(&attrs(&[("aria-label", ""), ("aria-labelledby", "")])));
        assert!(has_icon_label(&attrs(&[("aria-label", "Close")])));
        assert!(has_icon_label(&attrs(&[("aria-labelledby", "title-id")])));
        assert!(has_icon_label(&attrs(&[("aria-label", "__EXPR__")])));
        assert!(has_icon_label(&attrs(&[("aria-labelledby", "{{ id }}")])));
    }
}
