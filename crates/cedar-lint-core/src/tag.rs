//! Tag occurrences and attribute maps produced by dialect adapters.
//!
//! Every dialect, whatever its syntax, reduces an element to the same
//! [`TagOccurrence`]: a tag name, a lower-cased [`AttributeMap`], and the
//! [`Location`] diagnostics should point at.

use crate::types::Location;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Placeholder written in place of any value that is not statically known.
pub const DYNAMIC: &str = "__EXPR__";

/// Returns true when `value` carries one of the dynamic-value signals:
/// the [`DYNAMIC`] sentinel, a `${` interpolation, or a `{{` mustache.
#[must_use]
pub fn is_dynamic(value: &str) -> bool {
    value.contains(DYNAMIC) || value.contains("${") || value.contains("{{")
}

/// Attribute name to value mapping for one tag.
///
/// Names are lower-cased on insertion. Valueless attributes map to `""`;
/// values that cannot be determined statically map to [`DYNAMIC`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    entries: BTreeMap<String, String>,
}

impl AttributeMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an attribute, lower-casing its name. A later insert for the
    /// same name replaces the earlier value.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.entries.insert(name.to_lowercase(), value.into());
    }

    /// Returns the value of an attribute.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Returns true if the attribute is present, even when empty.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns true if the attribute is present and dynamic.
    #[must_use]
    pub fn is_dynamic(&self, name: &str) -> bool {
        self.get(name).is_some_and(is_dynamic)
    }

    /// The class list source: `class`, else `classname`, else `""`.
    #[must_use]
    pub fn class_value(&self) -> &str {
        self.get("class")
            .or_else(|| self.get("classname"))
            .unwrap_or("")
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no attributes were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<N: AsRef<str>, V: Into<String>> FromIterator<(N, V)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert(name.as_ref(), value);
        }
        map
    }
}

/// One element found in a source unit.
#[derive(Debug, Clone)]
pub struct TagOccurrence {
    /// Tag name as written (HTML dialects lower-case it). Empty when the
    /// adapter could not recover one.
    pub tag_name: String,
    /// Attributes of the opening tag.
    pub attributes: AttributeMap,
    /// Where diagnostics for this element are reported.
    pub location: Location,
    /// Literal text the tag was scanned from, for embedded-literal
    /// occurrences only.
    pub fragment: Option<Arc<str>>,
}

impl TagOccurrence {
    /// Creates an occurrence from a parsed element.
    #[must_use]
    pub fn new(tag_name: impl Into<String>, attributes: AttributeMap, location: Location) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes,
            location,
            fragment: None,
        }
    }

    /// Marks the occurrence as scanned out of a literal.
    #[must_use]
    pub fn with_fragment(mut self, fragment: Arc<str>) -> Self {
        self.fragment = Some(fragment);
        self
    }

    /// The tag name, or `None` when it is empty.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        if self.tag_name.is_empty() {
            None
        } else {
            Some(&self.tag_name)
        }
    }

    /// Whether a rule gated on `terms` should see this occurrence.
    ///
    /// Occurrences from parsed markup always pass. Literal occurrences pass
    /// only when the literal mentions one of the terms.
    #[must_use]
    pub fn passes_text_gate(&self, terms: &[&str]) -> bool {
        match &self.fragment {
            None => true,
            Some(text) => terms.iter().any(|term| text.contains(term)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn loc() -> Location {
        Location::new(PathBuf::from("a.html"), 1, 1)
    }

    #[test]
    fn dynamic_signals() {
        assert!(is_dynamic("__EXPR__"));
        assert!(is_dynamic("cdr-button ${size}"));
        assert!(is_dynamic("{{ cls }}"));
        assert!(!is_dynamic("cdr-button cdr-button--primary"));
        assert!(!is_dynamic("$ {not} { {a} }"));
    }

    #[test]
    fn attribute_names_are_lowercased() {
        let mut attrs = AttributeMap::new();
        attrs.insert("ClassName", "cdr-link");
        attrs.insert("ARIA-Label", "Close");
        assert_eq!(attrs.get("classname"), Some("cdr-link"));
        assert_eq!(attrs.get("aria-label"), Some("Close"));
        assert_eq!(attrs.class_value(), "cdr-link");
    }

    #[test]
    fn class_preferred_over_classname() {
        let attrs: AttributeMap = [("className", "b"), ("class", "a")].into_iter().collect();
        assert_eq!(attrs.class_value(), "a");
    }

    #[test]
    fn missing_class_is_empty() {
        let attrs: AttributeMap = [("id", "x")].into_iter().collect();
        assert_eq!(attrs.class_value(), "");
        assert!(!attrs.contains("class"));
    }

    #[test]
    fn empty_tag_name_is_absent() {
        let occ = TagOccurrence::new("", AttributeMap::new(), loc());
        assert_eq!(occ.tag(), None);
        let occ = TagOccurrence::new("div", AttributeMap::new(), loc());
        assert_eq!(occ.tag(), Some("div"));
    }

    #[test]
    fn text_gate_only_applies_to_fragments() {
        let parsed = TagOccurrence::new("div", AttributeMap::new(), loc());
        assert!(parsed.passes_text_gate(&["cdr-container"]));

        let literal = parsed.with_fragment(Arc::from("<div class=\"cont\"></div>"));
        assert!(literal.passes_text_gate(&["cdr-container", "cont"]));
        assert!(!literal.passes_text_gate(&["cdr-button", "btn"]));
    }
}
