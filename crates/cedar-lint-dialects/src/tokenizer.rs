//! Regex tag tokenizer for markup held in string literals.
//!
//! Literals in story files are short HTML snippets, so two regular
//! expressions are enough: one finds `<tag ...>` openings, the other reads
//! `name="value"`, `name='value'`, bare `name=value` and valueless `name`
//! attributes out of each opening. Closing tags never match because `/` is
//! not a tag name character.

use cedar_lint_core::AttributeMap;
use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<\s*([a-zA-Z0-9-]+)\b[^>]*>").expect("tag pattern is valid")
});

#[allow(clippy::expect_used)]
static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s=/>]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>]+)))?"#)
        .expect("attribute pattern is valid")
});

/// One tag opening found in literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedTag {
    /// Lower-cased tag name.
    pub tag_name: String,
    /// Attributes read from the opening.
    pub attributes: AttributeMap,
    /// Byte offset of the `<` within the scanned text.
    pub offset: usize,
}

/// Finds every tag opening in `text`.
#[must_use]
pub fn scan_tags(text: &str) -> Vec<ScannedTag> {
    TAG_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?;
            let attr_source = &text[name.end()..whole.end()];
            Some(ScannedTag {
                tag_name: name.as_str().to_lowercase(),
                attributes: parse_attributes(attr_source),
                offset: whole.start(),
            })
        })
        .collect()
}

/// Reads attributes from the part of a tag opening after its name.
///
/// A repeated attribute keeps its last value.
#[must_use]
pub fn parse_attributes(source: &str) -> AttributeMap {
    ATTR_RE
        .captures_iter(source)
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str();
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map_or("", |m| m.as_str());
            Some((name, value))
        })
        .collect()
}
