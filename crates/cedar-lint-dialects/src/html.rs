//! Raw markup dialect for `.html` and `.htm` files.

use cedar_lint_core::{has_suffix, AttributeMap, FileContext, SourceDialect, TagOccurrence};
use std::path::Path;
use tree_sitter::{Language, Node};

use crate::syntax::{child_of_kind, for_each_node, parse, text};

/// Reads every start tag of an HTML document.
pub struct HtmlDialect {
    language: Language,
}

impl HtmlDialect {
    /// Creates a new HTML dialect.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_html::LANGUAGE.into(),
        }
    }
}

impl Default for HtmlDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceDialect for HtmlDialect {
    fn id(&self) -> &'static str {
        "html"
    }

    fn applies_to(&self, path: &Path) -> bool {
        has_suffix(path, &[".html", ".htm"])
    }

    fn extract(&self, ctx: &FileContext) -> Vec<TagOccurrence> {
        let Some(tree) = parse(&self.language, ctx.content) else {
            tracing::debug!("no parse tree for {}", ctx.relative_path.display());
            return Vec::new();
        };

        let mut found = Vec::new();
        for_each_node(tree.root_node(), |node| {
            if !is_opening(&node) {
                return;
            }
            let tag_name = opening_tag_name(&node, ctx.content).to_lowercase();
            let attributes: AttributeMap = opening_attributes(&node, ctx.content)
                .into_iter()
                .map(|(name, value)| (name, value.unwrap_or("")))
                .collect();
            found.push(TagOccurrence::new(
                tag_name,
                attributes,
                ctx.location_at(node.start_byte(), node.end_byte() - node.start_byte()),
            ));
        });
        found
    }
}

/// True for `start_tag` and `self_closing_tag` nodes.
pub(crate) fn is_opening(node: &Node<'_>) -> bool {
    matches!(node.kind(), "start_tag" | "self_closing_tag")
}

/// Tag name of an opening as written, or `""`.
pub(crate) fn opening_tag_name<'a>(opening: &Node<'_>, src: &'a str) -> &'a str {
    child_of_kind(opening, "tag_name").map_or("", |n| text(&n, src))
}

/// Attribute names and raw values of an opening, in source order.
/// Valueless attributes carry `None`; `attr=""` carries `Some("")`.
pub(crate) fn opening_attributes<'a>(
    opening: &Node<'_>,
    src: &'a str,
) -> Vec<(&'a str, Option<&'a str>)> {
    let mut cursor = opening.walk();
    opening
        .named_children(&mut cursor)
        .filter(|child| child.kind() == "attribute")
        .filter_map(|attribute| {
            let name = child_of_kind(&attribute, "attribute_name")?;
            let value = if let Some(value) = child_of_kind(&attribute, "attribute_value") {
                Some(text(&value, src))
            } else {
                child_of_kind(&attribute, "quoted_attribute_value").map(|quoted| {
                    child_of_kind(&quoted, "attribute_value").map_or("", |v| text(&v, src))
                })
            };
            Some((text(&name, src), value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(source: &str) -> Vec<TagOccurrence> {
        let ctx = FileContext::new(Path::new("/web/page.html"), source, Path::new("/web"));
        HtmlDialect::new().extract(&ctx)
    }

    #[test]
    fn reads_tags_and_attributes() {
        let tags = extract(
            "<DIV Class=\"cdr-container cdr-container--static\">\n  <img src=a.png alt>\n</DIV>",
        );
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].tag_name, "div");
        assert_eq!(
            tags[0].attributes.class_value(),
            "cdr-container cdr-container--static"
        );
        assert_eq!(tags[1].tag_name, "img");
        assert_eq!(tags[1].attributes.get("src"), Some("a.png"));
        assert_eq!(tags[1].attributes.get("alt"), Some(""));
    }

    #[test]
    fn locations_point_at_the_opening() {
        let tags = extract("<p>\n  <span class='cdr-kicker'></span>\n</p>");
        let span = &tags[1];
        assert_eq!((span.location.line, span.location.column), (2, 3));
        assert_eq!(span.location.file, Path::new("page.html"));
        assert_eq!(span.attributes.get("class"), Some("cdr-kicker"));
    }

    #[test]
    fn empty_quoted_value_is_empty() {
        let tags = extract("<a href=\"\" class=\"cdr-link\">x</a>");
        assert_eq!(tags[0].attributes.get("href"), Some(""));
    }

    #[test]
    fn applies_to_html_only() {
        let dialect = HtmlDialect::new();
        assert!(dialect.applies_to(Path::new("index.HTML")));
        assert!(dialect.applies_to(Path::new("legacy.htm")));
        assert!(!dialect.applies_to(Path::new("App.vue")));
    }

    #[test]
    fn malformed_markup_does_not_fail() {
        let tags = extract("<div class=\"cdr-title\"<<>>>");
        assert!(tags.iter().all(|t| t.tag_name != "title"));
    }
}
