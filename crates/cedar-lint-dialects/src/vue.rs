//! Template directive dialect for `.vue` single-file components.
//!
//! Only the top-level `<template>` block is read. Static attributes are taken
//! as written. `:name` and `v-bind:name` bindings become attribute `name`,
//! with the literal value when the bound expression is a single quoted
//! string and [`DYNAMIC`] otherwise. Other directives are skipped.

use cedar_lint_core::{has_suffix, AttributeMap, FileContext, SourceDialect, TagOccurrence, DYNAMIC};
use std::path::Path;
use tree_sitter::{Language, Node};

use crate::html::{is_opening, opening_attributes, opening_tag_name};
use crate::syntax::{child_of_kind, for_each_node, parse, text};

/// Reads the template block of a single-file component.
pub struct VueDialect {
    language: Language,
}

impl VueDialect {
    /// Creates a new template dialect.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_html::LANGUAGE.into(),
        }
    }
}

impl Default for VueDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceDialect for VueDialect {
    fn id(&self) -> &'static str {
        "vue"
    }

    fn applies_to(&self, path: &Path) -> bool {
        has_suffix(path, &[".vue"])
    }

    fn extract(&self, ctx: &FileContext) -> Vec<TagOccurrence> {
        let Some(tree) = parse(&self.language, ctx.content) else {
            tracing::debug!("no parse tree for {}", ctx.relative_path.display());
            return Vec::new();
        };
        let Some(template) = template_block(tree.root_node(), ctx.content) else {
            tracing::debug!("no <template> block in {}", ctx.relative_path.display());
            return Vec::new();
        };

        let own_start = child_of_kind(&template, "start_tag").map(|n| n.id());
        let mut found = Vec::new();
        for_each_node(template, |node| {
            if !is_opening(&node) || Some(node.id()) == own_start {
                return;
            }
            found.push(TagOccurrence::new(
                opening_tag_name(&node, ctx.content),
                template_attributes(&node, ctx.content),
                ctx.location_at(node.start_byte(), node.end_byte() - node.start_byte()),
            ));
        });
        found
    }
}

fn template_block<'t>(root: Node<'t>, src: &str) -> Option<Node<'t>> {
    let mut cursor = root.walk();
    let block = root.named_children(&mut cursor).find(|node| {
        node.kind() == "element"
            && child_of_kind(node, "start_tag")
                .is_some_and(|start| opening_tag_name(&start, src).eq_ignore_ascii_case("template"))
    });
    block
}

fn template_attributes(opening: &Node<'_>, src: &str) -> AttributeMap {
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (raw_name, value) in opening_attributes(opening, src) {
        let (name, value) = match bound_name(raw_name) {
            Some(name) => (name, bound_value(value.unwrap_or(""))),
            None if is_directive(raw_name) => continue,
            None => (raw_name, value.unwrap_or("").to_string()),
        };
        merge_attribute(&mut pairs, name, value);
    }
    pairs.into_iter().collect()
}

/// `:class` and `v-bind:class` both bind `class`.
fn bound_name(raw: &str) -> Option<&str> {
    raw.strip_prefix("v-bind:")
        .or_else(|| raw.strip_prefix(':'))
        .filter(|name| !name.is_empty())
}

fn is_directive(raw: &str) -> bool {
    raw.starts_with("v-") || raw.starts_with('@') || raw.starts_with('#')
}

/// Literal value of a single quoted JavaScript string, else [`DYNAMIC`].
fn bound_value(expression: &str) -> String {
    let trimmed = expression.trim();
    let mut chars = trimmed.chars();
    let (Some(open), Some(close)) = (chars.next(), chars.next_back()) else {
        return DYNAMIC.to_string();
    };
    if !matches!(open, '\'' | '"' | '`') || open != close {
        return DYNAMIC.to_string();
    }
    let body = &trimmed[1..trimmed.len() - 1];
    if body.contains(open) || body.contains('\\') || (open == '`' && body.contains("${")) {
        return DYNAMIC.to_string();
    }
    body.to_string()
}

/// A static `class` and a bound `class` render together; a dynamic part
/// makes the whole list dynamic. Any other repeated name keeps the last
/// value.
fn merge_attribute(pairs: &mut Vec<(String, String)>, name: &str, value: String) {
    let key = name.to_lowercase();
    match pairs.iter_mut().find(|(existing, _)| *existing == key) {
        Some((_, current)) if key == "class" => {
            *current = if current.as_str() == DYNAMIC || value == DYNAMIC {
                DYNAMIC.to_string()
            } else {
                format!("{current} {value}")
            };
        }
        Some((_, current)) => *current = value,
        None => pairs.push((key, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(source: &str) -> Vec<TagOccurrence> {
        let ctx = FileContext::new(Path::new("Card.vue"), source, Path::new(""));
        VueDialect::new().extract(&ctx)
    }

    #[test]
    fn reads_only_the_template_block() {
        let tags = extract(
            "<template>\n  <div class=\"cdr-container\"><CdrButton /></div>\n</template>\n<script>\nconst x = '<p class=\"cdr-title\">';\n</script>\n",
        );
        let names: Vec<&str> = tags.iter().map(|t| t.tag_name.as_str()).collect();
        assert_eq!(names, vec!["div", "CdrButton"]);
        assert_eq!(tags[0].location.line, 2);
    }

    #[test]
    fn literal_bindings_are_static() {
        let tags = extract("<template><a :href=\"'#top'\" v-bind:target='\"_blank\"'>x</a></template>");
        assert_eq!(tags[0].attributes.get("href"), Some("#top"));
        assert_eq!(tags[0].attributes.get("target"), Some("_blank"));
    }

    #[test]
    fn expression_bindings_are_dynamic() {
        let tags = extract("<template><div class=\"cdr-container\" :class=\"{ active }\"></div></template>");
        assert!(tags[0].attributes.is_dynamic("class"));
    }

    #[test]
    fn static_and_literal_class_bindings_merge() {
        let tags = extract(
            "<template><div class=\"cdr-container\" :class=\"'cdr-container--fluid'\"></div></template>",
        );
        assert_eq!(
            tags[0].attributes.class_value(),
            "cdr-container cdr-container--fluid"
        );
    }

    #[test]
    fn other_directives_are_skipped() {
        let tags = extract(
            "<template><button v-if=\"ok\" @click=\"go\" #default disabled type=\"button\">x</button></template>",
        );
        let attrs = &tags[0].attributes;
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("disabled"), Some(""));
        assert_eq!(attrs.get("type"), Some("button"));
    }

    #[test]
    fn missing_template_yields_nothing() {
        assert!(extract("<script setup>\nconst a = 1\n</script>\n").is_empty());
    }

    #[test]
    fn bound_value_edge_cases() {
        assert_eq!(bound_value(" 'a b' "), "a b");
        assert_eq!(bound_value("`plain`"), "plain");
        assert_eq!(bound_value("`a ${b}`"), DYNAMIC);
        assert_eq!(bound_value("'a' + b"), DYNAMIC);
        assert_eq!(bound_value("'"), DYNAMIC);
        assert_eq!(bound_value(""), DYNAMIC);
    }
}
