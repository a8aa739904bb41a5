//! Component syntax dialect for JSX and TSX sources.

use cedar_lint_core::{has_suffix, AttributeMap, FileContext, SourceDialect, TagOccurrence, DYNAMIC};
use std::path::Path;
use tree_sitter::{Language, Node};

use crate::syntax::{for_each_node, parse, quoted_body, string_literal, text};

/// Reads JSX elements from `.jsx`, `.js`, `.mjs` and `.tsx` files.
///
/// Only elements named by a plain identifier are reported; member names
/// (`Foo.Bar`), namespaced names and fragments are skipped.
pub struct JsxDialect {
    javascript: Language,
    tsx: Language,
}

impl JsxDialect {
    /// Creates a new JSX dialect.
    #[must_use]
    pub fn new() -> Self {
        Self {
            javascript: tree_sitter_javascript::LANGUAGE.into(),
            tsx: tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

impl Default for JsxDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceDialect for JsxDialect {
    fn id(&self) -> &'static str {
        "jsx"
    }

    fn applies_to(&self, path: &Path) -> bool {
        has_suffix(path, &[".jsx", ".js", ".mjs", ".tsx"])
    }

    fn extract(&self, ctx: &FileContext) -> Vec<TagOccurrence> {
        let language = if ctx.has_suffix(&[".tsx"]) {
            &self.tsx
        } else {
            &self.javascript
        };
        let Some(tree) = parse(language, ctx.content) else {
            tracing::debug!("no parse tree for {}", ctx.relative_path.display());
            return Vec::new();
        };

        let mut found = Vec::new();
        for_each_node(tree.root_node(), |node| {
            let opening = match node.kind() {
                "jsx_element" => node.child_by_field_name("open_tag"),
                "jsx_self_closing_element" => Some(node),
                _ => None,
            };
            let Some(opening) = opening else {
                return;
            };
            let Some(name) = opening.child_by_field_name("name") else {
                return;
            };
            if name.kind() != "identifier" {
                return;
            }
            found.push(TagOccurrence::new(
                text(&name, ctx.content),
                jsx_attributes(&opening, ctx.content),
                ctx.location_at(node.start_byte(), opening.end_byte() - node.start_byte()),
            ));
        });
        found
    }
}

fn jsx_attributes(opening: &Node<'_>, src: &str) -> AttributeMap {
    let mut cursor = opening.walk();
    opening
        .named_children(&mut cursor)
        .filter(|child| child.kind() == "jsx_attribute")
        .filter_map(|attribute| {
            let mut inner = attribute.walk();
            let mut parts = attribute.named_children(&mut inner);
            let name = parts.next().filter(|n| n.kind() == "property_identifier")?;
            let value = parts.next().map_or_else(String::new, |v| attribute_value(&v, src));
            Some((text(&name, src), value))
        })
        .collect()
}

/// Static value of a JSX attribute value node, or [`DYNAMIC`].
fn attribute_value(value: &Node<'_>, src: &str) -> String {
    match value.kind() {
        "string" => quoted_body(value, src).to_string(),
        "jsx_expression" => {
            let mut cursor = value.walk();
            let mut inner = value
                .named_children(&mut cursor)
                .filter(|n| n.kind() != "comment");
            match (inner.next(), inner.next()) {
                (Some(expr), None) if expr.kind() == "string" => string_literal(&expr, src),
                (Some(expr), None) if expr.kind() == "template_string" => {
                    static_template(&expr, src).unwrap_or_else(|| DYNAMIC.to_string())
                }
                _ => DYNAMIC.to_string(),
            }
        }
        _ => DYNAMIC.to_string(),
    }
}

/// Raw text of a template literal without substitutions.
fn static_template(node: &Node<'_>, src: &str) -> Option<String> {
    let mut cursor = node.walk();
    let has_substitution = node
        .named_children(&mut cursor)
        .any(|n| n.kind() == "template_substitution");
    if has_substitution {
        return None;
    }
    Some(quoted_body(node, src).to_string())
}
