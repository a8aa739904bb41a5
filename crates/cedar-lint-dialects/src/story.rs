//! Embedded literal dialect for story sources.
//!
//! Story files build markup in plain strings and template literals. Each
//! literal is reduced to text (template substitutions become [`DYNAMIC`])
//! and scanned with the regex [`tokenizer`](crate::tokenizer). Every tag
//! found is reported at the literal it came from and carries the literal
//! text, so rules can skip literals that never mention their classes.

use cedar_lint_core::{has_suffix, FileContext, SourceDialect, TagOccurrence, DYNAMIC};
use std::path::Path;
use std::sync::Arc;
use tree_sitter::{Language, Node};

use crate::syntax::{for_each_node, parse, string_literal, text};
use crate::tokenizer::scan_tags;

/// Reads string and template literals in `.stories.ts` and `.stories.js`.
pub struct StoryDialect {
    typescript: Language,
    javascript: Language,
}

impl StoryDialect {
    /// Creates a new story literal dialect.
    #[must_use]
    pub fn new() -> Self {
        Self {
            typescript: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            javascript: tree_sitter_javascript::LANGUAGE.into(),
        }
    }
}

impl Default for StoryDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceDialect for StoryDialect {
    fn id(&self) -> &'static str {
        "story"
    }

    fn applies_to(&self, path: &Path) -> bool {
        has_suffix(path, &[".stories.ts", ".stories.js"])
    }

    fn extract(&self, ctx: &FileContext) -> Vec<TagOccurrence> {
        let language = if ctx.has_suffix(&[".stories.ts"]) {
            &self.typescript
        } else {
            &self.javascript
        };
        let Some(tree) = parse(language, ctx.content) else {
            tracing::debug!("no parse tree for {}", ctx.relative_path.display());
            return Vec::new();
        };

        let mut found = Vec::new();
        for_each_node(tree.root_node(), |node| {
            let literal = match node.kind() {
                "string" if !is_jsx_attribute_value(&node) => string_literal(&node, ctx.content),
                "template_string" => template_text(&node, ctx.content),
                _ => return,
            };
            if !literal.contains('<') {
                return;
            }

            let fragment: Arc<str> = Arc::from(literal.as_str());
            let location = ctx.location_at(node.start_byte(), node.end_byte() - node.start_byte());
            for tag in scan_tags(&literal) {
                found.push(
                    TagOccurrence::new(tag.tag_name, tag.attributes, location.clone())
                        .with_fragment(Arc::clone(&fragment)),
                );
            }
        });
        found
    }
}

fn is_jsx_attribute_value(node: &Node<'_>) -> bool {
    node.parent().is_some_and(|p| p.kind() == "jsx_attribute")
}

/// Static parts of a template literal joined by [`DYNAMIC`].
fn template_text(node: &Node<'_>, src: &str) -> String {
    let start = node.start_byte() + 1;
    let end = node.end_byte().saturating_sub(1).max(start);

    let mut out = String::new();
    let mut cursor_pos = start;
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() != "template_substitution" {
            continue;
        }
        out.push_str(src.get(cursor_pos..child.start_byte()).unwrap_or(""));
        out.push_str(DYNAMIC);
        cursor_pos = child.end_byte();
    }
    out.push_str(src.get(cursor_pos..end).unwrap_or(""));
    out
}
