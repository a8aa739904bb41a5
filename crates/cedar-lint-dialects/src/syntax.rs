//! Tree-sitter helpers shared by the parsed dialects.

use tree_sitter::{Language, Node, Parser, Tree};

/// Parses `source`, or returns `None` when the grammar cannot be loaded
/// or parsing is abandoned.
pub(crate) fn parse(language: &Language, source: &str) -> Option<Tree> {
    let mut parser = Parser::new();
    if let Err(err) = parser.set_language(language) {
        tracing::debug!("failed to load grammar: {err}");
        return None;
    }
    parser.parse(source, None)
}

/// Source text of a node.
pub(crate) fn text<'a>(node: &Node<'_>, src: &'a str) -> &'a str {
    src.get(node.start_byte()..node.end_byte()).unwrap_or("")
}

/// First named child of `kind`.
pub(crate) fn child_of_kind<'t>(node: &Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.named_children(&mut cursor).find(|c| c.kind() == kind);
    found
}

/// Calls `visit` on `root` and every descendant in document order.
pub(crate) fn for_each_node<'t>(root: Node<'t>, mut visit: impl FnMut(Node<'t>)) {
    let mut cursor = root.walk();
    loop {
        visit(cursor.node());
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}

/// Resolves the common backslash escapes of a JavaScript string body.
pub(crate) fn unescape_js(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Text of a delimited node without its first and last character.
pub(crate) fn quoted_body<'a>(node: &Node<'_>, src: &'a str) -> &'a str {
    let raw = text(node, src);
    raw.get(1..raw.len().saturating_sub(1)).unwrap_or("")
}

/// Value of a JavaScript string node (`"x"`, `'x'`), escapes resolved.
pub(crate) fn string_literal(node: &Node<'_>, src: &str) -> String {
    unescape_js(quoted_body(node, src))
}
