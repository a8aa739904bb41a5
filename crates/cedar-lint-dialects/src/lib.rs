//! # cedar-lint-dialects
//!
//! Tree-sitter powered markup dialects for cedar-lint.
//!
//! Each dialect implements [`SourceDialect`] from `cedar-lint-core` and
//! reduces a source unit to tag occurrences:
//!
//! - [`HtmlDialect`] for `.html` / `.htm` files
//! - [`JsxDialect`] for JSX in `.jsx`, `.js`, `.mjs` and `.tsx` files
//! - [`VueDialect`] for the `<template>` block of `.vue` files
//! - [`StoryDialect`] for markup in string literals of story files, read
//!   with the regex [`tokenizer`]

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod html;
pub mod jsx;
pub mod story;
mod syntax;
pub mod tokenizer;
pub mod vue;

pub use cedar_lint_core::{DialectBox, SourceDialect};
pub use html::HtmlDialect;
pub use jsx::JsxDialect;
pub use story::StoryDialect;
pub use vue::VueDialect;

/// Every built-in dialect, in dispatch order.
#[must_use]
pub fn all() -> Vec<DialectBox> {
    vec![
        Box::new(HtmlDialect::new()),
        Box::new(JsxDialect::new()),
        Box::new(VueDialect::new()),
        Box::new(StoryDialect::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn every_supported_extension_is_claimed() {
        let dialects = all();
        for file in [
            "a.html",
            "a.htm",
            "a.jsx",
            "a.js",
            "a.mjs",
            "a.tsx",
            "a.vue",
            "a.stories.ts",
            "a.stories.js",
        ] {
            assert!(
                cedar_lint_core::is_claimed(&dialects, Path::new(file)),
                "{file} should be claimed"
            );
        }
        assert!(!cedar_lint_core::is_claimed(&dialects, Path::new("a.ts")));
        assert!(!cedar_lint_core::is_claimed(&dialects, Path::new("a.css")));
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<&str> = all().iter().map(|d| d.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }
}
