//! Source dialect abstraction.
//!
//! A dialect knows which files it understands and how to reduce one of them
//! to [`TagOccurrence`]s. The analyzer tries every registered dialect on
//! each file, so a single file may be read by more than one.

use crate::context::FileContext;
use crate::tag::TagOccurrence;
use std::path::Path;

/// Extracts tag occurrences from one kind of source unit.
///
/// Extraction is permissive: input a dialect cannot parse yields no
/// occurrences rather than an error.
pub trait SourceDialect: Send + Sync {
    /// Short identifier (e.g., "html", "jsx").
    fn id(&self) -> &'static str;

    /// Whether this dialect reads the file at `path`.
    fn applies_to(&self, path: &Path) -> bool;

    /// Extracts every tag occurrence in the unit.
    fn extract(&self, ctx: &FileContext) -> Vec<TagOccurrence>;
}

/// Type alias for boxed `SourceDialect` trait objects.
pub type DialectBox = Box<dyn SourceDialect>;

/// Case-insensitive file name suffix test (e.g. `".stories.ts"`).
#[must_use]
pub fn has_suffix(path: &Path, suffixes: &[&str]) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy().to_lowercase();
    suffixes.iter().any(|suffix| name.ends_with(suffix))
}

/// True when any dialect claims the file.
#[must_use]
pub fn is_claimed(dialects: &[DialectBox], path: &Path) -> bool {
    dialects.iter().any(|d| d.applies_to(path))
}

/// Runs every applicable dialect over the unit, in registration order.
#[must_use]
pub fn extract_all(dialects: &[DialectBox], ctx: &FileContext) -> Vec<TagOccurrence> {
    dialects
        .iter()
        .filter(|d| d.applies_to(ctx.path))
        .flat_map(|d| {
            let found = d.extract(ctx);
            tracing::debug!(
                dialect = d.id(),
                file = %ctx.relative_path.display(),
                occurrences = found.len(),
                "extracted tags"
            );
            found
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::AttributeMap;

    struct FixedDialect {
        id: &'static str,
        suffix: &'static str,
    }

    impl SourceDialect for FixedDialect {
        fn id(&self) -> &'static str {
            self.id
        }
        fn applies_to(&self, path: &Path) -> bool {
            has_suffix(path, &[self.suffix])
        }
        fn extract(&self, ctx: &FileContext) -> Vec<TagOccurrence> {
            vec![TagOccurrence::new(
                self.id,
                AttributeMap::new(),
                ctx.location_at(0, 0),
            )]
        }
    }

    fn dialects() -> Vec<DialectBox> {
        vec![
            Box::new(FixedDialect {
                id: "component",
                suffix: ".js",
            }),
            Box::new(FixedDialect {
                id: "literal",
                suffix: ".stories.js",
            }),
        ]
    }

    #[test]
    fn story_files_are_read_by_both_dialects() {
        let path = Path::new("Button.stories.js");
        let ctx = FileContext::new(path, "", Path::new(""));
        let tags: Vec<String> = extract_all(&dialects(), &ctx)
            .into_iter()
            .map(|o| o.tag_name)
            .collect();
        assert_eq!(tags, vec!["component", "literal"]);
    }

    #[test]
    fn unclaimed_files_are_skipped() {
        assert!(!is_claimed(&dialects(), Path::new("style.css")));
        assert!(is_claimed(&dialects(), Path::new("APP.JS")));
        assert!(!has_suffix(Path::new("/"), &[".js"]));
    }
}
