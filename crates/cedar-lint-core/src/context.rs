//! Context types for rule and dialect execution.

use crate::types::Location;
use std::path::{Path, PathBuf};

/// One source unit: a file path and its text.
///
/// Dialects read the text and use [`FileContext::location_at`] to turn
/// byte offsets into reportable locations; rules receive the same context
/// alongside the extracted occurrences.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Path relative to the project root, used in reported locations.
    pub relative_path: PathBuf,
    line_starts: Vec<usize>,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);
        let line_starts = std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        Self {
            path,
            content,
            relative_path,
            line_starts,
        }
    }

    /// File name component, lossily converted.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Returns true when the file name ends with any of `suffixes`
    /// (e.g. `".html"`, `".stories.ts"`), compared case-insensitively.
    #[must_use]
    pub fn has_suffix(&self, suffixes: &[&str]) -> bool {
        crate::dialect::has_suffix(self.path, suffixes)
    }

    /// 1-indexed line and column of a byte offset. Columns count bytes.
    #[must_use]
    pub fn position_at(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.content.len());
        let line_index = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        let line_start = self.line_starts.get(line_index).copied().unwrap_or(0);
        (line_index + 1, offset - line_start + 1)
    }

    /// Location of the byte span `offset..offset + length` in this file.
    #[must_use]
    pub fn location_at(&self, offset: usize, length: usize) -> Location {
        let (line, column) = self.position_at(offset);
        Location::new(self.relative_path.clone(), line, column).with_span(offset, length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(content: &str) -> FileContext<'_> {
        FileContext::new(Path::new("/proj/src/page.html"), content, Path::new("/proj"))
    }

    #[test]
    fn relative_path_strips_root() {
        assert_eq!(ctx("").relative_path, PathBuf::from("src/page.html"));
    }

    #[test]
    fn suffix_matching_is_case_insensitive() {
        let context = FileContext::new(Path::new("Button.Stories.TS"), "", Path::new("/"));
        assert!(context.has_suffix(&[".stories.ts"]));
        assert!(!context.has_suffix(&[".html", ".htm"]));
    }

    #[test]
    fn position_round_trips_offsets() {
        let context = ctx("line1\nline2\nline3");
        assert_eq!(context.position_at(0), (1, 1));
        assert_eq!(context.position_at(5), (1, 6));
        assert_eq!(context.position_at(6), (2, 1));
        assert_eq!(context.position_at(8), (2, 3));
        assert_eq!(context.position_at(999), (3, 6));
    }

    #[test]
    fn location_carries_span() {
        let location = ctx("<p>\n  <div class=\"x\">").location_at(6, 15);
        assert_eq!((location.line, location.column), (2, 3));
        assert_eq!((location.offset, location.length), (6, 15));
        assert_eq!(location.file, PathBuf::from("src/page.html"));
    }
}
