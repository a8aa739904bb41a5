//! Diagnostic collection for one tag occurrence.

use crate::classes::unique;
use crate::types::Location;
use std::collections::BTreeMap;

/// A finding before it is rendered into a [`Violation`](crate::Violation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Where the finding is reported.
    pub location: Location,
    /// Message id within the reporting rule.
    pub message_id: &'static str,
    /// Interpolation data for the message template.
    pub data: BTreeMap<String, String>,
}

/// Accumulates diagnostics for the occurrence a rule is currently checking.
#[derive(Debug)]
pub struct Reporter<'a> {
    location: &'a Location,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Reporter<'a> {
    /// Creates a reporter that places every diagnostic at `location`.
    #[must_use]
    pub fn new(location: &'a Location) -> Self {
        Self {
            location,
            diagnostics: Vec::new(),
        }
    }

    /// Reports `message_id` without data.
    pub fn report(&mut self, message_id: &'static str) {
        self.report_with(message_id, std::iter::empty::<(&str, String)>());
    }

    /// Reports `message_id` with interpolation data.
    pub fn report_with<K, V>(
        &mut self,
        message_id: &'static str,
        data: impl IntoIterator<Item = (K, V)>,
    ) where
        K: Into<String>,
        V: Into<String>,
    {
        self.diagnostics.push(Diagnostic {
            location: self.location.clone(),
            message_id,
            data: data
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        });
    }

    /// One diagnostic per item, each with `className` set to the item.
    pub fn report_classes(&mut self, message_id: &'static str, classes: &[String]) {
        for class in classes {
            self.report_with(message_id, [("className", class.as_str())]);
        }
    }

    /// Like [`Reporter::report_classes`] after order-preserving dedup.
    pub fn report_unique_classes(&mut self, message_id: &'static str, classes: &[String]) {
        self.report_classes(message_id, &unique(classes));
    }

    /// Diagnostics reported so far.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consumes the reporter.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn classes(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn report_uses_occurrence_location() {
        let location = Location::new(PathBuf::from("a.html"), 3, 7);
        let mut reporter = Reporter::new(&location);
        reporter.report("missingBase");
        let diagnostics = reporter.into_diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location, location);
        assert!(diagnostics[0].data.is_empty());
    }

    #[test]
    fn report_unique_classes_dedups_in_order() {
        let location = Location::new(PathBuf::from("a.html"), 1, 1);
        let mut reporter = Reporter::new(&location);
        reporter.report_unique_classes("invalidModifier", &classes(&["b", "a", "b"]));
        let names: Vec<&str> = reporter
            .diagnostics()
            .iter()
            .map(|d| d.data["className"].as_str())
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn report_with_collects_pairs() {
        let location = Location::new(PathBuf::from("a.html"), 1, 1);
        let mut reporter = Reporter::new(&location);
        reporter.report_with(
            "multipleModifier",
            [("modifierType", "ratio"), ("classList", "a, b")],
        );
        let data = &reporter.diagnostics()[0].data;
        assert_eq!(data["modifierType"], "ratio");
        assert_eq!(data["classList"], "a, b");
    }
}
