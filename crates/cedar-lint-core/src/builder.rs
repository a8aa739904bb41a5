//! Builder for component rules.
//!
//! A component rule is two functions: an analyzer that turns a tag
//! occurrence into a typed record (or `None` when the tag is irrelevant or
//! cannot be trusted) and a checker that inspects the record and reports.
//! [`RuleDef`] wires both into a [`Rule`] that runs over the occurrences of
//! any dialect.
//!
//! ```
//! use cedar_lint_core::{classes, ComponentSpec, Rule, RuleDef};
//!
//! const KICKER: ComponentSpec = ComponentSpec::new("cdr-kicker");
//!
//! let rule = RuleDef::new("kicker-missing-base", "CDR0701")
//!     .base_class(KICKER.base_class)
//!     .describe("Require cdr-kicker when kicker modifiers are present.")
//!     .message("missingBase", "cdr-kicker modifiers require the base class.")
//!     .analyze(|occ| classes::analyze_tag_with_modifiers(occ, &KICKER))
//!     .check(|tag, _occ, report| {
//!         if !tag.info.has_base && !tag.info.modifiers.is_empty() {
//!             report.report("missingBase");
//!         }
//!     })
//!     .boxed();
//! assert_eq!(rule.code(), "CDR0701");
//! ```

use crate::aliases::base_class_aliases;
use crate::context::FileContext;
use crate::reporter::{Diagnostic, Reporter};
use crate::rule::{Rule, RuleBox, RuleMeta};
use crate::tag::TagOccurrence;
use crate::types::{Severity, Violation};

type AnalyzeFn<A> = Box<dyn Fn(&TagOccurrence) -> Option<A> + Send + Sync>;
type CheckFn<A> = Box<dyn Fn(&A, &TagOccurrence, &mut Reporter<'_>) + Send + Sync>;

/// Rule identity and metadata, before any behaviour is attached.
#[derive(Debug, Clone)]
pub struct RuleDef {
    name: &'static str,
    code: &'static str,
    severity: Severity,
    base_classes: Vec<&'static str>,
    meta: RuleMeta,
}

impl RuleDef {
    /// Starts a rule definition.
    #[must_use]
    pub fn new(name: &'static str, code: &'static str) -> Self {
        Self {
            name,
            code,
            severity: Severity::Error,
            base_classes: Vec::new(),
            meta: RuleMeta::new(""),
        }
    }

    /// Adds a base class the rule is about. Literal occurrences are only
    /// checked when their text mentions one of these or a base alias.
    #[must_use]
    pub fn base_class(mut self, base_class: &'static str) -> Self {
        self.base_classes.push(base_class);
        self
    }

    /// Sets the documentation string.
    #[must_use]
    pub fn describe(mut self, description: &'static str) -> Self {
        self.meta.description = description;
        self
    }

    /// Registers a message template.
    #[must_use]
    pub fn message(mut self, message_id: &'static str, template: &'static str) -> Self {
        self.meta.messages.push((message_id, template));
        self
    }

    /// Overrides the default severity.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Attaches the analyzer.
    #[must_use]
    pub fn analyze<A, F>(self, analyze: F) -> Analyzed<A>
    where
        F: Fn(&TagOccurrence) -> Option<A> + Send + Sync + 'static,
    {
        Analyzed {
            def: self,
            analyze: Box::new(analyze),
        }
    }
}

/// A rule definition with its analyzer attached.
pub struct Analyzed<A> {
    def: RuleDef,
    analyze: AnalyzeFn<A>,
}

impl<A: 'static> Analyzed<A> {
    /// Attaches the checker and finishes the rule.
    #[must_use]
    pub fn check<F>(self, check: F) -> ComponentRule<A>
    where
        F: Fn(&A, &TagOccurrence, &mut Reporter<'_>) + Send + Sync + 'static,
    {
        let gate_terms = self
            .def
            .base_classes
            .iter()
            .flat_map(|base| std::iter::once(*base).chain(base_class_aliases(base).iter().copied()))
            .collect();

        ComponentRule {
            def: self.def,
            gate_terms,
            analyze: self.analyze,
            check: Box::new(check),
        }
    }
}

/// A rule assembled by [`RuleDef`].
pub struct ComponentRule<A> {
    def: RuleDef,
    gate_terms: Vec<&'static str>,
    analyze: AnalyzeFn<A>,
    check: CheckFn<A>,
}

impl<A: 'static> ComponentRule<A> {
    /// Boxes the rule for registration.
    #[must_use]
    pub fn boxed(self) -> RuleBox {
        Box::new(self)
    }

    /// Runs the rule over `occurrences` and returns raw diagnostics.
    #[must_use]
    pub fn diagnose(&self, occurrences: &[TagOccurrence]) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for occurrence in occurrences {
            if !occurrence.passes_text_gate(&self.gate_terms) {
                continue;
            }
            let Some(analysis) = (self.analyze)(occurrence) else {
                continue;
            };
            let mut reporter = Reporter::new(&occurrence.location);
            (self.check)(&analysis, occurrence, &mut reporter);
            diagnostics.extend(reporter.into_diagnostics());
        }
        diagnostics
    }

    fn to_violation(&self, diagnostic: Diagnostic) -> Violation {
        let message = self.def.meta.render(diagnostic.message_id, &diagnostic.data);
        Violation::new(
            self.def.code,
            self.def.name,
            self.def.severity,
            diagnostic.location,
            message,
        )
        .with_message_id(diagnostic.message_id, diagnostic.data)
    }
}

impl<A: 'static> Rule for ComponentRule<A> {
    fn name(&self) -> &'static str {
        self.def.name
    }

    fn code(&self) -> &'static str {
        self.def.code
    }

    fn default_severity(&self) -> Severity {
        self.def.severity
    }

    fn meta(&self) -> &RuleMeta {
        &self.def.meta
    }

    fn check(&self, _ctx: &FileContext, occurrences: &[TagOccurrence]) -> Vec<Violation> {
        self.diagnose(occurrences)
            .into_iter()
            .map(|diagnostic| self.to_violation(diagnostic))
            .collect()
    }
}

impl<A> std::fmt::Debug for ComponentRule<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRule")
            .field("name", &self.def.name)
            .field("code", &self.def.code)
            .field("gate_terms", &self.gate_terms)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::AttributeMap;
    use crate::types::Location;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;

    fn occurrence(tag: &str, class: &str) -> TagOccurrence {
        let attrs: AttributeMap = [("class", class)].into_iter().collect();
        TagOccurrence::new(tag, attrs, Location::new(PathBuf::from("a.html"), 2, 5))
    }

    fn has_class_rule() -> ComponentRule<String> {
        RuleDef::new("button-seen", "CDR9999")
            .base_class("cdr-button")
            .describe("Reports every cdr-button.")
            .message("seen", "Saw <{{tagName}}>.")
            .analyze(|occ| {
                occ.attributes
                    .class_value()
                    .contains("cdr-button")
                    .then(|| occ.tag_name.clone())
            })
            .check(|tag, _occ, report| report.report_with("seen", [("tagName", tag.as_str())]))
    }

    #[test]
    fn skips_occurrences_without_analysis() {
        let rule = has_class_rule();
        let found = rule.diagnose(&[occurrence("div", "cdr-link"), occurrence("a", "cdr-button")]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].message_id, "seen");
    }

    #[test]
    fn violations_are_rendered_and_keep_message_id() {
        let rule = has_class_rule();
        let ctx = FileContext::new(Path::new("a.html"), "", Path::new(""));
        let violations = Rule::check(&rule, &ctx, &[occurrence("button", "cdr-button")]);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "Saw <button>.");
        assert_eq!(violations[0].message_id, "seen");
        assert_eq!(violations[0].data["tagName"], "button");
        assert_eq!(violations[0].code, "CDR9999");
        assert_eq!(violations[0].location.line, 2);
    }

    #[test]
    fn literal_occurrences_are_gated_by_base_and_aliases() {
        let rule = has_class_rule();
        let via_alias = occurrence("button", "cdr-button")
            .with_fragment(Arc::from("<button class=\"btn\">"));
        let unrelated = occurrence("button", "cdr-button")
            .with_fragment(Arc::from("<p>nothing to see</p>"));
        assert_eq!(rule.diagnose(&[via_alias, unrelated]).len(), 1);
    }
}
