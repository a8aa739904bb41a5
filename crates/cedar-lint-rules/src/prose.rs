//! Rules for `cdr-prose`, the long-form text wrapper.

use crate::common::{modifier_rules, with_modifiers};
use cedar_lint_core::classes::{unique, ComponentSpec};
use cedar_lint_core::{RuleBox, RuleDef};

/// Vocabulary of the prose family.
pub const SPEC: ComponentSpec = ComponentSpec::new("cdr-prose")
    .with_modifiers(&["sm", "lg", "measure", "serif-headings", "invert"]);

const SIZE_MODIFIERS: &[&str] = &["cdr-prose--sm", "cdr-prose--lg"];

/// Prose rules (`CDR13xx`).
#[must_use]
pub fn rules() -> Vec<RuleBox> {
    let mut rules = Vec::from(modifier_rules!(
        SPEC,
        family: "prose",
        base: "cdr-prose",
        code: "13",
        example: "measure"
    ));
    rules.push(
        with_modifiers(
            RuleDef::new("prose-conflicting-size", "CDR1305")
                .describe("Prevent conflicting cdr-prose size modifiers.")
                .message(
                    "conflictingSizes",
                    "cdr-prose should include only one size modifier (found: {{classList}}).",
                ),
            SPEC,
        )
        .check(|tag, _occ, report| {
            let sizes: Vec<String> = tag
                .classes
                .iter()
                .filter(|class| SIZE_MODIFIERS.contains(&class.as_str()))
                .cloned()
                .collect();
            let sizes = unique(&sizes);
            if sizes.len() > 1 {
                report.report_with("conflictingSizes", [("classList", sizes.join(", "))]);
            }
        })
        .boxed(),
    );
    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{lint_html, messages};

    #[test]
    fn both_sizes_conflict() {
        let found = lint_html(
            &rules(),
            r#"<article class="prose prose--lg cdr-prose--sm prose--meas"></article>"#,
        );
        assert_eq!(
            messages(&found),
            vec!["cdr-prose should include only one size modifier (found: cdr-prose--lg, cdr-prose--sm)."]
        );
    }

    #[test]
    fn a_repeated_size_is_only_a_duplicate() {
        let found = lint_html(&rules(), r#"<div class="cdr-prose cdr-prose--sm cdr-prose--sm"></div>"#);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].rule, "prose-duplicate");
    }
}
