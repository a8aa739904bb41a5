//! Rules for `cdr-container`.
//!
//! A container takes exactly one of its two width modifiers.

use crate::common::{modifier_rules, with_modifiers};
use cedar_lint_core::classes::{unique, ComponentSpec};
use cedar_lint_core::{RuleBox, RuleDef};

/// Vocabulary of the container family.
pub const SPEC: ComponentSpec = ComponentSpec::new("cdr-container").with_modifiers(&["static", "fluid"]);

/// Container rules (`CDR11xx`).
#[must_use]
pub fn rules() -> Vec<RuleBox> {
    let mut rules = Vec::from(modifier_rules!(
        SPEC,
        family: "container",
        base: "cdr-container",
        code: "11",
        example: "static"
    ));

    rules.push(
        with_modifiers(
            RuleDef::new("container-missing-modifier", "CDR1105")
                .describe("Require a cdr-container modifier.")
                .message(
                    "missingModifier",
                    "cdr-container should include cdr-container--static or cdr-container--fluid.",
                ),
            SPEC,
        )
        .check(|tag, _occ, report| {
            if tag.info.has_base && tag.info.modifiers.is_empty() {
                report.report("missingModifier");
            }
        })
        .boxed(),
    );

    // The list is rendered into `className`, as the message has always read.
    rules.push(
        with_modifiers(
            RuleDef::new("container-conflicting-modifiers", "CDR1106")
                .describe("Prevent conflicting cdr-container modifiers.")
                .message(
                    "conflictingModifiers",
                    "cdr-container should not include multiple modifiers: {{className}}.",
                ),
            SPEC,
        )
        .check(|tag, _occ, report| {
            let modifiers = unique(&tag.info.modifiers);
            if modifiers.len() > 1 {
                let list = modifiers.join(", ");
                report.report_with(
                    "conflictingModifiers",
                    [("className", list.clone()), ("classList", list)],
                );
            }
        })
        .boxed(),
    );

    rules
}
