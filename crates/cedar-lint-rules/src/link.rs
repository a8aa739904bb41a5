//! Rules for `cdr-link`.

use crate::common::{is_literal, modifier_rules, modifier_tag_rule, with_modifiers};
use cedar_lint_core::classes::ComponentSpec;
use cedar_lint_core::{is_dynamic, RuleBox, RuleDef};

/// Vocabulary of the link family.
pub const SPEC: ComponentSpec = ComponentSpec::new("cdr-link")
    .with_modifiers(&["standalone", "neutral", "inherit-color"])
    .with_host_tags(&["a", "button"]);

/// Link rules (`CDR15xx`).
#[must_use]
pub fn rules() -> Vec<RuleBox> {
    let mut rules = Vec::from(modifier_rules!(
        SPEC,
        family: "link",
        base: "cdr-link",
        code: "15",
        example: "standalone"
    ));

    rules.push(modifier_tag_rule(
        "link-invalid-tag",
        "CDR1505",
        SPEC,
        SPEC.host_tags,
        "Restrict cdr-link classes to valid tags.",
        "cdr-link classes are only valid on <a> or <button> elements.",
    ));

    rules.push(
        with_modifiers(
            RuleDef::new("link-anchor-href", "CDR1506")
                .describe("Require href on anchor links.")
                .message("missingHref", "<a> elements with cdr-link must include an href."),
            SPEC,
        )
        .check(|tag, occ, report| {
            if tag.tag_name == "a" && !is_literal(occ.attributes.get("href")) {
                report.report("missingHref");
            }
        })
        .boxed(),
    );

    rules.push(
        with_modifiers(
            RuleDef::new("link-blank-rel", "CDR1507")
                .describe("Require rel when target is _blank.")
                .message(
                    "missingRel",
                    "Links with target=\"_blank\" should include rel=\"noopener noreferrer\".",
                ),
            SPEC,
        )
        .check(|tag, occ, report| {
            if tag.tag_name != "a" {
                return;
            }
            let target = occ.attributes.get("target").unwrap_or("");
            if target != "_blank" || is_dynamic(target) {
                return;
            }
            if !is_literal(occ.attributes.get("rel")) {
                report.report("missingRel");
            }
        })
        .boxed(),
    );

    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ids, lint_html};

    #[test]
    fn anchors_need_a_literal_href() {
        let found = lint_html(
            &rules(),
            r#"<a class="cdr-link">a</a><a class="cdr-link" href="/x">b</a><button class="cdr-link cdr-link--standalone">c</button>"#,
        );
        assert_eq!(ids(&found), vec![("link-anchor-href", "missingHref")]);
    }

    #[test]
    fn blank_target_needs_rel() {
        let found = lint_html(
            &rules(),
            r#"<a class="lnk" href="/x" target="_blank">a</a><a class="lnk" href="/x" target="_blank" rel="noopener">b</a><a class="lnk" href="/x" target="_self">c</a>"#,
        );
        assert_eq!(ids(&found), vec![("link-blank-rel", "missingRel")]);
        assert_eq!(found[0].location.column, 1);
    }

    #[test]
    fn spans_are_not_links() {
        let found = lint_html(&rules(), r#"<span class="cdr-link cdr-link--neutral">x</span>"#);
        assert_eq!(ids(&found), vec![("link-invalid-tag", "invalidTag")]);
    }
}
