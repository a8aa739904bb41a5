//! The same markup reports the same findings in every dialect.

use cedar_lint_core::{extract_all, FileContext};
use cedar_lint_rules::all_rules;
use std::path::Path;

const MARKUP: &str = concat!(
    r#"<div>"#,
    r#"<button class="cdr-button cdr-button--primary">Go</button>"#,
    r#"<img class="cdr-image cdr-image--ratio-1-1 cdr-image--ratio-4-3">"#,
    r#"<a class="cdr-link" target="_blank" href="/trail">Trail</a>"#,
    r#"</div>"#,
);

fn findings(file: &str, source: &str) -> Vec<(String, String)> {
    let ctx = FileContext::new(Path::new(file), source, Path::new(""));
    let occurrences = extract_all(&cedar_lint_dialects::all(), &ctx);
    let mut found: Vec<(String, String)> = all_rules()
        .iter()
        .flat_map(|rule| rule.check(&ctx, &occurrences))
        .map(|v| (v.rule, v.message_id))
        .collect();
    found.sort();
    found
}

fn expected() -> Vec<(String, String)> {
    let mut expected: Vec<(String, String)> = [
        ("button-type", "missingButtonType"),
        ("image-multiple-modifier", "multipleModifier"),
        ("image-missing-src", "missingSrc"),
        ("image-missing-alt", "missingAlt"),
        ("link-blank-rel", "missingRel"),
    ]
    .iter()
    .map(|(rule, id)| ((*rule).to_string(), (*id).to_string()))
    .collect();
    expected.sort();
    expected
}

#[test]
fn raw_markup() {
    assert_eq!(findings("page.html", MARKUP), expected());
}

#[test]
fn component_syntax() {
    let source = concat!(
        "export const Page = () => (\n",
        "  <div>\n",
        "    <button className=\"cdr-button cdr-button--primary\">Go</button>\n",
        "    <img className={'cdr-image cdr-image--ratio-1-1 cdr-image--ratio-4-3'} />\n",
        "    <a className=\"cdr-link\" target=\"_blank\" href=\"/trail\">Trail</a>\n",
        "  </div>\n",
        ");\n",
    );
    assert_eq!(findings("Page.jsx", source), expected());
}

#[test]
fn template_directive() {
    let source = format!("<template>\n  {MARKUP}\n</template>\n<script>\nexport default {{}};\n</script>\n");
    assert_eq!(findings("Page.vue", &source), expected());
}

#[test]
fn embedded_literal() {
    let source = format!("export const Page = {{\n  render: () => `{MARKUP}`,\n}};\n");
    assert_eq!(findings("Page.stories.ts", &source), expected());
}
