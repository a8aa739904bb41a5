//! # cedar-lint-rules
//!
//! Built-in component class rules for cedar-lint.
//!
//! Every rule is built with [`RuleDef`](cedar_lint_core::RuleDef) and runs
//! on the tag occurrences of any dialect. Rules are grouped in families,
//! one module per component; codes are `CDR` + family + rule.
//!
//! ## Families
//!
//! | Code | Family | Rules |
//! |------|--------|-------|
//! | CDR01xx | `button` | variant, size, icon, modifier, duplicate, tag, type, anchor |
//! | CDR02xx | `accordion` | class vocabulary and element tags |
//! | CDR03xx | `accordion-group` | invalid-class, duplicate, invalid-tag |
//! | CDR04xx | `input` | class vocabulary, missing base, element tags |
//! | CDR05xx | `label-standalone` | invalid-class, duplicate, element tags |
//! | CDR06xx | `label-wrapper` | modifier and element vocabulary, tags |
//! | CDR07xx | `kicker` | the four modifier rules |
//! | CDR08xx | `abstract` | the four modifier rules |
//! | CDR09xx | `title` | the four modifier rules |
//! | CDR10xx | `icon` | the four modifier rules |
//! | CDR11xx | `container` | the four, missing-modifier, conflicting-modifiers |
//! | CDR12xx | `list` | the four, invalid-tag |
//! | CDR13xx | `prose` | the four, conflicting-size |
//! | CDR14xx | `image` | the four, multiple-modifier, invalid-tag, missing-src, missing-alt |
//! | CDR15xx | `link` | the four, invalid-tag, anchor-href, blank-rel |
//! | CDR16xx | `caption` | invalid-class, duplicate, summary-tag, cite-tag |
//! | CDR17xx | `quote` | modifier and element vocabulary, tags |
//! | CDR18xx | `form-error` | invalid-class, duplicate, missing-base, tags |
//! | CDR19xx | `landing-lead` | invalid-class, duplicate |
//! | CDR20xx | `heading-subheading-block` | invalid-class, duplicate |
//! | CDR21xx | `split-surface` | modifier and element vocabulary, missing-modifier |
//! | CDR22xx | `text` | missing-base, invalid-modifier, invalid-prefix, duplicate, multiple-scale |
//!
//! "The four" are `<family>-missing-base`, `<family>-invalid-modifier`,
//! `<family>-invalid-prefix` and `<family>-duplicate`.
//!
//! ## Usage
//!
//! ```ignore
//! use cedar_lint_core::Analyzer;
//! use cedar_lint_rules::Preset;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./web")
//!     .dialects(cedar_lint_dialects::all())
//!     .rules(Preset::Recommended.rules())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod common;
mod presets;
#[cfg(test)]
mod testing;

pub mod abstract_block;
pub mod accordion;
pub mod accordion_group;
pub mod button;
pub mod caption;
pub mod container;
pub mod form_error;
pub mod heading_subheading_block;
pub mod icon;
pub mod image;
pub mod input;
pub mod kicker;
pub mod label_standalone;
pub mod label_wrapper;
pub mod landing_lead;
pub mod link;
pub mod list;
pub mod prose;
pub mod quote;
pub mod split_surface;
pub mod text;
pub mod title;

pub use presets::{
    accessibility_rules, all_rules, family_rules, find_rule, minimal_rules, recommended_rules,
    Preset, FAMILIES,
};

/// Re-export core types for convenience.
pub use cedar_lint_core::{Rule, RuleBox, Severity, Violation};
