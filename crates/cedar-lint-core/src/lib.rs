//! # cedar-lint-core
//!
//! Core engine for linting `cdr-` component classes across markup dialects.
//!
//! This crate provides the foundational types for the linter. It includes:
//!
//! - [`TagOccurrence`] and [`AttributeMap`], the dialect-independent view of
//!   one element
//! - [`aliases`], the shorthand-to-canonical class table
//! - [`classes`], the modifier analyzer and shared class-list helpers
//! - [`SourceDialect`] for turning a file into tag occurrences
//! - [`Rule`] and the [`RuleDef`] builder for component rules
//! - [`Analyzer`] for orchestrating lint execution
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use cedar_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./web")
//!     .dialects(cedar_lint_dialects::all())
//!     .rules(cedar_lint_rules::all_rules())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod builder;
mod config;
mod context;
mod dialect;
mod reporter;
mod rule;
mod tag;
mod types;

pub mod aliases;
pub mod classes;

pub use aliases::{base_class_aliases, resolve_class_alias};
pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use builder::{Analyzed, ComponentRule, RuleDef};
pub use classes::ComponentSpec;
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use dialect::{extract_all, has_suffix, is_claimed, DialectBox, SourceDialect};
pub use reporter::{Diagnostic, Reporter};
pub use rule::{interpolate, Rule, RuleBox, RuleKind, RuleMeta};
pub use tag::{is_dynamic, AttributeMap, TagOccurrence, DYNAMIC};
pub use types::{LintResult, Location, Severity, Violation, ViolationDiagnostic};
