//! Integration tests for the `cedar_lint::check!()` macro.
//!
//! The generated test lints the fixtures under `tests/fixtures` with the
//! config next to this file, exercising macro expansion, config loading,
//! dialect dispatch and analysis end to end.

cedar_lint::check!(
    preset = "recommended",
    config = "crates/cedar-lint/tests/test-config.toml",
);
