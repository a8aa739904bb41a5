//! Internal runner for `check!()` macro integration.
//!
//! This module is `#[doc(hidden)]` and not part of the public API.
//! It is called by the generated test function from `cedar_lint::check!()`.

use cedar_lint_core::{Analyzer, Config, Severity};
use cedar_lint_rules::Preset;
use std::path::{Path, PathBuf};

/// Config file names to search for, in priority order.
const CONFIG_CANDIDATES: &[&str] = &["cedar-lint.toml", ".cedar-lint.toml"];

/// Arguments of `check!()`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    /// Preset name.
    pub preset: Option<String>,
    /// Config path, relative to the workspace root unless absolute.
    pub config: Option<String>,
    /// Failure threshold.
    pub fail_on: Option<String>,
}

impl CheckOptions {
    /// Sets one macro argument.
    ///
    /// # Panics
    ///
    /// Panics on an unknown argument name.
    pub fn set(&mut self, key: &str, value: &str) {
        let slot = match key {
            "preset" => &mut self.preset,
            "config" => &mut self.config,
            "fail_on" => &mut self.fail_on,
            other => panic!(
                "cedar-lint: unknown check! argument `{other}`. Valid arguments: preset, config, fail_on"
            ),
        };
        *slot = Some(value.to_string());
    }
}

/// Runs cedar-lint analysis as part of `cargo test`.
///
/// # Panics
///
/// Panics if violations at or above `fail_on` severity are found,
/// or if the config or analyzer cannot be loaded.
pub fn run_check(options: &CheckOptions) {
    let root = find_project_root();
    let config = load_config(&root, options.config.as_deref());

    let preset = resolve_preset(options.preset.as_deref(), &config);
    let fail_on = resolve_fail_on(options.fail_on.as_deref(), &config);

    let analyzer = Analyzer::builder()
        .root(&root)
        .config(config)
        .dialects(cedar_lint_dialects::all())
        .rules(preset.rules())
        .build()
        .unwrap_or_else(|e| panic!("cedar-lint: failed to build analyzer: {e}"));

    let result = analyzer
        .analyze()
        .unwrap_or_else(|e| panic!("cedar-lint: analysis failed: {e}"));

    if result.has_violations_at(fail_on) {
        panic!("{}", result.format_test_report(fail_on));
    }
}

/// Loads the explicit config, else the first candidate at `root`, else
/// defaults.
fn load_config(root: &Path, explicit_path: Option<&str>) -> Config {
    let path = match explicit_path {
        Some(path) if Path::new(path).is_absolute() => PathBuf::from(path),
        Some(path) => root.join(path),
        None => match CONFIG_CANDIDATES
            .iter()
            .map(|name| root.join(name))
            .find(|candidate| candidate.is_file())
        {
            Some(found) => found,
            None => return Config::default(),
        },
    };
    Config::from_file(&path)
        .unwrap_or_else(|e| panic!("cedar-lint: failed to load config from {}: {e}", path.display()))
}

/// Checks whether a `Cargo.toml` file defines a `[workspace]` section
/// by parsing as TOML, avoiding false positives from comments or strings.
fn has_workspace_section(cargo_toml: &Path) -> bool {
    let Ok(content) = std::fs::read_to_string(cargo_toml) else {
        return false;
    };
    content
        .parse::<toml::Table>()
        .is_ok_and(|table| table.contains_key("workspace"))
}

/// The workspace root above `CARGO_MANIFEST_DIR`, else the manifest dir,
/// else the current directory.
fn find_project_root() -> PathBuf {
    let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") else {
        return std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    };
    let manifest_dir = PathBuf::from(manifest_dir);
    manifest_dir
        .ancestors()
        .find(|dir| has_workspace_section(&dir.join("Cargo.toml")))
        .map_or_else(|| manifest_dir.clone(), Path::to_path_buf)
}

/// Macro arg > config > `recommended`.
fn resolve_preset(macro_arg: Option<&str>, config: &Config) -> Preset {
    let name = macro_arg.unwrap_or_else(|| config.preset_name());
    name.parse()
        .unwrap_or_else(|message| panic!("cedar-lint: {message}"))
}

/// Macro arg > config > `error`.
fn resolve_fail_on(macro_arg: Option<&str>, config: &Config) -> Severity {
    match macro_arg {
        Some(name) => Severity::from_name(name).unwrap_or_else(|| {
            panic!("cedar-lint: unknown severity `{name}`. Valid values: error, warning, info")
        }),
        None => config
            .fail_on_severity()
            .unwrap_or_else(|e| panic!("cedar-lint: {e}")),
    }
}
