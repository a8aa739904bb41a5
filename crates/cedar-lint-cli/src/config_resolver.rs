//! Locates the configuration file for a check run.
//!
//! Lookup order:
//!
//! 1. `--config PATH`, taken as given
//! 2. the nearest `cedar-lint.toml` or `.cedar-lint.toml`, searching from
//!    the checked path up through its ancestors
//! 3. `config.toml` in the global directory (`$CEDAR_LINT_CONFIG_DIR`,
//!    else `~/.cedar-lint`)
//! 4. built-in defaults

use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`.
    Explicit(PathBuf),
    /// Found next to, or above, the checked path.
    Project(PathBuf),
    /// Found in the global config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// The config file path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// True for a config from the global directory.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

/// Project config names, preferred first.
const PROJECT_CONFIG_NAMES: &[&str] = &["cedar-lint.toml", ".cedar-lint.toml"];

const GLOBAL_CONFIG_NAME: &str = "config.toml";

const GLOBAL_DIR_ENV: &str = "CEDAR_LINT_CONFIG_DIR";

/// Resolves the configuration for a run over `target`, which may be a
/// directory or a single file.
#[must_use]
pub fn resolve(target: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_with(target, explicit, global_config_dir().as_deref())
}

fn resolve_with(target: &Path, explicit: Option<&Path>, global_dir: Option<&Path>) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    if let Some(found) = find_project_config(target) {
        tracing::debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    global_dir
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
        .filter(|candidate| candidate.is_file())
        .map_or(ConfigSource::Default, |candidate| {
            tracing::debug!("Found global config: {}", candidate.display());
            ConfigSource::Global(candidate)
        })
}

/// The nearest project config at or above `target`.
fn find_project_config(target: &Path) -> Option<PathBuf> {
    let start = if target.is_file() {
        target.parent()?
    } else {
        target
    };
    let start = std::path::absolute(start).unwrap_or_else(|_| start.to_path_buf());
    start.ancestors().find_map(|dir| {
        PROJECT_CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

/// The global config directory: `$CEDAR_LINT_CONFIG_DIR`, else
/// `~/.cedar-lint`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    match std::env::var_os(GLOBAL_DIR_ENV) {
        Some(dir) => Some(PathBuf::from(dir)),
        None => home::home_dir().map(|home| home.join(".cedar-lint")),
    }
}
