//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# cedar-lint configuration

# Rule preset: recommended (every rule), accessibility, or minimal
preset = "recommended"

# Lowest severity that fails `cedar-lint check`: error, warning or info
fail_on = "error"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./src"

# Glob patterns to exclude from analysis
exclude = [
    "**/node_modules/**",
    "**/dist/**",
    "**/coverage/**",
]

# Only analyze files matching these globs (empty means every file)
# include = ["src/**"]

# Respect .gitignore files
respect_gitignore = true

# Cap the number of analysis threads
# parallelism = 4

# Rule configurations
# Each rule can be disabled or have its severity overridden

# [rules.button-type]
# enabled = false

# [rules.image-missing-alt]
# severity = "warning"
"#;

/// Writes the default configuration to `dir/cedar-lint.toml`.
fn write_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join("cedar-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(())
}

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("."), force)?;

    println!("Created cedar-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit cedar-lint.toml to configure rules");
    println!("  2. Run: cedar-lint check");

    Ok(())
}
