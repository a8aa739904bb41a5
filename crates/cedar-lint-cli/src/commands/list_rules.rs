//! List rules command implementation.

use anyhow::{Context, Result};
use cedar_lint_rules::{all_rules, family_rules, Preset, FAMILIES};

/// Runs the list-rules command.
pub fn run(family: Option<&str>) -> Result<()> {
    let rules = match family {
        Some(name) => family_rules(name).with_context(|| {
            let known: Vec<&str> = FAMILIES.iter().map(|(name, _)| *name).collect();
            format!("Unknown family \"{name}\". Known families: {}", known.join(", "))
        })?,
        None => all_rules(),
    };

    println!("Available rules:\n");
    println!("{:<10} {:<40} Description", "Code", "Name");
    println!("{}", "-".repeat(100));

    for rule in &rules {
        println!(
            "{:<10} {:<40} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nPresets:");
    for preset in Preset::ALL {
        println!("  {:<14} - {} rules", preset.name(), preset.rules().len());
    }

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  cedar-lint check --rules button-type,image-missing-alt");
    println!("  cedar-lint check --rules CDR0107,CDR1408");

    Ok(())
}
