//! Implementation of `notelink check`.

use std::process::ExitCode;

use notelink_config::ConfigWarning;

use crate::cli::{context::CommandContext, output::dim};

/// Validates configuration and reports warnings with hints.
pub fn run(ctx: &CommandContext) -> ExitCode {
    println!("Checking configuration...");
    println!();

    let Some(config_path) = &ctx.config.config_path else {
        println!("No configuration file found.");
        println!();
        println!("Run 'notelink init' to create one.");
        return ExitCode::SUCCESS;
    };

    println!("Config file: {}", config_path.display());

    match &ctx.config.vault {
        Some(vault) => {
            let status = if vault.path.is_dir() { "ok" } else { "missing" };
            println!("Vault [{status}]: {}", vault.path.display());
            for pattern in &vault.include {
                println!("  {} {pattern}", dim("+"));
            }
            for pattern in &vault.exclude {
                println!("  {} {pattern}", dim("-"));
            }
        }
        None => println!("Vault: {}", dim("(none defined)")),
    }
    println!();

    let warnings = ctx.config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!("Warnings ({}):", warnings.len());
    for warning in &warnings {
        println!("  - {warning}");
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    let mut hints = Vec::new();

    for warning in warnings {
        match warning {
            ConfigWarning::NoVaultConfigured => {
                hints.push("Add a [vault] section with the path to your notes.");
            }
            ConfigWarning::VaultPathMissing { .. } => {
                hints.push("Create the missing directory or update the vault path.");
            }
            ConfigWarning::VaultPathNotDirectory { .. } => {
                hints.push("The vault path must point to a directory, not a file.");
            }
            ConfigWarning::IncludePatternMatchesNothing { .. } => {
                hints.push("Check that the pattern matches files in the vault directory.");
            }
        }
    }

    hints.sort();
    hints.dedup();

    if !hints.is_empty() {
        println!("Hints:");
        for hint in hints {
            println!("  - {hint}");
        }
    }
}
