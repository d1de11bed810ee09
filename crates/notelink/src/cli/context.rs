//! Shared context for running CLI commands.

use std::{env, path::PathBuf, process::ExitCode};

use notelink_config::{Config, Vault};
use notelink_document::VaultSnapshot;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (default if no config file was found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = match Config::load(&cwd) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: failed to load configuration: {e}");
                return Err(ExitCode::FAILURE);
            }
        };
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for commands that should work even when an existing config
    /// file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Ensures a vault is configured, optionally printing an init hint.
    pub fn require_vault(&self, show_init_hint: bool) -> Result<&Vault, ExitCode> {
        match &self.config.vault {
            Some(vault) => Ok(vault),
            None => {
                eprintln!("error: no vault defined in configuration");
                if show_init_hint {
                    eprintln!(
                        "Run 'notelink init' to create a configuration file, then set the vault path."
                    );
                }
                Err(ExitCode::FAILURE)
            }
        }
    }

    /// Loads a fresh snapshot of the configured vault.
    pub fn load_snapshot(&self, vault: &Vault) -> Result<VaultSnapshot, ExitCode> {
        let patterns = match vault.compile_patterns() {
            Ok(patterns) => patterns,
            Err(e) => {
                eprintln!("error: {e}");
                return Err(ExitCode::FAILURE);
            }
        };
        match VaultSnapshot::load(&vault.path, &patterns) {
            Ok(snapshot) => Ok(snapshot),
            Err(e) => {
                eprintln!("error: {e}");
                Err(ExitCode::FAILURE)
            }
        }
    }
}

/// Resolves the current working directory or reports failure.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    match env::current_dir() {
        Ok(cwd) => Ok(cwd),
        Err(e) => {
            eprintln!("error: could not determine current directory: {e}");
            Err(ExitCode::FAILURE)
        }
    }
}
