//! Configuration system for notelink.
//!
//! notelink reads TOML configuration from `.notelink.toml`, discovered by
//! walking up the directory tree from the working directory; the nearest
//! file wins, with `~/.notelink.toml` as a global fallback. Configuration
//! names the vault root and scan behavior:
//!
//! ```toml
//! [vault]
//! path = "notes"
//! include = ["**/*.md"]
//! exclude = ["templates/**"]
//!
//! [scan]
//! preview_context = 20
//! ```

#![warn(missing_docs)]

mod discovery;
mod error;
mod parse;
mod patterns;
mod templates;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_file, global_config_path, is_global_config};
pub use error::ConfigError;
pub use parse::{RawConfig, RawScanSettings, RawVault, parse_config_file, parse_config_str};
pub use patterns::CompiledPatterns;
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default include patterns when a vault declares none.
pub const DEFAULT_INCLUDES: &[&str] = &["**/*.md", "**/*.markdown"];

/// Default preview window size in characters per side.
pub const DEFAULT_PREVIEW_CONTEXT: usize = 20;

/// Fully resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Vault definition, if any.
    pub vault: Option<Vault>,
    /// Scan settings.
    pub scan: ScanSettings,
    /// Path of the config file this was loaded from.
    pub config_path: Option<PathBuf>,
}

/// A resolved vault definition.
#[derive(Debug, Clone)]
pub struct Vault {
    /// Absolute path to the vault root.
    pub path: PathBuf,
    /// Include glob patterns.
    pub include: Vec<String>,
    /// Exclude glob patterns.
    pub exclude: Vec<String>,
}

impl Vault {
    /// Compiles this vault's include/exclude patterns.
    pub fn compile_patterns(&self) -> Result<CompiledPatterns, ConfigError> {
        CompiledPatterns::compile(&self.include, &self.exclude)
    }
}

/// Scan behavior settings.
#[derive(Debug, Clone)]
pub struct ScanSettings {
    /// Characters of context either side of a match preview.
    pub preview_context: usize,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            preview_context: DEFAULT_PREVIEW_CONTEXT,
        }
    }
}

impl Config {
    /// Discovers and loads the configuration governing `cwd`.
    ///
    /// Returns `Ok(Config::default())` when no configuration file exists.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        match discover_config_file(cwd) {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// Relative vault paths are resolved against the config file's
    /// directory, with `~/` expanding to the home directory.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = parse_config_file(path)?;
        Ok(resolve(raw, path))
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }
}

/// Resolves a raw config against the location of its file.
fn resolve(raw: RawConfig, config_path: &Path) -> Config {
    let base = config_path.parent().unwrap_or(Path::new("."));
    let vault = raw.vault.map(|vault| Vault {
        path: resolve_vault_path(&vault.path, base),
        include: vault
            .include
            .unwrap_or_else(|| DEFAULT_INCLUDES.iter().map(|s| s.to_string()).collect()),
        exclude: vault.exclude.unwrap_or_default(),
    });
    let scan = ScanSettings {
        preview_context: raw
            .scan
            .and_then(|scan| scan.preview_context)
            .unwrap_or(DEFAULT_PREVIEW_CONTEXT),
    };
    Config {
        vault,
        scan,
        config_path: Some(config_path.to_path_buf()),
    }
}

/// Resolves a vault path string: `~/` expands to the home directory and
/// relative paths are anchored at the config file's directory.
fn resolve_vault_path(path: &str, base: &Path) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(dirs) = directories::BaseDirs::new()
    {
        return dirs.home_dir().join(rest);
    }
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
