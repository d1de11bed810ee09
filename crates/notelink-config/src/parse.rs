//! Configuration file parsing.
//!
//! Parses `.notelink.toml` files into `RawConfig` structures that preserve
//! the optional nature of every field before resolution fills in defaults.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional; this mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// Vault definition section.
    pub vault: Option<RawVault>,
    /// Scan settings section.
    pub scan: Option<RawScanSettings>,
}

/// Raw vault definition from TOML.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct RawVault {
    /// Path to the vault root, relative paths resolved against the config
    /// file's directory.
    pub path: String,
    /// Include patterns (optional; defaults to markdown files).
    #[serde_as(as = "Option<OneOrMany<_>>")]
    #[serde(default)]
    pub include: Option<Vec<String>>,
    /// Exclude patterns (optional, defaults to none).
    #[serde_as(as = "Option<OneOrMany<_>>")]
    #[serde(default)]
    pub exclude: Option<Vec<String>>,
}

/// Raw scan settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawScanSettings {
    /// Characters of context either side of a match preview.
    pub preview_context: Option<usize>,
}

/// Parses a configuration from a TOML string.
pub fn parse_config_str(content: &str) -> Result<RawConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Reads and parses a configuration file.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config_str(&content).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}
