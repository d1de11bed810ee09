//! Configuration file discovery.
//!
//! Finds the `.notelink.toml` governing a working directory by walking up
//! the directory tree; the nearest file wins. `~/.notelink.toml` acts as a
//! global fallback when no directory on the way up has one.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".notelink.toml";

/// Finds the configuration file governing `cwd`.
///
/// Walks up from `cwd` to the filesystem root and returns the first
/// `.notelink.toml` found; falls back to the global `~/.notelink.toml` if
/// present. Returns `None` when no configuration exists anywhere.
pub fn discover_config_file(cwd: &Path) -> Option<PathBuf> {
    let mut current = Some(cwd);
    while let Some(dir) = current {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        current = dir.parent();
    }
    global_config_path().filter(|path| path.is_file())
}

/// Returns the path to the global configuration file (`~/.notelink.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Checks if a path is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}
