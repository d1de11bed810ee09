//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential
//! issues. Warnings are non-fatal; commands proceed wherever possible.

use std::{fmt, fs, path::Path};

use globset::Glob;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No vault is defined.
    NoVaultConfigured,
    /// The vault path does not exist.
    VaultPathMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// The vault path exists but is not a directory.
    VaultPathNotDirectory {
        /// Path that is not a directory.
        path: String,
    },
    /// An include pattern doesn't match any files.
    IncludePatternMatchesNothing {
        /// Pattern that matched nothing.
        pattern: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoVaultConfigured => {
                write!(f, "no vault is defined in configuration")
            }
            Self::VaultPathMissing { path } => {
                write!(f, "vault path does not exist: {path}")
            }
            Self::VaultPathNotDirectory { path } => {
                write!(f, "vault path is not a directory: {path}")
            }
            Self::IncludePatternMatchesNothing { pattern } => {
                write!(f, "include pattern '{pattern}' matches no files")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
///
/// This checks for:
/// - A missing vault definition
/// - A vault path that doesn't exist or isn't a directory
/// - Include patterns that don't match any files
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let Some(vault) = &config.vault else {
        return vec![ConfigWarning::NoVaultConfigured];
    };

    let mut warnings = Vec::new();

    if !vault.path.exists() {
        warnings.push(ConfigWarning::VaultPathMissing {
            path: vault.path.display().to_string(),
        });
        return warnings; // Can't validate patterns if path doesn't exist
    }

    if !vault.path.is_dir() {
        warnings.push(ConfigWarning::VaultPathNotDirectory {
            path: vault.path.display().to_string(),
        });
        return warnings;
    }

    for pattern in &vault.include {
        if !pattern_matches_any_file(&vault.path, pattern) {
            warnings.push(ConfigWarning::IncludePatternMatchesNothing {
                pattern: pattern.clone(),
            });
        }
    }

    warnings
}

/// Checks if a glob pattern matches any files under the vault root.
fn pattern_matches_any_file(root: &Path, pattern: &str) -> bool {
    let Ok(glob) = Glob::new(pattern) else {
        return false; // Invalid pattern, will be caught elsewhere
    };
    let matcher = glob.compile_matcher();
    walk_and_match(root, root, &matcher)
}

/// Recursively walks a directory and checks if any file matches the pattern.
fn walk_and_match(root: &Path, current: &Path, matcher: &globset::GlobMatcher) -> bool {
    let Ok(entries) = fs::read_dir(current) else {
        return false;
    };

    for entry in entries.flatten() {
        let path = entry.path();

        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };

        if path.is_file() && matcher.is_match(relative) {
            return true;
        }

        if path.is_dir() && walk_and_match(root, &path, matcher) {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::Vault;

    fn config_with_vault(vault: Vault) -> Config {
        Config {
            vault: Some(vault),
            ..Default::default()
        }
    }

    #[test]
    fn empty_config_warns_about_missing_vault() {
        let warnings = Config::default().validate();
        assert_eq!(warnings, vec![ConfigWarning::NoVaultConfigured]);
    }

    #[test]
    fn missing_vault_path_warns() {
        let config = config_with_vault(Vault {
            path: "/nonexistent/path/12345".into(),
            include: vec!["**/*.md".into()],
            exclude: vec![],
        });
        let warnings = config.validate();
        assert!(matches!(
            warnings[0],
            ConfigWarning::VaultPathMissing { .. }
        ));
    }

    #[test]
    fn vault_path_that_is_a_file_warns() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file");
        fs::write(&file, "x").unwrap();

        let config = config_with_vault(Vault {
            path: file,
            include: vec!["**/*.md".into()],
            exclude: vec![],
        });
        let warnings = config.validate();
        assert!(matches!(
            warnings[0],
            ConfigWarning::VaultPathNotDirectory { .. }
        ));
    }

    #[test]
    fn unmatched_include_pattern_warns() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("note.txt"), "x").unwrap();

        let config = config_with_vault(Vault {
            path: temp.path().to_path_buf(),
            include: vec!["**/*.md".into()],
            exclude: vec![],
        });
        let warnings = config.validate();
        assert_eq!(
            warnings,
            vec![ConfigWarning::IncludePatternMatchesNothing {
                pattern: "**/*.md".into()
            }]
        );
    }

    #[test]
    fn valid_vault_produces_no_warnings() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("note.md"), "x").unwrap();

        let config = config_with_vault(Vault {
            path: temp.path().to_path_buf(),
            include: vec!["**/*.md".into()],
            exclude: vec![],
        });
        assert!(config.validate().is_empty());
    }
}
