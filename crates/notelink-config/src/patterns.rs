//! Include/exclude pattern compilation and matching.
//!
//! Compiles the vault's glob patterns into efficient matchers used during
//! snapshot loading to decide which files belong to the corpus.

use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::ConfigError;

/// Compiled glob patterns for efficient file matching.
#[derive(Debug)]
pub struct CompiledPatterns {
    /// Compiled include patterns.
    include: GlobSet,
    /// Compiled exclude patterns.
    exclude: GlobSet,
}

impl CompiledPatterns {
    /// Compiles include/exclude patterns into matchers.
    pub fn compile(include: &[String], exclude: &[String]) -> Result<Self, ConfigError> {
        Ok(Self {
            include: build_set(include)?,
            exclude: build_set(exclude)?,
        })
    }

    /// Checks if a vault-relative path should be part of the corpus.
    ///
    /// A file matches if it matches at least one include pattern and does
    /// not match any exclude pattern.
    pub fn matches(&self, path: &Path) -> bool {
        self.include.is_match(path) && !self.exclude.is_match(path)
    }
}

/// Builds a glob set from a list of patterns.
fn build_set(patterns: &[String]) -> Result<GlobSet, ConfigError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(compile_glob(pattern)?);
    }
    builder.build().map_err(|source| ConfigError::InvalidPattern {
        pattern: "<combined pattern set>".to_string(),
        source,
    })
}

/// Compiles a single glob pattern.
fn compile_glob(pattern: &str) -> Result<Glob, ConfigError> {
    Glob::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(include: &[&str], exclude: &[&str]) -> CompiledPatterns {
        let include: Vec<String> = include.iter().map(|s| s.to_string()).collect();
        let exclude: Vec<String> = exclude.iter().map(|s| s.to_string()).collect();
        CompiledPatterns::compile(&include, &exclude).unwrap()
    }

    #[test]
    fn include_matches_nested_paths() {
        let compiled = patterns(&["**/*.md"], &[]);
        assert!(compiled.matches(Path::new("a.md")));
        assert!(compiled.matches(Path::new("sub/dir/b.md")));
        assert!(!compiled.matches(Path::new("c.txt")));
    }

    #[test]
    fn exclude_overrides_include() {
        let compiled = patterns(&["**/*.md"], &["templates/**"]);
        assert!(compiled.matches(Path::new("note.md")));
        assert!(!compiled.matches(Path::new("templates/daily.md")));
    }

    #[test]
    fn no_includes_matches_nothing() {
        let compiled = patterns(&[], &[]);
        assert!(!compiled.matches(Path::new("a.md")));
    }

    #[test]
    fn invalid_pattern_errors() {
        let include = vec!["a{".to_string()];
        assert!(CompiledPatterns::compile(&include, &[]).is_err());
    }
}
