//! Vault snapshot loading.
//!
//! Walks the vault root, applies the configured include/exclude patterns,
//! and reads every matching note exactly once. The resulting snapshot is
//! what a whole scan session works against: documents are never re-read
//! mid-pass, and after any file is edited the snapshot is stale and must be
//! reloaded before scanning again.

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use notelink_config::CompiledPatterns;
use walkdir::WalkDir;

use crate::{Document, DocumentError};

/// A consistent, immutable snapshot of a vault's documents.
#[derive(Debug, Default)]
pub struct VaultSnapshot {
    /// Documents in enumeration order (sorted by relative path).
    pub documents: Vec<Document>,
}

impl VaultSnapshot {
    /// Loads every matching file under `root`.
    ///
    /// Directories and symlinks are not followed, hidden entries are
    /// skipped, and files are kept only when they match the include
    /// patterns and none of the exclude patterns. Enumeration order is the
    /// sorted relative path order, which downstream tie-breaking relies on.
    pub fn load(root: &Path, patterns: &CompiledPatterns) -> Result<Self, DocumentError> {
        if !root.is_dir() {
            return Err(DocumentError::VaultNotFound {
                path: root.to_path_buf(),
            });
        }

        let mut documents = Vec::new();
        // depth 0 is the vault root itself, which may legitimately be a
        // hidden directory.
        for entry in WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.file_name()))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(_) => continue,
            };
            if entry.file_type().is_dir() || entry.file_type().is_symlink() {
                continue;
            }

            let abs_path = entry.path().to_path_buf();
            let rel_path: PathBuf = match abs_path.strip_prefix(root) {
                Ok(rel) => rel.to_path_buf(),
                Err(_) => continue,
            };
            if !patterns.matches(&rel_path) {
                continue;
            }

            let content = fs::read_to_string(&abs_path).map_err(|source| {
                DocumentError::ReadFile {
                    path: abs_path.clone(),
                    source,
                }
            })?;
            documents.push(Document::new(rel_path, abs_path, content));
        }

        documents.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));
        Ok(Self { documents })
    }

    /// Looks up a document by vault-relative path.
    pub fn by_rel_path(&self, rel_path: &Path) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.rel_path == rel_path)
    }

    /// Looks up a document by bare file name, unique match only.
    pub fn by_file_name(&self, file_name: &str) -> Option<&Document> {
        let mut found = self.documents.iter().filter(|doc| doc.file_name == file_name);
        let first = found.next()?;
        match found.next() {
            Some(_) => None,
            None => Some(first),
        }
    }
}

/// Checks if a name represents a hidden entry (starts with '.').
fn is_hidden(name: &OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}
