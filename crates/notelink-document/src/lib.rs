//! Note model, metadata headers, and vault snapshots for notelink.
//!
//! A vault is a directory tree of plain-text notes. This crate loads a
//! consistent, immutable snapshot of those notes and exposes each one as a
//! [`Document`] carrying its names, declared metadata, and raw content. The
//! scanning engine reads these documents; it never writes them.

#![warn(missing_docs)]

pub mod header;

mod error;
mod snapshot;

use std::path::PathBuf;

pub use error::DocumentError;
pub use snapshot::VaultSnapshot;

/// One note of the vault, as an immutable snapshot member.
#[derive(Debug, Clone)]
pub struct Document {
    /// Path relative to the vault root.
    pub rel_path: PathBuf,
    /// Absolute filesystem path.
    pub abs_path: PathBuf,
    /// File name with extension, e.g. `Alpha.md`.
    pub file_name: String,
    /// File stem — the canonical title other notes are matched against.
    pub stem: String,
    /// Display title declared in the metadata header, if any.
    pub title: Option<String>,
    /// Aliases declared in the metadata header, in declaration order.
    pub aliases: Vec<String>,
    /// Raw, unstripped content.
    pub content: String,
}

impl Document {
    /// Builds a document from its paths and raw content, deriving the file
    /// names and header metadata.
    pub fn new(
        rel_path: impl Into<PathBuf>,
        abs_path: impl Into<PathBuf>,
        content: String,
    ) -> Self {
        let rel_path = rel_path.into();
        let file_name = rel_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = rel_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let meta = header::parse_header(&content).unwrap_or_default();
        Self {
            rel_path,
            abs_path: abs_path.into(),
            file_name,
            stem,
            title: meta.title,
            aliases: meta.aliases,
            content,
        }
    }
}
