//! Error types for notelink-document.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading documents from a vault.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The vault root does not exist or is not a directory.
    #[error("vault root is not a directory: {path}")]
    VaultNotFound {
        /// The offending vault root.
        path: PathBuf,
    },

    /// Failed to read a file.
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
