//! Corpus provider contract.
//!
//! The engine never reaches for global state to enumerate documents or look
//! up aliases; everything goes through this trait, injected per scan. That
//! keeps scans re-entrant and lets tests run against in-memory corpora.

use notelink_document::{Document, VaultSnapshot};

/// Read-only access to a consistent snapshot of a document corpus.
///
/// Implementations must present the same document set, aliases, and raw
/// text for the duration of one scan pass; the engine does not re-read a
/// document mid-pass.
pub trait Corpus {
    /// All documents in the snapshot, in corpus enumeration order.
    ///
    /// Enumeration order breaks ties between candidate documents whose
    /// titles have equal length, so it must be stable for a given snapshot.
    fn documents(&self) -> &[Document];

    /// Declared aliases of a document, in declaration order.
    fn aliases_of<'a>(&'a self, document: &'a Document) -> &'a [String];

    /// Raw, unstripped text of a document.
    fn raw_text_of<'a>(&'a self, document: &'a Document) -> &'a str;
}

impl Corpus for VaultSnapshot {
    fn documents(&self) -> &[Document] {
        &self.documents
    }

    fn aliases_of<'a>(&'a self, document: &'a Document) -> &'a [String] {
        &document.aliases
    }

    fn raw_text_of<'a>(&'a self, document: &'a Document) -> &'a str {
        &document.content
    }
}
