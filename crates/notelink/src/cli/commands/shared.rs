//! Helpers shared by scan-like commands.

use std::path::Path;

use notelink_document::{Document, VaultSnapshot};

/// Resolves a user-supplied note reference against the snapshot.
///
/// Accepts, in order of preference: a vault-relative path, a bare file
/// name, or a title (file stem). Name and title lookups only succeed when
/// they are unambiguous.
pub(super) fn resolve_note<'s>(snapshot: &'s VaultSnapshot, reference: &str) -> Option<&'s Document> {
    if let Some(doc) = snapshot.by_rel_path(Path::new(reference)) {
        return Some(doc);
    }
    if let Some(doc) = snapshot.by_file_name(reference) {
        return Some(doc);
    }
    by_unique_stem(snapshot, reference)
}

/// Finds the document with the given stem, unique match only.
fn by_unique_stem<'s>(snapshot: &'s VaultSnapshot, stem: &str) -> Option<&'s Document> {
    let mut found = snapshot.documents.iter().filter(|doc| doc.stem == stem);
    let first = found.next()?;
    match found.next() {
        Some(_) => None,
        None => Some(first),
    }
}
