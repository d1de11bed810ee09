//! Term derivation for candidate documents.

use notelink_document::Document;

use crate::Corpus;

/// Where a search term came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermOrigin {
    /// The document's canonical title (its file stem).
    Title,
    /// One of the document's declared aliases.
    Alias,
}

/// A string to search for, tagged with its origin.
///
/// Terms are derived fresh for every scan pass and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// The text to search for.
    pub text: String,
    /// Whether this is the canonical title or an alias.
    pub origin: TermOrigin,
}

/// Derives the searchable terms for `candidate` as seen through `corpus`.
///
/// The canonical title comes first, then aliases in declared order; blank
/// and whitespace-only entries are dropped. Downstream overlap resolution
/// relies on this order as its match priority.
pub fn terms_for<C: Corpus>(corpus: &C, candidate: &Document) -> Vec<Term> {
    let aliases = corpus.aliases_of(candidate);
    let mut terms = Vec::with_capacity(1 + aliases.len());
    if !candidate.stem.trim().is_empty() {
        terms.push(Term {
            text: candidate.stem.clone(),
            origin: TermOrigin::Title,
        });
    }
    for alias in aliases {
        if alias.trim().is_empty() {
            continue;
        }
        terms.push(Term {
            text: alias.clone(),
            origin: TermOrigin::Alias,
        });
    }
    terms
}
