//! Unlinked-mention scanning engine for notelink.
//!
//! Given a snapshot of a note vault, this crate finds places where one note
//! mentions another note's title (or a declared alias of it) as plain
//! prose, without an explicit `[[wikilink]]`, and reports each mention with
//! an exact (line, column) range and a stable id so a host can later turn
//! it into a real reference via [`replace_span`].
//!
//! The engine is pure and synchronous: it never touches the filesystem,
//! holds no state between calls, and reaches the corpus only through the
//! injected [`Corpus`] trait. Scanning many documents is embarrassingly
//! parallel across documents; within one document the matching, overlap
//! resolution, and position translation run in a fixed priority order that
//! is part of the observable contract (see [`Scanner::scan_document`]).

#![warn(missing_docs)]

mod corpus;
mod error;
mod id;
mod link;
mod matcher;
mod position;
mod resolve;
mod rewrite;
mod term;

pub use corpus::Corpus;
pub use error::RewriteError;
pub use id::{IdError, LinkId};
pub use link::PotentialLink;
pub use matcher::TermPattern;
pub use position::{Position, position_at};
pub use resolve::{DEFAULT_PREVIEW_CONTEXT, DocumentLinks, Scanner};
pub use rewrite::{Span, replace_span};
pub use term::{Term, TermOrigin, terms_for};
