//! Scan orchestration and overlap resolution.
//!
//! One scan pass walks every other document's terms over the scanned note
//! in a fixed priority order and greedily claims character spans. The order
//! is the whole determinism story: candidate documents by descending title
//! length (so `Long Title` claims its span before `Title` can), ties broken
//! by corpus enumeration order; within a document the canonical title
//! before its aliases; within a term, matches left to right. A candidate
//! whose span intersects an already-claimed range is dropped, never
//! trimmed. Reordering any of these loops changes which matches win and is
//! a correctness break, not an optimization.

use std::{ops::Range, path::PathBuf};

use notelink_document::{Document, header};
use serde::Serialize;

use crate::{
    Corpus, LinkId, PotentialLink, TermOrigin, TermPattern,
    link::preview_window,
    position::position_at,
    term::terms_for,
};

/// Default number of context characters on either side of a match preview.
pub const DEFAULT_PREVIEW_CONTEXT: usize = 20;

/// All potential links found in one document by one scan pass.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentLinks {
    /// Vault-relative path of the scanned document.
    pub path: PathBuf,
    /// Canonical title (file stem) of the scanned document.
    pub title: String,
    /// Potential links, in acceptance order.
    pub links: Vec<PotentialLink>,
}

/// Scans documents of one corpus snapshot for unlinked mentions.
pub struct Scanner<'c, C: Corpus> {
    /// The injected corpus snapshot.
    corpus: &'c C,
    /// Preview window size in characters per side.
    preview_context: usize,
}

impl<'c, C: Corpus> Scanner<'c, C> {
    /// Creates a scanner over `corpus` with default settings.
    pub fn new(corpus: &'c C) -> Self {
        Self {
            corpus,
            preview_context: DEFAULT_PREVIEW_CONTEXT,
        }
    }

    /// Overrides the preview window size.
    pub fn with_preview_context(mut self, context: usize) -> Self {
        self.preview_context = context;
        self
    }

    /// Scans a single document against every other document in the corpus.
    ///
    /// Deterministic: the same snapshot always yields the same links in the
    /// same order, with the same spans and ids.
    pub fn scan_document(&self, document: &Document) -> Vec<PotentialLink> {
        let raw = self.corpus.raw_text_of(document);
        let (stripped, removed) = header::strip_header(raw);

        let mut claimed: Vec<Range<usize>> = Vec::new();
        let mut links = Vec::new();

        for other in self.candidates_for(document) {
            let aliases = self.corpus.aliases_of(other);
            for term in terms_for(self.corpus, other) {
                let pattern = TermPattern::new(&term.text);
                for (offset, matched) in pattern.find_matches(stripped) {
                    let span = (offset + removed)..(offset + removed + matched.len());
                    if claimed.iter().any(|range| intersects(range, &span)) {
                        continue;
                    }
                    let from = position_at(raw, span.start);
                    let to = position_at(raw, span.end);
                    links.push(PotentialLink {
                        id: LinkId::from_range(from, to),
                        match_text: matched.to_string(),
                        preview: preview_window(
                            stripped,
                            offset,
                            offset + matched.len(),
                            self.preview_context,
                        ),
                        linked_title: other.file_name.clone(),
                        linked_stem: other.stem.clone(),
                        linked_aliases: aliases.to_vec(),
                        matched_alias: match term.origin {
                            TermOrigin::Title => None,
                            TermOrigin::Alias => Some(term.text.clone()),
                        },
                        from,
                        to,
                    });
                    claimed.push(span);
                }
            }
        }

        links
    }

    /// Scans every document in the corpus.
    ///
    /// Documents are visited with the same comparator used for candidate
    /// priority, so whole-corpus output order is deterministic too.
    pub fn scan_corpus(&self) -> Vec<DocumentLinks> {
        let mut documents: Vec<&Document> = self.corpus.documents().iter().collect();
        sort_by_priority(&mut documents);
        documents
            .into_iter()
            .map(|document| DocumentLinks {
                path: document.rel_path.clone(),
                title: document.stem.clone(),
                links: self.scan_document(document),
            })
            .collect()
    }

    /// Candidate documents for a scan of `document`: every other document,
    /// longest title first, enumeration order on ties.
    fn candidates_for(&self, document: &Document) -> Vec<&'c Document> {
        let mut candidates: Vec<&Document> = self
            .corpus
            .documents()
            .iter()
            .filter(|other| other.rel_path != document.rel_path)
            .collect();
        sort_by_priority(&mut candidates);
        candidates
    }
}

/// Orders documents by descending title length; the sort is stable, so
/// equal-length titles keep their corpus enumeration order.
fn sort_by_priority(documents: &mut [&Document]) {
    documents.sort_by(|a, b| b.stem.chars().count().cmp(&a.stem.chars().count()));
}

/// Half-open interval intersection.
fn intersects(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

#[cfg(test)]
mod tests {
    use notelink_document::Document;

    use super::*;

    /// A corpus over plain in-memory documents.
    struct MemCorpus(Vec<Document>);

    impl Corpus for MemCorpus {
        fn documents(&self) -> &[Document] {
            &self.0
        }

        fn aliases_of<'a>(&'a self, document: &'a Document) -> &'a [String] {
            &document.aliases
        }

        fn raw_text_of<'a>(&'a self, document: &'a Document) -> &'a str {
            &document.content
        }
    }

    fn doc(rel: &str, content: &str) -> Document {
        Document::new(rel, format!("/vault/{rel}"), content.to_string())
    }

    fn scan_first(corpus: &MemCorpus) -> Vec<PotentialLink> {
        Scanner::new(corpus).scan_document(&corpus.0[0])
    }

    #[test]
    fn finds_bare_mention_of_other_note() {
        let corpus = MemCorpus(vec![
            doc("Journal.md", "Met about Alpha today"),
            doc("Alpha.md", "the alpha note"),
        ]);
        let links = scan_first(&corpus);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].match_text, "Alpha");
        assert_eq!(links[0].linked_title, "Alpha.md");
        assert_eq!(links[0].linked_stem, "Alpha");
        assert_eq!(links[0].matched_alias, None);
        assert_eq!(links[0].from, crate::Position::new(0, 10));
        assert_eq!(links[0].to, crate::Position::new(0, 15));
    }

    #[test]
    fn never_matches_the_document_against_itself() {
        let corpus = MemCorpus(vec![doc("Alpha.md", "Alpha mentions Alpha")]);
        assert!(scan_first(&corpus).is_empty());
    }

    #[test]
    fn scanning_twice_yields_identical_results() {
        let corpus = MemCorpus(vec![
            doc("Journal.md", "Alpha and Beta and Alpha again"),
            doc("Alpha.md", "a"),
            doc("Beta.md", "b"),
        ]);
        let first = scan_first(&corpus);
        let second = scan_first(&corpus);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.match_text, b.match_text);
            assert_eq!((a.from, a.to), (b.from, b.to));
        }
    }

    #[test]
    fn accepted_spans_never_overlap() {
        let corpus = MemCorpus(vec![
            doc("Journal.md", "Long Title appears, Title too, Long Title again"),
            doc("Long Title.md", "x"),
            doc("Title.md", "y"),
        ]);
        let links = scan_first(&corpus);
        for (i, a) in links.iter().enumerate() {
            for b in &links[i + 1..] {
                let disjoint = a.to <= b.from || b.to <= a.from;
                assert!(disjoint, "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn longer_title_wins_overlap() {
        let corpus = MemCorpus(vec![
            doc("Journal.md", "Long Title appears here"),
            doc("Title.md", "y"),
            doc("Long Title.md", "x"),
        ]);
        let links = scan_first(&corpus);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].match_text, "Long Title");
        assert_eq!(links[0].linked_stem, "Long Title");
    }

    #[test]
    fn header_mentions_are_never_matched() {
        let corpus = MemCorpus(vec![
            doc("Journal.md", "---\ntitle: Alpha\n---\nAlpha in the body"),
            doc("Alpha.md", "x"),
        ]);
        let links = scan_first(&corpus);
        assert_eq!(links.len(), 1);
        // Raw text line 3 is the body; the header was excluded from the
        // search but the reported range is in raw coordinates.
        assert_eq!(links[0].from, crate::Position::new(3, 0));
        assert_eq!(links[0].to, crate::Position::new(3, 5));
    }

    #[test]
    fn referenced_mentions_are_skipped() {
        let corpus = MemCorpus(vec![
            doc("Journal.md", "See [[Alpha]] and Alpha again."),
            doc("Alpha.md", "x"),
        ]);
        let links = scan_first(&corpus);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].from, crate::Position::new(0, 18));
    }

    #[test]
    fn alias_matches_carry_the_alias() {
        let corpus = MemCorpus(vec![
            doc("Journal.md", "the white city fell"),
            doc("Minas Tirith.md", "---\naliases: [white city]\n---\nbody"),
        ]);
        let links = scan_first(&corpus);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].match_text, "white city");
        assert_eq!(links[0].matched_alias.as_deref(), Some("white city"));
        assert_eq!(links[0].linked_stem, "Minas Tirith");
        assert_eq!(links[0].linked_aliases, vec!["white city"]);
    }

    #[test]
    fn title_outranks_alias_of_same_document() {
        // "Gondor" is Gondor.md's title and Realm.md's alias; the title
        // belongs to the longer-stem document, which is processed first.
        let corpus = MemCorpus(vec![
            doc("Journal.md", "Gondor endures"),
            doc("Gondor.md", "x"),
            doc("Realm.md", "---\naliases: [Gondor]\n---\nbody"),
        ]);
        let links = scan_first(&corpus);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].linked_stem, "Gondor");
        assert_eq!(links[0].matched_alias, None);
    }

    #[test]
    fn equal_length_titles_keep_enumeration_order() {
        let corpus = MemCorpus(vec![
            doc("Journal.md", "Alpha or Gamma"),
            doc("Alpha.md", "x"),
            doc("Gamma.md", "y"),
        ]);
        let links = scan_first(&corpus);
        assert_eq!(links.len(), 2);
        // Alpha enumerates first among the equal-length candidates.
        assert_eq!(links[0].linked_stem, "Alpha");
        assert_eq!(links[1].linked_stem, "Gamma");
    }

    #[test]
    fn id_is_stable_across_unrelated_edits() {
        let before = MemCorpus(vec![
            doc("Journal.md", "intro\nAlpha stays here\nold tail"),
            doc("Alpha.md", "x"),
        ]);
        let after = MemCorpus(vec![
            doc("Journal.md", "intro\nAlpha stays here\nnew tail, edited"),
            doc("Alpha.md", "x"),
        ]);
        let first = scan_first(&before);
        let second = scan_first(&after);
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert_eq!(first[0].id, second[0].id);
        assert_eq!(first[0].id.to_string(), "1-0-1-5");
    }

    #[test]
    fn preview_reflects_surrounding_text() {
        let corpus = MemCorpus(vec![
            doc("Journal.md", "before Alpha after"),
            doc("Alpha.md", "x"),
        ]);
        let links = scan_first(&corpus);
        assert_eq!(links[0].preview, "... before Alpha after ...");
    }

    #[test]
    fn scan_corpus_visits_every_document() {
        let corpus = MemCorpus(vec![
            doc("Alpha.md", "mentions Beta"),
            doc("Beta.md", "mentions Alpha"),
        ]);
        let reports = Scanner::new(&corpus).scan_corpus();
        assert_eq!(reports.len(), 2);
        for report in &reports {
            assert_eq!(report.links.len(), 1);
            assert_ne!(report.links[0].linked_stem, report.title);
        }
    }

    #[test]
    fn multiline_title_priority_across_lines() {
        let corpus = MemCorpus(vec![
            doc("Journal.md", "first Title\nthen Long Title"),
            doc("Long Title.md", "x"),
            doc("Title.md", "y"),
        ]);
        let links = scan_first(&corpus);
        let stems: Vec<&str> = links.iter().map(|l| l.linked_stem.as_str()).collect();
        // Long Title claims its span first; the bare Title on line 0 still
        // belongs to Title.
        assert_eq!(stems, vec!["Long Title", "Title"]);
    }
}
