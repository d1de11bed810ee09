//! Single-term matching over stripped document text.
//!
//! A [`TermPattern`] finds case-insensitive occurrences of one title or
//! alias that stand as a whole token in running prose and are not already
//! part of a `[[..]]` reference. The term is always escaped before being
//! compiled, so titles containing regex metacharacters (`C++`, `1.0 (beta)`)
//! are matched literally.

use regex::{Regex, RegexBuilder};

/// Punctuation that may sit directly against a match, besides whitespace
/// and asterisks.
const BOUNDARY_PUNCT: &[char] = &[
    '?', '.', '!', ',', ';', ':', '-', '/', '\\', '`', '~', '=',
];

/// A compiled matcher for one search term.
#[derive(Debug)]
pub struct TermPattern {
    /// The compiled case-insensitive literal, or `None` for a blank term.
    regex: Option<Regex>,
}

impl TermPattern {
    /// Compiles a matcher for `term`.
    ///
    /// A blank term never matches. The registry filters blanks out before
    /// this point; accepting them here keeps the matcher total.
    pub fn new(term: &str) -> Self {
        if term.trim().is_empty() {
            return Self { regex: None };
        }
        let regex = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()
            .expect("escaped literal always compiles");
        Self { regex: Some(regex) }
    }

    /// Finds all occurrences of the term in `text` that survive the token
    /// boundary and reference exclusion guards.
    ///
    /// Yields `(byte offset, matched text)` pairs in left-to-right order.
    pub fn find_matches<'a>(
        &'a self,
        text: &'a str,
    ) -> impl Iterator<Item = (usize, &'a str)> + 'a {
        self.regex
            .iter()
            .flat_map(move |regex| regex.find_iter(text))
            .filter(move |m| standalone_token(text, m.start(), m.end()))
            .filter(move |m| !inside_reference(text, m.start()))
            .map(|m| (m.start(), m.as_str()))
    }
}

/// Whether `c` counts as a word character for boundary purposes.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Checks that the match at `[start, end)` stands as a whole token: both
/// edges sit against text boundaries, whitespace, asterisks, listed
/// punctuation, or a word/non-word transition.
fn standalone_token(text: &str, start: usize, end: usize) -> bool {
    let matched = &text[start..end];
    let (Some(first), Some(last)) = (matched.chars().next(), matched.chars().next_back()) else {
        return false;
    };
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    edge_ok(before, first) && edge_ok(after, last)
}

/// Whether a match edge is acceptable against its neighboring character.
fn edge_ok(neighbor: Option<char>, edge: char) -> bool {
    match neighbor {
        None => true,
        Some(c) => {
            c.is_whitespace()
                || c == '*'
                || BOUNDARY_PUNCT.contains(&c)
                || (is_word_char(c) != is_word_char(edge))
        }
    }
}

/// Checks whether the text before `start` leaves a `[[` opener unterminated
/// on the candidate's own line, which means the match already sits inside a
/// reference's target or its `|`-delimited display text.
///
/// A reference that closed with `]]` before the candidate does not block it,
/// and an opener left dangling on an earlier line is not considered.
fn inside_reference(text: &str, start: usize) -> bool {
    let line_start = text[..start].rfind('\n').map_or(0, |newline| newline + 1);
    let before = &text[line_start..start];
    match before.rfind("[[") {
        Some(open) => !before[open..].contains("]]"),
        None => false,
    }
}
