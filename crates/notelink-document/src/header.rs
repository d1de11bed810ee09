//! Metadata header parsing and stripping.
//!
//! Notes may start with a `---`-fenced metadata header:
//!
//! ```text
//! ---
//! title: Minas Tirith
//! aliases: [white city, Mundburg]
//! ---
//!
//! Body text.
//! ```
//!
//! The scanner must never match text inside the header, so [`strip_header`]
//! removes it as one contiguous block and reports how many bytes were
//! removed; the engine uses that count to shift stripped-text offsets back
//! into raw-text coordinates. [`parse_header`] reads the same block as YAML
//! to extract the declared title and aliases.
//!
//! Only this exact shape counts as a header: the file's first three
//! characters are `---` followed by a newline, the first fenced line is
//! `key:`-shaped, and a later line starts with a closing `---`. Anything
//! else (including `+++` fences or a fence that never closes) is treated as
//! ordinary body text.

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};

/// Byte length of the opening fence `---\n`.
const OPENING_FENCE_LEN: usize = 4;
/// The closing fence, searched at a line start.
const CLOSING_FENCE: &str = "\n---";

/// Metadata declared in a note's header.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Header {
    /// Display title declared in the header.
    pub title: Option<String>,
    /// Alias titles this note may be referenced by. Accepts a single
    /// string or a sequence.
    #[serde(default)]
    #[serde_as(as = "OneOrMany<_>")]
    pub aliases: Vec<String>,
}

/// Strips a leading metadata header from `raw`.
///
/// Returns the remaining text and the number of bytes removed; the removed
/// count is always `raw.len() - stripped.len()`. The newline after the
/// closing fence is not part of the header span, so the stripped text of a
/// headered note starts with a newline — exactly the shape offset
/// re-alignment downstream expects. With no header, the text comes back
/// unchanged with zero removed.
pub fn strip_header(raw: &str) -> (&str, usize) {
    match header_end(raw) {
        Some(end) => (&raw[end..], end),
        None => (raw, 0),
    }
}

/// Parses the metadata header of `raw`, if one is present and well-formed.
///
/// Malformed YAML inside an otherwise valid fence yields `None`; callers
/// treat such notes as having no declared metadata.
pub fn parse_header(raw: &str) -> Option<Header> {
    let end = header_end(raw)?;
    let yaml = &raw[OPENING_FENCE_LEN..end - CLOSING_FENCE.len()];
    serde_yaml::from_str(yaml).ok()
}

/// Finds the byte length of the leading header span, fence to fence, via a
/// single leading-anchored scan. `None` when `raw` does not start with a
/// recognized header.
fn header_end(raw: &str) -> Option<usize> {
    let after_fence = raw.strip_prefix("---\n")?;
    let first_line = after_fence.lines().next()?;
    if !is_key_line(first_line) {
        return None;
    }
    let close = after_fence.find(CLOSING_FENCE)?;
    Some(OPENING_FENCE_LEN + close + CLOSING_FENCE.len())
}

/// Whether a line is `key:`-shaped: a nonempty run of word characters
/// followed by a colon.
fn is_key_line(line: &str) -> bool {
    match line.find(':') {
        Some(0) | None => false,
        Some(colon) => line[..colon]
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_standard_header() {
        let raw = "---\ntitle: Alpha\n---\nBody text";
        let (stripped, removed) = strip_header(raw);
        assert_eq!(stripped, "\nBody text");
        assert_eq!(removed, raw.len() - stripped.len());
        assert_eq!(removed, 20);
    }

    #[test]
    fn no_header_means_zero_removed() {
        let raw = "Just body text\nwith lines";
        assert_eq!(strip_header(raw), (raw, 0));
    }

    #[test]
    fn fence_must_open_the_file() {
        let raw = "intro\n---\ntitle: Alpha\n---\n";
        assert_eq!(strip_header(raw), (raw, 0));
    }

    #[test]
    fn first_fenced_line_must_be_key_shaped() {
        let raw = "---\nnot a key line\n---\nBody";
        assert_eq!(strip_header(raw), (raw, 0));
        let raw = "---\n---\nBody";
        assert_eq!(strip_header(raw), (raw, 0));
    }

    #[test]
    fn unclosed_fence_is_not_a_header() {
        let raw = "---\ntitle: Alpha\nBody continues forever";
        assert_eq!(strip_header(raw), (raw, 0));
    }

    #[test]
    fn header_removal_keeps_remaining_line_count() {
        let raw = "---\ntitle: Alpha\ntags: [a]\n---\nline one\nline two";
        let (stripped, removed) = strip_header(raw);
        assert_eq!(stripped, "\nline one\nline two");
        assert_eq!(removed + stripped.len(), raw.len());
    }

    #[test]
    fn parses_title_and_aliases() {
        let raw = "---\ntitle: Minas Tirith\naliases: [white city, Mundburg]\n---\nBody";
        let header = parse_header(raw).unwrap();
        assert_eq!(header.title.as_deref(), Some("Minas Tirith"));
        assert_eq!(header.aliases, vec!["white city", "Mundburg"]);
    }

    #[test]
    fn parses_single_alias_as_scalar() {
        let raw = "---\naliases: white city\n---\nBody";
        let header = parse_header(raw).unwrap();
        assert_eq!(header.aliases, vec!["white city"]);
    }

    #[test]
    fn parses_block_sequence_aliases() {
        let raw = "---\ntitle: Doc\naliases:\n  - one\n  - two\n---\nBody";
        let header = parse_header(raw).unwrap();
        assert_eq!(header.aliases, vec!["one", "two"]);
    }

    #[test]
    fn extra_keys_are_ignored() {
        let raw = "---\ntitle: Doc\nauthor: someone\ndate: 2024-01-01\n---\nBody";
        let header = parse_header(raw).unwrap();
        assert_eq!(header.title.as_deref(), Some("Doc"));
        assert!(header.aliases.is_empty());
    }

    #[test]
    fn malformed_yaml_parses_as_no_header() {
        let raw = "---\ntitle: [unclosed\n---\nBody";
        assert!(parse_header(raw).is_none());
        // Stripping still removes the fenced block; exclusion from matching
        // does not depend on the YAML being valid.
        let (stripped, _) = strip_header(raw);
        assert_eq!(stripped, "\nBody");
    }

    #[test]
    fn no_header_parses_as_none() {
        assert!(parse_header("plain body").is_none());
    }

    #[test]
    fn closing_fence_may_carry_trailing_dashes() {
        // The scan stops at the first line-leading ---; extra dashes stay
        // in the body.
        let raw = "---\nkey: v\n----\nBody";
        let (stripped, removed) = strip_header(raw);
        assert_eq!(stripped, "-\nBody");
        assert_eq!(removed, raw.len() - stripped.len());
    }
}
