//! Reportable scan results.

use serde::Serialize;

use crate::{LinkId, Position};

/// A surfaced, non-overlapping occurrence of another note's title or alias.
///
/// Produced once per scan pass and immutable afterwards. Any edit to the
/// owning note makes every previously reported link for it stale; the host
/// must re-scan rather than reuse old ranges.
#[derive(Debug, Clone, Serialize)]
pub struct PotentialLink {
    /// Stable identifier derived from the `from`/`to` range.
    pub id: LinkId,
    /// The exact text matched in the note's content.
    pub match_text: String,
    /// A bounded preview of the text surrounding the match.
    pub preview: String,
    /// File name (with extension) of the linked note.
    pub linked_title: String,
    /// File stem — the canonical title — of the linked note.
    pub linked_stem: String,
    /// Declared aliases of the linked note, in declaration order.
    pub linked_aliases: Vec<String>,
    /// The alias that matched, when the match came from an alias rather
    /// than the canonical title.
    pub matched_alias: Option<String>,
    /// Start of the match in the original, unstripped text.
    pub from: Position,
    /// End of the match (half-open) in the original, unstripped text.
    pub to: Position,
}

/// Builds the `... context ...` preview window around `[start, end)`,
/// taking up to `context` characters on either side without splitting a
/// character.
pub(crate) fn preview_window(text: &str, start: usize, end: usize, context: usize) -> String {
    let window_start = text[..start]
        .char_indices()
        .rev()
        .take(context)
        .last()
        .map_or(start, |(i, _)| i);
    let window_end = text[end..]
        .char_indices()
        .nth(context)
        .map_or(text.len(), |(i, _)| end + i);
    format!("... {} ...", &text[window_start..window_end])
}
