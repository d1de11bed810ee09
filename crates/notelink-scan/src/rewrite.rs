//! Span replacement over raw document text.
//!
//! The rewriter is the second half of the engine's contract: once a host
//! has chosen a replacement for a reported match, [`replace_span`] applies
//! it to exactly that (line, column) region and nothing else. It is pure
//! and holds no state; staleness is the caller's problem — a span computed
//! before the most recent edit addresses coordinates that may no longer
//! mean what they did, and must be re-derived by a fresh scan.

use serde::Serialize;

use crate::{Position, RewriteError};

/// A half-open (line, column) region to replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Start position, inclusive.
    pub from: Position,
    /// End position, exclusive.
    pub to: Position,
}

impl Span {
    /// Constructs a span from its endpoints.
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

/// Replaces exactly `span` in `text` with `replacement`.
///
/// Lines split on `\n`; columns address characters within a line. A span
/// on a single line splices that line; a span across lines rebuilds the
/// start and end lines and drops every line strictly between them. Bounds
/// are validated up front: on error no output text is produced and `text`
/// is untouched.
pub fn replace_span(text: &str, span: Span, replacement: &str) -> Result<String, RewriteError> {
    let lines: Vec<&str> = text.split('\n').collect();

    check_line(span.from.line, lines.len())?;
    check_line(span.to.line, lines.len())?;
    let start_byte = column_byte(lines[span.from.line], span.from.line, span.from.column)?;
    let end_byte = column_byte(lines[span.to.line], span.to.line, span.to.column)?;

    let mut rebuilt: Vec<String> = Vec::with_capacity(lines.len());
    rebuilt.extend(lines[..span.from.line].iter().map(|line| (*line).to_string()));

    if span.from.line == span.to.line {
        let line = lines[span.from.line];
        rebuilt.push(format!(
            "{}{}{}",
            &line[..start_byte],
            replacement,
            &line[end_byte..]
        ));
    } else {
        rebuilt.push(format!(
            "{}{}",
            &lines[span.from.line][..start_byte],
            replacement
        ));
        rebuilt.push(lines[span.to.line][end_byte..].to_string());
    }

    rebuilt.extend(
        lines[span.to.line + 1..]
            .iter()
            .map(|line| (*line).to_string()),
    );

    Ok(rebuilt.join("\n"))
}

/// Validates a line index against the line count.
fn check_line(line: usize, line_count: usize) -> Result<(), RewriteError> {
    if line >= line_count {
        return Err(RewriteError::LineOutOfBounds { line, line_count });
    }
    Ok(())
}

/// Maps a character column on `line` to a byte index, validating bounds.
/// A column equal to the line's character count addresses its end.
fn column_byte(line: &str, line_idx: usize, column: usize) -> Result<usize, RewriteError> {
    let mut chars = 0;
    for (byte, _) in line.char_indices() {
        if chars == column {
            return Ok(byte);
        }
        chars += 1;
    }
    if chars == column {
        Ok(line.len())
    } else {
        Err(RewriteError::ColumnOutOfBounds {
            line: line_idx,
            column,
            line_len: chars,
        })
    }
}
