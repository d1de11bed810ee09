//! Offset to line/column translation.
//!
//! Accepted matches are reported to hosts as (line, column) ranges against
//! the original, unstripped text, because that is the coordinate system an
//! editor-facing caller can act on. Lines count newline characters; columns
//! count characters (not bytes) since the last newline.

use serde::Serialize;
use std::fmt;

/// A zero-based line/column position within document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    /// Zero-based line index (number of newlines strictly before the offset).
    pub line: usize,
    /// Zero-based character column within the line.
    pub column: usize,
}

impl Position {
    /// Constructs a position from raw line/column indices.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Translates a byte offset in `text` into a [`Position`].
///
/// The position is recomputed from the text prefix on every call rather
/// than tracked incrementally, so results do not depend on call order.
/// `offset` must lie on a character boundary of `text`.
pub fn position_at(text: &str, offset: usize) -> Position {
    let prefix = &text[..offset];
    match prefix.rfind('\n') {
        Some(newline) => Position {
            line: prefix.matches('\n').count(),
            column: prefix[newline + 1..].chars().count(),
        },
        None => Position {
            line: 0,
            column: prefix.chars().count(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_of_text() {
        assert_eq!(position_at("hello", 0), Position::new(0, 0));
    }

    #[test]
    fn within_first_line() {
        assert_eq!(position_at("hello world", 6), Position::new(0, 6));
    }

    #[test]
    fn start_of_second_line() {
        assert_eq!(position_at("one\ntwo", 4), Position::new(1, 0));
    }

    #[test]
    fn within_later_line() {
        let text = "one\ntwo\nthree four";
        let offset = text.find("four").unwrap();
        assert_eq!(position_at(text, offset), Position::new(2, 6));
    }

    #[test]
    fn offset_at_newline_belongs_to_current_line() {
        // The newline itself has not been crossed yet.
        assert_eq!(position_at("ab\ncd", 2), Position::new(0, 2));
    }

    #[test]
    fn columns_count_characters_not_bytes() {
        let text = "héllo wörld";
        let offset = text.find("wörld").unwrap();
        assert_eq!(position_at(text, offset), Position::new(0, 6));
    }

    #[test]
    fn end_of_text() {
        assert_eq!(position_at("one\ntwo", 7), Position::new(1, 3));
    }

    #[test]
    fn independent_of_call_order() {
        let text = "alpha\nbeta\ngamma";
        let late = position_at(text, 12);
        let early = position_at(text, 2);
        assert_eq!(late, Position::new(2, 1));
        assert_eq!(early, Position::new(0, 2));
    }
}
