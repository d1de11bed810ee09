//! Error types for the notelink-scan crate.

use thiserror::Error;

/// Errors that can occur when applying an edit span to document text.
///
/// A failed rewrite produces no output at all; the input text is never
/// partially rewritten.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RewriteError {
    /// The span names a line index past the end of the text.
    #[error("line {line} out of bounds: text has {line_count} lines")]
    LineOutOfBounds {
        /// The offending line index.
        line: usize,
        /// Number of lines in the supplied text.
        line_count: usize,
    },

    /// The span names a column past the end of its line.
    #[error("column {column} out of bounds on line {line}: line has {line_len} characters")]
    ColumnOutOfBounds {
        /// Line the column was addressed on.
        line: usize,
        /// The offending column index.
        column: usize,
        /// Number of characters in that line.
        line_len: usize,
    },
}
