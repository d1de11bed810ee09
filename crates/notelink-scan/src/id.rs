//! Stable identifiers for potential links.
//!
//! Ids are represented as `fromLine-fromColumn-toLine-toColumn` strings,
//! derived purely from a match's (line, column) range and never from its
//! content. Re-scanning a document therefore reproduces the same id for an
//! unchanged physical location, which is what lets a host correlate a match
//! before and after an unrelated edit elsewhere in the note.

use std::{fmt, str::FromStr};

use serde::Serialize;
use thiserror::Error;

use crate::Position;

/// Errors that can occur when parsing a link id.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input did not match the `line-col-line-col` format.
    #[error("invalid link id format")]
    InvalidFormat,
}

/// A stable identifier for a potential link, derived from its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkId {
    /// Start of the identified range.
    pub from: Position,
    /// End of the identified range.
    pub to: Position,
}

impl LinkId {
    /// Derives the id for a (from, to) range.
    pub fn from_range(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// Parses an id from `line-col-line-col` format.
    pub fn parse(id: &str) -> Result<Self, IdError> {
        let fields: Vec<usize> = id
            .split('-')
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map_err(|_| IdError::InvalidFormat)?;
        let &[from_line, from_column, to_line, to_column] = fields.as_slice() else {
            return Err(IdError::InvalidFormat);
        };
        Ok(Self {
            from: Position::new(from_line, from_column),
            to: Position::new(to_line, to_column),
        })
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.from.line, self.from.column, self.to.line, self.to.column
        )
    }
}

impl FromStr for LinkId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for LinkId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
