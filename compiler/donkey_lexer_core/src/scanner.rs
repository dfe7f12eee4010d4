//! Lazy token stream over a rule table.
//!
//! [`Tokens`] walks the input once, asking the [`RuleTable`] to classify
//! the span at the cursor and then advancing past it. Spans are
//! contiguous and non-empty, so concatenating token texts rebuilds the
//! input exactly.

use std::iter::FusedIterator;

use crate::cursor::Cursor;
use crate::{RuleTable, Span, Token};

/// Iterator of [`Token`]s for one input.
///
/// Cloning snapshots the scan position; [`restart`](Self::restart) rewinds
/// to the beginning. The cursor is the only state and lives as long as the
/// iterator.
#[derive(Clone, Debug)]
pub struct Tokens<'t, 'src> {
    table: &'t RuleTable,
    cursor: Cursor<'src>,
}

impl<'t, 'src> Tokens<'t, 'src> {
    /// Start scanning `source` at byte 0.
    pub fn new(table: &'t RuleTable, source: &'src str) -> Self {
        Self {
            table,
            cursor: Cursor::new(source),
        }
    }

    /// Rewind to the beginning of the input.
    pub fn restart(&mut self) {
        self.cursor = Cursor::new(self.cursor.source());
    }

    /// Byte offset of the next token.
    pub fn offset(&self) -> usize {
        self.cursor.pos()
    }

    /// The input being scanned.
    pub fn source(&self) -> &'src str {
        self.cursor.source()
    }

    /// The rule table classifying this stream.
    pub fn table(&self) -> &'t RuleTable {
        self.table
    }
}

impl<'src> Iterator for Tokens<'_, 'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        if self.cursor.is_eof() {
            return None;
        }
        let start = self.cursor.pos();
        let (category, len) = self.table.classify(self.cursor);
        debug_assert!(len > 0, "classify made no progress at {start}");
        self.cursor.advance_n(len);
        let end = self.cursor.pos();
        Some(Token::new(
            self.cursor.slice_from(start),
            Span::from_range(start..end),
            category,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.source_len() - self.cursor.pos();
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl FusedIterator for Tokens<'_, '_> {}

#[cfg(test)]
mod tests;
