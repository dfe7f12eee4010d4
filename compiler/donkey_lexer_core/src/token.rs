//! Classified spans.

use crate::{Category, Span};

/// A classified span of the input.
///
/// Borrows its text from the tokenized source; the caller owns both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    /// Exact source text of the span.
    pub text: &'src str,
    /// Byte offsets of `text` in the source.
    pub span: Span,
    pub category: Category,
}

impl<'src> Token<'src> {
    #[inline]
    pub const fn new(text: &'src str, span: Span, category: Category) -> Self {
        Self {
            text,
            span,
            category,
        }
    }

    /// Length of the token in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always `false` for tokens produced by the scanner.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
