//! Copyable cursor over the text being tokenized.
//!
//! The cursor advances byte-by-byte through a `&str`. Reads past the end
//! return `0x00`, so byte predicates terminate at EOF without callers
//! checking bounds first. Interior null bytes also read as `0x00`; use
//! [`is_eof()`](Cursor::is_eof) to tell them apart.
//!
//! Rule matchers receive a cursor by value and advance their own copy, so
//! a failed match never moves the scanner.

/// Byte cursor over borrowed source text.
///
/// [`Copy`] makes snapshots free: the scanner hands a copy to each rule in
/// turn and only commits the winner's length.
///
/// # Invariant
///
/// `pos` always sits on a UTF-8 character boundary of `src` and never
/// exceeds `src.len()`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at byte 0.
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current, or `0x00` past EOF.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    #[inline]
    fn byte_at(&self, pos: usize) -> u8 {
        self.src.as_bytes().get(pos).copied().unwrap_or(0)
    }

    /// The character starting at the current position.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character immediately before the current position.
    ///
    /// `None` at the start of the input.
    #[inline]
    pub fn prev_char(&self) -> Option<char> {
        self.src[..self.pos].chars().next_back()
    }

    /// Advance the cursor by one byte.
    ///
    /// Only valid on ASCII bytes; use [`advance_n`](Self::advance_n) with a
    /// character's UTF-8 width otherwise.
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(self.current().is_ascii(), "advance() over non-ASCII byte");
        self.advance_n(1);
    }

    /// Advance the cursor by `n` bytes, clamped to the input length.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.src.len());
        debug_assert!(self.src.is_char_boundary(self.pos));
    }

    /// Returns `true` once every byte of the input has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.src.len()
    }

    /// The whole source this cursor walks.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.src
    }

    /// Unconsumed text from the current position to EOF.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// Extract a source substring as `&str`.
    ///
    /// # Contract
    ///
    /// `start..end` must fall within the source on character boundaries.
    /// Offsets produced by this cursor always do.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.src[start..end]
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Stops at EOF regardless of `pred(0)`. `pred` must only accept ASCII
    /// bytes so the cursor stays on a character boundary.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance while `pred` returns `true` for the current character.
    #[inline]
    pub fn eat_while_char(&mut self, pred: impl Fn(char) -> bool) {
        let consumed: usize = self
            .rest()
            .chars()
            .take_while(|&c| pred(c))
            .map(char::len_utf8)
            .sum();
        self.pos += consumed;
    }

    /// Advance until `byte` is found or EOF is reached.
    ///
    /// Returns `true` when `byte` was found; the cursor is then positioned
    /// on it. Otherwise the cursor is left at EOF.
    pub fn eat_until(&mut self, byte: u8) -> bool {
        debug_assert!(byte.is_ascii(), "eat_until needle must be ASCII");
        match memchr::memchr(byte, self.rest().as_bytes()) {
            Some(offset) => {
                self.pos += offset;
                true
            }
            None => {
                self.pos = self.src.len();
                false
            }
        }
    }
}
