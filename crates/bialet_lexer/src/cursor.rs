//! Byte cursor over borrowed source text.
//!
//! Reads past the end of the source return `0x00`, which plays the role of
//! a sentinel: byte predicates used by the patterns all reject it, so scans
//! stop at the end without extra bounds checks at the call site.
//!
//! # Interior Null Bytes
//!
//! A null at `pos < len` is part of the source; a null at `pos >= len` is
//! the virtual sentinel. [`Cursor::is_eof`] compares positions, never bytes.

#[cfg(test)]
mod tests;

/// Lightweight cursor over the bytes of a `&str`.
///
/// The cursor is [`Copy`], so patterns can probe ahead on a copy without
/// disturbing the classifier's position.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at offset 0.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Create a cursor at `pos`.
    ///
    /// `pos` must lie on a character boundary (at most `source.len()`).
    pub fn at(source: &'a str, pos: usize) -> Self {
        debug_assert!(source.is_char_boundary(pos), "cursor must start on a char boundary");
        Self { source, pos }
    }

    /// Byte at the current position, or `0x00` past the end.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(0)
    }

    /// Byte one position ahead of current, or `0x00` past the end.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(1)
    }

    /// Byte `n` positions ahead of current, or `0x00` past the end.
    #[inline]
    pub fn byte_at(&self, n: usize) -> u8 {
        self.source.as_bytes().get(self.pos + n).copied().unwrap_or(0)
    }

    /// Byte immediately before the current position, if any.
    #[inline]
    pub fn prev(&self) -> Option<u8> {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.source.as_bytes().get(i).copied())
    }

    /// Advance by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Advance past one full UTF-8 character. No-op at EOF.
    #[inline]
    pub fn advance_char(&mut self) {
        if let Some(c) = self.rest().chars().next() {
            self.pos += c.len_utf8();
        }
    }

    /// Returns `true` once every byte of the source has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Unconsumed remainder of the source.
    #[inline]
    pub fn rest(&self) -> &'a str {
        self.source.get(self.pos..).unwrap_or("")
    }

    /// Unconsumed remainder as bytes.
    #[inline]
    pub fn rest_bytes(&self) -> &'a [u8] {
        self.rest().as_bytes()
    }

    /// Returns `true` if the remainder starts with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest_bytes().starts_with(prefix.as_bytes())
    }

    /// Advance while `pred` accepts the current byte. Returns the count.
    ///
    /// `pred(0)` must return `false`, otherwise the loop would run off into
    /// the virtual sentinel region forever.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.pos;
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Advance while `pred` accepts the current character. Returns the
    /// number of bytes consumed.
    pub fn eat_chars_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let len: usize = self
            .rest()
            .chars()
            .take_while(|&c| pred(c))
            .map(char::len_utf8)
            .sum();
        self.pos += len;
        len
    }

    /// Advance to the next `\n` (not consumed) or EOF.
    pub fn eat_until_newline_or_eof(&mut self) {
        self.pos += memchr::memchr(b'\n', self.rest_bytes()).unwrap_or(self.rest_bytes().len());
    }

    /// Advance to the first occurrence of `a` or `b`, or EOF.
    pub fn eat_until2(&mut self, a: u8, b: u8) {
        self.pos += memchr::memchr2(a, b, self.rest_bytes()).unwrap_or(self.rest_bytes().len());
    }

    /// Advance to the first occurrence of `a`, `b` or `c`, or EOF.
    pub fn eat_until3(&mut self, a: u8, b: u8, c: u8) {
        self.pos +=
            memchr::memchr3(a, b, c, self.rest_bytes()).unwrap_or(self.rest_bytes().len());
    }

    /// Slice of the source between `start` and the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.source.get(start..self.pos).unwrap_or("")
    }
}
