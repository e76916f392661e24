//! Hand-written matchers for the rule tables.
//!
//! Each [`Pattern`] tests the text at a cursor position and reports how
//! many bytes it would consume. Matching is anchored at the cursor and never
//! returns a zero-length match, so the classifier always makes progress.
//!
//! Delimiters in this grammar are all ASCII, so byte-level scanning (with
//! `memchr` for the long runs) always stops on a character boundary.

use crate::cursor::Cursor;


/// Bytes accepted by an operator run.
const OPERATOR_BYTES: &[u8] = b"!%&*+-./:<=>?\\^|~";

/// A text pattern anchored at the cursor.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Pattern {
    /// One or more whitespace characters (Unicode-aware).
    Whitespace,
    /// An exact literal.
    Literal(&'static str),
    /// Exactly one byte from the set.
    OneOf(&'static [u8]),
    /// One of the words, not preceded by `.` and followed by a word boundary.
    Words(&'static [&'static str]),
    /// `<` or `</`, a lowercase ASCII letter, then through the next `>`.
    HtmlTag,
    /// `//` up to, not including, the next newline.
    LineComment,
    /// `#` attribute or shebang line, optionally with a parenthesised
    /// argument list that may run across lines.
    SpecialComment,
    /// A run of operator characters.
    OperatorRun,
    /// `[a-z][a-zA-Z_0-9]*`
    LowerName,
    /// `[A-Z][a-zA-Z_0-9]*`
    UpperName,
    /// `__[a-zA-Z_0-9]*`
    ClassVariable,
    /// `_[a-zA-Z_0-9]*`
    InstanceVariable,
    /// `0x` followed by at least one hex digit.
    HexNumber,
    /// Digits, optional fraction, optional exponent.
    Decimal,
    /// `"""` through the next `"""`.
    RawString,
    /// A backtick-quoted query with backslash escapes.
    Backtick,
    /// Block comment body: text containing neither `/*` nor `*/`.
    CommentText,
    /// `\` followed by one byte from the set.
    CharEscape(&'static [u8]),
    /// `\` + `marker` + exactly `digits` hex digits.
    HexEscape { marker: u8, digits: u8 },
    /// String body: bytes other than `\`, `%` and the quote.
    StringText { quote: u8 },
    /// `<`, at least one byte, `>`.
    MarkupTag,
    /// Markup body: up to the next `\`, `<` or `{{`.
    MarkupText,
}

impl Pattern {
    /// Length in bytes of the match at the cursor, or `None`.
    pub fn match_at(self, cursor: Cursor<'_>) -> Option<usize> {
        let len = match self {
            Pattern::Whitespace => cursor.clone_eat(|c| c.eat_chars_while(is_space)),
            Pattern::Literal(lit) => {
                if cursor.starts_with(lit) {
                    lit.len()
                } else {
                    0
                }
            }
            Pattern::OneOf(set) => usize::from(!cursor.is_eof() && set.contains(&cursor.current())),
            Pattern::Words(words) => words_at(cursor, words),
            Pattern::HtmlTag => html_tag(cursor),
            Pattern::LineComment => line_comment(cursor),
            Pattern::SpecialComment => special_comment(cursor.rest_bytes()),
            Pattern::OperatorRun => cursor.clone_eat(|c| c.eat_while(|b| OPERATOR_BYTES.contains(&b))),
            Pattern::LowerName => name_with_head(cursor, |b| b.is_ascii_lowercase()),
            Pattern::UpperName => name_with_head(cursor, |b| b.is_ascii_uppercase()),
            Pattern::ClassVariable => {
                if cursor.starts_with("__") {
                    2 + ident_tail(cursor, 2)
                } else {
                    0
                }
            }
            Pattern::InstanceVariable => {
                if cursor.current() == b'_' {
                    1 + ident_tail(cursor, 1)
                } else {
                    0
                }
            }
            Pattern::HexNumber => hex_number(cursor),
            Pattern::Decimal => decimal(cursor.rest_bytes()),
            Pattern::RawString => raw_string(cursor.rest_bytes()),
            Pattern::Backtick => backtick(cursor.rest()),
            Pattern::CommentText => comment_text(cursor.rest_bytes()),
            Pattern::CharEscape(set) => {
                if cursor.current() == b'\\' && set.contains(&cursor.peek()) {
                    2
                } else {
                    0
                }
            }
            Pattern::HexEscape { marker, digits } => hex_escape(cursor, marker, digits),
            Pattern::StringText { quote } => cursor.clone_eat(|c| c.eat_until3(b'\\', quote, b'%')),
            Pattern::MarkupTag => markup_tag(cursor.rest_bytes()),
            Pattern::MarkupText => markup_text(cursor.rest_bytes()),
        };
        (len > 0).then_some(len)
    }
}

impl Cursor<'_> {
    /// Run `f` on a copy of the cursor and return how far the copy moved.
    #[inline]
    fn clone_eat<R>(self, f: impl FnOnce(&mut Self) -> R) -> usize {
        let mut probe = self;
        let start = probe.pos();
        f(&mut probe);
        probe.pos() - start
    }
}

#[inline]
/// Unicode whitespace plus the ASCII separators `\x1c`..=`\x1f`.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Length of `[a-zA-Z_0-9]*` starting `skip` bytes past the cursor.
fn ident_tail(cursor: Cursor<'_>, skip: usize) -> usize {
    cursor
        .rest_bytes()
        .iter()
        .skip(skip)
        .take_while(|&&b| is_ident_byte(b))
        .count()
}

fn name_with_head(cursor: Cursor<'_>, head: impl Fn(u8) -> bool) -> usize {
    if head(cursor.current()) {
        1 + ident_tail(cursor, 1)
    } else {
        0
    }
}

/// Keyword lookup with the two context checks the grammar relies on: a
/// word right after `.` is a member name, and the whole word must match
/// (`forx` is not `for`).
fn words_at(cursor: Cursor<'_>, words: &[&str]) -> usize {
    if cursor.prev() == Some(b'.') {
        return 0;
    }
    let word = cursor.clone_eat(|c| c.eat_chars_while(|ch| ch.is_alphanumeric() || ch == '_'));
    let text = &cursor.rest()[..word];
    if words.contains(&text) {
        word
    } else {
        0
    }
}

fn html_tag(cursor: Cursor<'_>) -> usize {
    let bytes = cursor.rest_bytes();
    if bytes.first() != Some(&b'<') {
        return 0;
    }
    let name_start = if bytes.get(1) == Some(&b'/') { 2 } else { 1 };
    if !bytes.get(name_start).is_some_and(u8::is_ascii_lowercase) {
        return 0;
    }
    let after_name = name_start + 1;
    match memchr::memchr(b'>', &bytes[after_name..]) {
        Some(i) => after_name + i + 1,
        None => 0,
    }
}

fn line_comment(cursor: Cursor<'_>) -> usize {
    if cursor.starts_with("//") {
        cursor.clone_eat(Cursor::eat_until_newline_or_eof)
    } else {
        0
    }
}

/// `#.*?(\(.*?\))?$` with multi-line `$`.
///
/// The lazy body stops at the first end of line, unless a `(` is reached
/// first and some later `)` sits right before an end of line: then the
/// match runs through that `)`, even across newlines.
fn special_comment(bytes: &[u8]) -> usize {
    if bytes.first() != Some(&b'#') {
        return 0;
    }
    let at_line_end = |i: usize| matches!(bytes.get(i), None | Some(b'\n'));
    let mut args_possible = true;
    let mut pos = 1;
    loop {
        if args_possible && bytes.get(pos) == Some(&b'(') {
            // If no `)` after this `(` closes a line, none after a later `(`
            // will either.
            let close = memchr::memchr_iter(b')', &bytes[pos + 1..])
                .map(|i| pos + 1 + i)
                .find(|&q| at_line_end(q + 1));
            match close {
                Some(q) => return q + 1,
                None => args_possible = false,
            }
        }
        if at_line_end(pos) {
            return pos;
        }
        pos += 1;
    }
}

fn hex_number(cursor: Cursor<'_>) -> usize {
    if !cursor.starts_with("0x") {
        return 0;
    }
    let digits = cursor
        .rest_bytes()
        .iter()
        .skip(2)
        .take_while(|b| b.is_ascii_hexdigit())
        .count();
    if digits == 0 {
        0
    } else {
        2 + digits
    }
}

/// `\d+(\.\d+)?([eE][-+]?\d+)?`
fn decimal(bytes: &[u8]) -> usize {
    let digits_from = |i: usize| bytes.iter().skip(i).take_while(|b| b.is_ascii_digit()).count();

    let mut len = digits_from(0);
    if len == 0 {
        return 0;
    }
    if bytes.get(len) == Some(&b'.') {
        let fraction = digits_from(len + 1);
        if fraction > 0 {
            len += 1 + fraction;
        }
    }
    if matches!(bytes.get(len), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(len + 1), Some(b'-' | b'+')));
        let exponent = digits_from(len + 1 + sign);
        if exponent > 0 {
            len += 1 + sign + exponent;
        }
    }
    len
}

fn raw_string(bytes: &[u8]) -> usize {
    if !bytes.starts_with(b"\"\"\"") {
        return 0;
    }
    match memchr::memmem::find(&bytes[3..], b"\"\"\"") {
        Some(i) => 3 + i + 3,
        None => 0,
    }
}

/// `` `([^`\\]|\\.)*` `` where the escaped character may be any code point.
fn backtick(text: &str) -> usize {
    let mut chars = text.char_indices();
    if !matches!(chars.next(), Some((_, '`'))) {
        return 0;
    }
    while let Some((i, c)) = chars.next() {
        match c {
            '`' => return i + 1,
            '\\' => {
                if chars.next().is_none() {
                    return 0;
                }
            }
            _ => {}
        }
    }
    0
}

fn comment_text(bytes: &[u8]) -> usize {
    let mut from = 0;
    while let Some(i) = memchr::memchr2(b'*', b'/', &bytes[from..]) {
        let at = from + i;
        match (bytes[at], bytes.get(at + 1)) {
            (b'*', Some(b'/')) | (b'/', Some(b'*')) => return at,
            _ => from = at + 1,
        }
    }
    bytes.len()
}

fn hex_escape(cursor: Cursor<'_>, marker: u8, digits: u8) -> usize {
    let digits = usize::from(digits);
    if cursor.current() != b'\\' || cursor.peek() != marker {
        return 0;
    }
    let found = cursor
        .rest_bytes()
        .iter()
        .skip(2)
        .take(digits)
        .take_while(|b| b.is_ascii_hexdigit())
        .count();
    if found == digits {
        2 + digits
    } else {
        0
    }
}

fn markup_tag(bytes: &[u8]) -> usize {
    if bytes.first() != Some(&b'<') {
        return 0;
    }
    match memchr::memchr(b'>', &bytes[1..]) {
        // `<>` has nothing between the brackets.
        Some(0) | None => 0,
        Some(i) => i + 2,
    }
}

/// A lone `{` is markup; `{{` opens an interpolation.
fn markup_text(bytes: &[u8]) -> usize {
    let mut from = 0;
    while let Some(i) = memchr::memchr3(b'\\', b'<', b'{', &bytes[from..]) {
        let at = from + i;
        if bytes[at] != b'{' || bytes.get(at + 1) == Some(&b'{') {
            return at;
        }
        from = at + 1;
    }
    bytes.len()
}
