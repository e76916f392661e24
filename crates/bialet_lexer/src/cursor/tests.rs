use super::*;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let mut cursor = Cursor::new("abc");
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn peek_near_end_returns_sentinel() {
    let mut cursor = Cursor::new("ab");
    cursor.advance(); // at 'b'
    assert_eq!(cursor.peek(), 0);
    assert_eq!(cursor.byte_at(5), 0);
}

#[test]
fn prev_is_none_at_start() {
    let mut cursor = Cursor::new("a.b");
    assert_eq!(cursor.prev(), None);
    cursor.advance_n(2);
    assert_eq!(cursor.prev(), Some(b'.'));
}

// === EOF Detection ===

#[test]
fn interior_null_is_not_eof() {
    let mut cursor = Cursor::new("a\0b");
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
    cursor.advance_n(2);
    assert!(cursor.is_eof());
}

#[test]
fn empty_source_is_eof() {
    let cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.rest(), "");
}

// === Multi-byte ===

#[test]
fn advance_char_skips_whole_code_point() {
    let mut cursor = Cursor::new("ñx");
    cursor.advance_char();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn advance_char_at_eof_is_noop() {
    let mut cursor = Cursor::new("");
    cursor.advance_char();
    assert_eq!(cursor.pos(), 0);
}

// === Eating ===

#[test]
fn eat_while_counts_bytes() {
    let mut cursor = Cursor::new("123abc");
    assert_eq!(cursor.eat_while(|b| b.is_ascii_digit()), 3);
    assert_eq!(cursor.slice_from(0), "123");
}

#[test]
fn eat_chars_while_handles_unicode() {
    let mut cursor = Cursor::new("\u{a0} \tx");
    let len = cursor.eat_chars_while(char::is_whitespace);
    assert_eq!(len, 4);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn eat_until_newline_stops_before_newline() {
    let mut cursor = Cursor::new("// hi\nnext");
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.current(), b'\n');
    assert_eq!(cursor.pos(), 5);
}

#[test]
fn eat_until_newline_runs_to_eof() {
    let mut cursor = Cursor::new("// hi");
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn eat_until3_finds_earliest() {
    let mut cursor = Cursor::new("abc%d\"e\\");
    cursor.eat_until3(b'\\', b'"', b'%');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn starts_with_checks_remainder() {
    let mut cursor = Cursor::new("x{{y");
    assert!(!cursor.starts_with("{{"));
    cursor.advance();
    assert!(cursor.starts_with("{{"));
}
