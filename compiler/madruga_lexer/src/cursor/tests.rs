use crate::classify;
use crate::SourceBuffer;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_n_moves_multiple() {
    let buf = SourceBuffer::new("abcdef");
    let mut cursor = buf.cursor();
    cursor.advance_n(3);
    assert_eq!(cursor.current(), b'd');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn is_at_end_after_consuming_source() {
    let buf = SourceBuffer::new("hi");
    let mut cursor = buf.cursor();
    assert!(!cursor.is_at_end());
    cursor.advance_n(2);
    assert!(cursor.is_at_end());
}

#[test]
fn is_at_end_on_empty_source() {
    let buf = SourceBuffer::new("");
    let cursor = buf.cursor();
    assert!(cursor.is_at_end());
}

// === Lookahead ===

#[test]
fn peek_returns_next_byte() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.peek(), Some(b'b'));
}

#[test]
fn peek_at_last_byte_is_none() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    cursor.advance(); // at 'b', the last byte
    assert_eq!(cursor.peek(), None);
}

#[test]
fn peek_is_matches_expected() {
    let buf = SourceBuffer::new("!=");
    let cursor = buf.cursor();
    assert!(cursor.peek_is(b'='));
    assert!(!cursor.peek_is(b'!'));
}

#[test]
fn peek_is_false_at_last_byte() {
    let buf = SourceBuffer::new("!");
    let cursor = buf.cursor();
    assert!(!cursor.peek_is(b'='));
}

#[test]
fn peek_func_classifies_next_byte() {
    let buf = SourceBuffer::new(".5");
    let cursor = buf.cursor();
    assert!(cursor.peek_func(|byte| byte.is_ascii_digit()));
}

#[test]
fn peek_func_false_at_last_byte() {
    let buf = SourceBuffer::new(".");
    let cursor = buf.cursor();
    assert!(!cursor.peek_func(|byte| byte.is_ascii_digit()));
}

// === Slice ===

#[test]
fn slice_extracts_substring() {
    let buf = SourceBuffer::new("hello world");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(0, 5), "hello");
    assert_eq!(cursor.slice(6, 11), "world");
}

#[test]
fn slice_empty_range() {
    let buf = SourceBuffer::new("hello");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(2, 2), "");
}

// === eat_while_any ===

#[test]
fn eat_while_any_stops_where_all_reject() {
    let buf = SourceBuffer::new("123abc");
    let mut cursor = buf.cursor();
    let predicates: [&classify::Predicate<'_>; 1] = [&classify::is_digit];
    let end = cursor.eat_while_any(&predicates);
    assert_eq!(end, 3);
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn eat_while_any_accepts_when_any_predicate_accepts() {
    let buf = SourceBuffer::new("1a2b;");
    let mut cursor = buf.cursor();
    let predicates: [&classify::Predicate<'_>; 2] = [&classify::is_digit, &classify::is_letter];
    let end = cursor.eat_while_any(&predicates);
    assert_eq!(end, 4);
    assert_eq!(cursor.current(), b';');
}

#[test]
fn eat_while_any_returns_len_on_whole_buffer_match() {
    let buf = SourceBuffer::new("12345");
    let mut cursor = buf.cursor();
    let predicates: [&classify::Predicate<'_>; 1] = [&classify::is_digit];
    let end = cursor.eat_while_any(&predicates);
    assert_eq!(end, buf.len());
    assert!(cursor.is_at_end());
}

#[test]
fn eat_while_any_rejects_immediately_without_moving() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    let predicates: [&classify::Predicate<'_>; 1] = [&classify::is_digit];
    let end = cursor.eat_while_any(&predicates);
    assert_eq!(end, 0);
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn eat_while_any_passes_absolute_positions() {
    let buf = SourceBuffer::new("xx123");
    let mut cursor = buf.cursor();
    cursor.advance_n(2); // start mid-buffer
    let seen = std::cell::RefCell::new(Vec::new());
    let recording = |pos: usize, byte: u8| {
        seen.borrow_mut().push(pos);
        byte.is_ascii_digit()
    };
    let predicates: [&classify::Predicate<'_>; 1] = [&recording];
    let end = cursor.eat_while_any(&predicates);
    assert_eq!(end, 5);
    // Positions are absolute buffer offsets, not lexeme-relative.
    assert_eq!(*seen.borrow(), vec![2, 3, 4]);
}

// === find_after ===

#[test]
fn find_after_returns_absolute_offset() {
    let buf = SourceBuffer::new("\"abc\"");
    let cursor = buf.cursor();
    assert_eq!(cursor.find_after(b'"'), Some(4));
}

#[test]
fn find_after_skips_current_position() {
    // Standing on the opening quote, the search must not match it.
    let buf = SourceBuffer::new("\"\"");
    let cursor = buf.cursor();
    assert_eq!(cursor.find_after(b'"'), Some(1));
}

#[test]
fn find_after_none_when_absent() {
    let buf = SourceBuffer::new("\"abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.find_after(b'"'), None);
}

#[test]
fn find_after_none_at_last_byte() {
    let buf = SourceBuffer::new("\"");
    let cursor = buf.cursor();
    assert_eq!(cursor.find_after(b'"'), None);
}
