//! Character classification predicates.
//!
//! Plain functions and closures, shared between the scanner's dispatch and
//! the cursor's lexeme-extension primitive
//! ([`eat_while_any`](crate::Cursor::eat_while_any)). Every predicate takes
//! the absolute buffer position alongside the byte; the simple classifiers
//! ignore the position, the compound ones use it for lookahead.
//!
//! Classification is ASCII-only. Multi-byte characters never classify as
//! letters or digits and fall through to the scanner's tolerant
//! unknown-byte branch.

/// A positional byte predicate: `(absolute position, byte) -> accept`.
pub type Predicate<'p> = dyn Fn(usize, u8) -> bool + 'p;

/// ASCII digit, position-ignoring.
pub fn is_digit(_pos: usize, byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// ASCII letter, position-ignoring.
pub fn is_letter(_pos: usize, byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

/// Build the decimal-point predicate for numeric lexemes.
///
/// Accepts a `.` only when the byte immediately after it is a digit, so a
/// trailing method-call dot is never absorbed into a number (`5.` scans as
/// `5` then `.`). Lookahead at the last byte is bounds-checked and rejects.
pub fn float_point(bytes: &[u8]) -> impl Fn(usize, u8) -> bool + '_ {
    move |pos, byte| byte == b'.' && bytes.get(pos + 1).is_some_and(u8::is_ascii_digit)
}
