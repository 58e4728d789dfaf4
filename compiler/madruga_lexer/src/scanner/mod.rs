//! The scanner: a single left-to-right pass over the source buffer.
//!
//! Each iteration classifies the byte under the cursor and either emits one
//! token, skips insignificant input, or fails. Literal branches extend
//! their lexeme through the cursor's predicate-set primitive and leave the
//! cursor at the half-open lexeme end; the dispatch never revisits a byte.
//!
//! Scanning stops at the first malformed token. The tokens accumulated up
//! to that point are still returned: useful for diagnostics, not for
//! resuming.

use crate::classify::{self, Predicate};
use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::keywords;
use crate::source_buffer::SourceBuffer;
use crate::token::{Token, TokenKind};
use crate::Cursor;

/// Outcome of a scan: the token sequence plus the first error, if any.
///
/// On success, `tokens` is terminated by exactly one [`TokenKind::Eof`]
/// marker and `error` is `None`. On failure, `tokens` holds everything
/// scanned before the failure (no end-of-input marker) and `error` holds
/// the failure.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanResult<'src> {
    pub tokens: Vec<Token<'src>>,
    pub error: Option<SyntaxError<'src>>,
}

/// Scan a full source buffer in one call.
pub fn scan(source: &str) -> ScanResult<'_> {
    Scanner::new(SourceBuffer::new(source)).scan()
}

/// Single-use scanner over a borrowed source buffer.
///
/// Holds a cursor, a running line counter, and the output vector; nothing
/// survives the scan. Scanning the same buffer twice yields element-wise
/// identical results.
pub struct Scanner<'src> {
    buffer: SourceBuffer<'src>,
    cursor: Cursor<'src>,
    /// 1-based line counter, advanced on newline dispatch.
    line: u32,
    tokens: Vec<Token<'src>>,
}

impl<'src> Scanner<'src> {
    pub fn new(buffer: SourceBuffer<'src>) -> Self {
        Self {
            buffer,
            cursor: buffer.cursor(),
            line: 1,
            tokens: Vec::new(),
        }
    }

    /// Run the scan to completion or first error.
    ///
    /// The end-of-input marker is appended unconditionally on success,
    /// even for an empty buffer.
    pub fn scan(mut self) -> ScanResult<'src> {
        while !self.cursor.is_at_end() {
            if let Err(error) = self.step() {
                return ScanResult {
                    tokens: self.tokens,
                    error: Some(error),
                };
            }
        }
        self.tokens.push(Token::plain(TokenKind::Eof, self.line));
        ScanResult {
            tokens: self.tokens,
            error: None,
        }
    }

    /// Dispatch on the byte under the cursor, consuming at least one byte.
    fn step(&mut self) -> Result<(), SyntaxError<'src>> {
        let byte = self.cursor.current();
        let pos = self.cursor.pos();
        if classify::is_digit(pos, byte) {
            return self.number();
        }
        if classify::is_letter(pos, byte) {
            return self.identifier();
        }
        match byte {
            // Insignificant whitespace.
            b' ' | b'\r' | b'\t' => self.cursor.advance(),
            b'\n' => self.newline(),

            // Single-character punctuation.
            b'(' => self.single(TokenKind::LeftParen),
            b')' => self.single(TokenKind::RightParen),
            b'{' => self.single(TokenKind::LeftBrace),
            b'}' => self.single(TokenKind::RightBrace),
            b',' => self.single(TokenKind::Comma),
            b'-' => self.single(TokenKind::Minus),
            b'+' => self.single(TokenKind::Plus),
            b';' => self.single(TokenKind::Semicolon),
            b'/' => self.single(TokenKind::Slash),
            b'*' => self.single(TokenKind::Star),

            // One-byte lookahead operators.
            b'!' => self.operator(TokenKind::Bang, TokenKind::BangEqual),
            b'=' => self.operator(TokenKind::Equal, TokenKind::EqualEqual),
            b'>' => self.operator(TokenKind::Greater, TokenKind::GreaterEqual),
            b'<' => self.operator(TokenKind::Less, TokenKind::LessEqual),

            b'.' => return self.dot(),
            b'"' => return self.string(),

            // Unrecognized bytes are skipped: no token, no error.
            _ => self.cursor.advance(),
        }
        Ok(())
    }

    // ─── Whitespace & newlines ───────────────────────────────────────────

    fn newline(&mut self) {
        // A buffer-final newline terminates the last line without opening
        // a new one, so the end-of-input token reports the line where
        // input actually ended.
        if self.cursor.pos() + 1 < self.cursor.source_len() {
            self.line += 1;
        }
        self.cursor.advance();
    }

    // ─── Punctuation & operators ─────────────────────────────────────────

    /// One-byte token: consume it and emit the given kind.
    fn single(&mut self, kind: TokenKind) {
        self.cursor.advance();
        self.push(kind);
    }

    /// `!` `=` `>` `<`: emit the compound kind when `=` follows, else the
    /// single-character base. Lookahead at the last byte rejects.
    fn operator(&mut self, single: TokenKind, compound: TokenKind) {
        if self.cursor.peek_is(b'=') {
            self.cursor.advance_n(2);
            self.push(compound);
        } else {
            self.cursor.advance();
            self.push(single);
        }
    }

    // ─── Literals ────────────────────────────────────────────────────────

    fn number(&mut self) -> Result<(), SyntaxError<'src>> {
        let start = self.cursor.pos();
        let float_point = classify::float_point(self.cursor.bytes());
        let predicates: [&Predicate<'_>; 2] = [&classify::is_digit, &float_point];
        let end = self.cursor.eat_while_any(&predicates);
        let value = self.parse_float(self.cursor.slice(start, end), start)?;
        self.tokens.push(Token::number(value, self.line));
        Ok(())
    }

    fn identifier(&mut self) -> Result<(), SyntaxError<'src>> {
        let start = self.cursor.pos();
        let predicates: [&Predicate<'_>; 1] = [&classify::is_letter];
        let end = self.cursor.eat_while_any(&predicates);
        if end <= start {
            // The byte under the cursor already classified as a letter, so
            // extension must cover at least that byte.
            return Err(self.error(start, SyntaxErrorKind::UnterminatedLexeme));
        }
        let text = self.cursor.slice(start, end);
        match keywords::lookup(text) {
            Some(kind) => self.push(kind),
            None => self.tokens.push(Token::identifier(text, self.line)),
        }
        Ok(())
    }

    fn dot(&mut self) -> Result<(), SyntaxError<'src>> {
        if !self.cursor.peek_func(|byte| byte.is_ascii_digit()) {
            self.single(TokenKind::Dot);
            return Ok(());
        }
        // Shorthand for a float lower than one: `.5` scans as 0.5. The
        // lexeme keeps the leading dot so the float parse sees ".5".
        let start = self.cursor.pos();
        self.cursor.advance();
        let predicates: [&Predicate<'_>; 1] = [&classify::is_digit];
        let end = self.cursor.eat_while_any(&predicates);
        let value = self.parse_float(self.cursor.slice(start, end), start)?;
        self.tokens.push(Token::number(value, self.line));
        Ok(())
    }

    fn string(&mut self) -> Result<(), SyntaxError<'src>> {
        let open = self.cursor.pos();
        let Some(close) = self.cursor.find_after(b'"') else {
            return Err(self.error(open, SyntaxErrorKind::MalformedLiteral));
        };
        let text = self.cursor.slice(open + 1, close);
        self.tokens.push(Token::string(text, self.line));
        self.cursor.advance_n(close + 1 - open);
        Ok(())
    }

    // ─── Helpers ─────────────────────────────────────────────────────────

    fn push(&mut self, kind: TokenKind) {
        self.tokens.push(Token::plain(kind, self.line));
    }

    /// Parse a numeric lexeme at 32-bit precision, widened for storage.
    fn parse_float(&self, text: &str, at: usize) -> Result<f64, SyntaxError<'src>> {
        match text.parse::<f32>() {
            Ok(value) => Ok(f64::from(value)),
            Err(_) => Err(self.error(at, SyntaxErrorKind::MalformedLiteral)),
        }
    }

    /// Build a syntax error, locating the current line lazily.
    fn error(&self, at: usize, kind: SyntaxErrorKind) -> SyntaxError<'src> {
        SyntaxError::new(self.buffer.line(self.line), at, kind)
    }
}

#[cfg(test)]
#[allow(
    clippy::expect_used,
    reason = "test assertions use expect for clarity"
)]
