//! Syntax error representation.
//!
//! A scan fails at most once: the first malformed token aborts it, and the
//! error carries the offending [`Line`] plus the byte offset of the
//! failure. Rendering is the fixed two-line message (marker, then line
//! number and raw line content). The exact column is not part of the
//! message, but [`SyntaxError::at`] and [`SyntaxError::column`] expose
//! enough for a caller to draw a caret itself.

use thiserror::Error;

use crate::Line;

/// What kind of failure aborted the scan.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SyntaxErrorKind {
    /// A numeric or string lexeme that could not be parsed or terminated:
    /// a number with no float reading, or a string missing its closing
    /// quote.
    MalformedLiteral,
    /// Lexeme extension produced no end position. Unreachable with the
    /// shipped letter predicate; modeled as a real failure rather than an
    /// assumption.
    UnterminatedLexeme,
}

/// A syntax error: the failing line and the byte offset of the failure.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("[SYNTAX ERROR]\nln {}|>> {}", .line.number, .line.content)]
pub struct SyntaxError<'src> {
    /// The line the scan failed on.
    pub line: Line<'src>,
    /// Absolute byte offset of the cursor at failure.
    pub at: usize,
    /// Failure category.
    pub kind: SyntaxErrorKind,
}

impl<'src> SyntaxError<'src> {
    pub fn new(line: Line<'src>, at: usize, kind: SyntaxErrorKind) -> Self {
        Self { line, at, kind }
    }

    /// Byte column of the failure within the offending line.
    ///
    /// Zero when the failure offset precedes the located line (a line that
    /// could not be found reports offset 0).
    pub fn column(&self) -> usize {
        self.at.saturating_sub(self.line.start)
    }
}
