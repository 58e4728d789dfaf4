//! Lexical front end for the Madruga scripting language.
//!
//! Converts raw source text into a flat sequence of typed [`Token`] values
//! for a downstream parser. Scanning is a single left-to-right pass over a
//! borrowed buffer: the scanner owns nothing but a cursor index, allocates
//! only the output vector, and stops at the first malformed token.
//!
//! ```text
//! source → SourceBuffer → Scanner → Vec<Token> (+ SyntaxError on failure)
//! ```
//!
//! Line boundaries are never tracked eagerly. The scanner keeps a running
//! line counter for token construction, and the [`SourceBuffer`] locates the
//! full line content only when an error has to be reported.
//!
//! # Example
//!
//! ```
//! use madruga_lexer::{scan, TokenKind};
//!
//! let result = scan("var x = 10;");
//! assert!(result.error.is_none());
//! let kinds: Vec<_> = result.tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Var,
//!         TokenKind::Identifier,
//!         TokenKind::Equal,
//!         TokenKind::Number,
//!         TokenKind::Semicolon,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```

pub mod classify;
mod cursor;
mod error;
pub mod keywords;
mod scanner;
mod source_buffer;
mod token;

pub use cursor::Cursor;
pub use error::{SyntaxError, SyntaxErrorKind};
pub use scanner::{scan, ScanResult, Scanner};
pub use source_buffer::{Line, SourceBuffer};
pub use token::{Literal, Token, TokenKind};
