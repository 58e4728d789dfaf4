//! Borrowed source buffer and lazy line lookup.
//!
//! The buffer is an immutable view of the caller's source text. Nothing is
//! copied: the scanner reads through a [`Cursor`] and slices lexemes
//! straight out of the caller's string. Line boundaries are computed on
//! demand by [`SourceBuffer::line`]; only the error path pays for them.

use crate::Cursor;

/// Borrowed, immutable view of a source buffer.
///
/// Valid for the lifetime of the caller's source text. Cheap to copy; the
/// scanner and any error values borrow from the same underlying string.
#[derive(Clone, Copy, Debug)]
pub struct SourceBuffer<'src> {
    source: &'src str,
}

/// One line of source, located by [`SourceBuffer::line`].
///
/// `start..end` is the byte range of the line excluding its terminating
/// newline. For the final line of a buffer without a trailing newline,
/// `end` is the buffer length.
///
/// # Invariant
///
/// `start <= end <= buffer length`, and `content` is exactly the
/// `start..end` slice of the source.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Line<'src> {
    /// 1-based line number.
    pub number: u32,
    /// Byte offset where the line begins.
    pub start: usize,
    /// Byte offset one past the last content byte (the newline, or EOF).
    pub end: usize,
    /// The raw line text.
    pub content: &'src str,
}

impl<'src> SourceBuffer<'src> {
    /// Wrap a source string. No copying, no validation.
    pub fn new(source: &'src str) -> Self {
        Self { source }
    }

    /// The source text.
    pub fn as_str(&self) -> &'src str {
        self.source
    }

    /// The source as raw bytes.
    pub fn as_bytes(&self) -> &'src [u8] {
        self.source.as_bytes()
    }

    /// Source length in bytes.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Returns `true` if the source is empty.
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'src> {
        Cursor::new(self.source)
    }

    /// Locate a 1-based line by walking newline positions from the start.
    ///
    /// Returns a zero-length [`Line`] at offset 0 when `number` is past the
    /// last line of the buffer (or zero). Linear in the buffer length, so
    /// callers invoke it once, when constructing an error.
    pub fn line(&self, number: u32) -> Line<'src> {
        let mut current: u32 = 1;
        let mut start = 0usize;
        for newline in memchr::memchr_iter(b'\n', self.source.as_bytes()) {
            if current == number {
                return Line {
                    number,
                    start,
                    end: newline,
                    content: &self.source[start..newline],
                };
            }
            current += 1;
            start = newline + 1;
        }
        if current == number {
            // Final line, unterminated: runs to the end of the buffer.
            return Line {
                number,
                start,
                end: self.source.len(),
                content: &self.source[start..],
            };
        }
        Line {
            number,
            start: 0,
            end: 0,
            content: "",
        }
    }
}
