//! Byte-level scanning primitives shared by the fact parsers.
//!
//! A [`Cursor`] walks a borrowed byte slice and hands back [`Span`]s of what
//! it consumed. Every operation stops at the end of the slice, so a scan over
//! truncated or garbage input ends early instead of reading past the buffer.

use crate::error::{FtcError, Result};

/// ASCII letter.
#[inline]
pub fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// ASCII decimal digit.
#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Space or tab.
#[inline]
pub fn is_blank(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// Half-open range `[start, end)` into the scanned buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Byte under the cursor, `None` at the end.
    pub fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// Consume and return the byte under the cursor.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Advance while `pred` holds and return the consumed span.
    pub fn scan_while<F>(&mut self, pred: F) -> Span
    where
        F: Fn(u8) -> bool,
    {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
        Span {
            start,
            end: self.pos,
        }
    }

    /// Like [`scan_while`](Self::scan_while) but only reports how far it went.
    pub fn skip_while<F>(&mut self, pred: F) -> usize
    where
        F: Fn(u8) -> bool,
    {
        self.scan_while(pred).len()
    }

    /// Consume `byte` if it is next.
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume `byte` or fail with a malformed-input error naming `what`.
    pub fn expect(&mut self, byte: u8, what: &str) -> Result<()> {
        match self.peek() {
            Some(b) if b == byte => {
                self.pos += 1;
                Ok(())
            }
            Some(b) => Err(FtcError::malformed(
                what,
                format!(
                    "expected '{}' at offset {}, found '{}'",
                    byte.escape_ascii(),
                    self.pos,
                    b.escape_ascii()
                ),
            )),
            None => Err(FtcError::malformed(
                what,
                format!(
                    "expected '{}' at offset {}, found end of input",
                    byte.escape_ascii(),
                    self.pos
                ),
            )),
        }
    }

    /// Move just past the first occurrence of `needle` at or after the
    /// cursor. Leaves the cursor untouched and returns `false` if there is
    /// none.
    pub fn seek_past(&mut self, needle: &[u8]) -> bool {
        if needle.is_empty() {
            return true;
        }
        match self.rest().windows(needle.len()).position(|w| w == needle) {
            Some(idx) => {
                self.pos += idx + needle.len();
                true
            }
            None => false,
        }
    }

    /// Unconsumed tail of the buffer.
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos.min(self.buf.len())..]
    }

    pub fn slice(&self, span: Span) -> &'a [u8] {
        let end = span.end.min(self.buf.len());
        let start = span.start.min(end);
        &self.buf[start..end]
    }

    /// Borrow a span as UTF-8 text.
    pub fn text(&self, span: Span, what: &str) -> Result<&'a str> {
        std::str::from_utf8(self.slice(span))
            .map_err(|e| FtcError::malformed(what, format!("invalid UTF-8: {}", e)))
    }
}

/// Convert a run of ASCII digits to an integer.
///
/// Empty input, non-digit bytes and overflow are all malformed input.
pub fn parse_u64(digits: &[u8], what: &str) -> Result<u64> {
    if digits.is_empty() {
        return Err(FtcError::malformed(what, "missing number"));
    }

    digits.iter().try_fold(0u64, |acc, &b| {
        if !is_digit(b) {
            return Err(FtcError::malformed(
                what,
                format!("unexpected '{}' in number", b.escape_ascii()),
            ));
        }
        acc.checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(b - b'0')))
            .ok_or_else(|| FtcError::malformed(what, "number out of range"))
    })
}
