//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values with zero heap allocation. It does not look inside
//! directives; resolving the token to a color is the colorizer's job.
//!
//! # Design
//!
//! Two states only: at a `{` the scanner tries to close a directive,
//! anywhere else it jumps to the next `{`. Both jumps are memchr searches,
//! so the whole input is scanned in linear time without backtracking.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Pure, allocation-free scanner.
///
/// Produces one token at a time. Malformed markup is encoded as a
/// `RawTag` variant, never as `Result::Err`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the input is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            return RawToken {
                tag: RawTag::Eof,
                len: 0,
            };
        }
        match self.cursor.current() {
            b'{' => self.directive(start),
            _ => self.text(start),
        }
    }

    /// Literal run up to (not including) the next `{`, or to EOF.
    fn text(&mut self, start: u32) -> RawToken {
        self.cursor.skip_to_open_brace();
        RawToken {
            tag: RawTag::Text,
            len: self.cursor.pos() - start,
        }
    }

    /// `{` ... first `}`. Without a closing brace the rest of the input is
    /// an unterminated directive.
    fn directive(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if self.cursor.skip_to_close_brace() {
            self.cursor.advance();
            RawToken {
                tag: RawTag::Directive,
                len: self.cursor.pos() - start,
            }
        } else {
            RawToken {
                tag: RawTag::UnterminatedDirective,
                len: self.cursor.pos() - start,
            }
        }
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    /// Yields tokens up to, but not including, `Eof`.
    fn next(&mut self) -> Option<RawToken> {
        let token = self.next_token();
        (token.tag != RawTag::Eof).then_some(token)
    }
}

#[cfg(test)]
mod tests;
