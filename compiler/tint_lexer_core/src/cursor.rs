//! Zero-cost cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte or jumps straight to
//! the next brace using memchr. EOF is the position reaching the source
//! length, where the sentinel (`0x00`) sits.
//!
//! # Interior Null Bytes
//!
//! A null at `pos < source_len` is markup content; a null at
//! `pos >= source_len` is the sentinel (EOF).

/// Zero-cost cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so snapshots are free.
///
/// # Invariant
///
/// `buf` must be sentinel-terminated: `buf[source_len] == 0x00`, and all
/// bytes after `source_len` are `0x00`. This is guaranteed by
/// [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual markup content (excludes sentinel and padding).
    source_len: u32,
}

/// &[u8] = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` at EOF. Interior null bytes also return `0x00`; use
    /// [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Returns `true` if the cursor has reached EOF.
    ///
    /// Position is authoritative: the byte at `source_len` is always the
    /// sentinel, while a `0x00` before it is content.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the markup.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Advance to the next `{` or EOF using SIMD-accelerated search.
    ///
    /// Returns `true` if a `{` was found (cursor sits on it), `false` if the
    /// cursor was moved to EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_open_brace(&mut self) -> bool {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr(b'{', remaining) {
            self.pos += offset as u32;
            true
        } else {
            self.pos = self.source_len;
            false
        }
    }

    /// Advance to the next `}` or EOF using SIMD-accelerated search.
    ///
    /// Returns `true` if a `}` was found (cursor sits on it), `false` if the
    /// cursor was moved to EOF. Intervening `{` bytes are not special.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_close_brace(&mut self) -> bool {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr(b'}', remaining) {
            self.pos += offset as u32;
            true
        } else {
            self.pos = self.source_len;
            false
        }
    }
}

/// Scalar reference for the memchr-based skips. Returns the offset of the
/// first `needle` in `buf`, or `buf.len()` if absent.
#[cfg(test)]
fn scalar_skip_to(buf: &[u8], needle: u8) -> usize {
    buf.iter().position(|&b| b == needle).unwrap_or(buf.len())
}
