//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the scanner detects end of input without a length check at every
//! step. The total buffer size is rounded up to the next 64-byte boundary
//! for cache-line alignment, with at least [`LOOKAHEAD`] bytes of zero
//! padding after the source so `peek()`, `peek2()`, and fixed-prefix
//! matching near the end of the buffer stay in bounds.
//!
//! Interior null bytes are representable: a `0x00` at a position before
//! `source_len` is content (the scanner emits an unknown token for it),
//! not end of input.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Guaranteed zero bytes after the source content (sentinel included).
///
/// Bounds the lookahead any cursor operation may perform without an
/// explicit length check: `peek2` reads 2 ahead, `matches` compares at
/// most `LOOKAHEAD` bytes.
pub(crate) const LOOKAHEAD: usize = 8;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source text.
    ///
    /// Copies the source bytes into a cache-line-rounded buffer with a
    /// `0x00` sentinel and at least [`LOOKAHEAD`] trailing zero bytes.
    ///
    /// # Panics
    ///
    /// Panics if the source exceeds `u32::MAX` bytes; offsets in this
    /// crate are compact 32-bit values.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Round up to the next 64-byte boundary, keeping LOOKAHEAD zero
        // bytes after the content even when source_len+1 already sits on
        // a boundary.
        let padded_len = (source_len + LOOKAHEAD + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Zero-filled allocation: the sentinel and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        let source_len = u32::try_from(source_len)
            .unwrap_or_else(|_| panic!("source of {source_len} bytes exceeds u32::MAX offsets"));

        Self { buf, source_len }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the source text (without sentinel or padding).
    #[allow(
        unsafe_code,
        reason = "buffer was constructed from &str and content bytes are never mutated"
    )]
    pub fn as_str(&self) -> &str {
        // SAFETY: `new()` copies a valid UTF-8 `&str` into `buf[..source_len]`
        // and nothing mutates it afterwards.
        unsafe { std::str::from_utf8_unchecked(self.as_bytes()) }
    }

    /// Returns the full buffer including sentinel and padding.
    ///
    /// The byte at index [`len()`](Self::len) is the sentinel (`0x00`).
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
