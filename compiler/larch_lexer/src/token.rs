//! Token and span types produced by the scanner.

use std::fmt;

/// Classification of a scanned token.
///
/// A closed set: the scanner has no notion of keywords, operators, or
/// punctuation beyond "unknown". Malformed input is folded into
/// [`Unknown`](TokenKind::Unknown) rather than reported as an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// A single character (or unterminated literal) the scanner could not
    /// classify.
    Unknown = 0,
    /// Numeric literal: decimal, octal, hex (`0x`), binary (`0b`), or
    /// floating point.
    Number = 1,
    /// String literal delimited by `"` or `'`, quotes included in the span.
    String = 2,
    /// Maximal run of ASCII letters.
    Identifier = 3,
    /// End of input. Zero-length; reported again on every subsequent call.
    Eof = 255,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Unknown => "unknown",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Identifier => "identifier",
            TokenKind::Eof => "eof",
        };
        f.write_str(name)
    }
}

/// Byte range of a token within its source.
///
/// Layout: 8 bytes total, `start` inclusive, `end` exclusive. Offsets are
/// compact 32-bit values; a span is meaningful only together with the
/// buffer it was scanned from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Convert to a `std::ops::Range` for slicing.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A classified span of source text.
///
/// Tokens own no memory: the text they cover is a borrowed view into the
/// scanned buffer, recoverable via [`Scanner::token_text`](crate::Scanner::token_text)
/// or by slicing the source with [`Token::span`](Self::span).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Create a new token.
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Byte range the token covers.
    #[inline]
    pub const fn span(&self) -> Span {
        self.span
    }
}

// Size assertions to prevent accidental regressions
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    const _: () = assert!(std::mem::size_of::<super::Span>() == 8);
    const _: () = assert!(std::mem::size_of::<super::Token>() <= 12);
    const _: () = assert!(std::mem::size_of::<super::TokenKind>() == 1);
}

#[cfg(test)]
mod tests;
