//! Hand-written scanner producing classified [`Token`]s.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! one token per call with zero heap allocation. Each call first discards
//! insignificant input (whitespace, `//` and `/* */` comments, `///` and
//! `///<` documentation comment groups, `#` preprocessor-style lines),
//! then classifies the next run of bytes by its first character.
//!
//! Error conditions are encoded as [`TokenKind::Unknown`], never as
//! `Result::Err`. An unterminated block comment absorbs the rest of the
//! input, after which the scanner reports `Eof`.

use crate::cursor::Cursor;
use crate::token::{Span, Token, TokenKind};

/// One-token-at-a-time scanner over a single source buffer.
///
/// Holds a single mutable read position plus the start offset of the most
/// recent token; all classification is done by direct byte inspection with
/// bounded lookahead. Not for concurrent use -- run separate scanners on
/// separate threads instead, the underlying buffer is read-only.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// Start offset of the most recently produced token.
    token_start: u32,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self {
            cursor,
            token_start: 0,
        }
    }

    /// Produce the next token.
    ///
    /// Returns a zero-length `Eof` token once the source is exhausted;
    /// subsequent calls keep returning `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> Token {
        self.skip_insignificant();

        let start = self.cursor.pos();
        self.token_start = start;

        match self.cursor.current() {
            0 if self.cursor.is_eof() => Token::new(TokenKind::Eof, Span::new(start, start)),
            b'a'..=b'z' | b'A'..=b'Z' => self.identifier(start),
            b'.' => self.dot(start),
            b'0'..=b'9' => self.number(start),
            b'"' | b'\'' => self.string(start),
            _ => self.unknown(start),
        }
    }

    /// Text of the most recently produced token.
    ///
    /// Borrowed from the scanned buffer; valid as long as the buffer lives.
    pub fn token_text(&self) -> &'a str {
        self.cursor.slice(self.token_start, self.cursor.pos())
    }

    // === Insignificant input ===

    /// Skip whitespace, comments of every flavor, and `#` lines.
    ///
    /// Terminates with the cursor on a token-starting byte or the sentinel.
    fn skip_insignificant(&mut self) {
        loop {
            match self.cursor.current() {
                b' ' | b'\t' | b'\r' | b'\n' => self.cursor.advance(),
                b'/' if self.cursor.peek() == b'/' => {
                    if self.cursor.peek2() != b'/' || !self.skip_doc_comment() {
                        // Plain `//` comment (or `////...`, which is not a
                        // doc line): discard through end of line.
                        self.cursor.advance_n(2);
                        self.cursor.eat_until_newline_or_eof();
                    }
                }
                b'/' if self.cursor.peek() == b'*' => {
                    // An unterminated block comment leaves the cursor at
                    // end of input; classification then reports Eof.
                    self.skip_block_comment();
                }
                b'#' => {
                    self.cursor.advance();
                    self.cursor.eat_until_newline_or_eof();
                }
                _ => return,
            }
        }
    }

    /// Skip a `/* ... */` block comment. The cursor is on the opening `/`.
    ///
    /// Returns `false` when the comment is unterminated; the cursor is then
    /// at end of input. The scan for the closer starts after both opener
    /// bytes, so `/*/` does not close a comment but `/**/` does.
    fn skip_block_comment(&mut self) -> bool {
        self.cursor.advance_n(2);
        loop {
            if !self.cursor.eat_until(b'*') {
                return false;
            }
            self.cursor.advance(); // past '*'
            if self.cursor.current() == b'/' {
                self.cursor.advance();
                return true;
            }
        }
    }

    /// Skip a documentation comment group. The cursor is on the first `/`
    /// of `///`; the caller has already checked three slashes.
    ///
    /// `///` lines group with following `///`-prefixed lines and `///<`
    /// with `///<`-prefixed ones, skipping the leading whitespace between
    /// them. Four slashes are an ordinary comment: returns `false` without
    /// consuming anything when the current line starts with `////`.
    fn skip_doc_comment(&mut self) -> bool {
        let inline = self.cursor.peek3() == b'<';
        let (prefix, prefix_len): (&[u8], u32) = if inline { (b"///<", 4) } else { (b"///", 3) };
        let mut matched = false;
        loop {
            if !inline && self.cursor.peek3() == b'/' {
                return matched;
            }
            matched = true;
            self.cursor.advance_n(prefix_len);
            self.cursor.eat_until_newline_or_eof();
            self.cursor.eat_while(is_whitespace);
            if !self.cursor.matches(prefix) {
                return true;
            }
        }
    }

    // === Identifiers ===

    fn identifier(&mut self, start: u32) -> Token {
        // ASCII letters only: no digits, no underscore in this language.
        self.cursor.eat_while(|b| b.is_ascii_alphabetic());
        self.token(TokenKind::Identifier, start)
    }

    // === Numeric literals ===

    #[inline]
    fn number(&mut self, start: u32) -> Token {
        let first = self.cursor.current();
        self.cursor.advance();

        if first == b'0' {
            // Radix prefixes are consumed only when at least one digit of
            // that radix follows; a bare `0x` is the number `0` and then
            // whatever `x...` scans as.
            match self.cursor.current() {
                b'x' | b'X' if self.cursor.peek().is_ascii_hexdigit() => {
                    self.cursor.advance();
                    self.cursor.eat_while(|b| b.is_ascii_hexdigit());
                    return self.token(TokenKind::Number, start);
                }
                b'b' | b'B' if is_bin_digit(self.cursor.peek()) => {
                    self.cursor.advance();
                    self.cursor.eat_while(is_bin_digit);
                    return self.token(TokenKind::Number, start);
                }
                _ => {}
            }
        }

        // Maximal decimal run. Kept even for a leading `0` so float forms
        // like `0755e3` are detected before the octal reading applies.
        let after_first = self.cursor;
        self.cursor.eat_while(|b| b.is_ascii_digit());

        // Fraction: `.` followed by digits, with an optional exponent.
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
            self.try_exponent();
            return self.token(TokenKind::Number, start);
        }

        // Bare exponent: `1e5`.
        if self.try_exponent() {
            return self.token(TokenKind::Number, start);
        }

        if first == b'0' {
            // Octal: re-consume from just past the `0`, stopping at the
            // first digit outside 0-7. Trailing 8s and 9s are left for the
            // next token rather than rejected.
            self.cursor = after_first;
            self.cursor.eat_while(is_oct_digit);
        }
        self.token(TokenKind::Number, start)
    }

    /// Float literal with no integer part: the cursor is on the `.`.
    ///
    /// Requires digits and an exponent (`.5e3`); anything less and the
    /// lone `.` is an unknown token.
    fn dot(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume '.'
        if self.cursor.current().is_ascii_digit() {
            let saved = self.cursor;
            self.cursor.eat_while(|b| b.is_ascii_digit());
            if self.try_exponent() {
                return self.token(TokenKind::Number, start);
            }
            self.cursor = saved;
        }
        self.token(TokenKind::Unknown, start)
    }

    /// Consume `[eE][+-]?[0-9]+` if present and well formed.
    ///
    /// A malformed exponent (`1e`, `2e+`) is not consumed at all: the
    /// cursor is restored to just before the `e`.
    fn try_exponent(&mut self) -> bool {
        if !matches!(self.cursor.current(), b'e' | b'E') {
            return false;
        }
        let saved = self.cursor;
        self.cursor.advance();
        if matches!(self.cursor.current(), b'+' | b'-') {
            self.cursor.advance();
        }
        if self.cursor.current().is_ascii_digit() {
            self.cursor.eat_while(|b| b.is_ascii_digit());
            true
        } else {
            self.cursor = saved;
            false
        }
    }

    // === String literals ===

    /// String literal delimited by `"` or `'`. No escape processing: any
    /// byte up to the next identical quote is accepted verbatim, newlines
    /// included.
    fn string(&mut self, start: u32) -> Token {
        let quote = self.cursor.current();
        self.cursor.advance();
        if self.cursor.eat_until(quote) {
            self.cursor.advance(); // closing quote included in the span
            self.token(TokenKind::String, start)
        } else {
            // Unterminated: the rest of the input is one unknown token.
            self.token(TokenKind::Unknown, start)
        }
    }

    // === Unknown ===

    fn unknown(&mut self, start: u32) -> Token {
        // One full character, so multi-byte UTF-8 never splits. Interior
        // null bytes land here too (only the sentinel position means Eof).
        self.cursor.advance_char();
        self.token(TokenKind::Unknown, start)
    }

    fn token(&self, kind: TokenKind, start: u32) -> Token {
        Token::new(kind, Span::new(start, self.cursor.pos()))
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let tok = self.next_token();
        if tok.kind == TokenKind::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

fn is_bin_digit(b: u8) -> bool {
    matches!(b, b'0' | b'1')
}

fn is_oct_digit(b: u8) -> bool {
    matches!(b, b'0'..=b'7')
}

/// Convenience function: tokenize a source string and collect all tokens.
///
/// Returns a `Vec<Token>` containing every token except the final `Eof`.
/// For streaming access, construct a `SourceBuffer` + `Scanner` directly.
pub fn tokenize(source: &str) -> Vec<Token> {
    let buf = crate::SourceBuffer::new(source);
    let mut scanner = Scanner::new(buf.cursor());
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        if tok.kind == TokenKind::Eof {
            break;
        }
        tokens.push(tok);
    }
    tokens
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests use expect for concise assertions"
)]
