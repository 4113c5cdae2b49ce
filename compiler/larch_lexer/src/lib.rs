//! Hand-written tokenizer for the Larch language.
//!
//! The crate is deliberately standalone: it knows nothing about source ids,
//! files, or diagnostics. It takes text, wraps it in a sentinel-terminated
//! [`SourceBuffer`], and classifies it into [`Token`]s one at a time through
//! a [`Scanner`] driven by a byte [`Cursor`].
//!
//! Lexical anomalies are never errors. Malformed or unterminated literals
//! come back as [`TokenKind::Unknown`]; an unterminated block comment is
//! absorbed up to end of input. Callers that care treat `Unknown` as a
//! syntax problem; this crate just reports what it saw.

mod cursor;
mod scanner;
mod source_buffer;
mod token;

pub use cursor::Cursor;
pub use scanner::{tokenize, Scanner};
pub use source_buffer::SourceBuffer;
pub use token::{Span, Token, TokenKind};
