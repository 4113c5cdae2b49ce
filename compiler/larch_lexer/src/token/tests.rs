use super::*;

// === Span ===

#[test]
fn span_basics() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert_eq!(span.to_range(), 10..20);
}

#[test]
fn span_empty() {
    let span = Span::new(7, 7);
    assert!(span.is_empty());
    assert_eq!(span.len(), 0);
}

#[test]
fn span_debug_display() {
    let span = Span::new(100, 200);
    assert_eq!(format!("{span:?}"), "100..200");
    assert_eq!(format!("{span}"), "100..200");
}

#[test]
fn span_default_is_empty_at_zero() {
    let span = Span::default();
    assert_eq!(span, Span::new(0, 0));
}

// === TokenKind ===

#[test]
fn kind_display_names() {
    assert_eq!(TokenKind::Unknown.to_string(), "unknown");
    assert_eq!(TokenKind::Number.to_string(), "number");
    assert_eq!(TokenKind::String.to_string(), "string");
    assert_eq!(TokenKind::Identifier.to_string(), "identifier");
    assert_eq!(TokenKind::Eof.to_string(), "eof");
}

#[test]
fn kind_is_one_byte() {
    assert_eq!(std::mem::size_of::<TokenKind>(), 1);
}

#[test]
fn eof_discriminant_is_255() {
    assert_eq!(TokenKind::Eof as u8, 255);
}

// === Token ===

#[test]
fn token_carries_kind_and_span() {
    let tok = Token::new(TokenKind::Identifier, Span::new(3, 8));
    assert_eq!(tok.kind, TokenKind::Identifier);
    assert_eq!(tok.span(), Span::new(3, 8));
    assert_eq!(tok.span.len(), 5);
}
