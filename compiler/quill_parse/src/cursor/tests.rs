use super::*;
use pretty_assertions::assert_eq;

fn tokens(source: &str) -> TokenList {
    quill_lexer::lex(source).unwrap()
}

#[test]
fn advance_stops_at_eof() {
    let list = tokens("a");
    let mut cursor = Cursor::new(&list);
    assert_eq!(cursor.advance().kind, TokenKind::Name);
    assert!(cursor.is_at_end());
    assert_eq!(cursor.advance().kind, TokenKind::Eof);
    assert_eq!(cursor.advance().kind, TokenKind::Eof);
    assert_eq!(cursor.position(), 1);
}

#[test]
fn check_ignores_payload() {
    let list = tokens("'x' f'y'");
    let mut cursor = Cursor::new(&list);
    assert!(cursor.check(&TokenKind::String(quill_ir::Delimiter::new(
        quill_ir::Quote::Double,
        quill_ir::QuoteSize::Triple,
        quill_ir::StringFlags::BYTES,
        1
    ))));
    cursor.advance();
    assert!(matches!(cursor.current_kind(), TokenKind::FStringStart(_)));
}

#[test]
fn peek_past_end_is_eof() {
    let list = tokens("a + b");
    let cursor = Cursor::new(&list);
    assert_eq!(cursor.peek_kind_at(1), TokenKind::Plus);
    assert_eq!(cursor.peek_kind_at(10), TokenKind::Eof);
}

#[test]
fn eat_and_expect() {
    let list = tokens("(a)");
    let mut cursor = Cursor::new(&list);
    assert!(!cursor.eat(&TokenKind::LBracket));
    assert!(cursor.eat(&TokenKind::LParen));
    let err = cursor.expect(&TokenKind::RParen).unwrap_err();
    assert_eq!(err.span, Span::new(1, 2));
    cursor.advance();
    assert_eq!(cursor.expect(&TokenKind::RParen).unwrap().span, Span::new(2, 3));
    assert_eq!(cursor.previous_span(), Span::new(2, 3));
}

#[test]
fn unexpected_at_end_says_so() {
    let list = tokens("");
    let cursor = Cursor::new(&list);
    let err = cursor.unexpected("expected expression");
    assert_eq!(err.message, "expected expression, found end of input");
}
