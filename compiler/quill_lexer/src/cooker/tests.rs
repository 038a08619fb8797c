use super::*;
use pretty_assertions::assert_eq;
use quill_ir::{LineCol, StringFlags};
use quill_lexer_core::DelimiterError;

fn fstring_double() -> Delimiter {
    Delimiter::new(Quote::Double, QuoteSize::Single, StringFlags::FORMATTED, 1)
}

#[test]
fn trivia_is_dropped() {
    let mut cooker = TokenCooker::new("  # c");
    assert_eq!(cooker.cook(RawTag::Whitespace, Span::new(0, 2)), Ok(None));
    assert_eq!(cooker.cook(RawTag::Comment, Span::new(2, 5)), Ok(None));
}

#[test]
fn identifiers_resolve_keywords() {
    let mut cooker = TokenCooker::new("lambda x");
    let kw = cooker.cook(RawTag::Ident, Span::new(0, 6)).unwrap().unwrap();
    let name = cooker.cook(RawTag::Ident, Span::new(7, 8)).unwrap().unwrap();
    assert_eq!(kw.kind, TokenKind::Lambda);
    assert_eq!(name.kind, TokenKind::Name);
    assert_eq!(name.pos, LineCol::new(1, 8));
}

#[test]
fn string_carries_delimiter() {
    let mut cooker = TokenCooker::new("rb'''x'''");
    let tok = cooker.cook(RawTag::String, Span::new(0, 9)).unwrap().unwrap();
    assert_eq!(
        tok.kind,
        TokenKind::String(Delimiter::new(
            Quote::Single,
            QuoteSize::Triple,
            StringFlags::RAW | StringFlags::BYTES,
            2
        ))
    );
}

#[test]
fn fstring_end_records_folded_text() {
    let source = "f\"abc\"";
    let mut cooker = TokenCooker::new(source);
    let start = cooker.cook(RawTag::FStringStart, Span::new(0, 2)).unwrap().unwrap();
    assert_eq!(start.kind, TokenKind::FStringStart(fstring_double()));
    assert_eq!(cooker.fstring_depth(), 1);
    assert_eq!(
        cooker.context(),
        LexErrorContext::InsideFString { start: 0, depth: 1 }
    );

    let end = cooker.cook(RawTag::FStringEnd, Span::new(2, 6)).unwrap().unwrap();
    assert_eq!(end.kind, TokenKind::FStringEnd { text: Span::new(2, 5) });
    assert_eq!(end.text(source), "abc\"");
    assert_eq!(cooker.fstring_depth(), 0);
}

#[test]
fn triple_quoted_end() {
    let source = "f'''a'''";
    let mut cooker = TokenCooker::new(source);
    cooker.cook(RawTag::FStringStart, Span::new(0, 4)).unwrap();
    let end = cooker.cook(RawTag::FStringEnd, Span::new(4, 8)).unwrap().unwrap();
    assert_eq!(end.kind, TokenKind::FStringEnd { text: Span::new(4, 5) });
}

#[test]
fn unbalanced_end_is_a_delimiter_error() {
    let mut cooker = TokenCooker::new("\"");
    let err = cooker.cook(RawTag::FStringEnd, Span::new(0, 1)).unwrap_err();
    assert_eq!(err.kind, LexErrorKind::DelimiterMismatch(DelimiterError::Empty));
}

#[test]
fn end_with_wrong_quote_is_rejected() {
    let mut cooker = TokenCooker::new("f\"x'");
    cooker.cook(RawTag::FStringStart, Span::new(0, 2)).unwrap();
    let err = cooker.cook(RawTag::FStringEnd, Span::new(2, 4)).unwrap_err();
    assert!(matches!(
        err.kind,
        LexErrorKind::DelimiterMismatch(DelimiterError::Mismatch { .. })
    ));
    assert_eq!(cooker.fstring_depth(), 1);
}

#[test]
fn punctuation_maps_one_to_one() {
    assert_eq!(punctuation(RawTag::Ampersand), Some(TokenKind::Amp));
    assert_eq!(punctuation(RawTag::ColonEqual), Some(TokenKind::ColonEq));
    assert_eq!(punctuation(RawTag::BangEqual), Some(TokenKind::NotEq));
    assert_eq!(punctuation(RawTag::LeftBrace), Some(TokenKind::LBrace));
    assert_eq!(punctuation(RawTag::Ident), None);
}
