use super::*;
use pretty_assertions::assert_eq;
use quill_ir::{Delimiter, LineCol, Quote, QuoteSize, StringFlags, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).unwrap().kinds()
}

fn lex_err(source: &str) -> LexError {
    lex(source).unwrap_err()
}

const FSTRING: StringFlags = StringFlags::FORMATTED;

fn double(flags: StringFlags, prefix_len: u8) -> Delimiter {
    Delimiter::new(Quote::Double, QuoteSize::Single, flags, prefix_len)
}

#[test]
fn flat_literal_round_trips() {
    let source = "f\"abc\"";
    let tokens = lex(source).unwrap();
    assert_eq!(
        tokens.kinds(),
        vec![
            TokenKind::FStringStart(double(FSTRING, 1)),
            TokenKind::FStringEnd {
                text: Span::new(2, 5)
            },
            TokenKind::Eof,
        ]
    );
    let joined = format!("{}{}", tokens[0].text(source), tokens[1].text(source));
    assert_eq!(joined, source);
}

#[test]
fn field_tokens_interleave_with_text() {
    assert_eq!(
        kinds("f\"a{x!r:>10}b\""),
        vec![
            TokenKind::FStringStart(double(FSTRING, 1)),
            TokenKind::FStringMiddle,
            TokenKind::LBrace,
            TokenKind::Name,
            TokenKind::Bang,
            TokenKind::Name,
            TokenKind::Colon,
            TokenKind::FStringMiddle,
            TokenKind::RBrace,
            TokenKind::FStringMiddle,
            TokenKind::FStringEnd {
                text: Span::new(13, 13)
            },
            TokenKind::Eof,
        ]
    );
}

#[test]
fn keywords_inside_fields() {
    assert_eq!(
        &kinds("f'{a if b else None}'")[2..7],
        [
            TokenKind::Name,
            TokenKind::If,
            TokenKind::Name,
            TokenKind::Else,
            TokenKind::None
        ]
    );
}

#[test]
fn nested_same_quote_literal() {
    let source = "f\"{f\"{1+1}\"}\"";
    let tokens = lex(source).unwrap();
    let starts = tokens
        .iter()
        .filter(|t| matches!(t.kind, TokenKind::FStringStart(_)))
        .count();
    let ends = tokens
        .iter()
        .filter(|t| matches!(t.kind, TokenKind::FStringEnd { .. }))
        .count();
    assert_eq!((starts, ends), (2, 2));
    assert_eq!(tokens[2].text(source), "f\"");
}

#[test]
fn positions_inside_multiline_fields() {
    let source = "f'''\n{ x +\n  y}'''";
    let tokens = lex(source).unwrap();
    let names: Vec<LineCol> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Name)
        .map(|t| t.pos)
        .collect();
    assert_eq!(names, vec![LineCol::new(2, 3), LineCol::new(3, 3)]);
}

#[test]
fn logical_newlines_only_outside_brackets() {
    assert_eq!(
        kinds("a\n(b\n)\n"),
        vec![
            TokenKind::Name,
            TokenKind::Newline,
            TokenKind::LParen,
            TokenKind::Name,
            TokenKind::RParen,
            TokenKind::Newline,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn byte_order_mark_is_skipped() {
    let source = "\u{feff}x";
    let tokens = lex(source).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Name);
    assert_eq!(tokens[0].span, Span::new(3, 4));
    assert_eq!(tokens[1].span, Span::point(4));
}

#[test]
fn eof_token_is_a_point_at_the_end() {
    let tokens = lex("1 + 2").unwrap();
    let eof = tokens[tokens.len() - 1];
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.span, Span::point(5));
}

#[test]
fn unterminated_field_points_at_brace() {
    let err = lex_err("f\"{unterminated\"");
    assert_eq!(err.kind, LexErrorKind::UnterminatedField);
    assert_eq!(err.span, Span::new(2, 3));
    assert_eq!(err.context, LexErrorContext::InsideFString { start: 0, depth: 1 });
    assert_eq!(err.category(), ErrorCategory::Lexical);
}

#[test]
fn newline_rules() {
    assert_eq!(lex_err("f\"a\nb\"").kind, LexErrorKind::NewlineInFString);
    assert!(lex("f\"\"\"a\nb\"\"\"").is_ok());
}

#[test]
fn lone_brace_and_empty_field() {
    assert_eq!(lex_err("f'}'").kind, LexErrorKind::LoneRightBrace);
    assert_eq!(lex_err("f'{}'").kind, LexErrorKind::EmptyField { marker: '}' });
    assert_eq!(lex_err("f'{=}'").kind, LexErrorKind::EmptyField { marker: '=' });
}

#[test]
fn bracket_errors_are_syntax_category() {
    let err = lex_err("f'{a(]}'");
    assert_eq!(err.kind, LexErrorKind::MismatchedBracket { close: ']' });
    assert_eq!(err.span, Span::new(5, 6));
    assert_eq!(err.category(), ErrorCategory::Syntax);

    let err = lex_err("[1, 2");
    assert_eq!(err.kind, LexErrorKind::UnclosedBracket { open: '[' });
    assert_eq!(err.context, LexErrorContext::TopLevel);
}

#[test]
fn nesting_limits_follow_config() {
    let source = "f'{f\"{1}\"}'";
    assert!(lex(source).is_ok());
    let config = ScanConfig {
        max_fstring_depth: 1,
        ..ScanConfig::default()
    };
    let err = lex_with_config(source, config).unwrap_err();
    assert_eq!(err.kind, LexErrorKind::TooDeeplyNested);
    assert_eq!(err.span, Span::new(3, 5));
    assert_eq!(err.context, LexErrorContext::InsideFString { start: 0, depth: 1 });
}

#[test]
fn invalid_characters() {
    assert_eq!(lex_err("a $ b").kind, LexErrorKind::InvalidCharacter { ch: '$' });
    assert_eq!(lex_err("a\0").kind, LexErrorKind::NullByte);
    assert_eq!(lex_err("a \\ b").kind, LexErrorKind::StrayBackslash);
}
