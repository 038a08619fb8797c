use super::*;
use pretty_assertions::assert_eq;
use quill_lexer::LexErrorKind;

#[test]
fn syntax_error_display_includes_context() {
    let err = SyntaxError::new(Span::new(3, 4), "invalid syntax");
    assert_eq!(err.to_string(), "invalid syntax");
    let err = err.or_context(ErrorContext::FStringField);
    assert_eq!(err.to_string(), "invalid syntax (in an f-string field)");
}

#[test]
fn inner_context_wins() {
    let err = SyntaxError::new(Span::DUMMY, "x")
        .or_context(ErrorContext::CallArguments)
        .or_context(ErrorContext::FStringField);
    assert_eq!(err.context, Some(ErrorContext::CallArguments));
}

#[test]
fn bracket_lex_errors_become_syntax_errors() {
    let lex = LexError::new(Span::new(5, 6), LexErrorKind::MismatchedBracket { close: ']' });
    let err = ParseError::from(lex);
    assert!(err.is_syntax());
    assert_eq!(err.span(), Span::new(5, 6));
}

#[test]
fn other_lex_errors_stay_lexical() {
    let lex = LexError::new(Span::new(2, 3), LexErrorKind::UnterminatedField);
    let err = ParseError::from(lex.clone());
    assert_eq!(err, ParseError::Lex(lex));
    assert_eq!(err.to_string(), "f-string: expecting '}'");
}

#[test]
fn line_col_of_error() {
    let source = "(a +\n  ])";
    let index = LineIndex::new(source);
    let err = ParseError::from(SyntaxError::new(Span::new(7, 8), "invalid syntax"));
    assert_eq!(err.line_col(&index), LineCol::new(2, 3));
}
