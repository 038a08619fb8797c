use super::*;
use pretty_assertions::assert_eq;

#[test]
fn error_construction() {
    let span = Span::new(2, 3);
    let err = LexError::new(span, LexErrorKind::UnterminatedField);
    assert_eq!(err.span, span);
    assert_eq!(err.context, LexErrorContext::TopLevel);
    assert_eq!(err.suggestions.len(), 1);
    assert_eq!(err.to_string(), "f-string: expecting '}'");
}

#[test]
fn from_tag_reads_characters_at_site() {
    let source = "(a]";
    let err = LexError::from_tag(RawTag::MismatchedBracket, Span::new(2, 3), source);
    assert_eq!(err.kind, LexErrorKind::MismatchedBracket { close: ']' });

    let err = LexError::from_tag(RawTag::UnclosedBracket, Span::new(0, 1), source);
    assert_eq!(err.kind, LexErrorKind::UnclosedBracket { open: '(' });
    assert_eq!(err.to_string(), "'(' was never closed");
}

#[test]
fn empty_field_names_its_marker() {
    let source = "f'{!r}'";
    let err = LexError::from_tag(RawTag::EmptyField, Span::new(2, 4), source);
    assert_eq!(err.kind, LexErrorKind::EmptyField { marker: '!' });
    assert_eq!(
        err.to_string(),
        "f-string: valid expression required before '!'"
    );
}

#[test]
fn invalid_character_and_null() {
    let err = LexError::from_tag(RawTag::InvalidCharacter, Span::new(0, 3), "€");
    assert_eq!(err.kind, LexErrorKind::InvalidCharacter { ch: '€' });
    assert_eq!(err.to_string(), "invalid character '€' in source");

    let err = LexError::from_tag(RawTag::InvalidCharacter, Span::new(1, 2), "a\0");
    assert_eq!(err.kind, LexErrorKind::NullByte);
}

#[test]
fn categories() {
    assert_eq!(
        LexErrorKind::MismatchedBracket { close: ')' }.category(),
        ErrorCategory::Syntax
    );
    assert_eq!(
        LexErrorKind::UnmatchedBracket { close: ']' }.category(),
        ErrorCategory::Syntax
    );
    assert_eq!(
        LexErrorKind::UnclosedBracket { open: '{' }.category(),
        ErrorCategory::Syntax
    );
    assert_eq!(LexErrorKind::UnterminatedField.category(), ErrorCategory::Lexical);
    assert_eq!(LexErrorKind::TooDeeplyNested.category(), ErrorCategory::Lexical);
}

#[test]
fn fluent_builders() {
    let context = LexErrorContext::InsideFString { start: 4, depth: 2 };
    let err = LexError::new(Span::new(0, 1), LexErrorKind::TooDeeplyNested)
        .with_context(context)
        .with_suggestion(LexSuggestion::text("flatten the literal"));
    assert_eq!(err.context, context);
    assert_eq!(err.suggestions, vec![LexSuggestion::text("flatten the literal")]);
}

#[test]
fn line_col_of_error() {
    let source = "x\nf'{a\n'";
    let index = LineIndex::new(source);
    let err = LexError::new(Span::new(6, 7), LexErrorKind::NewlineInFString);
    assert_eq!(err.line_col(&index), LineCol::new(2, 5));
}
