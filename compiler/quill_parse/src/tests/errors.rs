use super::{parse_err, syntax_err};
use crate::{parse_expression_with_config, ErrorContext, ParseError};
use pretty_assertions::assert_eq;
use quill_ir::{LineCol, LineIndex, Span};
use quill_lexer::{LexErrorKind, ScanConfig};

#[test]
fn unexpected_tokens() {
    let err = syntax_err("1 +");
    assert_eq!(err.message, "expected expression, found end of input");
    assert_eq!(err.span, Span::point(3));

    let err = syntax_err("a b");
    assert_eq!(err.message, "invalid syntax, found name");
    assert_eq!(err.span, Span::new(2, 3));

    let err = syntax_err("x := 1");
    assert_eq!(err.message, "invalid syntax, found `:=`");

    let err = syntax_err("a if b");
    assert_eq!(
        err.message,
        "expected `else` after `if` expression, found end of input"
    );
}

#[test]
fn starred_expression_alone() {
    let err = syntax_err("*a");
    assert_eq!(err.message, "cannot use starred expression here");
    assert_eq!(err.span, Span::new(0, 2));
}

#[test]
fn call_argument_order() {
    let err = syntax_err("f(a=1, b)");
    assert_eq!(err.message, "positional argument follows keyword argument");
    assert_eq!(err.context, Some(ErrorContext::CallArguments));

    let err = syntax_err("f(**a, b)");
    assert_eq!(
        err.message,
        "positional argument follows keyword argument unpacking"
    );

    let err = syntax_err("f(x for x in y, 1)");
    assert_eq!(err.message, "generator expression must be parenthesized");
}

#[test]
fn invalid_comprehension_targets() {
    let err = syntax_err("[x for 1 in y]");
    assert_eq!(err.message, "cannot assign to literal");
    assert_eq!(err.span, Span::new(7, 8));
    assert_eq!(err.context, Some(ErrorContext::Comprehension));

    let err = syntax_err("[x for f() in y]");
    assert_eq!(err.message, "cannot assign to function call");

    let err = syntax_err("[*x for x in y]");
    assert_eq!(
        err.message,
        "iterable unpacking cannot be used in comprehension"
    );
}

#[test]
fn mixing_bytes_and_text_literals() {
    let err = syntax_err(r#"b"a" "b""#);
    assert_eq!(err.message, "cannot mix bytes and nonbytes literals");
    assert_eq!(err.span, Span::new(0, 8));

    let err = syntax_err(r#"b"a" f"{b}""#);
    assert_eq!(err.message, "cannot mix bytes and nonbytes literals");
}

#[test]
fn invalid_conversion_character() {
    let err = syntax_err(r#"f"{x!z}""#);
    assert_eq!(
        err.message,
        "f-string: invalid conversion character 'z': expected 's', 'r', or 'a'"
    );
    assert_eq!(err.span, Span::new(5, 6));
    assert_eq!(err.context, Some(ErrorContext::FStringField));
    assert_eq!(
        err.to_string(),
        "f-string: invalid conversion character 'z': expected 's', 'r', or 'a' \
         (in an f-string field)"
    );
}

#[test]
fn missing_or_detached_conversion() {
    let err = syntax_err(r#"f"{x!}""#);
    assert_eq!(err.message, "f-string: missing conversion character");
    assert_eq!(err.span, Span::new(5, 6));

    let err = syntax_err(r#"f"{x! r}""#);
    assert_eq!(
        err.message,
        "f-string: conversion type must come right after the exclamation mark"
    );
}

#[test]
fn field_must_close_after_its_expression() {
    let err = syntax_err(r#"f"{x y}""#);
    assert_eq!(err.message, "f-string: expecting '}'");
    assert_eq!(err.span, Span::new(5, 6));
    assert_eq!(err.context, Some(ErrorContext::FStringField));

    let err = syntax_err(r#"f"{a=b}""#);
    assert_eq!(err.message, "f-string: expecting '}'");
}

#[test]
fn unparenthesized_lambda_in_field() {
    let err = syntax_err(r#"f"{lambda x: 1}""#);
    assert_eq!(
        err.message,
        "f-string: lambda expressions are not allowed without parentheses"
    );
    assert_eq!(err.span, Span::new(3, 9));
}

#[test]
fn starred_field_alone() {
    let err = syntax_err(r#"f"{*a}""#);
    assert_eq!(err.message, "cannot use starred expression here");
    assert_eq!(err.context, Some(ErrorContext::FStringField));
}

#[test]
fn errors_in_nested_fields_keep_the_innermost_context() {
    let err = syntax_err(r#"f"{x:{f(a=1, b)}}""#);
    assert_eq!(err.context, Some(ErrorContext::CallArguments));
}

#[test]
fn lexical_errors_pass_through() {
    let err = parse_err(r#"f"{unterminated""#);
    let ParseError::Lex(lex) = err else {
        panic!("expected a lexical error, got {err:?}");
    };
    assert_eq!(lex.kind, LexErrorKind::UnterminatedField);
    assert_eq!(lex.span, Span::new(2, 3));

    let err = parse_err("f'{}'");
    assert!(!err.is_syntax());
    assert_eq!(err.span(), Span::new(2, 4));
}

#[test]
fn bracket_errors_are_syntax_errors() {
    let err = parse_err("f'{a(]}'");
    assert!(err.is_syntax());
    assert_eq!(err.span(), Span::new(5, 6));
    assert_eq!(
        err.to_string(),
        "closing ']' does not match the innermost open bracket"
    );
}

#[test]
fn nesting_limit_from_config() {
    let config = ScanConfig {
        max_fstring_depth: 1,
        ..ScanConfig::default()
    };
    let err = parse_expression_with_config("f'{f\"{1}\"}'", config).unwrap_err();
    let ParseError::Lex(lex) = err else {
        panic!("expected a lexical error, got {err:?}");
    };
    assert_eq!(lex.kind, LexErrorKind::TooDeeplyNested);
}

#[test]
fn error_positions_are_line_and_column() {
    let source = "(\n  1 +)";
    let err = parse_err(source);
    let index = LineIndex::new(source);
    assert_eq!(err.line_col(&index), LineCol::new(2, 6));
}
