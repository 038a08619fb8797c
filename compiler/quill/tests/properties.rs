// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end f-string properties, checked through the public API.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use quill::ast::{ExprKind, FStringPart};
use quill::{
    decode_literal, parse_expression, tokenize, Config, LexErrorKind, ParseError, Span,
    TokenKind, TokenList,
};

fn tokens(source: &str) -> TokenList {
    tokenize(source, &Config::default()).unwrap()
}

fn texts<'a>(tokens: &TokenList, source: &'a str) -> Vec<&'a str> {
    tokens.iter().map(|t| t.text(source)).collect()
}

#[test]
fn flat_literal_round_trips() {
    for source in [r#"f"abc""#, "f'x y'", r#"rf"\d+""#, "F'''multi\nline'''", "f''"] {
        let tokens = tokens(source);
        let TokenKind::FStringEnd { .. } = tokens[1].kind else {
            panic!("expected START then END for {source:?}, got {:?}", tokens.kinds());
        };
        let joined = format!("{}{}", tokens[0].text(source), tokens[1].text(source));
        assert_eq!(joined, source);
    }
}

#[test]
fn doubled_braces_never_open_a_field() {
    let source = r#"f"{{literal}}""#;
    let tokens = tokens(source);
    assert_eq!(texts(&tokens, source), vec!["f\"", "{{literal}}\"", ""]);
    let TokenKind::FStringEnd { text } = tokens[1].kind else {
        panic!("expected END, got {:?}", tokens[1]);
    };
    let TokenKind::FStringStart(delimiter) = tokens[0].kind else {
        panic!("expected START, got {:?}", tokens[0]);
    };
    let expanded = decode_literal(text.text(source), delimiter.flags, true).unwrap();
    assert_eq!(expanded, "{literal}");
}

#[test]
fn same_quote_nesting() {
    let source = r#"f"{f"{1+1}"}""#;
    let output = parse_expression(source, &Config::default()).unwrap();
    assert_eq!(
        output.dump(source),
        "(fstring (field (fstring (field (+ 1 1)))))"
    );

    let ExprKind::FString { parts, delimiter } = output.root_expr().kind else {
        panic!("expected an f-string");
    };
    let [FStringPart::Field(field)] = output.arena.get_fstring_parts(parts) else {
        panic!("expected one field");
    };
    let ExprKind::FString {
        delimiter: inner, ..
    } = output.arena.get_expr(field.expr).kind
    else {
        panic!("expected a nested f-string");
    };
    assert_eq!((inner.quote, inner.size), (delimiter.quote, delimiter.size));
}

#[test]
fn backslash_allowed_in_field_expression() {
    let source = r#"f"{'\n'.join(a)}""#;
    let output = parse_expression(source, &Config::default()).unwrap();
    assert_eq!(
        output.dump(source),
        r#"(fstring (field (call (. (str "\\n") join) a)))"#
    );
}

#[test]
fn format_spec_holds_a_nested_field() {
    let source = r#"f"{x:{width}}""#;
    let output = parse_expression(source, &Config::default()).unwrap();
    let ExprKind::FString { parts, .. } = output.root_expr().kind else {
        panic!("expected an f-string");
    };
    let [FStringPart::Field(field)] = output.arena.get_fstring_parts(parts) else {
        panic!("expected one field");
    };
    let spec = field.format_spec.expect("format spec");
    let [FStringPart::Field(nested)] = output.arena.get_fstring_parts(spec) else {
        panic!("expected one nested field in the spec");
    };
    assert_eq!(output.arena.get_expr(nested.expr).span.text(source), "width");
}

#[test]
fn top_level_colon_starts_the_format_spec() {
    let source = r#"f"{y:=3}""#;
    let output = parse_expression(source, &Config::default()).unwrap();
    assert_eq!(output.dump(source), r#"(fstring (field y (spec "=3")))"#);
    assert!(output
        .arena
        .exprs()
        .all(|e| !matches!(e.kind, ExprKind::NamedExpr { .. })));
}

#[test]
fn unterminated_field_is_reported_at_the_brace() {
    let source = r#"f"{unterminated""#;
    let err = parse_expression(source, &Config::default()).unwrap_err();
    let ParseError::Lex(lex) = err else {
        panic!("expected a lexical error, got {err:?}");
    };
    assert_eq!(lex.kind, LexErrorKind::UnterminatedField);
    assert_eq!(lex.span, Span::new(2, 3));
}

#[test]
fn newline_rules_follow_the_quote_size() {
    let err = tokenize("f\"a\nb\"", &Config::default()).unwrap_err();
    assert_eq!(err.kind, LexErrorKind::NewlineInFString);
    assert!(tokenize("f\"\"\"a\nb\"\"\"", &Config::default()).is_ok());
}

/// Well-formed f-strings built from text runs, fields and nested literals.
fn fstring_source() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        "[a-z ]{1,4}".prop_map(|text| format!("f'{text}'")),
        "[a-z]{1,3}".prop_map(|name| format!("f\"{{v{name}}}\"")),
        Just("f''".to_owned()),
    ];
    leaf.prop_recursive(4, 24, 3, |inner| {
        (
            prop::collection::vec(inner, 1..3),
            prop::bool::ANY,
            "[a-z]{0,3}",
        )
            .prop_map(|(fields, triple, text)| {
                let quote = if triple { "\"\"\"" } else { "\"" };
                let body: String = fields.iter().map(|f| format!("{text}{{{f}}}")).collect();
                format!("f{quote}{body}{quote}")
            })
    })
}

proptest! {
    #[test]
    fn starts_and_ends_balance(source in fstring_source()) {
        let tokens = tokens(&source);
        let mut depth = 0usize;
        let mut max_depth = 0usize;
        for token in tokens.iter() {
            match token.kind {
                TokenKind::FStringStart(_) => {
                    depth += 1;
                    max_depth = max_depth.max(depth);
                }
                TokenKind::FStringEnd { .. } => {
                    prop_assert!(depth > 0, "END without START in {source:?}");
                    depth -= 1;
                }
                _ => {}
            }
        }
        prop_assert_eq!(depth, 0);
        prop_assert!(max_depth >= 1);
        prop_assert!(parse_expression(&source, &Config::default()).is_ok());
    }
}
