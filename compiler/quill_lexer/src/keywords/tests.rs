use super::*;
use pretty_assertions::assert_eq;

#[test]
fn reserved_keywords_resolve() {
    let cases = [
        ("and", TokenKind::And),
        ("as", TokenKind::As),
        ("async", TokenKind::Async),
        ("await", TokenKind::Await),
        ("else", TokenKind::Else),
        ("False", TokenKind::False),
        ("for", TokenKind::For),
        ("from", TokenKind::From),
        ("if", TokenKind::If),
        ("in", TokenKind::In),
        ("is", TokenKind::Is),
        ("lambda", TokenKind::Lambda),
        ("None", TokenKind::None),
        ("not", TokenKind::Not),
        ("or", TokenKind::Or),
        ("True", TokenKind::True),
        ("yield", TokenKind::Yield),
    ];
    for (text, kind) in cases {
        assert_eq!(lookup(text), Some(kind), "{text}");
    }
}

#[test]
fn identifiers_are_not_keywords() {
    for text in ["x", "iff", "none", "true", "lambdas", "_if", "print", "self", "f"] {
        assert_eq!(lookup(text), None, "{text}");
    }
}

#[test]
fn keywords_are_case_sensitive() {
    assert_eq!(lookup("AND"), None);
    assert_eq!(lookup("Lambda"), None);
    assert_eq!(lookup("NONE"), None);
}
