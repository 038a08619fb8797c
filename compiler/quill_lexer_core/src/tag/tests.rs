use super::*;

#[test]
fn repr_u8_semantic_ranges() {
    assert_eq!(RawTag::Ident as u8, 0);
    assert_eq!(RawTag::String as u8, 4);
    assert_eq!(RawTag::FStringStart as u8, 16);
    assert_eq!(RawTag::FStringEnd as u8, 18);
    assert_eq!(RawTag::Plus as u8, 32);
    assert_eq!(RawTag::LeftParen as u8, 80);
    assert_eq!(RawTag::Whitespace as u8, 112);
    assert_eq!(RawTag::InvalidCharacter as u8, 240);
    assert_eq!(RawTag::Eof as u8, 255);
}

#[test]
fn tag_is_one_byte() {
    assert_eq!(std::mem::size_of::<RawTag>(), 1);
}

#[test]
fn fixed_lexemes() {
    assert_eq!(RawTag::ColonEqual.lexeme(), Some(":="));
    assert_eq!(RawTag::Bang.lexeme(), Some("!"));
    assert_eq!(RawTag::DoubleSlash.lexeme(), Some("//"));
    assert_eq!(RawTag::LeftBrace.lexeme(), Some("{"));
    assert_eq!(RawTag::Ellipsis.lexeme(), Some("..."));
}

#[test]
fn variable_lexeme_returns_none() {
    for tag in [
        RawTag::Ident,
        RawTag::Int,
        RawTag::String,
        RawTag::FStringStart,
        RawTag::FStringMiddle,
        RawTag::FStringEnd,
        RawTag::AugAssign,
        RawTag::Whitespace,
        RawTag::Eof,
    ] {
        assert_eq!(tag.lexeme(), None, "{tag:?}");
    }
}

#[test]
fn names() {
    assert_eq!(RawTag::FStringMiddle.name(), "f-string text");
    assert_eq!(RawTag::EmptyField.name(), "empty f-string field");
    assert_eq!(RawTag::Arrow.name(), "`->`");
    assert_eq!(RawTag::Eof.name(), "end of file");
}

#[test]
fn trivia_classification() {
    assert!(RawTag::Whitespace.is_trivia());
    assert!(RawTag::Comment.is_trivia());
    assert!(RawTag::SoftNewline.is_trivia());
    assert!(RawTag::LineContinuation.is_trivia());
    assert!(!RawTag::Newline.is_trivia());
    assert!(!RawTag::FStringMiddle.is_trivia());
    assert!(!RawTag::Eof.is_trivia());
}

#[test]
fn error_classification() {
    assert!(RawTag::UnterminatedField.is_error());
    assert!(RawTag::DelimiterMismatch.is_error());
    assert!(!RawTag::Eof.is_error());
    assert!(!RawTag::RightBrace.is_error());
}
