//! Raw token tags.
//!
//! A [`RawToken`] is a tag plus a byte length. The scanner never produces
//! `Result::Err`; failures come out as the error tags in the 240+ range,
//! and the lexer turns the first one into a diagnostic.

/// Raw token kind, one byte.
///
/// Discriminants are grouped by range:
/// - 0..=15: names and literals
/// - 16..=19: f-string segments
/// - 32..=69: operators
/// - 80..=85: brackets
/// - 112..=116: trivia and layout
/// - 240..=254: errors
/// - 255: EOF
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Names & literals ===
    Ident = 0,
    Int = 1,
    Float = 2,
    Imaginary = 3,
    /// Ordinary string literal, prefix and quotes included.
    String = 4,

    // === f-string segments ===
    /// Prefix plus opening quotes.
    FStringStart = 16,
    /// Literal text inside an f-string or a format spec.
    FStringMiddle = 17,
    /// Closing quotes, with any folded literal text before them.
    FStringEnd = 18,

    // === Operators ===
    Plus = 32,
    Minus = 33,
    Star = 34,
    DoubleStar = 35,
    Slash = 36,
    DoubleSlash = 37,
    Percent = 38,
    At = 39,
    Shl = 40,
    Shr = 41,
    Ampersand = 42,
    Pipe = 43,
    Caret = 44,
    Tilde = 45,
    Less = 46,
    Greater = 47,
    LessEqual = 48,
    GreaterEqual = 49,
    EqualEqual = 50,
    BangEqual = 51,
    Equal = 52,
    ColonEqual = 53,
    /// Any augmented assignment: `+=`, `//=`, `>>=`, ...
    AugAssign = 54,
    Dot = 55,
    Ellipsis = 56,
    Comma = 57,
    Colon = 58,
    Semicolon = 59,
    Arrow = 60,
    Bang = 61,

    // === Brackets ===
    LeftParen = 80,
    RightParen = 81,
    LeftBracket = 82,
    RightBracket = 83,
    LeftBrace = 84,
    RightBrace = 85,

    // === Trivia & layout ===
    Whitespace = 112,
    Comment = 113,
    /// `\` followed by a line break.
    LineContinuation = 114,
    /// Line break inside brackets or an f-string field.
    SoftNewline = 115,
    /// Logical line break.
    Newline = 116,

    // === Errors ===
    InvalidCharacter = 240,
    /// `\` not followed by a line break, outside a string.
    StrayBackslash = 241,
    UnterminatedString = 242,
    UnterminatedFString = 243,
    /// A field `{` whose `}` never came.
    UnterminatedField = 244,
    /// `{}`, `{=}`, `{!r}`, `{:x}`.
    EmptyField = 245,
    /// A single `}` in f-string literal text.
    LoneRightBrace = 246,
    /// A line break in a single-quoted f-string.
    NewlineInFString = 247,
    /// `#` in a field of a single-quoted f-string.
    CommentInFString = 248,
    /// f-string or format-spec nesting past the configured limit.
    TooDeeplyNested = 249,
    /// A closing bracket that does not match the innermost opener.
    MismatchedBracket = 250,
    /// A closing bracket with no opener.
    UnmatchedBracket = 251,
    /// An opening bracket never closed before EOF.
    UnclosedBracket = 252,
    /// The delimiter stack refused a close.
    DelimiterMismatch = 253,

    // === Control ===
    Eof = 255,
}

impl RawTag {
    /// Fixed source text for tags that always have the same lexeme.
    pub fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::Plus => Some("+"),
            Self::Minus => Some("-"),
            Self::Star => Some("*"),
            Self::DoubleStar => Some("**"),
            Self::Slash => Some("/"),
            Self::DoubleSlash => Some("//"),
            Self::Percent => Some("%"),
            Self::At => Some("@"),
            Self::Shl => Some("<<"),
            Self::Shr => Some(">>"),
            Self::Ampersand => Some("&"),
            Self::Pipe => Some("|"),
            Self::Caret => Some("^"),
            Self::Tilde => Some("~"),
            Self::Less => Some("<"),
            Self::Greater => Some(">"),
            Self::LessEqual => Some("<="),
            Self::GreaterEqual => Some(">="),
            Self::EqualEqual => Some("=="),
            Self::BangEqual => Some("!="),
            Self::Equal => Some("="),
            Self::ColonEqual => Some(":="),
            Self::Dot => Some("."),
            Self::Ellipsis => Some("..."),
            Self::Comma => Some(","),
            Self::Colon => Some(":"),
            Self::Semicolon => Some(";"),
            Self::Arrow => Some("->"),
            Self::Bang => Some("!"),
            Self::LeftParen => Some("("),
            Self::RightParen => Some(")"),
            Self::LeftBracket => Some("["),
            Self::RightBracket => Some("]"),
            Self::LeftBrace => Some("{"),
            Self::RightBrace => Some("}"),
            _ => None,
        }
    }

    /// Human-readable name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ident => "identifier",
            Self::Int => "integer literal",
            Self::Float => "float literal",
            Self::Imaginary => "imaginary literal",
            Self::String => "string literal",
            Self::FStringStart => "f-string start",
            Self::FStringMiddle => "f-string text",
            Self::FStringEnd => "f-string end",
            Self::AugAssign => "augmented assignment",
            Self::Whitespace => "whitespace",
            Self::Comment => "comment",
            Self::LineContinuation => "line continuation",
            Self::SoftNewline | Self::Newline => "newline",
            Self::InvalidCharacter => "invalid character",
            Self::StrayBackslash => "stray backslash",
            Self::UnterminatedString => "unterminated string",
            Self::UnterminatedFString => "unterminated f-string",
            Self::UnterminatedField => "unterminated f-string field",
            Self::EmptyField => "empty f-string field",
            Self::LoneRightBrace => "single `}` in f-string",
            Self::NewlineInFString => "newline in single-quoted f-string",
            Self::CommentInFString => "comment in single-quoted f-string",
            Self::TooDeeplyNested => "nesting too deep",
            Self::MismatchedBracket => "mismatched bracket",
            Self::UnmatchedBracket => "unmatched bracket",
            Self::UnclosedBracket => "unclosed bracket",
            Self::DelimiterMismatch => "delimiter mismatch",
            Self::Eof => "end of file",
            Self::Plus => "`+`",
            Self::Minus => "`-`",
            Self::Star => "`*`",
            Self::DoubleStar => "`**`",
            Self::Slash => "`/`",
            Self::DoubleSlash => "`//`",
            Self::Percent => "`%`",
            Self::At => "`@`",
            Self::Shl => "`<<`",
            Self::Shr => "`>>`",
            Self::Ampersand => "`&`",
            Self::Pipe => "`|`",
            Self::Caret => "`^`",
            Self::Tilde => "`~`",
            Self::Less => "`<`",
            Self::Greater => "`>`",
            Self::LessEqual => "`<=`",
            Self::GreaterEqual => "`>=`",
            Self::EqualEqual => "`==`",
            Self::BangEqual => "`!=`",
            Self::Equal => "`=`",
            Self::ColonEqual => "`:=`",
            Self::Dot => "`.`",
            Self::Ellipsis => "`...`",
            Self::Comma => "`,`",
            Self::Colon => "`:`",
            Self::Semicolon => "`;`",
            Self::Arrow => "`->`",
            Self::Bang => "`!`",
            Self::LeftParen => "`(`",
            Self::RightParen => "`)`",
            Self::LeftBracket => "`[`",
            Self::RightBracket => "`]`",
            Self::LeftBrace => "`{`",
            Self::RightBrace => "`}`",
        }
    }

    /// Whitespace, comments, continuations and soft newlines.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::Comment | Self::LineContinuation | Self::SoftNewline
        )
    }

    #[inline]
    pub fn is_error(self) -> bool {
        (self as u8) >= 240 && self != Self::Eof
    }
}

/// A raw token: tag plus byte length. The start offset is implied by the
/// running sum of previous lengths.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawToken>() == 8);

#[cfg(test)]
mod tests;
