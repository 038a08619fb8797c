//! Token types produced by the quill lexer.
//!
//! Tokens do not own text. Names, numbers and literal bodies are recovered
//! from the source through the token's [`Span`]; only data the parser cannot
//! re-derive cheaply (string delimiters, the literal part of an
//! `FStringEnd`) is stored in the kind.

use super::{Delimiter, LineCol, Span};
use std::fmt;
use std::ops::Index;

/// A token with its position in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    /// Byte range.
    pub span: Span,
    /// Line and column of `span.start`.
    pub pos: LineCol,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span, pos: LineCol) -> Self {
        Token { kind, span, pos }
    }

    /// Create a token without meaningful position, for tests and synthesized input.
    pub fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::DUMMY,
            pos: LineCol::START,
        }
    }

    /// The source text of this token.
    #[inline]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {} ({})", self.kind, self.span, self.pos)
    }
}

/// Token kinds.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    // === Names & literals ===
    Name,
    Int,
    Float,
    /// Imaginary literal: `2j`, `1.5J`.
    Imaginary,
    /// Ordinary (non-interpolated) string literal, prefix and quotes included.
    String(Delimiter),

    // === Interpolated strings ===
    /// Prefix and opening quotes of an f-string.
    FStringStart(Delimiter),
    /// A run of literal text inside an f-string or its format spec.
    /// Escapes and doubled braces are not expanded.
    FStringMiddle,
    /// Closing quotes of an f-string. `text` is the literal body folded into
    /// this token, empty unless the literal had no fields.
    FStringEnd { text: Span },

    // === Keywords ===
    And,
    As,
    Async,
    Await,
    Else,
    False,
    For,
    From,
    If,
    In,
    Is,
    Lambda,
    None,
    Not,
    Or,
    True,
    Yield,

    // === Operators ===
    Plus,
    Minus,
    Star,
    DoubleStar,
    Slash,
    DoubleSlash,
    Percent,
    At,
    Shl,
    Shr,
    Amp,
    Pipe,
    Caret,
    Tilde,
    Lt,
    Gt,
    LtEq,
    GtEq,
    EqEq,
    NotEq,
    Eq,
    /// `:=`
    ColonEq,
    /// Augmented assignment (`+=`, `//=`, ...). Never valid in an expression.
    AugAssign,
    Dot,
    Ellipsis,
    Comma,
    Colon,
    Semicolon,
    Arrow,
    /// `!`: only meaningful as the conversion marker of an f-string field.
    Bang,

    // === Brackets ===
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,

    // === Layout ===
    /// A logical line break (outside every bracket and f-string field).
    Newline,
    Eof,
}

impl TokenKind {
    /// Human-readable name for diagnostics.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Name => "name",
            TokenKind::Int | TokenKind::Float | TokenKind::Imaginary => "number",
            TokenKind::String(_) => "string literal",
            TokenKind::FStringStart(_) => "f-string start",
            TokenKind::FStringMiddle => "f-string text",
            TokenKind::FStringEnd { .. } => "f-string end",
            TokenKind::And => "`and`",
            TokenKind::As => "`as`",
            TokenKind::Async => "`async`",
            TokenKind::Await => "`await`",
            TokenKind::Else => "`else`",
            TokenKind::False => "`False`",
            TokenKind::For => "`for`",
            TokenKind::From => "`from`",
            TokenKind::If => "`if`",
            TokenKind::In => "`in`",
            TokenKind::Is => "`is`",
            TokenKind::Lambda => "`lambda`",
            TokenKind::None => "`None`",
            TokenKind::Not => "`not`",
            TokenKind::Or => "`or`",
            TokenKind::True => "`True`",
            TokenKind::Yield => "`yield`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::DoubleStar => "`**`",
            TokenKind::Slash => "`/`",
            TokenKind::DoubleSlash => "`//`",
            TokenKind::Percent => "`%`",
            TokenKind::At => "`@`",
            TokenKind::Shl => "`<<`",
            TokenKind::Shr => "`>>`",
            TokenKind::Amp => "`&`",
            TokenKind::Pipe => "`|`",
            TokenKind::Caret => "`^`",
            TokenKind::Tilde => "`~`",
            TokenKind::Lt => "`<`",
            TokenKind::Gt => "`>`",
            TokenKind::LtEq => "`<=`",
            TokenKind::GtEq => "`>=`",
            TokenKind::EqEq => "`==`",
            TokenKind::NotEq => "`!=`",
            TokenKind::Eq => "`=`",
            TokenKind::ColonEq => "`:=`",
            TokenKind::AugAssign => "augmented assignment",
            TokenKind::Dot => "`.`",
            TokenKind::Ellipsis => "`...`",
            TokenKind::Comma => "`,`",
            TokenKind::Colon => "`:`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Arrow => "`->`",
            TokenKind::Bang => "`!`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Newline => "newline",
            TokenKind::Eof => "end of input",
        }
    }

    /// Whether this token belongs to the f-string family (`START`, `MIDDLE`, `END`).
    pub fn is_fstring_part(&self) -> bool {
        matches!(
            self,
            TokenKind::FStringStart(_) | TokenKind::FStringMiddle | TokenKind::FStringEnd { .. }
        )
    }

    /// Whether this token can begin an expression.
    pub fn can_start_expr(&self) -> bool {
        matches!(
            self,
            TokenKind::Name
                | TokenKind::Int
                | TokenKind::Float
                | TokenKind::Imaginary
                | TokenKind::String(_)
                | TokenKind::FStringStart(_)
                | TokenKind::None
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Ellipsis
                | TokenKind::Lambda
                | TokenKind::Not
                | TokenKind::Await
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Tilde
                | TokenKind::Star
                | TokenKind::LParen
                | TokenKind::LBracket
                | TokenKind::LBrace
        )
    }
}

/// An ordered list of tokens, always terminated by one `Eof` token once
/// produced by the lexer.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn from_vec(tokens: Vec<Token>) -> Self {
        TokenList { tokens }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Token kinds in order, for compact assertions.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}
