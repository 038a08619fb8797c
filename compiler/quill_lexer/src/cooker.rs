//! Token cooking layer.
//!
//! Transforms `(RawTag, len)` pairs from the raw scanner into positioned
//! [`Token`]s:
//!
//! ```text
//! source → RawScanner → (RawTag, len) → TokenCooker → Token
//! ```
//!
//! - **Trivia**: dropped (whitespace, comments, continuations, newlines
//!   inside brackets or fields)
//! - **Identifiers**: keyword lookup
//! - **Strings**: delimiter recovered from the opener text
//! - **f-strings**: START pushes its delimiter, END pops it and records
//!   the literal text folded into it
//! - **Everything else**: direct 1:1 mapping
//!
//! No values are parsed and no escapes are expanded.

use quill_ir::{Delimiter, LineIndex, Quote, QuoteSize, Span, Token, TokenKind};
use quill_lexer_core::{parse_opener, DelimiterStack, RawTag};

use crate::keywords;
use crate::lex_error::{LexError, LexErrorContext, LexErrorKind};

/// Cooks raw tokens into parser-ready tokens.
pub(crate) struct TokenCooker<'src> {
    source: &'src str,
    index: LineIndex<'src>,
    /// Delimiters of the f-strings open at the current token.
    fstrings: DelimiterStack,
}

impl<'src> TokenCooker<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Self {
            source,
            index: LineIndex::new(source),
            fstrings: DelimiterStack::new(),
        }
    }

    /// Number of f-strings open after the last cooked token.
    pub(crate) fn fstring_depth(&self) -> usize {
        self.fstrings.depth()
    }

    /// Describe where the cooker is, for error reports.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "depth is bounded by the scanner's nesting limit"
    )]
    pub(crate) fn context(&self) -> LexErrorContext {
        match self.fstrings.current_start() {
            Some(start) => LexErrorContext::InsideFString {
                start,
                depth: self.fstrings.depth() as u32,
            },
            None => LexErrorContext::TopLevel,
        }
    }

    /// Cook one raw token covering `span`.
    ///
    /// Returns `Ok(None)` for trivia. Error tags are handled by the driver
    /// and never reach this method.
    pub(crate) fn cook(&mut self, tag: RawTag, span: Span) -> Result<Option<Token>, LexError> {
        if tag.is_trivia() {
            return Ok(None);
        }
        let kind = match tag {
            RawTag::Ident => {
                keywords::lookup(span.text(self.source)).unwrap_or(TokenKind::Name)
            }
            RawTag::Int => TokenKind::Int,
            RawTag::Float => TokenKind::Float,
            RawTag::Imaginary => TokenKind::Imaginary,
            RawTag::String => TokenKind::String(self.opener(span)?),
            RawTag::FStringStart => {
                let delimiter = self.opener(span)?;
                self.fstrings.open(delimiter, span.start);
                TokenKind::FStringStart(delimiter)
            }
            RawTag::FStringMiddle => TokenKind::FStringMiddle,
            RawTag::FStringEnd => self.close_fstring(span)?,
            RawTag::Newline => TokenKind::Newline,
            RawTag::Eof => TokenKind::Eof,
            _ => punctuation(tag).ok_or_else(|| self.invalid(span))?,
        };
        Ok(Some(Token::new(kind, span, self.index.line_col(span.start))))
    }

    /// Delimiter of a string or f-string opener starting at `span.start`.
    fn opener(&self, span: Span) -> Result<Delimiter, LexError> {
        parse_opener(span.text(self.source).as_bytes()).ok_or_else(|| self.invalid(span))
    }

    /// Pop the innermost delimiter, checking it against the closing quotes
    /// at the end of `span`.
    fn close_fstring(&mut self, span: Span) -> Result<TokenKind, LexError> {
        let text = span.text(self.source);
        let Some(quote) = text.bytes().last().and_then(Quote::from_byte) else {
            return Err(self.invalid(span));
        };
        let triple = [quote.as_byte(); 3];
        let size = if text.as_bytes().ends_with(&triple) {
            QuoteSize::Triple
        } else {
            QuoteSize::Single
        };
        let context = self.context();
        let delimiter = self.fstrings.close(quote, size).map_err(|err| {
            LexError::new(span, LexErrorKind::DelimiterMismatch(err)).with_context(context)
        })?;
        Ok(TokenKind::FStringEnd {
            text: Span::new(span.start, span.end - delimiter.closer_len()),
        })
    }

    #[cold]
    fn invalid(&self, span: Span) -> LexError {
        LexError::from_tag(RawTag::InvalidCharacter, span, self.source).with_context(self.context())
    }
}

/// Operators and brackets map 1:1.
fn punctuation(tag: RawTag) -> Option<TokenKind> {
    let kind = match tag {
        RawTag::Plus => TokenKind::Plus,
        RawTag::Minus => TokenKind::Minus,
        RawTag::Star => TokenKind::Star,
        RawTag::DoubleStar => TokenKind::DoubleStar,
        RawTag::Slash => TokenKind::Slash,
        RawTag::DoubleSlash => TokenKind::DoubleSlash,
        RawTag::Percent => TokenKind::Percent,
        RawTag::At => TokenKind::At,
        RawTag::Shl => TokenKind::Shl,
        RawTag::Shr => TokenKind::Shr,
        RawTag::Ampersand => TokenKind::Amp,
        RawTag::Pipe => TokenKind::Pipe,
        RawTag::Caret => TokenKind::Caret,
        RawTag::Tilde => TokenKind::Tilde,
        RawTag::Less => TokenKind::Lt,
        RawTag::Greater => TokenKind::Gt,
        RawTag::LessEqual => TokenKind::LtEq,
        RawTag::GreaterEqual => TokenKind::GtEq,
        RawTag::EqualEqual => TokenKind::EqEq,
        RawTag::BangEqual => TokenKind::NotEq,
        RawTag::Equal => TokenKind::Eq,
        RawTag::ColonEqual => TokenKind::ColonEq,
        RawTag::AugAssign => TokenKind::AugAssign,
        RawTag::Dot => TokenKind::Dot,
        RawTag::Ellipsis => TokenKind::Ellipsis,
        RawTag::Comma => TokenKind::Comma,
        RawTag::Colon => TokenKind::Colon,
        RawTag::Semicolon => TokenKind::Semicolon,
        RawTag::Arrow => TokenKind::Arrow,
        RawTag::Bang => TokenKind::Bang,
        RawTag::LeftParen => TokenKind::LParen,
        RawTag::RightParen => TokenKind::RParen,
        RawTag::LeftBracket => TokenKind::LBracket,
        RawTag::RightBracket => TokenKind::RBracket,
        RawTag::LeftBrace => TokenKind::LBrace,
        RawTag::RightBrace => TokenKind::RBrace,
        _ => return None,
    };
    Some(kind)
}

#[cfg(test)]
mod tests;
