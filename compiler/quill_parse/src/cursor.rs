//! Token cursor for navigating the token stream.
//!
//! The last token is always `Eof`, so the cursor never runs off the end:
//! advancing at `Eof` stays there.

use crate::error::SyntaxError;
use quill_ir::{Span, Token, TokenKind, TokenList};
use std::mem::discriminant;

pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        debug_assert!(
            tokens.as_slice().last().is_some_and(|t| t.kind == TokenKind::Eof),
            "token list must end with Eof"
        );
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn current(&self) -> Token {
        self.peek_at(0)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the last consumed token; `DUMMY` before the first.
    pub fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1) {
            Some(prev) => self.tokens[prev].span,
            None => Span::DUMMY,
        }
    }

    /// Token `n` positions ahead; the final `Eof` past the end.
    pub fn peek_at(&self, n: usize) -> Token {
        let slice = self.tokens.as_slice();
        match slice.get(self.pos + n) {
            Some(token) => *token,
            None => slice.last().copied().unwrap_or_else(|| Token::dummy(TokenKind::Eof)),
        }
    }

    #[inline]
    pub fn peek_kind_at(&self, n: usize) -> TokenKind {
        self.peek_at(n).kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Whether the current token has the same variant as `kind`; payloads
    /// (delimiters, spans) are ignored.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        discriminant(&self.current_kind()) == discriminant(kind)
    }

    /// Consume and return the current token.
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches `kind`.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of `kind`, or fail at the current token.
    pub fn expect(&mut self, kind: &TokenKind) -> Result<Token, SyntaxError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(&format!("expected {}", kind.display_name())))
        }
    }

    /// Error at the current token: `message`, followed by what was found.
    #[cold]
    pub fn unexpected(&self, message: &str) -> SyntaxError {
        let token = self.current();
        SyntaxError::new(
            token.span,
            format!("{message}, found {}", token.kind.display_name()),
        )
    }
}

#[cfg(test)]
mod tests;
