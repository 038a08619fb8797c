//! The f-string rule.
//!
//! ```text
//! fstring       = FSTRING_START part* FSTRING_END
//! part          = FSTRING_MIDDLE | field
//! field         = '{' field_expr ['='] ['!' NAME] [':' spec_part*] '}'
//! spec_part     = FSTRING_MIDDLE | field
//! field_expr    = yield_expr | star_named_expressions
//! ```
//!
//! The lexer has already split the literal, so this rule only assembles
//! parts. A field's expression is parsed by the ordinary expression grammar;
//! the `=`, `!` and `:` that end it were emitted by the lexer only where they
//! sit outside every bracket of the field.

use super::PResult;
use crate::error::{ErrorContext, SyntaxError};
use crate::stack::ensure_sufficient_stack;
use crate::Parser;
use quill_ir::ast::{Conversion, ExprKind, FStringPart, FStringPartRange, Field};
use quill_ir::{ExprId, Span, TokenKind};
use tracing::trace;

impl Parser<'_> {
    pub(crate) fn fstring(&mut self) -> PResult<ExprId> {
        ensure_sufficient_stack(|| self.fstring_inner())
    }

    fn fstring_inner(&mut self) -> PResult<ExprId> {
        let start = self.advance();
        let TokenKind::FStringStart(delimiter) = start.kind else {
            return Err(SyntaxError::new(start.span, "expected f-string"));
        };
        let mut parts = Vec::new();
        loop {
            let token = self.current();
            match token.kind {
                TokenKind::FStringMiddle => {
                    self.advance();
                    parts.push(FStringPart::Literal(token.span));
                }
                TokenKind::LBrace => parts.push(FStringPart::Field(self.field()?)),
                TokenKind::FStringEnd { text } => {
                    self.advance();
                    if !text.is_empty() {
                        parts.push(FStringPart::Literal(text));
                    }
                    let parts = self.arena.alloc_fstring_parts(parts);
                    trace!(parts = parts.len(), "f-string");
                    let span = start.span.merge(token.span);
                    return Ok(self.alloc(ExprKind::FString { delimiter, parts }, span));
                }
                _ => return Err(self.unexpected("f-string: expecting '}'")),
            }
        }
    }

    fn field(&mut self) -> PResult<Field> {
        self.field_inner()
            .map_err(|e| e.or_context(ErrorContext::FStringField))
    }

    fn field_inner(&mut self) -> PResult<Field> {
        let open = self.advance();
        if self.check(&TokenKind::Lambda) {
            return Err(SyntaxError::new(
                self.current_span(),
                "f-string: lambda expressions are not allowed without parentheses",
            ));
        }
        let expr = self.field_expr()?;

        let debug_text = if self.eat(&TokenKind::Eq) {
            // Everything from after `{` up to the next token, so whitespace
            // around `=` is kept: `{x = }` echoes "x = ".
            Some(Span::new(open.span.end, self.current_span().start))
        } else {
            None
        };

        let conversion = if self.check(&TokenKind::Bang) {
            Some(self.conversion()?)
        } else {
            None
        };

        let format_spec = if self.eat(&TokenKind::Colon) {
            Some(self.format_spec()?)
        } else {
            None
        };

        let close = self.current();
        if close.kind != TokenKind::RBrace {
            let err = SyntaxError::new(close.span, "f-string: expecting '}'");
            return Err(match format_spec {
                Some(_) => err.or_context(ErrorContext::FormatSpec),
                None => err,
            });
        }
        self.advance();
        Ok(Field {
            expr,
            debug_text,
            conversion,
            format_spec,
            span: open.span.merge(close.span),
        })
    }

    /// '!' NAME, with no space between the two.
    fn conversion(&mut self) -> PResult<Conversion> {
        let bang = self.advance();
        let name = self.current();
        if matches!(name.kind, TokenKind::RBrace | TokenKind::Colon) {
            return Err(SyntaxError::new(
                name.span,
                "f-string: missing conversion character",
            ));
        }
        if name.kind != TokenKind::Name || name.span.start != bang.span.end {
            return Err(SyntaxError::new(
                name.span,
                "f-string: conversion type must come right after the exclamation mark",
            ));
        }
        let text = name.text(self.source);
        let Some(conversion) = Conversion::from_name(text) else {
            return Err(SyntaxError::new(
                name.span,
                format!(
                    "f-string: invalid conversion character '{text}': expected 's', 'r', or 'a'"
                ),
            ));
        };
        self.advance();
        Ok(conversion)
    }

    /// spec_part*: literal text and nested fields up to the closing `}`.
    fn format_spec(&mut self) -> PResult<FStringPartRange> {
        let mut parts = Vec::new();
        loop {
            let token = self.current();
            match token.kind {
                TokenKind::FStringMiddle => {
                    self.advance();
                    parts.push(FStringPart::Literal(token.span));
                }
                TokenKind::LBrace => {
                    let field = ensure_sufficient_stack(|| self.field())?;
                    parts.push(FStringPart::Field(field));
                }
                _ => break,
            }
        }
        Ok(self.arena.alloc_fstring_parts(parts))
    }
}
