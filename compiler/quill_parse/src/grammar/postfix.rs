//! Postfix trailers: `.attr`, calls and subscripts.

use super::PResult;
use crate::error::{ErrorContext, SyntaxError};
use crate::Parser;
use quill_ir::ast::{CallArg, CallArgKind, ExprKind};
use quill_ir::{ExprId, TokenKind};

impl Parser<'_> {
    /// primary: atom ('.' NAME | '(' [arguments] ')' | '[' slices ']')*
    pub(crate) fn primary(&mut self) -> PResult<ExprId> {
        let mut value = self.atom()?;
        loop {
            value = match self.current_kind() {
                TokenKind::Dot => {
                    self.advance();
                    let attr = self.expect(&TokenKind::Name)?.span;
                    let span = self.span_of(value).merge(attr);
                    self.alloc(ExprKind::Attribute { value, attr }, span)
                }
                TokenKind::LParen => self.call(value)?,
                TokenKind::LBracket => self.subscript(value)?,
                _ => return Ok(value),
            };
        }
    }

    fn call(&mut self, func: ExprId) -> PResult<ExprId> {
        self.advance();
        let args = self
            .call_args()
            .map_err(|e| e.or_context(ErrorContext::CallArguments))?;
        let close = self
            .expect(&TokenKind::RParen)
            .map_err(|e| e.or_context(ErrorContext::CallArguments))?;
        let span = self.span_of(func).merge(close.span);
        let args = self.arena.alloc_call_args(args);
        Ok(self.alloc(ExprKind::Call { func, args }, span))
    }

    /// arguments: (starred | '**' expression | NAME '=' expression
    ///             | named_expression)  (',' ...)* [',']
    ///
    /// A generator expression may stand unparenthesized as the only
    /// argument: `f(x for x in xs)`.
    fn call_args(&mut self) -> PResult<Vec<CallArg>> {
        let mut args: Vec<CallArg> = Vec::new();
        let mut seen_keyword = false;
        let mut seen_double_star = false;
        while !self.check(&TokenKind::RParen) {
            let start = self.current_span();
            let arg = match self.current_kind() {
                TokenKind::Star => {
                    self.advance();
                    let value = self.expression()?;
                    if seen_double_star {
                        return Err(SyntaxError::new(
                            start.merge(self.span_of(value)),
                            "iterable argument unpacking follows keyword argument unpacking",
                        ));
                    }
                    CallArg {
                        kind: CallArgKind::Star,
                        value,
                    }
                }
                TokenKind::DoubleStar => {
                    self.advance();
                    seen_double_star = true;
                    CallArg {
                        kind: CallArgKind::DoubleStar,
                        value: self.expression()?,
                    }
                }
                TokenKind::Name if self.peek_kind_at(1) == TokenKind::Eq => {
                    let name = self.advance().span;
                    self.advance();
                    seen_keyword = true;
                    CallArg {
                        kind: CallArgKind::Keyword(name),
                        value: self.expression()?,
                    }
                }
                _ => {
                    let mut value = self.named_expression()?;
                    if self.check(&TokenKind::For) || self.check(&TokenKind::Async) {
                        value = self.generator_argument(value, args.is_empty())?;
                    }
                    if seen_keyword || seen_double_star {
                        let message = if seen_double_star {
                            "positional argument follows keyword argument unpacking"
                        } else {
                            "positional argument follows keyword argument"
                        };
                        return Err(SyntaxError::new(self.span_of(value), message));
                    }
                    CallArg {
                        kind: CallArgKind::Positional,
                        value,
                    }
                }
            };
            args.push(arg);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        Ok(args)
    }

    /// An unparenthesized generator expression in an argument list.
    fn generator_argument(&mut self, elt: ExprId, is_first: bool) -> PResult<ExprId> {
        let generators = self.comprehension_clauses()?;
        let span = self.span_of(elt).merge(self.previous_span());
        if !is_first || self.check(&TokenKind::Comma) {
            return Err(SyntaxError::new(
                span,
                "generator expression must be parenthesized",
            ));
        }
        Ok(self.alloc(ExprKind::Generator { elt, generators }, span))
    }

    fn subscript(&mut self, value: ExprId) -> PResult<ExprId> {
        self.advance();
        let index = self
            .slices()
            .map_err(|e| e.or_context(ErrorContext::Subscript))?;
        let close = self
            .expect(&TokenKind::RBracket)
            .map_err(|e| e.or_context(ErrorContext::Subscript))?;
        let span = self.span_of(value).merge(close.span);
        Ok(self.alloc(ExprKind::Subscript { value, index }, span))
    }

    /// slices: slice (',' slice)* [','], a tuple if there is any comma.
    fn slices(&mut self) -> PResult<ExprId> {
        let first = self.slice()?;
        if !self.check(&TokenKind::Comma) {
            return Ok(first);
        }
        let mut items = vec![first];
        while self.eat(&TokenKind::Comma) {
            if !self.starts_slice() {
                break;
            }
            items.push(self.slice()?);
        }
        let span = self.span_of(first).merge(self.previous_span());
        let items = self.arena.alloc_expr_list(items);
        Ok(self.alloc(ExprKind::Tuple(items), span))
    }

    fn starts_slice(&self) -> bool {
        self.check(&TokenKind::Colon) || self.current_kind().can_start_expr()
    }

    /// slice: [expression] ':' [expression] [':' [expression]]
    ///      | starred | named_expression
    fn slice(&mut self) -> PResult<ExprId> {
        let start = self.current_span();
        if self.check(&TokenKind::Star) {
            return self.starred();
        }
        let lower = if self.check(&TokenKind::Colon) {
            None
        } else {
            let expr = self.named_expression()?;
            if !self.check(&TokenKind::Colon) {
                return Ok(expr);
            }
            Some(expr)
        };
        self.advance();
        let upper = self.slice_bound()?;
        let step = if self.eat(&TokenKind::Colon) {
            self.slice_bound()?
        } else {
            None
        };
        let span = start.merge(self.previous_span());
        Ok(self.alloc(ExprKind::Slice { lower, upper, step }, span))
    }

    fn slice_bound(&mut self) -> PResult<Option<ExprId>> {
        if self.current_kind().can_start_expr() {
            self.expression().map(Some)
        } else {
            Ok(None)
        }
    }
}
