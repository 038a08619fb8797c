//! Grammar productions.
//!
//! - `mod.rs`: entry points, expression lists, named and conditional
//!   expressions, `yield`, `lambda`
//! - `expr`: the operator precedence chain
//! - `postfix`: attribute access, calls, subscripts and slices
//! - `atom`: names, literals, string concatenation, displays and
//!   comprehensions
//! - `fstring`: the f-string rule
//!
//! Productions are named after the host grammar rule they implement.

mod atom;
mod expr;
mod fstring;
mod postfix;

use crate::error::{ErrorContext, SyntaxError};
use crate::stack::ensure_sufficient_stack;
use crate::Parser;
use quill_ir::ast::{ExprKind, Param, ParamKind};
use quill_ir::{ExprId, Span, TokenKind};

pub(crate) type PResult<T> = Result<T, SyntaxError>;

/// A production that parses one element of a comma-separated list.
type Element<'a> = fn(&mut Parser<'a>) -> PResult<ExprId>;

impl<'a> Parser<'a> {
    /// eval: (yield_expr | star_expressions) NEWLINE* EOF
    pub(crate) fn eval_input(&mut self) -> PResult<ExprId> {
        self.skip_newlines();
        let root = if self.check(&TokenKind::Yield) {
            self.yield_expr()?
        } else {
            self.star_expressions()?
        };
        self.skip_newlines();
        if !self.is_at_end() {
            return Err(self.unexpected("invalid syntax"));
        }
        Ok(root)
    }

    /// The expression of an f-string field: yield_expr | star_named_expressions
    pub(crate) fn field_expr(&mut self) -> PResult<ExprId> {
        if self.check(&TokenKind::Yield) {
            self.yield_expr()
        } else {
            self.star_named_expressions()
        }
    }

    /// star_expressions: star_expression (',' star_expression)* [',']
    pub(crate) fn star_expressions(&mut self) -> PResult<ExprId> {
        self.expr_list(Self::star_expression)
    }

    /// star_named_expressions: star_named_expression (',' star_named_expression)* [',']
    pub(crate) fn star_named_expressions(&mut self) -> PResult<ExprId> {
        self.expr_list(Self::star_named_expression)
    }

    /// A comma-separated list of `element`. Any comma makes it a tuple; a
    /// trailing comma is allowed when nothing that starts an expression
    /// follows it.
    fn expr_list(&mut self, element: Element<'a>) -> PResult<ExprId> {
        let first = element(self)?;
        if !self.check(&TokenKind::Comma) {
            self.reject_starred(first)?;
            return Ok(first);
        }
        let mut items = vec![first];
        while self.eat(&TokenKind::Comma) {
            if !self.current_kind().can_start_expr() {
                break;
            }
            items.push(element(self)?);
        }
        let span = self.span_of(first).merge(self.previous_span());
        let items = self.arena.alloc_expr_list(items);
        Ok(self.alloc(ExprKind::Tuple(items), span))
    }

    /// A starred expression on its own is only valid as a list item.
    pub(crate) fn reject_starred(&self, id: ExprId) -> PResult<()> {
        let expr = self.arena.get_expr(id);
        if matches!(expr.kind, ExprKind::Starred(_)) {
            return Err(SyntaxError::new(
                expr.span,
                "cannot use starred expression here",
            ));
        }
        Ok(())
    }

    fn star_expression(&mut self) -> PResult<ExprId> {
        if self.check(&TokenKind::Star) {
            self.starred()
        } else {
            self.expression()
        }
    }

    pub(crate) fn star_named_expression(&mut self) -> PResult<ExprId> {
        if self.check(&TokenKind::Star) {
            self.starred()
        } else {
            self.named_expression()
        }
    }

    /// '*' bitwise_or
    pub(crate) fn starred(&mut self) -> PResult<ExprId> {
        let star = self.advance();
        let value = self.bitwise_or()?;
        let span = star.span.merge(self.span_of(value));
        Ok(self.alloc(ExprKind::Starred(value), span))
    }

    /// named_expression: NAME ':=' expression | expression
    pub(crate) fn named_expression(&mut self) -> PResult<ExprId> {
        if self.check(&TokenKind::Name) && self.peek_kind_at(1) == TokenKind::ColonEq {
            let name = self.advance();
            let target = self.alloc(ExprKind::Name, name.span);
            self.advance();
            let value = self.expression()?;
            let span = name.span.merge(self.span_of(value));
            return Ok(self.alloc(ExprKind::NamedExpr { target, value }, span));
        }
        let expr = self.expression()?;
        if self.check(&TokenKind::ColonEq) {
            return Err(SyntaxError::new(
                self.span_of(expr),
                "assignment expression target must be a name",
            ));
        }
        Ok(expr)
    }

    /// expression: lambdef | disjunction ['if' disjunction 'else' expression]
    pub(crate) fn expression(&mut self) -> PResult<ExprId> {
        ensure_sufficient_stack(|| self.expression_inner())
    }

    fn expression_inner(&mut self) -> PResult<ExprId> {
        if self.check(&TokenKind::Lambda) {
            return self.lambda();
        }
        let body = self.disjunction()?;
        if !self.eat(&TokenKind::If) {
            return Ok(body);
        }
        let test = self.disjunction()?;
        if !self.check(&TokenKind::Else) {
            return Err(self.unexpected("expected `else` after `if` expression"));
        }
        self.advance();
        let orelse = self.expression()?;
        let span = self.span_of(body).merge(self.span_of(orelse));
        Ok(self.alloc(ExprKind::IfElse { test, body, orelse }, span))
    }

    /// yield_expr: 'yield' 'from' expression | 'yield' [star_expressions]
    pub(crate) fn yield_expr(&mut self) -> PResult<ExprId> {
        let keyword = self.advance();
        if self.eat(&TokenKind::From) {
            let value = self.expression()?;
            let span = keyword.span.merge(self.span_of(value));
            return Ok(self.alloc(ExprKind::YieldFrom(value), span));
        }
        if self.current_kind().can_start_expr() {
            let value = self.star_expressions()?;
            let span = keyword.span.merge(self.span_of(value));
            return Ok(self.alloc(ExprKind::Yield(Some(value)), span));
        }
        Ok(self.alloc(ExprKind::Yield(None), keyword.span))
    }

    /// lambdef: 'lambda' [lambda_params] ':' expression
    fn lambda(&mut self) -> PResult<ExprId> {
        let keyword = self.advance();
        let mut params = Vec::new();
        while !self.check(&TokenKind::Colon) {
            let param = self
                .lambda_param()
                .map_err(|e| e.or_context(ErrorContext::Lambda))?;
            params.push(param);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::Colon)
            .map_err(|e| e.or_context(ErrorContext::Lambda))?;
        let body = self.expression()?;
        let params = self.arena.alloc_params(params);
        let span = keyword.span.merge(self.span_of(body));
        Ok(self.alloc(ExprKind::Lambda { params, body }, span))
    }

    /// One lambda parameter: `name[=default]`, `*[name]`, `**name` or `/`.
    fn lambda_param(&mut self) -> PResult<Param> {
        let token = self.current();
        match token.kind {
            TokenKind::Slash => {
                self.advance();
                Ok(Param {
                    kind: ParamKind::PositionalOnlyMarker,
                    name: Span::point(token.span.start),
                    default: None,
                })
            }
            TokenKind::Star => {
                self.advance();
                if self.check(&TokenKind::Name) {
                    let name = self.advance().span;
                    Ok(Param {
                        kind: ParamKind::VarArgs,
                        name,
                        default: None,
                    })
                } else {
                    Ok(Param {
                        kind: ParamKind::KeywordOnlyMarker,
                        name: Span::point(token.span.start),
                        default: None,
                    })
                }
            }
            TokenKind::DoubleStar => {
                self.advance();
                let name = self.expect(&TokenKind::Name)?.span;
                Ok(Param {
                    kind: ParamKind::KwArgs,
                    name,
                    default: None,
                })
            }
            TokenKind::Name => {
                self.advance();
                let default = if self.eat(&TokenKind::Eq) {
                    Some(self.expression()?)
                } else {
                    None
                };
                Ok(Param {
                    kind: ParamKind::Normal,
                    name: token.span,
                    default,
                })
            }
            _ => Err(self.unexpected("expected parameter")),
        }
    }
}
