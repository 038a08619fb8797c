//! Operator precedence chain.
//!
//! Lowest to highest binding:
//!
//! ```text
//! disjunction   or
//! conjunction   and
//! inversion     not
//! comparison    == != < <= > >= in, not in, is, is not
//! bitwise_or    |
//! bitwise_xor   ^
//! bitwise_and   &
//! shift_expr    << >>
//! sum           + -
//! term          * / // % @
//! factor        + - ~ (prefix)
//! power         **
//! await_primary await
//! ```

use super::PResult;
use crate::stack::ensure_sufficient_stack;
use crate::Parser;
use quill_ir::ast::{BinaryOp, BoolOp, CmpOp, Comparison, ExprKind, UnaryOp};
use quill_ir::{ExprId, TokenKind};

/// One left-associative binary level: the next-higher production and the
/// operators accepted at this level.
struct Level<'a> {
    operand: fn(&mut Parser<'a>) -> PResult<ExprId>,
    operator: fn(TokenKind) -> Option<BinaryOp>,
}

impl<'a> Parser<'a> {
    /// disjunction: conjunction ('or' conjunction)*
    pub(crate) fn disjunction(&mut self) -> PResult<ExprId> {
        let mut left = self.conjunction()?;
        while self.eat(&TokenKind::Or) {
            let right = self.conjunction()?;
            left = self.bool_op(BoolOp::Or, left, right);
        }
        Ok(left)
    }

    /// conjunction: inversion ('and' inversion)*
    fn conjunction(&mut self) -> PResult<ExprId> {
        let mut left = self.inversion()?;
        while self.eat(&TokenKind::And) {
            let right = self.inversion()?;
            left = self.bool_op(BoolOp::And, left, right);
        }
        Ok(left)
    }

    fn bool_op(&mut self, op: BoolOp, left: ExprId, right: ExprId) -> ExprId {
        let span = self.span_of(left).merge(self.span_of(right));
        self.alloc(ExprKind::Bool { op, left, right }, span)
    }

    /// inversion: 'not' inversion | comparison
    fn inversion(&mut self) -> PResult<ExprId> {
        if !self.check(&TokenKind::Not) {
            return self.comparison();
        }
        let keyword = self.advance();
        let operand = ensure_sufficient_stack(|| self.inversion())?;
        let span = keyword.span.merge(self.span_of(operand));
        Ok(self.alloc(
            ExprKind::Unary {
                op: UnaryOp::Not,
                operand,
            },
            span,
        ))
    }

    /// comparison: bitwise_or (compare_op bitwise_or)*
    ///
    /// Chains stay flat: `a < b < c` is one node with two links.
    fn comparison(&mut self) -> PResult<ExprId> {
        let left = self.bitwise_or()?;
        let mut links = Vec::new();
        while let Some(op) = self.compare_op() {
            let right = self.bitwise_or()?;
            links.push(Comparison { op, right });
        }
        let Some(last) = links.last() else {
            return Ok(left);
        };
        let span = self.span_of(left).merge(self.span_of(last.right));
        let comparisons = self.arena.alloc_comparisons(links);
        Ok(self.alloc(ExprKind::Compare { left, comparisons }, span))
    }

    /// Consume a comparison operator; `not in` and `is not` take two tokens.
    fn compare_op(&mut self) -> Option<CmpOp> {
        let op = match self.current_kind() {
            TokenKind::EqEq => CmpOp::Eq,
            TokenKind::NotEq => CmpOp::NotEq,
            TokenKind::Lt => CmpOp::Lt,
            TokenKind::LtEq => CmpOp::LtEq,
            TokenKind::Gt => CmpOp::Gt,
            TokenKind::GtEq => CmpOp::GtEq,
            TokenKind::In => CmpOp::In,
            TokenKind::Not if self.peek_kind_at(1) == TokenKind::In => {
                self.advance();
                CmpOp::NotIn
            }
            TokenKind::Is if self.peek_kind_at(1) == TokenKind::Not => {
                self.advance();
                CmpOp::IsNot
            }
            TokenKind::Is => CmpOp::Is,
            _ => return None,
        };
        self.advance();
        Some(op)
    }

    /// bitwise_or: bitwise_or '|' bitwise_xor | bitwise_xor
    pub(crate) fn bitwise_or(&mut self) -> PResult<ExprId> {
        self.binary_level(&Level {
            operand: Self::bitwise_xor,
            operator: |kind| (kind == TokenKind::Pipe).then_some(BinaryOp::BitOr),
        })
    }

    fn bitwise_xor(&mut self) -> PResult<ExprId> {
        self.binary_level(&Level {
            operand: Self::bitwise_and,
            operator: |kind| (kind == TokenKind::Caret).then_some(BinaryOp::BitXor),
        })
    }

    fn bitwise_and(&mut self) -> PResult<ExprId> {
        self.binary_level(&Level {
            operand: Self::shift_expr,
            operator: |kind| (kind == TokenKind::Amp).then_some(BinaryOp::BitAnd),
        })
    }

    fn shift_expr(&mut self) -> PResult<ExprId> {
        self.binary_level(&Level {
            operand: Self::sum,
            operator: |kind| match kind {
                TokenKind::Shl => Some(BinaryOp::Shl),
                TokenKind::Shr => Some(BinaryOp::Shr),
                _ => None,
            },
        })
    }

    fn sum(&mut self) -> PResult<ExprId> {
        self.binary_level(&Level {
            operand: Self::term,
            operator: |kind| match kind {
                TokenKind::Plus => Some(BinaryOp::Add),
                TokenKind::Minus => Some(BinaryOp::Sub),
                _ => None,
            },
        })
    }

    fn term(&mut self) -> PResult<ExprId> {
        self.binary_level(&Level {
            operand: Self::factor,
            operator: |kind| match kind {
                TokenKind::Star => Some(BinaryOp::Mul),
                TokenKind::Slash => Some(BinaryOp::Div),
                TokenKind::DoubleSlash => Some(BinaryOp::FloorDiv),
                TokenKind::Percent => Some(BinaryOp::Mod),
                TokenKind::At => Some(BinaryOp::MatMul),
                _ => None,
            },
        })
    }

    fn binary_level(&mut self, level: &Level<'a>) -> PResult<ExprId> {
        let mut left = (level.operand)(self)?;
        while let Some(op) = (level.operator)(self.current_kind()) {
            self.advance();
            let right = (level.operand)(self)?;
            left = self.binary(op, left, right);
        }
        Ok(left)
    }

    /// factor: '+' factor | '-' factor | '~' factor | power
    fn factor(&mut self) -> PResult<ExprId> {
        let op = match self.current_kind() {
            TokenKind::Plus => UnaryOp::Pos,
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Tilde => UnaryOp::Invert,
            _ => return self.power(),
        };
        let token = self.advance();
        let operand = ensure_sufficient_stack(|| self.factor())?;
        let span = token.span.merge(self.span_of(operand));
        Ok(self.alloc(ExprKind::Unary { op, operand }, span))
    }

    /// power: await_primary '**' factor | await_primary
    ///
    /// Right-associative, and binds tighter than a unary minus on its left
    /// but not on its right: `-2 ** -1` is `-(2 ** (-1))`.
    fn power(&mut self) -> PResult<ExprId> {
        let base = self.await_primary()?;
        if !self.eat(&TokenKind::DoubleStar) {
            return Ok(base);
        }
        let exponent = ensure_sufficient_stack(|| self.factor())?;
        Ok(self.binary(BinaryOp::Pow, base, exponent))
    }

    /// await_primary: 'await' primary | primary
    fn await_primary(&mut self) -> PResult<ExprId> {
        if !self.check(&TokenKind::Await) {
            return self.primary();
        }
        let keyword = self.advance();
        let value = self.primary()?;
        let span = keyword.span.merge(self.span_of(value));
        Ok(self.alloc(ExprKind::Await(value), span))
    }
}
