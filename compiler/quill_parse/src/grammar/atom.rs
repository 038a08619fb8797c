//! Atoms: names, literals, adjacent string concatenation, parenthesized
//! forms, list/set/dict displays and comprehensions.

use super::PResult;
use crate::error::{ErrorContext, SyntaxError};
use crate::Parser;
use quill_ir::ast::{Comprehension, ComprehensionRange, Constant, DictEntry, ExprKind, NumberKind};
use quill_ir::{ExprId, ExprRange, Span, TokenKind};

impl Parser<'_> {
    pub(crate) fn atom(&mut self) -> PResult<ExprId> {
        let token = self.current();
        let kind = match token.kind {
            TokenKind::Name => ExprKind::Name,
            TokenKind::Int => ExprKind::Number(NumberKind::Int),
            TokenKind::Float => ExprKind::Number(NumberKind::Float),
            TokenKind::Imaginary => ExprKind::Number(NumberKind::Imaginary),
            TokenKind::None => ExprKind::Constant(Constant::None),
            TokenKind::True => ExprKind::Constant(Constant::True),
            TokenKind::False => ExprKind::Constant(Constant::False),
            TokenKind::Ellipsis => ExprKind::Constant(Constant::Ellipsis),
            TokenKind::String(_) | TokenKind::FStringStart(_) => return self.strings(),
            TokenKind::LParen => return self.paren(),
            TokenKind::LBracket => return self.list_display(),
            TokenKind::LBrace => return self.brace_display(),
            _ => return Err(self.unexpected("expected expression")),
        };
        self.advance();
        Ok(self.alloc(kind, token.span))
    }

    /// strings: (STRING | fstring)+
    ///
    /// Adjacent literals concatenate. Bytes and text literals do not mix.
    fn strings(&mut self) -> PResult<ExprId> {
        let start = self.current_span();
        let mut parts = Vec::new();
        let mut bytes = None;
        loop {
            let token = self.current();
            let (id, is_bytes) = match token.kind {
                TokenKind::String(delimiter) => {
                    self.advance();
                    let body = Span::new(
                        token.span.start + delimiter.opener_len(),
                        token.span.end - delimiter.closer_len(),
                    );
                    let id = self.alloc(ExprKind::Str { delimiter, body }, token.span);
                    (id, delimiter.flags.is_bytes())
                }
                TokenKind::FStringStart(_) => (self.fstring()?, false),
                _ => break,
            };
            match bytes {
                Some(previous) if previous != is_bytes => {
                    return Err(SyntaxError::new(
                        start.merge(self.previous_span()),
                        "cannot mix bytes and nonbytes literals",
                    ));
                }
                _ => bytes = Some(is_bytes),
            }
            parts.push(id);
        }
        if let [single] = parts[..] {
            return Ok(single);
        }
        let span = start.merge(self.previous_span());
        let parts = self.arena.alloc_expr_list(parts);
        Ok(self.alloc(ExprKind::Concat(parts), span))
    }

    /// '(' ')' | '(' yield_expr ')' | '(' named_expression ')'
    /// | '(' star_named_expression ',' ... ')' | '(' genexp ')'
    fn paren(&mut self) -> PResult<ExprId> {
        let open = self.advance().span;
        self.paren_body(open)
            .map_err(|e| e.or_context(ErrorContext::Parenthesized))
    }

    fn paren_body(&mut self, open: Span) -> PResult<ExprId> {
        if self.check(&TokenKind::RParen) {
            let close = self.advance().span;
            return Ok(self.alloc(ExprKind::Tuple(ExprRange::EMPTY), open.merge(close)));
        }
        if self.check(&TokenKind::Yield) {
            let value = self.yield_expr()?;
            self.expect(&TokenKind::RParen)?;
            return Ok(value);
        }
        let first = self.star_named_expression()?;
        if self.starts_comprehension() {
            self.reject_unpacking_in_comprehension(first)?;
            let generators = self.comprehension_clauses()?;
            let close = self.expect(&TokenKind::RParen)?.span;
            return Ok(self.alloc(
                ExprKind::Generator {
                    elt: first,
                    generators,
                },
                open.merge(close),
            ));
        }
        if !self.check(&TokenKind::Comma) {
            self.expect(&TokenKind::RParen)?;
            self.reject_starred(first)?;
            return Ok(first);
        }
        let items = self.display_items(first, &TokenKind::RParen)?;
        let close = self.expect(&TokenKind::RParen)?.span;
        Ok(self.alloc(ExprKind::Tuple(items), open.merge(close)))
    }

    /// '[' [star_named_expressions] ']' | '[' listcomp ']'
    fn list_display(&mut self) -> PResult<ExprId> {
        let open = self.advance().span;
        self.list_body(open)
            .map_err(|e| e.or_context(ErrorContext::Display))
    }

    fn list_body(&mut self, open: Span) -> PResult<ExprId> {
        if self.check(&TokenKind::RBracket) {
            let close = self.advance().span;
            return Ok(self.alloc(ExprKind::List(ExprRange::EMPTY), open.merge(close)));
        }
        let first = self.star_named_expression()?;
        if self.starts_comprehension() {
            self.reject_unpacking_in_comprehension(first)?;
            let generators = self.comprehension_clauses()?;
            let close = self.expect(&TokenKind::RBracket)?.span;
            return Ok(self.alloc(
                ExprKind::ListComp {
                    elt: first,
                    generators,
                },
                open.merge(close),
            ));
        }
        let items = self.display_items(first, &TokenKind::RBracket)?;
        let close = self.expect(&TokenKind::RBracket)?.span;
        Ok(self.alloc(ExprKind::List(items), open.merge(close)))
    }

    /// '{' [dict_items | star_named_expressions] '}' and the dict/set
    /// comprehensions. `{}` is an empty dict.
    fn brace_display(&mut self) -> PResult<ExprId> {
        let open = self.advance().span;
        self.brace_body(open)
            .map_err(|e| e.or_context(ErrorContext::Display))
    }

    fn brace_body(&mut self, open: Span) -> PResult<ExprId> {
        if self.check(&TokenKind::RBrace) {
            let close = self.advance().span;
            let entries = self.arena.alloc_dict_entries([]);
            return Ok(self.alloc(ExprKind::Dict(entries), open.merge(close)));
        }
        if self.check(&TokenKind::DoubleStar) {
            let first = self.dict_entry()?;
            return self.dict_rest(open, first);
        }
        let first = self.star_named_expression()?;
        if self.eat(&TokenKind::Colon) {
            self.reject_starred(first)?;
            let value = self.expression()?;
            if self.starts_comprehension() {
                let generators = self.comprehension_clauses()?;
                let close = self.expect(&TokenKind::RBrace)?.span;
                return Ok(self.alloc(
                    ExprKind::DictComp {
                        key: first,
                        value,
                        generators,
                    },
                    open.merge(close),
                ));
            }
            let entry = DictEntry {
                key: Some(first),
                value,
            };
            return self.dict_rest(open, entry);
        }
        if self.starts_comprehension() {
            self.reject_unpacking_in_comprehension(first)?;
            let generators = self.comprehension_clauses()?;
            let close = self.expect(&TokenKind::RBrace)?.span;
            return Ok(self.alloc(
                ExprKind::SetComp {
                    elt: first,
                    generators,
                },
                open.merge(close),
            ));
        }
        let items = self.display_items(first, &TokenKind::RBrace)?;
        let close = self.expect(&TokenKind::RBrace)?.span;
        Ok(self.alloc(ExprKind::Set(items), open.merge(close)))
    }

    /// Remaining `, entry` pairs of a dict display after `first`.
    fn dict_rest(&mut self, open: Span, first: DictEntry) -> PResult<ExprId> {
        let mut entries = vec![first];
        while self.eat(&TokenKind::Comma) {
            if self.check(&TokenKind::RBrace) {
                break;
            }
            entries.push(self.dict_entry()?);
        }
        let close = self.expect(&TokenKind::RBrace)?.span;
        let entries = self.arena.alloc_dict_entries(entries);
        Ok(self.alloc(ExprKind::Dict(entries), open.merge(close)))
    }

    /// kvpair: expression ':' expression | '**' bitwise_or
    fn dict_entry(&mut self) -> PResult<DictEntry> {
        if self.eat(&TokenKind::DoubleStar) {
            let value = self.bitwise_or()?;
            return Ok(DictEntry { key: None, value });
        }
        let key = self.expression()?;
        self.expect(&TokenKind::Colon)?;
        let value = self.expression()?;
        Ok(DictEntry {
            key: Some(key),
            value,
        })
    }

    /// The rest of a comma-separated display after `first`, stopping before
    /// `close`.
    fn display_items(&mut self, first: ExprId, close: &TokenKind) -> PResult<ExprRange> {
        let mut items = vec![first];
        while self.eat(&TokenKind::Comma) {
            if self.check(close) {
                break;
            }
            items.push(self.star_named_expression()?);
        }
        Ok(self.arena.alloc_expr_list(items))
    }

    pub(crate) fn starts_comprehension(&self) -> bool {
        self.check(&TokenKind::For) || self.check(&TokenKind::Async)
    }

    fn reject_unpacking_in_comprehension(&self, elt: ExprId) -> PResult<()> {
        let expr = self.arena.get_expr(elt);
        if matches!(expr.kind, ExprKind::Starred(_)) {
            return Err(SyntaxError::new(
                expr.span,
                "iterable unpacking cannot be used in comprehension",
            ));
        }
        Ok(())
    }

    /// for_if_clauses: (['async'] 'for' star_targets 'in' disjunction ('if' disjunction)*)+
    pub(crate) fn comprehension_clauses(&mut self) -> PResult<ComprehensionRange> {
        let mut clauses = Vec::new();
        while self.starts_comprehension() {
            let clause = self
                .comprehension_clause()
                .map_err(|e| e.or_context(ErrorContext::Comprehension))?;
            clauses.push(clause);
        }
        Ok(self.arena.alloc_comprehensions(clauses))
    }

    fn comprehension_clause(&mut self) -> PResult<Comprehension> {
        let is_async = self.eat(&TokenKind::Async);
        self.expect(&TokenKind::For)?;
        let target = self.comprehension_target()?;
        self.validate_target(target)?;
        self.expect(&TokenKind::In)?;
        let iter = self.disjunction()?;
        let mut ifs = Vec::new();
        while self.eat(&TokenKind::If) {
            ifs.push(self.disjunction()?);
        }
        let ifs = self.arena.alloc_expr_list(ifs);
        Ok(Comprehension {
            target,
            iter,
            ifs,
            is_async,
        })
    }

    /// star_targets: star_target (',' star_target)* [',']
    fn comprehension_target(&mut self) -> PResult<ExprId> {
        let first = self.target_item()?;
        if !self.check(&TokenKind::Comma) {
            return Ok(first);
        }
        let mut items = vec![first];
        while self.eat(&TokenKind::Comma) {
            if self.check(&TokenKind::In) {
                break;
            }
            items.push(self.target_item()?);
        }
        let span = self.span_of(first).merge(self.previous_span());
        let items = self.arena.alloc_expr_list(items);
        Ok(self.alloc(ExprKind::Tuple(items), span))
    }

    fn target_item(&mut self) -> PResult<ExprId> {
        if self.check(&TokenKind::Star) {
            self.starred()
        } else {
            self.bitwise_or()
        }
    }

    /// Only names, attributes, subscripts and (possibly starred) tuples and
    /// lists of those can be assigned to.
    fn validate_target(&self, id: ExprId) -> PResult<()> {
        let expr = *self.arena.get_expr(id);
        match expr.kind {
            ExprKind::Name | ExprKind::Attribute { .. } | ExprKind::Subscript { .. } => Ok(()),
            ExprKind::Starred(inner) => self.validate_target(inner),
            ExprKind::Tuple(items) | ExprKind::List(items) => self
                .arena
                .get_expr_list(items)
                .iter()
                .try_for_each(|&item| self.validate_target(item)),
            _ => Err(SyntaxError::new(
                expr.span,
                format!("cannot assign to {}", target_description(expr.kind)),
            )),
        }
    }
}

fn target_description(kind: ExprKind) -> &'static str {
    match kind {
        ExprKind::Number(_) | ExprKind::Str { .. } | ExprKind::Concat(_) => "literal",
        ExprKind::FString { .. } => "f-string expression",
        ExprKind::Constant(Constant::Ellipsis) => "ellipsis",
        ExprKind::Constant(_) => "constant",
        ExprKind::Call { .. } => "function call",
        ExprKind::Binary { .. } | ExprKind::Unary { .. } | ExprKind::Bool { .. } => "expression",
        ExprKind::Compare { .. } => "comparison",
        ExprKind::Set(_) | ExprKind::Dict(_) => "display",
        ExprKind::ListComp { .. }
        | ExprKind::SetComp { .. }
        | ExprKind::DictComp { .. }
        | ExprKind::Generator { .. } => "comprehension",
        _ => "expression",
    }
}
