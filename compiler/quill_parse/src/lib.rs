//! Recursive descent parser for quill expressions.
//!
//! Consumes the token list produced by `quill_lexer` and builds a flat AST
//! in an [`ExprArena`]. F-strings arrive already split into
//! `FStringStart`/`FStringMiddle`/`FStringEnd` tokens with ordinary tokens
//! for every field expression, so the f-string rule is a plain grammar
//! production that calls back into the expression grammar.
//!
//! Parsing stops at the first error.

mod cursor;
mod error;
mod grammar;
mod stack;

pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError, SyntaxError};

use quill_ir::ast::{BinaryOp, Expr, ExprKind};
use quill_ir::{ExprArena, ExprId, Span, Token, TokenKind, TokenList};
use quill_lexer::ScanConfig;
use tracing::debug;

/// A parsed expression and the arena that owns its nodes.
#[derive(Debug)]
pub struct ParseOutput {
    pub arena: ExprArena,
    pub root: ExprId,
}

impl ParseOutput {
    pub fn root_expr(&self) -> &Expr {
        self.arena.get_expr(self.root)
    }

    /// S-expression rendering of the whole tree.
    pub fn dump(&self, source: &str) -> String {
        self.arena.dump(self.root, source)
    }
}

/// Lex and parse `source` as a single expression (eval input).
pub fn parse_expression(source: &str) -> Result<ParseOutput, ParseError> {
    parse_expression_with_config(source, ScanConfig::default())
}

/// Lex and parse `source` with explicit f-string nesting limits.
pub fn parse_expression_with_config(
    source: &str,
    config: ScanConfig,
) -> Result<ParseOutput, ParseError> {
    let tokens = quill_lexer::lex_with_config(source, config)?;
    let output = parse_tokens(&tokens, source)?;
    debug!(
        tokens = tokens.len(),
        nodes = output.arena.expr_count(),
        "parsed expression"
    );
    Ok(output)
}

/// Parse an already-lexed token list. `source` must be the text it was
/// lexed from.
pub fn parse_tokens(tokens: &TokenList, source: &str) -> Result<ParseOutput, SyntaxError> {
    let mut parser = Parser::new(tokens, source);
    let root = parser.eval_input()?;
    Ok(ParseOutput {
        arena: parser.arena,
        root,
    })
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
    source: &'a str,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, source: &'a str) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            arena: ExprArena::with_capacity(source.len()),
            source,
        }
    }

    // Cursor delegation.

    #[inline]
    fn current(&self) -> Token {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn peek_kind_at(&self, n: usize) -> TokenKind {
        self.cursor.peek_kind_at(n)
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> Token {
        self.cursor.advance()
    }

    #[inline]
    fn eat(&mut self, kind: &TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    #[inline]
    fn expect(&mut self, kind: &TokenKind) -> Result<Token, SyntaxError> {
        self.cursor.expect(kind)
    }

    #[inline]
    fn unexpected(&self, message: &str) -> SyntaxError {
        self.cursor.unexpected(message)
    }

    fn skip_newlines(&mut self) {
        while self.eat(&TokenKind::Newline) {}
    }

    // Arena helpers.

    #[inline]
    fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, span))
    }

    #[inline]
    fn span_of(&self, id: ExprId) -> Span {
        self.arena.get_expr(id).span
    }

    fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        let span = self.span_of(left).merge(self.span_of(right));
        self.alloc(ExprKind::Binary { op, left, right }, span)
    }
}

#[cfg(test)]
mod tests;
