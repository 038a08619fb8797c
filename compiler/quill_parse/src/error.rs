//! Parse error types.
//!
//! - [`SyntaxError`]: malformed expression, with the span of the offending
//!   token and what the parser was inside of
//! - [`ParseError`]: either a lexer error or a syntax error; parsing stops
//!   at the first one
//!
//! Bracket balance is checked by the scanner, but a bracket error is a
//! syntax error, so it converts to [`ParseError::Syntax`].

use quill_ir::{LineCol, LineIndex, Span};
use quill_lexer::{ErrorCategory, LexError};
use std::fmt;
use thiserror::Error;

/// What the parser was inside of when it failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorContext {
    FStringField,
    FormatSpec,
    CallArguments,
    Subscript,
    Lambda,
    Comprehension,
    Parenthesized,
    Display,
}

impl ErrorContext {
    pub fn description(self) -> &'static str {
        match self {
            ErrorContext::FStringField => "an f-string field",
            ErrorContext::FormatSpec => "an f-string format spec",
            ErrorContext::CallArguments => "call arguments",
            ErrorContext::Subscript => "a subscript",
            ErrorContext::Lambda => "a lambda",
            ErrorContext::Comprehension => "a comprehension",
            ErrorContext::Parenthesized => "a parenthesized expression",
            ErrorContext::Display => "a list, set or dict display",
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A malformed expression.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub struct SyntaxError {
    pub span: Span,
    pub message: String,
    /// Innermost construct being parsed, if any.
    pub context: Option<ErrorContext>,
}

impl SyntaxError {
    #[cold]
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        SyntaxError {
            span,
            message: message.into(),
            context: None,
        }
    }

    /// Set the context unless an inner one is already recorded.
    pub fn or_context(mut self, context: ErrorContext) -> Self {
        self.context.get_or_insert(context);
        self
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.context {
            Some(context) => write!(f, "{} (in {context})", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Any error that stops a parse.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        match err.category() {
            ErrorCategory::Syntax => ParseError::Syntax(SyntaxError::new(err.span, err.kind.to_string())),
            ErrorCategory::Lexical => ParseError::Lex(err),
        }
    }
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(err) => err.span,
            ParseError::Syntax(err) => err.span,
        }
    }

    pub fn line_col(&self, index: &LineIndex<'_>) -> LineCol {
        index.line_col(self.span().start)
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, ParseError::Syntax(_))
    }
}

#[cfg(test)]
mod tests;
