//! Lexer error types.
//!
//! Errors follow the WHERE+WHAT+WHY+HOW shape:
//! - WHERE: `span` locating the error in source
//! - WHAT: `kind` describing what went wrong
//! - WHY: `context` saying what the lexer was inside of
//! - HOW: `suggestions` with actionable fixes
//!
//! Lexing stops at the first error, so there is never more than one.

use quill_ir::{LineCol, LineIndex, Span};
use quill_lexer_core::{DelimiterError, RawTag};
use thiserror::Error;

/// A lexer error with full context for diagnostic rendering.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{kind}")]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHY we were checking.
    pub context: LexErrorContext,
    /// HOW to fix.
    pub suggestions: Vec<LexSuggestion>,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LexErrorKind {
    // === Source ===
    #[error("source is larger than {} bytes", u32::MAX)]
    SourceTooLarge,
    #[error("source contains a null byte")]
    NullByte,
    #[error("invalid character '{ch}' in source")]
    InvalidCharacter { ch: char },
    #[error("unexpected character after line continuation character")]
    StrayBackslash,

    // === Literals ===
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated f-string literal")]
    UnterminatedFString,

    // === f-string fields ===
    #[error("f-string: expecting '}}'")]
    UnterminatedField,
    #[error("f-string: valid expression required before '{marker}'")]
    EmptyField { marker: char },
    #[error("f-string: single '}}' is not allowed")]
    LoneRightBrace,
    #[error("f-string: newline not allowed in single-quoted f-string")]
    NewlineInFString,
    #[error("f-string expression part cannot include '#' in a single-quoted f-string")]
    CommentInSingleLineFString,
    #[error("f-string: too deeply nested")]
    TooDeeplyNested,
    #[error("f-string: {0}")]
    DelimiterMismatch(DelimiterError),

    // === Brackets (syntax category) ===
    #[error("closing '{close}' does not match the innermost open bracket")]
    MismatchedBracket { close: char },
    #[error("unmatched '{close}'")]
    UnmatchedBracket { close: char },
    #[error("'{open}' was never closed")]
    UnclosedBracket { open: char },
}

/// Which layer an error is reported as.
///
/// Bracket balance is checked by the scanner, but is reported as a syntax
/// error like any other malformed expression.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorCategory {
    Lexical,
    Syntax,
}

/// Lexing context at the point of error.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LexErrorContext {
    /// Not inside any f-string.
    #[default]
    TopLevel,
    /// Inside an f-string, `depth` counting the outermost as 1.
    InsideFString { start: u32, depth: u32 },
}

/// Suggestion for fixing a lexical error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LexSuggestion {
    pub message: String,
}

impl LexSuggestion {
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl LexErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LexErrorKind::MismatchedBracket { .. }
            | LexErrorKind::UnmatchedBracket { .. }
            | LexErrorKind::UnclosedBracket { .. } => ErrorCategory::Syntax,
            _ => ErrorCategory::Lexical,
        }
    }
}

impl LexError {
    #[cold]
    pub fn new(span: Span, kind: LexErrorKind) -> Self {
        let suggestions = default_suggestion(&kind).into_iter().collect();
        Self {
            span,
            kind,
            context: LexErrorContext::TopLevel,
            suggestions,
        }
    }

    /// Build the error for a scanner error tag.
    ///
    /// `span` is the report site; characters named in the message are read
    /// from `source` at that site.
    #[cold]
    pub fn from_tag(tag: RawTag, span: Span, source: &str) -> Self {
        let first = span
            .text(source)
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        let kind = match tag {
            RawTag::InvalidCharacter if first == '\0' => LexErrorKind::NullByte,
            RawTag::StrayBackslash => LexErrorKind::StrayBackslash,
            RawTag::UnterminatedString => LexErrorKind::UnterminatedString,
            RawTag::UnterminatedFString => LexErrorKind::UnterminatedFString,
            RawTag::UnterminatedField => LexErrorKind::UnterminatedField,
            RawTag::EmptyField => LexErrorKind::EmptyField {
                marker: span.text(source).chars().last().unwrap_or('}'),
            },
            RawTag::LoneRightBrace => LexErrorKind::LoneRightBrace,
            RawTag::NewlineInFString => LexErrorKind::NewlineInFString,
            RawTag::CommentInFString => LexErrorKind::CommentInSingleLineFString,
            RawTag::TooDeeplyNested => LexErrorKind::TooDeeplyNested,
            RawTag::DelimiterMismatch => LexErrorKind::DelimiterMismatch(DelimiterError::Empty),
            RawTag::MismatchedBracket => LexErrorKind::MismatchedBracket { close: first },
            RawTag::UnmatchedBracket => LexErrorKind::UnmatchedBracket { close: first },
            RawTag::UnclosedBracket => LexErrorKind::UnclosedBracket { open: first },
            _ => LexErrorKind::InvalidCharacter { ch: first },
        };
        Self::new(span, kind)
    }

    pub fn with_context(mut self, context: LexErrorContext) -> Self {
        self.context = context;
        self
    }

    pub fn with_suggestion(mut self, suggestion: LexSuggestion) -> Self {
        self.suggestions.push(suggestion);
        self
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Line and column of the error's start.
    pub fn line_col(&self, index: &LineIndex<'_>) -> LineCol {
        index.line_col(self.span.start)
    }
}

fn default_suggestion(kind: &LexErrorKind) -> Option<LexSuggestion> {
    let message = match kind {
        LexErrorKind::UnterminatedField => "add '}' to close the field",
        LexErrorKind::LoneRightBrace => "use '}}' for a literal '}'",
        LexErrorKind::NewlineInFString | LexErrorKind::CommentInSingleLineFString => {
            "use a triple-quoted f-string to span lines"
        }
        LexErrorKind::EmptyField { .. } => "put an expression inside the braces, or use '{{' for a literal '{'",
        _ => return None,
    };
    Some(LexSuggestion::text(message))
}

#[cfg(test)]
mod tests;
