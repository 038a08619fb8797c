//! Lexer for quill.
//!
//! Drives the raw scanner from `quill_lexer_core` and cooks its output into
//! a [`TokenList`] for the parser. Every token carries its byte span and
//! its line/column, including tokens nested inside f-string fields.
//!
//! Lexing is all-or-nothing: the first scanner error aborts with a
//! [`LexError`] and no token list is produced.

mod cooker;
mod keywords;
mod lex_error;
pub mod unescape;

pub use lex_error::{ErrorCategory, LexError, LexErrorContext, LexErrorKind, LexSuggestion};
pub use quill_lexer_core::ScanConfig;
pub use unescape::{decode_literal, EscapeError, EscapeErrorKind};

use cooker::TokenCooker;
use quill_ir::{Span, TokenList};
use quill_lexer_core::{RawScanner, RawTag, SourceBuffer};
use tracing::debug;

/// Lex `source` with the default nesting limits.
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    lex_with_config(source, ScanConfig::default())
}

/// Lex `source` into tokens ending with `Eof`.
///
/// A leading UTF-8 byte order mark is skipped; spans still count it.
pub fn lex_with_config(source: &str, config: ScanConfig) -> Result<TokenList, LexError> {
    if u32::try_from(source.len()).is_err() {
        return Err(LexError::new(Span::DUMMY, LexErrorKind::SourceTooLarge));
    }
    let buf = SourceBuffer::new(source);
    let cursor = buf.cursor();
    let mut offset = cursor.pos();
    let mut scanner = RawScanner::with_config(cursor, config);
    let mut cooker = TokenCooker::new(source);
    let mut tokens = TokenList::with_capacity(source.len() / 4 + 1);

    loop {
        let raw = scanner.next_token();
        let span = Span::new(offset, offset + raw.len);
        offset = span.end;

        if raw.tag.is_error() {
            let site = scanner.error_site().unwrap_or(span);
            let err = LexError::from_tag(raw.tag, site, source).with_context(cooker.context());
            debug!(tag = raw.tag.name(), span = %site, "lexing failed");
            return Err(err);
        }
        if let Some(token) = cooker.cook(raw.tag, span)? {
            tokens.push(token);
        }
        if raw.tag == RawTag::Eof {
            break;
        }
    }

    debug_assert_eq!(cooker.fstring_depth(), 0);
    debug!(
        bytes = source.len(),
        tokens = tokens.len(),
        "lexed source"
    );
    Ok(tokens)
}

#[cfg(test)]
mod tests;
