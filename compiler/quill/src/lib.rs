//! quill: a tokenizer and expression parser whose f-strings are ordinary
//! grammar.
//!
//! # Usage
//!
//! ```ignore
//! use quill::{parse_expression, Config};
//!
//! let source = r#"f"{x!r:>{width}}""#;
//! let output = parse_expression(source, &Config::default())?;
//! assert_eq!(output.dump(source), r#"(fstring (field x !r (spec ">" (field width))))"#);
//! ```
//!
//! # Architecture
//!
//! ```text
//! quill_lexer_core   raw scanner, delimiter stack
//!        ↓
//! quill_lexer        positioned tokens, keywords, LexError, unescape
//!        ↓
//! quill_parse        expression grammar + f-string rule
//!        ↓
//!      quill         ← this crate: config, tracing, entry points
//! ```

mod config;

pub use config::{Config, ConfigError, FSTRING_DEPTH_VAR, FORMAT_SPEC_DEPTH_VAR};
pub use quill_ir::{ast, ExprArena, ExprId, LineCol, LineIndex, Span, Token, TokenKind, TokenList};
pub use quill_lexer::{
    decode_literal, ErrorCategory, EscapeError, EscapeErrorKind, LexError, LexErrorContext,
    LexErrorKind, ScanConfig,
};
pub use quill_parse::{ErrorContext, ParseError, ParseOutput, SyntaxError};

use std::sync::Once;
use tracing::debug;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
/// Enable with `RUST_LOG=quill_lexer=debug` or `RUST_LOG=quill_parse=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Tokenize `source`. The list always ends with `Eof`.
pub fn tokenize(source: &str, config: &Config) -> Result<TokenList, LexError> {
    quill_lexer::lex_with_config(source, config.scan)
}

/// Parse `source` as a single expression.
pub fn parse_expression(source: &str, config: &Config) -> Result<ParseOutput, ParseError> {
    let result = quill_parse::parse_expression_with_config(source, config.scan);
    if let Err(err) = &result {
        debug!(error = %err, "parse failed");
    }
    result
}

/// `line:column: message` for an error in `source`.
pub fn describe_error(source: &str, err: &ParseError) -> String {
    let index = LineIndex::new(source);
    format!("{}: {err}", err.line_col(&index))
}
