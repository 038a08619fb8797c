//! Parser tests.
//!
//! - `expr`: the host expression grammar
//! - `fstring`: the f-string rule and the trees it builds
//! - `errors`: error messages, spans and contexts

mod errors;
mod expr;

use crate::{parse_expression, ParseError, ParseOutput};

#[track_caller]
fn parse(source: &str) -> ParseOutput {
    match parse_expression(source) {
        Ok(output) => output,
        Err(err) => panic!("failed to parse {source:?}: {err}"),
    }
}

/// S-expression of a successful parse.
#[track_caller]
fn dump(source: &str) -> String {
    parse(source).dump(source)
}

#[track_caller]
fn parse_err(source: &str) -> ParseError {
    match parse_expression(source) {
        Ok(output) => panic!(
            "expected an error for {source:?}, got {}",
            output.dump(source)
        ),
        Err(err) => err,
    }
}

/// The syntax error of a failed parse.
#[track_caller]
fn syntax_err(source: &str) -> crate::SyntaxError {
    match parse_err(source) {
        ParseError::Syntax(err) => err,
        ParseError::Lex(err) => panic!("expected a syntax error for {source:?}, got {err}"),
    }
}
