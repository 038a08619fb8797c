//! Keyword resolution.
//!
//! All keywords are reserved; there are no soft keywords in expression
//! position. The lookup buckets by length first, so most identifiers are
//! rejected without a string comparison.

use quill_ir::TokenKind;

/// Look up a reserved keyword by text.
///
/// Returns `None` for ordinary identifiers.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    // Guard: all keywords are 2-6 chars and start with an ASCII letter
    if !(2..=6).contains(&bytes.len()) || !bytes[0].is_ascii_alphabetic() {
        return None;
    }

    match bytes.len() {
        2 => match text {
            "as" => Some(TokenKind::As),
            "if" => Some(TokenKind::If),
            "in" => Some(TokenKind::In),
            "is" => Some(TokenKind::Is),
            "or" => Some(TokenKind::Or),
            _ => None,
        },
        3 => match text {
            "and" => Some(TokenKind::And),
            "for" => Some(TokenKind::For),
            "not" => Some(TokenKind::Not),
            _ => None,
        },
        4 => match text {
            "None" => Some(TokenKind::None),
            "True" => Some(TokenKind::True),
            "else" => Some(TokenKind::Else),
            "from" => Some(TokenKind::From),
            _ => None,
        },
        5 => match text {
            "False" => Some(TokenKind::False),
            "async" => Some(TokenKind::Async),
            "await" => Some(TokenKind::Await),
            "yield" => Some(TokenKind::Yield),
            _ => None,
        },
        6 => match text {
            "lambda" => Some(TokenKind::Lambda),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests;
