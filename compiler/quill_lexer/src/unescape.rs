//! Escape expansion for string and f-string literal text.
//!
//! The scanner keeps every escape verbatim; this routine turns the raw body
//! of a literal (no prefix, no quotes) into its value. It is a separate
//! step so tools can work on the token stream without paying for it.
//!
//! Recognised escapes: `\\ \' \" \a \b \f \n \r \t \v`, octal `\ooo`,
//! `\xhh`, and in text (not bytes) literals `\uXXXX` and `\UXXXXXXXX`.
//! A backslash before a line break removes both. Unknown escapes are kept
//! as written. Raw literals keep every backslash.
//!
//! Bytes literals decode to a `String` whose chars are the byte values
//! (`U+0000..=U+00FF`).

use std::iter::Peekable;
use std::str::CharIndices;

use quill_ir::StringFlags;
use thiserror::Error;

/// Escape expansion failure, `offset` pointing at the backslash.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{kind} (at byte {offset})")]
pub struct EscapeError {
    /// Byte offset into the raw text.
    pub offset: usize,
    pub kind: EscapeErrorKind,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum EscapeErrorKind {
    #[error("truncated \\{escape} escape: expected {expected} hex digits")]
    TruncatedHex { escape: char, expected: usize },
    #[error("escape value {value:#x} is not a valid character")]
    InvalidCodePoint { value: u32 },
    #[error("\\N{{...}} named escapes are not supported")]
    NamedUnicode,
}

type Chars<'a> = Peekable<CharIndices<'a>>;

/// Expand the escapes in `raw`, the body of a literal with `flags`.
///
/// With `in_fstring`, `{{` and `}}` collapse to single braces, raw or not.
pub fn decode_literal(raw: &str, flags: StringFlags, in_fstring: bool) -> Result<String, EscapeError> {
    let has_braces = in_fstring && raw.contains(['{', '}']);
    if !has_braces && (flags.is_raw() || !raw.contains('\\')) {
        return Ok(raw.to_owned());
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            '{' | '}' if in_fstring => {
                if chars.peek().is_some_and(|&(_, next)| next == c) {
                    chars.next();
                }
                out.push(c);
            }
            '\\' if !flags.is_raw() => decode_escape(i, &mut chars, flags.is_bytes(), &mut out)?,
            _ => out.push(c),
        }
    }
    Ok(out)
}

/// Expand one escape whose backslash is at `start`.
fn decode_escape(
    start: usize,
    chars: &mut Chars<'_>,
    bytes: bool,
    out: &mut String,
) -> Result<(), EscapeError> {
    let Some((_, c)) = chars.next() else {
        out.push('\\');
        return Ok(());
    };
    let decoded = match c {
        '\n' => return Ok(()),
        '\r' => {
            if chars.peek().is_some_and(|&(_, next)| next == '\n') {
                chars.next();
            }
            return Ok(());
        }
        '\\' | '\'' | '"' => c,
        'a' => '\x07',
        'b' => '\x08',
        'f' => '\x0C',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\x0B',
        '0'..='7' => {
            let value = octal(c, chars);
            to_char(value, start, bytes)?
        }
        'x' => to_char(hex(start, 'x', 2, chars)?, start, bytes)?,
        'u' if !bytes => to_char(hex(start, 'u', 4, chars)?, start, bytes)?,
        'U' if !bytes => to_char(hex(start, 'U', 8, chars)?, start, bytes)?,
        'N' if !bytes => {
            return Err(EscapeError {
                offset: start,
                kind: EscapeErrorKind::NamedUnicode,
            })
        }
        _ => {
            out.push('\\');
            c
        }
    };
    out.push(decoded);
    Ok(())
}

/// Up to three octal digits, the first already consumed.
fn octal(first: char, chars: &mut Chars<'_>) -> u32 {
    let mut value = first.to_digit(8).unwrap_or(0);
    for _ in 0..2 {
        match chars.peek().and_then(|&(_, c)| c.to_digit(8)) {
            Some(digit) => {
                value = value * 8 + digit;
                chars.next();
            }
            None => break,
        }
    }
    value
}

/// Exactly `len` hex digits.
fn hex(start: usize, escape: char, len: usize, chars: &mut Chars<'_>) -> Result<u32, EscapeError> {
    let mut value = 0u32;
    for _ in 0..len {
        let Some(digit) = chars.peek().and_then(|&(_, c)| c.to_digit(16)) else {
            return Err(EscapeError {
                offset: start,
                kind: EscapeErrorKind::TruncatedHex {
                    escape,
                    expected: len,
                },
            });
        };
        chars.next();
        value = value.wrapping_mul(16).wrapping_add(digit);
    }
    Ok(value)
}

fn to_char(value: u32, start: usize, bytes: bool) -> Result<char, EscapeError> {
    let limit = if bytes { 0xFF } else { u32::from(char::MAX) };
    char::from_u32(value)
        .filter(|_| value <= limit)
        .ok_or(EscapeError {
            offset: start,
            kind: EscapeErrorKind::InvalidCodePoint { value },
        })
}

#[cfg(test)]
mod tests;
