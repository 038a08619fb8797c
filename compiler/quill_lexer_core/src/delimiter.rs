//! The delimiter stack of open f-string literals.
//!
//! Each open f-string pushes its [`Delimiter`]; the matching close pops it.
//! Nested literals may use a delimiter identical to an enclosing one, so the
//! stack position is the only thing that tells them apart. Every entry also
//! carries per-literal scanner state `T`, so it is pushed and popped in
//! lockstep with the delimiter.

use quill_ir::{Delimiter, Quote, QuoteSize, StringFlags};
use smallvec::SmallVec;
use thiserror::Error;

/// Structural error from [`DelimiterStack::close`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum DelimiterError {
    #[error("no open f-string to close")]
    Empty,
    #[error("closing {found_quote:?}/{found_size:?} does not match the open `{expected}`")]
    Mismatch {
        expected: Delimiter,
        found_quote: Quote,
        found_size: QuoteSize,
    },
}

#[derive(Clone, Debug)]
struct Entry<T> {
    delimiter: Delimiter,
    /// Offset of the literal's first byte (its prefix).
    start: u32,
    state: T,
}

/// LIFO stack of active f-string delimiters.
#[derive(Clone, Debug)]
pub struct DelimiterStack<T = ()> {
    entries: SmallVec<[Entry<T>; 4]>,
}

impl<T> Default for DelimiterStack<T> {
    fn default() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }
}

impl<T: Default> DelimiterStack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a newly opened literal starting at `start`.
    pub fn open(&mut self, delimiter: Delimiter, start: u32) {
        tracing::trace!(%delimiter, start, depth = self.entries.len() + 1, "open f-string");
        self.entries.push(Entry {
            delimiter,
            start,
            state: T::default(),
        });
    }

    /// Innermost open delimiter.
    #[inline]
    pub fn current(&self) -> Option<Delimiter> {
        self.entries.last().map(|entry| entry.delimiter)
    }

    /// Start offset of the innermost open literal.
    #[inline]
    pub fn current_start(&self) -> Option<u32> {
        self.entries.last().map(|entry| entry.start)
    }

    #[inline]
    pub fn state(&self) -> Option<&T> {
        self.entries.last().map(|entry| &entry.state)
    }

    #[inline]
    pub fn state_mut(&mut self) -> Option<&mut T> {
        self.entries.last_mut().map(|entry| &mut entry.state)
    }

    /// Pop the innermost literal, checking that `quote`/`size` close it.
    ///
    /// On mismatch the stack is left unchanged.
    pub fn close(&mut self, quote: Quote, size: QuoteSize) -> Result<Delimiter, DelimiterError> {
        let expected = self.current().ok_or(DelimiterError::Empty)?;
        if !expected.is_closed_by(quote, size) {
            return Err(DelimiterError::Mismatch {
                expected,
                found_quote: quote,
                found_size: size,
            });
        }
        self.entries.pop();
        tracing::trace!(delimiter = %expected, depth = self.entries.len(), "close f-string");
        Ok(expected)
    }

    /// Number of open literals.
    #[inline]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse a string opener (`prefix` letters then one or three quotes) at the
/// start of `bytes`.
///
/// Returns `None` if `bytes` does not begin with a valid opener.
pub fn parse_opener(bytes: &[u8]) -> Option<Delimiter> {
    let prefix_len = bytes
        .iter()
        .take(3)
        .take_while(|b| b.is_ascii_alphabetic())
        .count();
    let prefix = std::str::from_utf8(&bytes[..prefix_len]).ok()?;
    let flags = StringFlags::from_prefix(prefix)?;
    let first = *bytes.get(prefix_len)?;
    let quote = Quote::from_byte(first)?;
    let size = if bytes.get(prefix_len + 1) == Some(&first) && bytes.get(prefix_len + 2) == Some(&first)
    {
        QuoteSize::Triple
    } else {
        QuoteSize::Single
    };
    #[allow(
        clippy::cast_possible_truncation,
        reason = "prefix_len is at most 2 after from_prefix"
    )]
    let prefix_len = prefix_len as u8;
    Some(Delimiter::new(quote, size, flags, prefix_len))
}
