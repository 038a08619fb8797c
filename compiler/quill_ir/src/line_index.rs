//! Byte offset to line/column conversion.
//!
//! The lexer works in byte offsets. Diagnostics and the token stream also
//! report 1-based line and column numbers; columns count characters, not
//! bytes, so a position inside a literal containing non-ASCII text still
//! points at the right character.

use std::fmt;

/// A 1-based line and column.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineCol {
    pub line: u32,
    pub column: u32,
}

impl LineCol {
    /// Line 1, column 1.
    pub const START: LineCol = LineCol { line: 1, column: 1 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        LineCol { line, column }
    }
}

impl Default for LineCol {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Precomputed line starts for one source text.
///
/// Only `\n` starts a new line; a `\r\n` pair therefore counts once.
#[derive(Clone, Debug)]
pub struct LineIndex<'src> {
    source: &'src str,
    /// Byte offset of the first byte of every line. Always starts with 0.
    line_starts: Vec<u32>,
}

impl<'src> LineIndex<'src> {
    /// Build the index with a single pass over the source.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "callers reject sources longer than u32::MAX before indexing"
    )]
    pub fn new(source: &'src str) -> Self {
        let mut line_starts = Vec::with_capacity(source.len() / 32 + 1);
        line_starts.push(0);
        line_starts.extend(memchr::memchr_iter(b'\n', source.as_bytes()).map(|i| i as u32 + 1));
        LineIndex {
            source,
            line_starts,
        }
    }

    /// The source this index was built for.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Number of lines (a trailing newline opens one more, empty line).
    #[allow(
        clippy::cast_possible_truncation,
        reason = "line count is bounded by the source length, which fits in u32"
    )]
    pub fn line_count(&self) -> u32 {
        self.line_starts.len() as u32
    }

    /// Byte offset of the start of the 1-based `line`, if it exists.
    pub fn line_start(&self, line: u32) -> Option<u32> {
        let idx = usize::try_from(line.checked_sub(1)?).ok()?;
        self.line_starts.get(idx).copied()
    }

    /// Convert a byte offset to a line and column.
    ///
    /// Offsets past the end clamp to the end of the source. An offset in the
    /// middle of a multi-byte character reports the column of that character.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "line and column counts are bounded by the source length"
    )]
    pub fn line_col(&self, offset: u32) -> LineCol {
        let offset = offset.min(self.source.len() as u32);
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert - 1,
        };
        let line_start = self.line_starts[line_idx] as usize;
        let prefix = &self.source.as_bytes()[line_start..offset as usize];
        // Count characters by counting non-continuation bytes.
        let column = prefix.iter().filter(|&&b| (b & 0xC0) != 0x80).count() as u32 + 1;
        LineCol::new(line_idx as u32 + 1, column)
    }
}
