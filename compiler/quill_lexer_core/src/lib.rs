//! Low-level scanner for quill.
//!
//! Turns source text into `(RawTag, len)` pairs without allocation beyond
//! the nesting stacks. This layer owns everything about f-string
//! structure: the [`DelimiterStack`] of open literals, the split of each
//! literal into text segments and fields, and bracket balance inside
//! fields. Positions, keywords and diagnostics are added by `quill_lexer`.

mod config;
mod cursor;
mod delimiter;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use config::{ScanConfig, DEFAULT_MAX_FORMAT_SPEC_DEPTH, DEFAULT_MAX_FSTRING_DEPTH};
pub use cursor::Cursor;
pub use delimiter::{parse_opener, DelimiterError, DelimiterStack};
pub use raw_scanner::{tokenize, RawScanner};
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use tag::{RawTag, RawToken};
