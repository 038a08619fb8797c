//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the scanner detects EOF without a bounds check on every byte. The
//! total size is rounded up to the next 64-byte boundary, which also leaves
//! zero padding for `peek()`/`peek2()` near the end.
//!
//! Construction records encoding issues (a leading UTF-8 BOM and interior
//! null bytes) as [`EncodingIssue`]s. The BOM is skipped by the cursor; null
//! bytes reach the scanner and come out as `InvalidCharacter` tokens.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// UTF-8 byte order mark.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Sentinel-terminated source buffer.
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    buf: Vec<u8>,
    source_len: u32,
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue found while building the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    pub kind: EncodingIssueKind,
    pub pos: u32,
    pub len: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-8 BOM at offset 0. Tolerated and skipped.
    Utf8Bom,
    /// NUL byte inside the source.
    InteriorNull,
}

impl SourceBuffer {
    /// Copy `source` into a padded, sentinel-terminated buffer.
    ///
    /// Sources longer than `u32::MAX` bytes saturate `source_len`; the
    /// lexer rejects them before scanning.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Round up to the next 64-byte boundary (at least source + sentinel).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        let mut encoding_issues = Vec::new();
        if source_bytes.starts_with(UTF8_BOM) {
            encoding_issues.push(EncodingIssue {
                kind: EncodingIssueKind::Utf8Bom,
                pos: 0,
                len: 3,
            });
        }
        for pos in memchr::memchr_iter(0, source_bytes) {
            if let Ok(pos) = u32::try_from(pos) {
                encoding_issues.push(EncodingIssue {
                    kind: EncodingIssueKind::InteriorNull,
                    pos,
                    len: 1,
                });
            }
        }

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
            encoding_issues,
        }
    }

    /// The source bytes, without sentinel or padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// The full buffer including sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// A [`Cursor`] at the first byte of content (after a BOM, if any).
    pub fn cursor(&self) -> Cursor<'_> {
        let mut cursor = Cursor::new(&self.buf, self.source_len);
        if self.has_bom() {
            cursor.advance_n(3);
        }
        cursor
    }

    pub fn has_bom(&self) -> bool {
        self.encoding_issues
            .first()
            .is_some_and(|issue| issue.kind == EncodingIssueKind::Utf8Bom)
    }

    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}
