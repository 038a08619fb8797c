//! Cursor over a sentinel-terminated buffer.
//!
//! The cursor advances byte by byte. EOF is the sentinel (`0x00`) at a
//! position at or past the source length; a null byte before that is an
//! interior null and is scanned as an ordinary (invalid) character.

/// Returns the earliest of two optional offsets.
///
/// Combines two memchr searches when more than three needle bytes are
/// needed.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Byte cursor created by [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
///
/// `Copy`, so a snapshot is just an assignment.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source + sentinel + padding.
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// `buf[source_len]` must be the `0x00` sentinel, followed only by zero
    /// padding.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Byte at the current position; `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Byte one position ahead.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Byte two positions ahead.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos + 2)
    }

    /// Byte at an absolute offset, `0x00` past the buffer.
    #[inline]
    fn byte_at(&self, offset: u32) -> u8 {
        self.buf.get(offset as usize).copied().unwrap_or(0)
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// `true` at the sentinel (not at an interior null).
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Source bytes in `start..end`.
    pub fn bytes(&self, start: u32, end: u32) -> &'a [u8] {
        debug_assert!(start <= end && end <= self.source_len);
        &self.buf[start as usize..end as usize]
    }

    /// Decode the character at the current position.
    ///
    /// `None` at EOF or on a truncated sequence.
    pub fn current_char(&self) -> Option<char> {
        if self.is_eof() {
            return None;
        }
        let start = self.pos as usize;
        let width = Self::utf8_char_width(self.current()) as usize;
        let end = (start + width).min(self.source_len as usize);
        std::str::from_utf8(&self.buf[start..end])
            .ok()
            .and_then(|s| s.chars().next())
    }

    /// Advance while `pred` holds for the current byte. `pred(0)` must be
    /// `false`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Width of the UTF-8 sequence introduced by `byte`.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Advance to the next `\n` or `\r`, or to EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by source_len, which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        match memchr::memchr2(b'\n', b'\r', remaining) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source_len,
        }
    }

    /// Advance past horizontal whitespace (space, tab, form feed).
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| matches!(b, b' ' | b'\t' | b'\x0C'));
    }

    /// Advance to the next byte that matters inside an ordinary string
    /// closed by `quote`: the quote, `\`, `\n` or `\r`. Returns that byte,
    /// or 0 at EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by source_len, which fits in u32"
    )]
    pub fn skip_to_string_delim(&mut self, quote: u8) -> u8 {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        let primary = memchr::memchr3(quote, b'\\', b'\n', remaining);
        let cr = memchr::memchr(b'\r', remaining);
        self.land(earliest_of(primary, cr))
    }

    /// Advance to the next byte that matters inside f-string literal text
    /// closed by `quote`: the quote, `{`, `}`, `\`, `\n` or `\r`. Returns
    /// that byte, or 0 at EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by source_len, which fits in u32"
    )]
    pub fn skip_to_fstring_delim(&mut self, quote: u8) -> u8 {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        let primary = memchr::memchr3(quote, b'{', b'}', remaining);
        let secondary = memchr::memchr3(b'\\', b'\n', b'\r', remaining);
        self.land(earliest_of(primary, secondary))
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by source_len, which fits in u32"
    )]
    fn land(&mut self, offset: Option<usize>) -> u8 {
        match offset {
            Some(off) => {
                self.pos += off as u32;
                self.current()
            }
            None => {
                self.pos = self.source_len;
                0
            }
        }
    }
}
