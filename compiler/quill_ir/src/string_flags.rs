//! String literal prefixes, quotes and delimiters.
//!
//! A [`Delimiter`] identifies what closes one literal occurrence: the quote
//! character, whether it is tripled, and the prefix flags that decide how
//! the body is scanned (raw or not) and later decoded.

use std::fmt;

bitflags::bitflags! {
    /// Prefix flags of a string literal.
    ///
    /// Valid combinations are produced only by [`StringFlags::from_prefix`];
    /// `FORMATTED | BYTES` and `UNICODE` together with anything else never
    /// occur.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StringFlags: u8 {
        /// `r` / `R`: backslashes are literal.
        const RAW = 1 << 0;
        /// `b` / `B`: bytes literal.
        const BYTES = 1 << 1;
        /// `u` / `U`: legacy unicode marker, no effect on scanning.
        const UNICODE = 1 << 2;
        /// `f` / `F`: interpolated string.
        const FORMATTED = 1 << 3;
    }
}

impl StringFlags {
    /// Parse a literal prefix (case-insensitive, any order).
    ///
    /// Returns `None` for anything that is not a valid string prefix,
    /// including the empty-flag duplicates such as `rr` and the invalid
    /// combinations `bf`, `ub`, `uf`, `ur`.
    pub fn from_prefix(prefix: &str) -> Option<StringFlags> {
        if prefix.len() > 2 {
            return None;
        }
        let mut flags = StringFlags::empty();
        for b in prefix.bytes() {
            let flag = match b {
                b'r' | b'R' => StringFlags::RAW,
                b'b' | b'B' => StringFlags::BYTES,
                b'u' | b'U' => StringFlags::UNICODE,
                b'f' | b'F' => StringFlags::FORMATTED,
                _ => return None,
            };
            if flags.contains(flag) {
                return None;
            }
            flags |= flag;
        }
        let valid = flags.is_empty()
            || flags == StringFlags::UNICODE
            || !flags.intersects(StringFlags::UNICODE)
                && !flags.contains(StringFlags::BYTES | StringFlags::FORMATTED);
        valid.then_some(flags)
    }

    #[inline]
    pub fn is_raw(self) -> bool {
        self.contains(StringFlags::RAW)
    }

    #[inline]
    pub fn is_bytes(self) -> bool {
        self.contains(StringFlags::BYTES)
    }

    #[inline]
    pub fn is_formatted(self) -> bool {
        self.contains(StringFlags::FORMATTED)
    }
}

/// The quote character of a literal.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quote {
    /// `'`
    Single,
    /// `"`
    Double,
}

impl Quote {
    /// Classify a quote byte.
    #[inline]
    pub fn from_byte(b: u8) -> Option<Quote> {
        match b {
            b'\'' => Some(Quote::Single),
            b'"' => Some(Quote::Double),
            _ => None,
        }
    }

    #[inline]
    pub fn as_byte(self) -> u8 {
        match self {
            Quote::Single => b'\'',
            Quote::Double => b'"',
        }
    }

    #[inline]
    pub fn as_char(self) -> char {
        self.as_byte() as char
    }
}

/// Number of quote characters that open and close a literal.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuoteSize {
    /// `"..."`: newlines not allowed in the body.
    Single,
    /// `"""..."""`: newlines allowed.
    Triple,
}

impl QuoteSize {
    /// Byte length of one opening or closing quote run.
    #[inline]
    pub fn len(self) -> u32 {
        match self {
            QuoteSize::Single => 1,
            QuoteSize::Triple => 3,
        }
    }
}

/// The delimiter of one literal occurrence.
///
/// Immutable once the literal starts. Nested literals may carry an equal
/// delimiter; they are told apart by their position on the scanner's
/// delimiter stack, never by their contents.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Delimiter {
    pub quote: Quote,
    pub size: QuoteSize,
    pub flags: StringFlags,
    /// Byte length of the prefix letters (`f`, `rf`, ...).
    pub prefix_len: u8,
}

impl Delimiter {
    pub fn new(quote: Quote, size: QuoteSize, flags: StringFlags, prefix_len: u8) -> Self {
        Delimiter {
            quote,
            size,
            flags,
            prefix_len,
        }
    }

    /// Whether raw newlines may appear in the body.
    #[inline]
    pub fn allows_newlines(&self) -> bool {
        self.size == QuoteSize::Triple
    }

    #[inline]
    pub fn is_raw(&self) -> bool {
        self.flags.is_raw()
    }

    /// Byte length of the closing quote run.
    #[inline]
    pub fn closer_len(&self) -> u32 {
        self.size.len()
    }

    /// Byte length of the opening text: prefix plus quotes.
    #[inline]
    pub fn opener_len(&self) -> u32 {
        u32::from(self.prefix_len) + self.size.len()
    }

    /// Whether `quote`/`size` would close a literal opened with this delimiter.
    #[inline]
    pub fn is_closed_by(&self, quote: Quote, size: QuoteSize) -> bool {
        self.quote == quote && self.size == size
    }

    /// The closing quote text.
    pub fn closer(&self) -> &'static str {
        match (self.quote, self.size) {
            (Quote::Single, QuoteSize::Single) => "'",
            (Quote::Double, QuoteSize::Single) => "\"",
            (Quote::Single, QuoteSize::Triple) => "'''",
            (Quote::Double, QuoteSize::Triple) => "\"\"\"",
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.flags.is_raw() {
            f.write_str("r")?;
        }
        if self.flags.is_bytes() {
            f.write_str("b")?;
        }
        if self.flags.is_formatted() {
            f.write_str("f")?;
        }
        f.write_str(self.closer())
    }
}
