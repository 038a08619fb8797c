//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner runs in one of two modes, decided before every token:
//!
//! - **code**: ordinary host tokens, used outside f-strings and for the
//!   expression part of an f-string field;
//! - **text**: literal text of the innermost f-string, or of the format
//!   spec of its innermost field (see [`fstring`](self) submodule).
//!
//! All nesting state lives in the scanner value itself: the
//! [`DelimiterStack`] of open f-strings, a stack of open fields per
//! literal, and a bracket stack per field (plus one for code outside any
//! f-string). Nothing is global, so independent scanners never interact.
//!
//! Keywords, escapes and numeric values are not interpreted here.

mod fstring;

use crate::config::ScanConfig;
use crate::cursor::Cursor;
use crate::delimiter::{parse_opener, DelimiterStack};
use crate::tag::{RawTag, RawToken};
use quill_ir::{Delimiter, Span};
use smallvec::SmallVec;
use unicode_xid::UnicodeXID;

/// Kind of an open bracket.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Bracket {
    Paren,
    Square,
    Curly,
}

#[derive(Clone, Copy, Debug)]
struct OpenBracket {
    kind: Bracket,
    pos: u32,
}

type BracketStack = SmallVec<[OpenBracket; 8]>;

/// One open `{...}` field of an f-string.
#[derive(Clone, Debug)]
struct FieldState {
    /// Offset of the field's `{`.
    open: u32,
    /// Brackets opened inside the field expression.
    brackets: BracketStack,
    /// Past the top-level `:`; the rest is format-spec text.
    in_spec: bool,
    /// A significant token appeared before any `=`/`!`/`:` marker.
    has_expr: bool,
    /// A top-level `=` or `!` has been seen.
    after_marker: bool,
}

impl FieldState {
    fn new(open: u32) -> Self {
        FieldState {
            open,
            brackets: SmallVec::new(),
            in_spec: false,
            has_expr: false,
            after_marker: false,
        }
    }
}

/// Scanner state of one open f-string.
#[derive(Clone, Debug, Default)]
struct LiteralState {
    /// Open fields, outermost first. More than one only through format specs.
    fields: SmallVec<[FieldState; 2]>,
    /// A MIDDLE or a field has been produced since START.
    emitted: bool,
}

/// Pure scanner: one token per call, errors as tags.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    config: ScanConfig,
    fstrings: DelimiterStack<LiteralState>,
    /// Brackets open outside any f-string field.
    brackets: BracketStack,
    /// Location to report for the most recent error token, when it differs
    /// from the token itself.
    error_site: Option<Span>,
    /// Set after the first error; every later call returns `Eof`.
    halted: bool,
}

impl<'a> RawScanner<'a> {
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self::with_config(cursor, ScanConfig::default())
    }

    pub fn with_config(cursor: Cursor<'a>, config: ScanConfig) -> Self {
        Self {
            cursor,
            config,
            fstrings: DelimiterStack::new(),
            brackets: SmallVec::new(),
            error_site: None,
            halted: false,
        }
    }

    /// Number of f-strings currently open.
    pub fn fstring_depth(&self) -> usize {
        self.fstrings.depth()
    }

    /// Where the last error token should be reported, if not at the token.
    pub fn error_site(&self) -> Option<Span> {
        self.error_site
    }

    /// Produce the next raw token.
    ///
    /// Returns `Eof` with `len == 0` when the source is exhausted, and for
    /// every call after an error token.
    pub fn next_token(&mut self) -> RawToken {
        if self.halted {
            return RawToken {
                tag: RawTag::Eof,
                len: 0,
            };
        }
        let token = if let Some(delimiter) = self.text_mode() {
            self.fstring_text(delimiter)
        } else {
            self.code_token()
        };
        if token.tag.is_error() {
            self.halted = true;
        }
        token
    }

    /// The innermost f-string's delimiter when the next token is literal text.
    fn text_mode(&self) -> Option<Delimiter> {
        let state = self.fstrings.state()?;
        match state.fields.last() {
            Some(field) if !field.in_spec => None,
            _ => self.fstrings.current(),
        }
    }

    /// The innermost open field, if the scanner is inside a field expression.
    fn field(&self) -> Option<&FieldState> {
        self.fstrings.state().and_then(|state| state.fields.last())
    }

    fn field_mut(&mut self) -> Option<&mut FieldState> {
        self.fstrings
            .state_mut()
            .and_then(|state| state.fields.last_mut())
    }

    /// The field at the top level of its expression (no open brackets).
    fn top_level_field(&self) -> Option<&FieldState> {
        self.field().filter(|field| field.brackets.is_empty())
    }

    fn brackets_mut(&mut self) -> &mut BracketStack {
        match self
            .fstrings
            .state_mut()
            .and_then(|state| state.fields.last_mut())
        {
            Some(field) => &mut field.brackets,
            None => &mut self.brackets,
        }
    }

    /// Whether the innermost f-string is single-quoted.
    fn in_single_line_fstring(&self) -> bool {
        self.fstrings
            .current()
            .is_some_and(|delimiter| !delimiter.allows_newlines())
    }

    // ─── Tokens & errors ────────────────────────────────────────────────

    #[inline]
    fn token(&self, tag: RawTag, start: u32) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    /// Single-byte token: advance one byte and emit `tag`.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(tag, start)
    }

    /// Error token covering `start..pos`, reported at `site`.
    fn error(&mut self, tag: RawTag, start: u32, site: Span) -> RawToken {
        self.error_site = Some(site);
        self.token(tag, start)
    }

    // ─── Code mode ──────────────────────────────────────────────────────

    fn code_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        let byte = self.cursor.current();
        self.note_field_byte(byte);
        match byte {
            0 => self.eof_or_null(start),
            b' ' | b'\t' | b'\x0C' => {
                self.cursor.eat_whitespace();
                self.token(RawTag::Whitespace, start)
            }
            b'\n' | b'\r' => self.newline(start),
            b'#' => self.comment(start),
            b'\\' => self.backslash(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier_or_string(start),
            b'\'' | b'"' => match parse_opener(self.cursor.bytes(start, self.lookahead_end(start))) {
                Some(delimiter) => self.string_or_fstring(start, delimiter),
                None => self.single(start, RawTag::InvalidCharacter),
            },
            b'0'..=b'9' => self.number(start),
            b'.' => self.dot(start),
            b'+' => self.with_eq(start, 1, RawTag::Plus),
            b'-' => {
                if self.cursor.peek() == b'>' {
                    self.cursor.advance_n(2);
                    self.token(RawTag::Arrow, start)
                } else {
                    self.with_eq(start, 1, RawTag::Minus)
                }
            }
            b'*' => {
                if self.cursor.peek() == b'*' {
                    self.with_eq(start, 2, RawTag::DoubleStar)
                } else {
                    self.with_eq(start, 1, RawTag::Star)
                }
            }
            b'/' => {
                if self.cursor.peek() == b'/' {
                    self.with_eq(start, 2, RawTag::DoubleSlash)
                } else {
                    self.with_eq(start, 1, RawTag::Slash)
                }
            }
            b'%' => self.with_eq(start, 1, RawTag::Percent),
            b'@' => self.with_eq(start, 1, RawTag::At),
            b'&' => self.with_eq(start, 1, RawTag::Ampersand),
            b'|' => self.with_eq(start, 1, RawTag::Pipe),
            b'^' => self.with_eq(start, 1, RawTag::Caret),
            b'~' => self.single(start, RawTag::Tilde),
            b'<' => match self.cursor.peek() {
                b'<' => self.with_eq(start, 2, RawTag::Shl),
                b'=' => {
                    self.cursor.advance_n(2);
                    self.token(RawTag::LessEqual, start)
                }
                _ => self.single(start, RawTag::Less),
            },
            b'>' => match self.cursor.peek() {
                b'>' => self.with_eq(start, 2, RawTag::Shr),
                b'=' => {
                    self.cursor.advance_n(2);
                    self.token(RawTag::GreaterEqual, start)
                }
                _ => self.single(start, RawTag::Greater),
            },
            b'=' => self.equal(start),
            b'!' => self.bang(start),
            b':' => self.colon(start),
            b',' => self.single(start, RawTag::Comma),
            b';' => self.single(start, RawTag::Semicolon),
            b'(' => self.open_bracket(start, Bracket::Paren, RawTag::LeftParen),
            b'[' => self.open_bracket(start, Bracket::Square, RawTag::LeftBracket),
            b'{' => self.open_bracket(start, Bracket::Curly, RawTag::LeftBrace),
            b')' => self.close_bracket(start, Bracket::Paren, RawTag::RightParen),
            b']' => self.close_bracket(start, Bracket::Square, RawTag::RightBracket),
            b'}' => self.close_bracket(start, Bracket::Curly, RawTag::RightBrace),
            0x80..=0xFF => self.non_ascii(start),
            _ => self.single(start, RawTag::InvalidCharacter),
        }
    }

    /// Record that the current field has an expression once a byte that can
    /// only start expression tokens shows up before any marker.
    fn note_field_byte(&mut self, byte: u8) {
        let counts = !matches!(
            byte,
            0 | b' ' | b'\t' | b'\x0C' | b'\n' | b'\r' | b'#' | b'\\' | b'=' | b'!' | b':' | b'}'
        );
        if let Some(field) = self.field_mut() {
            if counts && !field.after_marker {
                field.has_expr = true;
            }
        }
    }

    /// Advance `n` bytes, then fold a following `=` into an augmented
    /// assignment.
    fn with_eq(&mut self, start: u32, n: u32, plain: RawTag) -> RawToken {
        self.cursor.advance_n(n);
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            self.token(RawTag::AugAssign, start)
        } else {
            self.token(plain, start)
        }
    }

    fn eof_or_null(&mut self, start: u32) -> RawToken {
        if !self.cursor.is_eof() {
            return self.single(start, RawTag::InvalidCharacter);
        }
        if let Some(field) = self.field() {
            let site = Span::new(field.open, field.open + 1);
            return self.error(RawTag::UnterminatedField, start, site);
        }
        if let Some(open) = self.brackets.last() {
            let site = Span::new(open.pos, open.pos + 1);
            return self.error(RawTag::UnclosedBracket, start, site);
        }
        self.token(RawTag::Eof, start)
    }

    // ─── Layout & trivia ────────────────────────────────────────────────

    fn eat_line_break(&mut self) {
        if self.cursor.current() == b'\r' && self.cursor.peek() == b'\n' {
            self.cursor.advance_n(2);
        } else {
            self.cursor.advance();
        }
    }

    fn newline(&mut self, start: u32) -> RawToken {
        self.eat_line_break();
        if self.field().is_some() {
            if self.in_single_line_fstring() {
                let site = Span::new(start, start + 1);
                return self.error(RawTag::NewlineInFString, start, site);
            }
            return self.token(RawTag::SoftNewline, start);
        }
        if self.brackets.is_empty() {
            self.token(RawTag::Newline, start)
        } else {
            self.token(RawTag::SoftNewline, start)
        }
    }

    fn comment(&mut self, start: u32) -> RawToken {
        if self.field().is_some() && self.in_single_line_fstring() {
            self.cursor.advance();
            return self.error(RawTag::CommentInFString, start, Span::new(start, start + 1));
        }
        self.cursor.eat_until_newline_or_eof();
        self.token(RawTag::Comment, start)
    }

    fn backslash(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if matches!(self.cursor.current(), b'\n' | b'\r') {
            self.eat_line_break();
            self.token(RawTag::LineContinuation, start)
        } else {
            self.token(RawTag::StrayBackslash, start)
        }
    }

    // ─── Identifiers & string openers ───────────────────────────────────

    /// End offset for opener lookahead: prefix (at most 2) plus 3 quotes.
    fn lookahead_end(&self, start: u32) -> u32 {
        (start + 5).min(self.cursor.source_len())
    }

    fn identifier_or_string(&mut self, start: u32) -> RawToken {
        if let Some(delimiter) = parse_opener(self.cursor.bytes(start, self.lookahead_end(start))) {
            return self.string_or_fstring(start, delimiter);
        }
        self.cursor.advance();
        self.eat_ident_continue();
        self.token(RawTag::Ident, start)
    }

    fn non_ascii(&mut self, start: u32) -> RawToken {
        if self.cursor.current_char().is_some_and(UnicodeXID::is_xid_start) {
            self.cursor.advance_char();
            self.eat_ident_continue();
            self.token(RawTag::Ident, start)
        } else {
            self.cursor.advance_char();
            self.token(RawTag::InvalidCharacter, start)
        }
    }

    fn eat_ident_continue(&mut self) {
        loop {
            let b = self.cursor.current();
            if is_ident_continue(b) {
                self.cursor.advance();
            } else if b >= 0x80
                && self
                    .cursor
                    .current_char()
                    .is_some_and(UnicodeXID::is_xid_continue)
            {
                self.cursor.advance_char();
            } else {
                break;
            }
        }
    }

    fn string_or_fstring(&mut self, start: u32, delimiter: Delimiter) -> RawToken {
        self.cursor.advance_n(delimiter.opener_len());
        if delimiter.flags.is_formatted() {
            return self.fstring_start(start, delimiter);
        }
        self.string_body(start, delimiter)
    }

    /// Body and closing quotes of an ordinary string literal.
    fn string_body(&mut self, start: u32, delimiter: Delimiter) -> RawToken {
        let quote = delimiter.quote.as_byte();
        loop {
            match self.cursor.skip_to_string_delim(quote) {
                b'\\' => {
                    self.cursor.advance();
                    self.skip_escaped_char();
                }
                b'\n' | b'\r' => {
                    if !delimiter.allows_newlines() {
                        return self.unterminated_string(start, delimiter);
                    }
                    self.eat_line_break();
                }
                0 => {
                    if self.cursor.is_eof() {
                        return self.unterminated_string(start, delimiter);
                    }
                    self.cursor.advance();
                }
                _ => {
                    if self.at_closer(delimiter) {
                        self.cursor.advance_n(delimiter.closer_len());
                        return self.token(RawTag::String, start);
                    }
                    self.cursor.advance();
                }
            }
        }
    }

    /// Whether the cursor sits on `delimiter`'s closing quote run.
    fn at_closer(&self, delimiter: Delimiter) -> bool {
        let quote = delimiter.quote.as_byte();
        self.cursor.current() == quote
            && (!delimiter.allows_newlines()
                || (self.cursor.peek() == quote && self.cursor.peek2() == quote))
    }

    /// Skip the character after a backslash (already consumed).
    fn skip_escaped_char(&mut self) {
        match self.cursor.current() {
            b'\r' | b'\n' => self.eat_line_break(),
            0 if self.cursor.is_eof() => {}
            _ => self.cursor.advance_char(),
        }
    }

    /// An ordinary string ran into a line break or EOF.
    ///
    /// Inside a field, a string whose quotes equal the enclosing f-string's
    /// is almost always that f-string's own closing quote after a missing
    /// `}`, so the field is reported instead.
    fn unterminated_string(&mut self, start: u32, delimiter: Delimiter) -> RawToken {
        if let (Some(field), Some(enclosing)) = (self.field(), self.fstrings.current()) {
            if enclosing.is_closed_by(delimiter.quote, delimiter.size) {
                let site = Span::new(field.open, field.open + 1);
                return self.error(RawTag::UnterminatedField, start, site);
            }
        }
        let site = Span::new(start, start + delimiter.opener_len());
        self.error(RawTag::UnterminatedString, start, site)
    }

    // ─── Numbers ────────────────────────────────────────────────────────

    fn number(&mut self, start: u32) -> RawToken {
        let first = self.cursor.current();
        self.cursor.advance();
        if first == b'0' && matches!(self.cursor.current(), b'x' | b'X' | b'o' | b'O' | b'b' | b'B')
        {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_hexdigit() || b == b'_');
            return self.token(RawTag::Int, start);
        }
        self.eat_decimal_digits();
        let mut is_float = false;
        if self.cursor.current() == b'.' {
            self.cursor.advance();
            self.eat_decimal_digits();
            is_float = true;
        }
        is_float |= self.eat_exponent();
        self.number_suffix(start, is_float)
    }

    /// `.` `...` or a float starting with `.`.
    fn dot(&mut self, start: u32) -> RawToken {
        if self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.eat_decimal_digits();
            self.eat_exponent();
            return self.number_suffix(start, true);
        }
        if self.cursor.peek() == b'.' && self.cursor.peek2() == b'.' {
            self.cursor.advance_n(3);
            return self.token(RawTag::Ellipsis, start);
        }
        self.single(start, RawTag::Dot)
    }

    fn eat_decimal_digits(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
    }

    /// Consume `e[+-]digits` if present.
    fn eat_exponent(&mut self) -> bool {
        if !matches!(self.cursor.current(), b'e' | b'E') {
            return false;
        }
        let next = self.cursor.peek();
        let signed = matches!(next, b'+' | b'-') && self.cursor.peek2().is_ascii_digit();
        if !next.is_ascii_digit() && !signed {
            return false;
        }
        self.cursor.advance_n(if signed { 2 } else { 1 });
        self.eat_decimal_digits();
        true
    }

    fn number_suffix(&mut self, start: u32, is_float: bool) -> RawToken {
        if matches!(self.cursor.current(), b'j' | b'J') {
            self.cursor.advance();
            return self.token(RawTag::Imaginary, start);
        }
        self.token(if is_float { RawTag::Float } else { RawTag::Int }, start)
    }

    // ─── Field-aware punctuation ────────────────────────────────────────

    fn equal(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'=' {
            self.cursor.advance_n(2);
            return self.token(RawTag::EqualEqual, start);
        }
        self.cursor.advance();
        self.field_marker(start, RawTag::Equal)
    }

    fn bang(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'=' {
            self.cursor.advance_n(2);
            return self.token(RawTag::BangEqual, start);
        }
        self.cursor.advance();
        self.field_marker(start, RawTag::Bang)
    }

    /// A top-level `=` (debug) or `!` (conversion) ends the field expression,
    /// which must not be empty.
    fn field_marker(&mut self, start: u32, tag: RawTag) -> RawToken {
        let Some(field) = self.top_level_field() else {
            return self.token(tag, start);
        };
        if !field.has_expr {
            let site = Span::new(field.open, self.cursor.pos());
            return self.error(RawTag::EmptyField, start, site);
        }
        if let Some(field) = self.field_mut() {
            field.after_marker = true;
        }
        self.token(tag, start)
    }

    /// A top-level `:` in a field starts the format spec, even before `=`:
    /// `{x:=10}` formats `x` with spec `=10`.
    fn colon(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if let Some(field) = self.top_level_field() {
            if !field.has_expr {
                let site = Span::new(field.open, self.cursor.pos());
                return self.error(RawTag::EmptyField, start, site);
            }
            if let Some(field) = self.field_mut() {
                field.in_spec = true;
            }
            return self.token(RawTag::Colon, start);
        }
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            return self.token(RawTag::ColonEqual, start);
        }
        self.token(RawTag::Colon, start)
    }

    // ─── Brackets ───────────────────────────────────────────────────────

    fn open_bracket(&mut self, start: u32, kind: Bracket, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.brackets_mut().push(OpenBracket { kind, pos: start });
        self.token(tag, start)
    }

    fn close_bracket(&mut self, start: u32, kind: Bracket, tag: RawTag) -> RawToken {
        if kind == Bracket::Curly && self.top_level_field().is_some() {
            return self.close_field(start);
        }
        self.cursor.advance();
        let site = Span::new(start, start + 1);
        match self.brackets_mut().last().map(|open| open.kind) {
            Some(open) if open == kind => {
                self.brackets_mut().pop();
                self.token(tag, start)
            }
            Some(_) => self.error(RawTag::MismatchedBracket, start, site),
            None => self.error(RawTag::UnmatchedBracket, start, site),
        }
    }

    /// `}` at the top level of a field expression closes the field.
    fn close_field(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        let Some(field) = self.fstrings.state_mut().and_then(|state| state.fields.pop()) else {
            return self.token(RawTag::RightBrace, start);
        };
        if !field.has_expr {
            let site = Span::new(field.open, self.cursor.pos());
            return self.error(RawTag::EmptyField, start, site);
        }
        self.token(RawTag::RightBrace, start)
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// Lookup table for ASCII identifier continuation bytes.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(i as u8, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_');
        i += 1;
    }
    table
};

#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Scan `source` with the default limits and collect every token before
/// `Eof`. Scanning stops after the first error token.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    RawScanner::new(buf.cursor()).collect()
}
