//! f-string literal text.
//!
//! Text mode scans the literal part of the innermost f-string, or the
//! format-spec text of its innermost field, up to the next segment
//! boundary:
//!
//! - `{` opens a field (`{{` is literal text, except in a format spec);
//! - `}` closes a format-spec field, is literal as `}}`, and is an error
//!   alone in top-level text;
//! - the closing quotes end the literal.
//!
//! Pending text before a boundary is returned first as `FStringMiddle`; the
//! boundary itself comes out on the next call. Text never emitted before
//! the closing quotes is folded into `FStringEnd`.

use super::{FieldState, RawScanner};
use crate::tag::{RawTag, RawToken};
use quill_ir::{Delimiter, Span};

impl RawScanner<'_> {
    /// Push a new f-string whose opener (prefix and quotes) was just consumed.
    pub(super) fn fstring_start(&mut self, start: u32, delimiter: Delimiter) -> RawToken {
        if self.fstrings.depth() >= self.config.max_fstring_depth {
            let site = Span::new(start, self.cursor.pos());
            return self.error(RawTag::TooDeeplyNested, start, site);
        }
        self.fstrings.open(delimiter, start);
        self.token(RawTag::FStringStart, start)
    }

    pub(super) fn fstring_text(&mut self, delimiter: Delimiter) -> RawToken {
        let start = self.cursor.pos();
        let quote = delimiter.quote.as_byte();
        let in_spec = self.field().is_some_and(|field| field.in_spec);
        loop {
            match self.cursor.skip_to_fstring_delim(quote) {
                b'{' => {
                    if !in_spec && self.cursor.peek() == b'{' {
                        self.cursor.advance_n(2);
                        continue;
                    }
                    if self.cursor.pos() > start {
                        return self.middle(start);
                    }
                    return self.open_field(start);
                }
                b'}' => {
                    if in_spec {
                        if self.cursor.pos() > start {
                            return self.middle(start);
                        }
                        return self.close_spec_field(start);
                    }
                    if self.cursor.peek() == b'}' {
                        self.cursor.advance_n(2);
                        continue;
                    }
                    let pos = self.cursor.pos();
                    self.cursor.advance();
                    return self.error(RawTag::LoneRightBrace, start, Span::new(pos, pos + 1));
                }
                b'\\' => self.fstring_escape(delimiter),
                b'\n' | b'\r' => {
                    if !delimiter.allows_newlines() {
                        let pos = self.cursor.pos();
                        return self.error(RawTag::NewlineInFString, start, Span::new(pos, pos + 1));
                    }
                    self.eat_line_break();
                }
                0 => {
                    if !self.cursor.is_eof() {
                        self.cursor.advance();
                        continue;
                    }
                    if in_spec {
                        return self.unterminated_field(start);
                    }
                    let open = self.fstrings.current_start().unwrap_or(start);
                    let site = Span::new(open, open + delimiter.opener_len());
                    return self.error(RawTag::UnterminatedFString, start, site);
                }
                _ => {
                    if !self.at_closer(delimiter) {
                        self.cursor.advance();
                        continue;
                    }
                    if in_spec {
                        return self.unterminated_field(start);
                    }
                    return self.fstring_end(start, delimiter);
                }
            }
        }
    }

    /// Literal text in `start..pos`.
    fn middle(&mut self, start: u32) -> RawToken {
        if let Some(state) = self.fstrings.state_mut() {
            state.emitted = true;
        }
        self.token(RawTag::FStringMiddle, start)
    }

    /// Cursor on the closing quotes; `start..pos` is pending text.
    fn fstring_end(&mut self, start: u32, delimiter: Delimiter) -> RawToken {
        let emitted = self.fstrings.state().is_some_and(|state| state.emitted);
        if emitted && self.cursor.pos() > start {
            return self.middle(start);
        }
        self.cursor.advance_n(delimiter.closer_len());
        match self.fstrings.close(delimiter.quote, delimiter.size) {
            Ok(_) => self.token(RawTag::FStringEnd, start),
            Err(err) => {
                tracing::debug!(%err, "delimiter stack rejected close");
                let site = Span::new(start, self.cursor.pos());
                self.error(RawTag::DelimiterMismatch, start, site)
            }
        }
    }

    /// Cursor on a field-opening `{`, no pending text.
    fn open_field(&mut self, start: u32) -> RawToken {
        let max_spec_depth = self.config.max_format_spec_depth;
        self.cursor.advance();
        let Some(state) = self.fstrings.state_mut() else {
            return self.token(RawTag::LeftBrace, start);
        };
        if state.fields.len() > max_spec_depth {
            return self.error(RawTag::TooDeeplyNested, start, Span::new(start, start + 1));
        }
        state.fields.push(FieldState::new(start));
        state.emitted = true;
        self.token(RawTag::LeftBrace, start)
    }

    /// Cursor on the `}` ending a format spec, no pending text.
    fn close_spec_field(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if let Some(state) = self.fstrings.state_mut() {
            state.fields.pop();
        }
        self.token(RawTag::RightBrace, start)
    }

    /// The literal ended (quote or EOF) while a format spec was still open.
    fn unterminated_field(&mut self, start: u32) -> RawToken {
        let open = self.field().map_or(start, |field| field.open);
        self.error(RawTag::UnterminatedField, start, Span::new(open, open + 1))
    }

    /// Cursor on a `\` in literal text.
    ///
    /// The escape stays in the text unexpanded. A backslash never escapes a
    /// brace; `\N{...}` in non-raw text is consumed whole so its braces do
    /// not open a field.
    fn fstring_escape(&mut self, delimiter: Delimiter) {
        self.cursor.advance();
        match self.cursor.current() {
            b'{' | b'}' => {}
            b'N' if !delimiter.is_raw() && self.cursor.peek() == b'{' => {
                self.cursor.advance_n(2);
                let quote = delimiter.quote.as_byte();
                loop {
                    match self.cursor.current() {
                        b'}' => {
                            self.cursor.advance();
                            break;
                        }
                        b'\n' | b'\r' => break,
                        b if b == quote => break,
                        0 if self.cursor.is_eof() => break,
                        _ => self.cursor.advance_char(),
                    }
                }
            }
            _ => self.skip_escaped_char(),
        }
    }
}
