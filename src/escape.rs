//! Conversion between raw (source-exact) and decoded text.
//!
//! Keys and values live in two forms inside a document: the *raw* slice that
//! is written back verbatim, and the *decoded* string exposed through
//! [`Properties::get`](crate::Properties::get). This module converts between
//! the two.
//!
//! [`escape`] is only ever applied to text the document generates itself;
//! text loaded from a source is never re-escaped.
//!
//! ```rust
//! use properties_edit::{escape, unescape};
//!
//! let raw = escape("tab\there", false);
//! assert_eq!(raw, "tab\\there");
//! assert_eq!(unescape(&raw).unwrap(), "tab\there");
//!
//! // Keys additionally protect spaces
//! assert_eq!(escape("my key", true), "my\\ key");
//! ```

use crate::{Error, Result};
use std::iter::Peekable;
use std::str::Chars;

/// Encodes `value` into its raw form.
///
/// Newline, carriage return, tab and form feed become `\n`, `\r`, `\t` and
/// `\f`; backslashes are doubled; with `for_key` set, spaces become `\ `.
/// A value only escapes a space in first position, which the separator would
/// otherwise absorb on the next load.
/// Every code point above U+00FF is written as `\uXXXX` with lowercase hex
/// digits (two escapes, a surrogate pair, above U+FFFF).
///
/// Separator and comment characters (`=`, `:`, `#`, `!`) are left alone.
#[must_use]
pub fn escape(value: &str, for_key: bool) -> String {
    let mut out = String::with_capacity(value.len());
    for (index, ch) in value.chars().enumerate() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{000C}' => out.push_str("\\f"),
            ' ' if for_key || index == 0 => out.push_str("\\ "),
            c if u32::from(c) > 0xFF => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{unit:04x}"));
                }
            }
            c => out.push(c),
        }
    }
    out
}

/// Decodes a raw key or value.
///
/// Understands `\n`, `\r`, `\t`, `\f`, `\uXXXX` (surrogate pairs are
/// recombined), backslash-newline continuations (the line break and the
/// indentation of the following line are dropped) and a backslash before any
/// other character, which yields that character.
///
/// # Errors
///
/// Returns [`Error::Syntax`] for a `\u` escape that is not followed by four
/// hex digits or that encodes an unpaired surrogate. Line and column are
/// relative to the start of `raw`.
pub fn unescape(raw: &str) -> Result<String> {
    Unescaper::new(raw).run()
}

struct Unescaper<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    col: usize,
    out: String,
}

impl<'a> Unescaper<'a> {
    fn new(raw: &'a str) -> Self {
        Unescaper {
            chars: raw.chars().peekable(),
            line: 1,
            col: 1,
            out: String::with_capacity(raw.len()),
        }
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        match ch {
            '\n' => {
                self.line += 1;
                self.col = 1;
            }
            '\r' if self.chars.peek() != Some(&'\n') => {
                self.line += 1;
                self.col = 1;
            }
            _ => self.col += 1,
        }
        Some(ch)
    }

    fn run(mut self) -> Result<String> {
        loop {
            let (line, col) = (self.line, self.col);
            let Some(ch) = self.next_char() else {
                return Ok(self.out);
            };
            if ch != '\\' {
                self.out.push(ch);
                continue;
            }
            match self.next_char() {
                // A trailing backslash at the end of the input continues onto nothing
                None => {}
                Some('n') => self.out.push('\n'),
                Some('r') => self.out.push('\r'),
                Some('t') => self.out.push('\t'),
                Some('f') => self.out.push('\u{000C}'),
                Some('u') => {
                    let ch = self.unicode_escape(line, col)?;
                    self.out.push(ch);
                }
                Some('\n') => self.skip_indent(),
                Some('\r') => {
                    if self.chars.peek() == Some(&'\n') {
                        self.next_char();
                    }
                    self.skip_indent();
                }
                Some(other) => self.out.push(other),
            }
        }
    }

    fn skip_indent(&mut self) {
        while matches!(self.chars.peek(), Some(' ' | '\t' | '\u{000C}')) {
            self.next_char();
        }
    }

    fn hex4(&mut self, line: usize, col: usize) -> Result<u16> {
        let mut unit: u16 = 0;
        for _ in 0..4 {
            let digit = self
                .chars
                .peek()
                .and_then(|ch| ch.to_digit(16))
                .ok_or_else(|| {
                    Error::syntax(
                        line,
                        col,
                        "Invalid unicode escape sequence (expected 4 hex digits)",
                    )
                })?;
            self.next_char();
            unit = (unit << 4) | digit as u16;
        }
        Ok(unit)
    }

    fn unicode_escape(&mut self, line: usize, col: usize) -> Result<char> {
        let unit = self.hex4(line, col)?;
        match unit {
            0xD800..=0xDBFF => {
                let mut ahead = self.chars.clone();
                if ahead.next() != Some('\\') || ahead.next() != Some('u') {
                    return Err(Error::syntax(line, col, "Unpaired surrogate in unicode escape"));
                }
                let (low_line, low_col) = (self.line, self.col);
                self.next_char();
                self.next_char();
                let low = self.hex4(low_line, low_col)?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(Error::syntax(line, col, "Unpaired surrogate in unicode escape"));
                }
                char::decode_utf16([unit, low])
                    .next()
                    .and_then(|decoded| decoded.ok())
                    .ok_or_else(|| Error::syntax(line, col, "Invalid unicode code point"))
            }
            0xDC00..=0xDFFF => Err(Error::syntax(
                line,
                col,
                "Unpaired surrogate in unicode escape",
            )),
            _ => char::from_u32(u32::from(unit))
                .ok_or_else(|| Error::syntax(line, col, "Invalid unicode code point")),
        }
    }
}
