//! Splits properties text into formatting-preserving [`Token`]s.
//!
//! The tokenizer works one physical line at a time:
//!
//! - **Blank lines** become a single whitespace token, terminator included
//! - **Comment lines** (first non-blank character `#` or `!`) become an
//!   optional indentation token, a comment token and a terminator token
//! - **Everything else** is a record: indentation, then key, separator and
//!   value tokens, then the terminator. A value whose line ends in an odd
//!   number of backslashes swallows the next physical line too.
//!
//! No character of the input is dropped, so joining the raw text of the
//! returned tokens always gives back the input.
//!
//! ```rust
//! use properties_edit::{tokenize, TokenKind};
//!
//! let tokens = tokenize("# hi\nkey = value\n").unwrap();
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Comment,
//!         TokenKind::Whitespace,
//!         TokenKind::Key,
//!         TokenKind::Separator,
//!         TokenKind::Value,
//!         TokenKind::Whitespace,
//!     ]
//! );
//! ```

use crate::escape::unescape;
use crate::{Result, Token};
use tracing::trace;

/// Tokenizes a complete properties source.
///
/// # Errors
///
/// Returns [`Error::Syntax`](crate::Error::Syntax) with the line and column
/// of the first malformed `\uXXXX` escape.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Tokenizer::new(input).run()
}

struct Tokenizer<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    line_start: usize,
    tokens: Vec<Token>,
}

fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\u{000C}')
}

fn is_line_break(ch: char) -> bool {
    ch == '\n' || ch == '\r'
}

/// Counts the line breaks in `s`, treating `\r\n` as one.
fn line_breaks(s: &str) -> usize {
    s.matches('\n').count() + s.matches('\r').count() - s.matches("\r\n").count()
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str) -> Self {
        Tokenizer {
            input,
            position: 0,
            line: 1,
            line_start: 0,
            tokens: Vec::new(),
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.input[self.position..].chars();
        chars.next();
        chars.next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// 1-based column of the current position on the current line.
    fn column(&self) -> usize {
        self.input[self.line_start..self.position].chars().count() + 1
    }

    fn skip_blanks(&mut self) {
        while self.peek_char().is_some_and(is_blank) {
            self.next_char();
        }
    }

    fn skip_to_line_end(&mut self) {
        while self.peek_char().is_some_and(|ch| !is_line_break(ch)) {
            self.next_char();
        }
    }

    /// Consumes `\n`, `\r\n` or `\r`. Returns `false` if there was none.
    fn consume_line_break(&mut self) -> bool {
        match self.peek_char() {
            Some('\r') => {
                self.next_char();
                if self.peek_char() == Some('\n') {
                    self.next_char();
                }
                true
            }
            Some('\n') => {
                self.next_char();
                true
            }
            _ => false,
        }
    }

    fn push_span(&mut self, start: usize, make: fn(&'a str) -> Token) {
        if self.position > start {
            self.tokens.push(make(&self.input[start..self.position]));
        }
    }

    fn start_new_line(&mut self) {
        self.line += 1;
        self.line_start = self.position;
    }

    fn run(mut self) -> Result<Vec<Token>> {
        while !self.at_end() {
            self.scan_line()?;
        }
        Ok(self.tokens)
    }

    fn scan_line(&mut self) -> Result<()> {
        let line_start = self.position;
        self.skip_blanks();

        match self.peek_char() {
            None | Some('\n' | '\r') => {
                self.consume_line_break();
                self.push_span(line_start, Token::whitespace);
                trace!(line = self.line, "blank line");
                self.start_new_line();
                return Ok(());
            }
            Some('#' | '!') => {
                self.push_span(line_start, Token::whitespace);
                let start = self.position;
                self.skip_to_line_end();
                self.push_span(start, Token::comment);
                trace!(line = self.line, "comment line");
            }
            Some(_) => {
                self.push_span(line_start, Token::whitespace);
                self.scan_record()?;
                trace!(line = self.line, "key/value line");
            }
        }

        let start = self.position;
        if self.consume_line_break() {
            self.push_span(start, Token::whitespace);
        }
        self.start_new_line();
        Ok(())
    }

    fn scan_record(&mut self) -> Result<()> {
        let (line, col) = (self.line, self.column());
        let key_start = self.position;
        while let Some(ch) = self.peek_char() {
            match ch {
                '=' | ':' => break,
                ch if is_blank(ch) || is_line_break(ch) => break,
                '\\' => {
                    // A continuation marker belongs to the value
                    if self.peek_second().map_or(true, is_line_break) {
                        break;
                    }
                    self.next_char();
                    self.next_char();
                }
                _ => {
                    self.next_char();
                }
            }
        }
        let raw_key = &self.input[key_start..self.position];
        let key = unescape(raw_key).map_err(|e| e.relative_to(line, col))?;
        self.tokens.push(Token::key(raw_key, key));

        let separator_start = self.position;
        self.skip_blanks();
        if matches!(self.peek_char(), Some('=' | ':')) {
            self.next_char();
            self.skip_blanks();
        }
        self.tokens
            .push(Token::separator(&self.input[separator_start..self.position]));

        let col = self.column();
        let value_start = self.position;
        loop {
            self.skip_to_line_end();
            let trailing = self.input[value_start..self.position]
                .chars()
                .rev()
                .take_while(|ch| *ch == '\\')
                .count();
            if trailing % 2 == 1 && self.consume_line_break() {
                self.skip_blanks();
                continue;
            }
            break;
        }
        let raw_value = &self.input[value_start..self.position];
        let value = unescape(raw_value).map_err(|e| e.relative_to(line, col))?;
        self.tokens.push(Token::value(raw_value, value));

        let breaks = line_breaks(raw_value);
        if breaks > 0 {
            self.line += breaks;
            self.line_start = self.input[..self.position]
                .rfind(['\n', '\r'])
                .map_or(0, |idx| idx + 1);
        }
        Ok(())
    }
}
