//! Formatting-preserving fragments of a properties document.
//!
//! A document is an ordered list of [`Token`]s. Concatenating the raw text of
//! every token reproduces the source exactly. A logical record is always the
//! triple `Key`, `Separator`, `Value`; comments and whitespace sit between
//! records.

use std::fmt;

/// The kind of a [`Token`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Key,
    Separator,
    Value,
    Whitespace,
    Comment,
}

/// Smallest formatting-preserving unit of a document.
///
/// `Key` and `Value` carry both the raw source slice and the decoded text.
/// The other kinds only carry their raw text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Key { raw: String, text: String },
    Separator { raw: String },
    Value { raw: String, text: String },
    Whitespace { raw: String },
    Comment { raw: String },
}

impl Token {
    pub(crate) fn key(raw: impl Into<String>, text: impl Into<String>) -> Self {
        Token::Key {
            raw: raw.into(),
            text: text.into(),
        }
    }

    pub(crate) fn separator(raw: impl Into<String>) -> Self {
        Token::Separator { raw: raw.into() }
    }

    pub(crate) fn value(raw: impl Into<String>, text: impl Into<String>) -> Self {
        Token::Value {
            raw: raw.into(),
            text: text.into(),
        }
    }

    pub(crate) fn whitespace(raw: impl Into<String>) -> Self {
        Token::Whitespace { raw: raw.into() }
    }

    pub(crate) fn comment(raw: impl Into<String>) -> Self {
        Token::Comment { raw: raw.into() }
    }

    #[must_use]
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Key { .. } => TokenKind::Key,
            Token::Separator { .. } => TokenKind::Separator,
            Token::Value { .. } => TokenKind::Value,
            Token::Whitespace { .. } => TokenKind::Whitespace,
            Token::Comment { .. } => TokenKind::Comment,
        }
    }

    /// The exact source text of this token.
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Token::Key { raw, .. }
            | Token::Separator { raw }
            | Token::Value { raw, .. }
            | Token::Whitespace { raw }
            | Token::Comment { raw } => raw,
        }
    }

    /// The decoded text of a key or value; the raw text for every other kind.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Token::Key { text, .. } | Token::Value { text, .. } => text,
            other => other.raw(),
        }
    }

    /// Returns `true` if this token finishes a physical line.
    #[must_use]
    pub fn is_end_of_line(&self) -> bool {
        self.raw().ends_with(['\n', '\r'])
    }

    #[must_use]
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace { .. })
    }

    #[must_use]
    pub fn is_comment(&self) -> bool {
        matches!(self, Token::Comment { .. })
    }

    /// Returns `true` for a key token whose decoded text is `key`.
    pub(crate) fn is_key(&self, key: &str) -> bool {
        matches!(self, Token::Key { text, .. } if text == key)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw())
    }
}
