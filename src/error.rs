//! Error types for loading, editing and storing properties documents.
//!
//! ## Error Categories
//!
//! - **Syntax Errors**: Malformed escape sequences, reported with line/column
//!   information. A document that fails to load is never partially built.
//! - **Missing Keys**: Comment lookups and updates on a key that is not present
//! - **I/O Errors**: Failures of the underlying reader or writer
//! - **Encoding Errors**: Input bytes that are not valid UTF-8, reported as
//!   [`Error::Custom`] whether they come from a slice or a reader
//!
//! Looking up an absent value with [`Properties::get`](crate::Properties::get)
//! is not an error; it simply returns `None`.
//!
//! ## Examples
//!
//! ```rust
//! use properties_edit::{from_str, Error};
//!
//! let result = from_str("key=\\u12");
//! assert!(matches!(result, Err(Error::Syntax { line: 1, .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Malformed escape sequence in the source text
    #[error("Syntax error at line {line}, column {col}: {msg}")]
    Syntax { line: usize, col: usize, msg: String },

    /// The key does not exist in the document
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// Custom error, raised through the serde adapters and for input that
    /// is not valid UTF-8
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use properties_edit::Error;
    ///
    /// let err = Error::syntax(10, 5, "invalid unicode escape");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn syntax(line: usize, col: usize, msg: &str) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates a key-not-found error.
    pub fn key_not_found(key: &str) -> Self {
        Error::KeyNotFound(key.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Rebases a syntax error positioned relative to a token onto the token's
    /// own position (`line`, `col`, both 1-based) in the whole input.
    pub(crate) fn relative_to(self, line: usize, col: usize) -> Self {
        match self {
            Error::Syntax {
                line: inner_line,
                col: inner_col,
                msg,
            } => Error::Syntax {
                line: line + inner_line - 1,
                col: if inner_line == 1 {
                    col + inner_col - 1
                } else {
                    inner_col
                },
                msg,
            },
            other => other,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
