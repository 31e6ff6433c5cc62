//! # properties_edit
//!
//! A format-preserving document model for `.properties` files.
//!
//! ## What does "format-preserving" mean?
//!
//! A plain decoder turns a properties file into a map and forgets everything
//! else. This crate keeps the whole text: comments, blank lines, separators,
//! escape spellings, line continuations and line endings. Loading a file and
//! writing it back without edits gives the identical text, and editing one
//! value leaves every other byte where it was.
//!
//! ## Key Features
//!
//! - **Round-trip fidelity**: Unedited input is written back byte for byte
//! - **Minimal edits**: Changing a value replaces only that value's text
//! - **Comments as data**: Read and replace the comment lines above any key
//! - **Raw access**: Inspect and write keys and values in their escaped form
//! - **Serde Compatible**: The decoded key/value view implements `Serialize`
//!   and `Deserialize`
//!
//! ## Quick Start
//!
//! ```rust
//! use properties_edit::{from_str, to_string};
//!
//! let source = "# Who to greet\nname = Alice\n\n# Greeting\ngreeting=Hello\n";
//! let mut props = from_str(source).unwrap();
//!
//! assert_eq!(props.get("name"), Some("Alice"));
//! assert_eq!(props.comment("name").unwrap(), vec!["# Who to greet"]);
//!
//! // Untouched documents round-trip exactly
//! assert_eq!(to_string(&props), source);
//!
//! // Edits only touch what they change
//! props.put("name", "Bob");
//! assert_eq!(
//!     to_string(&props),
//!     "# Who to greet\nname = Bob\n\n# Greeting\ngreeting=Hello\n"
//! );
//! ```
//!
//! ### Comments
//!
//! ```rust
//! use properties_edit::Properties;
//!
//! let mut props: Properties = "port=8080\n".parse().unwrap();
//! props.set_comment("port", ["HTTP port", "! change with care"]).unwrap();
//! assert_eq!(props.to_string(), "# HTTP port\n! change with care\nport=8080\n");
//! ```
//!
//! ## Structure
//!
//! - [`escape()`] / [`unescape()`]: conversion between raw and decoded text
//! - [`tokenize`]: splits text into formatting-preserving [`Token`]s
//! - [`Properties`]: the document, with map-like access and comment editing
//! - [`Serializer`]: writes a document's tokens out
//! - [`FormatOptions`]: how newly generated text looks
//!
//! See the [`syntax`] module for the accepted text format.
//!
//! ## Logging
//!
//! Loads, stores and edits emit [`tracing`] events at `debug` level, and the
//! tokenizer emits one `trace` event per line. Install any `tracing`
//! subscriber to see them.

mod comment;
pub mod de;
pub mod document;
pub mod error;
pub mod escape;
pub mod macros;
pub mod options;
pub mod ser;
pub mod syntax;
pub mod token;
pub mod tokenizer;

pub use document::Properties;
pub use error::{Error, Result};
pub use escape::{escape, unescape};
pub use options::{CommentPrefix, FormatOptions, LineEnding, Separator};
pub use ser::Serializer;
pub use token::{Token, TokenKind};
pub use tokenizer::tokenize;

use std::io;

/// Parses a document from properties text.
///
/// # Examples
///
/// ```rust
/// use properties_edit::from_str;
///
/// let props = from_str("x: 1\ny: 2").unwrap();
/// assert_eq!(props.get("y"), Some("2"));
/// ```
///
/// # Errors
///
/// Returns an error if the text contains a malformed escape sequence. Error
/// messages include line and column information.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Properties> {
    s.parse()
}

/// Parses a document from UTF-8 bytes.
///
/// # Errors
///
/// Returns [`Error::Custom`] if the bytes are not valid UTF-8, exactly as
/// [`from_reader`] does, and [`Error::Syntax`] for a malformed escape
/// sequence.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Properties> {
    from_reader(v)
}

/// Reads a document from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use properties_edit::from_reader;
/// use std::io::Cursor;
///
/// let props = from_reader(Cursor::new(b"x=1\n")).unwrap();
/// assert_eq!(props.get("x"), Some("1"));
/// ```
///
/// # Errors
///
/// Returns an error if reading from the reader fails or the input contains a
/// malformed escape sequence.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(reader: R) -> Result<Properties>
where
    R: io::Read,
{
    let mut props = Properties::new();
    props.load(reader)?;
    Ok(props)
}

/// Renders a document to a string.
#[must_use]
pub fn to_string(props: &Properties) -> String {
    props.to_string()
}

/// Writes a document to a writer.
///
/// # Examples
///
/// ```rust
/// use properties_edit::{from_str, to_writer};
///
/// let props = from_str("! note\nx=1").unwrap();
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &props).unwrap();
/// assert_eq!(buffer, b"! note\nx=1");
/// ```
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, props: &Properties) -> Result<()>
where
    W: io::Write,
{
    props.store(writer)
}
