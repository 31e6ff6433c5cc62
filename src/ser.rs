//! Writing documents out.
//!
//! [`Serializer`] writes the raw text of every token, in order, to an
//! [`io::Write`]. Nothing is re-encoded, so an unedited document comes out
//! exactly as it went in.
//!
//! This module also implements [`serde::Serialize`] for
//! [`Properties`], exposing the decoded key/value view as an ordered map:
//!
//! ```rust
//! use properties_edit::Properties;
//!
//! let props: Properties = "# ignored\nb=2\na=1\n".parse().unwrap();
//! let json = serde_json::to_string(&props).unwrap();
//! assert_eq!(json, r#"{"b":"2","a":"1"}"#);
//! ```

use crate::{Error, Properties, Result, Token};
use serde::ser::{Serialize, Serializer as SerdeSerializer};
use std::io;

/// Writes tokens to an underlying writer.
pub struct Serializer<W> {
    writer: W,
}

impl<W: io::Write> Serializer<W> {
    pub fn new(writer: W) -> Self {
        Serializer { writer }
    }

    /// Writes the raw text of `tokens` and flushes the writer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the writer fails.
    pub fn write_tokens(&mut self, tokens: &[Token]) -> Result<()> {
        for token in tokens {
            self.writer
                .write_all(token.raw().as_bytes())
                .map_err(|e| Error::io(&e.to_string()))?;
        }
        self.writer
            .flush()
            .map_err(|e| Error::io(&e.to_string()))
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl Serialize for Properties {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: SerdeSerializer,
    {
        serializer.collect_map(self.iter())
    }
}
