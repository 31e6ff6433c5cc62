//! The format-preserving [`Properties`] document.
//!
//! A document keeps two views of the same data:
//!
//! - an ordered list of [`Token`]s, the single source of truth for writing
//!   the document back out, and
//! - an insertion-ordered key to value index, kept in step with every edit.
//!
//! Every edit is a small splice of the token list: replacing one value token,
//! appending one record, or inserting/removing comment lines. Text that an
//! edit does not touch is written back byte for byte.
//!
//! ## Examples
//!
//! ```rust
//! use properties_edit::Properties;
//!
//! let mut props: Properties = "# title\nname=Alice\n".parse().unwrap();
//! assert_eq!(props.get("name"), Some("Alice"));
//! assert_eq!(props.comment("name").unwrap(), vec!["# title"]);
//!
//! props.put("name", "Bob");
//! assert_eq!(props.to_string(), "# title\nname=Bob\n");
//! ```

use crate::comment::{comment_block, line_end, line_span, line_start, normalize_comments};
use crate::escape::{escape, unescape};
use crate::ser::Serializer;
use crate::tokenizer::tokenize;
use crate::{CommentPrefix, Error, FormatOptions, Result, Token, TokenKind};
use indexmap::{IndexMap, IndexSet};
use std::fmt;
use std::io;
use std::str::FromStr;
use tracing::debug;

/// A properties file that remembers its exact formatting.
///
/// # Examples
///
/// ```rust
/// use properties_edit::Properties;
///
/// let mut props = Properties::new();
/// props.put("host", "localhost");
/// props.put("port", "8080");
/// props.set_comment("port", ["Listening port"]).unwrap();
///
/// assert_eq!(props.to_string(), "host=localhost\n# Listening port\nport=8080");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Properties {
    tokens: Vec<Token>,
    values: IndexMap<String, String>,
    options: FormatOptions,
}

/// Builds the key to value index from a token list. Later records win.
fn index_tokens(tokens: &[Token]) -> IndexMap<String, String> {
    let mut values = IndexMap::new();
    let mut key: Option<&str> = None;
    for token in tokens {
        match token {
            Token::Key { text, .. } => key = Some(text),
            Token::Value { text, .. } => {
                if let Some(key) = key.take() {
                    values.insert(key.to_string(), text.clone());
                }
            }
            _ => {}
        }
    }
    values
}

/// Returns `true` if `raw` ends in an odd run of backslashes, which makes the
/// following line break a continuation.
fn ends_in_continuation(raw: &str) -> bool {
    raw.chars().rev().take_while(|ch| *ch == '\\').count() % 2 == 1
}

impl Properties {
    /// Creates an empty document with default [`FormatOptions`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty document that formats new content with `options`.
    #[must_use]
    pub fn with_options(options: FormatOptions) -> Self {
        Properties {
            options,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: FormatOptions) {
        self.options = options;
    }

    /// Replaces the contents of this document with the text read from
    /// `reader`, including all comments and whitespace.
    ///
    /// The document is only changed when the whole input was read and
    /// tokenized successfully; on error it keeps its previous contents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if reading fails, [`Error::Custom`] if the input
    /// is not valid UTF-8 and [`Error::Syntax`] for a malformed escape
    /// sequence.
    pub fn load<R: io::Read>(&mut self, mut reader: R) -> Result<()> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| Error::io(&e.to_string()))?;
        let source = std::str::from_utf8(&bytes).map_err(|e| Error::custom(e.to_string()))?;
        self.load_str(source)
    }

    fn load_str(&mut self, source: &str) -> Result<()> {
        let tokens = tokenize(source)?;
        let values = index_tokens(&tokens);
        debug!(tokens = tokens.len(), keys = values.len(), "loaded properties");
        self.tokens = tokens;
        self.values = values;
        Ok(())
    }

    /// Writes the document to `writer`, exactly as loaded plus any edits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if writing fails.
    pub fn store<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut serializer = Serializer::new(writer);
        serializer.write_tokens(&self.tokens)?;
        debug!(tokens = self.tokens.len(), "stored properties");
        Ok(())
    }

    /// The token list backing this document.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns the decoded value for the decoded `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns the raw value for a key given in raw (escaped) form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use properties_edit::Properties;
    ///
    /// let props: Properties = "my\\ key=tab\\there".parse().unwrap();
    /// assert_eq!(props.get_raw("my\\ key").unwrap(), Some("tab\\there"));
    /// assert_eq!(props.get("my key"), Some("tab\there"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Syntax`] if `raw_key` contains a malformed escape.
    pub fn get_raw(&self, raw_key: &str) -> Result<Option<&str>> {
        let key = unescape(raw_key)?;
        Ok(self
            .find_key(&key)
            .and_then(|index| self.tokens.get(index + 2))
            .map(Token::raw))
    }

    /// Sets `key` to `value`, returning the previous value.
    ///
    /// An existing record only has its value token replaced; its key,
    /// separator and comments stay exactly as they were. A new key is
    /// appended as a new record at the end of the document.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        let raw_value = escape(&value, false);
        match self.find_key(&key) {
            Some(index) => self.replace_value(index, raw_value, value.clone()),
            None => {
                let raw_key = escape(&key, true);
                self.append_record(raw_key, key.clone(), raw_value, value.clone());
            }
        }
        self.values.insert(key, value)
    }

    /// Like [`put`](Self::put), but takes the key and value in raw form and
    /// writes them verbatim.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use properties_edit::Properties;
    ///
    /// let mut props = Properties::new();
    /// props.put_raw("greeting", "caf\\u00e9").unwrap();
    /// assert_eq!(props.get("greeting"), Some("caf\u{e9}"));
    /// assert_eq!(props.to_string(), "greeting=caf\\u00e9");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Syntax`] if either argument contains a malformed
    /// escape; the document is left untouched in that case.
    pub fn put_raw(&mut self, raw_key: &str, raw_value: &str) -> Result<Option<String>> {
        let key = unescape(raw_key)?;
        let value = unescape(raw_value)?;
        match self.find_key(&key) {
            Some(index) => self.replace_value(index, raw_value.to_string(), value.clone()),
            None => self.append_record(
                raw_key.to_string(),
                key.clone(),
                raw_value.to_string(),
                value.clone(),
            ),
        }
        Ok(self.values.insert(key, value))
    }

    /// Removes `key` and returns its value.
    ///
    /// Every record for the key is cut out of the document together with its
    /// comment block, its indentation and its line terminator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use properties_edit::Properties;
    ///
    /// let mut props: Properties = "a=1\n# about b\nb=2\nc=3\n".parse().unwrap();
    /// assert_eq!(props.remove("b"), Some("2".to_string()));
    /// assert_eq!(props.to_string(), "a=1\nc=3\n");
    /// ```
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let previous = self.values.shift_remove(key)?;
        let mut records = 0;
        while let Some(index) = self.find_key(key) {
            let span = self.record_span(index);
            self.tokens.drain(span);
            records += 1;
        }
        debug!(key, records, "removed key");
        Some(previous)
    }

    /// The raw spelling of every key token, in document order.
    ///
    /// Different spellings of the same decoded key are all listed, so this
    /// can hold more entries than [`len`](Self::len).
    #[must_use]
    pub fn raw_keys(&self) -> IndexSet<&str> {
        self.tokens
            .iter()
            .filter(|token| token.kind() == TokenKind::Key)
            .map(Token::raw)
            .collect()
    }

    /// The raw value of every record, in document order.
    #[must_use]
    pub fn raw_values(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| token.kind() == TokenKind::Key)
            .filter_map(|(index, _)| self.tokens.get(index + 2))
            .map(Token::raw)
            .collect()
    }

    /// Returns the comment lines directly above `key`, markers included.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent.
    pub fn comment(&self, key: &str) -> Result<Vec<String>> {
        let index = self
            .find_key(key)
            .ok_or_else(|| Error::key_not_found(key))?;
        Ok(self.block_lines(&comment_block(&self.tokens, index)))
    }

    /// Replaces the comment lines above `key` and returns the old ones.
    ///
    /// Lines without a `#` or `!` marker get the marker of the existing
    /// block, or of the nearest earlier line in `comments`, falling back to
    /// the configured [`CommentPrefix`]. Existing comment lines are
    /// overwritten in place; surplus ones are deleted and extra ones are
    /// added right below the existing block.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use properties_edit::Properties;
    ///
    /// let mut props: Properties = "! old\nkey=1\n".parse().unwrap();
    /// let old = props.set_comment("key", ["first", "second"]).unwrap();
    /// assert_eq!(old, vec!["! old"]);
    /// assert_eq!(props.to_string(), "! first\n! second\nkey=1\n");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent.
    pub fn set_comment<I, S>(&mut self, key: &str, comments: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index = self
            .find_key(key)
            .ok_or_else(|| Error::key_not_found(key))?;
        let block = comment_block(&self.tokens, index);
        let old = self.block_lines(&block);
        let preferred = old
            .first()
            .and_then(|line| CommentPrefix::detect(line))
            .unwrap_or(self.options.comment_prefix);
        let lines = normalize_comments(comments, preferred);
        debug!(key, old = old.len(), new = lines.len(), "setting comment");

        let shared = block.len().min(lines.len());
        for (&position, line) in block.iter().zip(&lines) {
            self.tokens[position] = Token::comment(line.as_str());
        }

        if lines.len() > shared {
            let at = match block.last() {
                Some(&last) => line_end(&self.tokens, last),
                None => line_start(&self.tokens, index),
            };
            let eol = self.options.line_ending.as_str();
            let extra: Vec<Token> = lines[shared..]
                .iter()
                .flat_map(|line| [Token::comment(line.as_str()), Token::whitespace(eol)])
                .collect();
            self.tokens.splice(at..at, extra);
        }

        for &position in block[shared..].iter().rev() {
            let span = line_span(&self.tokens, position);
            self.tokens.drain(span);
        }

        Ok(old)
    }

    /// Returns the number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns an iterator over the decoded keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, String> {
        self.values.keys()
    }

    /// Returns an iterator over the decoded values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, String> {
        self.values.values()
    }

    /// Returns an iterator over the decoded key-value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.values.iter()
    }

    /// Index of the key token of the last record for the decoded `key`.
    fn find_key(&self, key: &str) -> Option<usize> {
        self.tokens.iter().rposition(|token| token.is_key(key))
    }

    fn block_lines(&self, block: &[usize]) -> Vec<String> {
        block
            .iter()
            .map(|&position| self.tokens[position].raw().to_string())
            .collect()
    }

    fn replace_value(&mut self, key_index: usize, raw: String, text: String) {
        // A bare key has no separator; the new value must not run into it
        if self.tokens[key_index + 1].raw().is_empty() && !raw.is_empty() {
            self.tokens[key_index + 1] = Token::separator(self.options.separator.as_str());
        }
        let continues = ends_in_continuation(&raw);
        self.tokens[key_index + 2] = Token::value(raw, text);
        // The dangling backslash consumes an empty line instead of the next one
        if continues && self.tokens.get(key_index + 3).is_some_and(Token::is_end_of_line) {
            self.tokens.insert(
                key_index + 3,
                Token::whitespace(self.options.line_ending.as_str()),
            );
        }
    }

    fn append_record(&mut self, raw_key: String, key: String, raw_value: String, value: String) {
        let breaks = match self.tokens.last() {
            Some(Token::Value { raw, .. }) if ends_in_continuation(raw) => 2,
            Some(last) if !last.is_whitespace() => 1,
            _ => 0,
        };
        for _ in 0..breaks {
            self.tokens
                .push(Token::whitespace(self.options.line_ending.as_str()));
        }
        debug!(key = %key, "appending record");
        self.tokens.push(Token::key(raw_key, key));
        self.tokens.push(Token::separator(self.options.separator.as_str()));
        self.tokens.push(Token::value(raw_value, value));
    }

    /// Tokens making up the record whose key token is at `key_index`: its
    /// comment block, indentation, key, separator, value and terminator.
    fn record_span(&self, key_index: usize) -> std::ops::Range<usize> {
        let first = comment_block(&self.tokens, key_index)
            .first()
            .copied()
            .unwrap_or(key_index);
        line_start(&self.tokens, first)..line_end(&self.tokens, key_index + 2)
    }
}

impl PartialEq for Properties {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}

impl Eq for Properties {}

impl fmt::Display for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tokens
            .iter()
            .try_for_each(|token| f.write_str(token.raw()))
    }
}

impl FromStr for Properties {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut props = Properties::new();
        props.load_str(s)?;
        Ok(props)
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<K, V> Extend<(K, V)> for Properties
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Properties
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut props = Properties::new();
        props.extend(iter);
        props
    }
}
