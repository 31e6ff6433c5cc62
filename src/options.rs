//! Formatting options for text the document generates itself.
//!
//! Loaded text is never reformatted. These options only decide what newly
//! appended records, new comment lines and inserted line breaks look like:
//!
//! - [`FormatOptions`]: Main configuration struct
//! - [`Separator`]: Separator written between a new key and its value
//! - [`CommentPrefix`]: Marker for comment lines without one of their own
//! - [`LineEnding`]: Terminator of inserted lines
//!
//! ## Examples
//!
//! ```rust
//! use properties_edit::{FormatOptions, Properties, Separator};
//!
//! let options = FormatOptions::new().with_separator(Separator::SpacedEquals);
//! let mut props = Properties::with_options(options);
//! props.put("name", "Alice");
//! assert_eq!(props.to_string(), "name = Alice");
//! ```

/// Separator written between the key and value of appended records.
///
/// # Examples
///
/// ```rust
/// use properties_edit::Separator;
///
/// assert_eq!(Separator::Equals.as_str(), "=");
/// assert_eq!(Separator::Colon.as_str(), ":");
/// assert_eq!(Separator::SpacedEquals.as_str(), " = ");
/// assert_eq!(Separator::Space.as_str(), " ");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Separator {
    #[default]
    Equals,
    Colon,
    SpacedEquals,
    Space,
}

impl Separator {
    /// Returns the string representation of this separator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Separator::Equals => "=",
            Separator::Colon => ":",
            Separator::SpacedEquals => " = ",
            Separator::Space => " ",
        }
    }
}

/// Comment marker put in front of comment lines that lack one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CommentPrefix {
    #[default]
    HashSpace,
    Hash,
    BangSpace,
    Bang,
}

impl CommentPrefix {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            CommentPrefix::HashSpace => "# ",
            CommentPrefix::Hash => "#",
            CommentPrefix::BangSpace => "! ",
            CommentPrefix::Bang => "!",
        }
    }

    /// Detects the prefix a comment line starts with.
    ///
    /// The spaced variants win over the bare markers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use properties_edit::CommentPrefix;
    ///
    /// assert_eq!(CommentPrefix::detect("# note"), Some(CommentPrefix::HashSpace));
    /// assert_eq!(CommentPrefix::detect("!note"), Some(CommentPrefix::Bang));
    /// assert_eq!(CommentPrefix::detect("note"), None);
    /// ```
    #[must_use]
    pub fn detect(line: &str) -> Option<Self> {
        [
            CommentPrefix::HashSpace,
            CommentPrefix::Hash,
            CommentPrefix::BangSpace,
            CommentPrefix::Bang,
        ]
        .into_iter()
        .find(|prefix| line.starts_with(prefix.as_str()))
    }
}

/// Terminator used for lines the document inserts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Configuration for generated text.
///
/// The defaults write `key=value` records, `# ` comments and `\n` line
/// breaks.
///
/// # Examples
///
/// ```rust
/// use properties_edit::{CommentPrefix, FormatOptions, LineEnding, Separator};
///
/// let options = FormatOptions::new()
///     .with_separator(Separator::Colon)
///     .with_comment_prefix(CommentPrefix::Bang)
///     .with_line_ending(LineEnding::CrLf);
/// assert_eq!(options.separator, Separator::Colon);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FormatOptions {
    pub separator: Separator,
    pub comment_prefix: CommentPrefix,
    pub line_ending: LineEnding,
}

impl FormatOptions {
    /// Creates default options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use properties_edit::{FormatOptions, LineEnding};
    ///
    /// let options = FormatOptions::new();
    /// assert_eq!(options.line_ending, LineEnding::Lf);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the separator used for appended records.
    #[must_use]
    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    /// Sets the prefix for comment lines when a key has no comment yet.
    #[must_use]
    pub fn with_comment_prefix(mut self, prefix: CommentPrefix) -> Self {
        self.comment_prefix = prefix;
        self
    }

    /// Sets the terminator of inserted lines.
    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}
