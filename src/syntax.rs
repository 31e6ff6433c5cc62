//! The properties text format, as read and written by this crate.
//!
//! # Lines
//!
//! Input is processed one physical line at a time. Lines end in `\n`, `\r\n`
//! or a lone `\r`; whichever appears in the source is kept. Leading spaces,
//! tabs and form feeds are ignored when classifying a line (but preserved).
//!
//! | Line | Recognized by | Example |
//! |------|---------------|---------|
//! | Blank | only whitespace | ` ` |
//! | Comment | first non-blank character is `#` or `!` | `# database settings` |
//! | Record | anything else | `db.host = localhost` |
//!
//! # Records
//!
//! A record is a key, an optional separator and a value:
//!
//! ```text
//! key=value
//! key = value
//! key:value
//! key value
//! key
//! ```
//!
//! - The key ends at the first unescaped `=`, `:`, space, tab or form feed
//! - The separator is the `=` or `:` together with the blanks around it, or
//!   just the blanks
//! - The value is the rest of the line, trailing blanks included
//! - A key on its own has an empty value
//!
//! # Escapes
//!
//! Keys and values may contain backslash escapes:
//!
//! ```text
//! \n \r \t \f  - newline, carriage return, tab, form feed
//! \uXXXX       - UTF-16 code unit (4 hex digits, surrogate pairs combined)
//! \<other>     - the character itself, e.g. \= \: \# \! \\ and "\ "
//! ```
//!
//! A `\u` escape with fewer than four hex digits is an error.
//!
//! # Line Continuation
//!
//! A value whose line ends in an odd number of backslashes continues on the
//! next physical line. The line break and the next line's indentation are
//! not part of the decoded value:
//!
//! ```text
//! fruits = apple, \
//!          banana
//! ```
//!
//! decodes to `apple, banana`. A continued line is never treated as a
//! comment.
//!
//! # Comment Blocks
//!
//! The comment lines directly above a record belong to its key. A blank line
//! between comment lines ends the block; blank lines between the block and
//! the record do not.
//!
//! # Generated Text
//!
//! Text added by editing follows [`FormatOptions`](crate::FormatOptions).
//! When escaping new keys and values, control characters and backslashes are
//! escaped. Spaces are escaped everywhere in keys but only in first position
//! in values. Every character above U+00FF becomes `\uXXXX` with lowercase
//! hex digits.

// This module contains only documentation; no implementation code
