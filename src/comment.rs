//! Locating and normalizing the comment block attached to a key.
//!
//! A comment block is the run of comment lines directly above a record.
//! Whitespace between the last comment and the key is tolerated, but a blank
//! line *inside* the run ends it:
//!
//! ```text
//! # not part of the block
//!
//! # first line of the block
//! # second line of the block
//! key=value
//! ```
//!
//! Blocks are never stored; they are recomputed from the token list whenever
//! they are needed.

use crate::{CommentPrefix, Token};
use std::ops::Range;

/// Returns the indices of the comment tokens belonging to the key token at
/// `key_index`, earliest first.
pub(crate) fn comment_block(tokens: &[Token], key_index: usize) -> Vec<usize> {
    let mut block = Vec::new();
    // `next` is always one past the token under inspection
    let mut next = key_index;
    while next > 0 && tokens[next - 1].is_whitespace() {
        next -= 1;
    }
    while next > 0 && tokens[next - 1].is_comment() {
        let comment = next - 1;
        block.push(comment);
        // Back up to the terminator of the previous line, then past it
        let start = line_start(tokens, comment);
        if start == 0 {
            break;
        }
        next = start - 1;
    }
    block.reverse();
    block
}

/// Index of the first token on the physical line holding `tokens[index]`.
pub(crate) fn line_start(tokens: &[Token], index: usize) -> usize {
    let mut start = index;
    while start > 0 && !tokens[start - 1].is_end_of_line() {
        start -= 1;
    }
    start
}

/// One past the terminator of the line whose last content token is
/// `tokens[index]`.
pub(crate) fn line_end(tokens: &[Token], index: usize) -> usize {
    match tokens.get(index + 1) {
        Some(next) if next.is_whitespace() && next.is_end_of_line() => index + 2,
        _ => index + 1,
    }
}

/// The whole physical line holding the comment at `index`: indentation,
/// comment and terminator.
pub(crate) fn line_span(tokens: &[Token], index: usize) -> Range<usize> {
    line_start(tokens, index)..line_end(tokens, index)
}

/// Makes sure every line starts with a comment marker.
///
/// Lines without a marker get the most recently seen one, starting with
/// `preferred`. Embedded line breaks split a line in two.
pub(crate) fn normalize_comments<I, S>(comments: I, preferred: CommentPrefix) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut prefix = preferred;
    let mut lines = Vec::new();
    for comment in comments {
        for line in comment.as_ref().split("\r\n").flat_map(|l| l.split(['\n', '\r'])) {
            match CommentPrefix::detect(line) {
                Some(found) => {
                    prefix = found;
                    lines.push(line.to_string());
                }
                None => lines.push(format!("{}{}", prefix.as_str(), line)),
            }
        }
    }
    lines
}
