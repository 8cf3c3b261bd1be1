//! # Notes Parsing
//!
//! Two pure stages: the block segmenter (`blocks`) turns the notes body into
//! an ordered list of [`Block`]s, and the inline formatter (`inline`) turns a
//! single line of block text into a tree of [`inline::InlineNode`]s.
//!
//! Inline parsing is deferred to render time; blocks hold raw strings.

pub mod blocks;
pub mod inline;

use log::{debug, trace};
use serde::Serialize;

use blocks::{Block, BlockBuilder, MarkdownLineClassifier};

/// The block sequence of one notes document, in source line order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedDoc {
    pub blocks: Vec<Block>,
}

impl ParsedDoc {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Segments `text` into blocks. Never fails; unrecognised lines become paragraphs.
pub fn parse_document(text: &str) -> ParsedDoc {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for (n, line) in source_lines(text).enumerate() {
        let lc = classifier.classify(line);
        trace!("line {n}: {lc:?}");
        builder.push(&lc);
    }

    let blocks = builder.finish();
    debug!("segmented notes into {} blocks", blocks.len());
    ParsedDoc { blocks }
}

/// Like [`parse_document`], treating a missing notes body as empty.
pub fn parse_notes(text: Option<&str>) -> ParsedDoc {
    parse_document(text.unwrap_or_default())
}

/// Splits on `\n`; a `\r` left over from `\r\n` is stripped with the rest of
/// the trailing whitespace during classification.
///
/// The empty string has no lines at all, so it yields no blocks.
fn source_lines(text: &str) -> impl Iterator<Item = &str> {
    let lines = if text.is_empty() {
        None
    } else {
        Some(text.split('\n'))
    };
    lines.into_iter().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_lines() {
        assert_eq!(source_lines("").count(), 0);
    }

    #[test]
    fn crlf_lines_split_on_newline() {
        let lines: Vec<_> = source_lines("a\r\nb").collect();
        assert_eq!(lines, vec!["a\r", "b"]);
    }

    #[test]
    fn trailing_newline_yields_final_empty_line() {
        let lines: Vec<_> = source_lines("a\n").collect();
        assert_eq!(lines, vec!["a", ""]);
    }

    #[test]
    fn missing_notes_parse_as_empty() {
        assert!(parse_notes(None).is_empty());
        assert!(parse_notes(Some("")).is_empty());
    }
}
