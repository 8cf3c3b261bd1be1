use log::trace;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Strong},
    types::InlineNode,
};

/// Parses one line of block text into a sequence of [`InlineNode`]s.
///
/// Scans left to right; at each position every delimited kind is tried, so
/// the first opener in the line that has a matching closer wins regardless of
/// its kind. Text between constructs is emitted as `InlineNode::Text`.
///
/// # Returns
/// A vector of inline nodes covering the entire input with delimiters
/// removed. Empty input gives an empty vector; input without any complete
/// construct gives a single `Text` node.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<InlineNode>, s: &str, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::text(&s[start..end]));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        if let Some(node) = try_parse_construct(&mut cur) {
            trace!("inline match at {start}..{}: {node:?}", cur.pos());
            flush_text(&mut out, s, text_start, start);
            text_start = cur.pos();
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, s, text_start, cur.pos());
    out
}

/// Tries every construct at the current position.
///
/// Each opener begins with a different byte, so at most one kind can match.
fn try_parse_construct(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    try_parse_strong(cur)
        .or_else(|| try_parse_emphasis(cur))
        .or_else(|| try_parse_code_span(cur))
}

fn try_parse_strong(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let inner = try_parse_delimited(cur, Strong::DELIM)?;
    Some(InlineNode::Strong(parse_inline(inner)))
}

fn try_parse_emphasis(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let inner = try_parse_delimited(cur, Emphasis::DELIM)?;
    Some(InlineNode::Emphasis(parse_inline(inner)))
}

/// Code spans are raw zones: the content is never parsed again.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let inner = try_parse_delimited(cur, CodeSpan::DELIM)?;
    Some(InlineNode::Code(inner.to_string()))
}

/// Attempts to parse `delim content delim` starting at the current position,
/// returning the content.
///
/// Content is at least one character, contains no line break, and ends at the
/// first closing delimiter after that first character. Returns `None` if not
/// at `delim` or if there is no closer on this line; on failure, cursor
/// position is restored.
fn try_parse_delimited<'a>(cur: &mut Cursor<'a>, delim: &[u8]) -> Option<&'a str> {
    if !cur.starts_with(delim) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(delim.len());
    let inner_start = cur.pos();

    let empty = cur.eof() || cur.at_line_break();
    if empty || cur.bump().is_none() || !cur.seek_on_line(delim) {
        // Empty content or not closed, restore cursor
        *cur = saved;
        return None;
    }
    let inner = cur.slice_from(inner_start);
    cur.bump_n(delim.len()); // closing delimiter
    Some(inner)
}
