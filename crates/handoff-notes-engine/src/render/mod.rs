//! # Document Rendering
//!
//! Maps parsed blocks to a presentation tree that a display layer binds to
//! its own visual primitives. The mapping is purely structural: the only
//! parsing done here is running the inline formatter over block text.
//!
//! Backends for the tree live in submodules: `html` and `text`. The CLI adds
//! a terminal backend on top of the same tree.

pub mod html;
pub mod style;
pub mod text;

use log::debug;
use serde::Serialize;

use crate::parsing::{
    ParsedDoc,
    blocks::{Block, ListKind},
    inline::{InlineNode, parse_inline},
    parse_notes,
};
use style::Theme;

/// The rendered notes: a fixed label followed by one element per block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedNotes {
    pub label: String,
    pub elements: Vec<Element>,
}

/// One of the three heading sizes, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeTier {
    Large,
    Medium,
    Small,
}

impl SizeTier {
    pub fn for_level(level: u8) -> Self {
        match level {
            1 => SizeTier::Large,
            2 => SizeTier::Medium,
            _ => SizeTier::Small,
        }
    }
}

/// A styled element of the presentation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Element {
    Heading {
        level: u8,
        size: SizeTier,
        runs: Vec<Run>,
    },
    TextBlock {
        runs: Vec<Run>,
    },
    BulletList {
        items: Vec<Vec<Run>>,
    },
    NumberedList {
        items: Vec<Vec<Run>>,
    },
    Divider,
    /// Fixed-height empty element, height in px.
    Spacer {
        height: u16,
    },
}

/// A styled run of text, the presentation form of an [`InlineNode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "style", content = "value", rename_all = "camelCase")]
pub enum Run {
    Plain(String),
    Bold(Vec<Run>),
    Italic(Vec<Run>),
    /// Monospace with a background.
    Monospace(String),
}

impl From<&InlineNode> for Run {
    fn from(node: &InlineNode) -> Self {
        match node {
            InlineNode::Text(s) => Run::Plain(s.clone()),
            InlineNode::Strong(children) => Run::Bold(runs_of(children)),
            InlineNode::Emphasis(children) => Run::Italic(runs_of(children)),
            InlineNode::Code(s) => Run::Monospace(s.clone()),
        }
    }
}

fn runs_of(nodes: &[InlineNode]) -> Vec<Run> {
    nodes.iter().map(Run::from).collect()
}

/// Runs the inline formatter over one line of block text.
fn inline_runs(text: &str) -> Vec<Run> {
    runs_of(&parse_inline(text))
}

/// Renders parsed blocks, resolving each block's text into runs.
pub fn render_document(doc: &ParsedDoc, theme: &Theme) -> RenderedNotes {
    let elements = doc
        .blocks
        .iter()
        .map(|block| render_block(block, theme))
        .collect::<Vec<_>>();
    debug!("rendered {} elements", elements.len());

    RenderedNotes {
        label: theme.label.clone(),
        elements,
    }
}

/// Parses and renders a notes body in one step. `None` renders like `""`:
/// the label and nothing else.
pub fn render_notes(text: Option<&str>, theme: &Theme) -> RenderedNotes {
    render_document(&parse_notes(text), theme)
}

fn render_block(block: &Block, theme: &Theme) -> Element {
    match block {
        Block::Heading { level, content } => Element::Heading {
            level: *level,
            size: SizeTier::for_level(*level),
            runs: inline_runs(content),
        },
        Block::Paragraph { content } => Element::TextBlock {
            runs: inline_runs(content),
        },
        Block::List { kind, items } => {
            let items = items.iter().map(|item| inline_runs(item)).collect();
            match kind {
                ListKind::Unordered => Element::BulletList { items },
                ListKind::Ordered => Element::NumberedList { items },
            }
        }
        Block::HorizontalRule => Element::Divider,
        Block::Spacer => Element::Spacer {
            height: theme.spacer_height,
        },
    }
}
