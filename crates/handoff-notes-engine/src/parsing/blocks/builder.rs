use std::mem;

use super::{
    classify::LineClass,
    types::{Block, ListKind},
};

/// A list that is still accepting items.
#[derive(Debug)]
struct OpenList {
    kind: ListKind,
    items: Vec<String>,
}

/// Block construction state machine.
///
/// Feed classified lines with [`push`](Self::push) and collect the blocks
/// with [`finish`](Self::finish). The only state carried between lines is the
/// open list.
pub struct BlockBuilder {
    list: Option<OpenList>,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            list: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        match *c {
            LineClass::Blank => self.emit(Block::Spacer),
            LineClass::Heading { level, content } => self.emit(Block::heading(level, content)),
            LineClass::Rule => self.emit(Block::HorizontalRule),
            LineClass::ListItem { kind, text } => self.extend_list(kind, text),
            LineClass::Text(text) => self.emit(Block::paragraph(text)),
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_list();
        self.out
    }

    /// Emits a non-list block, closing any open list first.
    fn emit(&mut self, block: Block) {
        self.flush_list();
        self.out.push(block);
    }

    fn extend_list(&mut self, kind: ListKind, text: &str) {
        if let Some(open) = self.list.as_mut().filter(|l| l.kind == kind) {
            open.items.push(text.to_string());
            return;
        }
        // No list yet, or the marker switched between bullets and numbers.
        self.flush_list();
        self.list = Some(OpenList {
            kind,
            items: vec![text.to_string()],
        });
    }

    fn flush_list(&mut self) {
        if let Some(OpenList { kind, items }) = mem::take(&mut self.list) {
            self.out.push(Block::List { kind, items });
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
