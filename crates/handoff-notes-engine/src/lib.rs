pub mod io;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use io::{IoError, read_notes, read_notes_from};
pub use parsing::{
    ParsedDoc,
    blocks::{Block, ListKind},
    inline::{InlineNode, parse_inline},
    parse_document, parse_notes,
};
pub use render::{
    Element, RenderedNotes, Run, SizeTier, render_document, render_notes, style::Theme,
};
