//! # Block Segmentation
//!
//! Two-phase, single forward pass over the source lines.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is trimmed and classified
//!    into a `LineClass` using only local facts (blank, heading, rule, list item)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` keeps the open list
//!    accumulator and emits `Block`s in source order
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `ListKind`)
//! - **`kinds`**: Block-specific types with owned markers (Heading, Rule, ListItem)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Block order is source line order; nothing is merged across lines except
//!   consecutive list items of the same kind
//! - Every non-blank line that matches no marker becomes a paragraph

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{Block, ListKind};
