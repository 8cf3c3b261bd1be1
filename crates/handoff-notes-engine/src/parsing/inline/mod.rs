//! # Inline Parsing
//!
//! Cursor-based recursive descent over one line of block text.
//!
//! ## Architecture
//!
//! Inline parsing runs separately for each heading, paragraph and list item.
//! Three delimited constructs compete:
//! - `**strong**` and `_emphasis_`, whose content is parsed again recursively
//! - `` `code` ``, a raw zone whose content is kept verbatim
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, Strong, Emphasis, Code)
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers
//!
//! ## Match Precedence
//!
//! The construct whose opening delimiter appears first in the line wins,
//! whatever its kind: `_a_ **b**` is emphasis then strong. Content is the
//! shortest non-empty run up to the first closing delimiter on the same line;
//! an opener with no closer is literal text.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::{InlineNode, plain_text};
