//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Strong`**: `DELIM = b"**"`, content parsed recursively
//! - **`Emphasis`**: `DELIM = b"_"`, content parsed recursively
//! - **`CodeSpan`**: `DELIM = b"\`"`, raw zone that suppresses other parsing
//!
//! The parser reads these constants; it never hardcodes `**`, `_` or `` ` ``.

pub mod code_span;
pub mod emphasis;
pub mod strong;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use strong::Strong;
