//! # Block Kinds
//!
//! Block types that own their line markers. The classifier asks these types
//! whether a trimmed line opens their block; it never hardcodes `#` or `-`.

pub mod heading;
pub mod list_item;
pub mod rule;

pub use heading::Heading;
pub use list_item::ListItem;
pub use rule::Rule;

use super::classify::is_line_space;

/// Returns the text after the whitespace run that must follow a marker.
///
/// `None` when `rest` does not start with whitespace or has nothing after it.
fn after_marker_gap(rest: &str) -> Option<&str> {
    if !rest.starts_with(is_line_space) {
        return None;
    }
    let text = rest.trim_start_matches(is_line_space);
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_required() {
        assert_eq!(after_marker_gap("text"), None);
    }

    #[test]
    fn gap_of_mixed_whitespace() {
        assert_eq!(after_marker_gap(" \t text"), Some("text"));
    }

    #[test]
    fn gap_without_text() {
        assert_eq!(after_marker_gap("   "), None);
        assert_eq!(after_marker_gap(""), None);
    }
}
