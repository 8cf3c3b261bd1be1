use super::after_marker_gap;
use crate::parsing::blocks::types::ListKind;

/// List item block type with owned marker constants.
pub struct ListItem;

impl ListItem {
    /// Markers that open an unordered item.
    pub const BULLETS: [u8; 2] = [b'-', b'*'];
    /// Separator between the number and the text of an ordered item.
    pub const NUMBER_DOT: u8 = b'.';

    /// Parses an unordered (`- text`, `* text`) or ordered (`12. text`) item.
    pub fn parse(line: &str) -> Option<(ListKind, &str)> {
        Self::bullet(line)
            .map(|text| (ListKind::Unordered, text))
            .or_else(|| Self::numbered(line).map(|text| (ListKind::Ordered, text)))
    }

    fn bullet(line: &str) -> Option<&str> {
        let first = *line.as_bytes().first()?;
        if !Self::BULLETS.contains(&first) {
            return None;
        }
        after_marker_gap(&line[1..])
    }

    fn numbered(line: &str) -> Option<&str> {
        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 || line.as_bytes().get(digits) != Some(&Self::NUMBER_DOT) {
            return None;
        }
        after_marker_gap(&line[digits + 1..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_and_star_bullets() {
        assert_eq!(ListItem::parse("- a"), Some((ListKind::Unordered, "a")));
        assert_eq!(ListItem::parse("* b"), Some((ListKind::Unordered, "b")));
    }

    #[test]
    fn numbered_items() {
        assert_eq!(ListItem::parse("1. a"), Some((ListKind::Ordered, "a")));
        assert_eq!(ListItem::parse("42. b"), Some((ListKind::Ordered, "b")));
    }

    #[test]
    fn bold_text_is_not_a_bullet() {
        assert_eq!(ListItem::parse("**Allergies** none"), None);
    }

    #[test]
    fn number_without_dot_or_space() {
        assert_eq!(ListItem::parse("1 a"), None);
        assert_eq!(ListItem::parse("1.a"), None);
        assert_eq!(ListItem::parse("3.5 mg"), None);
    }

    #[test]
    fn marker_alone_is_not_an_item() {
        assert_eq!(ListItem::parse("-"), None);
        assert_eq!(ListItem::parse("7."), None);
    }
}
