/// Horizontal rule block type.
pub struct Rule;

impl Rule {
    pub const MARKER: char = '-';
    pub const MIN_LEN: usize = 3;

    /// True when the line is nothing but three or more hyphens.
    pub fn matches(line: &str) -> bool {
        line.len() >= Self::MIN_LEN && line.chars().all(|c| c == Self::MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_or_more_hyphens() {
        assert!(Rule::matches("---"));
        assert!(Rule::matches("----------"));
    }

    #[test]
    fn two_hyphens_is_not_a_rule() {
        assert!(!Rule::matches("--"));
    }

    #[test]
    fn mixed_characters_is_not_a_rule() {
        assert!(!Rule::matches("- - -"));
        assert!(!Rule::matches("---x"));
    }
}
