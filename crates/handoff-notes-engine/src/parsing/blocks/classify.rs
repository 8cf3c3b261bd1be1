use super::{
    kinds::{Heading, ListItem, Rule},
    types::ListKind,
};

/// Classification of a single trimmed line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Borrowed text points into the
/// source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty after trimming.
    Blank,
    Heading { level: u8, content: &'a str },
    Rule,
    ListItem { kind: ListKind, text: &'a str },
    /// Anything else; the trimmed line.
    Text(&'a str),
}

/// Whitespace for trimming and marker gaps. Includes U+FEFF so a byte-order
/// mark at the start of the notes does not hide the first line's marker.
pub fn is_line_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Precedence: blank, heading, rule, list item, text. A rule line such as
    /// `---` is checked before list items so it never reads as a bullet.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = line.trim_matches(is_line_space);
        if trimmed.is_empty() {
            return LineClass::Blank;
        }
        if let Some((level, content)) = Heading::parse(trimmed) {
            return LineClass::Heading { level, content };
        }
        if Rule::matches(trimmed) {
            return LineClass::Rule;
        }
        if let Some((kind, text)) = ListItem::parse(trimmed) {
            return LineClass::ListItem { kind, text };
        }
        LineClass::Text(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", LineClass::Blank)]
    #[case("  \t ", LineClass::Blank)]
    #[case("\r", LineClass::Blank)]
    #[case("# Overnight", LineClass::Heading { level: 1, content: "Overnight" })]
    #[case("  ### Plan  ", LineClass::Heading { level: 3, content: "Plan" })]
    #[case("---", LineClass::Rule)]
    #[case("   -----   ", LineClass::Rule)]
    #[case("- BP stable", LineClass::ListItem { kind: ListKind::Unordered, text: "BP stable" })]
    #[case("2. Recheck labs\r", LineClass::ListItem { kind: ListKind::Ordered, text: "Recheck labs" })]
    #[case("#### D", LineClass::Text("#### D"))]
    #[case("--", LineClass::Text("--"))]
    #[case("  plain note  ", LineClass::Text("plain note"))]
    #[case("\u{feff}# A", LineClass::Heading { level: 1, content: "A" })]
    #[case("\u{feff}- a\u{feff}", LineClass::ListItem { kind: ListKind::Unordered, text: "a" })]
    #[case("\u{feff}", LineClass::Blank)]
    fn classifies_line(#[case] line: &str, #[case] expected: LineClass<'static>) {
        assert_eq!(MarkdownLineClassifier.classify(line), expected);
    }
}
