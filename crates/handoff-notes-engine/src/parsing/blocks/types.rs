use serde::Serialize;

/// Whether a list is numbered or bulleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// `1.`, `2.`, ... items.
    Ordered,
    /// `-` or `*` items.
    Unordered,
}

/// A segmented block. Text fields are raw; inline markup is resolved at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    /// `#`, `##` or `###` heading.
    Heading { level: u8, content: String },
    /// A line of three or more hyphens.
    HorizontalRule,
    /// Consecutive items of one kind, in source order.
    List { kind: ListKind, items: Vec<String> },
    /// Any other non-blank line, trimmed.
    Paragraph { content: String },
    /// One blank source line.
    Spacer,
}

impl Block {
    pub fn paragraph(content: impl Into<String>) -> Self {
        Block::Paragraph {
            content: content.into(),
        }
    }

    pub fn heading(level: u8, content: impl Into<String>) -> Self {
        Block::Heading {
            level,
            content: content.into(),
        }
    }

    pub fn list<I, S>(kind: ListKind, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Block::List {
            kind,
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}
