use serde::Serialize;

/// A parsed inline node. Nodes own their text; nothing points back into the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum InlineNode {
    /// Plain text that isn't part of any delimited construct.
    Text(String),
    /// `**...**`, with its content parsed again.
    Strong(Vec<InlineNode>),
    /// `_..._`, with its content parsed again.
    Emphasis(Vec<InlineNode>),
    /// `` `...` ``. A leaf: the content is kept verbatim.
    Code(String),
}

impl InlineNode {
    pub fn text(s: impl Into<String>) -> Self {
        InlineNode::Text(s.into())
    }

    /// Appends this node's text, without delimiters, to `buf`.
    pub fn write_plain(&self, buf: &mut String) {
        match self {
            InlineNode::Text(s) | InlineNode::Code(s) => buf.push_str(s),
            InlineNode::Strong(children) | InlineNode::Emphasis(children) => {
                children.iter().for_each(|c| c.write_plain(buf));
            }
        }
    }
}

/// The text of `nodes` with all delimiters removed.
pub fn plain_text(nodes: &[InlineNode]) -> String {
    let mut buf = String::new();
    for n in nodes {
        n.write_plain(&mut buf);
    }
    buf
}
