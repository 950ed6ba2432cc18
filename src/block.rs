use serde::{Deserialize, Serialize};

/// Inline text spans with formatting. Styles never nest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "style", content = "text", rename_all = "snake_case")]
pub enum Span {
    Text(String),
    Bold(String),
    Italic(String),
}

impl Span {
    /// The span's text without any markup.
    pub fn as_str(&self) -> &str {
        match self {
            Span::Text(text) | Span::Bold(text) | Span::Italic(text) => text,
        }
    }

    pub(crate) fn same_style(&self, other: &Span) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    pub(crate) fn push_str(&mut self, more: &str) {
        match self {
            Span::Text(text) | Span::Bold(text) | Span::Italic(text) => text.push_str(more),
        }
    }
}

/// A single bulleted line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub content: Vec<Span>,
}

/// A run of consecutive bulleted lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub items: Vec<ListItem>,
}

/// Block-level elements of a rendered description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// One non-bulleted line, displayed with a trailing line break.
    Paragraph { content: Vec<Span> },
    List(List),
    /// A blank input line.
    LineBreak,
}

/// The structured result of rendering one description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Flatten to unstyled text, one line per paragraph or list item.
    ///
    /// List items are prefixed with `• ` and blank input lines stay blank, so
    /// the result reads like the description with its emphasis markers removed.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            match block {
                Block::Paragraph { content } => {
                    push_spans(content, &mut out);
                    out.push('\n');
                }
                Block::List(list) => {
                    for item in &list.items {
                        out.push_str("• ");
                        push_spans(&item.content, &mut out);
                        out.push('\n');
                    }
                }
                Block::LineBreak => out.push('\n'),
            }
        }
        out
    }
}

fn push_spans(spans: &[Span], out: &mut String) {
    for span in spans {
        out.push_str(span.as_str());
    }
}
