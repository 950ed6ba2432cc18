use crate::block::{Block, Document, List, ListItem};
use crate::inline::parse_inline;

/// Glyphs that start a list item when followed by whitespace.
const BULLET_MARKERS: [char; 3] = ['-', '*', '•'];

/// Parse a description into blocks, one line at a time.
pub fn parse(text: &str) -> Document {
    if text.is_empty() {
        return Document::default();
    }

    let mut segmenter = Segmenter::default();
    for line in text.split('\n') {
        segmenter.push_line(line.strip_suffix('\r').unwrap_or(line));
    }
    segmenter.finish()
}

#[derive(Default)]
enum ListState {
    #[default]
    OutsideList,
    InsideList(List),
}

#[derive(Default)]
struct Segmenter {
    blocks: Vec<Block>,
    state: ListState,
}

impl Segmenter {
    fn push_line(&mut self, line: &str) {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            self.close_list();
            self.blocks.push(Block::LineBreak);
        } else if let Some(content) = bullet_content(trimmed) {
            self.push_item(ListItem {
                content: parse_inline(content),
            });
        } else {
            self.close_list();
            self.blocks.push(Block::Paragraph {
                content: parse_inline(line),
            });
        }
    }

    fn push_item(&mut self, item: ListItem) {
        match &mut self.state {
            ListState::InsideList(list) => list.items.push(item),
            ListState::OutsideList => {
                self.state = ListState::InsideList(List { items: vec![item] });
            }
        }
    }

    fn close_list(&mut self) {
        if let ListState::InsideList(list) = std::mem::take(&mut self.state) {
            self.blocks.push(Block::List(list));
        }
    }

    /// Close whatever list is still open after the last line.
    fn finish(mut self) -> Document {
        self.close_list();
        Document {
            blocks: self.blocks,
        }
    }
}

/// Item content of a trimmed bulleted line: everything after the marker and
/// the single whitespace character following it.
fn bullet_content(trimmed: &str) -> Option<&str> {
    let mut chars = trimmed.chars();
    let marker = chars.next()?;
    let gap = chars.next()?;
    (BULLET_MARKERS.contains(&marker) && gap.is_whitespace()).then_some(chars.as_str())
}
