use crate::block::Span;

/// Markup symbols bounding a styled run. Delimiters are ASCII, so byte
/// positions that hold one are always char boundaries.
#[derive(Clone, Copy)]
enum Delimiter {
    /// `**` or `__`
    Double(u8),
    /// `*` or `_`, never adjacent to a second copy of itself
    Single(u8),
}

#[derive(Clone, Copy)]
enum Emphasis {
    Bold,
    Italic,
}

struct InlineRule {
    delimiter: Delimiter,
    emphasis: Emphasis,
}

/// Applied in order. Each rule only sees the plain text left by the ones before.
const RULES: [InlineRule; 4] = [
    InlineRule { delimiter: Delimiter::Double(b'*'), emphasis: Emphasis::Bold },
    InlineRule { delimiter: Delimiter::Double(b'_'), emphasis: Emphasis::Bold },
    InlineRule { delimiter: Delimiter::Single(b'*'), emphasis: Emphasis::Italic },
    InlineRule { delimiter: Delimiter::Single(b'_'), emphasis: Emphasis::Italic },
];

/// Split one line into styled spans.
pub fn parse_inline(line: &str) -> Vec<Span> {
    if line.is_empty() {
        return Vec::new();
    }

    let mut spans = vec![Span::Text(line.to_string())];
    for rule in &RULES {
        spans = spans
            .into_iter()
            .flat_map(|span| match span {
                Span::Text(text) => rule.apply(&text),
                styled => vec![styled],
            })
            .collect();
    }

    merge_adjacent(spans)
}

impl InlineRule {
    fn apply(&self, text: &str) -> Vec<Span> {
        let bytes = text.as_bytes();
        let open_len = self.delimiter.len();
        let mut spans = Vec::new();
        let mut plain_start = 0;
        let mut pos = 0;

        while pos < bytes.len() {
            let Some(close) = self.delimiter.find_pair(bytes, pos) else {
                pos += 1;
                continue;
            };
            if plain_start < pos {
                spans.push(Span::Text(text[plain_start..pos].to_string()));
            }
            spans.push(self.emphasis.wrap(&text[pos + open_len..close]));
            pos = close + open_len;
            plain_start = pos;
        }

        if plain_start < bytes.len() {
            spans.push(Span::Text(text[plain_start..].to_string()));
        }
        spans
    }
}

impl Delimiter {
    fn len(self) -> usize {
        match self {
            Delimiter::Double(_) => 2,
            Delimiter::Single(_) => 1,
        }
    }

    fn opens_at(self, bytes: &[u8], i: usize) -> bool {
        match self {
            Delimiter::Double(d) => bytes.get(i) == Some(&d) && bytes.get(i + 1) == Some(&d),
            Delimiter::Single(d) => {
                bytes.get(i) == Some(&d)
                    && (i == 0 || bytes[i - 1] != d)
                    && bytes.get(i + 1) != Some(&d)
            }
        }
    }

    /// If a delimiter opens at `start`, the position of the nearest closing
    /// delimiter that leaves non-empty content between the two.
    fn find_pair(self, bytes: &[u8], start: usize) -> Option<usize> {
        if !self.opens_at(bytes, start) {
            return None;
        }
        let content_start = start + self.len();
        let limit = run_limit(bytes, content_start);
        (content_start + 1..=limit).find(|&i| self.opens_at(bytes, i))
    }
}

/// Characters a styled run can't span, even within one line.
const RUN_BREAKS: [&str; 3] = ["\r", "\u{2028}", "\u{2029}"];

/// First position at or after `from` holding a run break, or the end of input.
fn run_limit(bytes: &[u8], from: usize) -> usize {
    (from..bytes.len())
        .find(|&i| {
            RUN_BREAKS
                .iter()
                .any(|brk| bytes[i..].starts_with(brk.as_bytes()))
        })
        .unwrap_or(bytes.len())
}

impl Emphasis {
    fn wrap(self, text: &str) -> Span {
        match self {
            Emphasis::Bold => Span::Bold(text.to_string()),
            Emphasis::Italic => Span::Italic(text.to_string()),
        }
    }
}

/// Join neighbouring spans of the same style so every run is maximal.
fn merge_adjacent(spans: Vec<Span>) -> Vec<Span> {
    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if last.same_style(&span) => last.push_str(span.as_str()),
            _ => merged.push(span),
        }
    }
    merged
}
