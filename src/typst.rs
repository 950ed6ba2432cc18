use crate::block::{Block, Document, List, Span};
use crate::config::TypstConfig;

/// Convert a rendered description to Typst markup
pub fn blocks_to_typst(doc: &Document, config: &TypstConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "#set page(paper: \"{}\", margin: {})\n",
        config.paper, config.margin
    ));
    out.push_str(&format!("#set text(size: {})\n", config.font_size));
    // Set up paragraph settings to prevent widows/orphans
    out.push_str("#set par(linebreaks: \"optimized\")\n\n");

    for block in &doc.blocks {
        emit_block(block, config, &mut out);
    }

    out
}

fn emit_block(block: &Block, config: &TypstConfig, out: &mut String) {
    match block {
        Block::Paragraph { content } => {
            line_to_typst(content, out);
            out.push('\n');
            out.push('\n');
        }
        Block::List(list) => {
            // Wrap list to keep together when small, allow breaks when large
            if list.items.len() <= config.keep_together_max_items {
                out.push_str("#block(breakable: false)[\n");
                list_to_typst(list, out);
                out.push_str("]\n\n");
            } else {
                list_to_typst(list, out);
                out.push('\n');
            }
        }
        Block::LineBreak => {
            out.push_str(&format!("#v({})\n\n", config.blank_line_spacing));
        }
    }
}

/// Spans that start a line, where a leading heading or list marker would
/// change the block type.
fn line_to_typst(spans: &[Span], out: &mut String) {
    let start = out.len();
    spans_to_typst(spans, out);
    let line = &out[start..];
    let trimmed = line.trim_start();
    let indent = line.len() - trimmed.len();
    let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
    if trimmed.starts_with(['=', '+', '-']) {
        out.insert(start + indent, '\\');
    } else if digits > 0 && trimmed[digits..].starts_with('.') {
        // `1.` opens a numbered list
        out.insert(start + indent + digits, '\\');
    }
}

fn spans_to_typst(spans: &[Span], out: &mut String) {
    for (i, span) in spans.iter().enumerate() {
        let func = match span {
            Span::Text(text) => {
                escape_into(text, out);
                continue;
            }
            Span::Bold(_) => "strong",
            Span::Italic(_) => "emph",
        };
        out.push('#');
        out.push_str(func);
        out.push('[');
        escape_into(span.as_str(), out);
        out.push(']');
        // End the call so a following `.` or `(` isn't read as part of it
        if spans
            .get(i + 1)
            .is_some_and(|next| next.as_str().starts_with(['.', '(']))
        {
            out.push(';');
        }
    }
}

fn escape_into(text: &str, out: &mut String) {
    // Escape special Typst characters
    for ch in text.chars() {
        match ch {
            '#' | '*' | '_' | '@' | '$' | '\\' | '`' | '<' | '>' | '[' | ']' | '/' | '~' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
}

fn list_to_typst(list: &List, out: &mut String) {
    for item in &list.items {
        out.push_str("- ");
        line_to_typst(&item.content, out);
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use crate::{Config, description_to_typst, description_to_typst_with_config};

    const PREAMBLE: &str = "#set page(paper: \"a4\", margin: 2cm)\n\
                            #set text(size: 11pt)\n\
                            #set par(linebreaks: \"optimized\")\n\n";

    #[test]
    fn empty() {
        assert_eq!(description_to_typst(""), PREAMBLE);
    }

    #[test]
    fn paragraph() {
        assert_eq!(
            description_to_typst("Hello world"),
            format!("{PREAMBLE}Hello world\n\n")
        );
    }

    #[test]
    fn bold_and_italic() {
        assert_eq!(
            description_to_typst("**bold** and *italic*"),
            format!("{PREAMBLE}#strong[bold] and #emph[italic]\n\n")
        );
    }

    #[test]
    fn emphasis_inside_words() {
        assert_eq!(
            description_to_typst("Model**X200** copier"),
            format!("{PREAMBLE}Model#strong[X200] copier\n\n")
        );
        assert_eq!(
            description_to_typst("part_no_A4"),
            format!("{PREAMBLE}part#emph[no]A4\n\n")
        );
        assert_eq!(
            description_to_typst("- **x**\n- *a*b"),
            format!("{PREAMBLE}#block(breakable: false)[\n- #strong[x]\n- #emph[a]b\n]\n\n")
        );
    }

    #[test]
    fn emphasis_before_punctuation() {
        assert_eq!(
            description_to_typst("**Note**.Sizes (*approx*)(cm)"),
            format!("{PREAMBLE}#strong[Note];.Sizes (#emph[approx])(cm)\n\n")
        );
    }

    #[test]
    fn short_list_kept_together() {
        assert_eq!(
            description_to_typst("- one\n- two"),
            format!("{PREAMBLE}#block(breakable: false)[\n- one\n- two\n]\n\n")
        );
    }

    #[test]
    fn item_starting_with_dash() {
        assert_eq!(
            description_to_typst("- - x"),
            format!("{PREAMBLE}#block(breakable: false)[\n- \\- x\n]\n\n")
        );
    }

    #[test]
    fn long_list_may_break() {
        let mut config = Config::compiled_default();
        config.typst.keep_together_max_items = 1;
        assert_eq!(
            description_to_typst_with_config("- one\n- two", &config),
            format!("{PREAMBLE}- one\n- two\n\n")
        );
    }

    #[test]
    fn blank_line_adds_space() {
        assert_eq!(
            description_to_typst("a\n\nb"),
            format!("{PREAMBLE}a\n\n#v(0.6em)\n\nb\n\n")
        );
    }

    #[test]
    fn escapes_special_chars() {
        assert_eq!(
            description_to_typst("a * b #1"),
            format!("{PREAMBLE}a \\* b \\#1\n\n")
        );
        assert_eq!(
            description_to_typst("= not a heading"),
            format!("{PREAMBLE}\\= not a heading\n\n")
        );
        assert_eq!(description_to_typst("a_b"), format!("{PREAMBLE}a\\_b\n\n"));
        assert_eq!(
            description_to_typst("**x*y**"),
            format!("{PREAMBLE}#strong[x\\*y]\n\n")
        );
    }

    #[test]
    fn escapes_numbered_list_marker() {
        assert_eq!(
            description_to_typst("1. Warranty included"),
            format!("{PREAMBLE}1\\. Warranty included\n\n")
        );
        assert_eq!(
            description_to_typst("- 12. spare fuse"),
            format!("{PREAMBLE}#block(breakable: false)[\n- 12\\. spare fuse\n]\n\n")
        );
        assert_eq!(
            description_to_typst("2024 model"),
            format!("{PREAMBLE}2024 model\n\n")
        );
    }
}
