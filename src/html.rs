use crate::block::{Block, Document, Span};
use crate::config::HtmlConfig;

/// Convert a rendered description to storefront HTML
pub fn blocks_to_html(doc: &Document, config: &HtmlConfig) -> String {
    let mut out = String::new();

    for block in &doc.blocks {
        match block {
            Block::Paragraph { content } => {
                open_tag("p", &config.paragraph_class, &mut out);
                spans_to_html(content, config, &mut out);
                out.push_str("</p>");
            }
            Block::List(list) => {
                open_tag("ul", &config.list_class, &mut out);
                for item in &list.items {
                    out.push_str("<li>");
                    spans_to_html(&item.content, config, &mut out);
                    out.push_str("</li>");
                }
                out.push_str("</ul>");
            }
            Block::LineBreak => out.push_str("<br/>"),
        }
    }

    out
}

fn open_tag(name: &str, class: &str, out: &mut String) {
    out.push('<');
    out.push_str(name);
    if !class.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(class));
        out.push('"');
    }
    out.push('>');
}

fn spans_to_html(spans: &[Span], config: &HtmlConfig, out: &mut String) {
    for span in spans {
        let (open, close) = match span {
            Span::Text(_) => ("", ""),
            Span::Bold(_) => ("<strong>", "</strong>"),
            Span::Italic(_) => ("<em>", "</em>"),
        };
        out.push_str(open);
        if config.escape_text {
            out.push_str(&html_escape::encode_text(span.as_str()));
        } else {
            out.push_str(span.as_str());
        }
        out.push_str(close);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Config, description_to_html, description_to_html_with_config};

    #[test]
    fn paragraph() {
        assert_eq!(
            description_to_html("Hello **world**"),
            "<p class=\"mb-1\">Hello <strong>world</strong></p>"
        );
    }

    #[test]
    fn list_then_paragraph() {
        assert_eq!(
            description_to_html("- *soft*\n- warm\nDone"),
            "<ul class=\"list-disc ml-5 space-y-1\"><li><em>soft</em></li><li>warm</li></ul>\
             <p class=\"mb-1\">Done</p>"
        );
    }

    #[test]
    fn blank_line() {
        assert_eq!(
            description_to_html("a\n\nb"),
            "<p class=\"mb-1\">a</p><br/><p class=\"mb-1\">b</p>"
        );
    }

    #[test]
    fn empty_description() {
        assert_eq!(description_to_html(""), "");
    }

    #[test]
    fn escapes_text_by_default() {
        assert_eq!(
            description_to_html("<b>5 & 6</b>"),
            "<p class=\"mb-1\">&lt;b&gt;5 &amp; 6&lt;/b&gt;</p>"
        );
    }

    #[test]
    fn verbatim_text_when_escaping_is_off() {
        let mut config = Config::compiled_default();
        config.html.escape_text = false;
        config.html.paragraph_class = String::new();
        assert_eq!(
            description_to_html_with_config("<b>x</b> **y**", &config),
            "<p><b>x</b> <strong>y</strong></p>"
        );
    }
}
