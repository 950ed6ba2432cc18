//! Renderer for the lightweight markup used in storefront product descriptions.
//!
//! Descriptions support `**bold**` / `__bold__`, `*italic*` / `_italic_`, lines
//! starting with `-`, `*` or `•` plus a space for bullet points, and blank lines
//! for paragraph breaks. [`render`] turns that text into a [`Document`]; the
//! emitters turn a document into HTML, Typst or PDF.

mod block;
mod config;
mod error;
mod guide;
mod html;
mod inline;
mod parser;
mod typst;

pub use block::{Block, Document, List, ListItem, Span};
pub use config::{Config, HtmlConfig, TypstConfig};
pub use error::{Error, Result};
pub use guide::{GuideEntry, authoring_guide};

use typst_as_lib::TypstEngine;
use typst_as_lib::typst_kit_options::TypstKitFontOptions;
use typst_pdf::PdfOptions;

/// Render description text into a document. Never fails.
pub fn render(text: &str) -> Document {
    let doc = parser::parse(text);
    tracing::trace!(
        bytes = text.len(),
        blocks = doc.blocks.len(),
        "rendered description"
    );
    doc
}

/// Render a description that may be missing; `None` gives an empty document.
pub fn render_optional(text: Option<&str>) -> Document {
    text.map(render).unwrap_or_default()
}

/// Convert a description to HTML using default config.
pub fn description_to_html(text: &str) -> String {
    description_to_html_with_config(text, &Config::compiled_default())
}

/// Convert a description to HTML with custom config.
pub fn description_to_html_with_config(text: &str, config: &Config) -> String {
    html::blocks_to_html(&render(text), &config.html)
}

/// Convert a description to Typst markup using default config.
pub fn description_to_typst(text: &str) -> String {
    description_to_typst_with_config(text, &Config::compiled_default())
}

/// Convert a description to Typst markup with custom config.
pub fn description_to_typst_with_config(text: &str, config: &Config) -> String {
    typst::blocks_to_typst(&render(text), &config.typst)
}

/// Convert a description to PDF bytes using default config.
pub fn description_to_pdf(text: &str) -> Result<Vec<u8>> {
    description_to_pdf_with_config(text, &Config::compiled_default())
}

/// Convert a description to PDF bytes with custom config.
pub fn description_to_pdf_with_config(text: &str, config: &Config) -> Result<Vec<u8>> {
    use typst_library::layout::PagedDocument;

    let typst_content = description_to_typst_with_config(text, config);

    let font_options = TypstKitFontOptions::new()
        .include_embedded_fonts(true)
        .include_system_fonts(false);

    let engine = TypstEngine::builder()
        .main_file(typst_content)
        .search_fonts_with(font_options)
        .build();

    let doc: PagedDocument = engine
        .compile()
        .output
        .map_err(|e| Error::Typst(format!("{:?}", e)))?;

    let bytes = typst_pdf::pdf(&doc, &PdfOptions::default())
        .map_err(|e| Error::Pdf(format!("{:?}", e)))?;
    tracing::debug!(pages = doc.pages.len(), bytes = bytes.len(), "generated PDF");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_description() {
        assert!(render_optional(None).is_empty());
        assert_eq!(render_optional(Some("x")), render("x"));
    }

    #[test]
    fn pdf_export() {
        let bytes = description_to_pdf("Soft **cotton** shirt\n\n- *breathable*\n- light").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn pdf_export_with_emphasis_inside_words() {
        for text in [
            "Model**X200** copier",
            "- **x**\n- *a*b",
            "part_no_A4",
            "**Note**.Sizes (*approx*)(cm)",
            "1. Warranty included",
        ] {
            let bytes = description_to_pdf(text).unwrap();
            assert!(bytes.starts_with(b"%PDF"), "no PDF for {text:?}");
        }
    }
}
