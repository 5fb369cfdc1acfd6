//! Parse, unwrap, serialize.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::dom::{Dom, parse_bytes, parse_document, parse_fragment, serialize};
use crate::error::{Error, Result};
use crate::markdown::parse_markdown;
use crate::unwrap::unwrap_images;
use crate::util::decode_text;

/// Input format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// An HTML fragment (no `html`/`head`/`body` added).
    #[default]
    Html,
    /// A complete HTML document.
    HtmlDocument,
    /// Markdown, rendered to HTML first.
    Markdown,
}

impl Format {
    /// Detect format from a file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("md" | "markdown") => Ok(Format::Markdown),
            Some("html" | "htm" | "xhtml") => Ok(Format::HtmlDocument),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Parse raw input bytes in this format.
    pub fn parse(self, bytes: &[u8]) -> Dom {
        match self {
            Format::Html => parse_bytes(bytes, true),
            Format::HtmlDocument => parse_bytes(bytes, false),
            Format::Markdown => parse_markdown(&decode_text(bytes, None)),
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "html" | "fragment" => Ok(Format::Html),
            "document" | "doc" => Ok(Format::HtmlDocument),
            "markdown" | "md" => Ok(Format::Markdown),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Unwrap image paragraphs in an HTML fragment.
///
/// ```
/// use unwrap_images::unwrap_html_fragment;
///
/// assert_eq!(
///     unwrap_html_fragment(r#"<p><img alt="hi" src="there.png"></p>"#),
///     r#"<img alt="hi" src="there.png">"#
/// );
/// ```
pub fn unwrap_html_fragment(html: &str) -> String {
    run(parse_fragment(html))
}

/// Unwrap image paragraphs in a complete HTML document.
pub fn unwrap_html_document(html: &str) -> String {
    run(parse_document(html))
}

/// Render markdown to HTML with image paragraphs unwrapped.
pub fn unwrap_markdown(markdown: &str) -> String {
    run(parse_markdown(markdown))
}

/// Parse `bytes` as `format`, unwrap and serialize.
pub fn process(bytes: &[u8], format: Format) -> String {
    run(format.parse(bytes))
}

/// Read a file, pick its format from the extension, unwrap and serialize.
pub fn process_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let bytes = fs::read(path)?;
    Ok(process(&bytes, format))
}

fn run(mut dom: Dom) -> String {
    unwrap_images(&mut dom);
    serialize(&dom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path("a.md").unwrap(), Format::Markdown);
        assert_eq!(Format::from_path("a.MARKDOWN").unwrap(), Format::Markdown);
        assert_eq!(Format::from_path("dir/a.html").unwrap(), Format::HtmlDocument);
        assert_eq!(Format::from_path("a.xhtml").unwrap(), Format::HtmlDocument);
        assert!(matches!(
            Format::from_path("a.txt"),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(Format::from_path("README").is_err());
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("html".parse::<Format>().unwrap(), Format::Html);
        assert_eq!("Document".parse::<Format>().unwrap(), Format::HtmlDocument);
        assert_eq!("md".parse::<Format>().unwrap(), Format::Markdown);
        assert!("pdf".parse::<Format>().is_err());
    }

    #[test]
    fn test_unwrap_html_document() {
        assert_eq!(
            unwrap_html_document(r#"<p><img src="a.png"></p>"#),
            r#"<html><head></head><body><img src="a.png"></body></html>"#
        );
    }

    #[test]
    fn test_process_markdown_bytes() {
        let out = process(b"![hi](there.png)", Format::Markdown);
        assert_eq!(out.trim_end(), r#"<img src="there.png" alt="hi">"#);
    }
}
