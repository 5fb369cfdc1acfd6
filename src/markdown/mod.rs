//! Markdown front end.
//!
//! Markdown is rendered to HTML with pulldown-cmark and then parsed as an
//! HTML fragment, so the resulting [`Dom`] has the same shape as one parsed
//! from hand-written HTML: every image ends up inside the `<p>` CommonMark
//! puts around inline content.
//!
//! ```
//! use unwrap_images::markdown::parse_markdown;
//!
//! let dom = parse_markdown("![hi](there.png)");
//! let p = dom.find_by_tag("p").unwrap();
//! assert!(dom.find_by_tag("img").is_some());
//! assert_eq!(dom.node(p).unwrap().parent, Some(dom.document()));
//! ```

use pulldown_cmark::{Options, Parser, html};

use crate::dom::{Dom, parse_fragment};

/// Options for markdown conversion
#[derive(Debug, Clone)]
pub struct MarkdownOptions {
    /// Enable tables extension
    pub tables: bool,
    /// Enable footnotes extension
    pub footnotes: bool,
    /// Enable strikethrough extension
    pub strikethrough: bool,
    /// Enable task lists extension
    pub task_lists: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
            task_lists: true,
        }
    }
}

impl MarkdownOptions {
    /// Plain CommonMark with no extensions.
    pub fn commonmark() -> Self {
        Self {
            tables: false,
            footnotes: false,
            strikethrough: false,
            task_lists: false,
        }
    }

    fn to_pulldown_options(&self) -> Options {
        let mut opts = Options::empty();
        if self.tables {
            opts.insert(Options::ENABLE_TABLES);
        }
        if self.footnotes {
            opts.insert(Options::ENABLE_FOOTNOTES);
        }
        if self.strikethrough {
            opts.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.task_lists {
            opts.insert(Options::ENABLE_TASKLISTS);
        }
        opts
    }
}

/// Render markdown to an HTML string.
pub fn markdown_to_html(markdown: &str, options: &MarkdownOptions) -> String {
    let parser = Parser::new_ext(markdown, options.to_pulldown_options());
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Parse markdown into a DOM, with all extensions enabled.
pub fn parse_markdown(markdown: &str) -> Dom {
    parse_markdown_with(markdown, &MarkdownOptions::default())
}

/// Parse markdown into a DOM.
pub fn parse_markdown_with(markdown: &str, options: &MarkdownOptions) -> Dom {
    parse_fragment(&markdown_to_html(markdown, options))
}
