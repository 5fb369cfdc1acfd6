//! Arena DOM, HTML parsing and HTML serialization.
//!
//! # Example
//!
//! ```
//! use unwrap_images::dom::{parse_fragment, serialize};
//!
//! let dom = parse_fragment(r#"<p><img alt="hi" src="there.png"></p>"#);
//! assert_eq!(serialize(&dom), r#"<p><img alt="hi" src="there.png"></p>"#);
//! ```

mod arena;
mod serialize;
mod tree_sink;

pub use arena::{Attribute, Children, Descendants, Dom, Node, NodeData, NodeId};
pub use serialize::{serialize, serialize_children, serialize_node};
pub use tree_sink::DomSink;

use html5ever::driver::ParseOpts;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{QualName, local_name, ns};

use crate::util::{decode_text, sniff_charset};

/// Parse a complete HTML document.
///
/// The result always has the `html`, `head` and `body` elements the HTML5
/// tree builder synthesizes. Parse errors are ignored.
pub fn parse_document(html: &str) -> Dom {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: false,
            ..Default::default()
        },
        ..Default::default()
    };

    html5ever::parse_document(DomSink::new(), opts)
        .from_utf8()
        .one(html.as_bytes())
        .into_dom()
}

/// Parse an HTML fragment.
///
/// The fragment is parsed in a `body` context and its nodes end up directly
/// under the document root, with no synthesized `html`/`head`/`body`.
pub fn parse_fragment(html: &str) -> Dom {
    let context = QualName::new(None, ns!(html), local_name!("body"));
    let parser =
        html5ever::parse_fragment(DomSink::new(), ParseOpts::default(), context, vec![], false);
    let mut dom = parser.one(html).into_dom();

    // The tree builder puts the fragment under a synthetic `html` element.
    let root = dom.document();
    let wrappers: Vec<NodeId> = dom.children(root).collect();
    for wrapper in wrappers {
        dom.unwrap_node(wrapper);
    }

    dom
}

/// Decode raw bytes and parse them as a document or a fragment.
pub fn parse_bytes(bytes: &[u8], fragment: bool) -> Dom {
    let html = decode_text(bytes, sniff_charset(bytes));
    if fragment {
        parse_fragment(&html)
    } else {
        parse_document(&html)
    }
}
