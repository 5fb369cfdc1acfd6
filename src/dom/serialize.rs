//! HTML serializer for [`Dom`].
//!
//! Emits HTML syntax (not XHTML): void elements get no end tag and no
//! self-closing slash, attributes keep their source order.

use std::fmt::Write;

use html5ever::ns;

use super::arena::{Dom, NodeData, NodeId};

/// Elements that never have an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Elements whose text children are emitted without escaping.
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "iframe",
    "noembed",
    "noframes",
    "noscript",
    "plaintext",
    "script",
    "style",
    "xmp",
];

/// Serialize the whole tree below the document root.
pub fn serialize(dom: &Dom) -> String {
    serialize_children(dom, dom.document())
}

/// Serialize a single node, the node itself included.
pub fn serialize_node(dom: &Dom, id: NodeId) -> String {
    let mut out = String::new();
    write_node(dom, id, false, &mut out);
    out
}

/// Serialize the children of a node, the node itself excluded.
pub fn serialize_children(dom: &Dom, id: NodeId) -> String {
    let mut out = String::new();
    let raw = is_raw_text_parent(dom, id);
    for child in dom.children(id) {
        write_node(dom, child, raw, &mut out);
    }
    out
}

enum Frame<'a> {
    Node(NodeId, bool),
    EndTag(&'a str),
}

/// Write `id` and its subtree with an explicit stack, so nesting depth is
/// bounded by memory rather than the call stack.
fn write_node(dom: &Dom, id: NodeId, raw_text: bool, out: &mut String) {
    let mut stack = vec![Frame::Node(id, raw_text)];

    while let Some(frame) = stack.pop() {
        let (id, raw_text) = match frame {
            Frame::Node(id, raw_text) => (id, raw_text),
            Frame::EndTag(tag) => {
                write!(out, "</{tag}>").unwrap();
                continue;
            }
        };
        let Some(node) = dom.node(id) else {
            continue;
        };

        match &node.data {
            NodeData::Document => push_children(dom, id, false, &mut stack),
            NodeData::Doctype { name, .. } => {
                write!(out, "<!DOCTYPE {name}>").unwrap();
            }
            NodeData::Comment(text) => {
                write!(out, "<!--{text}-->").unwrap();
            }
            NodeData::Text(text) => {
                if raw_text {
                    out.push_str(text);
                } else {
                    escape_text(text, out);
                }
            }
            NodeData::Element { name, attrs } => {
                let tag = name.local.as_ref();
                out.push('<');
                out.push_str(tag);
                for attr in attrs {
                    out.push(' ');
                    if let Some(prefix) = &attr.name.prefix {
                        out.push_str(prefix.as_ref());
                        out.push(':');
                    }
                    out.push_str(attr.name.local.as_ref());
                    out.push_str("=\"");
                    escape_attr(&attr.value, out);
                    out.push('"');
                }
                out.push('>');

                let is_html = name.ns == ns!(html);
                if is_html && VOID_ELEMENTS.contains(&tag) {
                    continue;
                }

                let raw = is_html && RAW_TEXT_ELEMENTS.contains(&tag);
                stack.push(Frame::EndTag(tag));
                push_children(dom, id, raw, &mut stack);
            }
        }
    }
}

/// Push the children of `id` so they pop in document order.
fn push_children<'a>(dom: &'a Dom, id: NodeId, raw_text: bool, stack: &mut Vec<Frame<'a>>) {
    let start = stack.len();
    stack.extend(dom.children(id).map(|child| Frame::Node(child, raw_text)));
    stack[start..].reverse();
}

fn is_raw_text_parent(dom: &Dom, id: NodeId) -> bool {
    RAW_TEXT_ELEMENTS
        .iter()
        .any(|tag| dom.is_html_element(id, tag))
}

/// Escape text content: `&`, `<`, `>` and U+00A0.
fn escape_text(text: &str, out: &mut String) {
    if memchr::memchr3(b'&', b'<', b'>', text.as_bytes()).is_none() && !text.contains('\u{a0}') {
        out.push_str(text);
        return;
    }
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}

/// Escape an attribute value: `&`, `"` and U+00A0.
fn escape_attr(value: &str, out: &mut String) {
    if memchr::memchr2(b'&', b'"', value.as_bytes()).is_none() && !value.contains('\u{a0}') {
        out.push_str(value);
        return;
    }
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}
