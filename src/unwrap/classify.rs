//! Eligibility predicates for paragraph unwrapping.

use crate::dom::{Dom, NodeId};

/// What a paragraph child amounts to, as far as unwrapping is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Anything that keeps the paragraph in place.
    NotEligible,
    /// A bare `<img>`.
    Image,
    /// An `<a>` whose only meaningful child is an `<img>`.
    ImageLink,
}

impl Classification {
    pub fn is_eligible(self) -> bool {
        !matches!(self, Classification::NotEligible)
    }
}

/// Classify a single node.
pub fn classify(dom: &Dom, id: NodeId) -> Classification {
    if dom.is_html_element(id, "img") {
        return Classification::Image;
    }

    if dom.is_html_element(id, "a") {
        let mut meaningful = meaningful_children(dom, id);
        if let (Some(only), None) = (meaningful.next(), meaningful.next())
            && dom.is_html_element(only, "img")
        {
            return Classification::ImageLink;
        }
    }

    Classification::NotEligible
}

/// Check if a node is a text node made only of HTML whitespace.
///
/// Empty text counts as whitespace.
pub fn is_whitespace_text(dom: &Dom, id: NodeId) -> bool {
    dom.text_content(id).is_some_and(|text| {
        text.bytes()
            .all(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0c'))
    })
}

/// Children of `id` that are not whitespace-only text.
pub fn meaningful_children(dom: &Dom, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
    dom.children(id)
        .filter(move |&child| !is_whitespace_text(dom, child))
}

/// Check if `id` is a paragraph that can be replaced by its children.
///
/// It must hold at least one meaningful child, and every meaningful child
/// must be an image or a link around a single image.
pub fn is_unwrappable_paragraph(dom: &Dom, id: NodeId) -> bool {
    if !dom.is_html_element(id, "p") {
        return false;
    }

    let mut any = false;
    for child in meaningful_children(dom, id) {
        if !classify(dom, child).is_eligible() {
            return false;
        }
        any = true;
    }
    any
}
