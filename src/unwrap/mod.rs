//! Unwrap paragraphs that only hold images.
//!
//! A `<p>` whose meaningful content is one or more images, each optionally
//! wrapped in an `<a>` that holds nothing else, is replaced in its parent by
//! its own children:
//!
//! ```text
//! <p><img src="a.png"> <a href="#"><img src="b.png"></a></p>
//! ```
//!
//! becomes
//!
//! ```text
//! <img src="a.png"> <a href="#"><img src="b.png"></a>
//! ```
//!
//! Whitespace between the images is moved along with them. Paragraphs with
//! any other meaningful content are left exactly as they were.
//!
//! The pass mutates the tree in place in one O(n) walk. Unwrapped children
//! keep their [`NodeId`](crate::dom::NodeId)s.

mod classify;
mod pass;

pub use classify::{
    Classification, classify, is_unwrappable_paragraph, is_whitespace_text, meaningful_children,
};

use crate::dom::Dom;

use pass::walk_elements_bottom_up;

/// Unwrap every image-only paragraph in the tree.
pub fn unwrap_images(dom: &mut Dom) {
    unwrap_images_counted(dom);
}

/// Like [`unwrap_images`], returning how many paragraphs were unwrapped.
pub fn unwrap_images_counted(dom: &mut Dom) -> usize {
    let mut unwrapped = 0;

    walk_elements_bottom_up(dom, |dom, id| {
        if is_unwrappable_paragraph(dom, id) && dom.unwrap_node(id) > 0 {
            unwrapped += 1;
        }
    });

    unwrapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Attribute, NodeId, parse_fragment, serialize};

    fn run(html: &str) -> String {
        let mut dom = parse_fragment(html);
        unwrap_images(&mut dom);
        serialize(&dom)
    }

    #[test]
    fn test_unwraps_single_image() {
        assert_eq!(
            run(r#"<p><img alt="hi" src="there.png"></p>"#),
            r#"<img alt="hi" src="there.png">"#
        );
    }

    #[test]
    fn test_unwraps_images_keeping_whitespace() {
        assert_eq!(
            run(r#"<p><img alt="alpha" src="alpha.png"> <img alt="bravo" src="bravo.png"></p>"#),
            r#"<img alt="alpha" src="alpha.png"> <img alt="bravo" src="bravo.png">"#
        );
    }

    #[test]
    fn test_keeps_image_next_to_text() {
        let html = r#"<p>some text <img alt="and" src="and.png"> an image</p>"#;
        assert_eq!(run(html), html);
    }

    #[test]
    fn test_keeps_paragraph_without_images() {
        assert_eq!(run("<p>some text</p>"), "<p>some text</p>");
    }

    #[test]
    fn test_keeps_empty_link() {
        let html = r##"<p><a href="#hi"></a></p>"##;
        assert_eq!(run(html), html);
    }

    #[test]
    fn test_unwraps_image_link() {
        assert_eq!(
            run(r##"<p><a href="#hi"><img alt="hi" src="there.png"></a></p>"##),
            r##"<a href="#hi"><img alt="hi" src="there.png"></a>"##
        );
    }

    #[test]
    fn test_keeps_image_link_next_to_text() {
        let html = r##"<p><a href="#hi"><img alt="hi" src="there.png"></a>!</p>"##;
        assert_eq!(run(html), html);
    }

    #[test]
    fn test_keeps_image_link_with_text_inside() {
        let html = r##"<p><a href="#hi"><img alt="Hello" src="there.png">, world</a></p>"##;
        assert_eq!(run(html), html);
    }

    #[test]
    fn test_unwraps_adjacent_image_links() {
        assert_eq!(
            run(r#"<p><a href="a"><img src="a.png"></a><a href="b"><img src="b.png"></a></p>"#),
            r#"<a href="a"><img src="a.png"></a><a href="b"><img src="b.png"></a>"#
        );
    }

    #[test]
    fn test_unwraps_mixed_images_and_links() {
        assert_eq!(
            run("<p>\n  <img src=\"a.png\">\n  <a href=\"b\"><img src=\"b.png\"></a>\n</p>"),
            "\n  <img src=\"a.png\">\n  <a href=\"b\"><img src=\"b.png\"></a>\n"
        );
    }

    #[test]
    fn test_keeps_whitespace_only_paragraph() {
        assert_eq!(run("<p> </p>"), "<p> </p>");
        assert_eq!(run("<p></p>"), "<p></p>");
    }

    #[test]
    fn test_keeps_image_next_to_line_break() {
        let html = r#"<p><img src="a.png"><br></p>"#;
        assert_eq!(run(html), html);
    }

    #[test]
    fn test_keeps_image_next_to_comment() {
        let html = r#"<p><img src="a.png"><!-- caption --></p>"#;
        assert_eq!(run(html), html);
    }

    #[test]
    fn test_keeps_top_level_image_link() {
        let html = r##"<a href="#hi"><img src="there.png"></a>"##;
        assert_eq!(run(html), html);
    }

    #[test]
    fn test_unwraps_nested_paragraphs_in_place() {
        assert_eq!(
            run(
                r#"<div>before<p><img src="a.png"></p>after</div><blockquote><p><img src="b.png"></p></blockquote>"#
            ),
            r#"<div>before<img src="a.png">after</div><blockquote><img src="b.png"></blockquote>"#
        );
    }

    #[test]
    fn test_unwraps_inside_list_items() {
        assert_eq!(
            run(r#"<ul><li><p><img src="a.png"></p></li><li><p>text</p></li></ul>"#),
            r#"<ul><li><img src="a.png"></li><li><p>text</p></li></ul>"#
        );
    }

    #[test]
    fn test_siblings_keep_their_order() {
        assert_eq!(
            run(r#"<h1>t</h1><p><img src="a.png"></p><p>x</p><p><img src="b.png"></p><hr>"#),
            r#"<h1>t</h1><img src="a.png"><p>x</p><img src="b.png"><hr>"#
        );
    }

    #[test]
    fn test_counts_unwrapped_paragraphs() {
        let mut dom =
            parse_fragment(r#"<p><img src="a.png"></p><p>no</p><p><img src="b.png"></p>"#);
        assert_eq!(unwrap_images_counted(&mut dom), 2);
        assert_eq!(unwrap_images_counted(&mut dom), 0);
    }

    #[test]
    fn test_preserves_node_identity() {
        let mut dom = parse_fragment(r#"<p><a href="x"><img alt="a" src="a.png"></a></p>"#);
        let link = dom.find_by_tag("a").unwrap();
        let img = dom.find_by_tag("img").unwrap();
        let attrs_before = dom.attrs(img).to_vec();

        unwrap_images(&mut dom);

        assert_eq!(dom.find_by_tag("a"), Some(link));
        assert_eq!(dom.find_by_tag("img"), Some(img));
        assert_eq!(dom.node(link).unwrap().parent, Some(dom.document()));
        assert_eq!(dom.node(img).unwrap().parent, Some(link));
        assert_eq!(dom.attrs(img), attrs_before.as_slice());
    }

    #[test]
    fn test_unwraps_paragraph_left_with_only_images_by_inner_unwrap() {
        // Not producible by the HTML parser, but a hand-built tree may nest paragraphs
        let mut dom = crate::dom::Dom::new();
        let root = dom.document();
        let outer = dom.create_html_element("p", vec![]);
        let inner = dom.create_html_element("p", vec![]);
        let img = dom.create_html_element("img", vec![Attribute::new("src", "a.png")]);
        dom.append(root, outer);
        dom.append(outer, inner);
        dom.append(inner, img);

        assert_eq!(unwrap_images_counted(&mut dom), 2);
        assert_eq!(dom.children(root).collect::<Vec<NodeId>>(), vec![img]);
    }
}
