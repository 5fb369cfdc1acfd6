//! Markdown input: images CommonMark wraps in paragraphs come out bare.

use unwrap_images::dom::serialize;
use unwrap_images::markdown::{MarkdownOptions, parse_markdown_with};
use unwrap_images::{unwrap_images, unwrap_markdown};

#[test]
fn test_integrates_with_markdown() {
    assert_eq!(
        unwrap_markdown("![hi][image]\n\n![hi](there.png)\n\n[image]: kitten.png").trim_end(),
        "<img src=\"kitten.png\" alt=\"hi\">\n<img src=\"there.png\" alt=\"hi\">"
    );
}

#[test]
fn test_keeps_images_inside_prose() {
    assert_eq!(
        unwrap_markdown("An ![inline](a.png) image.").trim_end(),
        "<p>An <img src=\"a.png\" alt=\"inline\"> image.</p>"
    );
}

#[test]
fn test_unwraps_linked_image() {
    assert_eq!(
        unwrap_markdown("[![logo](logo.png)](https://example.com)").trim_end(),
        "<a href=\"https://example.com\"><img src=\"logo.png\" alt=\"logo\"></a>"
    );
}

#[test]
fn test_unwraps_images_separated_by_soft_break() {
    assert_eq!(
        unwrap_markdown("![a](a.png)\n![b](b.png)").trim_end(),
        "<img src=\"a.png\" alt=\"a\">\n<img src=\"b.png\" alt=\"b\">"
    );
}

#[test]
fn test_unwraps_image_in_list_item() {
    // Loose list items wrap their content in paragraphs
    assert_eq!(
        unwrap_markdown("- ![a](a.png)\n\n- text\n").trim_end(),
        "<ul>\n<li>\n<img src=\"a.png\" alt=\"a\">\n</li>\n<li>\n<p>text</p>\n</li>\n</ul>"
    );
}

#[test]
fn test_unwraps_with_commonmark_options() {
    let mut dom = parse_markdown_with("![a](a.png)", &MarkdownOptions::commonmark());
    unwrap_images(&mut dom);
    assert_eq!(serialize(&dom).trim_end(), "<img src=\"a.png\" alt=\"a\">");
}
