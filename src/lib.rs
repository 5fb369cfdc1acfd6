//! # unwrap-images
//!
//! Remove the paragraph wrapped around standalone images in an HTML tree.
//!
//! HTML produced from Markdown puts every image inside a `<p>`, even when
//! the image is the only thing in that paragraph. This crate rewrites such
//! paragraphs away, leaving images (or links around a single image) as
//! direct children of the paragraph's parent.
//!
//! ## Quick Start
//!
//! ```
//! use unwrap_images::{unwrap_html_fragment, unwrap_markdown};
//!
//! assert_eq!(
//!     unwrap_html_fragment(r##"<p><a href="#hi"><img alt="hi" src="there.png"></a></p>"##),
//!     r##"<a href="#hi"><img alt="hi" src="there.png"></a>"##
//! );
//!
//! // Paragraphs with other content are left alone
//! let mixed = r#"<p>some text <img alt="and" src="and.png"> an image</p>"#;
//! assert_eq!(unwrap_html_fragment(mixed), mixed);
//!
//! assert_eq!(
//!     unwrap_markdown("![hi](there.png)").trim_end(),
//!     r#"<img src="there.png" alt="hi">"#
//! );
//! ```
//!
//! ## Working with the tree
//!
//! The pass operates on the arena [`Dom`](dom::Dom), so it composes with
//! other tree rewrites:
//!
//! ```
//! use unwrap_images::dom::{parse_fragment, serialize};
//! use unwrap_images::unwrap_images;
//!
//! let mut dom = parse_fragment(r#"<p><img src="a.png"> <img src="b.png"></p>"#);
//! let img = dom.find_by_tag("img").unwrap();
//!
//! unwrap_images(&mut dom);
//!
//! assert_eq!(serialize(&dom), r#"<img src="a.png"> <img src="b.png">"#);
//! // Nodes are moved, not copied
//! assert_eq!(dom.node(img).unwrap().parent, Some(dom.document()));
//! ```

pub mod dom;
pub mod error;
pub mod markdown;
pub mod pipeline;
pub mod unwrap;
pub(crate) mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result};
pub use pipeline::{
    Format, process, process_file, unwrap_html_document, unwrap_html_fragment, unwrap_markdown,
};
pub use unwrap::{unwrap_images, unwrap_images_counted};
