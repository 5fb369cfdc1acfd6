//! WASM bindings for browser-side unwrapping.

use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Unwrap image paragraphs in an HTML fragment.
#[wasm_bindgen(js_name = unwrapHtml)]
pub fn unwrap_html(html: &str) -> String {
    crate::unwrap_html_fragment(html)
}

/// Render markdown to HTML with image paragraphs unwrapped.
#[wasm_bindgen(js_name = unwrapMarkdown)]
pub fn unwrap_markdown(markdown: &str) -> String {
    crate::unwrap_markdown(markdown)
}
