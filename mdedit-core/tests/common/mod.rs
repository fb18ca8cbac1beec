//! Shared pipeline helpers for the integration tests.

use mdedit_core::{from_markup, reduce, render_markdown, RenderOptions, RichNode};

/// Render Markdown with the default options.
pub fn render(md: &str) -> String {
    render_markdown(md, &RenderOptions::default())
}

/// Capture the rendered tree of a Markdown document.
pub fn capture(md: &str) -> Vec<RichNode> {
    from_markup(&render(md))
}

/// One full round trip: render, capture, reduce back to Markdown.
pub fn roundtrip(md: &str) -> String {
    reduce(&capture(md))
}
