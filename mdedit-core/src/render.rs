//! Markdown rendering (source → markup)
//!
//! # Library Choice
//!
//! We use the `comrak` crate as the Markdown renderer. This choice is based
//! on:
//! - CommonMark compliance with GFM extensions (tables, task lists, ...)
//! - Robust and well-maintained
//! - Deterministic output, which the synchronization loop relies on
//!
//! The renderer is an external collaborator from the core's point of view:
//! a pure function from Markdown text to markup. We never hand-roll any
//! Markdown parsing here; the core only adapts comrak's output.

use comrak::{markdown_to_html, ComrakOptions};
use serde::Serialize;

/// Extension knobs for the renderer.
///
/// Mirrored by the configuration crate so hosts can tune rendering without
/// touching comrak types directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderOptions {
    pub tables: bool,
    pub strikethrough: bool,
    pub autolink: bool,
    pub tasklist: bool,
    pub superscript: bool,
    /// Pass inline HTML through to the markup. Required for the underline
    /// tag emitted by the reducer to survive a round trip.
    pub raw_html: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            tables: true,
            strikethrough: true,
            autolink: true,
            tasklist: true,
            superscript: true,
            raw_html: true,
        }
    }
}

impl RenderOptions {
    fn to_comrak(&self) -> ComrakOptions<'static> {
        let mut options = ComrakOptions::default();
        options.extension.table = self.tables;
        options.extension.strikethrough = self.strikethrough;
        options.extension.autolink = self.autolink;
        options.extension.tasklist = self.tasklist;
        options.extension.superscript = self.superscript;
        options.render.unsafe_ = self.raw_html;
        options
    }
}

/// Render Markdown source to markup.
///
/// Pure, total and deterministic: every input produces markup, and empty
/// input produces an empty string. The reconciliation loop calls this on
/// every edit, so nothing here may fail.
pub fn render_markdown(text: &str, options: &RenderOptions) -> String {
    markdown_to_html(text, &options.to_comrak())
}
