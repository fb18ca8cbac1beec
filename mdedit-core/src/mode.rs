//! Editing modes and their surface capabilities.

use serde::Serialize;

/// Which surface is the write-of-record.
///
/// Exactly one mode is active at a time; transitions happen only through
/// explicit mode-switch commands. The capability accessors tell the
/// presentation layer which surface to make editable — the other surface is
/// a derived projection and must be read-only while the mode holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum EditMode {
    /// Source and preview side by side; the preview is output-only.
    #[default]
    Split,
    /// Only the Markdown source is shown and editable.
    Source,
    /// Only the rich view is shown and editable; the source buffer becomes
    /// a derived mirror.
    Result,
}

impl EditMode {
    /// Whether the plain-text source surface accepts edits.
    pub fn source_editable(self) -> bool {
        matches!(self, EditMode::Split | EditMode::Source)
    }

    /// Whether the rich result surface accepts edits.
    pub fn result_editable(self) -> bool {
        matches!(self, EditMode::Result)
    }

    /// Whether the read-only preview follows the source on every edit.
    pub fn preview_live(self) -> bool {
        matches!(self, EditMode::Split)
    }
}
