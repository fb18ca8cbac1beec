//! The editor facade: buffer, mode, theme and synchronization in one place.
//!
//! This is the seam the shell talks to. The shell owns the real surfaces
//! (text area, preview pane, editable rich view) and the clock; the editor
//! owns every piece of document state and all reconciliation decisions.
//!
//! # Surface protocol
//!
//! - Source/Split edits: mutate the buffer (directly or via a command),
//!   then call [`Editor::source_edited`]; the preview markup is re-rendered
//!   synchronously.
//! - Result edits: forward the surface's markup through
//!   [`Editor::result_markup_changed`] with the current clock; drive
//!   [`Editor::tick`] from the event loop so the debounced reconciliation
//!   can fire.
//! - Engine writes: when [`Editor::tick`] returns `true` (or a mode switch
//!   enters Result), the result surface must be re-synced from
//!   [`Editor::result_markup`]. The re-entrancy guard stays active until
//!   [`Editor::complete_surface_update`] is called, so change notifications
//!   raised while applying the write are ignored instead of feeding back
//!   into another reconciliation.

use crate::buffer::TextBuffer;
use crate::commands::CommandRegistry;
use crate::mode::EditMode;
use crate::render::{render_markdown, RenderOptions};
use crate::rich::{from_markup, plain_text_fragment, reduce};
use crate::sync::{SyncEngine, DEFAULT_DEBOUNCE_MS};
use serde::Serialize;
use std::path::PathBuf;

/// Presentation theme toggled by the `theme-*` commands.
///
/// The core only records the choice; applying it is the shell's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Theme {
    #[default]
    Github,
    Night,
}

/// Content handed over by an external import pipeline.
#[derive(Debug, Clone)]
pub struct ImportResult {
    pub content: String,
    pub source_path: PathBuf,
}

/// Construction knobs for [`Editor`].
#[derive(Debug, Clone)]
pub struct EditorOptions {
    pub debounce_ms: u64,
    pub render: RenderOptions,
    pub mode: EditMode,
    pub theme: Theme,
}

impl Default for EditorOptions {
    fn default() -> Self {
        EditorOptions {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            render: RenderOptions::default(),
            mode: EditMode::default(),
            theme: Theme::default(),
        }
    }
}

/// The synchronization core of the editor.
pub struct Editor {
    buffer: TextBuffer,
    mode: EditMode,
    theme: Theme,
    engine: SyncEngine,
    registry: CommandRegistry,
    render_options: RenderOptions,
    preview_markup: String,
    result_markup: String,
}

impl Editor {
    pub fn new(options: EditorOptions) -> Self {
        let mut editor = Editor {
            buffer: TextBuffer::new(),
            mode: options.mode,
            theme: options.theme,
            engine: SyncEngine::new(options.debounce_ms),
            registry: CommandRegistry::with_defaults(),
            render_options: options.render,
            preview_markup: String::new(),
            result_markup: String::new(),
        };
        editor.refresh_preview();
        if editor.mode == EditMode::Result {
            editor.write_result_surface();
        }
        editor
    }

    pub fn with_defaults() -> Self {
        Editor::new(EditorOptions::default())
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Mutable buffer access for direct source-surface typing. Callers must
    /// follow mutations with [`Editor::source_edited`].
    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Markup of the read-only preview pane.
    pub fn preview_markup(&self) -> &str {
        &self.preview_markup
    }

    /// Markup of the rich result surface (its last known state, or the
    /// pending engine write the host still has to apply).
    pub fn result_markup(&self) -> &str {
        &self.result_markup
    }

    /// Whether an engine-initiated surface write is waiting for the host to
    /// apply it and call [`Editor::complete_surface_update`].
    pub fn surface_write_pending(&self) -> bool {
        self.engine.guard_active()
    }

    /// Replace the document wholesale (file open, new document).
    pub fn open(&mut self, content: &str) {
        self.engine.cancel_pending();
        self.buffer.replace_all(content);
        self.refresh_preview();
        if self.mode == EditMode::Result {
            self.write_result_surface();
        }
    }

    /// Accept content produced by an external import pipeline.
    pub fn apply_import(&mut self, import: ImportResult) {
        log::info!("importing {}", import.source_path.display());
        self.open(&import.content);
    }

    /// Dispatch an opaque command identifier.
    ///
    /// Mode and theme switches are handled here; everything else goes to
    /// the buffer-command registry. Unknown identifiers are a silent no-op.
    pub fn dispatch(&mut self, id: &str) {
        match id {
            "view-mode-split" => self.set_mode(EditMode::Split),
            "toggle-source-mode" => {
                let next = if self.mode == EditMode::Source {
                    EditMode::Split
                } else {
                    EditMode::Source
                };
                self.set_mode(next);
            }
            "toggle-result-mode" => {
                let next = if self.mode == EditMode::Result {
                    EditMode::Split
                } else {
                    EditMode::Result
                };
                self.set_mode(next);
            }
            "theme-github" => self.theme = Theme::Github,
            "theme-night" => self.theme = Theme::Night,
            _ => {
                if self.registry.dispatch(id, &mut self.buffer) {
                    self.refresh_preview();
                }
            }
        }
    }

    /// Command ids currently backed by a buffer routine (sorted).
    pub fn buffer_commands(&self) -> Vec<String> {
        self.registry.list_commands()
    }

    /// Switch editing modes.
    ///
    /// A pending reconciliation is cancelled first so a stale pass cannot
    /// write into a surface that is no longer authoritative. Entering
    /// Result renders the buffer into the result surface; the host applies
    /// the write with the caret moved to the end of content.
    pub fn set_mode(&mut self, mode: EditMode) {
        if self.mode == mode {
            return;
        }
        self.engine.cancel_pending();
        log::debug!("mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        if mode == EditMode::Result {
            self.write_result_surface();
            self.buffer.select_end();
        }
    }

    /// The source surface changed; refresh the derived preview.
    pub fn source_edited(&mut self) {
        self.refresh_preview();
    }

    /// The result surface changed under the user's hands.
    ///
    /// Ignored while an engine write is pending (the notification is the
    /// surface reacting to the engine's own mutation) and outside Result
    /// mode (the surface is read-only there; nothing to propagate).
    pub fn result_markup_changed(&mut self, markup: &str, now_ms: u64) {
        if self.engine.guard_active() {
            log::trace!("surface notification suppressed by re-entrancy guard");
            return;
        }
        if self.mode != EditMode::Result {
            log::debug!("result change ignored outside Result mode");
            return;
        }
        self.result_markup = markup.to_string();
        self.engine.note_result_edit(now_ms);
    }

    /// Paste plain text into the result surface.
    ///
    /// Rich clipboard content never reaches the tree: the text is escaped
    /// into a plain fragment before insertion, then goes through the normal
    /// debounced edit path.
    pub fn paste_into_result(&mut self, text: &str, now_ms: u64) {
        if !self.mode.result_editable() {
            return;
        }
        let fragment = plain_text_fragment(text);
        let markup = format!("{}{fragment}", self.result_markup);
        self.result_markup_changed(&markup, now_ms);
    }

    /// Drive the debounce clock. Returns `true` when a reconciliation pass
    /// ran and the host must re-apply [`Editor::result_markup`].
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.engine.take_ready(now_ms) {
            return false;
        }
        self.reconcile_result();
        true
    }

    /// The host finished applying an engine-initiated surface write.
    pub fn complete_surface_update(&mut self) {
        self.engine.set_guard(false);
    }

    /// One full reconciliation pass: capture the surface tree, reduce it
    /// into the buffer, re-render the surface from the new source.
    fn reconcile_result(&mut self) {
        let tree = from_markup(&self.result_markup);
        let markdown = reduce(&tree);
        log::debug!("result reconciled into {} bytes of source", markdown.len());
        self.buffer.replace_all(markdown);
        self.refresh_preview();
        self.write_result_surface();
    }

    /// Engine-initiated surface write: re-render the buffer into the result
    /// mirror and raise the guard until the host applies it.
    fn write_result_surface(&mut self) {
        self.engine.set_guard(true);
        self.result_markup = render_markdown(self.buffer.text(), &self.render_options);
    }

    fn refresh_preview(&mut self) {
        self.preview_markup = render_markdown(self.buffer.text(), &self.render_options);
    }
}
