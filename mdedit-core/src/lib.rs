//! Bidirectional document-view synchronization for Markdown editing
//!
//!     This crate keeps a plain-text Markdown buffer, a rendered preview and an
//!     independently-editable rich-text ("result") view consistent with each other,
//!     including the lossy round trip from rendered markup back to Markdown source.
//!
//!     TLDR for shell authors:
//!         - The core never parses or serializes a format itself, but relies on the
//!           format's libraries: comrak renders Markdown, html5ever captures markup.
//!         - The shell owns the real surfaces and the clock; the core owns the
//!           document state and every reconciliation decision.
//!         - Mutate the buffer, notify the editor, drive tick() from the event loop.
//!         - Everything on the edit path is total: unknown commands, unmapped nodes
//!           and malformed markup degrade, they never error.
//!
//! Architecture
//!
//!     The goal is to keep the hard part — a canonical mapping between two document
//!     representations that is not naturally invertible — in one small, well-tested
//!     core, while every shell concern (menus, dialogs, file I/O, packaging) stays
//!     outside. This is a pure lib: no std printing, no env vars, no assumption of
//!     any particular UI toolkit. The rich tree is an abstract tagged union, not a
//!     live DOM handle.
//!
//!     The file structure:
//!     .
//!     ├── lib.rs
//!     ├── buffer.rs           # Markdown source string + selection
//!     ├── render.rs           # Markdown → markup (comrak adapter)
//!     ├── rich
//!     │   ├── nodes.rs        # the rich-text tree
//!     │   ├── from_markup.rs  # markup → tree capture (html5ever)
//!     │   └── reduce.rs       # tree → Markdown reduction
//!     ├── commands
//!     │   ├── mod.rs          # registry, id → routine dispatch
//!     │   └── edits.rs        # surround / line-prefix / heading / insert
//!     ├── mode.rs             # Split | Source | Result capabilities
//!     ├── sync.rs             # debounce timer + re-entrancy guard
//!     └── editor.rs           # the facade the shell talks to
//!
//! Testing
//!
//!     tests
//!     ├── lib.rs              # mounts the subdirectory modules
//!     ├── common/mod.rs       # shared pipeline helpers
//!     ├── roundtrip/          # render → capture → reduce properties
//!     ├── syncing/            # debounce, guard, mode transitions
//!     └── dispatch/           # command surface over the full editor
//!
//!     Note that rust does not by default discover tests in subdirectories, so we
//!     need to include these in the mod.
//!
//! Core Algorithms
//!
//!     The round trip is markdown → markup → tree → markdown. Rendering and capture
//!     are delegated to comrak and html5ever; the reduction applies one fixed
//!     template per node kind (see rich/reduce.rs). The trip is lossy by design:
//!     after one pass the output is a fixed point, which is what keeps the
//!     debounced reconciliation stable instead of oscillating.
//!
//!     Reconciliation timing is the other half of the problem. Result-view edits
//!     are debounced (sync.rs) so a typing burst costs one pass, a re-entrancy
//!     guard keeps the engine's own surface writes from re-triggering the edit
//!     handler, and mode switches cancel pending passes so a stale reconcile can
//!     never write into a surface that stopped being authoritative.
//!
//! Library Choices
//!
//!     This not being a parsing crate, we offload as much as possible to better,
//!     specialized crates: comrak for Markdown rendering, html5ever + rcdom for
//!     markup capture. The scope here is only to adapt between their trees and
//!     ours. We never write a Markdown parser, and the reducer exists only because
//!     its exact output templates are the contract the rest of the editor depends
//!     on.

pub mod buffer;
pub mod commands;
pub mod editor;
pub mod mode;
pub mod render;
pub mod rich;
pub mod sync;

pub use buffer::{Selection, TextBuffer};
pub use commands::CommandRegistry;
pub use editor::{Editor, EditorOptions, ImportResult, Theme};
pub use mode::EditMode;
pub use render::{render_markdown, RenderOptions};
pub use rich::{from_markup, plain_text_fragment, reduce, RichNode};
pub use sync::{DebounceTimer, SyncEngine, DEFAULT_DEBOUNCE_MS};
