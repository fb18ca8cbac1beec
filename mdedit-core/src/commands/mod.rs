//! Command dispatch: opaque identifiers mapped to buffer mutations.
//!
//! The registry accepts any identifier and silently ignores the ones it does
//! not know. The declared surface (menus, accelerators, external command
//! sources) is deliberately larger than the implemented set, so an unknown
//! id is routine, not an error.

pub mod edits;

use crate::buffer::TextBuffer;
use edits::{
    adjust_heading_level, insert_text, strip_heading_prefix, surround_selection,
    toggle_line_prefix,
};
use std::collections::HashMap;

type CommandFn = Box<dyn Fn(&mut TextBuffer) + Send + Sync>;

const TABLE_TEMPLATE: &str =
    "\n| Column | Column |\n| ------ | ------ |\n| Cell   | Cell   |\n\n";

/// Registry of buffer commands.
///
/// Commands can be registered and dispatched by name. Re-registering an
/// existing name replaces the previous routine.
pub struct CommandRegistry {
    commands: HashMap<String, CommandFn>,
}

impl CommandRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        CommandRegistry {
            commands: HashMap::new(),
        }
    }

    /// Register a command under `id`.
    pub fn register<F>(&mut self, id: impl Into<String>, command: F)
    where
        F: Fn(&mut TextBuffer) + Send + Sync + 'static,
    {
        self.commands.insert(id.into(), Box::new(command));
    }

    /// Check if a command exists.
    pub fn has(&self, id: &str) -> bool {
        self.commands.contains_key(id)
    }

    /// List all registered command ids (sorted).
    pub fn list_commands(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.commands.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Run the command registered under `id` against the buffer.
    ///
    /// Returns whether a command ran. Unknown ids leave the buffer untouched.
    pub fn dispatch(&self, id: &str, buf: &mut TextBuffer) -> bool {
        match self.commands.get(id) {
            Some(command) => {
                command(buf);
                true
            }
            None => {
                log::debug!("no buffer command registered for '{id}'");
                false
            }
        }
    }

    /// Create a registry with the default catalog.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register("toggle-bold", |buf| surround_selection(buf, "**", "**"));
        registry.register("toggle-italic", |buf| surround_selection(buf, "*", "*"));
        registry.register("toggle-underline", |buf| {
            surround_selection(buf, "<u>", "</u>")
        });
        registry.register("toggle-inline-code", |buf| {
            surround_selection(buf, "`", "`")
        });
        registry.register("insert-code-block", |buf| {
            surround_selection(buf, "\n```language\n", "\n```\n")
        });
        registry.register("edit-math-block", |buf| {
            surround_selection(buf, "\n$$\n", "\n$$\n")
        });

        for level in 1..=6usize {
            let prefix = format!("{} ", "#".repeat(level));
            registry.register(format!("toggle-heading-{level}"), move |buf| {
                toggle_line_prefix(buf, &prefix)
            });
        }

        registry.register("toggle-ol", |buf| toggle_line_prefix(buf, "1. "));
        registry.register("toggle-ul", |buf| toggle_line_prefix(buf, "- "));
        registry.register("toggle-task-list", |buf| toggle_line_prefix(buf, "- [ ] "));
        registry.register("toggle-blockquote", |buf| toggle_line_prefix(buf, "> "));

        registry.register("heading-level-up", |buf| adjust_heading_level(buf, -1));
        registry.register("heading-level-down", |buf| adjust_heading_level(buf, 1));
        registry.register("toggle-paragraph", strip_heading_prefix);

        registry.register("paragraph-insert-table", |buf| {
            insert_text(buf, TABLE_TEMPLATE)
        });
        registry.register("insert-horizontal-rule", |buf| {
            insert_text(buf, "\n---\n")
        });

        registry
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_creation() {
        let registry = CommandRegistry::new();
        assert!(registry.list_commands().is_empty());
    }

    #[test]
    fn test_registry_register_and_has() {
        let mut registry = CommandRegistry::new();
        registry.register("noop", |_buf| {});

        assert!(registry.has("noop"));
        assert!(!registry.has("other"));
        assert_eq!(registry.list_commands(), vec!["noop"]);
    }

    #[test]
    fn test_registry_replace_command() {
        let mut registry = CommandRegistry::new();
        registry.register("x", |buf| insert_text(buf, "first"));
        registry.register("x", |buf| insert_text(buf, "second"));

        let mut buf = TextBuffer::new();
        registry.dispatch("x", &mut buf);
        assert_eq!(buf.text(), "second");
        assert_eq!(registry.list_commands().len(), 1);
    }

    #[test]
    fn test_dispatch_unknown_id_is_silent_noop() {
        let registry = CommandRegistry::with_defaults();
        let mut buf = TextBuffer::from_text("untouched");
        buf.set_selection(0, 9);

        assert!(!registry.dispatch("nonexistent-cmd", &mut buf));
        assert_eq!(buf.text(), "untouched");
        assert_eq!(buf.selection().end, 9);
    }

    #[test]
    fn test_default_catalog_bold() {
        let registry = CommandRegistry::with_defaults();
        let mut buf = TextBuffer::from_text("word");
        buf.set_selection(0, 4);

        assert!(registry.dispatch("toggle-bold", &mut buf));
        assert_eq!(buf.text(), "**word**");
    }

    #[test]
    fn test_default_catalog_heading_toggles() {
        let registry = CommandRegistry::with_defaults();
        let mut buf = TextBuffer::from_text("Title");
        buf.set_selection(0, 5);

        registry.dispatch("toggle-heading-2", &mut buf);
        assert_eq!(buf.text(), "## Title");

        let end = buf.text().len();
        buf.set_selection(0, end);
        registry.dispatch("toggle-heading-2", &mut buf);
        assert_eq!(buf.text(), "Title");
    }

    #[test]
    fn test_default_catalog_covers_declared_surface() {
        let registry = CommandRegistry::with_defaults();
        for id in [
            "toggle-bold",
            "toggle-italic",
            "toggle-underline",
            "toggle-inline-code",
            "insert-code-block",
            "edit-math-block",
            "toggle-heading-1",
            "toggle-heading-6",
            "toggle-ol",
            "toggle-ul",
            "toggle-task-list",
            "toggle-blockquote",
            "heading-level-up",
            "heading-level-down",
            "toggle-paragraph",
            "paragraph-insert-table",
            "insert-horizontal-rule",
        ] {
            assert!(registry.has(id), "missing command '{id}'");
        }
    }

    #[test]
    fn test_insert_table_places_caret_after_template() {
        let registry = CommandRegistry::with_defaults();
        let mut buf = TextBuffer::from_text("before");
        buf.set_selection(6, 6);

        registry.dispatch("paragraph-insert-table", &mut buf);
        assert!(buf.text().contains("| Column | Column |"));
        assert_eq!(buf.selection().start, buf.text().len());
    }
}
