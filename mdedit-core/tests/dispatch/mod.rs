//! The command surface exercised through the full editor.

use mdedit_core::commands::edits::toggle_line_prefix;
use mdedit_core::{Editor, TextBuffer};
use proptest::prelude::*;

fn editor_with(content: &str, start: usize, end: usize) -> Editor {
    let mut editor = Editor::with_defaults();
    editor.open(content);
    editor.buffer_mut().set_selection(start, end);
    editor
}

#[test]
fn test_surround_applied_twice_does_not_toggle_off() {
    let mut editor = editor_with("selected", 0, 8);
    editor.dispatch("toggle-bold");
    editor.dispatch("toggle-bold");
    assert_eq!(editor.buffer().text(), "****selected****");
}

#[test]
fn test_line_prefix_toggle_judges_lines_independently() {
    let mut editor = editor_with("# A\nB", 0, 5);
    editor.dispatch("toggle-heading-1");
    assert_eq!(editor.buffer().text(), "A\n# B");
}

#[test]
fn test_heading_adjust_and_clamping() {
    let mut editor = editor_with("### Title", 0, 0);
    editor.dispatch("heading-level-up");
    assert_eq!(editor.buffer().text(), "## Title");

    let mut editor = editor_with("# Title", 0, 0);
    for _ in 0..5 {
        editor.dispatch("heading-level-up");
    }
    assert_eq!(editor.buffer().text(), "# Title");
}

#[test]
fn test_unknown_command_leaves_buffer_unchanged() {
    let mut editor = editor_with("# A\n\ntext body", 3, 7);
    editor.dispatch("nonexistent-cmd");
    assert_eq!(editor.buffer().text(), "# A\n\ntext body");
    assert_eq!(editor.buffer().selection().start, 3);
    assert_eq!(editor.buffer().selection().end, 7);
}

#[test]
fn test_underline_command_round_trips_through_preview() {
    let mut editor = editor_with("word", 0, 4);
    editor.dispatch("toggle-underline");
    assert_eq!(editor.buffer().text(), "<u>word</u>");
    assert!(editor.preview_markup().contains("<u>word</u>"));
}

#[test]
fn test_code_block_command_wraps_selection() {
    let mut editor = editor_with("let x = 1;", 0, 10);
    editor.dispatch("insert-code-block");
    assert_eq!(editor.buffer().text(), "\n```language\nlet x = 1;\n```\n");
    assert_eq!(editor.buffer().selected_text(), "let x = 1;");
}

proptest! {
    #[test]
    fn double_line_prefix_toggle_is_identity(text in "[a-zA-Z #>\\-\n]{0,60}") {
        let mut buf = TextBuffer::from_text(text.clone());
        buf.set_selection(0, text.len());
        toggle_line_prefix(&mut buf, "- ");

        let len = buf.text().len();
        buf.set_selection(0, len);
        toggle_line_prefix(&mut buf, "- ");

        prop_assert_eq!(buf.text(), text.as_str());
    }

    #[test]
    fn unknown_ids_never_mutate(id in "[a-z\\-]{1,24}") {
        let mut editor = editor_with("stable text", 0, 6);
        let known = editor.buffer_commands().contains(&id);
        prop_assume!(!known && !id.starts_with("toggle-") && !id.starts_with("theme-") && id != "view-mode-split");

        editor.dispatch(&id);
        prop_assert_eq!(editor.buffer().text(), "stable text");
    }
}
