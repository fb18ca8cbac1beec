//! Reconciliation timing: debounce coalescing, the re-entrancy guard and
//! mode transitions over the full editor.

use mdedit_core::{reduce, from_markup, EditMode, Editor, EditorOptions};

fn result_mode_editor(content: &str) -> Editor {
    let mut editor = Editor::with_defaults();
    editor.open(content);
    editor.set_mode(EditMode::Result);
    editor.complete_surface_update();
    editor
}

#[test]
fn test_entering_result_mode_round_trips_the_buffer() {
    let editor = result_mode_editor("# Hi\n\n**bold**\n\n");
    let tree = from_markup(editor.result_markup());
    assert_eq!(reduce(&tree), "# Hi\n\n**bold**");
}

#[test]
fn test_three_rapid_edits_coalesce_into_one_pass() {
    let mut editor = result_mode_editor("");

    editor.result_markup_changed("<p>one</p>", 0);
    editor.result_markup_changed("<p>one two</p>", 100);
    editor.result_markup_changed("<p>one two three</p>", 200);

    // The last edit restarted the 500ms window; nothing due yet.
    assert!(!editor.tick(600));

    let mut passes = 0;
    for now in [650, 700, 800, 1_200] {
        if editor.tick(now) {
            passes += 1;
            editor.complete_surface_update();
        }
    }
    assert_eq!(passes, 1);
    assert_eq!(editor.buffer().text(), "one two three");
}

#[test]
fn test_reconciliation_regenerates_the_surface() {
    let mut editor = result_mode_editor("");

    editor.result_markup_changed("<h1>Edited</h1>", 0);
    assert!(editor.tick(500));

    assert_eq!(editor.buffer().text(), "# Edited");
    assert!(editor.result_markup().contains("<h1>Edited</h1>"));
    assert!(editor.preview_markup().contains("<h1>Edited</h1>"));
    editor.complete_surface_update();
}

#[test]
fn test_cursor_collapses_to_end_after_reconciliation() {
    let mut editor = result_mode_editor("");

    editor.result_markup_changed("<p>abc</p>", 0);
    assert!(editor.tick(500));

    let selection = editor.buffer().selection();
    assert!(selection.is_caret());
    assert_eq!(selection.end, editor.buffer().len());
}

#[test]
fn test_engine_write_does_not_requeue_reconciliation() {
    let mut editor = result_mode_editor("");

    editor.result_markup_changed("<p>typed</p>", 0);
    assert!(editor.tick(500));

    // The surface reacting to the engine's own write is suppressed by the
    // re-entrancy guard until the host finishes applying it.
    let echo = editor.result_markup().to_string();
    editor.result_markup_changed(&echo, 501);
    editor.complete_surface_update();

    assert!(!editor.tick(60_000));
    assert_eq!(editor.buffer().text(), "typed");
}

#[test]
fn test_mode_switch_cancels_pending_reconciliation() {
    let mut editor = result_mode_editor("original");

    editor.result_markup_changed("<p>draft</p>", 0);
    editor.set_mode(EditMode::Split);

    assert!(!editor.tick(60_000));
    // The stale pass never ran: the buffer still holds the old source.
    assert_eq!(editor.buffer().text(), "original");
}

#[test]
fn test_leaving_result_mode_forces_no_reducer_pass() {
    let mut editor = result_mode_editor("# Kept");

    // No edits happened; switching back must not rewrite the buffer.
    editor.set_mode(EditMode::Source);
    assert_eq!(editor.buffer().text(), "# Kept");
}

#[test]
fn test_source_edit_refreshes_preview_synchronously() {
    let mut editor = Editor::with_defaults();
    editor.open("start");

    editor.buffer_mut().replace_all("# Changed");
    editor.source_edited();
    assert!(editor.preview_markup().contains("<h1>Changed</h1>"));
}

#[test]
fn test_paste_goes_through_the_debounced_path() {
    let mut editor = result_mode_editor("");

    editor.paste_into_result("pasted <em>not markup</em>", 1_000);
    assert!(!editor.tick(1_400));
    assert!(editor.tick(1_500));
    editor.complete_surface_update();

    // The clipboard markup arrived as literal text, not as emphasis.
    assert!(editor.buffer().text().contains("<em>not markup</em>"));
}

#[test]
fn test_configurable_debounce_delay() {
    let mut editor = Editor::new(EditorOptions {
        debounce_ms: 50,
        ..EditorOptions::default()
    });
    editor.open("");
    editor.set_mode(EditMode::Result);
    editor.complete_surface_update();

    editor.result_markup_changed("<p>quick</p>", 0);
    assert!(editor.tick(50));
    assert_eq!(editor.buffer().text(), "quick");
    editor.complete_surface_update();
}
