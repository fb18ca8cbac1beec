//! Buffer mutation routines backing the command catalog.
//!
//! Each routine is a pure mutation over `(text, selection)`: it runs to
//! completion, never fails, and leaves the selection somewhere sensible.
//! Lines or patterns that do not match a routine's expectation make it a
//! silent no-op.

use crate::buffer::{Selection, TextBuffer};

/// Wrap the selected text with a prefix/suffix pair, keeping the selection
/// around the wrapped text.
///
/// Applying the same pair twice wraps twice: there is no detection of
/// already-wrapped text.
pub fn surround_selection(buf: &mut TextBuffer, prefix: &str, suffix: &str) {
    let Selection { start, end } = buf.selection();
    let selected = buf.selected_text().to_string();
    let mut replacement = String::with_capacity(prefix.len() + selected.len() + suffix.len());
    replacement.push_str(prefix);
    replacement.push_str(&selected);
    replacement.push_str(suffix);
    buf.splice(start..end, &replacement);
    buf.set_selection(start + prefix.len(), start + prefix.len() + selected.len());
}

/// Toggle `prefix` on each line of the selected text.
///
/// Every line is judged independently: lines that already carry the prefix
/// lose it, the rest gain it. The judgment happens at the selection
/// boundary, so a selection starting mid-line inspects the text from that
/// point on.
pub fn toggle_line_prefix(buf: &mut TextBuffer, prefix: &str) {
    let Selection { start, end } = buf.selection();
    let selected = buf.selected_text().to_string();

    let toggled: Vec<String> = selected
        .split('\n')
        .map(|line| match line.strip_prefix(prefix) {
            Some(rest) => rest.to_string(),
            None => format!("{prefix}{line}"),
        })
        .collect();

    let new_selected = toggled.join("\n");
    let new_len = new_selected.len();
    buf.splice(start..end, &new_selected);
    buf.set_selection(start, start + new_len);
}

/// Adjust the heading level of the line containing the selection start.
///
/// The line must match "1-6 leading `#`, one or more spaces, rest"; the new
/// level is clamped to 1..=6. Non-heading lines are left untouched.
pub fn adjust_heading_level(buf: &mut TextBuffer, delta: i8) {
    let span = buf.line_span_at(buf.selection().start);
    let line = &buf.text()[span.clone()];

    let hashes = line.chars().take_while(|&c| c == '#').count();
    if hashes == 0 || hashes > 6 {
        return;
    }
    let rest = &line[hashes..];
    if !rest.starts_with(' ') {
        return;
    }
    let title = rest.trim_start_matches(' ');

    let level = (hashes as i8).saturating_add(delta).clamp(1, 6) as usize;
    let new_line = format!("{} {}", "#".repeat(level), title);
    let caret = span.start + new_line.len();
    buf.splice(span, &new_line);
    buf.set_selection(caret, caret);
}

/// Strip a heading prefix from the current line, demoting it to a plain
/// paragraph. No-op when the line is not a heading.
pub fn strip_heading_prefix(buf: &mut TextBuffer) {
    let span = buf.line_span_at(buf.selection().start);
    let line = &buf.text()[span.clone()];

    let hashes = line.chars().take_while(|&c| c == '#').count();
    if hashes == 0 || hashes > 6 {
        return;
    }
    let rest = &line[hashes..];
    if !rest.starts_with(' ') {
        return;
    }
    let title = rest.trim_start_matches(' ').to_string();

    let caret = span.start + title.len();
    buf.splice(span, &title);
    buf.set_selection(caret, caret);
}

/// Insert literal text at the caret, replacing any selection, caret placed
/// after the inserted text.
pub fn insert_text(buf: &mut TextBuffer, text: &str) {
    buf.replace_selection(text);
}
