//! Round-trip properties of the render → capture → reduce pipeline.
//!
//! The trip is lossy, so exact inversion is not the contract. The contract
//! is stabilization: one pass normalizes a document, and from then on the
//! pipeline is a fixed point.

use crate::common::roundtrip;
use mdedit_core::{reduce, RichNode, TextBuffer};
use proptest::prelude::*;

#[test]
fn test_basic_document_round_trips_to_trimmed_source() {
    assert_eq!(roundtrip("# Hi\n\n**bold**\n\n"), "# Hi\n\n**bold**");
}

#[test]
fn test_inline_styles_survive() {
    let md = "Intro with **bold**, *italic*, `code` and <u>under</u>.";
    assert_eq!(roundtrip(md), md);
}

#[test]
fn test_lists_survive() {
    assert_eq!(roundtrip("- one\n- two"), "- one\n- two");
    assert_eq!(roundtrip("1. first\n2. second"), "1. first\n2. second");
}

#[test]
fn test_styled_list_items_keep_inline_spacing() {
    assert_eq!(roundtrip("- **b** *i*"), "- **b** *i*");
}

#[test]
fn test_ordered_numbering_is_positional() {
    // A list starting at 3 comes back renumbered from 1: the tree only
    // records item order, not the original markers.
    assert_eq!(roundtrip("3. a\n4. b"), "1. a\n2. b");
}

#[test]
fn test_code_block_survives_with_language() {
    let md = "```rust\nlet x = 1;\n```";
    assert_eq!(roundtrip(md), md);
}

#[test]
fn test_blockquote_survives() {
    assert_eq!(roundtrip("> quoted"), "> quoted");
}

#[test]
fn test_link_image_rule_survive() {
    let md = "[site](https://example.com)\n\n![logo](logo.png)\n\n---\n\nThe end.";
    assert_eq!(roundtrip(md), md);
}

#[test]
fn test_task_list_degrades_to_plain_list() {
    // The checkbox element has no tree mapping; the item text survives.
    assert_eq!(roundtrip("- [ ] todo"), "- todo");
}

#[test]
fn test_kitchensink_is_fixed_point_after_one_pass() {
    let source = "# Title\n\n\
                  Intro with **bold**, *italic*, `code` and <u>under</u>.\n\n\
                  - one\n- two\n\n\
                  1. first\n2. second\n\n\
                  > quoted\n\n\
                  ```rust\nfn main() {}\n```\n\n\
                  [site](https://example.com)\n\n\
                  ![logo](logo.png)\n\n\
                  ---\n\n\
                  The end.";
    let first = roundtrip(source);
    let second = roundtrip(&first);
    assert_eq!(first, second);
}

#[test]
fn test_reduction_matches_buffer_trim_expectations() {
    let reduced = roundtrip("\n\n# Padded\n\n\n");
    let buf = TextBuffer::from_text(reduced.clone());
    assert_eq!(buf.text(), "# Padded");
    assert_eq!(reduced, reduced.trim());
}

proptest! {
    #[test]
    fn roundtrip_never_panics(md in ".{0,200}") {
        let _ = roundtrip(&md);
    }

    #[test]
    fn reduce_is_total_over_text_payloads(text in ".{0,200}") {
        let tree = vec![RichNode::Paragraph(vec![RichNode::Text(text)])];
        let out = reduce(&tree);
        prop_assert_eq!(out.as_str(), out.trim());
    }
}
