//! Markup capture (rendered markup → rich-text tree import)
//!
//! Parses the markup the renderer produced (or the markup the host reports
//! for the live result surface) into a [`RichNode`] tree.
//!
//! # Library Choice
//!
//! We use the `html5ever` + `markup5ever_rcdom` ecosystem:
//! - `html5ever`: browser-grade HTML5 parser from the Servo project
//! - `markup5ever_rcdom`: reference-counted DOM tree implementation
//!
//! This choice is based on:
//! - WHATWG HTML5 specification compliance
//! - Handles malformed markup gracefully (the result surface is
//!   user-edited, so the input is never trusted to be well-formed)
//! - Battle-tested and actively maintained
//!
//! # Element Mapping Table
//!
//! | Markup element   | RichNode            | Notes                               |
//! |------------------|---------------------|-------------------------------------|
//! | h1..h6           | Heading(1..6)       | Level from the tag name             |
//! | p                | Paragraph           |                                     |
//! | strong, b        | Strong              | Both spellings accepted             |
//! | em, i            | Emphasis            | Both spellings accepted             |
//! | u                | Underline           |                                     |
//! | code             | Code                | Inline or inside a pre              |
//! | pre              | CodeBlock           | Language from `class="language-…"`  |
//! | blockquote       | Blockquote          |                                     |
//! | ul, ol           | List                | Ordered from the tag name           |
//! | li               | ListItem            |                                     |
//! | a                | Link                | `href` attribute                    |
//! | img              | Image               | `src` + `alt` attributes            |
//! | hr               | HorizontalRule      |                                     |
//! | br               | LineBreak           |                                     |
//! | anything else    | Generic             | Children pass through               |
//!
//! Newline-bearing whitespace between block elements is formatting noise
//! from the serializer and is dropped; inside inline content (and anywhere
//! under a `pre`) text is preserved verbatim.

use crate::rich::nodes::{CodeBlock, Heading, Image, Link, List, RichNode};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, Attribute, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::cell::RefCell;

/// Parse markup into a rich-text tree.
///
/// Total over arbitrary input: html5ever recovers from any malformation, so
/// every string yields a tree (possibly empty).
pub fn from_markup(markup: &str) -> Vec<RichNode> {
    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(markup);

    // Fragment input gets wrapped in html/body by the parser; capture from
    // the body so the wrapper elements never reach the tree.
    match find_element(&dom.document, "body") {
        Some(body) => convert_children(&body, false),
        None => convert_children(&dom.document, false),
    }
}

fn find_element(handle: &Handle, tag: &str) -> Option<Handle> {
    if let NodeData::Element { name, .. } = &handle.data {
        if name.local.as_ref() == tag {
            return Some(handle.clone());
        }
    }
    for child in handle.children.borrow().iter() {
        if let Some(found) = find_element(child, tag) {
            return Some(found);
        }
    }
    None
}

fn convert_children(handle: &Handle, preserve_whitespace: bool) -> Vec<RichNode> {
    let mut nodes = Vec::new();
    for child in handle.children.borrow().iter() {
        if let Some(node) = convert_node(child, preserve_whitespace) {
            nodes.push(node);
        }
    }
    nodes
}

fn convert_node(handle: &Handle, preserve_whitespace: bool) -> Option<RichNode> {
    match &handle.data {
        NodeData::Text { contents } => {
            let text = contents.borrow().to_string();
            // Serializer formatting between blocks always carries a newline;
            // a bare space can be a meaningful separator between inline
            // elements (tight list items put inlines directly in the item).
            if !preserve_whitespace && text.trim().is_empty() && text.contains('\n') {
                return None;
            }
            Some(RichNode::Text(text))
        }

        NodeData::Element { name, attrs, .. } => {
            let tag = name.local.as_ref();
            match tag {
                "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                    let level = tag[1..].parse().unwrap_or(1);
                    Some(RichNode::Heading(Heading {
                        level,
                        children: convert_children(handle, true),
                    }))
                }
                "p" => Some(RichNode::Paragraph(convert_children(handle, true))),
                "strong" | "b" => Some(RichNode::Strong(convert_children(handle, true))),
                "em" | "i" => Some(RichNode::Emphasis(convert_children(handle, true))),
                "u" => Some(RichNode::Underline(convert_children(handle, true))),
                "code" => Some(RichNode::Code(convert_children(handle, true))),
                "pre" => Some(RichNode::CodeBlock(CodeBlock {
                    language: code_block_language(handle),
                    children: convert_children(handle, true),
                })),
                "blockquote" => Some(RichNode::Blockquote(convert_children(handle, false))),
                "ul" => Some(RichNode::List(List {
                    ordered: false,
                    items: convert_children(handle, false),
                })),
                "ol" => Some(RichNode::List(List {
                    ordered: true,
                    items: convert_children(handle, false),
                })),
                "li" => Some(RichNode::ListItem(convert_children(handle, false))),
                "a" => Some(RichNode::Link(Link {
                    href: attr_value(attrs, "href").unwrap_or_default(),
                    children: convert_children(handle, true),
                })),
                "img" => Some(RichNode::Image(Image {
                    src: attr_value(attrs, "src").unwrap_or_default(),
                    alt: attr_value(attrs, "alt").unwrap_or_default(),
                })),
                "hr" => Some(RichNode::HorizontalRule),
                "br" => Some(RichNode::LineBreak),
                // Non-content subtrees are dropped entirely.
                "head" | "script" | "style" | "template" => None,
                _ => Some(RichNode::Generic(convert_children(
                    handle,
                    preserve_whitespace,
                ))),
            }
        }

        // Comments, doctypes and processing instructions carry no content.
        _ => None,
    }
}

fn attr_value(attrs: &RefCell<Vec<Attribute>>, name: &str) -> Option<String> {
    attrs
        .borrow()
        .iter()
        .find(|attr| attr.name.local.as_ref() == name)
        .map(|attr| attr.value.to_string())
}

/// Extract the fence language from a `pre` element's `code` child.
fn code_block_language(pre: &Handle) -> Option<String> {
    for child in pre.children.borrow().iter() {
        if let NodeData::Element { name, attrs, .. } = &child.data {
            if name.local.as_ref() == "code" {
                let class = attr_value(attrs, "class")?;
                return class
                    .split_whitespace()
                    .find_map(|c| c.strip_prefix("language-"))
                    .map(|lang| lang.to_string());
            }
        }
    }
    None
}
