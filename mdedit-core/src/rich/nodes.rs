//! Core data structures for the rich-text tree.

use serde::Serialize;

/// A node in the rich-text view of a document.
///
/// The tree is transient: it is rebuilt from the Markdown source on every
/// render, except while the result view is the authoring surface, where it
/// mirrors the live surface the user edits. Anything the capture layer does
/// not recognize lands in [`RichNode::Generic`] so the reducer can still
/// pass its children through.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RichNode {
    Text(String),
    Heading(Heading),
    Paragraph(Vec<RichNode>),
    Strong(Vec<RichNode>),
    Emphasis(Vec<RichNode>),
    Underline(Vec<RichNode>),
    Code(Vec<RichNode>),
    CodeBlock(CodeBlock),
    Blockquote(Vec<RichNode>),
    List(List),
    ListItem(Vec<RichNode>),
    Link(Link),
    Image(Image),
    HorizontalRule,
    LineBreak,
    Generic(Vec<RichNode>),
}

/// A heading with a specific level (1-6).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading {
    pub level: u8,
    pub children: Vec<RichNode>,
}

/// A fenced block of preformatted text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeBlock {
    pub language: Option<String>,
    pub children: Vec<RichNode>,
}

/// A list of items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct List {
    pub ordered: bool,
    pub items: Vec<RichNode>,
}

/// A hyperlink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub href: String,
    pub children: Vec<RichNode>,
}

/// An embedded image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}
