//! Rich tree reduction (rich-text tree → Markdown export)
//!
//! Converts a captured rich-text tree back into Markdown source. This is the
//! lossy half of the round trip: the tree carries less information than
//! arbitrary Markdown (no reference links, no setext headings, no loose/tight
//! list distinction), so reduction maps every node kind onto one fixed
//! textual template.
//!
//! Reduction runs on every debounced result-view edit, so it must be total:
//! unrecognized structure degrades to its children's output and nothing here
//! returns an error or panics.

use crate::rich::nodes::{CodeBlock, Heading, Image, Link, List, RichNode};

/// Reduce a rich-text tree to Markdown source.
///
/// The output is trimmed of leading and trailing whitespace before it is
/// handed back to the text buffer.
pub fn reduce(nodes: &[RichNode]) -> String {
    let mut out = String::new();
    let mut cx = ReduceContext::default();
    for node in nodes {
        reduce_node(node, &mut out, &mut cx);
    }
    out.trim().to_string()
}

/// Walk state threaded through the reduction.
///
/// `in_code_block` tracks code ancestry so inline-code templates are not
/// applied inside an already-fenced block (code nested under a blockquote or
/// list still fences exactly once).
#[derive(Debug, Default)]
struct ReduceContext {
    in_code_block: bool,
}

fn reduce_children(children: &[RichNode], cx: &mut ReduceContext) -> String {
    let mut out = String::new();
    for child in children {
        reduce_node(child, &mut out, cx);
    }
    out
}

fn reduce_node(node: &RichNode, out: &mut String, cx: &mut ReduceContext) {
    match node {
        RichNode::Text(text) => out.push_str(text),

        RichNode::Heading(Heading { level, children }) => {
            let level = (*level).clamp(1, 6) as usize;
            let body = reduce_children(children, cx);
            out.push_str(&"#".repeat(level));
            out.push(' ');
            out.push_str(body.trim());
            out.push_str("\n\n");
        }

        RichNode::Paragraph(children) => {
            let body = reduce_children(children, cx);
            out.push_str(&body);
            out.push_str("\n\n");
        }

        RichNode::Strong(children) => {
            let body = reduce_children(children, cx);
            out.push_str("**");
            out.push_str(&body);
            out.push_str("**");
        }

        RichNode::Emphasis(children) => {
            let body = reduce_children(children, cx);
            out.push('*');
            out.push_str(&body);
            out.push('*');
        }

        RichNode::Underline(children) => {
            // Markdown has no native underline; the literal tag survives the
            // renderer's raw-HTML passthrough.
            let body = reduce_children(children, cx);
            out.push_str("<u>");
            out.push_str(&body);
            out.push_str("</u>");
        }

        RichNode::Code(children) => {
            let body = reduce_children(children, cx);
            if cx.in_code_block {
                // The enclosing fence already delimits the content.
                out.push_str(&body);
            } else {
                out.push('`');
                out.push_str(&body);
                out.push('`');
            }
        }

        RichNode::CodeBlock(CodeBlock { language, children }) => {
            let was_in_code = cx.in_code_block;
            cx.in_code_block = true;
            let body = reduce_children(children, cx);
            cx.in_code_block = was_in_code;

            out.push_str("```");
            if let Some(lang) = language {
                out.push_str(lang);
            }
            out.push('\n');
            out.push_str(body.trim_end_matches('\n'));
            out.push_str("\n```\n\n");
        }

        RichNode::Blockquote(children) => {
            let body = reduce_children(children, cx);
            for line in body.trim_end().lines() {
                out.push_str("> ");
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
        }

        RichNode::List(List { ordered, items }) => {
            let mut index = 0usize;
            for item in items {
                match item {
                    RichNode::ListItem(children) => {
                        index += 1;
                        let body = reduce_children(children, cx);
                        if *ordered {
                            out.push_str(&format!("{index}. "));
                        } else {
                            out.push_str("- ");
                        }
                        out.push_str(body.trim());
                        out.push('\n');
                    }
                    // Stray non-item children keep their own output.
                    other => reduce_node(other, out, cx),
                }
            }
            out.push('\n');
        }

        // A list item outside a list has no marker to claim; its content
        // still passes through.
        RichNode::ListItem(children) => {
            let body = reduce_children(children, cx);
            out.push_str(&body);
        }

        RichNode::Link(Link { href, children }) => {
            let body = reduce_children(children, cx);
            out.push('[');
            out.push_str(&body);
            out.push_str("](");
            out.push_str(href);
            out.push(')');
        }

        RichNode::Image(Image { src, alt }) => {
            out.push_str("![");
            out.push_str(alt);
            out.push_str("](");
            out.push_str(src);
            out.push(')');
        }

        RichNode::HorizontalRule => out.push_str("---\n\n"),

        RichNode::LineBreak => out.push('\n'),

        RichNode::Generic(children) => {
            let body = reduce_children(children, cx);
            out.push_str(&body);
        }
    }
}
