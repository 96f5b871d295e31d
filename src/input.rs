//! Reading documents and flattening them into a stream of nodes.
//!
//! The parser does not care about HTML structure beyond three things: where the body starts,
//! which nodes are headings, and what text sits everywhere else. [`walk_html`] reduces a
//! tree-sitter HTML tree to exactly that, depth-first and in document order.

use crate::element::HeadingLevel;
use crate::error::BriefError;
use crate::formats::{self, html};
use std::fs;
use std::path::Path;
use tree_sitter::{Node, Parser};

#[derive(Clone, Debug, PartialEq, Eq)]
/// One node of the normalized document stream.
pub enum DocNode {
    /// The body container opened.
    Body,
    /// A heading tag. The next node is always its own text.
    Heading {
        /// Heading depth.
        level: HeadingLevel,
        /// Heading text with markup removed.
        text: String,
    },
    /// A run of non-heading text.
    Text(String),
}

/// Elements that never break a run of text.
const INLINE_TAGS: &[&str] = &[
    "a", "abbr", "b", "bdi", "bdo", "cite", "code", "data", "del", "dfn", "em", "i", "ins", "kbd",
    "mark", "q", "s", "samp", "small", "span", "strong", "sub", "sup", "time", "u", "var",
];

/// Text placed between the runs of two consecutive blocks.
const BLOCK_SEPARATOR: &str = "\n";

/// Subtrees that carry no document text.
const SKIPPED_KINDS: &[&str] = &["comment", "doctype", "script_element", "style_element"];

/// Read the document at `path` and normalize it into a node stream.
///
/// # Errors
///
/// Returns [`BriefError::Io`] if the file cannot be read, or a parse error.
pub fn load(path: &Path) -> Result<Vec<DocNode>, BriefError> {
    let source = fs::read_to_string(path)?;
    let format = formats::for_path(path);
    log::debug!("reading {} as {}", path.display(), format.name());
    walk_html(&format.to_html(&source))
}

/// Parse `html` and flatten it into document-order nodes.
///
/// # Errors
///
/// Returns [`BriefError::Language`] if the HTML grammar cannot be loaded, or
/// [`BriefError::Unparsable`] if tree-sitter gives up without a tree.
pub fn walk_html(html: &str) -> Result<Vec<DocNode>, BriefError> {
    let mut parser = Parser::new();
    parser.set_language(&html::language())?;
    let tree = parser.parse(html, None).ok_or(BriefError::Unparsable)?;
    let root = tree.root_node();

    let mut walker = Walker::new(html.as_bytes());
    if !has_body(root, walker.source) {
        walker.nodes.push(DocNode::Body);
    }
    walker.visit(root);
    walker.flush();
    log::debug!("normalized document into {} nodes", walker.nodes.len());
    Ok(walker.nodes)
}

struct Walker<'s> {
    source: &'s [u8],
    nodes: Vec<DocNode>,
    run: String,
    run_end: Option<usize>,
    after_run: bool,
}

impl<'s> Walker<'s> {
    fn new(source: &'s [u8]) -> Self {
        Self {
            source,
            nodes: Vec::new(),
            run: String::new(),
            run_end: None,
            after_run: false,
        }
    }

    fn visit(&mut self, node: Node<'_>) {
        match node.kind() {
            kind if SKIPPED_KINDS.contains(&kind) => {}
            "text" | "entity" => self.push_fragment(node),
            "element" => self.visit_element(node),
            _ => self.visit_children(node),
        }
    }

    fn visit_children(&mut self, node: Node<'_>) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if !matches!(child.kind(), "start_tag" | "end_tag" | "self_closing_tag") {
                self.visit(child);
            }
        }
    }

    fn visit_element(&mut self, node: Node<'_>) {
        let tag = tag_name(node, self.source).unwrap_or_default();
        if tag == "head" {
            return;
        }
        if INLINE_TAGS.contains(&tag.as_str()) {
            self.visit_children(node);
            return;
        }
        self.flush();
        if tag == "body" {
            self.nodes.push(DocNode::Body);
            self.after_run = false;
        }
        if let Some(level) = HeadingLevel::from_tag(&tag) {
            self.after_run = false;
            let text = inline_text(node, self.source);
            self.nodes.push(DocNode::Heading {
                level,
                text: text.clone(),
            });
            self.nodes.push(DocNode::Text(text));
            return;
        }
        self.visit_children(node);
        self.flush();
    }

    fn push_fragment(&mut self, node: Node<'_>) {
        append_fragment(&mut self.run, &mut self.run_end, node, self.source);
    }

    /// Close the current run at a block boundary. Two runs in a row are separated by a `\n`
    /// node so adjacent blocks never glue together.
    fn flush(&mut self) {
        self.run_end = None;
        let run = std::mem::take(&mut self.run);
        if run.trim().is_empty() {
            return;
        }
        if self.after_run {
            self.nodes.push(DocNode::Text(BLOCK_SEPARATOR.to_string()));
        }
        self.nodes.push(DocNode::Text(run));
        self.after_run = true;
    }
}

/// Lower-cased tag name of an `element` node.
fn tag_name(element: Node<'_>, source: &[u8]) -> Option<String> {
    let mut cursor = element.walk();
    let tag = element
        .children(&mut cursor)
        .find(|child| matches!(child.kind(), "start_tag" | "self_closing_tag"))?;
    let mut cursor = tag.walk();
    let name = tag
        .children(&mut cursor)
        .find(|child| child.kind() == "tag_name")?;
    name.utf8_text(source).ok().map(str::to_ascii_lowercase)
}

/// All text below `node`, markup removed.
fn inline_text(node: Node<'_>, source: &[u8]) -> String {
    fn collect(node: Node<'_>, source: &[u8], out: &mut String, last_end: &mut Option<usize>) {
        match node.kind() {
            kind if SKIPPED_KINDS.contains(&kind) => {}
            "text" | "entity" => append_fragment(out, last_end, node, source),
            _ => {
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    collect(child, source, out, last_end);
                }
            }
        }
    }
    let mut out = String::new();
    let mut last_end = None;
    collect(node, source, &mut out, &mut last_end);
    out
}

/// Append a text or entity leaf, inserting one space wherever the source had whitespace since
/// the previous fragment.
fn append_fragment(out: &mut String, last_end: &mut Option<usize>, node: Node<'_>, source: &[u8]) {
    let Ok(raw) = node.utf8_text(source) else {
        return;
    };
    if let Some(end) = *last_end {
        if !out.is_empty() && has_text_whitespace(&source[end..node.start_byte()]) {
            out.push(' ');
        }
    }
    out.push_str(&html_escape::decode_html_entities(raw));
    *last_end = Some(node.end_byte());
}

/// Whether `gap` holds whitespace outside of any tag.
fn has_text_whitespace(gap: &[u8]) -> bool {
    let mut in_tag = false;
    for &byte in gap {
        match byte {
            b'<' => in_tag = true,
            b'>' => in_tag = false,
            b if !in_tag && b.is_ascii_whitespace() => return true,
            _ => {}
        }
    }
    false
}

fn has_body(node: Node<'_>, source: &[u8]) -> bool {
    if node.kind() == "element" && tag_name(node, source).as_deref() == Some("body") {
        return true;
    }
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|child| has_body(child, source));
    found
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
