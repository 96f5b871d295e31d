//! Grouping the node stream into headings and sections.
//!
//! The parser is a two-state machine. It ignores everything until the body container opens, then
//! keeps an open collection of text elements that is flushed into a [`Section`] whenever a heading
//! (or the end of the stream) closes it.
//!
//! ```text
//! BeforeBody --Body--> InBody --end of stream--> (final flush)
//! ```
//!
//! Headings are always followed by their own text in the stream; a transient skip flag drops that
//! node so the heading text is not captured twice.

use crate::element::{Element, HeadingLevel};
use crate::input::DocNode;
use crate::section::Section;

#[derive(Debug)]
/// An entry of the summary sequence.
pub enum Item {
    /// A heading, rendered as-is.
    Heading(Element),
    /// Content between headings, rendered as its summary.
    Section(Section),
}

#[derive(Debug, Default)]
/// Parser output: headings and sections in source order, plus the discovered title.
pub struct ParsedDocument {
    /// Headings and non-empty sections; two sections are never adjacent.
    pub items: Vec<Item>,
    /// Text of the first level-1 heading, if any.
    pub title: Option<String>,
}

impl ParsedDocument {
    /// Headings in order.
    pub fn headings(&self) -> impl Iterator<Item = &Element> {
        self.items.iter().filter_map(|item| match item {
            Item::Heading(heading) => Some(heading),
            Item::Section(_) => None,
        })
    }

    /// Sections in order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.items.iter().filter_map(|item| match item {
            Item::Section(section) => Some(section),
            Item::Heading(_) => None,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Where the parser is relative to the body container.
pub enum ParseState {
    /// Nothing is captured yet.
    BeforeBody,
    /// Headings and text are being collected.
    InBody,
}

/// Single-use parser state for one document.
pub struct DocumentParser {
    state: ParseState,
    skip_next: bool,
    open: Section,
    document: ParsedDocument,
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser {
    #[must_use]
    /// A parser waiting for the body container.
    pub fn new() -> Self {
        Self {
            state: ParseState::BeforeBody,
            skip_next: false,
            open: Section::new(),
            document: ParsedDocument::default(),
        }
    }

    #[must_use]
    /// Current state.
    pub fn state(&self) -> ParseState {
        self.state
    }

    #[must_use]
    /// Run a full pass over `nodes` and return the summary sequence.
    pub fn parse(nodes: impl IntoIterator<Item = DocNode>) -> ParsedDocument {
        let mut parser = Self::new();
        for node in nodes {
            parser.feed(node);
        }
        parser.finish()
    }

    /// Consume one node.
    pub fn feed(&mut self, node: DocNode) {
        if self.skip_next {
            self.skip_next = false;
            return;
        }
        match (self.state, node) {
            (ParseState::BeforeBody, DocNode::Body) => self.state = ParseState::InBody,
            (ParseState::BeforeBody, _) | (ParseState::InBody, DocNode::Body) => {}
            (ParseState::InBody, DocNode::Heading { level, text }) => self.heading(level, text),
            (ParseState::InBody, DocNode::Text(text)) => self.open.push_text(text),
        }
    }

    #[must_use]
    /// Flush the trailing section and hand back the result.
    pub fn finish(mut self) -> ParsedDocument {
        self.flush();
        if self.state == ParseState::BeforeBody {
            log::warn!("document never opened a body container; nothing to summarize");
        }
        log::debug!(
            "parsed {} headings and {} sections",
            self.document.headings().count(),
            self.document.sections().count()
        );
        self.document
    }

    fn heading(&mut self, level: HeadingLevel, text: String) {
        self.flush();
        if self.document.title.is_none() && level.get() == 1 {
            self.document.title = Some(text.clone());
        }
        self.document
            .items
            .push(Item::Heading(Element::heading(level, text)));
        self.skip_next = true;
    }

    /// Turn the open collection into a section; no-op when it is empty.
    fn flush(&mut self) {
        if self.open.is_empty() {
            return;
        }
        let section = std::mem::take(&mut self.open);
        self.document.items.push(Item::Section(section));
    }
}

#[cfg(test)]
#[path = "tests/parser.rs"]
mod tests;
