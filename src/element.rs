//! Leaf nodes of a parsed document.
//!
//! An element is either a heading (with its level) or an opaque run of text. Text elements are
//! only ever gathered into a [`crate::section::Section`]; headings are rendered on their own.

use crate::error::ElementError;
use crate::render::OutputFormat;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
/// Heading depth, guaranteed to lie in `1..=6`.
pub struct HeadingLevel(u8);

impl HeadingLevel {
    #[must_use]
    /// Validate a raw level, returning `None` outside `1..=6`.
    pub fn new(level: u8) -> Option<Self> {
        (1..=6).contains(&level).then_some(Self(level))
    }

    #[must_use]
    /// Parse an HTML tag name such as `h3` (case-insensitive).
    pub fn from_tag(tag: &str) -> Option<Self> {
        let bytes = tag.as_bytes();
        match bytes {
            [h, digit] if h.eq_ignore_ascii_case(&b'h') && digit.is_ascii_digit() => {
                Self::new(digit - b'0')
            }
            _ => None,
        }
    }

    #[must_use]
    /// The numeric level.
    pub fn get(self) -> u8 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What an element stands for in the source document.
pub enum ElementKind {
    /// An `h1`..`h6` heading.
    Heading(HeadingLevel),
    /// Any other content.
    Text,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One atomic token of the normalized document.
pub struct Element {
    kind: ElementKind,
    text: String,
}

impl Element {
    #[must_use]
    /// A heading element at `level`.
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Heading(level),
            text: text.into(),
        }
    }

    #[must_use]
    /// A plain text element.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Text,
            text: text.into(),
        }
    }

    #[must_use]
    /// The element's kind.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    #[must_use]
    /// Whether this element came from a heading tag.
    pub fn is_heading(&self) -> bool {
        matches!(self.kind, ElementKind::Heading(_))
    }

    #[must_use]
    /// Verbatim text content.
    pub fn get_text(&self) -> &str {
        &self.text
    }

    #[must_use]
    /// Tag-style name used in diagnostics: `h1`..`h6` or `text`.
    pub fn kind_name(&self) -> String {
        match self.kind {
            ElementKind::Heading(level) => format!("h{}", level.get()),
            ElementKind::Text => "text".to_string(),
        }
    }

    /// Render a heading in the target format.
    ///
    /// Markdown headings are `level` hashes, a space, the text and a newline. HTML headings are
    /// a bare `<hN>` tag pair with the text copied in as-is.
    ///
    /// # Errors
    ///
    /// Returns an [`ElementError`] when called on a text element.
    pub fn render(&self, format: OutputFormat) -> Result<String, ElementError> {
        let ElementKind::Heading(level) = self.kind else {
            let message = match format {
                OutputFormat::Markdown => "Markdown render not supported",
                OutputFormat::Html => "HTML render not supported",
            };
            return Err(ElementError::new(self.kind_name(), message));
        };
        let level = level.get();
        Ok(match format {
            OutputFormat::Markdown => {
                format!("{} {}\n", "#".repeat(usize::from(level)), self.text)
            }
            OutputFormat::Html => format!("<h{level}>{}</h{level}>", self.text),
        })
    }
}

#[cfg(test)]
#[path = "tests/element.rs"]
mod tests;
