//! A run of non-heading content summarized as one unit.
//!
//! Sections are filled while the parser walks the body and are never emitted empty. The
//! concatenated text is built once; the summary is cached for the last ratio it was asked for.

use crate::element::Element;
use crate::error::ElementError;
use crate::summarizer::{Summarize, SummaryError};
use std::cell::{OnceCell, RefCell};

#[derive(Debug, Default)]
/// Ordered text elements found between two headings (or a heading and a document boundary).
pub struct Section {
    elements: Vec<Element>,
    text: OnceCell<String>,
    summary: RefCell<Option<(f64, String)>>,
}

impl Section {
    #[must_use]
    /// An empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text element.
    ///
    /// # Errors
    ///
    /// Returns an [`ElementError`] when given a heading; sections never hold headings.
    pub fn add(&mut self, element: Element) -> Result<(), ElementError> {
        if element.is_heading() {
            return Err(ElementError::new(
                element.kind_name(),
                "Headings cannot be added to a section",
            ));
        }
        self.push(element);
        Ok(())
    }

    /// Append a text element built from `text`.
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.push(Element::text(text));
    }

    fn push(&mut self, element: Element) {
        self.elements.push(element);
        self.text = OnceCell::new();
        *self.summary.get_mut() = None;
    }

    #[must_use]
    /// Held elements in insertion order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    #[must_use]
    /// Number of held elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    /// Whether no element has been added yet.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    /// All element texts joined in order, with no separator added.
    pub fn text(&self) -> &str {
        self.text
            .get_or_init(|| self.elements.iter().map(Element::get_text).collect())
    }

    /// Summarize the section text at `ratio`.
    ///
    /// Asking again with the same ratio returns the cached summary without calling the
    /// summarizer; a different ratio replaces the cache.
    ///
    /// # Errors
    ///
    /// Whatever the summarizer returns is passed through unchanged.
    #[allow(clippy::float_cmp)]
    pub fn generate_summary(
        &self,
        ratio: f64,
        summarizer: &dyn Summarize,
    ) -> Result<String, SummaryError> {
        if let Some((cached_ratio, summary)) = self.summary.borrow().as_ref() {
            if *cached_ratio == ratio {
                return Ok(summary.clone());
            }
        }
        let summary = summarizer.summarize(self.text(), ratio)?;
        *self.summary.borrow_mut() = Some((ratio, summary.clone()));
        Ok(summary)
    }
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
