//! The top-level `brief` operation.
//!
//! A [`Briefer`] holds the summary ratio and the summarizer. Each call to [`Briefer::brief`]
//! validates its arguments, reads and normalizes the document, parses it into headings and
//! sections, and renders the result. No state survives between calls.

use crate::error::BriefError;
use crate::formats::Format;
use crate::input;
use crate::parser::{DocumentParser, ParsedDocument};
use crate::render::{self, OutputFormat};
use crate::summarizer::{valid_ratio, FrequencySummarizer, Summarize};
use std::path::Path;

/// Ratio used when none is given.
pub const DEFAULT_SUMMARY_RATIO: f64 = 0.2;

/// Summarizes Markdown and HTML documents section by section.
pub struct Briefer {
    summary_ratio: f64,
    summarizer: Box<dyn Summarize>,
}

impl Default for Briefer {
    fn default() -> Self {
        Self::new(DEFAULT_SUMMARY_RATIO)
    }
}

impl Briefer {
    #[must_use]
    /// A briefer using the built-in [`FrequencySummarizer`].
    pub fn new(summary_ratio: f64) -> Self {
        Self::with_summarizer(summary_ratio, FrequencySummarizer::new())
    }

    #[must_use]
    /// A briefer delegating to a custom summarizer.
    pub fn with_summarizer(summary_ratio: f64, summarizer: impl Summarize + 'static) -> Self {
        Self {
            summary_ratio,
            summarizer: Box::new(summarizer),
        }
    }

    #[must_use]
    /// The configured summary ratio.
    pub fn summary_ratio(&self) -> f64 {
        self.summary_ratio
    }

    /// Summarize the document at `file_path` into `format` (`"markdown"` or `"html"`).
    ///
    /// Files ending in `.md` are treated as Markdown, everything else as HTML.
    ///
    /// # Errors
    ///
    /// Fails with [`BriefError::UnsupportedFormat`] for an unknown format,
    /// [`BriefError::FileNotFound`] for a missing file and [`BriefError::InvalidRatio`] for a
    /// ratio outside (0, 1]. Read, parse and summarizer errors are passed through.
    pub fn brief(&self, file_path: impl AsRef<Path>, format: &str) -> Result<String, BriefError> {
        let file_path = file_path.as_ref();
        let format: OutputFormat = format.parse()?;
        if !file_path.exists() {
            return Err(BriefError::FileNotFound(file_path.to_path_buf()));
        }
        self.check_ratio()?;
        log::info!("briefing {} as {format}", file_path.display());
        let nodes = input::load(file_path)?;
        self.render(&DocumentParser::parse(nodes), format, file_path)
    }

    /// Summarize an in-memory document. `name` stands in for the file name when deriving an HTML
    /// title.
    ///
    /// # Errors
    ///
    /// As [`Briefer::brief`], minus the file checks.
    pub fn brief_source(
        &self,
        source: &str,
        input_format: &dyn Format,
        name: &Path,
        format: OutputFormat,
    ) -> Result<String, BriefError> {
        self.check_ratio()?;
        let nodes = input::walk_html(&input_format.to_html(source))?;
        self.render(&DocumentParser::parse(nodes), format, name)
    }

    fn check_ratio(&self) -> Result<(), BriefError> {
        if valid_ratio(self.summary_ratio) {
            Ok(())
        } else {
            Err(BriefError::InvalidRatio(self.summary_ratio))
        }
    }

    fn render(
        &self,
        document: &ParsedDocument,
        format: OutputFormat,
        file_path: &Path,
    ) -> Result<String, BriefError> {
        let summarizer = &*self.summarizer;
        match format {
            OutputFormat::Markdown => {
                render::render_markdown(document, self.summary_ratio, summarizer)
            }
            OutputFormat::Html => {
                render::render_html(document, self.summary_ratio, summarizer, file_path)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/briefer.rs"]
mod tests;
