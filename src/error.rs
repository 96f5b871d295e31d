//! Error types surfaced by the briefing pipeline.
//!
//! `ElementError` marks a contract violation inside the core (asking a text element to render as
//! a heading, or pushing a heading into a section). `BriefError` is what callers of
//! [`crate::briefer::Briefer::brief`] see.

use crate::render::OutputFormat;
use crate::summarizer::SummaryError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{message} for <{kind}>")]
/// Raised when an element is used in a way its kind does not allow.
pub struct ElementError {
    /// Tag-style name of the offending element, e.g. `text` or `h2`.
    pub kind: String,
    /// What was attempted.
    pub message: String,
}

impl ElementError {
    #[must_use]
    /// Build an error for the given element kind.
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
/// Caller-facing failures of a `brief` invocation.
pub enum BriefError {
    /// The requested output format is not one of [`OutputFormat::SUPPORTED`].
    #[error(
        "markbrief only currently supports {supported} (got {0})",
        supported = OutputFormat::SUPPORTED.join(", ")
    )]
    UnsupportedFormat(String),
    /// The input document does not exist.
    #[error("markbrief failed to find the file {}", .0.display())]
    FileNotFound(PathBuf),
    /// The summary ratio lies outside (0, 1].
    #[error("summary ratio must be in (0, 1], got {0}")]
    InvalidRatio(f64),
    /// Reading the input failed.
    #[error("failed to read document: {0}")]
    Io(#[from] io::Error),
    /// The HTML grammar could not be loaded into the parser.
    #[error("failed to load HTML grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    /// The parser gave up on the document without producing a tree.
    #[error("tree-sitter could not parse the document")]
    Unparsable,
    /// An element was rendered against its contract.
    #[error(transparent)]
    Element(#[from] ElementError),
    /// The summarizer rejected a section.
    #[error(transparent)]
    Summary(#[from] SummaryError),
}
