//! markbrief: section-by-section summaries of Markdown and HTML documents.
//!
//! A document is normalized to HTML, flattened into a stream of headings and text, grouped into
//! sections between headings, and rendered back out with each section replaced by its summary.
//!
//! ```no_run
//! use markbrief::Briefer;
//!
//! let brief = Briefer::new(0.2).brief("README.md", "markdown")?;
//! println!("{brief}");
//! # Ok::<(), markbrief::BriefError>(())
//! ```

pub mod briefer;
pub mod config;
pub mod element;
pub mod error;
pub mod formats;
pub mod input;
pub mod parser;
pub mod render;
pub mod section;
pub mod summarizer;

pub use briefer::{Briefer, DEFAULT_SUMMARY_RATIO};
pub use error::{BriefError, ElementError};
pub use render::OutputFormat;
pub use summarizer::{FrequencySummarizer, Summarize, SummaryError};

#[cfg(test)]
#[path = "tests/stub.rs"]
pub(crate) mod stub;
