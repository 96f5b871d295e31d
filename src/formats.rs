//! Input formats a brief can be produced from.
//!
//! Every input is normalized to HTML before walking, so a format only has to say which files it
//! claims and how to turn their contents into HTML. Markdown goes through a CommonMark renderer;
//! anything else is assumed to already be HTML.

pub mod html;
pub mod markdown;

use std::borrow::Cow;
use std::path::Path;

/// A source document format.
pub trait Format {
    /// Short name used in logs.
    fn name(&self) -> &'static str;
    /// Whether files at `path` are written in this format.
    fn matches(&self, path: &Path) -> bool;
    /// Normalize `source` to HTML.
    fn to_html<'a>(&self, source: &'a str) -> Cow<'a, str>;
}

#[must_use]
/// Pick the format for a path: `.md` files are Markdown, everything else is HTML.
pub fn for_path(path: &Path) -> &'static dyn Format {
    if markdown::MarkdownFormat.matches(path) {
        &markdown::MarkdownFormat
    } else {
        &html::HtmlFormat
    }
}
