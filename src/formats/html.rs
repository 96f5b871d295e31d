//! HTML format implementation backed by tree-sitter-html.
//!
//! HTML needs no conversion; this module also owns the grammar used to walk every normalized
//! document, whatever format it started in.

use crate::formats::Format;
use std::borrow::Cow;
use std::path::Path;

/// HTML documents; the fallback for any path that is not Markdown.
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &'static str {
        "html"
    }

    fn matches(&self, _path: &Path) -> bool {
        true
    }

    fn to_html<'a>(&self, source: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(source)
    }
}

#[must_use]
/// The tree-sitter grammar for HTML.
pub fn language() -> tree_sitter::Language {
    tree_sitter_html::LANGUAGE.into()
}
