//! Markdown format implementation using pulldown-cmark.
//!
//! Markdown is rendered to HTML with the usual GitHub-flavoured extensions so headings come out
//! as `<h1>`..`<h6>` and everything else as block-level HTML.

use crate::formats::Format;
use pulldown_cmark::{html, Options, Parser};
use std::borrow::Cow;
use std::path::Path;

/// CommonMark documents, claimed by the `.md` suffix.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn matches(&self, path: &Path) -> bool {
        path.to_string_lossy().ends_with(".md")
    }

    fn to_html<'a>(&self, source: &'a str) -> Cow<'a, str> {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        let parser = Parser::new_ext(source, options);
        let mut out = String::with_capacity(source.len() * 3 / 2);
        html::push_html(&mut out, parser);
        Cow::Owned(out)
    }
}
