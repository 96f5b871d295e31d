//! Turning a parsed document back into Markdown or a standalone HTML page.
//!
//! Headings are reproduced exactly (same level, same text) while each section is replaced by its
//! summary. HTML output is wrapped in a full document whose `<title>` comes from the first `h1`
//! or, failing that, from the input file name.

use crate::error::BriefError;
use crate::parser::{Item, ParsedDocument};
use crate::summarizer::Summarize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Target text format of a brief.
pub enum OutputFormat {
    /// Markdown with ATX headings.
    Markdown,
    /// A complete HTML5 document.
    Html,
}

impl OutputFormat {
    /// Names accepted by [`OutputFormat::from_str`].
    pub const SUPPORTED: [&'static str; 2] = ["markdown", "html"];

    #[must_use]
    /// The canonical name of the format.
    pub fn name(self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Html => "html",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = BriefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "markdown" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            other => Err(BriefError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Render every item as Markdown.
///
/// # Errors
///
/// Propagates summarizer failures.
pub fn render_markdown(
    document: &ParsedDocument,
    ratio: f64,
    summarizer: &dyn Summarize,
) -> Result<String, BriefError> {
    let mut out = String::new();
    for item in &document.items {
        match item {
            Item::Heading(heading) => out.push_str(&heading.render(OutputFormat::Markdown)?),
            Item::Section(section) => {
                out.push_str(&section.generate_summary(ratio, summarizer)?);
                out.push_str("\n\n");
            }
        }
    }
    Ok(out)
}

/// Render every item as HTML and wrap the result in a full page.
///
/// `file_path` is only consulted when the document had no level-1 heading.
///
/// # Errors
///
/// Propagates summarizer failures.
pub fn render_html(
    document: &ParsedDocument,
    ratio: f64,
    summarizer: &dyn Summarize,
    file_path: &Path,
) -> Result<String, BriefError> {
    let mut body = String::new();
    for item in &document.items {
        match item {
            Item::Heading(heading) => {
                body.push_str(&heading.render(OutputFormat::Html)?);
                body.push('\n');
            }
            Item::Section(section) => {
                body.push_str("<p>");
                body.push_str(&section.generate_summary(ratio, summarizer)?);
                body.push_str("</p>\n\n");
            }
        }
    }
    let title = match &document.title {
        Some(title) => title.clone(),
        None => {
            let derived = title_from_path(file_path);
            log::debug!("no level-1 heading, title derived from path: {derived}");
            derived
        }
    };
    Ok(html_page(&title, &body))
}

#[must_use]
/// Derive a page title from a file name: drop the directory, drop the last `.extension` and
/// upper-case the first character. The rest is kept as written.
pub fn title_from_path(file_path: &Path) -> String {
    let name = file_path
        .file_name()
        .map_or_else(|| file_path.to_string_lossy(), |name| name.to_string_lossy());
    let stem = match name.rfind('.') {
        Some(dot) => &name[..dot],
        None => &name[..],
    };
    capitalize(stem)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn html_page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"UTF-8\">
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
    <title>{title}</title>
</head>
<body>
    {body}
</body>
</html>
"
    )
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
