use super::{has_text_whitespace, load, walk_html, DocNode};
use crate::element::HeadingLevel;
use crate::error::BriefError;
use std::io::Write;
use tempfile::{Builder, NamedTempFile};

fn heading(level: u8, text: &str) -> DocNode {
    DocNode::Heading {
        level: HeadingLevel::new(level).unwrap(),
        text: text.to_string(),
    }
}

fn text(text: &str) -> DocNode {
    DocNode::Text(text.to_string())
}

#[test]
fn test_explicit_body_opens_stream() {
    let html = "<!DOCTYPE html><html><head><title>Page</title></head>\
                <body><h1>Hi</h1><p>Para</p></body></html>";
    let nodes = walk_html(html).unwrap();
    assert_eq!(
        nodes,
        vec![DocNode::Body, heading(1, "Hi"), text("Hi"), text("Para")]
    );
}

#[test]
fn test_fragment_gets_implicit_body() {
    let nodes = walk_html("<p>Loose</p>").unwrap();
    assert_eq!(nodes, vec![DocNode::Body, text("Loose")]);
}

#[test]
fn test_inline_markup_joins_into_one_run() {
    let nodes = walk_html("<p>Hello <em>brave</em> new <a href=\"x y\">world</a>.</p>").unwrap();
    assert_eq!(nodes, vec![DocNode::Body, text("Hello brave new world.")]);
}

#[test]
fn test_heading_text_strips_markup() {
    let nodes = walk_html("<h2>Using <code>brief</code></h2>").unwrap();
    assert_eq!(
        nodes,
        vec![
            DocNode::Body,
            heading(2, "Using brief"),
            text("Using brief")
        ]
    );
}

#[test]
fn test_entities_are_decoded() {
    let nodes = walk_html("<p>Fish &amp; chips</p>").unwrap();
    assert_eq!(nodes, vec![DocNode::Body, text("Fish & chips")]);
}

#[test]
fn test_scripts_styles_and_comments_are_dropped() {
    let html = "<body><script>var x = 1;</script><style>p {}</style><!-- note --><p>Kept</p></body>";
    let nodes = walk_html(html).unwrap();
    assert_eq!(nodes, vec![DocNode::Body, text("Kept")]);
}

#[test]
fn test_blocks_split_runs() {
    let nodes = walk_html("<ul><li>one</li><li>two</li></ul>").unwrap();
    assert_eq!(nodes, vec![DocNode::Body, text("one"), text("\n"), text("two")]);
}

#[test]
fn test_adjacent_paragraphs_are_separated() {
    let nodes = walk_html("<body><p>alpha</p>\n<p>beta</p></body>").unwrap();
    assert_eq!(
        nodes,
        vec![DocNode::Body, text("alpha"), text("\n"), text("beta")]
    );
}

#[test]
fn test_line_break_separates_text() {
    let nodes = walk_html("<p>line one<br>line two</p>").unwrap();
    assert_eq!(
        nodes,
        vec![DocNode::Body, text("line one"), text("\n"), text("line two")]
    );
}

#[test]
fn test_no_separator_after_heading_text() {
    let nodes = walk_html("<p>intro</p><h2>Next</h2><p>body</p>").unwrap();
    assert_eq!(
        nodes,
        vec![
            DocNode::Body,
            text("intro"),
            heading(2, "Next"),
            text("Next"),
            text("body")
        ]
    );
}

#[test]
fn test_whitespace_outside_tags_only() {
    assert!(has_text_whitespace(b"</em> "));
    assert!(!has_text_whitespace(b"<a href=\"x y\">"));
    assert!(!has_text_whitespace(b""));
}

#[test]
fn test_load_markdown_file() {
    let mut file = Builder::new().suffix(".md").tempfile().unwrap();
    writeln!(file, "# Notes\n\nSome *emphasis* here.").unwrap();

    let nodes = load(file.path()).unwrap();
    assert_eq!(
        nodes,
        vec![
            DocNode::Body,
            heading(1, "Notes"),
            text("Notes"),
            text("Some emphasis here.")
        ]
    );
}

#[test]
fn test_load_treats_other_suffixes_as_html() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# Not a heading in HTML").unwrap();

    let nodes = load(file.path()).unwrap();
    assert_eq!(nodes, vec![DocNode::Body, text("# Not a heading in HTML")]);
}

#[test]
fn test_load_missing_file() {
    let err = load(std::path::Path::new("/no/such/dir/missing.md")).unwrap_err();
    assert!(matches!(err, BriefError::Io(_)));
}
