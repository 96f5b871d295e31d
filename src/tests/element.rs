use super::{Element, ElementKind, HeadingLevel};
use crate::render::OutputFormat;

fn level(n: u8) -> HeadingLevel {
    HeadingLevel::new(n).unwrap()
}

#[test]
fn test_heading_level_bounds() {
    assert!(HeadingLevel::new(0).is_none());
    assert!(HeadingLevel::new(7).is_none());
    for n in 1..=6 {
        assert_eq!(HeadingLevel::new(n).unwrap().get(), n);
    }
}

#[test]
fn test_heading_level_from_tag() {
    assert_eq!(HeadingLevel::from_tag("h1"), Some(level(1)));
    assert_eq!(HeadingLevel::from_tag("H4"), Some(level(4)));
    assert_eq!(HeadingLevel::from_tag("h7"), None);
    assert_eq!(HeadingLevel::from_tag("hr"), None);
    assert_eq!(HeadingLevel::from_tag("h10"), None);
    assert_eq!(HeadingLevel::from_tag("p"), None);
}

#[test]
fn test_markdown_heading_hash_count() {
    for n in 1..=6 {
        let heading = Element::heading(level(n), "Intro");
        let rendered = heading.render(OutputFormat::Markdown).unwrap();
        assert_eq!(rendered, format!("{} Intro\n", "#".repeat(usize::from(n))));
    }
}

#[test]
fn test_html_heading() {
    let heading = Element::heading(level(3), "Tom & Jerry");
    assert_eq!(
        heading.render(OutputFormat::Html).unwrap(),
        "<h3>Tom & Jerry</h3>"
    );
}

#[test]
fn test_text_element_is_not_a_heading() {
    let text = Element::text("just words");
    assert!(!text.is_heading());
    assert_eq!(text.kind(), ElementKind::Text);
    assert_eq!(text.get_text(), "just words");
    assert_eq!(text.kind_name(), "text");
}

#[test]
fn test_text_element_refuses_to_render() {
    let text = Element::text("body copy");

    let err = text.render(OutputFormat::Markdown).unwrap_err();
    assert_eq!(err.kind, "text");
    assert_eq!(err.to_string(), "Markdown render not supported for <text>");

    let err = text.render(OutputFormat::Html).unwrap_err();
    assert_eq!(err.to_string(), "HTML render not supported for <text>");
}
