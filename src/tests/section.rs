use super::Section;
use crate::element::{Element, HeadingLevel};
use crate::stub::{Echo, Truncate};

fn section_of(texts: &[&str]) -> Section {
    let mut section = Section::new();
    for text in texts {
        section.add(Element::text(*text)).unwrap();
    }
    section
}

#[test]
fn test_text_concatenates_without_separators() {
    let section = section_of(&["One. ", "Two.", "Three."]);
    assert_eq!(section.len(), 3);
    assert_eq!(section.text(), "One. Two.Three.");
}

#[test]
fn test_rejects_headings() {
    let mut section = Section::new();
    let err = section
        .add(Element::heading(HeadingLevel::new(2).unwrap(), "Nope"))
        .unwrap_err();
    assert_eq!(err.kind, "h2");
    assert!(section.is_empty());
}

#[test]
fn test_summary_uses_ratio() {
    let section = section_of(&["abcdefghij"]);
    assert_eq!(section.generate_summary(0.5, &Truncate).unwrap(), "abcde");
    assert_eq!(section.generate_summary(1.0, &Truncate).unwrap(), "abcdefghij");
}

#[test]
fn test_summary_is_cached_per_ratio() {
    let section = section_of(&["Some ", "text."]);
    let echo = Echo::default();

    let first = section.generate_summary(0.5, &echo).unwrap();
    let second = section.generate_summary(0.5, &echo).unwrap();
    assert_eq!(first, second);
    assert_eq!(echo.calls.get(), 1);

    section.generate_summary(0.25, &echo).unwrap();
    assert_eq!(echo.calls.get(), 2);
}

#[test]
fn test_add_after_summary_invalidates_cache() {
    let mut section = section_of(&["First."]);
    let echo = Echo::default();
    assert_eq!(section.generate_summary(0.5, &echo).unwrap(), "First.");

    section.add(Element::text("Second.")).unwrap();
    assert_eq!(section.generate_summary(0.5, &echo).unwrap(), "First.Second.");
    assert_eq!(echo.calls.get(), 2);
}

#[test]
fn test_push_text_appends_and_resets_cache() {
    let mut section = Section::new();
    section.push_text("alpha");
    let echo = Echo::default();
    assert_eq!(section.generate_summary(1.0, &echo).unwrap(), "alpha");

    section.push_text("\nbeta");
    assert_eq!(section.len(), 2);
    assert_eq!(section.text(), "alpha\nbeta");
    assert_eq!(section.generate_summary(1.0, &echo).unwrap(), "alpha\nbeta");
    assert_eq!(echo.calls.get(), 2);
}
