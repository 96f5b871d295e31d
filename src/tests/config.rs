use super::Config;
use crate::briefer::DEFAULT_SUMMARY_RATIO;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn test_missing_file_uses_defaults() {
    let config = Config::load_from(Path::new("/no/such/markbrief.toml"));
    assert_eq!(config, Config::default());
    assert!((config.summary_ratio - DEFAULT_SUMMARY_RATIO).abs() < f64::EPSILON);
    assert_eq!(config.format, "markdown");
}

#[test]
fn test_reads_values() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "summary_ratio = 0.5\nformat = \"html\"").unwrap();

    let config = Config::load_from(file.path());
    assert!((config.summary_ratio - 0.5).abs() < f64::EPSILON);
    assert_eq!(config.format, "html");
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "format = \"html\"").unwrap();

    let config = Config::load_from(file.path());
    assert!((config.summary_ratio - DEFAULT_SUMMARY_RATIO).abs() < f64::EPSILON);
    assert_eq!(config.format, "html");
}

#[test]
fn test_empty_file_matches_default_impl() {
    let file = NamedTempFile::new().unwrap();
    assert_eq!(Config::load_from(file.path()), Config::default());
}
