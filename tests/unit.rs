use amalgamate::{
    AmalgamateBuilder, AmalgamateError, FileContent, TraversalConfig, read_lenient, select_file,
};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;
#[test]
fn test_default_config_constants() {
    let config = TraversalConfig::default();
    assert_eq!(
        config.include_extensions,
        vec![".js", ".html", ".css", ".md", ".txt"]
    );
    assert!(config.exclude_dirs.contains(".git"));
    assert!(config.exclude_dirs.contains(".claude"));
    assert!(config.exclude_files.contains("gemini.md"));
    assert!(config.exclude_files.contains("amalgamation.txt"));
    assert!(config.exclude_files.contains("amalgamation.bat.txt"));
    assert_eq!(config.output_path, PathBuf::from("amalgamation.txt"));
}
#[test]
fn test_selection_is_conjunctive() {
    let config = TraversalConfig::default();
    assert!(select_file("a.md", &config));
    assert!(!select_file("b.py", &config));
    assert!(!select_file("gemini.md", &config));
    assert!(!select_file("amalgamation.txt", &config));
}
#[test]
fn test_suffix_is_literal() {
    let config = AmalgamateBuilder::new().include_extensions(["js"]).build();
    assert!(select_file("foo.js", &config));
    assert!(select_file("foobarjs", &config));
    assert!(!select_file("foo.JS", &config));
    let config = TraversalConfig::default();
    assert!(select_file("bundle.min.js", &config));
    assert!(!select_file("README.TXT", &config));
}
#[test]
fn test_builder_excludes_own_output() {
    let config = AmalgamateBuilder::new()
        .clear_exclusions()
        .output_path("out/bundle.md")
        .build();
    assert!(config.exclude_files.contains("bundle.md"));
    assert!(config.exclude_dirs.is_empty());
    assert!(!select_file("bundle.md", &config));
    assert!(select_file("other.md", &config));
}
#[test]
fn test_builder_adds_to_defaults() {
    let config = AmalgamateBuilder::new()
        .exclude_dir("node_modules")
        .exclude_file("secrets.txt")
        .build();
    assert!(config.exclude_dirs.contains(".git"));
    assert!(config.exclude_dirs.contains("node_modules"));
    assert!(config.exclude_files.contains("secrets.txt"));
}
#[test]
fn test_read_lenient_replaces_invalid_utf8() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mixed.txt");
    fs::write(&path, [b'h', 0xff, b'i']).unwrap();
    assert_eq!(read_lenient(&path), FileContent::Text("h\u{FFFD}i".into()));
}
#[test]
fn test_read_lenient_reports_missing_file() {
    let dir = tempdir().unwrap();
    match read_lenient(&dir.path().join("gone.txt")) {
        FileContent::Unreadable(message) => assert!(!message.is_empty()),
        other => panic!("expected a read failure, got {:?}", other),
    }
}
#[test]
fn test_invalid_ignore_pattern() {
    let config = AmalgamateBuilder::new()
        .ignore_patterns(vec!["[".into()])
        .build();
    let err = amalgamate::Amalgamator::new(config).unwrap_err();
    assert!(matches!(err, AmalgamateError::InvalidPattern(_)));
}
#[test]
fn test_config_serde_round_trip() {
    let config = AmalgamateBuilder::new().exclude_dir("target").build();
    let json = serde_json::to_string(&config).unwrap();
    let back: TraversalConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
