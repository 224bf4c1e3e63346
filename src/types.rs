use serde::Serialize;
use std::path::PathBuf;

/// One selected file, alive only while its block is being written.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// The path used to open the file.
    pub path: PathBuf,
    /// The path relative to the traversal root.
    pub relative_path: PathBuf,
    /// `relative_path` with components joined by `/`; this is what the header shows.
    pub normalized_path: String,
}

/// Outcome of reading a selected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// Decoded text. Invalid UTF-8 has been replaced, never rejected.
    Text(String),
    /// The read failed; holds the error message for the placeholder line.
    Unreadable(String),
}

/// Summary of a finished run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AmalgamationReport {
    pub output_path: PathBuf,
    /// Number of blocks written, placeholders included.
    pub files_written: usize,
    /// Normalized paths of files whose block holds the error placeholder.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub read_errors: Vec<String>,
}
