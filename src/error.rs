use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum AmalgamateError {
    #[error("cannot open output file {path}: {source}")]
    OutputOpen {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed writing output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
}
impl AmalgamateError {
    pub(crate) fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AmalgamateError::OutputOpen {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AmalgamateError::OutputWrite {
            path: path.into(),
            source,
        }
    }
}
