//! # Amalgamate
//!
//! `amalgamate` walks a directory tree and concatenates every selected text file
//! into one output file, each block introduced by a `--- <path> ---` header.
//!
//! A file is selected when its name is not in the excluded-file list and ends
//! with one of the configured suffixes. Directories named in the excluded-dir
//! list are pruned before they are entered. A file that cannot be read gets an
//! `!!! Error reading file: ... !!!` placeholder instead of aborting the run.
//!
//! # Features
//!
//! - `logging` (default): debug/warn events through the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use amalgamate::{AmalgamateBuilder, amalgamate};
//!
//! let config = AmalgamateBuilder::new()
//!     .output_path("bundle.txt")
//!     .include_extensions([".rs", ".toml"])
//!     .exclude_dir("target")
//!     .build();
//!
//! let report = amalgamate(".", config).expect("Failed to write bundle");
//! println!("{} files written", report.files_written);
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod types;

pub use engine::{Amalgamator, amalgamate, plan, read_lenient, select_file};
pub use error::AmalgamateError;
pub use options::{
    AmalgamateBuilder, DEFAULT_EXCLUDE_DIRS, DEFAULT_EXCLUDE_FILES, DEFAULT_INCLUDE_EXTENSIONS,
    DEFAULT_OUTPUT_PATH, TraversalConfig,
};
pub use types::{AmalgamationReport, FileContent, FileEntry};
