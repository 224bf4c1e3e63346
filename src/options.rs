use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

pub const DEFAULT_INCLUDE_EXTENSIONS: &[&str] = &[".js", ".html", ".css", ".md", ".txt"];
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[".git", ".claude"];
pub const DEFAULT_EXCLUDE_FILES: &[&str] = &["gemini.md", "amalgamation.txt", "amalgamation.bat.txt"];
pub const DEFAULT_OUTPUT_PATH: &str = "amalgamation.txt";

/// Everything a run needs to know besides the root directory.
///
/// Build it with [`AmalgamateBuilder`]; the default value carries the
/// stock extension list and exclusions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Literal, case-sensitive name suffixes. Order is kept but not significant.
    pub include_extensions: Vec<String>,
    /// Directory names that are never descended into, at any depth.
    pub exclude_dirs: BTreeSet<String>,
    /// File names that are never written, whatever their extension.
    pub exclude_files: BTreeSet<String>,
    /// Glob patterns matched against root-relative paths.
    pub ignore_patterns: Vec<String>,
    pub follow_links: bool,
    pub output_path: PathBuf,
}
impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            include_extensions: to_strings(DEFAULT_INCLUDE_EXTENSIONS).collect(),
            exclude_dirs: to_strings(DEFAULT_EXCLUDE_DIRS).collect(),
            exclude_files: to_strings(DEFAULT_EXCLUDE_FILES).collect(),
            ignore_patterns: Vec::new(),
            follow_links: false,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}
fn to_strings(items: &'static [&'static str]) -> impl Iterator<Item = String> {
    items.iter().map(|s| s.to_string())
}
#[derive(Debug, Default)]
pub struct AmalgamateBuilder {
    config: TraversalConfig,
}
impl AmalgamateBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }
    /// Replaces the extension list.
    pub fn include_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.include_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }
    pub fn exclude_dir(mut self, name: impl Into<String>) -> Self {
        self.config.exclude_dirs.insert(name.into());
        self
    }
    pub fn exclude_file(mut self, name: impl Into<String>) -> Self {
        self.config.exclude_files.insert(name.into());
        self
    }
    /// Drops every excluded directory and file name, including the defaults.
    pub fn clear_exclusions(mut self) -> Self {
        self.config.exclude_dirs.clear();
        self.config.exclude_files.clear();
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.config.ignore_patterns = patterns;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.config.follow_links = yes;
        self
    }
    /// Finishes the config. The output file's own name always ends up in
    /// `exclude_files`, so a run never feeds its previous artifact back in.
    pub fn build(mut self) -> TraversalConfig {
        if let Some(name) = self.config.output_path.file_name() {
            self.config
                .exclude_files
                .insert(name.to_string_lossy().into_owned());
        }
        self.config
    }
}
