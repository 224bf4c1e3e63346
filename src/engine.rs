use crate::error::AmalgamateError;
use crate::options::TraversalConfig;
use crate::output::{normalize_path, write_block};
use crate::types::{AmalgamationReport, FileContent, FileEntry};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::{DirEntry, WalkBuilder};
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Walks a tree and writes the selected files into one artifact.
#[derive(Debug)]
pub struct Amalgamator {
    config: TraversalConfig,
    matcher: Option<GlobSet>,
}
impl Amalgamator {
    pub fn new(config: TraversalConfig) -> Result<Self, AmalgamateError> {
        let matcher = build_matcher(&config.ignore_patterns)?;
        Ok(Self { config, matcher })
    }
    pub fn config(&self) -> &TraversalConfig {
        &self.config
    }
    /// Truncates the output file and fills it with one block per selected file under `root`.
    ///
    /// Only failing to open or write the output is fatal. A file that cannot be
    /// read gets a placeholder block and the walk goes on.
    pub fn run(&self, root: impl AsRef<Path>) -> Result<AmalgamationReport, AmalgamateError> {
        let root = root.as_ref();
        let output_path = &self.config.output_path;
        #[cfg(feature = "logging")]
        tracing::debug!(
            "Amalgamating {} into {}",
            root.display(),
            output_path.display()
        );
        let file = File::create(output_path).map_err(|e| AmalgamateError::open(output_path, e))?;
        let mut out = BufWriter::new(file);
        let mut report = AmalgamationReport {
            output_path: output_path.clone(),
            ..Default::default()
        };
        for entry in self.walk(root) {
            let content = read_lenient(&entry.path);
            if let FileContent::Unreadable(_message) = &content {
                #[cfg(feature = "logging")]
                tracing::warn!("Cannot read {}: {}", entry.path.display(), _message);
                report.read_errors.push(entry.normalized_path.clone());
            }
            write_block(&mut out, &entry.normalized_path, &content)
                .map_err(|e| AmalgamateError::write(output_path, e))?;
            #[cfg(feature = "logging")]
            tracing::debug!("Wrote {}", entry.normalized_path);
            report.files_written += 1;
        }
        out.flush()
            .map_err(|e| AmalgamateError::write(output_path, e))?;
        #[cfg(feature = "logging")]
        tracing::info!(
            "{} files written to {}",
            report.files_written,
            output_path.display()
        );
        Ok(report)
    }
    /// Selected files in walk order. Excluded directories are pruned before descent.
    fn walk<'a>(&'a self, root: &'a Path) -> impl Iterator<Item = FileEntry> + 'a {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(self.config.follow_links)
            .sort_by_file_name(|a, b| a.cmp(b));
        let exclude_dirs = self.config.exclude_dirs.clone();
        let matcher = self.matcher.clone();
        let prune_root = root.to_path_buf();
        builder.filter_entry(move |entry| {
            keep_entry(entry, &prune_root, &exclude_dirs, matcher.as_ref())
        });
        builder.build().filter_map(move |result| match result {
            Ok(entry) => self.select(root, entry.path()),
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::warn!("Skipping unreadable entry: {}", _e);
                None
            }
        })
    }
    fn select(&self, root: &Path, path: &Path) -> Option<FileEntry> {
        // `is_dir` follows links, so a dangling link still counts as a file.
        if path.is_dir() {
            return None;
        }
        let name = path.file_name()?.to_string_lossy();
        if !select_file(&name, &self.config) {
            return None;
        }
        let relative_path = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        Some(FileEntry {
            path: path.to_path_buf(),
            normalized_path: normalize_path(&relative_path),
            relative_path,
        })
    }
}
fn keep_entry(
    entry: &DirEntry,
    root: &Path,
    exclude_dirs: &BTreeSet<String>,
    matcher: Option<&GlobSet>,
) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
    if is_dir && exclude_dirs.contains(&*entry.file_name().to_string_lossy()) {
        #[cfg(feature = "logging")]
        tracing::trace!("Pruned {}", entry.path().display());
        return false;
    }
    if let Some(matcher) = matcher {
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        if matcher.is_match(relative) {
            return false;
        }
    }
    true
}
fn build_matcher(patterns: &[String]) -> Result<Option<GlobSet>, AmalgamateError> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| {
            AmalgamateError::InvalidPattern(format!("'{}': {}", pattern, e))
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map(Some)
        .map_err(|e| AmalgamateError::InvalidPattern(format!("failed to build glob set: {}", e)))
}
/// Whether a file name passes the exclusion list and carries an allowed suffix.
///
/// The suffix test is a literal, case-sensitive `ends_with`, so `.js` also
/// matches `notes.min.js` and `".txt"` does not match `README.TXT`.
pub fn select_file(name: &str, config: &TraversalConfig) -> bool {
    !config.exclude_files.contains(name)
        && config
            .include_extensions
            .iter()
            .any(|ext| name.ends_with(ext.as_str()))
}
/// Reads a whole file as text, replacing invalid UTF-8 instead of failing.
pub fn read_lenient(path: &Path) -> FileContent {
    match fs::read(path) {
        Ok(bytes) => FileContent::Text(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => FileContent::Unreadable(e.to_string()),
    }
}
/// Runs one amalgamation of `root` with `config`.
pub fn amalgamate(
    root: impl AsRef<Path>,
    config: TraversalConfig,
) -> Result<AmalgamationReport, AmalgamateError> {
    Amalgamator::new(config)?.run(root)
}
/// Root-relative paths of the files a run would write, in order, without touching the output.
pub fn plan(
    root: impl AsRef<Path>,
    config: TraversalConfig,
) -> Result<Vec<PathBuf>, AmalgamateError> {
    let amalgamator = Amalgamator::new(config)?;
    let root = root.as_ref();
    Ok(amalgamator
        .walk(root)
        .map(|entry| entry.relative_path)
        .collect())
}
