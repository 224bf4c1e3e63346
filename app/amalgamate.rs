//! Command-line interface for amalgamate.
//!
//! With no arguments it bundles the current directory into `amalgamation.txt`
//! using the stock extension list and exclusions.

use amalgamate::{AmalgamateBuilder, AmalgamationReport, TraversalConfig, amalgamate, plan};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::exit;

/// amalgamate: concatenate a directory's text files into one file
#[derive(Parser)]
#[command(name = "amalgamate", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output file, truncated on every run
    #[arg(short, long, default_value = amalgamate::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// File name suffixes to include (replaces the defaults, can be repeated)
    #[arg(short = 'e', long = "ext")]
    extensions: Vec<String>,

    /// Extra directory names to skip (can be repeated)
    #[arg(long = "exclude-dir")]
    exclude_dirs: Vec<String>,

    /// Extra file names to skip (can be repeated)
    #[arg(long = "exclude-file")]
    exclude_files: Vec<String>,

    /// Glob patterns on root-relative paths to skip (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Only print the files that would be written
    #[arg(long)]
    list: bool,

    /// How to report a successful run
    #[arg(long, value_enum, default_value_t = Report::Message)]
    report: Report,

    /// Indent JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Report {
    Message,
    Json,
}

impl Cli {
    fn into_config(self) -> (PathBuf, TraversalConfig, bool, Report, bool) {
        let mut builder = AmalgamateBuilder::new()
            .output_path(self.output)
            .ignore_patterns(self.ignore_patterns)
            .follow_links(self.follow_links);
        if !self.extensions.is_empty() {
            builder = builder.include_extensions(self.extensions);
        }
        for dir in self.exclude_dirs {
            builder = builder.exclude_dir(dir);
        }
        for file in self.exclude_files {
            builder = builder.exclude_file(file);
        }
        (self.root, builder.build(), self.list, self.report, self.pretty)
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let (root, config, list, report, pretty) = cli.into_config();

    if list {
        run_list(root, config);
        return;
    }

    match amalgamate(&root, config) {
        Ok(result) => print_report(&result, report, pretty),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(feature = "logging"))]
fn init_logging(_verbose: bool) {}

fn run_list(root: PathBuf, config: TraversalConfig) {
    match plan(&root, config) {
        Ok(paths) => {
            for path in paths {
                println!("{}", amalgamate::output::normalize_path(&path));
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn print_report(result: &AmalgamationReport, report: Report, pretty: bool) {
    match report {
        Report::Message => {
            println!("Successfully created '{}'", result.output_path.display());
        }
        Report::Json => {
            let json = if pretty {
                serde_json::to_string_pretty(result)
            } else {
                serde_json::to_string(result)
            }
            .unwrap_or_else(|e| {
                eprintln!("JSON serialization error: {}", e);
                exit(1);
            });
            println!("{}", json);
        }
    }
}
