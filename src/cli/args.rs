//! CLI argument definitions using clap.
//!
//! todoscan has a single command: `todoscan [PATH]`, where `PATH` is the
//! root directory to scan and defaults to the current directory.

use std::{num::NonZeroUsize, path::PathBuf};

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// Machine-readable JSON document
    Json,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Root directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// File extension to scan, without the dot (default: go)
    /// Can be specified multiple times: -e go -e rs
    #[arg(short, long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Do not attribute TODOs with git blame
    #[arg(long)]
    pub no_blame: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Number of worker threads used for scanning (default: number of CPUs)
    #[arg(short, long)]
    pub jobs: Option<NonZeroUsize>,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors to stderr
    #[arg(short, long)]
    pub quiet: bool,
}
