//! CLI argument parsing for interviewer
//!
//! Global flags: --root, --workspace, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod args;
pub mod commands;
pub mod format;
pub mod parse;
pub mod paths;

use clap::Parser;
use std::path::PathBuf;

pub use commands::Commands;
pub use interviewer_core::format::OutputFormat;

/// Interviewer - structured technical interview assistant
#[derive(Parser, Debug)]
#[command(name = "interviewer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the workspace
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit workspace directory
    #[arg(long, global = true, env = "INTERVIEWER_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Output format: human, json or records
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter: a level (error, warn, info, debug, trace) or a full directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
