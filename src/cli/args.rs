//! Command argument structures

use clap::Args;
use std::path::PathBuf;

use crate::cli::parse::parse_score_pair;
use interviewer_core::bank::Language;
use interviewer_core::scoring::Score;

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Track id: frontend, backend or fullstack
    pub track: String,

    /// Only show one block (number or id)
    #[arg(long)]
    pub block: Option<String>,

    /// Include follow-up prompts and expected answer direction
    #[arg(long)]
    pub details: bool,

    /// Question language (en, ru); defaults to the workspace setting
    #[arg(long)]
    pub lang: Option<Language>,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Track to start with; omit to choose inside the session
    pub track: Option<String>,

    /// Read session commands from a file instead of stdin
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Print the summary on finish instead of handing it off
    #[arg(long)]
    pub summary: bool,

    /// Question language (en, ru); defaults to the workspace setting
    #[arg(long)]
    pub lang: Option<Language>,
}

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Leave the finished interview in place for a later `summary` or `export`
    #[arg(long)]
    pub keep: bool,

    /// Also write the Markdown document
    #[arg(long)]
    pub export: bool,

    /// Export directory (default: workspace exports/)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export directory (default: workspace exports/)
    #[arg(long, short, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the document instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Args, Debug)]
pub struct VerdictArgs {
    /// Score against this track's rubric
    #[arg(long)]
    pub track: Option<String>,

    /// Criterion score as `criterion=0..3` (repeatable)
    #[arg(long = "score", value_parser = parse_score_pair, action = clap::ArgAction::Append)]
    pub scores: Vec<(String, Score)>,

    /// Raised red flag, by label or number (repeatable)
    #[arg(long = "flag", action = clap::ArgAction::Append)]
    pub flags: Vec<String>,
}
