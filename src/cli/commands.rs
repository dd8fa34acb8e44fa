//! Main CLI commands enum

use clap::Subcommand;

use crate::cli::args::{ExportArgs, PlanArgs, RunArgs, SummaryArgs, VerdictArgs};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an interviewer workspace in the current directory
    Init,

    /// List the available interview tracks
    Tracks,

    /// Show the interview plan for a track
    Plan(PlanArgs),

    /// Run an interview session, reading commands from stdin or a script
    Run(RunArgs),

    /// Summarize the last finished interview
    Summary(SummaryArgs),

    /// Write the last finished interview as a Markdown document
    Export(ExportArgs),

    /// Compute a verdict from ad-hoc scores
    Verdict(VerdictArgs),
}
