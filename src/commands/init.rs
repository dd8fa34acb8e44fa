//! `interviewer init` command - create a workspace
//!
//! Idempotent: an existing workspace and its configuration are kept.

use serde_json::json;

use crate::cli::format::output_by_format;
use crate::cli::paths::resolve_against;
use crate::commands::dispatch::macros::trace_command;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json_status, print_records_header};
use interviewer_core::error::Result;
use interviewer_core::workspace::Workspace;

/// Execute the init command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let cli = ctx.cli;
    let workspace = match &cli.workspace {
        Some(path) => Workspace::init_at(&resolve_against(ctx.root, path))?,
        None => Workspace::init(ctx.root)?,
    };
    trace_command!(ctx.start, "init_workspace");

    let root = workspace.root().display().to_string();
    output_by_format!(cli.format,
        json => print_json_status(
            "ok",
            Some("Workspace initialized"),
            &[
                ("workspace", json!(root)),
                ("exports", json!(workspace.export_dir().display().to_string())),
            ],
        ),
        human => {
            if !cli.quiet {
                println!("Initialized interviewer workspace at {}", root);
                println!();
                println!("Run `interviewer run <track>` to start an interview.");
            }
        },
        records => {
            print_records_header("init", &[("workspace", root.as_str()), ("status", "ok")]);
        }
    )
}
