//! `interviewer export` command - write the Markdown summary document

use chrono::Utc;
use serde_json::json;

use crate::cli::args::ExportArgs;
use crate::cli::format::output_by_format;
use crate::cli::paths::resolve_against;
use crate::commands::dispatch::macros::trace_command;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json_status, print_records_data, print_records_header};
use crate::commands::summary::print_no_summary;
use interviewer_core::error::Result;
use interviewer_core::export::{render_markdown, write_export};
use interviewer_core::handoff::Handoff;

/// Execute the export command
pub fn execute(ctx: &CommandContext, args: &ExportArgs) -> Result<()> {
    let cli = ctx.cli;
    let workspace = ctx.workspace()?;
    let mut channel = workspace.handoff();
    // Consumed only after the document is out; a failed write keeps it.
    let Some(snapshot) = channel.peek()? else {
        return print_no_summary(cli);
    };
    let assessment = snapshot.assessment();

    if args.stdout {
        print!("{}", render_markdown(&snapshot, &assessment));
        channel.take()?;
        return Ok(());
    }

    let dir = match &args.output {
        Some(path) => resolve_against(ctx.root, path),
        None => workspace.export_dir(),
    };
    let path = write_export(&dir, &snapshot, &assessment, Utc::now())?;
    trace_command!(ctx.start, "write_export");
    channel.take()?;

    let shown = path.display().to_string();
    output_by_format!(cli.format,
        json => print_json_status(
            "ok",
            Some("Interview summary exported"),
            &[
                ("path", json!(shown)),
                ("track", json!(snapshot.track)),
                ("verdict", json!(assessment.verdict.label())),
            ],
        ),
        human => {
            if cli.quiet {
                println!("{}", shown);
            } else {
                println!("Exported interview summary to {}", shown);
            }
        },
        records => {
            print_records_header("export", &[("track", snapshot.track.as_str()), ("status", "ok")]);
            print_records_data("path", &shown);
        }
    )
}
