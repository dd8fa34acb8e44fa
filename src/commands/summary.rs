//! `interviewer summary` command - review the last finished interview
//!
//! The snapshot is consumed unless `--keep` is given, and only once any
//! requested export has been written. Without a pending snapshot the command
//! prints a hint and succeeds.

use std::path::Path;

use chrono::Utc;
use serde_json::json;

use crate::cli::args::SummaryArgs;
use crate::cli::format::output_by_format;
use crate::cli::paths::resolve_against;
use crate::cli::Cli;
use crate::commands::dispatch::macros::trace_command;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{
    print_json, print_json_status, print_records_data, print_records_header,
};
use interviewer_core::error::Result;
use interviewer_core::export::{write_export, NO_EVIDENCE, NO_NOTES, NO_RED_FLAGS};
use interviewer_core::format::quote_record;
use interviewer_core::handoff::Handoff;
use interviewer_core::summary::{Summary, NO_SUMMARY_HINT};

/// Execute the summary command
pub fn execute(ctx: &CommandContext, args: &SummaryArgs) -> Result<()> {
    let workspace = ctx.workspace()?;
    let mut channel = workspace.handoff();
    let snapshot = channel.peek()?;
    trace_command!(ctx.start, "read_handoff");

    let Some(snapshot) = snapshot else {
        return print_no_summary(ctx.cli);
    };
    let summary = Summary::from_snapshot(snapshot);

    let exported = if args.export {
        let dir = match &args.output {
            Some(path) => resolve_against(ctx.root, path),
            None => workspace.export_dir(),
        };
        Some(write_export(
            &dir,
            &summary.snapshot,
            &summary.assessment,
            Utc::now(),
        )?)
    } else {
        None
    };

    if !args.keep {
        channel.take()?;
    }

    render(ctx.cli, &summary, exported.as_deref())
}

/// Report that there is nothing to summarize
pub fn print_no_summary(cli: &Cli) -> Result<()> {
    output_by_format!(cli.format,
        json => print_json_status("empty", Some(NO_SUMMARY_HINT), &[]),
        human => {
            println!("{}", NO_SUMMARY_HINT);
        },
        records => {
            print_records_header("summary", &[("status", "empty")]);
        }
    )
}

/// Render a summary in the selected format
pub fn render(cli: &Cli, summary: &Summary, exported: Option<&Path>) -> Result<()> {
    output_by_format!(cli.format,
        json => print_json(&summary_json(summary, exported)),
        human => {
            render_human(summary, exported);
        },
        records => {
            render_records(summary, exported);
        }
    )
}

fn summary_json(summary: &Summary, exported: Option<&Path>) -> serde_json::Value {
    let snapshot = &summary.snapshot;
    let assessment = &summary.assessment;
    let mut value = json!({
        "track": snapshot.track,
        "date": snapshot.date.to_rfc3339(),
        "duration": snapshot.duration,
        "verdict": assessment.verdict.label(),
        "total_score": assessment.total_score,
        "max_score": assessment.max_score,
        "percentage": assessment.percentage,
        "has_red_flags": assessment.has_red_flags,
        "criteria": summary.criteria,
        "red_flags": summary.red_flags,
        "notes": snapshot.notes,
        "coverage": summary.coverage,
    });
    if let (Some(path), Some(obj)) = (exported, value.as_object_mut()) {
        obj.insert("export".to_string(), json!(path.display().to_string()));
    }
    value
}

fn render_human(summary: &Summary, exported: Option<&Path>) {
    let snapshot = &summary.snapshot;
    let assessment = &summary.assessment;

    println!(
        "Interview Summary: {}",
        snapshot.track.as_str().to_uppercase()
    );
    println!(
        "Date: {}  Duration: {}",
        snapshot.date.format("%Y-%m-%d"),
        snapshot.duration
    );
    println!();
    println!("Verdict: {}", assessment.verdict);
    println!(
        "Score:   {}/{} ({:.0}%)",
        assessment.total_score, assessment.max_score, assessment.percentage
    );
    if assessment.has_red_flags {
        println!("Red flags identified");
    }

    println!();
    println!("Rubric:");
    for criterion in &summary.criteria {
        println!(
            "  {:<28} {}/{}  {}",
            criterion.name,
            criterion.score,
            criterion.max,
            criterion.evidence.as_deref().unwrap_or(NO_EVIDENCE)
        );
    }

    println!();
    println!("Red flags:");
    if summary.red_flags.is_empty() {
        println!("  {}", NO_RED_FLAGS);
    }
    for label in &summary.red_flags {
        println!("  - {}", label);
    }

    println!();
    println!("Notes:");
    if snapshot.notes.trim().is_empty() {
        println!("  {}", NO_NOTES);
    }
    for line in snapshot.notes.lines() {
        println!("  {}", line);
    }

    println!();
    println!("Questions covered ({}):", summary.question_count());
    for block in &summary.coverage {
        println!("  {} ({})", block.title, block.time_range);
        for question in &block.questions {
            println!("    - {}", question);
        }
    }

    if let Some(path) = exported {
        println!();
        println!("Exported to {}", path.display());
    }
}

fn render_records(summary: &Summary, exported: Option<&Path>) {
    let snapshot = &summary.snapshot;
    let assessment = &summary.assessment;
    let verdict = quote_record(assessment.verdict.label());
    let total = assessment.total_score.to_string();
    let max = assessment.max_score.to_string();

    print_records_header(
        "summary",
        &[
            ("track", snapshot.track.as_str()),
            ("verdict", verdict.as_str()),
            ("total", total.as_str()),
            ("max", max.as_str()),
            (
                "red_flags",
                if assessment.has_red_flags { "yes" } else { "no" },
            ),
        ],
    );
    for criterion in &summary.criteria {
        println!(
            "S {} score={} max={} evidence={}",
            criterion.id,
            criterion.score,
            criterion.max,
            quote_record(criterion.evidence.as_deref().unwrap_or(""))
        );
    }
    for label in &summary.red_flags {
        println!("F {}", quote_record(label));
    }
    print_records_data("notes", &snapshot.notes);
    for block in &summary.coverage {
        for question in &block.questions {
            println!("Q {} {}", block.id, quote_record(question));
        }
    }
    if let Some(path) = exported {
        print_records_data("export", &path.display().to_string());
    }
}

