//! `interviewer tracks` command - list interview tracks

use serde::Serialize;

use crate::cli::format::output_by_format;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json, print_records_header};
use interviewer_core::error::Result;
use interviewer_core::format::quote_record;
use interviewer_core::plan;
use interviewer_core::track::InterviewTrack;

#[derive(Debug, Serialize)]
struct TrackInfo {
    id: &'static str,
    label: &'static str,
    short_label: &'static str,
    description: &'static str,
    blocks: usize,
    questions: usize,
    criteria: usize,
    red_flags: usize,
}

fn track_info(track: InterviewTrack) -> Result<TrackInfo> {
    let plan = plan::resolve(track)?;
    Ok(TrackInfo {
        id: track.as_str(),
        label: track.label(),
        short_label: track.short_label(),
        description: track.description(),
        blocks: plan.blocks.len(),
        questions: plan.question_count(),
        criteria: plan.rubric.criteria.len(),
        red_flags: plan.rubric.red_flags.len(),
    })
}

/// Human track list, also shown by the session's track selection
pub fn print_track_list() {
    for track in InterviewTrack::ALL {
        println!(
            "  {:<10} {} ({}) - {}",
            track.as_str(),
            track.label(),
            track.short_label(),
            track.description()
        );
    }
}

/// Execute the tracks command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let infos = InterviewTrack::ALL
        .into_iter()
        .map(track_info)
        .collect::<Result<Vec<_>>>()?;

    output_by_format!(ctx.cli.format,
        json => print_json(&infos),
        human => {
            if !ctx.cli.quiet {
                println!("Available tracks:");
            }
            print_track_list();
        },
        records => {
            let count = infos.len().to_string();
            print_records_header("tracks", &[("count", count.as_str())]);
            for info in &infos {
                println!(
                    "T {} {} blocks={} questions={} criteria={} red_flags={}",
                    info.id,
                    quote_record(info.label),
                    info.blocks,
                    info.questions,
                    info.criteria,
                    info.red_flags
                );
            }
        }
    )
}
