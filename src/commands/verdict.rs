//! `interviewer verdict` command - evaluate the verdict policy for ad-hoc scores
//!
//! With `--track` the scores and flags are checked against that track's
//! rubric. Without it the rubric is empty, every score counts and the max
//! falls back to the default.

use std::collections::BTreeMap;

use serde_json::json;

use crate::cli::args::VerdictArgs;
use crate::cli::format::output_by_format;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json, print_records_header};
use interviewer_core::bank::Rubric;
use interviewer_core::error::{InterviewError, Result};
use interviewer_core::format::quote_record;
use interviewer_core::plan;
use interviewer_core::scoring::{compute_verdict, Score};
use interviewer_core::track::InterviewTrack;

/// Execute the verdict command
pub fn execute(ctx: &CommandContext, args: &VerdictArgs) -> Result<()> {
    let track = args
        .track
        .as_deref()
        .map(str::parse::<InterviewTrack>)
        .transpose()?;
    let rubric = match track {
        Some(track) => plan::resolve(track)?.rubric.clone(),
        None => Rubric::default(),
    };

    let scores = collect_scores(&rubric, &args.scores)?;
    let red_flags = collect_flags(&rubric, &args.flags)?;
    let assessment = compute_verdict(&scores, &rubric, &red_flags);
    tracing::debug!(
        total = assessment.total_score,
        max = assessment.max_score,
        verdict = assessment.verdict.label(),
        "verdict"
    );

    output_by_format!(ctx.cli.format,
        json => print_json(&json!({
            "track": track,
            "verdict": assessment.verdict.label(),
            "total_score": assessment.total_score,
            "max_score": assessment.max_score,
            "percentage": assessment.percentage,
            "has_red_flags": assessment.has_red_flags,
        })),
        human => {
            println!("Verdict: {}", assessment.verdict);
            println!(
                "Score:   {}/{} ({:.0}%)",
                assessment.total_score, assessment.max_score, assessment.percentage
            );
            if assessment.has_red_flags {
                println!("Red flags identified");
            }
        },
        records => {
            let total = assessment.total_score.to_string();
            let max = assessment.max_score.to_string();
            let percentage = format!("{:.1}", assessment.percentage);
            let verdict = quote_record(assessment.verdict.label());
            print_records_header(
                "verdict",
                &[
                    ("verdict", verdict.as_str()),
                    ("total", total.as_str()),
                    ("max", max.as_str()),
                    ("percentage", percentage.as_str()),
                ],
            );
        }
    )
}

fn collect_scores(rubric: &Rubric, pairs: &[(String, Score)]) -> Result<BTreeMap<String, Score>> {
    let mut scores = BTreeMap::new();
    for (criterion, score) in pairs {
        if !rubric.criteria.is_empty() && rubric.criterion(criterion).is_none() {
            return Err(InterviewError::UnknownCriterion {
                id: criterion.clone(),
            });
        }
        scores.insert(criterion.clone(), *score);
    }
    Ok(scores)
}

fn collect_flags(rubric: &Rubric, references: &[String]) -> Result<BTreeMap<String, bool>> {
    let mut red_flags = BTreeMap::new();
    for reference in references {
        let label = if rubric.red_flags.is_empty() {
            reference.trim().to_string()
        } else {
            rubric
                .resolve_red_flag(reference)
                .map(str::to_string)
                .ok_or_else(|| InterviewError::UnknownRedFlag {
                    label: reference.clone(),
                })?
        };
        red_flags.insert(label, true);
    }
    Ok(red_flags)
}
