//! Markdown export of a finished interview

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::{InterviewError, Result};
use crate::scoring::{Assessment, MAX_CRITERION_SCORE};
use crate::snapshot::Snapshot;
use crate::track::InterviewTrack;

pub const NO_EVIDENCE: &str = "No evidence provided";
pub const NO_NOTES: &str = "No notes taken.";
pub const NO_RED_FLAGS: &str = "No red flags identified.";

/// Render the summary document. Identical input gives identical output.
pub fn render_markdown(snapshot: &Snapshot, assessment: &Assessment) -> String {
    let mut md = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(md, "# Interview Summary\n");

    let _ = writeln!(md, "## Interview Overview\n");
    let _ = writeln!(md, "- **Track:** {}", snapshot.track.as_str().to_uppercase());
    let _ = writeln!(md, "- **Date:** {}", snapshot.date.format("%Y-%m-%d"));
    let _ = writeln!(md, "- **Duration:** {}\n", snapshot.duration);

    let _ = writeln!(md, "## Final Decision\n");
    let _ = writeln!(md, "**Verdict:** {}\n", assessment.verdict.label());
    let _ = writeln!(
        md,
        "**Score:** {}/{}\n",
        assessment.total_score, assessment.max_score
    );
    if assessment.has_red_flags {
        let _ = writeln!(md, "**Red Flags Identified**\n");
    }

    let _ = writeln!(md, "## Scoring Rubric Breakdown\n");
    for criterion in &snapshot.rubric.criteria {
        let _ = writeln!(md, "### {}\n", criterion.name);
        let _ = writeln!(
            md,
            "**Score:** {}/{}\n",
            snapshot.score_for(&criterion.id),
            MAX_CRITERION_SCORE
        );
        let evidence = snapshot.evidence_for(&criterion.id).unwrap_or(NO_EVIDENCE);
        let _ = writeln!(md, "**Evidence:** {}\n", evidence);
    }

    let _ = writeln!(md, "## Interview Notes\n");
    let notes = snapshot.notes.trim_end();
    if notes.trim().is_empty() {
        let _ = writeln!(md, "{}\n", NO_NOTES);
    } else {
        let _ = writeln!(md, "{}\n", notes);
    }

    let _ = writeln!(md, "## Red Flags\n");
    let raised = snapshot.raised_red_flags();
    if raised.is_empty() {
        let _ = writeln!(md, "{}\n", NO_RED_FLAGS);
    } else {
        for flag in raised {
            let _ = writeln!(md, "- {}", flag);
        }
        md.push('\n');
    }

    let _ = writeln!(md, "## Questions Covered\n");
    for block in snapshot.coverage() {
        let _ = writeln!(md, "### {} ({})\n", block.title, block.time_range);
        for question in &block.questions {
            let _ = writeln!(md, "- {}", question);
        }
        md.push('\n');
    }

    // Single trailing newline.
    let trimmed = md.trim_end().len();
    md.truncate(trimmed);
    md.push('\n');
    md
}

/// `interview-summary-<track>-<unix millis>.md`
pub fn export_filename(track: InterviewTrack, at: DateTime<Utc>) -> String {
    format!("interview-summary-{}-{}.md", track, at.timestamp_millis())
}

/// Write the rendered document into `dir`, creating it if needed
pub fn write_export(
    dir: &Path,
    snapshot: &Snapshot,
    assessment: &Assessment,
    at: DateTime<Utc>,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .map_err(|e| InterviewError::io_operation("create", dir.display(), e))?;
    let path = dir.join(export_filename(snapshot.track, at));
    fs::write(&path, render_markdown(snapshot, assessment))
        .map_err(|e| InterviewError::io_operation("write", path.display(), e))?;
    tracing::info!(path = %path.display(), "export_written");
    Ok(path)
}
