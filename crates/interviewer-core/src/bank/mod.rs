//! Question banks
//!
//! One JSON document per track is compiled into the binary. Documents are
//! parsed and validated once (see [`crate::plan`]) and never change at runtime.

pub mod types;

use std::collections::HashSet;

use crate::error::{InterviewError, Result};
use crate::track::InterviewTrack;

pub use types::{
    InterviewBlock, InterviewPlan, Language, LocalizedText, Question, Rubric, ScoringCriterion,
};

const FRONTEND_BANK: &str = include_str!("data/frontend.json");
const BACKEND_BANK: &str = include_str!("data/backend.json");
const FULLSTACK_BANK: &str = include_str!("data/fullstack.json");

/// Raw bank document for a track
pub fn source(track: InterviewTrack) -> &'static str {
    match track {
        InterviewTrack::Frontend => FRONTEND_BANK,
        InterviewTrack::Backend => BACKEND_BANK,
        InterviewTrack::Fullstack => FULLSTACK_BANK,
    }
}

/// Parse and validate a bank document for `track`
pub fn parse_plan(track: InterviewTrack, json: &str) -> Result<InterviewPlan> {
    let plan: InterviewPlan = serde_json::from_str(json).map_err(|e| InterviewError::InvalidBank {
        track: track.to_string(),
        reason: e.to_string(),
    })?;
    validate_plan(track, &plan)?;
    Ok(plan)
}

fn validate_plan(track: InterviewTrack, plan: &InterviewPlan) -> Result<()> {
    let invalid = |reason: String| InterviewError::InvalidBank {
        track: track.to_string(),
        reason,
    };

    if plan.track != track {
        return Err(invalid(format!("document declares track {}", plan.track)));
    }
    if plan.blocks.is_empty() {
        return Err(invalid("plan has no blocks".to_string()));
    }
    if plan.rubric.criteria.is_empty() {
        return Err(invalid("rubric has no criteria".to_string()));
    }

    let mut block_ids = HashSet::new();
    let mut question_ids = HashSet::new();
    for block in &plan.blocks {
        if !block_ids.insert(block.id.as_str()) {
            return Err(invalid(format!("duplicate block id {}", block.id)));
        }
        if block.start_minute > block.end_minute {
            return Err(invalid(format!("block {} ends before it starts", block.id)));
        }
        for question in &block.questions {
            if !question_ids.insert(question.id.as_str()) {
                return Err(invalid(format!("duplicate question id {}", question.id)));
            }
        }
    }

    let mut criterion_ids = HashSet::new();
    for criterion in &plan.rubric.criteria {
        if !criterion_ids.insert(criterion.id.as_str()) {
            return Err(invalid(format!("duplicate criterion id {}", criterion.id)));
        }
    }

    let mut flags = HashSet::new();
    for flag in &plan.rubric.red_flags {
        if !flags.insert(flag.as_str()) {
            return Err(invalid(format!("duplicate red flag {flag:?}")));
        }
    }

    Ok(())
}
