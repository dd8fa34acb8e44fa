//! Plan resolution
//!
//! Banks are parsed once per process and then shared read-only.

use std::sync::OnceLock;
use std::time::Instant;

use tracing::debug;

use crate::bank::{self, InterviewPlan};
use crate::error::{InterviewError, Result};
use crate::track::InterviewTrack;

struct Banks {
    frontend: InterviewPlan,
    backend: InterviewPlan,
    fullstack: InterviewPlan,
}

impl Banks {
    fn load() -> Result<Self> {
        let start = Instant::now();
        let banks = Banks {
            frontend: load_one(InterviewTrack::Frontend)?,
            backend: load_one(InterviewTrack::Backend)?,
            fullstack: load_one(InterviewTrack::Fullstack)?,
        };
        crate::trace_time!(start, "load_banks");
        Ok(banks)
    }

    fn get(&self, track: InterviewTrack) -> &InterviewPlan {
        match track {
            InterviewTrack::Frontend => &self.frontend,
            InterviewTrack::Backend => &self.backend,
            InterviewTrack::Fullstack => &self.fullstack,
        }
    }
}

fn load_one(track: InterviewTrack) -> Result<InterviewPlan> {
    bank::parse_plan(track, bank::source(track))
}

// Holds the error as (track, reason) since InterviewError is not Clone.
static BANKS: OnceLock<std::result::Result<Banks, (String, String)>> = OnceLock::new();

fn banks() -> Result<&'static Banks> {
    let loaded = BANKS.get_or_init(|| {
        Banks::load().map_err(|e| match e {
            InterviewError::InvalidBank { track, reason } => (track, reason),
            other => ("unknown".to_string(), other.to_string()),
        })
    });

    loaded
        .as_ref()
        .map_err(|(track, reason)| InterviewError::InvalidBank {
            track: track.clone(),
            reason: reason.clone(),
        })
}

/// Return the plan (blocks and rubric) for a track
pub fn resolve(track: InterviewTrack) -> Result<&'static InterviewPlan> {
    let plan = banks()?.get(track);
    debug!(
        track = %track,
        blocks = plan.blocks.len(),
        criteria = plan.rubric.criteria.len(),
        "resolve_plan"
    );
    Ok(plan)
}

/// Resolve a plan from a raw track id.
///
/// Anything outside `frontend`, `backend`, `fullstack` is an error; callers
/// never get an empty plan back.
pub fn resolve_id(id: &str) -> Result<&'static InterviewPlan> {
    resolve(id.parse()?)
}
