//! Summary view of a finished interview

use serde::Serialize;

use crate::bank::ScoringCriterion;
use crate::scoring::{Assessment, MAX_CRITERION_SCORE};
use crate::snapshot::{BlockCoverage, Snapshot};

/// Hint shown when there is nothing to summarize
pub const NO_SUMMARY_HINT: &str =
    "No finished interview to summarize. Start one with `interviewer run <track>`.";

/// Per-criterion line of the rubric breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriterionResult {
    pub id: String,
    pub name: String,
    pub score: u8,
    pub max: u8,
    pub evidence: Option<String>,
}

/// Everything the summary screen shows, rebuilt from a snapshot
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub snapshot: Snapshot,
    pub assessment: Assessment,
    pub criteria: Vec<CriterionResult>,
    pub red_flags: Vec<String>,
    pub coverage: Vec<BlockCoverage>,
}

impl Summary {
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let assessment = snapshot.assessment();
        let criteria = snapshot
            .rubric
            .criteria
            .iter()
            .map(|c| criterion_result(&snapshot, c))
            .collect();
        let red_flags = snapshot
            .raised_red_flags()
            .into_iter()
            .map(str::to_string)
            .collect();
        let coverage = snapshot.coverage();

        Self {
            snapshot,
            assessment,
            criteria,
            red_flags,
            coverage,
        }
    }

    pub fn question_count(&self) -> usize {
        self.coverage.iter().map(|b| b.questions.len()).sum()
    }
}

fn criterion_result(snapshot: &Snapshot, criterion: &ScoringCriterion) -> CriterionResult {
    CriterionResult {
        id: criterion.id.clone(),
        name: criterion.name.clone(),
        score: snapshot.score_for(&criterion.id),
        max: MAX_CRITERION_SCORE,
        evidence: snapshot.evidence_for(&criterion.id).map(str::to_string),
    }
}
