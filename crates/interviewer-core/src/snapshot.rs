//! Finished-interview snapshot
//!
//! The snapshot is the only thing that crosses from the interview stage to
//! the summary stage, and it must be self-sufficient: totals, the verdict
//! and the question coverage are all rebuilt from these fields alone.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bail_snapshot;
use crate::bank::{InterviewBlock, Rubric};
use crate::error::{InterviewError, Result};
use crate::scoring::{compute_verdict, Assessment, Score};
use crate::track::InterviewTrack;

/// Immutable copy of a finished interview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Snapshot {
    pub track: InterviewTrack,
    pub notes: String,
    pub scores: BTreeMap<String, Score>,
    pub red_flags: BTreeMap<String, bool>,
    pub evidence: BTreeMap<String, String>,
    pub rubric: Rubric,
    pub blocks: Vec<InterviewBlock>,
    pub date: DateTime<Utc>,
    pub duration: String,
}

/// One block's worth of the "questions covered" listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockCoverage {
    pub id: String,
    pub title: String,
    pub time_range: String,
    pub questions: Vec<String>,
}

impl Snapshot {
    /// Parse a hand-off payload and check it against the snapshot schema.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)
            .map_err(|e| InterviewError::invalid_snapshot(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Structural checks serde alone cannot express.
    ///
    /// Score range is enforced by [`Score`] during deserialization.
    pub fn validate(&self) -> Result<()> {
        if self.blocks.is_empty() {
            bail_snapshot!("snapshot has no blocks");
        }
        // A rubric without criteria is tolerated; scoring falls back to the default max.
        if !self.rubric.criteria.is_empty() {
            for id in self.scores.keys() {
                if self.rubric.criterion(id).is_none() {
                    bail_snapshot!("score for unknown criterion {id}");
                }
            }
            for id in self.evidence.keys() {
                if self.rubric.criterion(id).is_none() {
                    bail_snapshot!("evidence for unknown criterion {id}");
                }
            }
        }
        for label in self.red_flags.keys() {
            if !self.rubric.has_red_flag(label) {
                bail_snapshot!("unknown red flag {label:?}");
            }
        }
        Ok(())
    }

    pub fn assessment(&self) -> Assessment {
        compute_verdict(&self.scores, &self.rubric, &self.red_flags)
    }

    /// Red-flag labels that are set, in rubric order
    pub fn raised_red_flags(&self) -> Vec<&str> {
        self.rubric
            .red_flags
            .iter()
            .filter(|label| self.red_flags.get(label.as_str()).copied().unwrap_or(false))
            .map(String::as_str)
            .collect()
    }

    /// Score for a criterion, 0 when unscored
    pub fn score_for(&self, criterion: &str) -> u8 {
        self.scores.get(criterion).map(|s| s.value()).unwrap_or(0)
    }

    /// Evidence for a criterion, `None` when missing or blank
    pub fn evidence_for(&self, criterion: &str) -> Option<&str> {
        self.evidence
            .get(criterion)
            .map(String::as_str)
            .filter(|text| !text.trim().is_empty())
    }

    pub fn coverage(&self) -> Vec<BlockCoverage> {
        self.blocks
            .iter()
            .map(|block| BlockCoverage {
                id: block.id.clone(),
                title: block.title.clone(),
                time_range: block.time_range.clone(),
                questions: block.questions.iter().map(|q| q.text.en.clone()).collect(),
            })
            .collect()
    }
}
