//! Score totals and the hire verdict
//!
//! Everything here is pure: the same scores, rubric and red flags always
//! produce the same [`Assessment`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bank::Rubric;
use crate::error::InterviewError;

/// Highest score a single criterion can receive
pub const MAX_CRITERION_SCORE: u8 = 3;

/// Max score used when a rubric arrives without any criteria
pub const DEFAULT_MAX_SCORE: u32 = 12;

/// A rubric score in 0..=3
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MAX: Score = Score(MAX_CRITERION_SCORE);

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Score {
    type Error = InterviewError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= MAX_CRITERION_SCORE {
            Ok(Score(value))
        } else {
            Err(InterviewError::InvalidScore(value.to_string()))
        }
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> u8 {
        score.0
    }
}

impl FromStr for Score {
    type Err = InterviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u8>()
            .map_err(|_| InterviewError::InvalidScore(s.to_string()))?;
        Score::try_from(value)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Final hire recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    StrongHire,
    Hire,
    StrongMaybe,
    NoHire,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::StrongHire => "Strong Hire",
            Verdict::Hire => "Hire",
            Verdict::StrongMaybe => "Strong Maybe",
            Verdict::NoHire => "No Hire",
        }
    }

    /// Rank used to compare verdicts; higher is more favourable
    pub fn tier(&self) -> u8 {
        match self {
            Verdict::NoHire => 0,
            Verdict::StrongMaybe => 1,
            Verdict::Hire => 2,
            Verdict::StrongHire => 3,
        }
    }

    /// Verdict policy. Red flags cap the result at Strong Maybe and never
    /// force No Hire.
    pub fn from_percentage(percentage: f64, has_red_flags: bool) -> Verdict {
        if has_red_flags {
            Verdict::StrongMaybe
        } else if percentage >= 85.0 {
            Verdict::StrongHire
        } else if percentage >= 70.0 {
            Verdict::Hire
        } else if percentage >= 50.0 {
            Verdict::StrongMaybe
        } else {
            Verdict::NoHire
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Totals and verdict for a finished interview
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Assessment {
    pub total_score: u32,
    pub max_score: u32,
    pub percentage: f64,
    pub has_red_flags: bool,
    pub verdict: Verdict,
}

/// Compute totals and the verdict.
///
/// Only scores for rubric criteria count towards the total, so
/// `0 <= total_score <= max_score` holds whenever the rubric has criteria.
/// A rubric with no criteria falls back to [`DEFAULT_MAX_SCORE`] and sums
/// every entry.
pub fn compute_verdict(
    scores: &BTreeMap<String, Score>,
    rubric: &Rubric,
    red_flags: &BTreeMap<String, bool>,
) -> Assessment {
    let (total_score, max_score) = if rubric.criteria.is_empty() {
        let total = scores.values().map(|s| u32::from(s.value())).sum();
        (total, DEFAULT_MAX_SCORE)
    } else {
        let total = rubric
            .criteria
            .iter()
            .filter_map(|c| scores.get(&c.id))
            .map(|s| u32::from(s.value()))
            .sum();
        let max = rubric.criteria.len() as u32 * u32::from(MAX_CRITERION_SCORE);
        (total, max)
    };

    let has_red_flags = red_flags.values().any(|flagged| *flagged);
    let percentage = f64::from(total_score) / f64::from(max_score) * 100.0;

    Assessment {
        total_score,
        max_score,
        percentage,
        has_red_flags,
        verdict: Verdict::from_percentage(percentage, has_red_flags),
    }
}
