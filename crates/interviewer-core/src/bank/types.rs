//! Question bank type definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InterviewError;
use crate::track::InterviewTrack;

/// Display language for question text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl FromStr for Language {
    type Err = InterviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ru" => Ok(Language::Ru),
            other => Err(InterviewError::unsupported("language", other, "en, ru")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Ru => write!(f, "ru"),
        }
    }
}

/// Bilingual display text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalizedText {
    pub en: String,
    pub ru: String,
}

impl LocalizedText {
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Ru => &self.ru,
        }
    }
}

/// A suggested interview question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Question {
    pub id: String,
    pub text: LocalizedText,
    /// Follow-up prompts, in the order they should be tried
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prompts: Vec<String>,
    /// What a strong answer should move towards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_direction: Option<String>,
}

/// A time-boxed phase of the interview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InterviewBlock {
    pub id: String,
    pub title: String,
    /// Human-readable range, e.g. "5-20 min"
    pub time_range: String,
    /// Human-readable length, e.g. "15 min"
    pub duration: String,
    pub start_minute: u32,
    pub end_minute: u32,
    pub goal: String,
    pub questions: Vec<Question>,
}

impl InterviewBlock {
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn contains_question(&self, id: &str) -> bool {
        self.question(id).is_some()
    }

    /// Minutes left in this block at `elapsed` minutes into the interview.
    ///
    /// Display only; no session transition depends on it.
    pub fn minutes_left(&self, elapsed: u32) -> u32 {
        self.end_minute.saturating_sub(elapsed)
    }

    /// Whether the wall clock is inside this block's window
    pub fn is_current_at(&self, elapsed: u32) -> bool {
        elapsed >= self.start_minute && elapsed < self.end_minute
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringCriterion {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Scoring criteria and red-flag labels for a track
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Rubric {
    #[serde(default)]
    pub criteria: Vec<ScoringCriterion>,
    #[serde(default)]
    pub red_flags: Vec<String>,
}

impl Rubric {
    pub fn criterion(&self, id: &str) -> Option<&ScoringCriterion> {
        self.criteria.iter().find(|c| c.id == id)
    }

    pub fn has_red_flag(&self, label: &str) -> bool {
        self.red_flags.iter().any(|flag| flag == label)
    }

    /// Look up a red flag by its 1-based position
    pub fn red_flag_by_number(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|i| self.red_flags.get(i))
            .map(String::as_str)
    }

    /// Resolve a red flag typed by the interviewer: a 1-based number or the
    /// label itself, compared case-insensitively
    pub fn resolve_red_flag(&self, reference: &str) -> Option<&str> {
        let reference = reference.trim();
        if let Ok(number) = reference.parse::<usize>() {
            return self.red_flag_by_number(number);
        }
        self.red_flags
            .iter()
            .find(|label| label.eq_ignore_ascii_case(reference))
            .map(String::as_str)
    }
}

/// The full plan for one track: ordered blocks plus the rubric
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InterviewPlan {
    pub track: InterviewTrack,
    pub title: String,
    pub blocks: Vec<InterviewBlock>,
    pub rubric: Rubric,
}

impl InterviewPlan {
    pub fn block(&self, index: usize) -> Option<&InterviewBlock> {
        self.blocks.get(index)
    }

    pub fn block_index(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    /// Resolve a block reference, either a 1-based block number or a block
    /// id, to its index
    pub fn find_block(&self, reference: &str) -> Option<usize> {
        match reference.trim().parse::<usize>() {
            Ok(number) => number
                .checked_sub(1)
                .filter(|index| *index < self.blocks.len()),
            Err(_) => self.block_index(reference.trim()),
        }
    }

    pub fn last_index(&self) -> usize {
        self.blocks.len().saturating_sub(1)
    }

    pub fn question_count(&self) -> usize {
        self.blocks.iter().map(|b| b.questions.len()).sum()
    }

    /// Plan length in minutes, taken from the last block's end
    pub fn total_minutes(&self) -> u32 {
        self.blocks.last().map(|b| b.end_minute).unwrap_or(0)
    }
}
