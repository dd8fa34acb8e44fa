//! Interview session state machine
//!
//! `Unstarted -> InProgress -> Finished`. A session only moves forward: once
//! finished, its data lives on in the [`Snapshot`] and the session itself
//! accepts no further actions.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::bank::{InterviewBlock, InterviewPlan, Question};
use crate::error::{InterviewError, Result};
use crate::plan;
use crate::scoring::Score;
use crate::snapshot::Snapshot;
use crate::track::InterviewTrack;

/// Everything the interviewer can do to a session
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectTrack(InterviewTrack),
    SelectBlock(usize),
    AdvanceBlock,
    SelectQuestion(Option<String>),
    SetNotes(String),
    AppendNote(String),
    SetScore { criterion: String, score: Score },
    SetEvidence { criterion: String, text: String },
    ToggleRedFlag { label: String, flagged: bool },
    Finish { at: DateTime<Utc>, duration: String },
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::SelectTrack(_) => "select a track",
            Action::SelectBlock(_) => "select a block",
            Action::AdvanceBlock => "advance to the next block",
            Action::SelectQuestion(_) => "select a question",
            Action::SetNotes(_) | Action::AppendNote(_) => "edit notes",
            Action::SetScore { .. } => "score a criterion",
            Action::SetEvidence { .. } => "record evidence",
            Action::ToggleRedFlag { .. } => "toggle a red flag",
            Action::Finish { .. } => "finish the interview",
        }
    }
}

/// Session lifecycle
#[derive(Debug, Default)]
pub enum Session {
    #[default]
    Unstarted,
    InProgress(ActiveInterview),
    Finished,
}

impl Session {
    pub fn new() -> Self {
        Session::Unstarted
    }

    pub fn state_name(&self) -> &'static str {
        match self {
            Session::Unstarted => "unstarted",
            Session::InProgress(_) => "in progress",
            Session::Finished => "finished",
        }
    }

    pub fn active(&self) -> Option<&ActiveInterview> {
        match self {
            Session::InProgress(active) => Some(active),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Session::Finished)
    }

    /// Apply one action. Returns the snapshot when the action finished the
    /// interview.
    pub fn apply(&mut self, action: Action) -> Result<Option<Snapshot>> {
        let action = match action {
            Action::Finish { at, duration } => return self.finish(at, duration),
            other => other,
        };

        match self {
            Session::Unstarted => match action {
                Action::SelectTrack(track) => {
                    *self = Session::InProgress(ActiveInterview::start(plan::resolve(track)?));
                    Ok(None)
                }
                other => Err(InterviewError::invalid_transition(
                    other.name(),
                    "unstarted",
                )),
            },
            Session::InProgress(active) => {
                active.update(action)?;
                Ok(None)
            }
            Session::Finished => Err(InterviewError::invalid_transition(
                action.name(),
                "finished",
            )),
        }
    }

    fn finish(&mut self, at: DateTime<Utc>, duration: String) -> Result<Option<Snapshot>> {
        match std::mem::replace(self, Session::Finished) {
            Session::InProgress(active) => Ok(Some(active.finish(at, duration))),
            other => {
                let state = other.state_name();
                *self = other;
                Err(InterviewError::invalid_transition(
                    "finish the interview",
                    state,
                ))
            }
        }
    }
}

/// State of an interview in progress
#[derive(Debug, Clone)]
pub struct ActiveInterview {
    plan: &'static InterviewPlan,
    block_index: usize,
    selected_question: Option<String>,
    notes: String,
    scores: BTreeMap<String, Score>,
    evidence: BTreeMap<String, String>,
    red_flags: BTreeMap<String, bool>,
}

impl ActiveInterview {
    /// Start at the first block with nothing selected and nothing recorded
    pub fn start(plan: &'static InterviewPlan) -> Self {
        debug!(track = %plan.track, "session_start");
        Self {
            plan,
            block_index: 0,
            selected_question: None,
            notes: String::new(),
            scores: BTreeMap::new(),
            evidence: BTreeMap::new(),
            red_flags: BTreeMap::new(),
        }
    }

    pub fn plan(&self) -> &'static InterviewPlan {
        self.plan
    }

    pub fn track(&self) -> InterviewTrack {
        self.plan.track
    }

    pub fn block_index(&self) -> usize {
        self.block_index
    }

    pub fn current_block(&self) -> &'static InterviewBlock {
        &self.plan.blocks[self.block_index]
    }

    pub fn is_last_block(&self) -> bool {
        self.block_index == self.plan.last_index()
    }

    pub fn selected_question(&self) -> Option<&'static Question> {
        self.selected_question
            .as_deref()
            .and_then(|id| self.current_block().question(id))
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn scores(&self) -> &BTreeMap<String, Score> {
        &self.scores
    }

    pub fn evidence(&self) -> &BTreeMap<String, String> {
        &self.evidence
    }

    pub fn red_flags(&self) -> &BTreeMap<String, bool> {
        &self.red_flags
    }

    fn update(&mut self, action: Action) -> Result<()> {
        match action {
            Action::SelectBlock(index) => self.select_block(index),
            Action::AdvanceBlock => {
                self.advance_block();
                Ok(())
            }
            Action::SelectQuestion(id) => self.select_question(id.as_deref()),
            Action::SetNotes(text) => {
                self.set_notes(text);
                Ok(())
            }
            Action::AppendNote(line) => {
                self.append_note(&line);
                Ok(())
            }
            Action::SetScore { criterion, score } => self.set_score(&criterion, score),
            Action::SetEvidence { criterion, text } => self.set_evidence(&criterion, text),
            Action::ToggleRedFlag { label, flagged } => self.toggle_red_flag(&label, flagged),
            action @ (Action::SelectTrack(_) | Action::Finish { .. }) => Err(
                InterviewError::invalid_transition(action.name(), "in progress"),
            ),
        }
    }

    /// Jump to any block. Always clears the selected question, even when
    /// `index` is the current block.
    pub fn select_block(&mut self, index: usize) -> Result<()> {
        if self.plan.block(index).is_none() {
            return Err(InterviewError::BlockOutOfRange {
                number: index + 1,
                len: self.plan.blocks.len(),
            });
        }
        self.block_index = index;
        self.selected_question = None;
        debug!(block = %self.current_block().id, "select_block");
        Ok(())
    }

    /// Move forward one block. A no-op on the last block.
    pub fn advance_block(&mut self) {
        if self.is_last_block() {
            return;
        }
        self.block_index += 1;
        self.selected_question = None;
        debug!(block = %self.current_block().id, "advance_block");
    }

    /// Select a question of the current block, or clear the selection
    pub fn select_question(&mut self, id: Option<&str>) -> Result<()> {
        match id {
            None => self.selected_question = None,
            Some(id) => {
                let block = self.current_block();
                if !block.contains_question(id) {
                    return Err(InterviewError::QuestionNotInBlock {
                        question: id.to_string(),
                        block: block.id.clone(),
                    });
                }
                self.selected_question = Some(id.to_string());
            }
        }
        Ok(())
    }

    pub fn set_notes(&mut self, text: String) {
        self.notes = text;
    }

    pub fn append_note(&mut self, line: &str) {
        if !self.notes.is_empty() && !self.notes.ends_with('\n') {
            self.notes.push('\n');
        }
        self.notes.push_str(line);
    }

    pub fn set_score(&mut self, criterion: &str, score: Score) -> Result<()> {
        self.require_criterion(criterion)?;
        self.scores.insert(criterion.to_string(), score);
        Ok(())
    }

    pub fn set_evidence(&mut self, criterion: &str, text: String) -> Result<()> {
        self.require_criterion(criterion)?;
        self.evidence.insert(criterion.to_string(), text);
        Ok(())
    }

    pub fn toggle_red_flag(&mut self, label: &str, flagged: bool) -> Result<()> {
        if !self.plan.rubric.has_red_flag(label) {
            return Err(InterviewError::UnknownRedFlag {
                label: label.to_string(),
            });
        }
        self.red_flags.insert(label.to_string(), flagged);
        Ok(())
    }

    fn require_criterion(&self, criterion: &str) -> Result<()> {
        match self.plan.rubric.criterion(criterion) {
            Some(_) => Ok(()),
            None => Err(InterviewError::UnknownCriterion {
                id: criterion.to_string(),
            }),
        }
    }

    /// End the interview, producing the one and only snapshot of it
    pub fn finish(self, at: DateTime<Utc>, duration: String) -> Snapshot {
        debug!(track = %self.plan.track, scored = self.scores.len(), "session_finish");
        Snapshot {
            track: self.plan.track,
            notes: self.notes,
            scores: self.scores,
            red_flags: self.red_flags,
            evidence: self.evidence,
            rubric: self.plan.rubric.clone(),
            blocks: self.plan.blocks.clone(),
            date: at,
            duration,
        }
    }
}
