//! Interviewer Core Library
//!
//! Domain logic for the interviewer assistant: question banks, the session
//! state machine, scoring, the hand-off channel and Markdown export.

pub mod bank;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod handoff;
pub mod logging;
pub mod plan;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod summary;
pub mod track;
pub mod workspace;
