//! Error types and exit codes for interviewer
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown track, illegal session step)
//! - 3: Data error (missing workspace, malformed hand-off or bank data)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the interviewer CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing workspace, invalid snapshot (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during interviewer operations
#[derive(Error, Debug)]
pub enum InterviewError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("unknown track: {0:?} (expected: frontend, backend, or fullstack)")]
    UnknownTrack(String),

    #[error("score must be between 0 and 3, got {0}")]
    InvalidScore(String),

    #[error("unknown criterion: {id}")]
    UnknownCriterion { id: String },

    #[error("unknown red flag: {label}")]
    UnknownRedFlag { label: String },

    /// `number` is 1-based, as blocks are shown to the interviewer
    #[error("block {number} is out of range (blocks are numbered 1 to {len})")]
    BlockOutOfRange { number: usize, len: usize },

    #[error("question {question} does not belong to block {block}")]
    QuestionNotInBlock { question: String, block: String },

    #[error("cannot {action} while the session is {state}")]
    InvalidTransition { action: String, state: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("workspace not found (searched from {search_root:?}); run `interviewer init`")]
    WorkspaceNotFound { search_root: PathBuf },

    #[error("invalid interview snapshot: {reason}")]
    InvalidSnapshot { reason: String },

    #[error("invalid question bank for {track}: {reason}")]
    InvalidBank { track: String, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl InterviewError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        InterviewError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        InterviewError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        InterviewError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a session step that the current state does not allow
    pub fn invalid_transition(action: &str, state: &str) -> Self {
        InterviewError::InvalidTransition {
            action: action.to_string(),
            state: state.to_string(),
        }
    }

    /// Create an error for a hand-off payload that failed the schema check
    pub fn invalid_snapshot(reason: impl Into<String>) -> Self {
        InterviewError::InvalidSnapshot {
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            InterviewError::UnknownFormat(_)
            | InterviewError::DuplicateFormat
            | InterviewError::UsageError(_)
            | InterviewError::UnknownTrack(_)
            | InterviewError::InvalidScore(_)
            | InterviewError::UnknownCriterion { .. }
            | InterviewError::UnknownRedFlag { .. }
            | InterviewError::BlockOutOfRange { .. }
            | InterviewError::QuestionNotInBlock { .. }
            | InterviewError::InvalidTransition { .. }
            | InterviewError::InvalidValue { .. }
            | InterviewError::Unsupported { .. } => ExitCode::Usage,

            InterviewError::WorkspaceNotFound { .. }
            | InterviewError::InvalidSnapshot { .. }
            | InterviewError::InvalidBank { .. } => ExitCode::Data,

            InterviewError::Io(_)
            | InterviewError::Json(_)
            | InterviewError::Toml(_)
            | InterviewError::FailedOperationWithTarget { .. }
            | InterviewError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            InterviewError::UnknownFormat(_) => "unknown_format",
            InterviewError::DuplicateFormat => "duplicate_format",
            InterviewError::UsageError(_) => "usage_error",
            InterviewError::UnknownTrack(_) => "unknown_track",
            InterviewError::InvalidScore(_) => "invalid_score",
            InterviewError::UnknownCriterion { .. } => "unknown_criterion",
            InterviewError::UnknownRedFlag { .. } => "unknown_red_flag",
            InterviewError::BlockOutOfRange { .. } => "block_out_of_range",
            InterviewError::QuestionNotInBlock { .. } => "question_not_in_block",
            InterviewError::InvalidTransition { .. } => "invalid_transition",
            InterviewError::InvalidValue { .. } => "invalid_value",
            InterviewError::Unsupported { .. } => "unsupported",
            InterviewError::WorkspaceNotFound { .. } => "workspace_not_found",
            InterviewError::InvalidSnapshot { .. } => "invalid_snapshot",
            InterviewError::InvalidBank { .. } => "invalid_bank",
            InterviewError::Io(_) => "io_error",
            InterviewError::Json(_) => "json_error",
            InterviewError::Toml(_) => "toml_error",
            InterviewError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            InterviewError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for interviewer operations
pub type Result<T> = std::result::Result<T, InterviewError>;
