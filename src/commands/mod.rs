//! CLI commands for interviewer

pub mod dispatch;
pub mod export;
pub mod format;
pub mod init;
pub mod plan;
pub mod run;
pub mod summary;
pub mod tracks;
pub mod verdict;
