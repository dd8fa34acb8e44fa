//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::bank::Language;

/// Current workspace format version
pub const WORKSPACE_FORMAT_VERSION: u32 = 1;

/// Label recorded on every finished interview
pub const DEFAULT_DURATION_LABEL: &str = "60 min";

/// Hand-off entries older than this are discarded on read (24h)
pub const DEFAULT_HANDOFF_TTL_MINUTES: u32 = 1440;

/// Workspace configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Workspace format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Duration label stamped onto snapshots
    #[serde(default = "default_duration_label")]
    pub duration_label: String,

    /// Language for question text
    #[serde(default)]
    pub language: Language,

    /// Export directory override, relative paths resolve against the workspace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<String>,

    #[serde(default = "default_handoff_ttl")]
    pub handoff_ttl_minutes: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            duration_label: default_duration_label(),
            language: Language::default(),
            export_dir: None,
            handoff_ttl_minutes: default_handoff_ttl(),
        }
    }
}

fn default_version() -> u32 {
    WORKSPACE_FORMAT_VERSION
}

fn default_duration_label() -> String {
    DEFAULT_DURATION_LABEL.to_string()
}

fn default_handoff_ttl() -> u32 {
    DEFAULT_HANDOFF_TTL_MINUTES
}
