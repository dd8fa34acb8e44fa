//! Workspace configuration
//!
//! Configuration is stored in `.interviewer/config.toml`. A missing file
//! means defaults.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{InterviewError, Result};

pub use types::{
    Config, DEFAULT_DURATION_LABEL, DEFAULT_HANDOFF_TTL_MINUTES, WORKSPACE_FORMAT_VERSION,
};

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| InterviewError::io_operation("read", path.display(), e))?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;

        if config.version > WORKSPACE_FORMAT_VERSION {
            tracing::warn!(
                version = config.version,
                supported = WORKSPACE_FORMAT_VERSION,
                "workspace was created by a newer interviewer"
            );
        }

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is missing
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| InterviewError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| InterviewError::io_operation("write", path.display(), e))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.duration_label.trim().is_empty() {
            bail_invalid!("duration_label", "(empty)");
        }
        if self.handoff_ttl_minutes == 0 {
            bail_invalid!("handoff_ttl_minutes", 0);
        }
        Ok(())
    }
}
