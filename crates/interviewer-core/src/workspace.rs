//! Workspace management
//!
//! The workspace is the `.interviewer/` directory holding configuration, the
//! pending hand-off entry and default export output.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::error::{InterviewError, Result};
use crate::handoff::FileHandoff;

/// Workspace directory name
pub const WORKSPACE_DIR: &str = ".interviewer";

/// Configuration filename
pub const CONFIG_FILE: &str = "config.toml";

/// Default export subdirectory
pub const EXPORTS_DIR: &str = "exports";

/// Walk up from `root` to the nearest workspace directory
pub fn discover_workspace(root: &Path) -> Result<PathBuf> {
    let mut current = root.to_path_buf();

    loop {
        let candidate = current.join(WORKSPACE_DIR);
        if candidate.is_dir() {
            return Ok(candidate);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(InterviewError::WorkspaceNotFound {
                    search_root: root.to_path_buf(),
                });
            }
        }
    }
}

/// An opened workspace
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    config: Config,
}

impl Workspace {
    /// Discover a workspace by walking up from `root`
    pub fn discover(root: &Path) -> Result<Self> {
        let path = discover_workspace(root)?;
        Self::open(&path)
    }

    /// Open an existing workspace directory
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(InterviewError::WorkspaceNotFound {
                search_root: path.to_path_buf(),
            });
        }
        let config = Config::load_or_default(&path.join(CONFIG_FILE))?;
        Ok(Self {
            root: path.to_path_buf(),
            config,
        })
    }

    /// Create a workspace under `project_root`. Existing configuration is kept.
    pub fn init(project_root: &Path) -> Result<Self> {
        Self::init_at(&project_root.join(WORKSPACE_DIR))
    }

    /// Create a workspace at an explicit directory
    pub fn init_at(path: &Path) -> Result<Self> {
        fs::create_dir_all(path)
            .map_err(|e| InterviewError::io_operation("create", path.display(), e))?;

        let config_path = path.join(CONFIG_FILE);
        let config = if config_path.exists() {
            Config::load(&config_path)?
        } else {
            let config = Config::default();
            config.save(&config_path)?;
            debug!(path = %config_path.display(), "config_created");
            config
        };

        let workspace = Self {
            root: path.to_path_buf(),
            config,
        };
        let exports = workspace.export_dir();
        fs::create_dir_all(&exports)
            .map_err(|e| InterviewError::io_operation("create", exports.display(), e))?;
        Ok(workspace)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// Export directory, from config or the workspace default
    pub fn export_dir(&self) -> PathBuf {
        match &self.config.export_dir {
            Some(dir) => self.root.join(dir),
            None => self.root.join(EXPORTS_DIR),
        }
    }

    /// File-backed hand-off channel for this workspace
    pub fn handoff(&self) -> FileHandoff {
        FileHandoff::new(&self.root, self.config.handoff_ttl_minutes)
    }
}
