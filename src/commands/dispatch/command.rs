//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::paths::resolve_against;
use crate::cli::Cli;
use interviewer_core::config::Config;
use interviewer_core::error::{InterviewError, Result};
use interviewer_core::workspace::Workspace;

/// Open `--workspace` when given, otherwise discover one from the root
pub fn discover_or_open_workspace(cli: &Cli, root: &Path) -> Result<Workspace> {
    match &cli.workspace {
        Some(path) => Workspace::open(&resolve_against(root, path)),
        None => Workspace::discover(root),
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    pub fn workspace(&self) -> Result<Workspace> {
        discover_or_open_workspace(self.cli, self.root)
    }

    /// Workspace if there is one. Commands that only read the question bank
    /// work without it.
    pub fn optional_workspace(&self) -> Result<Option<Workspace>> {
        match self.workspace() {
            Ok(workspace) => Ok(Some(workspace)),
            Err(InterviewError::WorkspaceNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Workspace configuration, or defaults outside a workspace
    pub fn config(&self) -> Result<Config> {
        Ok(self
            .optional_workspace()?
            .map(|w| w.config().clone())
            .unwrap_or_default())
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("interviewer {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("A structured technical interview assistant.");
        println!();
        println!("Run `interviewer --help` for usage information.");
        Ok(())
    }
}
