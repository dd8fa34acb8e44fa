//! Workspace-file hand-off with expire-on-read

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{Duration, Utc};
use tracing::{debug, warn};

use super::Handoff;
use crate::error::{InterviewError, Result};
use crate::snapshot::Snapshot;

/// Name of the pending-snapshot entry inside the workspace
pub const HANDOFF_FILE: &str = "handoff.json";

/// Single keyed entry in the workspace directory.
///
/// The entry is deleted when taken. Entries older than the TTL, or that fail
/// the snapshot schema check, are discarded and reported as absent.
#[derive(Debug, Clone)]
pub struct FileHandoff {
    path: PathBuf,
    ttl: Duration,
}

impl FileHandoff {
    pub fn new(workspace: &Path, ttl_minutes: u32) -> Self {
        Self {
            path: workspace.join(HANDOFF_FILE),
            ttl: Duration::minutes(i64::from(ttl_minutes)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_pending(&self) -> bool {
        self.path.is_file()
    }

    fn read(&self) -> Result<Option<Snapshot>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(InterviewError::io_operation("read", self.path.display(), e)),
        };

        let snapshot = match Snapshot::from_json(&content) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "discarding malformed hand-off");
                self.discard()?;
                return Ok(None);
            }
        };

        let age = Utc::now() - snapshot.date;
        if age > self.ttl {
            warn!(
                path = %self.path.display(),
                age_minutes = age.num_minutes(),
                "discarding expired hand-off"
            );
            self.discard()?;
            return Ok(None);
        }

        Ok(Some(snapshot))
    }

    fn discard(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(InterviewError::io_operation(
                "remove",
                self.path.display(),
                e,
            )),
        }
    }
}

impl Handoff for FileHandoff {
    fn put(&mut self, snapshot: Snapshot) -> Result<()> {
        if self.is_pending() {
            warn!(path = %self.path.display(), "replacing unread interview snapshot");
        }
        let json = snapshot.to_json()?;
        // Write then rename so a reader never sees a half-written entry.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .map_err(|e| InterviewError::io_operation("write", tmp.display(), e))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| InterviewError::io_operation("write", self.path.display(), e))?;
        debug!(path = %self.path.display(), track = %snapshot.track, "handoff_put");
        Ok(())
    }

    fn take(&mut self) -> Result<Option<Snapshot>> {
        let snapshot = self.read()?;
        if snapshot.is_some() {
            self.discard()?;
            debug!(path = %self.path.display(), "handoff_take");
        }
        Ok(snapshot)
    }

    fn peek(&self) -> Result<Option<Snapshot>> {
        self.read()
    }
}
