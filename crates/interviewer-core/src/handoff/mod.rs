//! Hand-off channel between the interview and summary stages
//!
//! A snapshot is written once when the interview finishes and read once by
//! whoever renders the summary. Reading with [`Handoff::take`] consumes it.

mod file;

pub use file::{FileHandoff, HANDOFF_FILE};

use crate::error::Result;
use crate::snapshot::Snapshot;

/// One-shot slot for a finished interview
pub trait Handoff {
    /// Store the snapshot, replacing any unread one
    fn put(&mut self, snapshot: Snapshot) -> Result<()>;

    /// Remove and return the pending snapshot
    fn take(&mut self) -> Result<Option<Snapshot>>;

    /// Return the pending snapshot without consuming it
    fn peek(&self) -> Result<Option<Snapshot>>;
}

/// In-process hand-off, for sessions that render their own summary
#[derive(Debug, Default)]
pub struct MemoryHandoff {
    slot: Option<Snapshot>,
}

impl MemoryHandoff {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Handoff for MemoryHandoff {
    fn put(&mut self, snapshot: Snapshot) -> Result<()> {
        if self.slot.is_some() {
            tracing::warn!("replacing unread interview snapshot");
        }
        self.slot = Some(snapshot);
        Ok(())
    }

    fn take(&mut self) -> Result<Option<Snapshot>> {
        Ok(self.slot.take())
    }

    fn peek(&self) -> Result<Option<Snapshot>> {
        Ok(self.slot.clone())
    }
}
