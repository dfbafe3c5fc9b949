//! State backing the "Revert to Checkpoint" submenu.

use nbw_core::{Checkpoint, CheckpointId};

use crate::menu::checkpoints::{CheckpointEntry, checkpoint_entries};

/// The current checkpoint list, as last reported over the notification bus.
///
/// Updates replace the list wholesale; there is no merging with previous
/// contents. On macOS an update also rebuilds the native submenu in place.
#[derive(Debug, Clone, Default)]
pub struct RestoreCheckpointMenu {
    checkpoints: Vec<Checkpoint>,
}

impl RestoreCheckpointMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list with a freshly received one. `None` is treated the
    /// same as an empty list.
    pub fn update(&mut self, checkpoints: Option<Vec<Checkpoint>>) {
        self.checkpoints = checkpoints.unwrap_or_default();
        tracing::debug!(count = self.checkpoints.len(), "checkpoint menu rebuilt");

        #[cfg(target_os = "macos")]
        crate::menu::native::update_restore_checkpoint_menu(&self.checkpoints);
    }

    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    /// Look up a checkpoint by id in the current list.
    ///
    /// Activation resolves through here at click time, so an entry from a
    /// list that has since been replaced simply misses.
    pub fn get(&self, id: &CheckpointId) -> Option<&Checkpoint> {
        self.checkpoints.iter().find(|cp| &cp.id == id)
    }

    /// Render-ready entries for the in-app submenu.
    pub fn entries(&self) -> Vec<CheckpointEntry> {
        checkpoint_entries(&self.checkpoints)
    }
}
