//! Core error types.

use thiserror::Error;

/// Errors surfaced by notebook collaborators.
///
/// The menu layer treats all of these as best-effort: it logs and moves on,
/// leaving user-facing reporting to the collaborator that failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotebookError {
    /// Saving the notebook document failed.
    #[error("failed to save notebook: {reason}")]
    Save { reason: String },

    /// The persistence layer rejected a checkpoint operation.
    #[error("checkpoint operation failed: {reason}")]
    Checkpoint { reason: String },
}
