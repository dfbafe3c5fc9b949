//! Menu actions.
//!
//! One variant per menu item. This enum is the component's behavioral
//! surface: every variant maps to exactly one collaborator effect in
//! [`crate::handler::MenuActionHandler`].

use nbw_core::{CheckpointId, HeadingLevel};

/// Actions triggered by menu items (native and in-app menus).
#[derive(Debug, Clone, PartialEq)]
pub enum MenuAction {
    // =========================================================================
    // File menu
    // =========================================================================
    /// Create a fresh notebook
    NewNotebook,

    /// Open the dashboard tree view in a new browser context
    OpenNotebook,

    /// Duplicate the current notebook
    CopyNotebook,

    /// Rename via the save widget's dialog
    RenameNotebook,

    /// Save a new checkpoint
    SaveCheckpoint,

    /// The "Revert to Checkpoint" submenu header itself.
    ///
    /// Intentionally a no-op: restores are wired on the per-checkpoint
    /// entries, but the header keeps its binding so the slot stays
    /// reserved.
    RestoreCheckpointMenu,

    /// Restore a specific checkpoint (confirmation is the notebook's job)
    RestoreCheckpoint(CheckpointId),

    /// Download the notebook file, saving first if dirty
    DownloadNotebook,

    /// Delete the session, then close the window
    KillAndExit,

    // =========================================================================
    // Edit menu
    // =========================================================================
    CutCell,
    CopyCell,
    DeleteCell,
    UndeleteCell,
    SplitCell,
    MergeCellAbove,
    MergeCellBelow,
    MoveCellUp,
    MoveCellDown,
    SelectPrevious,
    SelectNext,
    EditMetadata,

    // =========================================================================
    // View menu
    // =========================================================================
    /// Toggle the page header
    ToggleHeader,

    /// Toggle the main toolbar
    ToggleToolbar,

    // =========================================================================
    // Insert menu
    // =========================================================================
    InsertCellAbove,
    InsertCellBelow,

    // =========================================================================
    // Cell menu
    // =========================================================================
    RunCell,
    /// Run without advancing the selection (terminal-style)
    RunCellInPlace,
    RunAllCells,
    RunAllCellsAbove,
    RunAllCellsBelow,
    ToCode,
    ToMarkdown,
    ToRaw,
    ToHeading(HeadingLevel),
    ToggleOutput,
    CollapseAllOutput,
    ScrollAllOutput,
    ExpandAllOutput,
    ClearAllOutput,

    // =========================================================================
    // Kernel menu
    // =========================================================================
    InterruptKernel,
    RestartKernel,
}
