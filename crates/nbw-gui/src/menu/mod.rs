//! Menu module for Notebook Workbench.
//!
//! This module provides both native and in-app menu support:
//!
//! - **macOS**: native menu bar via the `muda` crate
//! - **Windows/Linux**: in-app menu bar rendered with Iced
//!
//! Both paths funnel into the same action table: [`menu_event_to_action`]
//! maps a menu item identifier to a [`MenuAction`], and the handler layer
//! turns actions into collaborator calls. The identifier set below is the
//! component's complete, auditable binding table.

pub mod checkpoints;
pub mod in_app;
#[cfg(target_os = "macos")]
pub mod native;

pub use in_app::{MenuBarState, view_menu_bar};

use nbw_core::HeadingLevel;

use crate::message::MenuAction;

/// Menu item identifiers.
///
/// These mirror the element ids of the classic notebook page, one per menu
/// item, and are the keys of the action table.
pub mod ids {
    // File menu
    pub const NEW_NOTEBOOK: &str = "new_notebook";
    pub const OPEN_NOTEBOOK: &str = "open_notebook";
    pub const COPY_NOTEBOOK: &str = "copy_notebook";
    pub const RENAME_NOTEBOOK: &str = "rename_notebook";
    pub const SAVE_CHECKPOINT: &str = "save_checkpoint";
    pub const RESTORE_CHECKPOINT: &str = "restore_checkpoint";
    pub const DOWNLOAD_NOTEBOOK: &str = "download_ipynb";
    pub const KILL_AND_EXIT: &str = "kill_and_exit";

    // Revert to Checkpoint submenu
    /// Prefix for per-checkpoint entries (followed by the encoded id)
    pub const RESTORE_CHECKPOINT_PREFIX: &str = "restore_checkpoint:";
    /// Placeholder when no checkpoints exist
    pub const NO_CHECKPOINTS: &str = "no_checkpoints";

    // Edit menu
    pub const CUT_CELL: &str = "cut_cell";
    pub const COPY_CELL: &str = "copy_cell";
    pub const DELETE_CELL: &str = "delete_cell";
    pub const UNDELETE_CELL: &str = "undelete_cell";
    pub const SPLIT_CELL: &str = "split_cell";
    pub const MERGE_CELL_ABOVE: &str = "merge_cell_above";
    pub const MERGE_CELL_BELOW: &str = "merge_cell_below";
    pub const MOVE_CELL_UP: &str = "move_cell_up";
    pub const MOVE_CELL_DOWN: &str = "move_cell_down";
    pub const SELECT_PREVIOUS: &str = "select_previous";
    pub const SELECT_NEXT: &str = "select_next";
    pub const EDIT_METADATA: &str = "edit_nb_metadata";

    // View menu
    pub const TOGGLE_HEADER: &str = "toggle_header";
    pub const TOGGLE_TOOLBAR: &str = "toggle_toolbar";

    // Insert menu
    pub const INSERT_CELL_ABOVE: &str = "insert_cell_above";
    pub const INSERT_CELL_BELOW: &str = "insert_cell_below";

    // Cell menu
    pub const RUN_CELL: &str = "run_cell";
    pub const RUN_CELL_IN_PLACE: &str = "run_cell_in_place";
    pub const RUN_ALL_CELLS: &str = "run_all_cells";
    pub const RUN_ALL_CELLS_ABOVE: &str = "run_all_cells_above";
    pub const RUN_ALL_CELLS_BELOW: &str = "run_all_cells_below";
    pub const TO_CODE: &str = "to_code";
    pub const TO_MARKDOWN: &str = "to_markdown";
    pub const TO_RAW: &str = "to_raw";
    pub const TO_HEADING_1: &str = "to_heading1";
    pub const TO_HEADING_2: &str = "to_heading2";
    pub const TO_HEADING_3: &str = "to_heading3";
    pub const TO_HEADING_4: &str = "to_heading4";
    pub const TO_HEADING_5: &str = "to_heading5";
    pub const TO_HEADING_6: &str = "to_heading6";
    pub const TOGGLE_OUTPUT: &str = "toggle_output";
    pub const COLLAPSE_ALL_OUTPUT: &str = "collapse_all_output";
    pub const SCROLL_ALL_OUTPUT: &str = "scroll_all_output";
    pub const EXPAND_ALL_OUTPUT: &str = "expand_all_output";
    pub const CLEAR_ALL_OUTPUT: &str = "clear_all_output";

    // Kernel menu
    pub const INTERRUPT_KERNEL: &str = "int_kernel";
    pub const RESTART_KERNEL: &str = "restart_kernel";
}

/// Convert a menu item identifier to its action.
///
/// Returns `None` for identifiers that don't map to application actions
/// (predefined system items, the disabled placeholder, unknown ids).
pub fn menu_event_to_action(event_id: &str) -> Option<MenuAction> {
    // Per-checkpoint entries carry the encoded checkpoint id
    if let Some(encoded) = event_id.strip_prefix(ids::RESTORE_CHECKPOINT_PREFIX)
        && let Some(id) = checkpoints::decode_checkpoint_id(encoded)
    {
        return Some(MenuAction::RestoreCheckpoint(id));
    }

    match event_id {
        // File menu
        ids::NEW_NOTEBOOK => Some(MenuAction::NewNotebook),
        ids::OPEN_NOTEBOOK => Some(MenuAction::OpenNotebook),
        ids::COPY_NOTEBOOK => Some(MenuAction::CopyNotebook),
        ids::RENAME_NOTEBOOK => Some(MenuAction::RenameNotebook),
        ids::SAVE_CHECKPOINT => Some(MenuAction::SaveCheckpoint),
        ids::RESTORE_CHECKPOINT => Some(MenuAction::RestoreCheckpointMenu),
        ids::DOWNLOAD_NOTEBOOK => Some(MenuAction::DownloadNotebook),
        ids::KILL_AND_EXIT => Some(MenuAction::KillAndExit),

        // Edit menu
        ids::CUT_CELL => Some(MenuAction::CutCell),
        ids::COPY_CELL => Some(MenuAction::CopyCell),
        ids::DELETE_CELL => Some(MenuAction::DeleteCell),
        ids::UNDELETE_CELL => Some(MenuAction::UndeleteCell),
        ids::SPLIT_CELL => Some(MenuAction::SplitCell),
        ids::MERGE_CELL_ABOVE => Some(MenuAction::MergeCellAbove),
        ids::MERGE_CELL_BELOW => Some(MenuAction::MergeCellBelow),
        ids::MOVE_CELL_UP => Some(MenuAction::MoveCellUp),
        ids::MOVE_CELL_DOWN => Some(MenuAction::MoveCellDown),
        ids::SELECT_PREVIOUS => Some(MenuAction::SelectPrevious),
        ids::SELECT_NEXT => Some(MenuAction::SelectNext),
        ids::EDIT_METADATA => Some(MenuAction::EditMetadata),

        // View menu
        ids::TOGGLE_HEADER => Some(MenuAction::ToggleHeader),
        ids::TOGGLE_TOOLBAR => Some(MenuAction::ToggleToolbar),

        // Insert menu
        ids::INSERT_CELL_ABOVE => Some(MenuAction::InsertCellAbove),
        ids::INSERT_CELL_BELOW => Some(MenuAction::InsertCellBelow),

        // Cell menu
        ids::RUN_CELL => Some(MenuAction::RunCell),
        ids::RUN_CELL_IN_PLACE => Some(MenuAction::RunCellInPlace),
        ids::RUN_ALL_CELLS => Some(MenuAction::RunAllCells),
        ids::RUN_ALL_CELLS_ABOVE => Some(MenuAction::RunAllCellsAbove),
        ids::RUN_ALL_CELLS_BELOW => Some(MenuAction::RunAllCellsBelow),
        ids::TO_CODE => Some(MenuAction::ToCode),
        ids::TO_MARKDOWN => Some(MenuAction::ToMarkdown),
        ids::TO_RAW => Some(MenuAction::ToRaw),
        ids::TO_HEADING_1 => Some(MenuAction::ToHeading(HeadingLevel::H1)),
        ids::TO_HEADING_2 => Some(MenuAction::ToHeading(HeadingLevel::H2)),
        ids::TO_HEADING_3 => Some(MenuAction::ToHeading(HeadingLevel::H3)),
        ids::TO_HEADING_4 => Some(MenuAction::ToHeading(HeadingLevel::H4)),
        ids::TO_HEADING_5 => Some(MenuAction::ToHeading(HeadingLevel::H5)),
        ids::TO_HEADING_6 => Some(MenuAction::ToHeading(HeadingLevel::H6)),
        ids::TOGGLE_OUTPUT => Some(MenuAction::ToggleOutput),
        ids::COLLAPSE_ALL_OUTPUT => Some(MenuAction::CollapseAllOutput),
        ids::SCROLL_ALL_OUTPUT => Some(MenuAction::ScrollAllOutput),
        ids::EXPAND_ALL_OUTPUT => Some(MenuAction::ExpandAllOutput),
        ids::CLEAR_ALL_OUTPUT => Some(MenuAction::ClearAllOutput),

        // Kernel menu
        ids::INTERRUPT_KERNEL => Some(MenuAction::InterruptKernel),
        ids::RESTART_KERNEL => Some(MenuAction::RestartKernel),

        // Disabled placeholder or unknown
        _ => None,
    }
}

/// Poll for native menu events and convert them to actions.
///
/// Called from the application's tick handler. Returns `None` if no
/// events are pending.
#[cfg(target_os = "macos")]
pub fn poll_native_menu_event() -> Option<MenuAction> {
    let receiver = native::menu_event_receiver();
    match receiver.try_recv() {
        Ok(event) => menu_event_to_action(event.id().0.as_str()),
        Err(_) => None,
    }
}
