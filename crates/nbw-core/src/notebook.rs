//! The document controller interface.
//!
//! The menu bar never manipulates cells itself; every edit, selection, and
//! execution action is a single call on this trait. Implementations report
//! their own failures upstream (dialogs, toasts); the menu layer only logs.

use crate::checkpoint::Checkpoint;
use crate::error::NotebookError;

/// Cell kind for insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellType {
    Code,
    Markdown,
    Raw,
}

/// Heading level for cell conversion, 1 through 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    pub const ALL: [HeadingLevel; 6] = [
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
        HeadingLevel::H5,
        HeadingLevel::H6,
    ];

    pub fn level(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
            HeadingLevel::H5 => 5,
            HeadingLevel::H6 => 6,
        }
    }
}

/// Options for [`NotebookController::save_notebook`].
///
/// The download action forces `asynchronous: false` so the save completes
/// before navigation starts.
#[derive(Debug, Clone, Copy)]
pub struct SaveOptions {
    pub asynchronous: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self { asynchronous: true }
    }
}

/// Options for [`NotebookController::execute_selected_cell`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecuteOptions {
    /// Terminal-style execution: keep the cursor in place and re-open the
    /// cell for editing after the run.
    pub terminal: bool,
}

/// Cell-level and document-level operations exposed by the notebook.
///
/// Selection is index-based; `select(selected_index())` is the structural
/// focus-restoration rule the menu applies after every activation.
pub trait NotebookController {
    // Document
    fn new_notebook(&mut self);
    fn copy_notebook(&mut self);
    fn notebook_name(&self) -> String;
    fn is_dirty(&self) -> bool;
    fn save_notebook(&mut self, options: SaveOptions) -> Result<(), NotebookError>;
    fn save_checkpoint(&mut self);
    fn restore_checkpoint_dialog(&mut self, checkpoint: &Checkpoint);
    fn edit_metadata(&mut self);

    // Cell edits
    fn cut_cell(&mut self);
    fn copy_cell(&mut self);
    fn delete_cell(&mut self);
    fn undelete_cell(&mut self);
    fn split_cell(&mut self);
    fn merge_cell_above(&mut self);
    fn merge_cell_below(&mut self);
    fn move_cell_up(&mut self);
    fn move_cell_down(&mut self);
    fn insert_cell_above(&mut self, cell_type: CellType);
    fn insert_cell_below(&mut self, cell_type: CellType);

    // Selection
    fn select_prev(&mut self);
    fn select_next(&mut self);
    fn selected_index(&self) -> usize;
    fn select(&mut self, index: usize);

    // Execution
    fn execute_selected_cell(&mut self, options: ExecuteOptions);
    fn execute_all_cells(&mut self);
    fn execute_cells_above(&mut self);
    fn execute_cells_below(&mut self);

    // Cell type conversion
    fn to_code(&mut self);
    fn to_markdown(&mut self);
    fn to_raw(&mut self);
    fn to_heading(&mut self, level: HeadingLevel);

    // Output visibility
    fn toggle_output(&mut self);
    fn collapse_all_output(&mut self);
    fn scroll_all_output(&mut self);
    fn expand_all_output(&mut self);
    fn clear_all_output(&mut self);
}
