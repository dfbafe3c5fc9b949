//! Menu action handler.
//!
//! The action table of the menu bar: one arm per menu item, one
//! collaborator call per activation. After every activation the current
//! cell selection is re-applied so keyboard focus returns to the document
//! no matter which collaborator the action touched.

use iced::Task;

use nbw_core::url::url_path_join;
use nbw_core::{CellType, CheckpointId, ExecuteOptions, SaveOptions};

use super::MessageHandler;
use crate::message::{MenuAction, Message};
use crate::state::AppState;
use crate::util::best_effort;

/// Handler for menu activations, from the native and the in-app bar alike.
pub struct MenuActionHandler;

impl MessageHandler<MenuAction> for MenuActionHandler {
    fn handle(&self, state: &mut AppState, msg: MenuAction) -> Task<Message> {
        // An activation closes any open in-app dropdown.
        state.menu_bar.close();

        tracing::debug!(action = ?msg, "menu action");

        match msg {
            // File
            MenuAction::NewNotebook => state.notebook.new_notebook(),
            MenuAction::OpenNotebook => open_tree_view(state),
            MenuAction::CopyNotebook => state.notebook.copy_notebook(),
            MenuAction::RenameNotebook => state.page.rename_notebook_dialog(),
            MenuAction::SaveCheckpoint => state.notebook.save_checkpoint(),
            MenuAction::RestoreCheckpointMenu => {
                // The submenu header itself does nothing; only its entries
                // restore. The binding stays so focus is still re-applied.
            }
            MenuAction::RestoreCheckpoint(id) => restore_checkpoint(state, &id),
            MenuAction::DownloadNotebook => download_notebook(state),
            MenuAction::KillAndExit => {
                // Shut the session down first; the window must not outlive
                // a click on "Close and Halt", but the server-side kernel
                // must not outlive the window either.
                state.session.delete();
                state.page.close_window();
            }

            // Edit
            MenuAction::CutCell => state.notebook.cut_cell(),
            MenuAction::CopyCell => state.notebook.copy_cell(),
            MenuAction::DeleteCell => state.notebook.delete_cell(),
            MenuAction::UndeleteCell => state.notebook.undelete_cell(),
            MenuAction::SplitCell => state.notebook.split_cell(),
            MenuAction::MergeCellAbove => state.notebook.merge_cell_above(),
            MenuAction::MergeCellBelow => state.notebook.merge_cell_below(),
            MenuAction::MoveCellUp => state.notebook.move_cell_up(),
            MenuAction::MoveCellDown => state.notebook.move_cell_down(),
            MenuAction::SelectPrevious => state.notebook.select_prev(),
            MenuAction::SelectNext => state.notebook.select_next(),
            MenuAction::EditMetadata => state.notebook.edit_metadata(),

            // View
            MenuAction::ToggleHeader => state.page.toggle_header(),
            MenuAction::ToggleToolbar => state.page.toggle_toolbar(),

            // Insert
            MenuAction::InsertCellAbove => state.notebook.insert_cell_above(CellType::Code),
            MenuAction::InsertCellBelow => state.notebook.insert_cell_below(CellType::Code),

            // Cell
            MenuAction::RunCell => state
                .notebook
                .execute_selected_cell(ExecuteOptions::default()),
            MenuAction::RunCellInPlace => state
                .notebook
                .execute_selected_cell(ExecuteOptions { terminal: true }),
            MenuAction::RunAllCells => state.notebook.execute_all_cells(),
            MenuAction::RunAllCellsAbove => state.notebook.execute_cells_above(),
            MenuAction::RunAllCellsBelow => state.notebook.execute_cells_below(),
            MenuAction::ToCode => state.notebook.to_code(),
            MenuAction::ToMarkdown => state.notebook.to_markdown(),
            MenuAction::ToRaw => state.notebook.to_raw(),
            MenuAction::ToHeading(level) => state.notebook.to_heading(level),
            MenuAction::ToggleOutput => state.notebook.toggle_output(),
            MenuAction::CollapseAllOutput => state.notebook.collapse_all_output(),
            MenuAction::ScrollAllOutput => state.notebook.scroll_all_output(),
            MenuAction::ExpandAllOutput => state.notebook.expand_all_output(),
            MenuAction::ClearAllOutput => state.notebook.clear_all_output(),

            // Kernel
            MenuAction::InterruptKernel => state.session.interrupt_kernel(),
            MenuAction::RestartKernel => state.session.restart_kernel(),
        }

        // Focus restoration: re-select the currently selected cell so the
        // keyboard target is the document again, not the menu.
        let index = state.notebook.selected_index();
        state.notebook.select(index);

        Task::none()
    }
}

/// Open the server's tree view for the notebook's directory in a new
/// browser context.
fn open_tree_view(state: &mut AppState) {
    let url = url_path_join(&[
        &state.config.base_project_url,
        "tree",
        &state.config.notebook_path(),
    ]);
    state.page.open_url(&url);
}

/// Save if needed, then navigate to the notebook file's download URL.
///
/// A dirty document is saved synchronously first so the served bytes match
/// what the user sees. A failed save is logged and the download proceeds
/// with the last saved state.
fn download_notebook(state: &mut AppState) {
    if state.notebook.is_dirty() {
        best_effort!(
            state
                .notebook
                .save_notebook(SaveOptions { asynchronous: false }),
            "saving notebook before download"
        );
    }

    let name = state.notebook.notebook_name();
    let url = url_path_join(&[
        &state.config.base_project_url,
        "files",
        &state.config.notebook_path(),
        &format!("{name}.ipynb"),
    ]);
    state.page.navigate(&url);
}

/// Resolve a submenu entry's id against the current list and open the
/// restore dialog for that exact record.
fn restore_checkpoint(state: &mut AppState, id: &CheckpointId) {
    // Look up at click time: entries from a submenu that has since been
    // rebuilt miss here instead of restoring a neighboring record.
    let Some(checkpoint) = state.restore_menu.get(id).cloned() else {
        tracing::warn!(%id, "checkpoint no longer listed; ignoring restore");
        return;
    };
    state.notebook.restore_checkpoint_dialog(&checkpoint);
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use chrono::{TimeZone, Utc};

    use nbw_core::{
        Checkpoint, EventBus, HeadingLevel, HostPage, NotebookController, NotebookError,
        PageConfig, SessionController,
    };

    use super::*;
    use crate::message::MenuBarMenuId;

    type CallLog = Rc<RefCell<Vec<String>>>;

    /// Notebook double that records every call into a shared log.
    struct RecordingNotebook {
        log: CallLog,
        dirty: bool,
        selected: usize,
        save_fails: bool,
    }

    impl RecordingNotebook {
        fn new(log: CallLog) -> Self {
            Self {
                log,
                dirty: false,
                selected: 3,
                save_fails: false,
            }
        }

        fn push(&self, call: impl Into<String>) {
            self.log.borrow_mut().push(call.into());
        }
    }

    impl NotebookController for RecordingNotebook {
        fn new_notebook(&mut self) {
            self.push("new_notebook");
        }
        fn copy_notebook(&mut self) {
            self.push("copy_notebook");
        }
        fn notebook_name(&self) -> String {
            "Analysis".to_owned()
        }
        fn is_dirty(&self) -> bool {
            self.dirty
        }
        fn save_notebook(&mut self, options: SaveOptions) -> Result<(), NotebookError> {
            self.push(format!("save_notebook(async={})", options.asynchronous));
            if self.save_fails {
                Err(NotebookError::Save {
                    reason: "disk full".to_owned(),
                })
            } else {
                self.dirty = false;
                Ok(())
            }
        }
        fn save_checkpoint(&mut self) {
            self.push("save_checkpoint");
        }
        fn restore_checkpoint_dialog(&mut self, checkpoint: &Checkpoint) {
            self.push(format!("restore_checkpoint_dialog({})", checkpoint.id));
        }
        fn edit_metadata(&mut self) {
            self.push("edit_metadata");
        }
        fn cut_cell(&mut self) {
            self.push("cut_cell");
        }
        fn copy_cell(&mut self) {
            self.push("copy_cell");
        }
        fn delete_cell(&mut self) {
            self.push("delete_cell");
        }
        fn undelete_cell(&mut self) {
            self.push("undelete_cell");
        }
        fn split_cell(&mut self) {
            self.push("split_cell");
        }
        fn merge_cell_above(&mut self) {
            self.push("merge_cell_above");
        }
        fn merge_cell_below(&mut self) {
            self.push("merge_cell_below");
        }
        fn move_cell_up(&mut self) {
            self.push("move_cell_up");
        }
        fn move_cell_down(&mut self) {
            self.push("move_cell_down");
        }
        fn insert_cell_above(&mut self, cell_type: CellType) {
            self.push(format!("insert_cell_above({cell_type:?})"));
        }
        fn insert_cell_below(&mut self, cell_type: CellType) {
            self.push(format!("insert_cell_below({cell_type:?})"));
        }
        fn select_prev(&mut self) {
            self.push("select_prev");
        }
        fn select_next(&mut self) {
            self.push("select_next");
        }
        fn selected_index(&self) -> usize {
            self.selected
        }
        fn select(&mut self, index: usize) {
            self.push(format!("select({index})"));
        }
        fn execute_selected_cell(&mut self, options: ExecuteOptions) {
            self.push(format!("execute_selected_cell(terminal={})", options.terminal));
        }
        fn execute_all_cells(&mut self) {
            self.push("execute_all_cells");
        }
        fn execute_cells_above(&mut self) {
            self.push("execute_cells_above");
        }
        fn execute_cells_below(&mut self) {
            self.push("execute_cells_below");
        }
        fn to_code(&mut self) {
            self.push("to_code");
        }
        fn to_markdown(&mut self) {
            self.push("to_markdown");
        }
        fn to_raw(&mut self) {
            self.push("to_raw");
        }
        fn to_heading(&mut self, level: HeadingLevel) {
            self.push(format!("to_heading({})", level.level()));
        }
        fn toggle_output(&mut self) {
            self.push("toggle_output");
        }
        fn collapse_all_output(&mut self) {
            self.push("collapse_all_output");
        }
        fn scroll_all_output(&mut self) {
            self.push("scroll_all_output");
        }
        fn expand_all_output(&mut self) {
            self.push("expand_all_output");
        }
        fn clear_all_output(&mut self) {
            self.push("clear_all_output");
        }
    }

    struct RecordingSession {
        log: CallLog,
    }

    impl SessionController for RecordingSession {
        fn interrupt_kernel(&mut self) {
            self.log.borrow_mut().push("interrupt_kernel".to_owned());
        }
        fn restart_kernel(&mut self) {
            self.log.borrow_mut().push("restart_kernel".to_owned());
        }
        fn delete(&mut self) {
            self.log.borrow_mut().push("session.delete".to_owned());
        }
    }

    struct RecordingPage {
        log: CallLog,
    }

    impl HostPage for RecordingPage {
        fn open_url(&mut self, url: &str) {
            self.log.borrow_mut().push(format!("open_url({url})"));
        }
        fn navigate(&mut self, url: &str) {
            self.log.borrow_mut().push(format!("navigate({url})"));
        }
        fn close_window(&mut self) {
            self.log.borrow_mut().push("close_window".to_owned());
        }
        fn rename_notebook_dialog(&mut self) {
            self.log.borrow_mut().push("rename_notebook_dialog".to_owned());
        }
        fn toggle_header(&mut self) {
            self.log.borrow_mut().push("toggle_header".to_owned());
        }
        fn toggle_toolbar(&mut self) {
            self.log.borrow_mut().push("toggle_toolbar".to_owned());
        }
    }

    fn test_state(config: PageConfig) -> (AppState, CallLog) {
        let log: CallLog = Rc::default();
        let bus = EventBus::new();
        let state = AppState::new(
            Box::new(RecordingNotebook::new(Rc::clone(&log))),
            Box::new(RecordingSession {
                log: Rc::clone(&log),
            }),
            Box::new(RecordingPage {
                log: Rc::clone(&log),
            }),
            config,
            bus.subscribe(),
        );
        (state, log)
    }

    fn test_state_with<F>(config: PageConfig, customize: F) -> (AppState, CallLog)
    where
        F: FnOnce(&mut RecordingNotebook),
    {
        let log: CallLog = Rc::default();
        let bus = EventBus::new();
        let mut notebook = RecordingNotebook::new(Rc::clone(&log));
        customize(&mut notebook);
        let state = AppState::new(
            Box::new(notebook),
            Box::new(RecordingSession {
                log: Rc::clone(&log),
            }),
            Box::new(RecordingPage {
                log: Rc::clone(&log),
            }),
            config,
            bus.subscribe(),
        );
        (state, log)
    }

    fn dispatch(state: &mut AppState, action: MenuAction) {
        let _ = MenuActionHandler.handle(state, action);
    }

    #[test]
    fn each_activation_makes_exactly_one_collaborator_call() {
        let cases: [(MenuAction, &str); 8] = [
            (MenuAction::NewNotebook, "new_notebook"),
            (MenuAction::CutCell, "cut_cell"),
            (MenuAction::UndeleteCell, "undelete_cell"),
            (MenuAction::MoveCellDown, "move_cell_down"),
            (MenuAction::EditMetadata, "edit_metadata"),
            (MenuAction::ToggleHeader, "toggle_header"),
            (MenuAction::InterruptKernel, "interrupt_kernel"),
            (MenuAction::RestartKernel, "restart_kernel"),
        ];

        for (action, expected) in cases {
            let (mut state, log) = test_state(PageConfig::default());
            dispatch(&mut state, action);

            // One collaborator call, then the focus re-select
            assert_eq!(*log.borrow(), vec![expected.to_owned(), "select(3)".to_owned()]);
        }
    }

    #[test]
    fn focus_is_restored_after_every_activation() {
        let actions = [
            MenuAction::SaveCheckpoint,
            MenuAction::RestoreCheckpointMenu,
            MenuAction::ToMarkdown,
            MenuAction::ToHeading(HeadingLevel::H4),
            MenuAction::ClearAllOutput,
            MenuAction::ToggleToolbar,
        ];

        for action in actions {
            let (mut state, log) = test_state(PageConfig::default());
            dispatch(&mut state, action);
            assert_eq!(
                log.borrow().last().map(String::as_str),
                Some("select(3)"),
                "selection not re-applied"
            );
        }
    }

    #[test]
    fn restore_checkpoint_header_performs_no_collaborator_call() {
        let (mut state, log) = test_state(PageConfig::default());
        dispatch(&mut state, MenuAction::RestoreCheckpointMenu);
        // Only the focus re-select
        assert_eq!(*log.borrow(), vec!["select(3)".to_owned()]);
    }

    #[test]
    fn insert_actions_insert_code_cells() {
        let (mut state, log) = test_state(PageConfig::default());
        dispatch(&mut state, MenuAction::InsertCellAbove);
        dispatch(&mut state, MenuAction::InsertCellBelow);

        let log = log.borrow();
        assert!(log.contains(&"insert_cell_above(Code)".to_owned()));
        assert!(log.contains(&"insert_cell_below(Code)".to_owned()));
    }

    #[test]
    fn run_in_place_is_terminal_mode() {
        let (mut state, log) = test_state(PageConfig::default());
        dispatch(&mut state, MenuAction::RunCell);
        dispatch(&mut state, MenuAction::RunCellInPlace);

        let log = log.borrow();
        assert!(log.contains(&"execute_selected_cell(terminal=false)".to_owned()));
        assert!(log.contains(&"execute_selected_cell(terminal=true)".to_owned()));
    }

    #[test]
    fn open_notebook_opens_the_tree_view_url() {
        let (mut state, log) =
            test_state(PageConfig::new("/user/alice/", "My%20Work/Sub%20Dir"));
        dispatch(&mut state, MenuAction::OpenNotebook);

        assert_eq!(
            log.borrow()[0],
            "open_url(/user/alice/tree/My Work/Sub Dir)"
        );
    }

    #[test]
    fn download_saves_synchronously_first_when_dirty() {
        let (mut state, log) = test_state_with(PageConfig::new("/", "proj"), |nb| {
            nb.dirty = true;
        });
        dispatch(&mut state, MenuAction::DownloadNotebook);

        let log = log.borrow();
        assert_eq!(log[0], "save_notebook(async=false)");
        assert_eq!(log[1], "navigate(/files/proj/Analysis.ipynb)");
    }

    #[test]
    fn download_skips_save_when_clean() {
        let (mut state, log) = test_state(PageConfig::new("/", "proj"));
        dispatch(&mut state, MenuAction::DownloadNotebook);

        let log = log.borrow();
        assert_eq!(log[0], "navigate(/files/proj/Analysis.ipynb)");
        assert!(!log.iter().any(|c| c.starts_with("save_notebook")));
    }

    #[test]
    fn download_proceeds_when_the_save_fails() {
        let (mut state, log) = test_state_with(PageConfig::new("/", "proj"), |nb| {
            nb.dirty = true;
            nb.save_fails = true;
        });
        dispatch(&mut state, MenuAction::DownloadNotebook);

        assert!(log.borrow().iter().any(|c| c.starts_with("navigate(")));
    }

    #[test]
    fn restore_resolves_the_exact_record() {
        let (mut state, log) = test_state(PageConfig::default());
        let a = Checkpoint::new("a", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 1).unwrap());
        let b = Checkpoint::new("b", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 2).unwrap());
        state.update_restore_checkpoint(Some(vec![a, b]));

        dispatch(
            &mut state,
            MenuAction::RestoreCheckpoint(nbw_core::CheckpointId::new("b")),
        );

        assert_eq!(log.borrow()[0], "restore_checkpoint_dialog(b)");
    }

    #[test]
    fn restore_of_a_stale_id_is_ignored() {
        let (mut state, log) = test_state(PageConfig::default());
        let a = Checkpoint::new("a", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 1).unwrap());
        state.update_restore_checkpoint(Some(vec![a]));
        // The list is replaced before the click lands
        state.update_restore_checkpoint(Some(vec![]));

        dispatch(
            &mut state,
            MenuAction::RestoreCheckpoint(nbw_core::CheckpointId::new("a")),
        );

        // No dialog; just the focus re-select
        assert_eq!(*log.borrow(), vec!["select(3)".to_owned()]);
    }

    #[test]
    fn kill_and_exit_deletes_the_session_before_closing() {
        let (mut state, log) = test_state(PageConfig::default());
        dispatch(&mut state, MenuAction::KillAndExit);

        let log = log.borrow();
        let delete_pos = log.iter().position(|c| c == "session.delete").unwrap();
        let close_pos = log.iter().position(|c| c == "close_window").unwrap();
        assert!(delete_pos < close_pos);
    }

    #[test]
    fn activation_closes_the_open_dropdown() {
        let (mut state, _log) = test_state(PageConfig::default());
        state.menu_bar.toggle(MenuBarMenuId::File);

        dispatch(&mut state, MenuAction::SaveCheckpoint);
        assert!(state.menu_bar.open_menu.is_none());
    }
}
