//! Top-level application state.

use nbw_core::{
    Checkpoint, EventSubscription, HostPage, NotebookController, NotebookEvent, PageConfig,
    SessionController,
};

use crate::menu::MenuBarState;
use crate::state::RestoreCheckpointMenu;

/// Everything the handlers operate on.
///
/// Collaborators arrive as trait objects so tests can swap in recording
/// doubles; the application wires the real implementations in `App::new`.
pub struct AppState {
    pub notebook: Box<dyn NotebookController>,
    pub session: Box<dyn SessionController>,
    pub page: Box<dyn HostPage>,
    pub config: PageConfig,
    pub restore_menu: RestoreCheckpointMenu,
    pub menu_bar: MenuBarState,
    events: EventSubscription,
}

impl AppState {
    pub fn new(
        notebook: Box<dyn NotebookController>,
        session: Box<dyn SessionController>,
        page: Box<dyn HostPage>,
        config: PageConfig,
        events: EventSubscription,
    ) -> Self {
        Self {
            notebook,
            session,
            page,
            config,
            restore_menu: RestoreCheckpointMenu::new(),
            menu_bar: MenuBarState::new(),
            events,
        }
    }

    /// Drain the notification bus and apply checkpoint updates.
    ///
    /// Every event variant carries the full current list; the last pending
    /// event wins, matching the submenu's replace semantics.
    pub fn pump_events(&mut self) {
        for event in self.events.drain() {
            match event {
                NotebookEvent::CheckpointsListed(checkpoints)
                | NotebookEvent::CheckpointCreated(checkpoints) => {
                    self.update_restore_checkpoint(Some(checkpoints));
                }
            }
        }
    }

    /// Replace the restore submenu contents.
    pub fn update_restore_checkpoint(&mut self, checkpoints: Option<Vec<Checkpoint>>) {
        self.restore_menu.update(checkpoints);
    }
}
