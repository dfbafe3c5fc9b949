//! Application state.

mod app_state;
mod checkpoints;

pub use app_state::AppState;
pub use checkpoints::RestoreCheckpointMenu;
