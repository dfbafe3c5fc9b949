//! Notebook Workbench - Core Library
//!
//! Shared types and collaborator interfaces for the Notebook Workbench
//! front-end. The GUI crate binds menu activations to these interfaces;
//! concrete implementations (local in-memory notebook, real server-backed
//! controllers) live with their hosts.

pub mod checkpoint;
pub mod config;
pub mod error;
pub mod events;
pub mod host;
pub mod notebook;
pub mod session;
pub mod url;

pub use checkpoint::{Checkpoint, CheckpointId};
pub use config::PageConfig;
pub use error::NotebookError;
pub use events::{EventBus, EventSubscription, NotebookEvent};
pub use host::HostPage;
pub use notebook::{CellType, ExecuteOptions, HeadingLevel, NotebookController, SaveOptions};
pub use session::SessionController;
