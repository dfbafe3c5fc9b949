//! Default collaborator implementations wired by `App::new`.
//!
//! These back the menu bar when the application runs standalone: an
//! in-memory notebook document, a logging kernel session, and a host page
//! backed by the system browser and window.

pub mod host;
pub mod local_notebook;
pub mod session;

pub use host::SystemHost;
pub use local_notebook::LocalNotebook;
pub use session::LocalSession;
