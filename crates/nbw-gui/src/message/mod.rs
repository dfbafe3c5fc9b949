//! Message hierarchy for the Elm-style architecture.
//!
//! All user interactions and bus notifications flow through these types.

pub mod menu;

pub use menu::MenuAction;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    /// A menu item was activated.
    Menu(MenuAction),

    /// Toggle an in-app dropdown open/closed.
    MenuBarToggle(MenuBarMenuId),

    /// Periodic poll of the notification bus (and, on macOS, the native
    /// menu event channel).
    Tick,

    /// No operation - used for placeholder actions.
    Noop,
}

/// Top-level menus in the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuBarMenuId {
    File,
    Edit,
    View,
    Insert,
    Cell,
    Kernel,
}
