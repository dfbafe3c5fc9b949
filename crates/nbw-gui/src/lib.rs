//! Notebook Workbench - GUI Library
//!
//! The menu bar of the notebook front-end: a declarative table of menu
//! actions dispatched onto injected collaborators, plus the reactive
//! "Revert to Checkpoint" submenu kept in sync with server notifications.
//!
//! Built with Iced 0.14.0 using the Elm architecture. On macOS the menu is
//! native (`muda`); elsewhere an in-app Iced menu bar renders the same
//! action set.

pub mod app;
pub mod handler;
pub mod menu;
pub mod message;
pub mod service;
pub mod state;
pub mod theme;
pub mod util;
