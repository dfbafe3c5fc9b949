//! Main application module for Notebook Workbench.
//!
//! This module implements the Iced 0.14.0 application using the builder
//! pattern. The architecture follows the Elm pattern:
//! State → Message → Update → View.
//!
//! All state changes happen in `update()`; views are pure functions.

pub mod subscription;

use iced::widget::{column, container, text};
use iced::{Element, Length, Subscription, Task, Theme};

use nbw_core::{EventBus, PageConfig};

use crate::handler::{MenuActionHandler, MessageHandler};
use crate::menu::view_menu_bar;
use crate::message::Message;
use crate::service::{LocalNotebook, LocalSession, SystemHost};
use crate::state::AppState;
use crate::theme::{GRAY_600, SPACING_SM};

/// Environment variable carrying the page configuration as JSON.
const PAGE_CONFIG_ENV: &str = "NBW_PAGE_CONFIG";

/// Main application struct.
///
/// This is the root of the Iced application. It holds the application state
/// and implements the Elm architecture methods.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Wires the default collaborators to one notification bus and, on
    /// macOS, installs the native menu bar.
    pub fn new() -> (Self, Task<Message>) {
        let bus = EventBus::new();
        let subscription = bus.subscribe();
        let config = page_config_from_env();

        let state = AppState::new(
            Box::new(LocalNotebook::new("Untitled0", bus.clone())),
            Box::new(LocalSession::new()),
            Box::new(SystemHost::new()),
            config,
            subscription,
        );

        #[cfg(target_os = "macos")]
        crate::menu::native::install_menu();

        (Self { state }, Task::none())
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Menu(action) => MenuActionHandler.handle(&mut self.state, action),

            Message::MenuBarToggle(menu_id) => {
                self.state.menu_bar.toggle(menu_id);
                Task::none()
            }

            Message::Tick => {
                self.state.pump_events();

                #[cfg(target_os = "macos")]
                if let Some(action) = crate::menu::poll_native_menu_event() {
                    return Task::done(Message::Menu(action));
                }

                Task::none()
            }

            Message::Noop => Task::none(),
        }
    }

    /// Render the application.
    pub fn view(&self) -> Element<'_, Message> {
        let menu_bar = view_menu_bar(&self.state.menu_bar, self.state.restore_menu.entries());

        let name = self.state.notebook.notebook_name();
        let body = container(
            column![
                text(name).size(20),
                text(format!(
                    "{} checkpoint(s) available",
                    self.state.restore_menu.checkpoints().len()
                ))
                .size(13)
                .color(GRAY_600),
            ]
            .spacing(SPACING_SM),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(SPACING_SM);

        column![menu_bar, body].into()
    }

    /// Window title: notebook name plus the application name.
    pub fn title(&self) -> String {
        format!("{} - Notebook Workbench", self.state.notebook.notebook_name())
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription(&self.state)
    }
}

/// Read the page configuration from the environment.
///
/// The hosting page (or launcher script) passes base URL and notebook path
/// as a JSON object. Absent or malformed values fall back to defaults.
fn page_config_from_env() -> PageConfig {
    let Ok(raw) = std::env::var(PAGE_CONFIG_ENV) else {
        return PageConfig::default();
    };
    match serde_json::from_str(&raw) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "invalid {PAGE_CONFIG_ENV}; using defaults");
            PageConfig::default()
        }
    }
}
