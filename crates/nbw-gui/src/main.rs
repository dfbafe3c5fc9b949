//! Notebook Workbench - Desktop GUI Application
//!
//! A desktop front-end for notebook documents: menu-driven editing, cell
//! execution, and checkpoint management against injected collaborators.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message,
//! Update, View).

use iced::Size;
use iced::window;

use nbw_gui::app::App;

/// Application entry point.
pub fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Notebook Workbench");

    // Run the Iced application using the builder pattern
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window::Settings {
            size: Size::new(1280.0, 800.0),
            min_size: Some(Size::new(1024.0, 600.0)),
            ..Default::default()
        })
        .run()
}
