//! Application subscriptions.
//!
//! This module centralizes all Iced subscriptions for the application.
//! Subscriptions are reactive event sources that run alongside the app.
//!
//! # Subscription Overview
//!
//! | Subscription | Interval | Purpose |
//! |--------------|----------|---------|
//! | Tick         | 100ms    | Drain the notification bus; poll native menu events (macOS) |
//!
//! The 100ms poll balances responsiveness with efficiency: menu clicks are
//! human-initiated, and the tick only drains local channels.

use std::time::Duration;

use iced::Subscription;
use iced::time;

use crate::message::Message;
use crate::state::AppState;

/// Create all application subscriptions.
pub fn create_subscription(_state: &AppState) -> Subscription<Message> {
    Subscription::batch([tick_subscription()])
}

/// Periodic tick driving the event pump.
fn tick_subscription() -> Subscription<Message> {
    time::every(Duration::from_millis(100)).map(|_| Message::Tick)
}
