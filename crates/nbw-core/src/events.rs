//! Notification bus.
//!
//! Collaborators publish checkpoint updates here; the menu bar holds a
//! subscription handle for the page's lifetime and polls it from the UI
//! loop. Handles make teardown possible, though the menu bar itself never
//! unsubscribes.

use std::sync::{Arc, Mutex};

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::checkpoint::Checkpoint;

/// Notifications delivered to the menu bar.
///
/// Both checkpoint variants carry the publisher's current full list; the
/// receiver replaces, never merges.
#[derive(Debug, Clone, PartialEq)]
pub enum NotebookEvent {
    /// The server answered a checkpoint listing request.
    CheckpointsListed(Vec<Checkpoint>),
    /// A new checkpoint was created; the list includes it.
    CheckpointCreated(Vec<Checkpoint>),
}

/// Fan-out event bus over crossbeam channels.
///
/// Cloning the bus clones the publishing side; each [`subscribe`] call
/// returns an independent receiver.
///
/// [`subscribe`]: EventBus::subscribe
#[derive(Clone, Default)]
pub struct EventBus {
    senders: Arc<Mutex<Vec<Sender<NotebookEvent>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber and return its handle.
    pub fn subscribe(&self) -> EventSubscription {
        let (tx, rx) = unbounded();
        self.senders
            .lock()
            .expect("event bus subscriber list poisoned")
            .push(tx);
        EventSubscription { receiver: rx }
    }

    /// Deliver an event to every live subscriber.
    ///
    /// Subscribers whose handle has been dropped are pruned here.
    pub fn publish(&self, event: &NotebookEvent) {
        tracing::debug!(?event, "publishing notebook event");
        self.senders
            .lock()
            .expect("event bus subscriber list poisoned")
            .retain(|tx| tx.send(event.clone()).is_ok());
    }
}

/// A subscriber handle. Dropping it unsubscribes.
pub struct EventSubscription {
    receiver: Receiver<NotebookEvent>,
}

impl EventSubscription {
    /// Non-blocking receive of the next pending event.
    pub fn try_recv(&self) -> Option<NotebookEvent> {
        self.receiver.try_recv().ok()
    }

    /// Drain all pending events in delivery order.
    pub fn drain(&self) -> Vec<NotebookEvent> {
        self.receiver.try_iter().collect()
    }
}
