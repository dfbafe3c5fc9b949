//! Server-reported checkpoint records.
//!
//! Checkpoints are owned by the persistence layer; this crate only carries
//! them between the notification bus and the menu that displays them.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Opaque checkpoint identifier, unique per checkpoint.
///
/// The server assigns these; the front-end only echoes them back when
/// requesting a restore.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckpointId(pub String);

impl CheckpointId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CheckpointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single checkpoint as reported by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub id: CheckpointId,
    pub last_modified: DateTime<Utc>,
}

impl Checkpoint {
    pub fn new(id: impl Into<String>, last_modified: DateTime<Utc>) -> Self {
        Self {
            id: CheckpointId::new(id),
            last_modified,
        }
    }

    /// Menu label in the viewer's local time zone: `"Aug 29 14:03:22"`.
    pub fn menu_label(&self) -> String {
        self.menu_label_in(&chrono::Local)
    }

    /// Menu label in an explicit time zone. Three-letter month, two-digit
    /// day, 24-hour time.
    pub fn menu_label_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        self.last_modified
            .with_timezone(tz)
            .format("%b %d %H:%M:%S")
            .to_string()
    }
}
