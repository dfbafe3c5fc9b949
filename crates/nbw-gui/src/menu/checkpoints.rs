//! The "Revert to Checkpoint" submenu contents.
//!
//! Entry building is kept free of any menu toolkit so both the native
//! (muda) and in-app (Iced) renderings share one contract: the entry list
//! always reflects exactly the most recently received checkpoint list, in
//! the order given.

use base64::Engine;

use nbw_core::{Checkpoint, CheckpointId};

use super::ids;
use crate::message::MenuAction;

/// One rendered submenu entry.
///
/// `action` is `None` for the disabled placeholder; every populated entry
/// carries the restore action for its own record.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckpointEntry {
    /// Menu item identifier (placeholder id, or prefix + encoded record id).
    pub id: String,
    /// Display text: formatted timestamp, or "No checkpoints".
    pub label: String,
    /// Activation effect, if the entry is enabled.
    pub action: Option<MenuAction>,
}

impl CheckpointEntry {
    pub fn is_enabled(&self) -> bool {
        self.action.is_some()
    }
}

/// Build the submenu entries for a checkpoint list.
///
/// An empty list yields the single disabled placeholder. Each populated
/// entry binds its own record's id, so activation can never resolve to a
/// neighboring record regardless of later rebuilds.
pub fn checkpoint_entries(checkpoints: &[Checkpoint]) -> Vec<CheckpointEntry> {
    if checkpoints.is_empty() {
        return vec![CheckpointEntry {
            id: ids::NO_CHECKPOINTS.to_owned(),
            label: "No checkpoints".to_owned(),
            action: None,
        }];
    }

    checkpoints
        .iter()
        .map(|checkpoint| CheckpointEntry {
            id: format!(
                "{}{}",
                ids::RESTORE_CHECKPOINT_PREFIX,
                encode_checkpoint_id(&checkpoint.id)
            ),
            label: checkpoint.menu_label(),
            action: Some(MenuAction::RestoreCheckpoint(checkpoint.id.clone())),
        })
        .collect()
}

/// Encode an opaque checkpoint id for embedding in a menu item identifier.
pub fn encode_checkpoint_id(id: &CheckpointId) -> String {
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(id.as_str().as_bytes())
}

/// Decode an embedded checkpoint id back out of a menu item identifier.
pub fn decode_checkpoint_id(encoded: &str) -> Option<CheckpointId> {
    base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(encoded)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .map(CheckpointId)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn checkpoint(id: &str, secs: u32) -> Checkpoint {
        Checkpoint::new(id, Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, secs).unwrap())
    }

    #[test]
    fn empty_list_yields_single_disabled_placeholder() {
        let entries = checkpoint_entries(&[]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "No checkpoints");
        assert_eq!(entries[0].id, ids::NO_CHECKPOINTS);
        assert!(!entries[0].is_enabled());
    }

    #[test]
    fn entries_preserve_list_order() {
        let list = [checkpoint("a", 1), checkpoint("b", 2)];
        let entries = checkpoint_entries(&list);
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0].action,
            Some(MenuAction::RestoreCheckpoint(CheckpointId::new("a")))
        );
        assert_eq!(
            entries[1].action,
            Some(MenuAction::RestoreCheckpoint(CheckpointId::new("b")))
        );
        assert!(entries.iter().all(CheckpointEntry::is_enabled));
    }

    #[test]
    fn entry_labels_use_the_timestamp_format() {
        let list = [checkpoint("a", 5)];
        let entries = checkpoint_entries(&list);
        assert_eq!(entries[0].label, list[0].menu_label());
    }

    #[test]
    fn ids_round_trip_through_encoding() {
        let id = CheckpointId::new("a/b c%20d");
        let decoded = decode_checkpoint_id(&encode_checkpoint_id(&id)).unwrap();
        assert_eq!(decoded, id);
    }

    #[test]
    fn garbage_encodings_decode_to_none() {
        assert!(decode_checkpoint_id("!!!").is_none());
    }
}
