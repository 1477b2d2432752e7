//! Change events pushed to subscribers after a note mutation commits.
//!
//! Wire format (one JSON text message per event):
//!
//! ```text
//! {"action":"update","note":{"id":1,"title":"Devoirs","description":"TP Backend","done":true}}
//! ```
//!
//! Missing `title`/`description` are encoded as `null`, which stays
//! distinct from the empty string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::domain::note::Note;

/// Kind of mutation that produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeAction {
    Create,
    Update,
    Delete,
}

impl ChangeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeAction::Create => "create",
            ChangeAction::Update => "update",
            ChangeAction::Delete => "delete",
        }
    }
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable event describing one committed mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    action: ChangeAction,
    note: Note,
}

impl ChangeEvent {
    pub fn new(action: ChangeAction, note: Note) -> Self {
        Self { action, note }
    }

    pub fn action(&self) -> ChangeAction {
        self.action
    }

    pub fn note(&self) -> &Note {
        &self.note
    }

    /// Serializes the event into its wire payload.
    ///
    /// The payload is shared by every delivery of one broadcast.
    pub fn encode(&self) -> Result<Arc<str>, serde_json::Error> {
        serde_json::to_string(self).map(Arc::from)
    }

    /// Parses a wire payload back into an event.
    pub fn decode(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::NoteId;

    fn note(title: Option<&str>, description: Option<&str>, done: bool) -> Note {
        Note {
            id: NoteId::new(1),
            title: title.map(str::to_string),
            description: description.map(str::to_string),
            done,
        }
    }

    #[test]
    fn encodes_action_and_note_fields() {
        let event = ChangeEvent::new(
            ChangeAction::Create,
            note(Some("Devoirs"), Some("TP Backend"), false),
        );
        let payload = event.encode().unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();

        assert_eq!(value["action"], "create");
        assert_eq!(value["note"]["id"], 1);
        assert_eq!(value["note"]["title"], "Devoirs");
        assert_eq!(value["note"]["description"], "TP Backend");
        assert_eq!(value["note"]["done"], false);
    }

    #[test]
    fn absent_text_encodes_as_null() {
        let event = ChangeEvent::new(ChangeAction::Delete, note(None, None, true));
        let payload = event.encode().unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();

        assert!(value["note"]["title"].is_null());
        assert!(value["note"]["description"].is_null());
    }

    #[test]
    fn decode_reproduces_event_exactly() {
        let event = ChangeEvent::new(
            ChangeAction::Update,
            note(Some("Devoirs"), Some("TP Backend FastAPI"), true),
        );
        let decoded = ChangeEvent::decode(&event.encode().unwrap()).unwrap();
        assert_eq!(decoded, event);
    }

    #[test]
    fn decode_keeps_null_and_empty_distinct() {
        let event = ChangeEvent::new(ChangeAction::Update, note(Some(""), None, false));
        let decoded = ChangeEvent::decode(&event.encode().unwrap()).unwrap();

        assert_eq!(decoded.note().title.as_deref(), Some(""));
        assert_eq!(decoded.note().description, None);
    }

    #[test]
    fn decode_rejects_unknown_action() {
        let payload = r#"{"action":"archive","note":{"id":1,"title":null,"description":null,"done":false}}"#;
        assert!(ChangeEvent::decode(payload).is_err());
    }

    #[test]
    fn large_ids_survive_round_trip() {
        let mut n = note(Some("x"), None, false);
        n.id = NoteId::new(i64::MAX);
        let event = ChangeEvent::new(ChangeAction::Create, n);
        let decoded = ChangeEvent::decode(&event.encode().unwrap()).unwrap();
        assert_eq!(decoded.note().id, NoteId::new(i64::MAX));
    }
}
