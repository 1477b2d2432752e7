//! Note record and its create/update payloads.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::NoteId;

/// Committed snapshot of a note as held by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub done: bool,
}

/// Fields accepted when creating a note. New notes always start not done.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl NoteDraft {
    /// Builds the note that results from storing this draft under `id`.
    pub fn into_note(self, id: NoteId) -> Note {
        Note {
            id,
            title: self.title,
            description: self.description,
            done: false,
        }
    }
}

/// Partial update. Only the fields that are present are applied.
///
/// `title` and `description` are nullable columns, so each carries two
/// levels: `None` leaves the field alone, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub done: Option<bool>,
}

impl NotePatch {
    /// Applies the present fields onto `note`.
    pub fn apply_to(&self, note: &mut Note) {
        if let Some(title) = &self.title {
            note.title = title.clone();
        }
        if let Some(description) = &self.description {
            note.description = description.clone();
        }
        if let Some(done) = self.done {
            note.done = done;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn devoirs() -> Note {
        NoteDraft {
            title: Some("Devoirs".to_string()),
            description: Some("TP Backend".to_string()),
        }
        .into_note(NoteId::new(1))
    }

    #[test]
    fn draft_becomes_undone_note() {
        let note = devoirs();
        assert_eq!(note.id, NoteId::new(1));
        assert_eq!(note.title.as_deref(), Some("Devoirs"));
        assert!(!note.done);
    }

    #[test]
    fn patch_only_touches_present_fields() {
        let mut note = devoirs();
        let patch = NotePatch {
            done: Some(true),
            ..Default::default()
        };
        patch.apply_to(&mut note);

        assert!(note.done);
        assert_eq!(note.title.as_deref(), Some("Devoirs"));
        assert_eq!(note.description.as_deref(), Some("TP Backend"));
    }

    #[test]
    fn patch_replaces_description() {
        let mut note = devoirs();
        let patch = NotePatch {
            description: Some(Some("TP Backend FastAPI".to_string())),
            ..Default::default()
        };
        patch.apply_to(&mut note);
        assert_eq!(note.description.as_deref(), Some("TP Backend FastAPI"));
    }

    #[test]
    fn patch_can_clear_nullable_fields() {
        let mut note = devoirs();
        let patch = NotePatch {
            title: Some(None),
            ..Default::default()
        };
        patch.apply_to(&mut note);
        assert_eq!(note.title, None);
        assert_eq!(note.description.as_deref(), Some("TP Backend"));
    }

    #[test]
    fn draft_accepts_missing_fields() {
        let draft: NoteDraft = serde_json::from_str("{}").unwrap();
        assert_eq!(draft, NoteDraft::default());
    }
}
