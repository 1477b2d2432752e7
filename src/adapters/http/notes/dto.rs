//! Request and response bodies for the notes API.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::note::{Note, NoteDraft, NotePatch};

/// Body of `POST /api/notes`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<CreateNoteRequest> for NoteDraft {
    fn from(req: CreateNoteRequest) -> Self {
        NoteDraft {
            title: req.title,
            description: req.description,
        }
    }
}

/// Body of `PATCH /api/notes/:id`.
///
/// Absent fields are left unchanged. An explicit `null` clears `title` or
/// `description`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNoteRequest {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub done: Option<bool>,
}

/// Marks a field that appeared in the body, even as `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl From<UpdateNoteRequest> for NotePatch {
    fn from(req: UpdateNoteRequest) -> Self {
        NotePatch {
            title: req.title,
            description: req.description,
            done: req.done,
        }
    }
}

/// A note as returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteResponse {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub done: bool,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id.as_i64(),
            title: note.title,
            description: note.description,
            done: note.done,
        }
    }
}

/// JSON error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::NoteId;

    #[test]
    fn create_request_accepts_missing_fields() {
        let req: CreateNoteRequest = serde_json::from_str(r#"{"title":"Devoirs"}"#).unwrap();
        let draft: NoteDraft = req.into();
        assert_eq!(draft.title.as_deref(), Some("Devoirs"));
        assert_eq!(draft.description, None);
    }

    #[test]
    fn update_request_distinguishes_null_from_absent() {
        let req: UpdateNoteRequest =
            serde_json::from_str(r#"{"title":null,"done":true}"#).unwrap();
        let patch: NotePatch = req.into();
        assert_eq!(patch.title, Some(None));
        assert_eq!(patch.description, None);
        assert_eq!(patch.done, Some(true));
    }

    #[test]
    fn update_request_keeps_present_values() {
        let req: UpdateNoteRequest =
            serde_json::from_str(r#"{"description":"TP Backend FastAPI"}"#).unwrap();
        let patch: NotePatch = req.into();
        assert_eq!(
            patch.description,
            Some(Some("TP Backend FastAPI".to_string()))
        );
        assert_eq!(patch.title, None);
        assert_eq!(patch.done, None);
    }

    #[test]
    fn note_response_serializes_nulls() {
        let response = NoteResponse::from(Note {
            id: NoteId::new(4),
            title: None,
            description: Some(String::new()),
            done: true,
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 4, "title": null, "description": "", "done": true})
        );
    }

    #[test]
    fn error_response_not_found_creates_correctly() {
        let error = ErrorResponse::not_found("Note 3 not found");
        assert_eq!(error.code, "NOT_FOUND");
        assert_eq!(error.message, "Note 3 not found");
    }
}
