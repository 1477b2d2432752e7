//! HTTP routes for note endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_note, delete_note, get_note, list_notes, update_note, NoteHandlers};

/// Creates the notes router, mounted under `/api/notes`.
pub fn note_routes(handlers: NoteHandlers) -> Router {
    Router::new()
        .route("/", post(create_note).get(list_notes))
        .route("/:id", get(get_note).patch(update_note).delete(delete_note))
        .with_state(handlers)
}
