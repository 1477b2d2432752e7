//! HTTP handlers for note endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::notes::{
    CreateNoteHandler, DeleteNoteCommand, DeleteNoteHandler, GetNoteHandler, GetNoteQuery,
    ListNotesHandler, NoteMutation, UpdateNoteCommand, UpdateNoteHandler,
};
use crate::domain::foundation::NoteId;
use crate::domain::note::NoteError;

use super::dto::{CreateNoteRequest, ErrorResponse, NoteResponse, UpdateNoteRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct NoteHandlers {
    create_handler: Arc<CreateNoteHandler>,
    update_handler: Arc<UpdateNoteHandler>,
    delete_handler: Arc<DeleteNoteHandler>,
    get_handler: Arc<GetNoteHandler>,
    list_handler: Arc<ListNotesHandler>,
}

impl NoteHandlers {
    pub fn new(
        create_handler: Arc<CreateNoteHandler>,
        update_handler: Arc<UpdateNoteHandler>,
        delete_handler: Arc<DeleteNoteHandler>,
        get_handler: Arc<GetNoteHandler>,
        list_handler: Arc<ListNotesHandler>,
    ) -> Self {
        Self {
            create_handler,
            update_handler,
            delete_handler,
            get_handler,
            list_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/notes - Create a note
pub async fn create_note(
    State(handlers): State<NoteHandlers>,
    body: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return handle_rejection(rejection),
    };

    match handlers.create_handler.handle(req.into()).await {
        Ok(mutation) => mutation_response(mutation),
        Err(e) => handle_note_error(e),
    }
}

/// GET /api/notes - List all notes
pub async fn list_notes(State(handlers): State<NoteHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(notes) => {
            let response: Vec<NoteResponse> = notes.into_iter().map(NoteResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_note_error(e),
    }
}

/// GET /api/notes/:id - Get one note, `null` if it does not exist
pub async fn get_note(
    State(handlers): State<NoteHandlers>,
    Path(note_id): Path<String>,
) -> Response {
    let id = match parse_note_id(&note_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetNoteQuery { id }).await {
        Ok(note) => (StatusCode::OK, Json(note.map(NoteResponse::from))).into_response(),
        Err(e) => handle_note_error(e),
    }
}

/// PATCH /api/notes/:id - Partially update a note
pub async fn update_note(
    State(handlers): State<NoteHandlers>,
    Path(note_id): Path<String>,
    body: Result<Json<UpdateNoteRequest>, JsonRejection>,
) -> Response {
    let id = match parse_note_id(&note_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return handle_rejection(rejection),
    };

    let cmd = UpdateNoteCommand {
        id,
        patch: req.into(),
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(mutation) => mutation_response(mutation),
        Err(e) => handle_note_error(e),
    }
}

/// DELETE /api/notes/:id - Delete a note, returning what was deleted
pub async fn delete_note(
    State(handlers): State<NoteHandlers>,
    Path(note_id): Path<String>,
) -> Response {
    let id = match parse_note_id(&note_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.delete_handler.handle(DeleteNoteCommand { id }).await {
        Ok(mutation) => mutation_response(mutation),
        Err(e) => handle_note_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

/// The mutation has committed by the time we get here, so the response is a
/// success whatever the notification outcome was.
fn mutation_response(mutation: NoteMutation) -> Response {
    (StatusCode::OK, Json(NoteResponse::from(mutation.note))).into_response()
}

fn parse_note_id(raw: &str) -> Result<NoteId, Response> {
    raw.parse::<NoteId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!("Invalid note ID: {}", raw))),
        )
            .into_response()
    })
}

fn handle_rejection(rejection: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(rejection.body_text())),
    )
        .into_response()
}

fn handle_note_error(error: NoteError) -> Response {
    match &error {
        NoteError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(error.message())),
        )
            .into_response(),
        NoteError::ValidationFailed { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.message())),
        )
            .into_response(),
        NoteError::Infrastructure(msg) => {
            tracing::error!(code = %error.code(), error = %msg, "Note storage failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Internal server error")),
            )
                .into_response()
        }
    }
}
