//! HTTP adapter for the notes API.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateNoteRequest, ErrorResponse, NoteResponse, UpdateNoteRequest};
pub use handlers::NoteHandlers;
pub use routes::note_routes;
