//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod notes;

pub use notes::{
    CreateNoteHandler, DeleteNoteCommand, DeleteNoteHandler, GetNoteHandler, GetNoteQuery,
    ListNotesHandler, NoteMutation, UpdateNoteCommand, UpdateNoteHandler,
};
