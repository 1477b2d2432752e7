//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers persist through [`NoteRepository`](crate::ports::NoteRepository)
//! and announce every committed change through
//! [`ChangeNotifier`](crate::ports::ChangeNotifier).

pub mod handlers;

pub use handlers::{
    CreateNoteHandler, DeleteNoteCommand, DeleteNoteHandler, GetNoteHandler, GetNoteQuery,
    ListNotesHandler, NoteMutation, UpdateNoteCommand, UpdateNoteHandler,
};
