//! Note domain module.
//!
//! A note is a small task record: optional title and description plus a
//! `done` flag. Identity is assigned by the record store on insert.

mod errors;
mod record;

pub use errors::NoteError;
pub use record::{Note, NoteDraft, NotePatch};
