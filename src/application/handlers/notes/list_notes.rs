//! ListNotesHandler - Query handler for all notes.

use std::sync::Arc;

use crate::domain::note::{Note, NoteError};
use crate::ports::NoteRepository;

pub struct ListNotesHandler {
    repository: Arc<dyn NoteRepository>,
}

impl ListNotesHandler {
    pub fn new(repository: Arc<dyn NoteRepository>) -> Self {
        Self { repository }
    }

    /// All notes ordered by id.
    pub async fn handle(&self) -> Result<Vec<Note>, NoteError> {
        Ok(self.repository.list().await?)
    }
}
