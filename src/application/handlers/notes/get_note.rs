//! GetNoteHandler - Query handler for a single note.

use std::sync::Arc;

use crate::domain::foundation::NoteId;
use crate::domain::note::{Note, NoteError};
use crate::ports::NoteRepository;

/// Query for a single note.
#[derive(Debug, Clone, Copy)]
pub struct GetNoteQuery {
    pub id: NoteId,
}

pub struct GetNoteHandler {
    repository: Arc<dyn NoteRepository>,
}

impl GetNoteHandler {
    pub fn new(repository: Arc<dyn NoteRepository>) -> Self {
        Self { repository }
    }

    /// Looks up one note. A missing note is `Ok(None)`, not an error.
    pub async fn handle(&self, query: GetNoteQuery) -> Result<Option<Note>, NoteError> {
        Ok(self.repository.find_by_id(query.id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::notes::test_support::{note, MockNoteRepository};

    #[tokio::test]
    async fn returns_stored_note() {
        let repo = Arc::new(MockNoteRepository::with_notes(vec![note(7, "Dentiste")]));
        let handler = GetNoteHandler::new(repo);

        let found = handler.handle(GetNoteQuery { id: NoteId::new(7) }).await;

        assert_eq!(found, Ok(Some(note(7, "Dentiste"))));
    }

    #[tokio::test]
    async fn missing_note_is_none() {
        let handler = GetNoteHandler::new(Arc::new(MockNoteRepository::new()));

        let found = handler.handle(GetNoteQuery { id: NoteId::new(9) }).await;

        assert_eq!(found, Ok(None));
    }

    #[tokio::test]
    async fn storage_failure_is_reported() {
        let handler = GetNoteHandler::new(Arc::new(MockNoteRepository::failing()));

        let found = handler.handle(GetNoteQuery { id: NoteId::new(1) }).await;

        assert!(matches!(found, Err(NoteError::Infrastructure(_))));
    }
}
