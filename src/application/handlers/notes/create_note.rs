//! CreateNoteHandler - Command handler for creating notes.

use std::sync::Arc;

use crate::domain::note::{NoteDraft, NoteError};
use crate::domain::notification::ChangeAction;
use crate::ports::{ChangeNotifier, NoteRepository};

use super::{notify, NoteMutation};

/// Handler for creating notes.
pub struct CreateNoteHandler {
    repository: Arc<dyn NoteRepository>,
    notifier: Arc<dyn ChangeNotifier>,
}

impl CreateNoteHandler {
    pub fn new(repository: Arc<dyn NoteRepository>, notifier: Arc<dyn ChangeNotifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    pub async fn handle(&self, draft: NoteDraft) -> Result<NoteMutation, NoteError> {
        // 1. Persist; the store assigns the id
        let note = self.repository.insert(&draft).await?;
        tracing::info!(note_id = %note.id, "Note created");

        // 2. Announce the committed note
        Ok(notify(self.notifier.as_ref(), ChangeAction::Create, note).await)
    }
}
