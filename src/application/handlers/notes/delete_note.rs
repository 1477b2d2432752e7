//! DeleteNoteHandler - Command handler for removing notes.

use std::sync::Arc;

use crate::domain::foundation::NoteId;
use crate::domain::note::NoteError;
use crate::domain::notification::ChangeAction;
use crate::ports::{ChangeNotifier, NoteRepository};

use super::{notify, NoteMutation};

/// Command to delete a note.
#[derive(Debug, Clone, Copy)]
pub struct DeleteNoteCommand {
    pub id: NoteId,
}

/// Handler for deleting notes.
pub struct DeleteNoteHandler {
    repository: Arc<dyn NoteRepository>,
    notifier: Arc<dyn ChangeNotifier>,
}

impl DeleteNoteHandler {
    pub fn new(repository: Arc<dyn NoteRepository>, notifier: Arc<dyn ChangeNotifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Deletes the note and broadcasts the snapshot it had before removal.
    pub async fn handle(&self, cmd: DeleteNoteCommand) -> Result<NoteMutation, NoteError> {
        let note = self
            .repository
            .delete(cmd.id)
            .await?
            .ok_or_else(|| NoteError::not_found(cmd.id))?;
        tracing::info!(note_id = %note.id, "Note deleted");

        Ok(notify(self.notifier.as_ref(), ChangeAction::Delete, note).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::notes::test_support::{
        note, MockNoteRepository, RecordingNotifier,
    };

    #[tokio::test]
    async fn deletes_and_broadcasts_pre_removal_snapshot() {
        let repo = Arc::new(MockNoteRepository::with_notes(vec![
            note(1, "Devoirs"),
            note(2, "Papiers"),
        ]));
        let notifier = Arc::new(RecordingNotifier::new());
        let handler = DeleteNoteHandler::new(repo.clone(), notifier.clone());

        let result = handler
            .handle(DeleteNoteCommand { id: NoteId::new(2) })
            .await
            .unwrap();

        assert_eq!(result.note, note(2, "Papiers"));
        assert!(repo.stored(2).is_none());
        assert!(repo.stored(1).is_some());
        let calls = notifier.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], (ChangeAction::Delete, note(2, "Papiers")));
    }

    #[tokio::test]
    async fn second_delete_is_not_found() {
        let repo = Arc::new(MockNoteRepository::with_notes(vec![note(1, "Devoirs")]));
        let notifier = Arc::new(RecordingNotifier::new());
        let handler = DeleteNoteHandler::new(repo, notifier.clone());
        let cmd = DeleteNoteCommand { id: NoteId::new(1) };

        handler.handle(cmd).await.unwrap();
        let second = handler.handle(cmd).await;

        assert_eq!(second.unwrap_err(), NoteError::NotFound(NoteId::new(1)));
        assert_eq!(notifier.calls().len(), 1);
    }
}
