//! UpdateNoteHandler - Command handler for partial note updates.

use std::sync::Arc;

use crate::domain::foundation::NoteId;
use crate::domain::note::{NoteError, NotePatch};
use crate::domain::notification::ChangeAction;
use crate::ports::{ChangeNotifier, NoteRepository};

use super::{notify, NoteMutation};

/// Command to update some fields of a note.
#[derive(Debug, Clone)]
pub struct UpdateNoteCommand {
    pub id: NoteId,
    pub patch: NotePatch,
}

/// Handler for updating notes.
pub struct UpdateNoteHandler {
    repository: Arc<dyn NoteRepository>,
    notifier: Arc<dyn ChangeNotifier>,
}

impl UpdateNoteHandler {
    pub fn new(repository: Arc<dyn NoteRepository>, notifier: Arc<dyn ChangeNotifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    pub async fn handle(&self, cmd: UpdateNoteCommand) -> Result<NoteMutation, NoteError> {
        let note = self
            .repository
            .update(cmd.id, &cmd.patch)
            .await?
            .ok_or_else(|| NoteError::not_found(cmd.id))?;
        tracing::info!(note_id = %note.id, done = note.done, "Note updated");

        Ok(notify(self.notifier.as_ref(), ChangeAction::Update, note).await)
    }
}
