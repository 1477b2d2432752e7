//! Note command and query handlers.
//!
//! Mutating handlers persist first and broadcast second. A broadcast only
//! happens for a committed change, and its outcome never turns a committed
//! change into a failure.

mod create_note;
mod delete_note;
mod get_note;
mod list_notes;
mod update_note;

pub use create_note::CreateNoteHandler;
pub use delete_note::{DeleteNoteCommand, DeleteNoteHandler};
pub use get_note::{GetNoteHandler, GetNoteQuery};
pub use list_notes::ListNotesHandler;
pub use update_note::{UpdateNoteCommand, UpdateNoteHandler};

use crate::domain::note::Note;
use crate::domain::notification::ChangeAction;
use crate::ports::{BroadcastError, BroadcastReport, ChangeNotifier};

/// Result of a committed create, update or delete.
#[derive(Debug, Clone)]
pub struct NoteMutation {
    /// Post-commit snapshot (pre-removal snapshot for deletes).
    pub note: Note,
    /// What happened when subscribers were told about it.
    pub notification: Result<BroadcastReport, BroadcastError>,
}

/// Announces a committed change and logs a failed announcement.
async fn notify(
    notifier: &dyn ChangeNotifier,
    action: ChangeAction,
    note: Note,
) -> NoteMutation {
    let notification = notifier.broadcast(action, &note).await;
    match &notification {
        Ok(report) if report.evicted > 0 => {
            tracing::debug!(
                note_id = %note.id,
                action = %action,
                evicted = report.evicted,
                "Change delivered with evictions"
            );
        }
        Ok(_) => {}
        Err(e) => {
            tracing::warn!(note_id = %note.id, action = %action, error = %e, "Change notification failed");
        }
    }
    NoteMutation { note, notification }
}
