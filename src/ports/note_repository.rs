//! Note repository port.
//!
//! The record store behind the notes API. Every method reports a committed
//! outcome: when a mutating call returns `Ok`, the change is durable.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, NoteId};
use crate::domain::note::{Note, NoteDraft, NotePatch};

/// Repository port for note persistence.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Insert a new note and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, draft: &NoteDraft) -> Result<Note, DomainError>;

    /// Apply a partial update and return the post-commit snapshot.
    ///
    /// Returns `None` if the note doesn't exist.
    async fn update(&self, id: NoteId, patch: &NotePatch) -> Result<Option<Note>, DomainError>;

    /// Delete a note and return the snapshot it had before removal.
    ///
    /// Returns `None` if the note doesn't exist.
    async fn delete(&self, id: NoteId) -> Result<Option<Note>, DomainError>;

    /// Find a note by id.
    async fn find_by_id(&self, id: NoteId) -> Result<Option<Note>, DomainError>;

    /// All notes ordered by id.
    async fn list(&self) -> Result<Vec<Note>, DomainError>;
}
