//! SQLite implementation of NoteRepository.
//!
//! Every mutation is a single statement with `RETURNING`, so the snapshot
//! handed back is exactly what was committed.

use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use crate::domain::foundation::{DomainError, NoteId};
use crate::domain::note::{Note, NoteDraft, NotePatch};
use crate::ports::NoteRepository;

/// SQLite implementation of NoteRepository.
#[derive(Clone)]
pub struct SqliteNoteRepository {
    pool: SqlitePool,
}

impl SqliteNoteRepository {
    /// Creates a new SqliteNoteRepository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for SqliteNoteRepository {
    async fn insert(&self, draft: &NoteDraft) -> Result<Note, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO notes (title, description, done)
            VALUES (?1, ?2, 0)
            RETURNING id, title, description, done
            "#,
        )
        .bind(draft.title.as_deref())
        .bind(draft.description.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert note", e))?;

        row_to_note(row)
    }

    async fn update(&self, id: NoteId, patch: &NotePatch) -> Result<Option<Note>, DomainError> {
        let row = sqlx::query(
            r#"
            UPDATE notes SET
                title = CASE WHEN ?2 THEN ?3 ELSE title END,
                description = CASE WHEN ?4 THEN ?5 ELSE description END,
                done = COALESCE(?6, done)
            WHERE id = ?1
            RETURNING id, title, description, done
            "#,
        )
        .bind(id.as_i64())
        .bind(patch.title.is_some())
        .bind(patch.title.clone().flatten())
        .bind(patch.description.is_some())
        .bind(patch.description.clone().flatten())
        .bind(patch.done)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update note", e))?;

        row.map(row_to_note).transpose()
    }

    async fn delete(&self, id: NoteId) -> Result<Option<Note>, DomainError> {
        let row = sqlx::query(
            r#"
            DELETE FROM notes
            WHERE id = ?1
            RETURNING id, title, description, done
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to delete note", e))?;

        row.map(row_to_note).transpose()
    }

    async fn find_by_id(&self, id: NoteId) -> Result<Option<Note>, DomainError> {
        let row = sqlx::query("SELECT id, title, description, done FROM notes WHERE id = ?1")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch note", e))?;

        row.map(row_to_note).transpose()
    }

    async fn list(&self) -> Result<Vec<Note>, DomainError> {
        let rows = sqlx::query("SELECT id, title, description, done FROM notes ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to list notes", e))?;

        rows.into_iter().map(row_to_note).collect()
    }
}

fn row_to_note(row: SqliteRow) -> Result<Note, DomainError> {
    let decode = |e: sqlx::Error| DomainError::database("Failed to decode note row", e);

    Ok(Note {
        id: NoteId::new(row.try_get("id").map_err(decode)?),
        title: row.try_get("title").map_err(decode)?,
        description: row.try_get("description").map_err(decode)?,
        done: row.try_get("done").map_err(decode)?,
    })
}
