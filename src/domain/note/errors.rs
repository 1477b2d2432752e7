//! Note error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, NoteId};

/// Errors returned by note commands and queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    /// No note with this id exists.
    #[error("Note {0} not found")]
    NotFound(NoteId),
    /// Request payload was rejected.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },
    /// Storage failure.
    #[error("Error: {0}")]
    Infrastructure(String),
}

impl NoteError {
    pub fn not_found(id: NoteId) -> Self {
        NoteError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        NoteError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        NoteError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            NoteError::NotFound(_) => ErrorCode::NoteNotFound,
            NoteError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            NoteError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<DomainError> for NoteError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::NoteNotFound => match err.details.get("note_id").and_then(|id| id.parse().ok()) {
                Some(id) => NoteError::NotFound(id),
                None => NoteError::Infrastructure(err.to_string()),
            },
            ErrorCode::ValidationFailed => NoteError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => NoteError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_note() {
        let err = NoteError::not_found(NoteId::new(3));
        assert_eq!(err.to_string(), "Note 3 not found");
        assert_eq!(err.code(), ErrorCode::NoteNotFound);
    }

    #[test]
    fn validation_and_infrastructure_messages() {
        assert_eq!(
            NoteError::validation("title", "Too long").to_string(),
            "Validation failed for 'title': Too long"
        );
        assert_eq!(NoteError::infrastructure("disk full").message(), "Error: disk full");
        assert_eq!(
            NoteError::infrastructure("disk full").code(),
            ErrorCode::DatabaseError
        );
    }

    #[test]
    fn domain_not_found_with_id_maps_to_not_found() {
        let err = DomainError::new(ErrorCode::NoteNotFound, "gone").with_detail("note_id", "9");
        assert_eq!(NoteError::from(err), NoteError::NotFound(NoteId::new(9)));
    }

    #[test]
    fn database_error_maps_to_infrastructure() {
        let err = DomainError::database("Failed to insert note", "locked");
        assert!(matches!(NoteError::from(err), NoteError::Infrastructure(_)));
    }

    #[test]
    fn validation_keeps_field_detail() {
        let err = DomainError::new(ErrorCode::ValidationFailed, "bad").with_detail("field", "title");
        assert_eq!(
            NoteError::from(err),
            NoteError::validation("title", "bad")
        );
    }
}
