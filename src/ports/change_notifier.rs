//! ChangeNotifier port - how the record store side announces commits.
//!
//! Called exactly once after every successful create, update or delete,
//! with the post-mutation snapshot. Never called for a failed mutation.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::note::Note;
use crate::domain::notification::ChangeAction;

/// Outcome of one fan-out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    /// Connections in the snapshot taken when the broadcast started.
    pub attempted: usize,
    /// Connections that accepted the event.
    pub delivered: usize,
    /// Connections that failed and were removed from the registry.
    pub evicted: usize,
}

/// Failure of a broadcast as a whole. Per-connection failures are not
/// errors; they show up as evictions in the report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BroadcastError {
    #[error("failed to encode change event: {0}")]
    Encoding(String),
}

/// Port for announcing committed note mutations.
#[async_trait]
pub trait ChangeNotifier: Send + Sync {
    async fn broadcast(
        &self,
        action: ChangeAction,
        note: &Note,
    ) -> Result<BroadcastReport, BroadcastError>;
}
