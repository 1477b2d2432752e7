//! NoteSubscriber port - one live connection that receives change events.
//!
//! The transport (WebSocket in production, in-process fakes in tests)
//! implements this; the connection registry and broadcaster only ever see
//! the trait.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::ClientId;
use crate::domain::notification::ConnectionState;

/// Why a single delivery attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("connection is closed")]
    Closed,

    #[error("send timed out after {0:?}")]
    Timeout(Duration),
}

/// A subscriber connection as seen by the notification core.
#[async_trait]
pub trait NoteSubscriber: Send + Sync {
    /// Identity used for registry membership. Never reused.
    fn id(&self) -> ClientId;

    /// Current lifecycle state.
    fn state(&self) -> ConnectionState;

    /// Push one encoded event. May wait for transport back-pressure; the
    /// caller bounds the wait.
    async fn deliver(&self, payload: Arc<str>) -> Result<(), DeliveryError>;

    /// Move to `Closed` and release the transport. Idempotent.
    fn close(&self);
}
