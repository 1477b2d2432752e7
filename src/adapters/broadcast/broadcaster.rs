//! Fan-out of change events to every registered subscriber.
//!
//! One broadcast:
//! 1. Encode the event once (fails fast on encoding errors)
//! 2. Snapshot the registry
//! 3. Deliver to every member concurrently, each bounded by the send timeout
//! 4. Close and evict, in one batch, every member whose delivery failed

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::config::BroadcastConfig;
use crate::domain::foundation::ClientId;
use crate::domain::note::Note;
use crate::domain::notification::{ChangeAction, ChangeEvent};
use crate::ports::{BroadcastError, BroadcastReport, ChangeNotifier, DeliveryError, NoteSubscriber};

use super::registry::ConnectionRegistry;

/// Broadcaster for note change events.
///
/// Built once at startup and shared through `Arc` by the HTTP handlers and
/// the WebSocket connection tasks.
pub struct NoteBroadcaster {
    registry: ConnectionRegistry,
    send_timeout: Duration,
}

impl NoteBroadcaster {
    /// Create a broadcaster with the given per-connection send timeout.
    pub fn new(send_timeout: Duration) -> Self {
        Self {
            registry: ConnectionRegistry::new(),
            send_timeout,
        }
    }

    pub fn from_config(config: &BroadcastConfig) -> Self {
        Self::new(config.send_timeout())
    }

    /// The underlying connection registry.
    pub fn registry(&self) -> &ConnectionRegistry {
        &self.registry
    }

    pub fn send_timeout(&self) -> Duration {
        self.send_timeout
    }

    /// Register a new subscriber. It only sees events broadcast after this
    /// returns.
    pub async fn connect(&self, connection: Arc<dyn NoteSubscriber>) -> bool {
        let client_id = connection.id();
        let added = self.registry.register(connection).await;
        if added {
            let subscribers = self.registry.len().await;
            info!(client_id = %client_id, subscribers, "subscriber connected");
        } else {
            debug!(client_id = %client_id, "subscriber not registered (closed or duplicate)");
        }
        added
    }

    /// Close a subscriber and remove it from the registry. Idempotent.
    pub async fn disconnect(&self, connection: &dyn NoteSubscriber) -> bool {
        connection.close();
        let client_id = connection.id();
        let removed = self.registry.unregister(&client_id).await;
        if removed {
            let subscribers = self.registry.len().await;
            info!(client_id = %client_id, subscribers, "subscriber disconnected");
        }
        removed
    }

    /// Number of registered subscribers.
    pub async fn subscriber_count(&self) -> usize {
        self.registry.len().await
    }

    /// Deliver `event` to every subscriber registered when the call starts.
    pub async fn publish(&self, event: &ChangeEvent) -> Result<BroadcastReport, BroadcastError> {
        let payload = event
            .encode()
            .map_err(|e| BroadcastError::Encoding(e.to_string()))?;

        let recipients = self.registry.snapshot().await;
        if recipients.is_empty() {
            debug!(action = %event.action(), note_id = %event.note().id, "no subscribers");
            return Ok(BroadcastReport::default());
        }

        let outcomes = join_all(
            recipients
                .iter()
                .map(|connection| self.deliver_one(connection.as_ref(), Arc::clone(&payload))),
        )
        .await;

        let failed: Vec<ClientId> = recipients
            .iter()
            .zip(outcomes)
            .filter_map(|(connection, outcome)| match outcome {
                Ok(()) => None,
                Err(e) => {
                    warn!(client_id = %connection.id(), error = %e, "delivery failed, evicting subscriber");
                    connection.close();
                    Some(connection.id())
                }
            })
            .collect();
        self.registry.unregister_all(&failed).await;

        let report = BroadcastReport {
            attempted: recipients.len(),
            delivered: recipients.len() - failed.len(),
            evicted: failed.len(),
        };
        debug!(
            action = %event.action(),
            note_id = %event.note().id,
            attempted = report.attempted,
            delivered = report.delivered,
            evicted = report.evicted,
            "broadcast change event"
        );
        Ok(report)
    }

    async fn deliver_one(
        &self,
        connection: &dyn NoteSubscriber,
        payload: Arc<str>,
    ) -> Result<(), DeliveryError> {
        if !connection.state().is_open() {
            return Err(DeliveryError::Closed);
        }
        match tokio::time::timeout(self.send_timeout, connection.deliver(payload)).await {
            Ok(result) => result,
            Err(_) => Err(DeliveryError::Timeout(self.send_timeout)),
        }
    }
}

impl Default for NoteBroadcaster {
    fn default() -> Self {
        Self::from_config(&BroadcastConfig::default())
    }
}

#[async_trait]
impl ChangeNotifier for NoteBroadcaster {
    async fn broadcast(
        &self,
        action: ChangeAction,
        note: &Note,
    ) -> Result<BroadcastReport, BroadcastError> {
        self.publish(&ChangeEvent::new(action, note.clone())).await
    }
}
