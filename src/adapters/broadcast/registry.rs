//! Registry of live subscriber connections.
//!
//! The membership map is the only shared mutable state of the notification
//! core. The lock is held for insert, remove and copy only; nothing awaits
//! on a subscriber while holding it.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::foundation::ClientId;
use crate::ports::NoteSubscriber;

/// Set of connections eligible to receive change events, keyed by identity.
pub struct ConnectionRegistry {
    connections: RwLock<HashMap<ClientId, Arc<dyn NoteSubscriber>>>,
}

impl ConnectionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
        }
    }

    /// Add an open connection.
    ///
    /// Returns `false` without changing anything if the connection is
    /// already registered or is not open.
    pub async fn register(&self, connection: Arc<dyn NoteSubscriber>) -> bool {
        let mut connections = self.connections.write().await;
        if !connection.state().is_open() {
            return false;
        }
        match connections.entry(connection.id()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(connection);
                true
            }
        }
    }

    /// Remove a connection. Removing an absent connection is a no-op.
    ///
    /// Returns whether the connection was present.
    pub async fn unregister(&self, client_id: &ClientId) -> bool {
        self.connections.write().await.remove(client_id).is_some()
    }

    /// Remove several connections under one lock acquisition.
    ///
    /// Returns how many were actually present.
    pub async fn unregister_all(&self, client_ids: &[ClientId]) -> usize {
        if client_ids.is_empty() {
            return 0;
        }
        let mut connections = self.connections.write().await;
        client_ids
            .iter()
            .filter(|id| connections.remove(*id).is_some())
            .count()
    }

    /// Point-in-time copy of the current members.
    pub async fn snapshot(&self) -> Vec<Arc<dyn NoteSubscriber>> {
        self.connections.read().await.values().cloned().collect()
    }

    /// Whether a connection is currently registered.
    pub async fn contains(&self, client_id: &ClientId) -> bool {
        self.connections.read().await.contains_key(client_id)
    }

    /// Number of registered connections.
    pub async fn len(&self) -> usize {
        self.connections.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.connections.read().await.is_empty()
    }
}

impl Default for ConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
