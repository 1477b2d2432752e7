//! Subscriber connection backed by a bounded outbound channel.
//!
//! The broadcaster pushes encoded events into the channel; a per-socket
//! writer task drains it into the WebSocket. A full channel means the client
//! is not keeping up, so `deliver` waits and the broadcaster's send timeout
//! decides when to give up on it.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{mpsc, watch};

use crate::domain::foundation::{ClientId, StateMachine, Timestamp, ValidationError};
use crate::domain::notification::ConnectionState;
use crate::ports::{DeliveryError, NoteSubscriber};

/// One subscriber connection.
pub struct SubscriberConnection {
    id: ClientId,
    tx: mpsc::Sender<Arc<str>>,
    state: watch::Sender<ConnectionState>,
    connected_at: Timestamp,
}

impl SubscriberConnection {
    /// Create a connection in `Connecting` state.
    ///
    /// Returns the receiving half of the outbound channel, which the
    /// transport's writer task owns.
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<Arc<str>>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        let (state, _) = watch::channel(ConnectionState::Connecting);
        let connection = Self {
            id: ClientId::new(),
            tx,
            state,
            connected_at: Timestamp::now(),
        };
        (connection, rx)
    }

    /// Mark the subscription handshake as complete.
    pub fn open(&self) -> Result<(), ValidationError> {
        self.transition(ConnectionState::Open)
    }

    /// Watch handle that observes state changes (used to stop the writer).
    pub fn watch_state(&self) -> watch::Receiver<ConnectionState> {
        self.state.subscribe()
    }

    /// When the connection was created.
    pub fn connected_at(&self) -> Timestamp {
        self.connected_at
    }

    fn transition(&self, target: ConnectionState) -> Result<(), ValidationError> {
        let mut outcome = Ok(());
        self.state.send_if_modified(|state| match state.transition_to(target) {
            Ok(next) => {
                *state = next;
                true
            }
            Err(e) => {
                outcome = Err(e);
                false
            }
        });
        outcome
    }
}

#[async_trait]
impl NoteSubscriber for SubscriberConnection {
    fn id(&self) -> ClientId {
        self.id
    }

    fn state(&self) -> ConnectionState {
        *self.state.borrow()
    }

    async fn deliver(&self, payload: Arc<str>) -> Result<(), DeliveryError> {
        if !self.state().is_open() {
            return Err(DeliveryError::Closed);
        }
        self.tx.send(payload).await.map_err(|_| DeliveryError::Closed)
    }

    fn close(&self) {
        if self.transition(ConnectionState::Closed).is_ok() {
            tracing::trace!(client_id = %self.id, "connection closed");
        }
    }
}
