//! WebSocket upgrade handler for the live note feed.
//!
//! Manages the connection lifecycle:
//! 1. Upgrade to WebSocket
//! 2. Open the subscriber connection and register it with the broadcaster
//! 3. Forward broadcast payloads to the socket; ignore inbound messages
//! 4. Unregister as soon as either direction terminates

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
    routing::get,
    Router,
};
use futures::stream::SplitStream;
use futures::{Sink, SinkExt, StreamExt};
use tokio::sync::{mpsc, watch};

use crate::adapters::broadcast::NoteBroadcaster;
use crate::domain::foundation::ClientId;
use crate::domain::notification::ConnectionState;
use crate::ports::NoteSubscriber;

use super::connection::SubscriberConnection;

/// State required for WebSocket handling.
#[derive(Clone)]
pub struct WebSocketState {
    /// Shared broadcaster that owns the connection registry.
    pub broadcaster: Arc<NoteBroadcaster>,
    /// Outbound buffer size per connection.
    pub channel_capacity: usize,
}

impl WebSocketState {
    pub fn new(broadcaster: Arc<NoteBroadcaster>, channel_capacity: usize) -> Self {
        Self {
            broadcaster,
            channel_capacity,
        }
    }
}

/// Handle WebSocket upgrade requests for the note feed.
///
/// Route: `GET /ws`
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<WebSocketState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Runs for the lifetime of one subscriber.
async fn handle_socket(socket: WebSocket, state: WebSocketState) {
    let (sink, stream) = socket.split();

    let (connection, outbound) = SubscriberConnection::new(state.channel_capacity);
    let connection = Arc::new(connection);
    let client_id = connection.id();

    if let Err(e) = connection.open() {
        tracing::warn!(client_id = %client_id, error = %e, "failed to open subscriber connection");
        return;
    }
    state.broadcaster.connect(connection.clone()).await;

    let mut send_task = tokio::spawn(forward_events(
        sink,
        outbound,
        connection.watch_state(),
        client_id,
    ));
    let mut recv_task = tokio::spawn(drain_inbound(stream, client_id));

    // Eviction closes the connection from the broadcaster's side; that must
    // end the session even while the writer is stuck on a slow socket.
    let writer_done = tokio::select! {
        _ = &mut send_task => true,
        _ = &mut recv_task => false,
        _ = until_closed(connection.watch_state()) => false,
    };

    state.broadcaster.disconnect(connection.as_ref()).await;
    recv_task.abort();
    if !writer_done
        && tokio::time::timeout(state.broadcaster.send_timeout(), &mut send_task)
            .await
            .is_err()
    {
        send_task.abort();
    }

    tracing::debug!(
        client_id = %client_id,
        connected_ms = connection.connected_at().elapsed_millis(),
        "WebSocket session ended"
    );
}

/// Resolves once the connection reaches `Closed`, whoever closed it.
async fn until_closed(mut state: watch::Receiver<ConnectionState>) {
    let _ = state.wait_for(|s| *s == ConnectionState::Closed).await;
}

/// Writes queued event payloads to the sink until the connection closes.
///
/// A close that lands while a write is pending abandons the write and skips
/// the close frame, since the sink is not accepting data.
async fn forward_events<S>(
    mut sink: S,
    mut outbound: mpsc::Receiver<Arc<str>>,
    state: watch::Receiver<ConnectionState>,
    client_id: ClientId,
) where
    S: Sink<Message> + Unpin,
    S::Error: std::fmt::Display,
{
    let closed = until_closed(state);
    tokio::pin!(closed);

    loop {
        let payload = tokio::select! {
            _ = &mut closed => break,
            payload = outbound.recv() => match payload {
                Some(payload) => payload,
                None => break,
            },
        };

        let sent = tokio::select! {
            _ = &mut closed => {
                tracing::debug!(client_id = %client_id, "Connection closed during a pending write");
                return;
            }
            sent = sink.send(Message::Text(payload.to_string())) => sent,
        };
        if let Err(e) = sent {
            tracing::debug!(client_id = %client_id, "Send error, closing connection: {}", e);
            return;
        }
    }
    let _ = sink.send(Message::Close(None)).await;
}

/// Reads and discards client messages; returns when the client goes away.
async fn drain_inbound(mut stream: SplitStream<WebSocket>, client_id: ClientId) {
    while let Some(result) = stream.next().await {
        match result {
            Ok(Message::Close(_)) => {
                tracing::debug!(client_id = %client_id, "Client sent close frame");
                break;
            }
            Ok(_) => {
                tracing::trace!(client_id = %client_id, "Ignoring inbound message");
            }
            Err(e) => {
                tracing::debug!(client_id = %client_id, "Receive error: {}", e);
                break;
            }
        }
    }
}

/// Create axum router for the WebSocket endpoint.
pub fn websocket_router() -> Router<WebSocketState> {
    Router::new().route("/ws", get(ws_handler))
}
