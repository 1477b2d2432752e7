//! WebSocket transport for the live note feed.
//!
//! Each client that opens `/ws` becomes a [`SubscriberConnection`] registered
//! with the shared [`NoteBroadcaster`](crate::adapters::broadcast::NoteBroadcaster).
//! The connection sends nothing on connect; afterwards every committed note
//! mutation arrives as one JSON text message. Client messages are ignored and
//! only serve to detect disconnects.
//!
//! # Components
//!
//! - [`connection`] - channel-backed `NoteSubscriber` with lifecycle state
//! - [`handler`] - Axum WebSocket upgrade handler and per-socket tasks

pub mod connection;
pub mod handler;

pub use connection::SubscriberConnection;
pub use handler::{websocket_router, ws_handler, WebSocketState};
