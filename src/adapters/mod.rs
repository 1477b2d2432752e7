//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `broadcast` - connection registry and change fan-out (`ChangeNotifier`)
//! - `websocket` - WebSocket subscriber transport
//! - `sqlite` - note persistence (`NoteRepository`)
//! - `http` - REST API, health check and router assembly

pub mod broadcast;
pub mod http;
pub mod sqlite;
pub mod websocket;

pub use broadcast::{ConnectionRegistry, NoteBroadcaster};
pub use sqlite::SqliteNoteRepository;
pub use websocket::SubscriberConnection;
