//! Live Notes - shared task notes with real-time change notifications.
//!
//! A small notes API whose every committed create, update or delete is
//! pushed to all connected WebSocket subscribers. Delivery is best-effort:
//! there is no replay, and a subscriber that cannot keep up is dropped.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
