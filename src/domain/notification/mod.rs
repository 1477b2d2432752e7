//! Notification domain module.
//!
//! Value types of the real-time change feed: the event pushed to
//! subscribers and the lifecycle of a subscriber connection.

mod change_event;
mod connection_state;

pub use change_event::{ChangeAction, ChangeEvent};
pub use connection_state::ConnectionState;
