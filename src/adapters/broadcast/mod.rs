//! Real-time change notification core.
//!
//! # Architecture
//!
//! ```text
//!   Note handlers (after commit)
//!            │ ChangeNotifier::broadcast(action, note)
//!            ▼
//! ┌──────────────────────────────────────────────┐
//! │ NoteBroadcaster                              │
//! │   encode once → snapshot → concurrent sends  │
//! │   (bounded by send timeout) → batch evict    │
//! └──────────────────────────────────────────────┘
//!            │ snapshot / unregister_all
//!            ▼
//! ┌──────────────────────────────────────────────┐
//! │ ConnectionRegistry                           │
//! │   ClientId → Arc<dyn NoteSubscriber>         │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! - [`registry`] - membership set, lock held only for insert/remove/copy
//! - [`broadcaster`] - fan-out with per-connection failure isolation

pub mod broadcaster;
pub mod registry;

pub use broadcaster::NoteBroadcaster;
pub use registry::ConnectionRegistry;
