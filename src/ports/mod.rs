//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `NoteRepository` - Record store for notes
//!
//! ## Notification Ports
//!
//! - `ChangeNotifier` - Announces committed mutations (implemented by the broadcaster)
//! - `NoteSubscriber` - One live subscriber connection

mod change_notifier;
mod note_repository;
mod note_subscriber;

pub use change_notifier::{BroadcastError, BroadcastReport, ChangeNotifier};
pub use note_repository::NoteRepository;
pub use note_subscriber::{DeliveryError, NoteSubscriber};
