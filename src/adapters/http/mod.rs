//! HTTP adapters - REST API implementations.
//!
//! - [`notes`] - CRUD endpoints under `/api/notes`
//! - [`health`] - liveness check
//! - [`server`] - router assembly and middleware

pub mod health;
pub mod notes;
pub mod server;

pub use server::{build_router, AppState};
