//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine)
//! - `note` - Note records and their create/update payloads
//! - `notification` - Change events and subscriber connection lifecycle

pub mod foundation;
pub mod note;
pub mod notification;
