//! Liveness endpoint.

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use crate::adapters::broadcast::NoteBroadcaster;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Live subscriber connections at the time of the request.
    pub subscribers: usize,
}

/// GET /health
pub async fn health(State(broadcaster): State<Arc<NoteBroadcaster>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        subscribers: broadcaster.subscriber_count().await,
    })
}

pub fn health_routes(broadcaster: Arc<NoteBroadcaster>) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(broadcaster)
}
