//! Application router assembly.
//!
//! Wires the persistence port, the shared broadcaster and the application
//! handlers into one axum [`Router`] with tracing, timeout and CORS layers.

use std::sync::Arc;

use axum::{response::Redirect, routing::get, Router};
use http::HeaderValue;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::adapters::broadcast::NoteBroadcaster;
use crate::adapters::websocket::{websocket_router, WebSocketState};
use crate::application::handlers::notes::{
    CreateNoteHandler, DeleteNoteHandler, GetNoteHandler, ListNotesHandler, UpdateNoteHandler,
};
use crate::config::ServerConfig;
use crate::ports::{ChangeNotifier, NoteRepository};

use super::health::health_routes;
use super::notes::{note_routes, NoteHandlers};

/// Everything the router needs, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub notes: NoteHandlers,
    pub websocket: WebSocketState,
}

impl AppState {
    /// Builds the handlers around one repository and one broadcaster.
    ///
    /// The same broadcaster serves as the mutation handlers' notifier and as
    /// the registry the WebSocket endpoint connects subscribers to.
    pub fn new(
        repository: Arc<dyn NoteRepository>,
        broadcaster: Arc<NoteBroadcaster>,
        channel_capacity: usize,
    ) -> Self {
        let notifier: Arc<dyn ChangeNotifier> = broadcaster.clone();

        let notes = NoteHandlers::new(
            Arc::new(CreateNoteHandler::new(repository.clone(), notifier.clone())),
            Arc::new(UpdateNoteHandler::new(repository.clone(), notifier.clone())),
            Arc::new(DeleteNoteHandler::new(repository.clone(), notifier)),
            Arc::new(GetNoteHandler::new(repository.clone())),
            Arc::new(ListNotesHandler::new(repository)),
        );

        Self {
            notes,
            websocket: WebSocketState::new(broadcaster, channel_capacity),
        }
    }
}

/// Build the Axum router with all routes.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let broadcaster = state.websocket.broadcaster.clone();

    let router = Router::new()
        .route("/", get(|| async { Redirect::temporary("/api/notes") }))
        .nest("/api/notes", note_routes(state.notes))
        .merge(websocket_router().with_state(state.websocket))
        .merge(health_routes(broadcaster))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(TraceLayer::new_for_http());

    match cors_layer(config) {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

fn cors_layer(config: &ServerConfig) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any),
    )
}
