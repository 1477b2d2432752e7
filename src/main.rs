use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use live_notes::adapters::http::{build_router, AppState};
use live_notes::adapters::sqlite::{self, SqliteNoteRepository};
use live_notes::adapters::NoteBroadcaster;
use live_notes::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);
    tracing::info!(environment = ?config.server.environment, "Starting live-notes");

    let pool = sqlite::connect(&config.database).await?;
    if config.database.run_migrations {
        sqlite::run_migrations(&pool).await?;
    }
    tracing::info!(url = %config.database.url, "Database ready");

    let broadcaster = Arc::new(NoteBroadcaster::from_config(&config.broadcast));
    let repository = Arc::new(SqliteNoteRepository::new(pool.clone()));
    let state = AppState::new(repository, broadcaster, config.broadcast.channel_capacity);
    let router = build_router(state, &config.server);

    let listener = tokio::net::TcpListener::bind(config.server.socket_addr()?).await?;
    tracing::info!(addr = %listener.local_addr()?, "Server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Shut down");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
