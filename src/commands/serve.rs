//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use common::{AppError, AppResult};

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::infra::{Cache, Database, MemorySessionStore, SessionStore};

/// Execute the serve command
pub async fn execute(args: ServeArgs, mut config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    if let Some(host) = args.host {
        config.server_host = host;
    }
    if let Some(port) = args.port {
        config.server_port = port;
    }

    let db = Database::connect(&config).await?;
    let db = Arc::new(db);
    tracing::info!("Database connected");

    let sessions = session_store(&config).await?;

    let addr = config.server_addr();
    let app = create_router(AppState::from_config(db, sessions, config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

/// Redis when `REDIS_URL` is configured, process memory otherwise.
async fn session_store(config: &Config) -> AppResult<Arc<dyn SessionStore>> {
    match &config.redis_url {
        Some(url) => Ok(Arc::new(Cache::connect(url).await?)),
        None => {
            tracing::warn!("REDIS_URL not set, sessions are kept in memory");
            Ok(Arc::new(MemorySessionStore::new()))
        }
    }
}
