//! HTTP server initialization and runtime setup.
//!
//! Loads the content snapshot, wires the URL pipeline and runs the Axum server.

use crate::config::Config;
use crate::infrastructure::snapshot::ContentSnapshot;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Content snapshot (nodes and domain registrations)
/// - URL pipeline with the alias provider
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The snapshot cannot be read or is malformed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let snapshot = ContentSnapshot::load(&config.content_snapshot)
        .await
        .with_context(|| format!("Failed to load snapshot '{}'", config.content_snapshot))?;

    let state = AppState::from_snapshot(&snapshot, config.alias_url_options(), config.behind_proxy);
    if !state.alias_lookup_enabled {
        tracing::warn!("Alias lookup is disabled; no alias URLs will be produced");
    }

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
