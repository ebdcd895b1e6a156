//! Destinations API
//!
//! A small travel-destination backend: destinations live in a PostgreSQL
//! table and are enriched at creation time with capital, population and
//! region facts fetched from a REST Countries compatible service.

mod config;
mod countries;
mod db;
mod error;
mod models;
mod routes;
mod state;

use crate::config::Settings;
use crate::countries::CountryClient;
use crate::routes::create_router;
use crate::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber for structured logging
    init_tracing();

    info!("Starting Destinations API...");

    // Load configuration
    let settings = Settings::load()?;
    info!("Configuration loaded successfully");

    // The pool is lazy; a database that is down at boot surfaces on the
    // first query, not here.
    let pool = db::create_pool(&settings.database)?;

    // Ensure the destinations table exists when the server starts. Not
    // fatal: the error is logged and queries report the problem instead.
    if let Err(e) = db::ensure_schema(&pool).await {
        warn!("Error creating destinations table: {}", e);
    }

    let countries = CountryClient::new(settings.countries.base_url.clone())?;
    let state = Arc::new(AppState::new(pool, countries));

    // Build the router
    let app = create_router(state, &settings);

    // Create socket address
    let addr = SocketAddr::from((settings.server.host, settings.server.port));
    let listener = TcpListener::bind(addr).await?;

    info!("Server running on http://{}", addr);
    info!("Database host: {}", settings.database.host);
    info!("Database name: {}", settings.database.database);
    info!("Countries API base URL: {}", settings.countries.base_url);
    info!("API Endpoints:");
    info!("   GET    /api/destinations       - List destinations");
    info!("   POST   /api/destinations       - Add a destination");
    info!("   DELETE /api/destinations/{{id}}  - Remove a destination");
    info!("   GET    /                       - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize tracing with structured logging
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,destinations_api=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .compact(),
        )
        .init();
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        },
    }
}
