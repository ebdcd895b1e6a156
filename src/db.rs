//! Database connection management
//!
//! Handles connection pooling and schema bootstrap for the destinations
//! table.

pub mod queries;
mod service;

pub use service::DestinationService;

use crate::config::DatabaseConfig;
use crate::error::AppError;
use deadpool_postgres::{Config, ManagerConfig, Pool, PoolConfig, RecyclingMethod, Runtime};
use tokio_postgres::NoTls;
use tracing::info;

/// Create a connection pool from the database configuration.
///
/// The pool is lazy: no connection is established until the first query,
/// and broken idle connections are dropped and replaced at recycle time
/// rather than crashing the process.
pub fn create_pool(config: &DatabaseConfig) -> Result<Pool, AppError> {
    let mut cfg = Config::new();
    cfg.host = Some(config.host.clone());
    cfg.port = Some(config.port);
    cfg.user = Some(config.user.clone());
    cfg.password = Some(config.password.clone());
    cfg.dbname = Some(config.database.clone());
    cfg.pool = Some(PoolConfig::new(config.max_pool_size));
    cfg.manager = Some(ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    });

    cfg.create_pool(Some(Runtime::Tokio1), NoTls)
        .map_err(|e| AppError::Config(format!("Failed to create pool: {}", e)))
}

/// Ensure the destinations table exists. Safe to run on every startup.
pub async fn ensure_schema(pool: &Pool) -> Result<(), AppError> {
    let client = pool.get().await?;
    client.execute(queries::CREATE_DESTINATIONS_TABLE, &[]).await?;

    info!("Destinations table is ready");
    Ok(())
}
