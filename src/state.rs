//! Application state management
//!
//! Contains shared state accessible across all handlers. All persisted
//! state lives in PostgreSQL; the pool is the only long-lived resource.

use crate::countries::CountryClient;
use crate::db::DestinationService;
use deadpool_postgres::Pool;
use std::sync::Arc;

/// Application state shared across all handlers
pub struct AppState {
    /// Destination service for database operations
    pub destinations: DestinationService,

    /// Client for the external country lookup service
    pub countries: CountryClient,
}

impl AppState {
    /// Create new application state from the database pool and lookup client
    pub fn new(pool: Pool, countries: CountryClient) -> Self {
        Self {
            destinations: DestinationService::new(pool),
            countries,
        }
    }
}

/// Type alias for shared state
pub type SharedState = Arc<AppState>;
