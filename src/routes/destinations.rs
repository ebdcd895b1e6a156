//! Destination route handlers
//!
//! List, create and delete destinations. Creation enriches the supplied
//! country via the external lookup service before persisting; if the
//! lookup fails for any reason, nothing is stored.

use crate::error::ApiResult;
use crate::models::{CreateDestinationRequest, Destination};
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

/// List all destinations, most recently created first
pub async fn list_destinations(
    State(state): State<SharedState>,
) -> ApiResult<Json<Vec<Destination>>> {
    info!("GET /api/destinations - Fetching all destinations");

    let destinations = state.destinations.list().await?;

    info!(
        "GET /api/destinations - Fetched {} destinations",
        destinations.len()
    );

    Ok(Json(destinations))
}

/// Create a new destination enriched with country facts
pub async fn create_destination(
    State(state): State<SharedState>,
    Json(payload): Json<CreateDestinationRequest>,
) -> ApiResult<(StatusCode, Json<Destination>)> {
    info!("POST /api/destinations - Adding new destination");

    let country = payload.country;

    info!(
        "POST /api/destinations - Fetching data for country: {}",
        country
    );
    let facts = state.countries.lookup(&country).await?;

    let destination = state
        .destinations
        .insert(&country, &facts.capital, facts.population, &facts.region)
        .await?;

    info!(
        "POST /api/destinations - Added new destination: id={} country={} capital={}",
        destination.id, destination.country, destination.capital
    );

    Ok((StatusCode::CREATED, Json(destination)))
}

/// Delete a destination by id. Ids that match nothing still succeed.
pub async fn delete_destination(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    info!("DELETE /api/destinations/{} - Deleting destination", id);

    state.destinations.delete_by_id(&id).await?;

    info!("DELETE /api/destinations/{} - Destination deleted", id);

    Ok(StatusCode::NO_CONTENT)
}
