//! Route definitions and router setup
//!
//! Configures all API routes and middleware.

mod destinations;

use crate::config::Settings;
use crate::state::SharedState;
use axum::{
    http::{header, Method},
    routing::{delete, get},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Create the application router with all routes and middleware
pub fn create_router(state: SharedState, settings: &Settings) -> Router {
    // Build CORS layer
    let cors = build_cors_layer(settings);

    // Every request and response is logged before dispatch
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Build middleware stack
    let middleware = ServiceBuilder::new().layer(trace_layer).layer(cors);

    // Build the router
    Router::new()
        // Health check
        .route("/", get(health_check))
        // Destination routes
        .route(
            "/api/destinations",
            get(destinations::list_destinations).post(destinations::create_destination),
        )
        .route(
            "/api/destinations/{id}",
            delete(destinations::delete_destination),
        )
        // Apply middleware and state
        .layer(middleware)
        .with_state(state)
}

/// Build CORS layer from settings. No configured origins means any origin.
fn build_cors_layer(settings: &Settings) -> CorsLayer {
    let origins: Vec<_> = settings
        .cors
        .allowed_origins
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .max_age(Duration::from_secs(3600))
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .max_age(Duration::from_secs(3600))
    }
}

/// Health check endpoint. Touches no dependencies.
async fn health_check() -> &'static str {
    "Server is working"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CorsConfig, CountriesConfig, DatabaseConfig, ServerConfig};
    use crate::countries::CountryClient;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_settings() -> Settings {
        Settings {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            cors: CorsConfig::default(),
            countries: CountriesConfig::default(),
        }
    }

    // Deadpool pools are lazy, so a router can be built against an
    // unconnected database for handlers that never touch it.
    fn test_state() -> SharedState {
        let pool =
            crate::db::create_pool(&DatabaseConfig::default()).expect("lazy pool should build");
        let countries = CountryClient::new(CountriesConfig::default().base_url)
            .expect("lookup client should build");
        Arc::new(AppState::new(pool, countries))
    }

    #[tokio::test]
    async fn health_check_responds_with_plain_confirmation() {
        let app = create_router(test_state(), &test_settings());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .body(Body::empty())
                    .expect("request should build"),
            )
            .await
            .expect("router should respond");

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should collect");
        assert_eq!(&bytes[..], &b"Server is working"[..]);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = create_router(test_state(), &test_settings());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/unknown")
                    .body(Body::empty())
                    .expect("request should build"),
            )
            .await
            .expect("router should respond");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
