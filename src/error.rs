//! Error handling module
//!
//! Provides the unified error type for the entire request-handling surface.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] tokio_postgres::Error),

    #[error("Pool error: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),

    #[error("Country lookup error: {0}")]
    Lookup(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error response structure: a generic message plus the underlying detail
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let details = match &self {
            AppError::Database(e) => {
                error!("Database error: {:?}", e);
                e.to_string()
            }
            AppError::Pool(e) => {
                error!("Pool error: {:?}", e);
                e.to_string()
            }
            AppError::Lookup(msg) => {
                error!("Country lookup error: {}", msg);
                msg.clone()
            }
            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                msg.clone()
            }
            AppError::Config(msg) => {
                error!("Configuration error: {}", msg);
                msg.clone()
            }
        };

        // Clients see a uniform 500 regardless of root cause; the log above
        // is the diagnostic channel.
        let body = Json(ErrorResponse {
            error: "Internal server error".to_string(),
            details,
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn lookup_error_surfaces_as_generic_500() {
        let response = AppError::Lookup("no matching records".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("response body should collect");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("body should be JSON");
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["details"], "no matching records");
    }

    #[tokio::test]
    async fn internal_error_surfaces_as_generic_500() {
        let response =
            AppError::Internal("invalid destination id 'abc'".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("response body should collect");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("body should be JSON");
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["details"], "invalid destination id 'abc'");
    }
}
