//! Data models and DTOs (Data Transfer Objects)
//!
//! Contains the request/response structures used by the API.

use serde::{Deserialize, Serialize};

/// A persisted destination: a country plus facts derived from the lookup
/// service at creation time. The database assigns `id`.
#[derive(Debug, Clone, Serialize)]
pub struct Destination {
    pub id: i32,
    pub country: String,
    pub capital: String,
    pub population: i32,
    pub region: String,
}

/// Request to create a new destination
#[derive(Debug, Deserialize)]
pub struct CreateDestinationRequest {
    pub country: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn destination_serializes_flat() {
        let destination = Destination {
            id: 1,
            country: "France".to_string(),
            capital: "Paris".to_string(),
            population: 67_000_000,
            region: "Europe".to_string(),
        };

        let json = serde_json::to_value(&destination).expect("destination should serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "country": "France",
                "capital": "Paris",
                "population": 67_000_000,
                "region": "Europe"
            })
        );
    }

    #[test]
    fn create_request_deserializes_country_field() {
        let request: CreateDestinationRequest =
            serde_json::from_str(r#"{"country":"France"}"#).expect("request should deserialize");
        assert_eq!(request.country, "France");
    }
}
