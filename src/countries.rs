//! Outbound client for the country lookup service
//!
//! Wraps a single `GET {base}/name/{country}` call against a REST
//! Countries compatible API and extracts the fields the destinations
//! table stores.

use crate::error::AppError;
use serde::Deserialize;
use tracing::debug;
use url::Url;

/// Facts extracted from the first matching country record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryFacts {
    pub capital: String,
    pub population: i32,
    pub region: String,
}

/// Wire shape of one country record, reduced to the fields we read.
/// The service reports population as a plain JSON number that can exceed
/// what the destinations table stores, so it is decoded wide.
#[derive(Debug, Deserialize)]
struct CountryRecord {
    #[serde(default)]
    capital: Vec<String>,
    population: i64,
    region: String,
}

/// Client for the country lookup service
pub struct CountryClient {
    client: reqwest::Client,
    base_url: Url,
}

impl CountryClient {
    /// Build a client against the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be
    /// constructed.
    pub fn new(base_url: Url) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, base_url })
    }

    /// Look up capital, population and region for a country by name.
    ///
    /// The name is forwarded as-is; the service decides whether it
    /// matches anything. No match, a non-2xx status, a transport failure
    /// and a malformed payload all collapse into the same lookup error.
    pub async fn lookup(&self, country: &str) -> Result<CountryFacts, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Lookup("countries base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push("name")
            .push(country);

        debug!("Fetching country data from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Lookup(format!("request to country service failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Lookup(format!(
                "country service returned status {} for '{}'",
                status.as_u16(),
                country
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::Lookup(format!("failed to read country service body: {e}")))?;

        first_match(&body)
    }
}

/// Decode the lookup payload and pull out the first match.
fn first_match(body: &[u8]) -> Result<CountryFacts, AppError> {
    let records: Vec<CountryRecord> = serde_json::from_slice(body)
        .map_err(|e| AppError::Lookup(format!("invalid country service payload: {e}")))?;

    let record = records
        .into_iter()
        .next()
        .ok_or_else(|| AppError::Lookup("country service returned no matching records".to_string()))?;

    let capital = record
        .capital
        .into_iter()
        .next()
        .ok_or_else(|| AppError::Lookup("country record has no capital".to_string()))?;

    Ok(CountryFacts {
        capital,
        population: i32::try_from(record.population).unwrap_or(i32::MAX),
        region: record.region,
    })
}
