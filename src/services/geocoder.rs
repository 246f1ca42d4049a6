use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when resolving coordinates to an address
#[derive(Debug, Error)]
pub enum GeocoderError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("no address found for location ({0}, {1})")]
    NotFound(f64, f64),

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

/// Reverse-geocoding API client
///
/// Resolves a coordinate pair to its locality-level formatted address.
/// Used only while loading participant data, never by the matching
/// engine itself.
pub struct ReverseGeocoder {
    endpoint: String,
    api_key: String,
    client: Client,
}

impl ReverseGeocoder {
    pub fn new(endpoint: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint,
            api_key,
            client,
        }
    }

    /// Resolve the locality formatted address for a coordinate pair
    ///
    /// Returns the first result's formatted address; an empty result set
    /// maps to `GeocoderError::NotFound`.
    pub async fn formatted_address(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<String, GeocoderError> {
        let latlng = format!("{},{}", latitude, longitude);
        let url = format!(
            "{}?latlng={}&result_type=locality&key={}",
            self.endpoint.trim_end_matches('/'),
            urlencoding::encode(&latlng),
            self.api_key
        );

        tracing::debug!("Reverse geocoding ({}, {})", latitude, longitude);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(GeocoderError::ApiError(format!(
                "Reverse geocode request failed: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let results = json
            .get("results")
            .and_then(|r| r.as_array())
            .ok_or_else(|| GeocoderError::InvalidResponse("Missing results array".into()))?;

        let first = results
            .first()
            .ok_or(GeocoderError::NotFound(latitude, longitude))?;

        first
            .get("formatted_address")
            .and_then(|a| a.as_str())
            .map(|a| a.to_string())
            .ok_or_else(|| {
                GeocoderError::InvalidResponse("Missing formatted_address field".into())
            })
    }
}
