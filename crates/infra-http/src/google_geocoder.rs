// Google Geocoding API adapter (reverse lookup only)

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use quakewatch_core::port::ReverseGeocoder;
use quakewatch_core::{AppError, Result};

pub const DEFAULT_GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Google implementation of [`ReverseGeocoder`]
pub struct GoogleGeocoder {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GoogleGeocoder {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self::with_endpoint(client, DEFAULT_GEOCODE_URL, api_key)
    }

    pub fn with_endpoint(
        client: reqwest::Client,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl ReverseGeocoder for GoogleGeocoder {
    async fn lookup(&self, lat: f64, lng: f64) -> Result<Option<String>> {
        let latlng = format!("{},{}", lat, lng);

        let body = self
            .client
            .get(&self.endpoint)
            .query(&[("latlng", latlng.as_str()), ("key", self.api_key.as_str())])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| AppError::Geocoder(format!("Lookup for {} failed: {}", latlng, e)))?
            .text()
            .await
            .map_err(|e| AppError::Geocoder(format!("Unable to read geocode body: {}", e)))?;

        let address = parse_geocode_body(&body)?;
        debug!(latlng = %latlng, found = address.is_some(), "Geocode response");
        Ok(address)
    }
}

#[derive(Deserialize)]
struct GeocodeBody {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Deserialize)]
struct GeocodeResult {
    formatted_address: Option<String>,
}

/// First `formatted_address` of an `OK` response; `None` for any other status
pub fn parse_geocode_body(body: &str) -> Result<Option<String>> {
    let parsed: GeocodeBody = serde_json::from_str(body)?;

    if parsed.status != "OK" {
        return Ok(None);
    }

    Ok(parsed
        .results
        .into_iter()
        .next()
        .and_then(|r| r.formatted_address))
}
