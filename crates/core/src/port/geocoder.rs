// Reverse Geocoder Port

use crate::error::Result;
use async_trait::async_trait;

/// Resolves coordinates into a human-readable address
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// `Ok(None)` when the service has no address for the point (open ocean)
    async fn lookup(&self, lat: f64, lng: f64) -> Result<Option<String>>;
}

/// Geocoder used when no API key is configured
pub struct NoGeocoder;

#[async_trait]
impl ReverseGeocoder for NoGeocoder {
    async fn lookup(&self, _lat: f64, _lng: f64) -> Result<Option<String>> {
        Ok(None)
    }
}
