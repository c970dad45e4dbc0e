// Quake Feed Port

use crate::domain::Earthquake;
use crate::error::Result;
use async_trait::async_trait;

/// Source of recent earthquakes
///
/// Implementations return quakes without addresses; reverse geocoding is a
/// separate port ([`crate::port::ReverseGeocoder`]).
#[async_trait]
pub trait QuakeFeed: Send + Sync {
    /// Fetch the most recent quakes, in feed order
    async fn fetch_recent(&self) -> Result<Vec<Earthquake>>;
}
