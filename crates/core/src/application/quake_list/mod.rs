// Quake List Service - Fetch the feed once and prepare list + map data

pub mod board;

pub use board::{QuakeBoard, QuakeRow};

use crate::domain::Earthquake;
use crate::error::Result;
use crate::port::{QuakeFeed, ReverseGeocoder};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Quake List Service
pub struct QuakeListService {
    feed: Arc<dyn QuakeFeed>,
    geocoder: Arc<dyn ReverseGeocoder>,
}

impl QuakeListService {
    pub fn new(feed: Arc<dyn QuakeFeed>, geocoder: Arc<dyn ReverseGeocoder>) -> Self {
        Self { feed, geocoder }
    }

    /// Fetch recent quakes and resolve their addresses
    ///
    /// A failed feed fetch is returned as an error. A failed address lookup
    /// only loses that quake's address; its label falls back to coordinates.
    pub async fn load(&self) -> Result<QuakeBoard> {
        let quakes = self.feed.fetch_recent().await?;
        info!(count = quakes.len(), "Fetched earthquakes");

        // join_all keeps input order
        let quakes = join_all(quakes.into_iter().map(|quake| self.resolve_address(quake))).await;

        Ok(QuakeBoard::new(quakes))
    }

    async fn resolve_address(&self, quake: Earthquake) -> Earthquake {
        match self.geocoder.lookup(quake.lat, quake.lng).await {
            Ok(address) => {
                debug!(eq_id = %quake.eq_id, found = address.is_some(), "Reverse geocoded");
                quake.with_address(address)
            }
            Err(e) => {
                warn!(eq_id = %quake.eq_id, error = %e, "Reverse geocoding failed");
                quake.with_address(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use async_trait::async_trait;

    struct MockQuakeFeed {
        quakes: Vec<Earthquake>,
        fail: bool,
    }

    #[async_trait]
    impl QuakeFeed for MockQuakeFeed {
        async fn fetch_recent(&self) -> Result<Vec<Earthquake>> {
            if self.fail {
                return Err(AppError::Feed("connection refused".to_string()));
            }
            Ok(self.quakes.clone())
        }
    }

    /// Knows addresses for positive latitudes, fails for lat == 0
    struct MockGeocoder;

    #[async_trait]
    impl ReverseGeocoder for MockGeocoder {
        async fn lookup(&self, lat: f64, lng: f64) -> Result<Option<String>> {
            if lat == 0.0 {
                return Err(AppError::Geocoder("quota exceeded".to_string()));
            }
            if lat > 0.0 {
                Ok(Some(format!("Somewhere near {}, {}", lat, lng)))
            } else {
                Ok(None)
            }
        }
    }

    fn quake(eq_id: &str, lat: f64) -> Earthquake {
        Earthquake::new("2017-05-05 16:30:00 +0000", "us", eq_id, 5.0, 10.0, lat, 10.0)
    }

    #[tokio::test]
    async fn test_load_resolves_addresses_in_order() {
        let feed = Arc::new(MockQuakeFeed {
            quakes: vec![quake("a", 1.0), quake("b", -1.0), quake("c", 2.0)],
            fail: false,
        });
        let service = QuakeListService::new(feed, Arc::new(MockGeocoder));

        let board = service.load().await.unwrap();
        let quakes = board.quakes();

        assert_eq!(quakes.len(), 3);
        assert_eq!(quakes[0].eq_id, "a");
        assert_eq!(quakes[0].address.as_deref(), Some("Somewhere near 1, 10"));
        assert_eq!(quakes[1].address, None);
        assert_eq!(quakes[2].eq_id, "c");
    }

    #[tokio::test]
    async fn test_geocoder_failure_keeps_quake() {
        let feed = Arc::new(MockQuakeFeed {
            quakes: vec![quake("a", 0.0)],
            fail: false,
        });
        let service = QuakeListService::new(feed, Arc::new(MockGeocoder));

        let board = service.load().await.unwrap();
        assert_eq!(board.len(), 1);
        assert_eq!(board.quakes()[0].location_label(), "0.0, 10.0");
    }

    #[tokio::test]
    async fn test_feed_failure_is_error() {
        let feed = Arc::new(MockQuakeFeed {
            quakes: vec![],
            fail: true,
        });
        let service = QuakeListService::new(feed, Arc::new(MockGeocoder));

        let err = service.load().await.unwrap_err();
        assert!(err.to_string().contains("connection refused"));
    }
}
