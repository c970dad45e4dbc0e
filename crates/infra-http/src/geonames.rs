// GeoNames earthquake feed adapter

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use quakewatch_core::domain::Earthquake;
use quakewatch_core::port::QuakeFeed;
use quakewatch_core::{AppError, Result};

pub const DEFAULT_FEED_URL: &str = "http://api.geonames.org/earthquakesJSON";
pub const DEFAULT_USERNAME: &str = "demo";

/// GeoNames reports UTC wall-clock time without an offset
const FEED_UTC_OFFSET: &str = "+0000";

/// Area to fetch quakes for, in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            north: 44.1,
            south: -9.9,
            east: -22.4,
            west: 55.2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeonamesConfig {
    pub feed_url: String,
    pub username: String,
    pub bbox: BoundingBox,
}

impl Default for GeonamesConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            bbox: BoundingBox::default(),
        }
    }
}

impl GeonamesConfig {
    fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("formatted", "true".to_string()),
            ("north", self.bbox.north.to_string()),
            ("south", self.bbox.south.to_string()),
            ("east", self.bbox.east.to_string()),
            ("west", self.bbox.west.to_string()),
            ("username", self.username.clone()),
        ]
    }
}

/// GeoNames implementation of [`QuakeFeed`]
pub struct GeonamesFeed {
    client: reqwest::Client,
    config: GeonamesConfig,
}

impl GeonamesFeed {
    pub fn new(client: reqwest::Client, config: GeonamesConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl QuakeFeed for GeonamesFeed {
    async fn fetch_recent(&self) -> Result<Vec<Earthquake>> {
        debug!(url = %self.config.feed_url, "Requesting earthquake feed");

        let body = self
            .client
            .get(&self.config.feed_url)
            .query(&self.config.query())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| AppError::Feed(format!("Unable to fetch earthquakes: {}", e)))?
            .text()
            .await
            .map_err(|e| AppError::Feed(format!("Unable to read feed body: {}", e)))?;

        let quakes = parse_feed_body(&body)?;
        info!(count = quakes.len(), "Parsed earthquake feed");
        Ok(quakes)
    }
}

#[derive(Deserialize)]
struct FeedBody {
    earthquakes: Option<Vec<FeedQuake>>,
    status: Option<FeedStatus>,
}

#[derive(Deserialize)]
struct FeedQuake {
    datetime: String,
    src: String,
    eqid: String,
    magnitude: f64,
    depth: f64,
    lat: f64,
    lng: f64,
}

/// GeoNames error envelope, e.g. `{"status":{"message":"user does not exist.","value":10}}`
#[derive(Deserialize)]
struct FeedStatus {
    message: String,
    value: i64,
}

impl From<FeedQuake> for Earthquake {
    fn from(q: FeedQuake) -> Self {
        Earthquake::new(
            format!("{} {}", q.datetime.trim(), FEED_UTC_OFFSET),
            q.src,
            q.eqid,
            q.magnitude,
            q.depth,
            q.lat,
            q.lng,
        )
    }
}

/// Decode a GeoNames `earthquakesJSON` response body
pub fn parse_feed_body(body: &str) -> Result<Vec<Earthquake>> {
    let parsed: FeedBody = serde_json::from_str(body)?;

    if let Some(status) = parsed.status {
        return Err(AppError::Feed(format!(
            "GeoNames error {}: {}",
            status.value, status.message
        )));
    }

    let quakes = parsed
        .earthquakes
        .ok_or_else(|| AppError::Feed("Response has no 'earthquakes' array".to_string()))?;

    Ok(quakes.into_iter().map(Earthquake::from).collect())
}
