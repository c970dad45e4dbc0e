// QuakeWatch Infrastructure - HTTP Adapters
// Implements: QuakeFeed (GeoNames), ReverseGeocoder (Google Geocoding)

mod connection;
pub mod geonames;
pub mod google_geocoder;

pub use connection::{create_client, HTTP_TIMEOUT};
pub use geonames::{BoundingBox, GeonamesConfig, GeonamesFeed};
pub use google_geocoder::GoogleGeocoder;
