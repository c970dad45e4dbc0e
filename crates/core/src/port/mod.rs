// Port Layer - Interfaces for external dependencies

pub mod geocoder;
pub mod quake_feed;
pub mod time_provider;

// Re-exports
pub use geocoder::{NoGeocoder, ReverseGeocoder};
pub use quake_feed::QuakeFeed;
pub use time_provider::{FixedTimeProvider, SystemTimeProvider, TimeProvider};
