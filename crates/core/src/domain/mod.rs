// Domain Layer - Pure business logic and entities

pub mod earthquake;
pub mod error;
pub mod map;
pub mod relative_time;

// Re-exports
pub use earthquake::{DepthClass, Earthquake, QuakeId, Severity};
pub use error::DomainError;
pub use map::{LatLng, MapFocus, MapMarker};
pub use relative_time::{
    format_relative, parse_date, EpochMillis, FormatError, RelativeTime, TimeUnit,
    DATE_TIME_FORMAT,
};
