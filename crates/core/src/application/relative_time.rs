// Relative time use case: "how long ago" against an injected clock

use crate::domain::{format_relative, parse_date, EpochMillis, FormatError};
use crate::port::TimeProvider;
use std::sync::Arc;

/// Formats instants relative to "now" as reported by a [`TimeProvider`]
///
/// The pure computation lives in [`format_relative`]; this wrapper only
/// supplies the reference instant.
#[derive(Clone)]
pub struct RelativeTimeFormatter {
    time_provider: Arc<dyn TimeProvider>,
}

impl RelativeTimeFormatter {
    pub fn new(time_provider: Arc<dyn TimeProvider>) -> Self {
        Self { time_provider }
    }

    /// Phrase for `event` relative to the provider's current time
    pub fn format_since_now(&self, event: EpochMillis) -> String {
        format_relative(event, self.time_provider.now_millis())
    }

    /// Parse a canonical date-time string, then format it relative to now
    pub fn format_date_str(&self, date_time: &str) -> Result<String, FormatError> {
        let event = parse_date(date_time)?;
        Ok(self.format_since_now(event))
    }
}
