// Time Provider Port (for testability)

use crate::domain::EpochMillis;

/// Time provider interface (allows mocking in tests)
pub trait TimeProvider: Send + Sync {
    /// Get current time in milliseconds since epoch
    fn now_millis(&self) -> EpochMillis;
}

/// System time provider (production)
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now_millis(&self) -> EpochMillis {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Frozen clock, e.g. for an explicit `--reference` time
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeProvider(pub EpochMillis);

impl TimeProvider for FixedTimeProvider {
    fn now_millis(&self) -> EpochMillis {
        self.0
    }
}
