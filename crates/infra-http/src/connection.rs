// Shared HTTP client

use quakewatch_core::{AppError, Result};
use std::time::Duration;

/// Request timeout for every upstream call
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the reqwest client shared by all adapters
pub fn create_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .user_agent(concat!("quakewatch/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))
}
