// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Feed error: {0}")]
    Feed(String),

    #[error("Geocoder error: {0}")]
    Geocoder(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

// Note: reqwest::Error conversion is handled in the infra-http crate
// by converting to AppError::Feed / AppError::Geocoder (String)
