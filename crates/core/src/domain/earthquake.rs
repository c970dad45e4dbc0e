// Earthquake Domain Model

use super::error::Result;
use super::relative_time::{parse_date, EpochMillis};
use serde::{Deserialize, Serialize};

/// Earthquake ID as provided by the source network
pub type QuakeId = String;

/// Strength bucket, drives marker and label colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Safe,
    Warning,
    Danger,
}

impl Severity {
    pub fn from_magnitude(magnitude: f64) -> Self {
        if magnitude > 8.0 {
            Severity::Danger
        } else if magnitude > 4.0 {
            Severity::Warning
        } else {
            Severity::Safe
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Safe => write!(f, "SAFE"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Danger => write!(f, "DANGER"),
        }
    }
}

/// Hypocenter depth class (USGS convention)
///
/// - Shallow: 0 to 70 km
/// - Intermediate: 70 to 300 km
/// - Deep: 300 to 700 km
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DepthClass {
    Shallow,
    Intermediate,
    Deep,
}

impl DepthClass {
    pub fn from_depth_km(depth: f64) -> Self {
        if depth > 300.0 {
            DepthClass::Deep
        } else if depth > 70.0 {
            DepthClass::Intermediate
        } else {
            DepthClass::Shallow
        }
    }

    /// Label colour on the magnitude scale
    pub fn severity(self) -> Severity {
        match self {
            DepthClass::Deep => Severity::Danger,
            DepthClass::Intermediate => Severity::Warning,
            DepthClass::Shallow => Severity::Safe,
        }
    }
}

impl std::fmt::Display for DepthClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DepthClass::Shallow => write!(f, "Shallow"),
            DepthClass::Intermediate => write!(f, "Intermediate"),
            DepthClass::Deep => write!(f, "Deep"),
        }
    }
}

/// Single earthquake as reported by the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Earthquake {
    /// Canonical date-time string (`YYYY-MM-DD HH:MM:SS +HHMM`)
    pub date_time: String,
    /// Source station / network
    pub src: String,
    pub eq_id: QuakeId,
    /// Richter scale
    pub magnitude: f64,
    /// Kilometres
    pub depth: f64,
    /// Reverse-geocoded address, if any
    pub address: Option<String>,
    pub lat: f64,
    pub lng: f64,
}

impl Earthquake {
    pub fn new(
        date_time: impl Into<String>,
        src: impl Into<String>,
        eq_id: impl Into<String>,
        magnitude: f64,
        depth: f64,
        lat: f64,
        lng: f64,
    ) -> Self {
        Self {
            date_time: date_time.into(),
            src: src.into(),
            eq_id: eq_id.into(),
            magnitude,
            depth,
            address: None,
            lat,
            lng,
        }
    }

    pub fn with_address(mut self, address: Option<String>) -> Self {
        self.address = address;
        self
    }

    pub fn severity(&self) -> Severity {
        Severity::from_magnitude(self.magnitude)
    }

    pub fn depth_class(&self) -> DepthClass {
        DepthClass::from_depth_km(self.depth)
    }

    /// Address when known, otherwise the raw coordinates
    pub fn location_label(&self) -> String {
        match self.address.as_deref() {
            Some(address) if !address.is_empty() => address.to_string(),
            // Debug keeps the trailing ".0" of whole-degree coordinates
            _ => format!("{:?}, {:?}", self.lat, self.lng),
        }
    }

    pub fn occurred_at(&self) -> Result<EpochMillis> {
        Ok(parse_date(&self.date_time)?)
    }
}
