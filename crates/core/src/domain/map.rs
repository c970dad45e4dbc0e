// Map Domain Model
//
// Renderer-agnostic description of what the map shows: one marker with a
// magnitude-sized circle per quake, plus the camera focus.

use super::earthquake::{Earthquake, Severity};
use serde::{Deserialize, Serialize};

/// Zoom level used when a list entry is selected
pub const FOCUS_ZOOM: f32 = 10.0;

/// Zoom level of the starting camera
pub const INITIAL_ZOOM: f32 = 17.0;

/// Starting camera position (Portland, OR)
pub const INITIAL_POSITION: LatLng = LatLng {
    lat: 45.513734,
    lng: -122.680087,
};

/// Circle radius per unit of magnitude, in metres
pub const RADIUS_PER_MAGNITUDE_M: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Marker plus magnitude circle for one quake
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub eq_id: String,
    pub position: LatLng,
    pub radius_m: f64,
    pub severity: Severity,
}

impl MapMarker {
    pub fn for_quake(quake: &Earthquake) -> Self {
        Self {
            eq_id: quake.eq_id.clone(),
            position: LatLng::new(quake.lat, quake.lng),
            radius_m: RADIUS_PER_MAGNITUDE_M * quake.magnitude,
            severity: quake.severity(),
        }
    }
}

/// Camera target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapFocus {
    pub position: LatLng,
    pub zoom: f32,
}

impl MapFocus {
    pub fn initial() -> Self {
        Self {
            position: INITIAL_POSITION,
            zoom: INITIAL_ZOOM,
        }
    }

    pub fn on_quake(quake: &Earthquake) -> Self {
        Self {
            position: LatLng::new(quake.lat, quake.lng),
            zoom: FOCUS_ZOOM,
        }
    }
}
