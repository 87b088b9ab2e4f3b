//! Rural sampling areas and the coarse land filter.

use serde::{Deserialize, Serialize};

/// Latitude/longitude bounding rectangle used to bias sampling toward land.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuralArea {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl RuralArea {
    pub const fn new(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> Self {
        Self {
            lat_min,
            lat_max,
            lon_min,
            lon_max,
        }
    }

    /// Check whether a point lies inside the rectangle (edges inclusive).
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&lat) && (self.lon_min..=self.lon_max).contains(&lon)
    }
}

/// The four rural regions of Peru the demo deployment is drawn from.
pub const RURAL_AREAS: [RuralArea; 4] = [
    RuralArea::new(-16.0, -13.0, -74.0, -71.0),
    RuralArea::new(-14.0, -11.0, -77.0, -75.0),
    RuralArea::new(-10.0, -8.0, -76.0, -73.0),
    RuralArea::new(-15.0, -12.0, -70.0, -68.0),
];

/// Longitude west of which the filter treats a point as sea.
const SEA_LON_MAX: f64 = -80.0;
/// Latitude north of which the filter treats a western point as sea.
const SEA_LAT_MIN: f64 = -18.0;

/// Coarse land test: excludes the Pacific west of -80° lon and north of -18° lat.
pub fn is_land(lat: f64, lon: f64) -> bool {
    !(lon < SEA_LON_MAX && lat > SEA_LAT_MIN)
}

/// Check whether a point falls inside any of the given areas.
pub fn in_any_area(areas: &[RuralArea], lat: f64, lon: f64) -> bool {
    areas.iter().any(|area| area.contains(lat, lon))
}
