//! Geographic coordinates and great-circle distance.

use serde::{Deserialize, Serialize};

/// Mean Earth radius used for haversine distances, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Error returned when a latitude or longitude is outside WGS84 ranges.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinates: {reason}")]
pub struct InvalidCoordinates {
    reason: &'static str,
}

/// A WGS84 position in decimal degrees.
///
/// Field names match the JSON written to the coordinates cache.
///
/// # Examples
///
/// ```
/// use biximity::domain::Coordinates;
///
/// let here = Coordinates::parse_checked(45.5017, -73.5673).unwrap();
/// assert_eq!(here.latitude, 45.5017);
///
/// assert!(Coordinates::parse_checked(91.0, 0.0).is_err());
/// assert!(Coordinates::parse_checked(0.0, -180.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Create coordinates without range checks.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Create coordinates from user input, rejecting out-of-range values.
    pub fn parse_checked(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidCoordinates {
                reason: "latitude must be within [-90, 90]",
            });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinates {
                reason: "longitude must be within [-180, 180]",
            });
        }
        Ok(Self::new(latitude, longitude))
    }

    /// Great-circle distance to `other` in kilometres (haversine).
    pub fn haversine_km(&self, other: &Coordinates) -> f64 {
        haversine_km(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

/// Haversine distance between two points given in degrees, in kilometres.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin() * (d_lat / 2.0).sin()
        + lat1.to_radians().cos()
            * lat2.to_radians().cos()
            * (d_lon / 2.0).sin()
            * (d_lon / 2.0).sin();
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
