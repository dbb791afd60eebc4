//! Station records from the GBFS feeds and their display projection.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// Static station metadata from `station_information.json`.
///
/// The name is kept exactly as the feed sent it; see [`crate::text::decode_text`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationInfo {
    pub station_id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl StationInfo {
    /// The station's position.
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lon)
    }
}

/// Live availability from `station_status.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationStatus {
    pub station_id: String,
    pub num_bikes_available: u32,
    /// Not part of core GBFS; feeds without e-bikes omit it.
    #[serde(default)]
    pub num_ebikes_available: u32,
    pub num_docks_available: u32,
}

/// A station together with its squared degree-space distance to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedStation {
    pub info: StationInfo,
    /// Squared Euclidean distance in raw lon/lat degrees. Only meaningful
    /// for comparing stations against each other.
    pub sed: f64,
}

impl RankedStation {
    /// Rank `info` against the user's position.
    pub fn new(info: StationInfo, user: &Coordinates) -> Self {
        let d_lon = info.lon - user.longitude;
        let d_lat = info.lat - user.latitude;
        Self {
            sed: d_lon * d_lon + d_lat * d_lat,
            info,
        }
    }
}

/// Unit a [`Distance`] is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[serde(rename = "m")]
    Metres,
    #[serde(rename = "km")]
    Kilometres,
}

impl DistanceUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceUnit::Metres => "m",
            DistanceUnit::Kilometres => "km",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A display-ready distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    pub value: f64,
    pub unit: DistanceUnit,
}

impl Distance {
    pub fn new(value: f64, unit: DistanceUnit) -> Self {
        Self { value, unit }
    }

    /// Round a kilometre distance to the hundredth, then switch to metres
    /// when it is under 1 km.
    ///
    /// ```
    /// use biximity::domain::{Distance, DistanceUnit};
    ///
    /// assert_eq!(Distance::from_km(0.254), Distance::new(250.0, DistanceUnit::Metres));
    /// assert_eq!(Distance::from_km(3.14159), Distance::new(3.14, DistanceUnit::Kilometres));
    /// ```
    pub fn from_km(km: f64) -> Self {
        let rounded = (km * 100.0).round() / 100.0;
        if rounded < 1.0 {
            Self::new(rounded * 1000.0, DistanceUnit::Metres)
        } else {
            Self::new(rounded, DistanceUnit::Kilometres)
        }
    }
}

/// The trimmed projection handed to the presenter.
///
/// Availability counts are `None` when the status feed had no entry for
/// the station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayStation {
    pub name: String,
    pub num_bikes_available: Option<u32>,
    pub num_ebikes_available: Option<u32>,
    pub num_docks_available: Option<u32>,
    pub distance: Distance,
}
