//! Domain types for bike-share stations.
//!
//! These are plain data records. Stations come from the GBFS feeds as-is;
//! `RankedStation` and `DisplayStation` are the intermediate and final
//! shapes produced by nearest-station selection.

mod coordinates;
mod station;

pub use coordinates::{Coordinates, EARTH_RADIUS_KM, InvalidCoordinates, haversine_km};
pub use station::{
    DisplayStation, Distance, DistanceUnit, RankedStation, StationInfo, StationStatus,
};
