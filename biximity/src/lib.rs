//! Nearest bike-share stations.
//!
//! Fetches GBFS station data, picks the three stations closest to the
//! user and formats their bike, e-bike and dock availability. When the
//! network or the location lookup fails, cached data is shown instead.

pub mod cache;
pub mod config;
pub mod domain;
pub mod gbfs;
pub mod location;
pub mod nearest;
pub mod pipeline;
pub mod present;
pub mod text;
