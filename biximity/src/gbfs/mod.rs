//! GBFS (General Bikeshare Feed Specification) feed client.
//!
//! Reads the `station_information` and `station_status` feeds of a
//! bike-share system. Each call is a single GET with no retry.

mod client;
mod error;
mod types;

pub use client::{DEFAULT_INFO_URL, DEFAULT_STATUS_URL, GbfsClient, GbfsConfig, StationFeed};
pub use error::FeedError;
pub use types::{FeedResponse, StationsData};
