//! GBFS response envelopes.

use serde::Deserialize;

/// Top-level GBFS document: `{ "last_updated": .., "ttl": .., "data": .. }`.
///
/// Only `data` is read.
#[derive(Debug, Deserialize)]
pub struct FeedResponse<T> {
    pub data: StationsData<T>,
}

/// The `data` object of the station information and status feeds.
#[derive(Debug, Deserialize)]
pub struct StationsData<T> {
    pub stations: Vec<T>,
}
