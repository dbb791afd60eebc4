//! GBFS feed client.

use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{StationInfo, StationStatus};

use super::error::FeedError;
use super::types::FeedResponse;

/// Default station information feed (BIXI Montréal).
pub const DEFAULT_INFO_URL: &str = "https://gbfs.velobixi.com/gbfs/en/station_information.json";

/// Default station status feed (BIXI Montréal).
pub const DEFAULT_STATUS_URL: &str = "https://gbfs.velobixi.com/gbfs/en/station_status.json";

/// Source of station metadata and live availability.
///
/// This abstraction allows the pipeline to be tested without a network.
pub trait StationFeed {
    /// Fetch the full station list.
    fn fetch_stations(&self) -> impl Future<Output = Result<Vec<StationInfo>, FeedError>> + Send;

    /// Fetch live availability for every station.
    fn fetch_statuses(&self)
    -> impl Future<Output = Result<Vec<StationStatus>, FeedError>> + Send;
}

/// Configuration for the GBFS client.
#[derive(Debug, Clone)]
pub struct GbfsConfig {
    /// URL of `station_information.json`
    pub info_url: String,
    /// URL of `station_status.json`
    pub status_url: String,
    /// Request timeout; `None` leaves reqwest's default (no timeout)
    pub timeout_secs: Option<u64>,
}

impl GbfsConfig {
    /// Create a config pointing at the given feeds.
    pub fn new(info_url: impl Into<String>, status_url: impl Into<String>) -> Self {
        Self {
            info_url: info_url.into(),
            status_url: status_url.into(),
            timeout_secs: None,
        }
    }

    /// Set a request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

impl Default for GbfsConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INFO_URL, DEFAULT_STATUS_URL)
    }
}

/// HTTP client for a GBFS system.
#[derive(Debug, Clone)]
pub struct GbfsClient {
    http: reqwest::Client,
    info_url: String,
    status_url: String,
}

impl GbfsClient {
    /// Create a new GBFS client.
    pub fn new(config: GbfsConfig) -> Result<Self, FeedError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| FeedError::Config(e.to_string()))?;

        Ok(Self {
            http,
            info_url: config.info_url,
            status_url: config.status_url,
        })
    }

    /// GET a feed and return its `data.stations` array.
    async fn fetch_feed<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, FeedError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;

        let feed: FeedResponse<T> = serde_json::from_str(&body).map_err(|e| FeedError::Json {
            message: e.to_string(),
        })?;

        debug!(url, count = feed.data.stations.len(), "fetched feed");
        Ok(feed.data.stations)
    }
}

impl StationFeed for GbfsClient {
    async fn fetch_stations(&self) -> Result<Vec<StationInfo>, FeedError> {
        self.fetch_feed(&self.info_url).await
    }

    async fn fetch_statuses(&self) -> Result<Vec<StationStatus>, FeedError> {
        self.fetch_feed(&self.status_url).await
    }
}
