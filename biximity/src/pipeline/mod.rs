//! The fetch → locate → select → merge pipeline with its fallbacks.
//!
//! A run either produces live data or degrades exactly once:
//!
//! - station feeds unreachable: select again from the cached raw stations
//!   (no availability counts) and flag [`Disclaimer::NoInternet`];
//! - no live or cached position: show the last cached selection as-is;
//! - neither fallback available: fail.
//!
//! Nothing is retried and the locator is consulted at most once.

use chrono::NaiveTime;
use tracing::{info, warn};

use crate::cache::{KeyValueStore, WidgetCache};
use crate::domain::DisplayStation;
use crate::gbfs::{FeedError, StationFeed};
use crate::location::{LocationOutcome, LocationProvider, Locator};
use crate::nearest::{merge_statuses, select_nearest};
use crate::present::{Disclaimer, Language, Panel};


/// Fatal pipeline failures: no panel can be shown.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Feeds failed and nothing was cached
    #[error("could not fetch stations and no cached stations exist: {0}")]
    NoStations(#[source] FeedError),

    /// No position to rank against and no previous selection to show
    #[error("could not determine location and no previous selection exists")]
    NoLocation,
}

/// Where the shown stations came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Fresh feeds.
    Live,
    /// Selection recomputed from the cached raw station list.
    CachedStations,
    /// The previous run's selection, unchanged.
    CachedSelection,
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub stations: Vec<DisplayStation>,
    pub disclaimer: Option<Disclaimer>,
    pub source: Source,
}

impl Outcome {
    /// Wrap the outcome for display.
    pub fn into_panel(self, language: Language, updated_at: NaiveTime) -> Panel {
        Panel::new(self.stations, self.disclaimer, language, updated_at)
    }
}

/// Why the live path gave up.
enum LiveFailure {
    Feed(FeedError),
    NoCoordinates(LocationOutcome),
}

/// Wires a station feed, a location provider and the cache together.
pub struct Pipeline<F, P, S> {
    feed: F,
    locator: Locator<P>,
    cache: WidgetCache<S>,
}

impl<F, P, S> Pipeline<F, P, S>
where
    F: StationFeed,
    P: LocationProvider,
    S: KeyValueStore,
{
    pub fn new(feed: F, locator: Locator<P>, cache: WidgetCache<S>) -> Self {
        Self {
            feed,
            locator,
            cache,
        }
    }

    /// Access the cache (for inspection after a run).
    pub fn cache(&self) -> &WidgetCache<S> {
        &self.cache
    }

    /// Run the pipeline once.
    pub async fn run(&self) -> Result<Outcome, PipelineError> {
        let mut location = None;
        let live = self.run_live(&mut location).await;

        match live {
            Ok(outcome) => Ok(outcome),
            Err(LiveFailure::Feed(error)) => self.from_cached_stations(error, location).await,
            Err(LiveFailure::NoCoordinates(outcome)) => {
                let disclaimer = outcome
                    .disclaimer
                    .unwrap_or(Disclaimer::LocationUnavailable);
                self.from_cached_selection(disclaimer)
            }
        }
    }

    async fn run_live(
        &self,
        location: &mut Option<LocationOutcome>,
    ) -> Result<Outcome, LiveFailure> {
        let stations = self
            .feed
            .fetch_stations()
            .await
            .map_err(LiveFailure::Feed)?;
        info!(count = stations.len(), "fetched station information");

        if let Err(e) = self.cache.save_stations(&stations) {
            warn!(error = %e, "failed to cache stations");
        }

        let outcome = self.locator.coordinates(&self.cache).await;
        *location = Some(outcome);
        let user = outcome
            .coordinates
            .ok_or(LiveFailure::NoCoordinates(outcome))?;

        let candidates = select_nearest(&stations, &user);

        let statuses = self
            .feed
            .fetch_statuses()
            .await
            .map_err(LiveFailure::Feed)?;
        info!(count = statuses.len(), "fetched station status");

        let selection = merge_statuses(candidates, &statuses);
        if let Err(e) = self.cache.save_selection(&selection) {
            warn!(error = %e, "failed to cache selection");
        }

        Ok(Outcome {
            stations: selection,
            disclaimer: outcome.disclaimer,
            source: Source::Live,
        })
    }

    /// Network fallback: rank the cached raw list again.
    async fn from_cached_stations(
        &self,
        error: FeedError,
        location: Option<LocationOutcome>,
    ) -> Result<Outcome, PipelineError> {
        warn!(error = %error, "station feed unavailable, falling back to cached stations");

        let Some(stations) = self.cache.load_saved_stations() else {
            return Err(PipelineError::NoStations(error));
        };

        let location = match location {
            Some(location) => location,
            None => self.locator.coordinates(&self.cache).await,
        };

        match location.coordinates {
            Some(user) => Ok(Outcome {
                stations: merge_statuses(select_nearest(&stations, &user), &[]),
                disclaimer: Some(Disclaimer::NoInternet),
                source: Source::CachedStations,
            }),
            None => self.from_cached_selection(Disclaimer::NoInternet),
        }
    }

    /// No-position fallback: show the previous selection unchanged.
    fn from_cached_selection(&self, disclaimer: Disclaimer) -> Result<Outcome, PipelineError> {
        warn!("no coordinates to rank against, falling back to previous selection");

        let stations = self
            .cache
            .load_saved_selection()
            .ok_or(PipelineError::NoLocation)?;

        Ok(Outcome {
            stations,
            disclaimer: Some(disclaimer),
            source: Source::CachedSelection,
        })
    }
}
