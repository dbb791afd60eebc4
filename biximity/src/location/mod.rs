//! Current-position lookup with a last-known fallback.
//!
//! The [`Locator`] asks a [`LocationProvider`] for the current position.
//! A successful answer is remembered in the cache; a failure falls back to
//! the remembered position and flags the outcome with a disclaimer.

mod error;

use std::future::Future;

use tracing::{debug, warn};

use crate::cache::{KeyValueStore, WidgetCache};
use crate::domain::Coordinates;
use crate::present::Disclaimer;

pub use error::LocationError;

/// Source of the device's current position.
pub trait LocationProvider {
    fn current(&self) -> impl Future<Output = Result<Coordinates, LocationError>> + Send;
}

/// A provider that reports a position fixed at startup, if one was given.
///
/// With no position it always fails, so the locator falls back to the last
/// cached one.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocation {
    coordinates: Option<Coordinates>,
}

impl FixedLocation {
    pub fn new(coordinates: Option<Coordinates>) -> Self {
        Self { coordinates }
    }
}

impl LocationProvider for FixedLocation {
    async fn current(&self) -> Result<Coordinates, LocationError> {
        self.coordinates.ok_or(LocationError::Unavailable)
    }
}

/// Result of a location lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationOutcome {
    /// Live or last-known position; `None` if neither exists.
    pub coordinates: Option<Coordinates>,
    /// Set when the live lookup failed.
    pub disclaimer: Option<Disclaimer>,
}

impl LocationOutcome {
    fn live(coordinates: Coordinates) -> Self {
        Self {
            coordinates: Some(coordinates),
            disclaimer: None,
        }
    }

    fn fallback(coordinates: Option<Coordinates>) -> Self {
        Self {
            coordinates,
            disclaimer: Some(Disclaimer::LocationUnavailable),
        }
    }
}

/// Looks up the current position, falling back to the cached one.
#[derive(Debug, Clone)]
pub struct Locator<P> {
    provider: P,
}

impl<P: LocationProvider> Locator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Determine the user's position.
    ///
    /// A live position overwrites the cached one. On failure the cached
    /// position (if any) is returned with [`Disclaimer::LocationUnavailable`].
    pub async fn coordinates<S: KeyValueStore>(
        &self,
        cache: &WidgetCache<S>,
    ) -> LocationOutcome {
        match self.provider.current().await {
            Ok(coordinates) => {
                debug!(?coordinates, "live location");
                if let Err(e) = cache.save_coordinates(&coordinates) {
                    warn!(error = %e, "failed to cache coordinates");
                }
                LocationOutcome::live(coordinates)
            }
            Err(e) => {
                warn!(error = %e, "could not fetch location, using last known position");
                LocationOutcome::fallback(cache.load_saved_coordinates())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryStore;

    struct FailingProvider(LocationError);

    impl LocationProvider for FailingProvider {
        async fn current(&self) -> Result<Coordinates, LocationError> {
            Err(self.0.clone())
        }
    }

    fn montreal() -> Coordinates {
        Coordinates::new(45.5017, -73.5673)
    }

    #[tokio::test]
    async fn live_location_is_cached() {
        let cache = WidgetCache::new(MemoryStore::new());
        let locator = Locator::new(FixedLocation::new(Some(montreal())));

        let outcome = locator.coordinates(&cache).await;

        assert_eq!(outcome.coordinates, Some(montreal()));
        assert_eq!(outcome.disclaimer, None);
        assert_eq!(cache.load_saved_coordinates(), Some(montreal()));
    }

    #[tokio::test]
    async fn live_location_overwrites_cache() {
        let cache = WidgetCache::new(MemoryStore::new());
        cache.save_coordinates(&Coordinates::new(0.0, 0.0)).unwrap();
        let locator = Locator::new(FixedLocation::new(Some(montreal())));

        locator.coordinates(&cache).await;

        assert_eq!(cache.load_saved_coordinates(), Some(montreal()));
    }

    #[tokio::test]
    async fn failure_falls_back_to_cache() {
        let cache = WidgetCache::new(MemoryStore::new());
        cache.save_coordinates(&montreal()).unwrap();
        let locator = Locator::new(FailingProvider(LocationError::PermissionDenied));

        let outcome = locator.coordinates(&cache).await;

        assert_eq!(outcome.coordinates, Some(montreal()));
        assert_eq!(outcome.disclaimer, Some(Disclaimer::LocationUnavailable));
    }

    #[tokio::test]
    async fn failure_without_cache_has_no_coordinates() {
        let cache = WidgetCache::new(MemoryStore::new());
        let locator = Locator::new(FixedLocation::default());

        let outcome = locator.coordinates(&cache).await;

        assert_eq!(outcome.coordinates, None);
        assert_eq!(outcome.disclaimer, Some(Disclaimer::LocationUnavailable));
    }

    #[tokio::test]
    async fn fixed_location_without_position_fails() {
        let result = FixedLocation::new(None).current().await;
        assert_eq!(result, Err(LocationError::Unavailable));
    }
}
