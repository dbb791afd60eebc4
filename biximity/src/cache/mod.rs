//! Persistent fallback cache.
//!
//! Holds the last successful coordinates, the last raw station list and the
//! last selection, each under a fixed key. Entries are overwritten wholesale
//! and never expire; they are only read when a live step fails.

mod error;
mod store;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::{Coordinates, DisplayStation, StationInfo};

pub use error::CacheError;
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Key of the last known coordinates.
pub const COORDINATES_KEY: &str = "lastCoordinates.json";

/// Key of the last raw station list.
pub const STATIONS_KEY: &str = "lastStations.json";

/// Key of the last selected display stations.
pub const SELECTION_KEY: &str = "lastSelection.json";

/// Typed access to the three cache entries over a [`KeyValueStore`].
#[derive(Debug)]
pub struct WidgetCache<S> {
    store: S,
}

impl<S: KeyValueStore> WidgetCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Save the full, untrimmed station list.
    pub fn save_stations(&self, stations: &[StationInfo]) -> Result<(), CacheError> {
        self.save(STATIONS_KEY, stations)
    }

    /// Load the last saved station list.
    pub fn load_saved_stations(&self) -> Option<Vec<StationInfo>> {
        self.load(STATIONS_KEY)
    }

    pub fn save_coordinates(&self, coordinates: &Coordinates) -> Result<(), CacheError> {
        self.save(COORDINATES_KEY, coordinates)
    }

    pub fn load_saved_coordinates(&self) -> Option<Coordinates> {
        self.load(COORDINATES_KEY)
    }

    /// Save the stations last shown to the user.
    pub fn save_selection(&self, selection: &[DisplayStation]) -> Result<(), CacheError> {
        self.save(SELECTION_KEY, selection)
    }

    pub fn load_saved_selection(&self) -> Option<Vec<DisplayStation>> {
        self.load(SELECTION_KEY)
    }

    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let json = serde_json::to_string(value).map_err(|e| CacheError::Serialize {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.store.put(key, &json)?;
        debug!(key, bytes = json.len(), "cache entry written");
        Ok(())
    }

    /// Returns `None` if the entry is missing, unreadable or unparseable.
    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let contents = match self.store.get(key) {
            Ok(Some(contents)) => contents,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "failed to read cache entry");
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "ignoring corrupt cache entry");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Distance, DistanceUnit};
    use tempfile::tempdir;

    fn stations() -> Vec<StationInfo> {
        vec![
            StationInfo {
                station_id: "1".to_string(),
                name: "Berri / de Maisonneuve".to_string(),
                lat: 45.515,
                lon: -73.561,
            },
            StationInfo {
                station_id: "2".to_string(),
                name: "Laurier / de Br\u{e9}beuf".to_string(),
                lat: 45.532,
                lon: -73.584,
            },
        ]
    }

    #[test]
    fn save_and_load_stations() {
        let cache = WidgetCache::new(MemoryStore::new());
        cache.save_stations(&stations()).unwrap();

        let loaded = cache.load_saved_stations().unwrap();
        assert_eq!(loaded, stations());
    }

    #[test]
    fn save_and_load_coordinates() {
        let cache = WidgetCache::new(MemoryStore::new());
        let here = Coordinates::new(45.5017, -73.5673);
        cache.save_coordinates(&here).unwrap();

        assert_eq!(cache.load_saved_coordinates(), Some(here));
    }

    #[test]
    fn save_and_load_selection() {
        let cache = WidgetCache::new(MemoryStore::new());
        let selection = vec![DisplayStation {
            name: "Berri".to_string(),
            num_bikes_available: Some(3),
            num_ebikes_available: None,
            num_docks_available: Some(12),
            distance: Distance::new(120.0, DistanceUnit::Metres),
        }];
        cache.save_selection(&selection).unwrap();

        assert_eq!(cache.load_saved_selection(), Some(selection));
    }

    #[test]
    fn missing_entries_are_none() {
        let cache = WidgetCache::new(MemoryStore::new());
        assert!(cache.load_saved_stations().is_none());
        assert!(cache.load_saved_coordinates().is_none());
        assert!(cache.load_saved_selection().is_none());
    }

    #[test]
    fn corrupt_entry_is_none() {
        let store = MemoryStore::new();
        store.put(COORDINATES_KEY, "not json").unwrap();
        let cache = WidgetCache::new(store);

        assert!(cache.load_saved_coordinates().is_none());
    }

    #[test]
    fn entries_are_independent() {
        let cache = WidgetCache::new(MemoryStore::new());
        cache.save_stations(&stations()).unwrap();

        assert!(cache.load_saved_coordinates().is_none());
        assert_eq!(cache.store().len(), 1);
    }

    #[test]
    fn save_overwrites_previous_list() {
        let cache = WidgetCache::new(MemoryStore::new());
        cache.save_stations(&stations()).unwrap();
        cache.save_stations(&stations()[..1]).unwrap();

        assert_eq!(cache.load_saved_stations().unwrap().len(), 1);
    }

    #[test]
    fn file_backed_cache_uses_fixed_file_names() {
        let dir = tempdir().unwrap();
        let cache = WidgetCache::new(FileStore::new(dir.path()));

        cache.save_stations(&stations()).unwrap();
        cache
            .save_coordinates(&Coordinates::new(45.5, -73.6))
            .unwrap();

        assert!(dir.path().join("lastStations.json").exists());
        assert!(dir.path().join("lastCoordinates.json").exists());

        let raw = std::fs::read_to_string(dir.path().join("lastCoordinates.json")).unwrap();
        assert_eq!(raw, r#"{"latitude":45.5,"longitude":-73.6}"#);
    }
}
