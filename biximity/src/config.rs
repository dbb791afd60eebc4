//! Run configuration.

use std::path::PathBuf;

use crate::domain::Coordinates;
use crate::gbfs::GbfsConfig;
use crate::present::Language;

/// Directory name used under the platform cache directory.
const CACHE_DIR_NAME: &str = "biximity";

/// Everything a single run needs to know.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Panel language.
    pub language: Language,

    /// Station feeds to read.
    pub gbfs: GbfsConfig,

    /// Where the fallback cache files live.
    pub cache_dir: PathBuf,

    /// Position to report as the live location, if known.
    pub coordinates: Option<Coordinates>,
}

impl WidgetConfig {
    /// Set the language from a free-form parameter ("fr", "French", ...).
    pub fn with_language_parameter(mut self, param: &str) -> Self {
        self.language = Language::from_parameter(param);
        self
    }

    pub fn with_gbfs(mut self, gbfs: GbfsConfig) -> Self {
        self.gbfs = gbfs;
        self
    }

    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = dir.into();
        self
    }

    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            gbfs: GbfsConfig::default(),
            cache_dir: default_cache_dir(),
            coordinates: None,
        }
    }
}

/// The platform cache directory joined with `biximity`, or the current
/// directory when the platform has none.
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join(CACHE_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}
