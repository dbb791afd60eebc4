//! Cache error types.

use std::path::PathBuf;

/// Errors from reading or writing cached entries.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Filesystem operation failed
    #[error("cache I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Value could not be serialized
    #[error("failed to serialize cache entry {key}: {message}")]
    Serialize { key: String, message: String },

    /// In-memory store was poisoned by a panicking writer
    #[error("cache store poisoned")]
    Poisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CacheError::Serialize {
            key: "lastStations.json".into(),
            message: "boom".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to serialize cache entry lastStations.json: boom"
        );
    }
}
