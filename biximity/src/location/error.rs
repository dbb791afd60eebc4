//! Location lookup error types.

/// Why the current position could not be determined.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    /// No position source is available
    #[error("location unavailable")]
    Unavailable,

    /// The user has not granted access to location services
    #[error("location permission denied")]
    PermissionDenied,

    /// The position source did not answer in time
    #[error("location lookup timed out")]
    Timeout,

    /// Any other provider failure
    #[error("location provider error: {0}")]
    Provider(String),
}
