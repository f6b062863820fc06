use thiserror::Error;

/// Errors raised while delivering a batch.
///
/// [`Beacon::flush`](crate::Beacon::flush) logs and swallows these; only
/// [`Beacon::try_flush`](crate::Beacon::try_flush) returns them.
#[derive(Debug, Error)]
pub enum BeaconError {
    /// Transport failure
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Collector answered with a non-success status
    #[error("Collector returned status {0}")]
    Status(u16),

    /// Payload could not be encoded
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Event queue lock was poisoned
    #[error("Event queue lock poisoned")]
    Poisoned,
}
