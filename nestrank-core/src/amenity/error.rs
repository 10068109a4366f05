//! Errors from [`crate::amenity::AmenityProvider::nearby_amenities`].

use thiserror::Error;

/// Errors raised while surveying amenities around a location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmenityLookupError {
    /// The supplied location is unusable for a lookup.
    ///
    /// Callers are expected to pre-filter with
    /// [`Property::scoring_location`](crate::Property::scoring_location);
    /// providers still guard.
    #[error("location is missing or carries placeholder coordinates")]
    InvalidLocation,
    /// The request exceeded the configured timeout.
    #[error("amenity request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service answered with a non-success HTTP status.
    #[error("amenity request to {url} failed with HTTP {status}: {message}")]
    Http {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error detail from the client.
        message: String,
    },
    /// The request never completed at the transport level.
    #[error("amenity request to {url} failed: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Error detail from the client.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to decode amenity response: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },
    /// The provider has no data for the requested location.
    #[error("no amenity data available: {message}")]
    Unavailable {
        /// Provider-specific detail.
        message: String,
    },
}
