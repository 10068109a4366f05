//! Errors from [`crate::routing::RoutePlanner::plan_routes`].

use thiserror::Error;

/// Errors raised while planning routes against the directions service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutePlanError {
    /// No candidate properties were provided.
    ///
    /// Planners require at least one property to route. Callers should
    /// pre-filter input to avoid this condition.
    #[error("at least one candidate property is required")]
    EmptyInput,
    /// The request exceeded the configured timeout.
    #[error("route request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service answered with a non-success HTTP status.
    #[error("route request to {url} failed with HTTP {status}: {message}")]
    Http {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error detail from the client.
        message: String,
    },
    /// The request never completed at the transport level.
    #[error("route request to {url} failed: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Error detail from the client.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to decode route response: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },
}
