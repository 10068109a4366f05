//! Errors surfaced by the fallible scorers.

use nestrank_core::{PoiId, RoutePlanError};
use thiserror::Error;

/// Errors raised while recomputing distance scores.
///
/// These are the only scorer failures that propagate: the caller logs them
/// and keeps the previous distance scores until the next successful
/// recompute. Every other scorer degrades per candidate instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistanceScoreError {
    /// Every candidate was filtered out for lacking a routable address.
    #[error("no candidate property carries a routable address")]
    NoRoutableProperties,
    /// The planner answered, but with zero legs.
    #[error("route planner returned no legs for POI {poi}")]
    NoRoutes {
        /// The POI the routes were requested for.
        poi: PoiId,
    },
    /// The planner call itself failed.
    #[error("route planning failed: {0}")]
    Planner(#[from] RoutePlanError),
}
