//! Core domain types for the nestrank rating engine.
//!
//! The crate models candidate rental properties, the points of interest a
//! user wants to live near, and the collaborator seams the scoring engine
//! consumes: a [`RoutePlanner`] for travel times and an [`AmenityProvider`]
//! for nearby-amenity counts. Scorers read and write their results through
//! the shared [`ScoreBoard`], which replaces each factor's map whole on every
//! recompute so stale candidates never linger.
//!
//! Constructors stay cheap and permissive; validity checks that matter to
//! scoring (usable coordinates, routable addresses) are explicit methods so
//! callers decide how to degrade.

#![forbid(unsafe_code)]

mod amenity;
mod board;
mod duration;
mod poi;
mod property;
mod routing;
mod travel_mode;
mod weights;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use amenity::{
    AmenityCategory, AmenityLookupError, AmenityPlace, AmenityProvider, AmenitySurvey,
    AmenityTally,
};
pub use board::ScoreBoard;
pub use duration::duration_to_seconds;
pub use poi::{DEFAULT_POI_WEIGHT, Poi, PoiId, PoiKind, poi_weight};
pub use property::{Property, PropertyId, SafetyRating};
pub use routing::{
    RouteLeg, RoutePlanError, RoutePlanner, UNROUTABLE_DISTANCE_METERS, UNROUTABLE_DURATION,
    UNROUTABLE_SECONDS,
};
pub use travel_mode::TravelMode;
pub use weights::{NormalisedWeights, WeightConfig, WeightFactor};
