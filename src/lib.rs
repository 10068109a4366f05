//! Facade crate for the nestrank rating engine.
//!
//! This crate re-exports the core domain types and the scoring pipeline,
//! and exposes the HTTP collaborator implementations behind the `http`
//! feature flag.

#![forbid(unsafe_code)]

pub use nestrank_core::{
    AmenityCategory, AmenityLookupError, AmenityPlace, AmenityProvider, AmenitySurvey,
    AmenityTally, NormalisedWeights, Poi, PoiId, PoiKind, Property, PropertyId, RouteLeg,
    RoutePlanError, RoutePlanner, SafetyRating, ScoreBoard, TravelMode, WeightConfig,
    WeightFactor, duration_to_seconds,
};

pub use nestrank_scorer::{
    DistanceScoreError, RatingSession, amenities, curve, distance, price, safety, total,
};

#[cfg(feature = "http")]
pub use nestrank_data::{
    FileAmenityProvider, FileRoutePlanner, FixtureError, HttpEndpointConfig, ProviderBuildError,
    amenities::HttpAmenityProvider, routing::HttpRoutePlanner,
};
