//! Collaborator implementations for the nestrank rating engine.
//!
//! The engine's two external seams — routing and amenity lookups — are
//! implemented here against the backend's HTTP API, plus file-backed
//! fixture variants for offline runs and hermetic tests.
//!
//! # Architecture
//!
//! The core traits are synchronous to keep the engine embeddable in
//! synchronous contexts. The HTTP implementations bridge async `reqwest`
//! calls to the sync interface by blocking on an owned Tokio runtime, and
//! fall back to [`tokio::task::block_in_place`] when already inside a
//! multi-threaded runtime.

#![forbid(unsafe_code)]

pub mod amenities;
mod fixtures;
mod http;
pub mod routing;

pub use fixtures::{FileAmenityProvider, FileRoutePlanner, FixtureError};
pub use http::{DEFAULT_USER_AGENT, HttpEndpointConfig, ProviderBuildError};
