//! HTTP-based [`AmenityProvider`](nestrank_core::AmenityProvider) against
//! the backend's places endpoint.
//!
//! One GET per property location returns counts and named places for the
//! fixed category set. Categories the backend adds beyond that set are
//! ignored rather than rejected, so backend rollouts cannot break scoring.

mod provider;
mod wire;

pub use provider::HttpAmenityProvider;
pub(crate) use wire::survey_from_wire;
