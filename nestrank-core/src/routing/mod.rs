//! Travel-time routing between candidate properties and a point of interest.
//!
//! The [`RoutePlanner`] trait abstracts the external directions service.
//! Callers supply one POI, a travel mode, and the candidate properties, and
//! receive one [`RouteLeg`] per property. Legs the service could not route
//! carry the documented sentinel pair rather than being omitted, so a leg is
//! always a statement about a property.

mod error;
mod leg;
mod planner;

pub use error::RoutePlanError;
pub use leg::{
    RouteLeg, UNROUTABLE_DISTANCE_METERS, UNROUTABLE_DURATION, UNROUTABLE_SECONDS,
};
pub use planner::RoutePlanner;
