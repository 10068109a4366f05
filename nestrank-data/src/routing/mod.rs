//! HTTP-based [`RoutePlanner`](nestrank_core::RoutePlanner) against the
//! backend's directions endpoint.
//!
//! One POST per (POI, mode, candidate-set) triple returns a batch of route
//! legs. Properties the backend could not route come back carrying the
//! documented sentinel pair; properties missing from the response entirely
//! are filled in with sentinel legs on this side so every requested
//! candidate is accounted for.

mod planner;
mod wire;

pub use planner::HttpRoutePlanner;
