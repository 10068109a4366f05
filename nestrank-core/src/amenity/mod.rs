//! Nearby-amenity lookups around candidate properties.
//!
//! The [`AmenityProvider`] trait abstracts the external places service. The
//! service is queried per property location and answers with counts (and
//! named places) for a fixed category set; scoring uses only the counts, the
//! places survive as display data.

mod error;
mod provider;
mod survey;

pub use error::AmenityLookupError;
pub use provider::AmenityProvider;
pub use survey::{AmenityCategory, AmenityPlace, AmenitySurvey, AmenityTally};
