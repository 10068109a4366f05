//! Multi-factor scoring engine for candidate rental properties.
//!
//! Four independent scorers each turn raw collaborator data into one
//! normalised `property → score` map, and an aggregator combines the four
//! maps under the user's preference weights:
//!
//! - [`distance`] routes every candidate to a selected POI and rescales
//!   travel times so the closest candidate scores highest.
//! - [`price`] compares room-adjusted rents across the candidate set.
//! - [`safety`] resolves externally supplied safety ratings.
//! - [`amenities`] surveys nearby amenity counts per candidate, squashes
//!   them through a logistic curve, and compresses outliers.
//! - [`total`] folds the four factor maps into one comparable score per
//!   candidate, rescaled across the set.
//!
//! All state lives in a caller-owned [`RatingSession`]; scorers replace
//! whole score maps and never merge, so a recompute can never leave stale
//! candidates behind. Callers sequence the scorers (the four factors are
//! order-independent; the aggregator runs last) and decide how to react to
//! the one fallible step, distance scoring.
//!
//! # Examples
//!
//! ```
//! use nestrank_core::test_support::FixedAmenityProvider;
//! use nestrank_core::{Poi, Property};
//! use nestrank_scorer::{RatingSession, amenities, price, safety, total};
//!
//! let properties = vec![
//!     Property::new("p1", "12 High St").with_weekly_rent(480.0).with_rooms(2.0, 1.0, 1.0),
//!     Property::new("p2", "9 Low Rd").with_weekly_rent(640.0).with_rooms(3.0, 2.0, 1.0),
//! ];
//! let mut session = RatingSession::new(properties, vec![Poi::new("poi-1", "1 Office Plaza")]);
//!
//! price::score(&mut session);
//! safety::score(&mut session);
//! amenities::score(&mut session, &FixedAmenityProvider::default());
//! total::score(&mut session);
//!
//! assert_eq!(session.board().total_scores().len(), 2);
//! ```

#![forbid(unsafe_code)]

pub mod amenities;
pub mod curve;
pub mod distance;
mod error;
pub mod price;
pub mod safety;
mod session;
pub mod total;

pub use error::DistanceScoreError;
pub use session::RatingSession;
