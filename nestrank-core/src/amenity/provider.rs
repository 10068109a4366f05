//! Amenity-provider trait for the external places collaborator.

use geo::Coord;

use super::error::AmenityLookupError;
use super::survey::AmenitySurvey;

/// Fetch categorised amenity counts around one location.
///
/// Coordinates follow the workspace convention: `x = longitude`,
/// `y = latitude`. Implementations answer for the fixed
/// [`AmenityCategory`](crate::AmenityCategory) set; categories they cannot
/// answer for are simply absent from the survey and count as zero.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use nestrank_core::{
///     AmenityCategory, AmenityLookupError, AmenityProvider, AmenitySurvey, AmenityTally,
/// };
///
/// struct QuietSuburb;
///
/// impl AmenityProvider for QuietSuburb {
///     fn nearby_amenities(
///         &self,
///         _location: Coord<f64>,
///     ) -> Result<AmenitySurvey, AmenityLookupError> {
///         Ok(AmenitySurvey::new()
///             .with_tally(AmenityCategory::Park, AmenityTally::with_count(3)))
///     }
/// }
///
/// let survey = QuietSuburb.nearby_amenities(Coord { x: 151.2, y: -33.9 })?;
/// assert_eq!(survey.count(AmenityCategory::Park), 3);
/// # Ok::<(), AmenityLookupError>(())
/// ```
pub trait AmenityProvider {
    /// Return amenity tallies around `location`.
    fn nearby_amenities(&self, location: Coord<f64>) -> Result<AmenitySurvey, AmenityLookupError>;
}
