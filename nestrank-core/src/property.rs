//! Candidate rental properties and their scoring-relevant attributes.
//!
//! Properties are caller-owned, read-only inputs for the duration of one
//! scoring run; the engine never mutates them. Attribute quality varies with
//! the upstream listing data, so room counts and rents are plain `f64`s and
//! coordinates are optional.

use geo::Coord;

/// Opaque, stable identifier for a candidate property.
///
/// Identifiers come from the external persistence layer and are treated as
/// opaque strings. Ordering makes score maps deterministic to iterate.
///
/// # Examples
/// ```
/// use nestrank_core::PropertyId;
///
/// let id = PropertyId::new("prop-42");
/// assert_eq!(id.as_str(), "prop-42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PropertyId(String);

impl PropertyId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Return the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PropertyId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PropertyId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Externally supplied neighbourhood safety rating.
///
/// The upstream data source reports safety in roughly `[0.0, 1.0]` but may
/// omit the value entirely, and it reports `0.0` both for "no data" and for a
/// genuinely unrated area. Both cases therefore resolve to the same floor:
/// a property is never zeroed out for unknown safety data. The rule lives
/// here, in one place, instead of leaking truthiness checks into scorers.
///
/// # Examples
/// ```
/// use nestrank_core::SafetyRating;
///
/// assert_eq!(SafetyRating::new(0.9).resolve(), 0.9);
/// assert_eq!(SafetyRating::new(0.0).resolve(), SafetyRating::FLOOR);
/// assert_eq!(SafetyRating::missing().resolve(), SafetyRating::FLOOR);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SafetyRating(Option<f64>);

impl SafetyRating {
    /// Score assigned when the rating is missing or reported as zero.
    pub const FLOOR: f64 = 0.4;

    /// Wrap a reported rating.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(Some(value))
    }

    /// A rating the data source never supplied.
    #[must_use]
    pub const fn missing() -> Self {
        Self(None)
    }

    /// Build from an optional raw value, e.g. a nullable database column.
    #[must_use]
    pub const fn from_optional(value: Option<f64>) -> Self {
        Self(value)
    }

    /// Return the raw value, if one was supplied.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        self.0
    }

    /// Resolve to a usable score.
    ///
    /// Missing ratings and ratings of exactly `0.0` both resolve to
    /// [`Self::FLOOR`]; every other value passes through unchanged.
    #[must_use]
    pub fn resolve(self) -> f64 {
        match self.0 {
            Some(value) if value != 0.0 => value,
            // Zero is indistinguishable from "unknown" upstream.
            _ => Self::FLOOR,
        }
    }
}

/// A candidate rental property.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use nestrank_core::Property;
///
/// let property = Property::new("prop-1", "12 High St")
///     .with_location(Coord { x: 151.2, y: -33.9 })
///     .with_rooms(2.0, 1.0, 1.0)
///     .with_weekly_rent(650.0);
/// assert!(property.has_address());
/// assert!(property.scoring_location().is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Stable identifier from the persistence layer.
    pub id: PropertyId,
    /// Street address used for routing; may be empty for unroutable stock.
    pub address: String,
    /// WGS84 position with `x = longitude` and `y = latitude`, when geocoded.
    pub location: Option<Coord<f64>>,
    /// Bedroom count from the listing.
    pub bedrooms: f64,
    /// Bathroom count from the listing.
    pub bathrooms: f64,
    /// Parking space count from the listing.
    pub parking_spaces: f64,
    /// Advertised weekly rent.
    pub weekly_rent: f64,
    /// Externally computed neighbourhood safety rating.
    pub safety: SafetyRating,
}

impl Property {
    /// Construct a property with the given identifier and address.
    ///
    /// Remaining attributes default to zero/missing; use the `with_*`
    /// builders to fill them in.
    pub fn new(id: impl Into<PropertyId>, address: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            address: address.into(),
            location: None,
            bedrooms: 0.0,
            bathrooms: 0.0,
            parking_spaces: 0.0,
            weekly_rent: 0.0,
            safety: SafetyRating::missing(),
        }
    }

    /// Set the geocoded location.
    #[must_use]
    pub const fn with_location(mut self, location: Coord<f64>) -> Self {
        self.location = Some(location);
        self
    }

    /// Set bedroom, bathroom, and parking counts.
    #[must_use]
    pub const fn with_rooms(mut self, bedrooms: f64, bathrooms: f64, parking_spaces: f64) -> Self {
        self.bedrooms = bedrooms;
        self.bathrooms = bathrooms;
        self.parking_spaces = parking_spaces;
        self
    }

    /// Set the weekly rent.
    #[must_use]
    pub const fn with_weekly_rent(mut self, weekly_rent: f64) -> Self {
        self.weekly_rent = weekly_rent;
        self
    }

    /// Set the safety rating.
    #[must_use]
    pub const fn with_safety(mut self, safety: SafetyRating) -> Self {
        self.safety = safety;
        self
    }

    /// Whether the property carries a non-empty address.
    #[must_use]
    pub fn has_address(&self) -> bool {
        !self.address.trim().is_empty()
    }

    /// Return a location usable for spatial lookups.
    ///
    /// Listings that were never geocoded carry either no location or the
    /// `(0, 0)` placeholder the importer writes; both count as unusable.
    #[must_use]
    pub fn scoring_location(&self) -> Option<Coord<f64>> {
        self.location
            .filter(|coord| coord.x != 0.0 && coord.y != 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(SafetyRating::new(0.9), 0.9)]
    #[case(SafetyRating::new(0.0), SafetyRating::FLOOR)]
    #[case(SafetyRating::missing(), SafetyRating::FLOOR)]
    fn safety_resolution(#[case] rating: SafetyRating, #[case] expected: f64) {
        assert_eq!(rating.resolve(), expected);
    }

    #[rstest]
    fn low_but_nonzero_safety_passes_through() {
        assert_eq!(SafetyRating::new(0.05).resolve(), 0.05);
    }

    #[rstest]
    fn zero_coordinates_are_not_a_scoring_location() {
        let property =
            Property::new("p1", "somewhere").with_location(Coord { x: 0.0, y: 0.0 });
        assert!(property.scoring_location().is_none());
    }

    #[rstest]
    fn missing_location_is_not_a_scoring_location() {
        assert!(Property::new("p1", "somewhere").scoring_location().is_none());
    }

    #[rstest]
    #[case("", false)]
    #[case("   ", false)]
    #[case("1 Example Rd", true)]
    fn address_presence(#[case] address: &str, #[case] expected: bool) {
        assert_eq!(Property::new("p1", address).has_address(), expected);
    }
}
