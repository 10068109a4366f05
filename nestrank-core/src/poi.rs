//! Points of interest the user wants to live near.
//!
//! A POI's kind drives two lookups during distance scoring: the weight it
//! contributes to a kind-weighted average, and the multiplier applied to the
//! commute-time buckets (a longer trip to work is more acceptable than a
//! longer trip to the gym).

use geo::Coord;

/// Opaque, stable identifier for a point of interest.
///
/// # Examples
/// ```
/// use nestrank_core::PoiId;
///
/// let id = PoiId::new("poi-7");
/// assert_eq!(id.as_str(), "poi-7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PoiId(String);

impl PoiId {
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

impl std::fmt::Display for PoiId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PoiId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PoiId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Broad category of a point of interest.
///
/// # Examples
/// ```
/// use nestrank_core::PoiKind;
///
/// assert_eq!(PoiKind::Work.as_str(), "work");
/// assert_eq!("Grocery".parse::<PoiKind>(), Ok(PoiKind::Grocery));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PoiKind {
    /// Workplace.
    Work,
    /// School or university.
    School,
    /// Grocery shopping.
    Grocery,
    /// Gym or sports venue.
    Gym,
    /// Public transport station.
    Station,
    /// Hospital or medical centre.
    Hospital,
    /// Anything else the user pinned.
    Other,
}

/// Weight used for a POI whose kind is absent or not in the table.
pub const DEFAULT_POI_WEIGHT: f64 = 0.5;

// Every catalogued kind currently carries the default weight; the table is
// the tuning point for kind-specific emphasis.
const POI_KIND_WEIGHTS: [(PoiKind, f64); 7] = [
    (PoiKind::Work, 0.5),
    (PoiKind::School, 0.5),
    (PoiKind::Grocery, 0.5),
    (PoiKind::Gym, 0.5),
    (PoiKind::Station, 0.5),
    (PoiKind::Hospital, 0.5),
    (PoiKind::Other, 0.5),
];

/// Look up the averaging weight for an optional POI kind.
///
/// Absent and uncatalogued kinds fall back to [`DEFAULT_POI_WEIGHT`].
///
/// # Examples
/// ```
/// use nestrank_core::{DEFAULT_POI_WEIGHT, PoiKind, poi_weight};
///
/// assert_eq!(poi_weight(Some(PoiKind::Work)), 0.5);
/// assert_eq!(poi_weight(None), DEFAULT_POI_WEIGHT);
/// ```
#[must_use]
pub fn poi_weight(kind: Option<PoiKind>) -> f64 {
    kind.and_then(|kind| {
        POI_KIND_WEIGHTS
            .iter()
            .find(|(candidate, _)| *candidate == kind)
            .map(|(_, weight)| *weight)
    })
    .unwrap_or(DEFAULT_POI_WEIGHT)
}

impl PoiKind {
    /// Return the kind as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::School => "school",
            Self::Grocery => "grocery",
            Self::Gym => "gym",
            Self::Station => "station",
            Self::Hospital => "hospital",
            Self::Other => "other",
        }
    }

    /// Multiplier applied to commute-time bucket boundaries for this kind.
    ///
    /// Work and school commutes tolerate longer travel; gym trips are
    /// expected to be short.
    #[must_use]
    pub const fn commute_multiplier(self) -> f64 {
        match self {
            Self::Work | Self::School => 1.5,
            Self::Gym => 0.8,
            Self::Grocery | Self::Station | Self::Hospital | Self::Other => 1.0,
        }
    }
}

impl std::fmt::Display for PoiKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PoiKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "work" => Ok(Self::Work),
            "school" => Ok(Self::School),
            "grocery" => Ok(Self::Grocery),
            "gym" => Ok(Self::Gym),
            "station" => Ok(Self::Station),
            "hospital" => Ok(Self::Hospital),
            "other" => Ok(Self::Other),
            _ => Err(format!("unknown POI kind '{s}'")),
        }
    }
}

/// A location the user cares about being near.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use nestrank_core::{Poi, PoiKind};
///
/// let poi = Poi::new("poi-1", "1 Office Plaza")
///     .with_location(Coord { x: 151.2, y: -33.87 })
///     .with_kind(PoiKind::Work);
/// assert_eq!(poi.kind, Some(PoiKind::Work));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Poi {
    /// Stable identifier from the persistence layer.
    pub id: PoiId,
    /// Street address used for routing.
    pub address: String,
    /// WGS84 position with `x = longitude` and `y = latitude`, when geocoded.
    pub location: Option<Coord<f64>>,
    /// Display name, when the user gave one.
    pub name: Option<String>,
    /// Category driving weight and commute-bucket lookups.
    pub kind: Option<PoiKind>,
}

impl Poi {
    /// Construct a POI with the given identifier and address.
    pub fn new(id: impl Into<PoiId>, address: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            address: address.into(),
            location: None,
            name: None,
            kind: None,
        }
    }

    /// Set the geocoded location.
    #[must_use]
    pub const fn with_location(mut self, location: Coord<f64>) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the category.
    #[must_use]
    pub const fn with_kind(mut self, kind: PoiKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Whether the POI carries a non-empty address.
    #[must_use]
    pub fn has_address(&self) -> bool {
        !self.address.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    fn display_matches_as_str() {
        assert_eq!(PoiKind::Grocery.to_string(), PoiKind::Grocery.as_str());
    }

    #[rstest]
    #[case("WORK", PoiKind::Work)]
    #[case("Gym", PoiKind::Gym)]
    #[case("school", PoiKind::School)]
    fn parsing_is_case_insensitive(#[case] input: &str, #[case] expected: PoiKind) {
        assert_eq!(PoiKind::from_str(input), Ok(expected));
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = PoiKind::from_str("zoo").unwrap_err();
        assert!(err.contains("unknown POI kind"));
    }

    #[rstest]
    #[case(Some(PoiKind::Work), 0.5)]
    #[case(Some(PoiKind::Gym), 0.5)]
    #[case(None, DEFAULT_POI_WEIGHT)]
    fn weights_resolve_through_the_table(#[case] kind: Option<PoiKind>, #[case] expected: f64) {
        assert_eq!(poi_weight(kind), expected);
    }

    #[rstest]
    #[case(PoiKind::Work, 1.5)]
    #[case(PoiKind::School, 1.5)]
    #[case(PoiKind::Gym, 0.8)]
    #[case(PoiKind::Grocery, 1.0)]
    #[case(PoiKind::Other, 1.0)]
    fn commute_multipliers(#[case] kind: PoiKind, #[case] expected: f64) {
        assert_eq!(kind.commute_multiplier(), expected);
    }
}
