//! One routing result per (property, POI) pair.

use crate::duration::duration_to_seconds;
use crate::property::PropertyId;

/// Sentinel distance reported when no route could be computed.
pub const UNROUTABLE_DISTANCE_METERS: f64 = 9_999_000.0;

/// Sentinel duration string paired with [`UNROUTABLE_DISTANCE_METERS`].
pub const UNROUTABLE_DURATION: &str = "9999s";

/// Parsed form of [`UNROUTABLE_DURATION`].
pub const UNROUTABLE_SECONDS: u32 = 9_999;

/// A single route from one candidate property to the selected POI.
///
/// The duration is kept in its wire form; [`RouteLeg::duration_seconds`]
/// applies the shared parsing rules.
///
/// # Examples
/// ```
/// use nestrank_core::RouteLeg;
///
/// let leg = RouteLeg::new("prop-1", 1500.0, "600s");
/// assert_eq!(leg.duration_seconds(), Some(600));
/// assert_eq!(leg.distance_km(), 1.5);
/// assert!(!leg.is_unroutable());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RouteLeg {
    /// Property this leg starts from.
    pub property_id: PropertyId,
    /// Route length in metres.
    pub distance_meters: f64,
    /// Route duration in wire form (`"600s"` or ISO-like shorthand).
    pub duration: String,
}

impl RouteLeg {
    /// Construct a leg from wire values.
    pub fn new(
        property_id: impl Into<PropertyId>,
        distance_meters: f64,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            property_id: property_id.into(),
            distance_meters,
            duration: duration.into(),
        }
    }

    /// Construct the sentinel leg for a property that could not be routed.
    pub fn unroutable(property_id: impl Into<PropertyId>) -> Self {
        Self::new(property_id, UNROUTABLE_DISTANCE_METERS, UNROUTABLE_DURATION)
    }

    /// Parse the duration into whole seconds, if the wire form is readable.
    #[must_use]
    pub fn duration_seconds(&self) -> Option<u32> {
        duration_to_seconds(&self.duration)
    }

    /// Route length in kilometres.
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.distance_meters / 1000.0
    }

    /// Whether this leg carries the "no route" sentinel.
    #[must_use]
    pub fn is_unroutable(&self) -> bool {
        self.duration_seconds() == Some(UNROUTABLE_SECONDS)
    }
}
