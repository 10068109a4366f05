//! Wire types for the directions endpoint.

use nestrank_core::{Poi, Property, RouteLeg, TravelMode};
use serde::{Deserialize, Serialize};

/// POST body for `/api/getDistance`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RoutesRequest<'a> {
    #[serde(rename = "selectedPOI")]
    pub(crate) selected_poi: PoiAddress<'a>,
    pub(crate) travel_mode: &'static str,
    pub(crate) properties: Vec<PropertyAddress<'a>>,
}

impl<'a> RoutesRequest<'a> {
    /// Assemble the request body from domain values.
    pub(crate) fn new(poi: &'a Poi, mode: TravelMode, properties: &'a [Property]) -> Self {
        Self {
            selected_poi: PoiAddress {
                address: &poi.address,
            },
            travel_mode: mode.as_str(),
            properties: properties
                .iter()
                .map(|property| PropertyAddress {
                    property_id: property.id.as_str(),
                    address: &property.address,
                })
                .collect(),
        }
    }
}

/// The POI reference the backend routes towards.
#[derive(Debug, Serialize)]
pub(crate) struct PoiAddress<'a> {
    pub(crate) address: &'a str,
}

/// One candidate property in the request batch.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PropertyAddress<'a> {
    pub(crate) property_id: &'a str,
    pub(crate) address: &'a str,
}

/// Response body of `/api/getDistance`.
///
/// Legs reuse the core [`RouteLeg`] wire shape (`propertyId`,
/// `distanceMeters`, `duration`).
#[derive(Debug, Deserialize)]
pub(crate) struct RoutesResponse {
    #[serde(default)]
    pub(crate) routes: Vec<RouteLeg>,
}
