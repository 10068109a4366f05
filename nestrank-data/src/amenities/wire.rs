//! Wire types for the places endpoint.

use std::collections::BTreeMap;
use std::str::FromStr;

use log::debug;
use nestrank_core::{AmenityCategory, AmenitySurvey, AmenityTally};

/// Response body of `/api/getAmenities`: category key to tally.
///
/// Tallies reuse the core [`AmenityTally`] wire shape (`count`, `places`).
pub(crate) type SurveyWire = BTreeMap<String, AmenityTally>;

/// Convert a wire survey into the domain form, dropping unknown categories.
pub(crate) fn survey_from_wire(wire: SurveyWire) -> AmenitySurvey {
    let mut survey = AmenitySurvey::new();
    for (key, tally) in wire {
        match AmenityCategory::from_str(&key) {
            Ok(category) => survey.insert(category, tally),
            Err(_) => debug!("ignoring uncatalogued amenity category '{key}'"),
        }
    }
    survey
}
