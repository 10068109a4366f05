//! File-backed collaborator fixtures for offline runs.
//!
//! The CLI accepts pre-recorded route and amenity data so a rating run
//! needs no backend at all; tests use the same loaders for hermetic
//! end-to-end coverage. Fixture files mirror the HTTP wire shapes.

use std::collections::BTreeMap;
use std::io::BufReader;

use camino::{Utf8Path, Utf8PathBuf};
use geo::Coord;
use nestrank_core::{
    AmenityLookupError, AmenityProvider, AmenitySurvey, AmenityTally, Poi, Property, RouteLeg,
    RoutePlanError, RoutePlanner, TravelMode,
};
use nestrank_fs::open_utf8_file;
use serde::Deserialize;
use thiserror::Error;

use crate::amenities::survey_from_wire;

/// Errors raised while loading a fixture file.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The fixture file could not be opened.
    #[error("failed to open fixture file at {path}")]
    Read {
        /// Requested fixture path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The fixture JSON could not be decoded.
    #[error("failed to parse fixture file at {path}")]
    Parse {
        /// Requested fixture path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

fn load_fixture<T: serde::de::DeserializeOwned>(path: &Utf8Path) -> Result<T, FixtureError> {
    let file = open_utf8_file(path).map_err(|source| FixtureError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| FixtureError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Route fixture file: the directions response shape, recorded to disk.
#[derive(Debug, Deserialize)]
struct RouteFixtureFile {
    #[serde(default)]
    routes: Vec<RouteLeg>,
}

/// Planner answering from a recorded leg set instead of the network.
///
/// Requested properties without a recorded leg receive the sentinel, the
/// same contract the HTTP planner upholds.
#[derive(Debug, Clone, Default)]
pub struct FileRoutePlanner {
    legs: Vec<RouteLeg>,
}

impl FileRoutePlanner {
    /// Load recorded legs from a JSON fixture file.
    ///
    /// # Errors
    /// Returns [`FixtureError`] when the file is unreadable or malformed.
    pub fn from_path(path: &Utf8Path) -> Result<Self, FixtureError> {
        let fixture: RouteFixtureFile = load_fixture(path)?;
        Ok(Self::from_legs(fixture.routes))
    }

    /// Build a planner from in-memory legs.
    #[must_use]
    pub fn from_legs(legs: Vec<RouteLeg>) -> Self {
        Self { legs }
    }
}

impl RoutePlanner for FileRoutePlanner {
    fn plan_routes(
        &self,
        _poi: &Poi,
        _mode: TravelMode,
        properties: &[Property],
    ) -> Result<Vec<RouteLeg>, RoutePlanError> {
        if properties.is_empty() {
            return Err(RoutePlanError::EmptyInput);
        }
        Ok(properties
            .iter()
            .map(|property| {
                self.legs
                    .iter()
                    .find(|leg| leg.property_id == property.id)
                    .cloned()
                    .unwrap_or_else(|| RouteLeg::unroutable(property.id.clone()))
            })
            .collect())
    }
}

/// One recorded amenity survey, keyed by exact coordinates.
#[derive(Debug, Deserialize)]
struct AmenityFixtureEntry {
    lat: f64,
    lng: f64,
    amenities: BTreeMap<String, AmenityTally>,
}

/// Provider answering from recorded surveys instead of the network.
///
/// Lookups match on exact coordinates, which is reliable when the fixture
/// file and the property file share the same source. Locations without a
/// recorded entry report data as unavailable, which the amenity scorer
/// degrades to the floor score.
#[derive(Debug, Clone, Default)]
pub struct FileAmenityProvider {
    entries: Vec<(Coord<f64>, AmenitySurvey)>,
}

impl FileAmenityProvider {
    /// Load recorded surveys from a JSON fixture file.
    ///
    /// # Errors
    /// Returns [`FixtureError`] when the file is unreadable or malformed.
    pub fn from_path(path: &Utf8Path) -> Result<Self, FixtureError> {
        let entries: Vec<AmenityFixtureEntry> = load_fixture(path)?;
        Ok(Self {
            entries: entries
                .into_iter()
                .map(|entry| {
                    let location = Coord {
                        x: entry.lng,
                        y: entry.lat,
                    };
                    (location, survey_from_wire(entry.amenities))
                })
                .collect(),
        })
    }

    /// Build a provider from in-memory surveys.
    #[must_use]
    pub fn from_surveys(entries: Vec<(Coord<f64>, AmenitySurvey)>) -> Self {
        Self { entries }
    }
}

impl AmenityProvider for FileAmenityProvider {
    fn nearby_amenities(&self, location: Coord<f64>) -> Result<AmenitySurvey, AmenityLookupError> {
        self.entries
            .iter()
            .find(|(recorded, _)| recorded.x == location.x && recorded.y == location.y)
            .map(|(_, survey)| survey.clone())
            .ok_or_else(|| AmenityLookupError::Unavailable {
                message: format!("no recorded survey for ({}, {})", location.y, location.x),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestrank_core::AmenityCategory;
    use rstest::rstest;
    use tempfile::TempDir;

    fn write_fixture(temp: &TempDir, name: &str, content: &str) -> Utf8PathBuf {
        let path =
            Utf8PathBuf::from_path_buf(temp.path().join(name)).expect("utf8 fixture path");
        std::fs::write(path.as_std_path(), content).expect("write fixture");
        path
    }

    #[rstest]
    fn route_fixture_answers_per_requested_property() {
        let temp = TempDir::new().expect("tempdir");
        let path = write_fixture(
            &temp,
            "routes.json",
            r#"{ "routes": [ { "propertyId": "p1", "distanceMeters": 800, "duration": "480s" } ] }"#,
        );
        let planner = FileRoutePlanner::from_path(&path).expect("fixture should load");
        let properties = vec![Property::new("p1", "a"), Property::new("p2", "b")];

        let legs = planner
            .plan_routes(&Poi::new("poi-1", "x"), TravelMode::Walking, &properties)
            .expect("fixture planner should answer");

        assert_eq!(legs.len(), 2);
        assert_eq!(legs[0].duration_seconds(), Some(480));
        assert!(legs[1].is_unroutable());
    }

    #[rstest]
    fn amenity_fixture_matches_on_exact_coordinates() {
        let temp = TempDir::new().expect("tempdir");
        let path = write_fixture(
            &temp,
            "amenities.json",
            r#"[ { "lat": -33.9, "lng": 151.2, "amenities": { "park": { "count": 5, "places": [] } } } ]"#,
        );
        let provider = FileAmenityProvider::from_path(&path).expect("fixture should load");

        let survey = provider
            .nearby_amenities(Coord { x: 151.2, y: -33.9 })
            .expect("recorded location should answer");
        assert_eq!(survey.count(AmenityCategory::Park), 5);

        let err = provider
            .nearby_amenities(Coord { x: 150.0, y: -33.0 })
            .expect_err("unrecorded location should be unavailable");
        assert!(matches!(err, AmenityLookupError::Unavailable { .. }));
    }

    #[rstest]
    fn malformed_fixture_reports_a_parse_error() {
        let temp = TempDir::new().expect("tempdir");
        let path = write_fixture(&temp, "routes.json", "not json");

        let err = FileRoutePlanner::from_path(&path).expect_err("should fail to parse");

        assert!(matches!(err, FixtureError::Parse { .. }));
    }
}
