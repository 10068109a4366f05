//! Loaders for the caller-owned candidate files.
//!
//! Property and POI files carry the persistence layer's camelCase record
//! shapes; loading converts them into core domain types. Fields of variable
//! quality default rather than fail: a record with no rooms still loads, it
//! just scores accordingly.

use std::io::BufReader;
use std::str::FromStr;

use camino::Utf8Path;
use geo::Coord;
use log::warn;
use nestrank_core::{Poi, PoiKind, Property, SafetyRating};
use nestrank_fs::open_utf8_file;
use serde::Deserialize;

use crate::error::CliError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PropertyRecord {
    property_id: String,
    #[serde(default)]
    address: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
    #[serde(default)]
    bedrooms: f64,
    #[serde(default)]
    bathrooms: f64,
    #[serde(default)]
    parking_spaces: f64,
    #[serde(default)]
    weekly_rent: f64,
    safety_score: Option<f64>,
}

impl PropertyRecord {
    fn into_property(self) -> Property {
        let mut property = Property::new(self.property_id, self.address)
            .with_rooms(self.bedrooms, self.bathrooms, self.parking_spaces)
            .with_weekly_rent(self.weekly_rent)
            .with_safety(SafetyRating::from_optional(self.safety_score));
        if let (Some(latitude), Some(longitude)) = (self.latitude, self.longitude) {
            property = property.with_location(Coord {
                x: longitude,
                y: latitude,
            });
        }
        property
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PoiRecord {
    poi_id: String,
    #[serde(default)]
    address: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
    name: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

impl PoiRecord {
    fn into_poi(self) -> Poi {
        let mut poi = Poi::new(self.poi_id, self.address);
        if let (Some(latitude), Some(longitude)) = (self.latitude, self.longitude) {
            poi = poi.with_location(Coord {
                x: longitude,
                y: latitude,
            });
        }
        if let Some(name) = self.name {
            poi = poi.with_name(name);
        }
        if let Some(raw_kind) = self.kind {
            match PoiKind::from_str(&raw_kind) {
                Ok(kind) => poi = poi.with_kind(kind),
                // Uncatalogued kinds still score, at the default weight.
                Err(_) => warn!("POI {} has uncatalogued kind '{raw_kind}'", poi.id),
            }
        }
        poi
    }
}

/// Load candidate properties from a JSON file.
///
/// # Errors
/// Returns [`CliError`] when the file is unreadable or malformed.
pub(crate) fn load_properties(path: &Utf8Path) -> Result<Vec<Property>, CliError> {
    let records: Vec<PropertyRecord> = load_json(path)?;
    Ok(records
        .into_iter()
        .map(PropertyRecord::into_property)
        .collect())
}

/// Load points of interest from a JSON file.
///
/// # Errors
/// Returns [`CliError`] when the file is unreadable or malformed.
pub(crate) fn load_pois(path: &Utf8Path) -> Result<Vec<Poi>, CliError> {
    let records: Vec<PoiRecord> = load_json(path)?;
    Ok(records.into_iter().map(PoiRecord::into_poi).collect())
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Utf8Path) -> Result<T, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::rstest;
    use tempfile::TempDir;

    fn write_input(temp: &TempDir, name: &str, content: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::from_path_buf(temp.path().join(name)).expect("utf8 input path");
        std::fs::write(path.as_std_path(), content).expect("write input");
        path
    }

    #[rstest]
    fn properties_load_with_defaults_for_sparse_records() {
        let temp = TempDir::new().expect("tempdir");
        let path = write_input(
            &temp,
            "properties.json",
            r#"[
                {
                    "propertyId": "prop-1",
                    "address": "12 High St",
                    "latitude": -33.9,
                    "longitude": 151.2,
                    "bedrooms": 2,
                    "bathrooms": 1,
                    "parkingSpaces": 1,
                    "weeklyRent": 650,
                    "safetyScore": 0.8
                },
                { "propertyId": "prop-2" }
            ]"#,
        );

        let properties = load_properties(&path).expect("properties should load");

        assert_eq!(properties.len(), 2);
        assert_eq!(properties[0].weekly_rent, 650.0);
        assert!(properties[0].scoring_location().is_some());
        assert_eq!(properties[1].weekly_rent, 0.0);
        assert!(!properties[1].has_address());
        assert_eq!(properties[1].safety.value(), None);
    }

    #[rstest]
    fn pois_load_with_parsed_kinds() {
        let temp = TempDir::new().expect("tempdir");
        let path = write_input(
            &temp,
            "pois.json",
            r#"[
                { "poiId": "poi-1", "address": "1 Office Plaza", "type": "Work" },
                { "poiId": "poi-2", "address": "2 Odd Pl", "type": "volcano" }
            ]"#,
        );

        let pois = load_pois(&path).expect("POIs should load");

        assert_eq!(pois[0].kind, Some(PoiKind::Work));
        assert_eq!(pois[1].kind, None);
    }

    #[rstest]
    fn malformed_input_reports_a_parse_error() {
        let temp = TempDir::new().expect("tempdir");
        let path = write_input(&temp, "properties.json", "[{");

        let err = load_properties(&path).expect_err("should fail to parse");

        assert!(matches!(err, CliError::ParseInput { .. }));
    }
}
