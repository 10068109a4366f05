//! Rate command implementation for the nestrank CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::warn;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use nestrank_core::{
    AmenityProvider, PoiId, RoutePlanner, TravelMode, WeightConfig, WeightFactor,
};
use nestrank_data::amenities::HttpAmenityProvider;
use nestrank_data::routing::HttpRoutePlanner;
use nestrank_data::{FileAmenityProvider, FileRoutePlanner, HttpEndpointConfig};
use nestrank_scorer::{RatingSession, amenities, distance, price, safety, total};

use crate::{
    ARG_RATE_AMENITIES, ARG_RATE_POIS, ARG_RATE_PROPERTIES, ARG_RATE_ROUTES, CliError,
    ENV_RATE_POIS, ENV_RATE_PROPERTIES, input, report,
};

/// CLI arguments for the `rate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score candidate rental properties against points of \
                 interest. Candidates and POIs are JSON files; route and \
                 amenity data comes from the backend API or from recorded \
                 fixture files for offline runs. Options can come from CLI \
                 flags, configuration files, or environment variables.",
    about = "Run the scoring pipeline and emit a rating report"
)]
#[ortho_config(prefix = "NESTRANK")]
pub(crate) struct RateArgs {
    /// Path to the candidate properties JSON file.
    #[arg(long = ARG_RATE_PROPERTIES, value_name = "path")]
    #[serde(default)]
    pub(crate) properties: Option<Utf8PathBuf>,
    /// Path to the POI JSON file.
    #[arg(long = ARG_RATE_POIS, value_name = "path")]
    #[serde(default)]
    pub(crate) pois: Option<Utf8PathBuf>,
    /// POI id to score distance against; defaults to the first POI.
    #[arg(long, value_name = "id")]
    #[serde(default)]
    pub(crate) poi: Option<String>,
    /// Travel mode: WALKING, DRIVING, or TRANSIT.
    #[arg(long, value_name = "mode")]
    #[serde(default)]
    pub(crate) mode: Option<String>,
    /// Recorded route fixture; bypasses the routing backend.
    #[arg(long = ARG_RATE_ROUTES, value_name = "path")]
    #[serde(default)]
    pub(crate) routes: Option<Utf8PathBuf>,
    /// Recorded amenity fixture; bypasses the places backend.
    #[arg(long = ARG_RATE_AMENITIES, value_name = "path")]
    #[serde(default)]
    pub(crate) amenities: Option<Utf8PathBuf>,
    /// Base URL for the routing backend.
    #[arg(long, value_name = "url")]
    #[serde(default)]
    pub(crate) routing_url: Option<String>,
    /// Base URL for the places backend.
    #[arg(long, value_name = "url")]
    #[serde(default)]
    pub(crate) amenities_url: Option<String>,
    /// Weight for the distance factor, `0.0..=1.0`.
    #[arg(long, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_distance: Option<f64>,
    /// Weight for the price factor, `0.0..=1.0`.
    #[arg(long, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_price: Option<f64>,
    /// Weight for the safety factor, `0.0..=1.0`.
    #[arg(long, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_safety: Option<f64>,
    /// Weight for the amenity factor, `0.0..=1.0`.
    #[arg(long, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_amenity: Option<f64>,
    /// Write the report to this path instead of standard output.
    #[arg(long, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RateArgs {
    pub(crate) fn into_config(self) -> Result<RateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RateConfig::try_from(merged)
    }
}

/// Where one collaborator's data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DataSource {
    /// A recorded fixture file.
    Fixture(Utf8PathBuf),
    /// The live backend at this base URL.
    Http(String),
}

/// Resolved `rate` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RateConfig {
    pub(crate) properties_path: Utf8PathBuf,
    pub(crate) pois_path: Utf8PathBuf,
    pub(crate) selected_poi: Option<String>,
    pub(crate) mode: TravelMode,
    pub(crate) routing: DataSource,
    pub(crate) amenity: DataSource,
    pub(crate) weights: WeightConfig,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RateConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.properties_path, ARG_RATE_PROPERTIES)?;
        Self::require_existing(&self.pois_path, ARG_RATE_POIS)?;
        if let DataSource::Fixture(path) = &self.routing {
            Self::require_existing(path, ARG_RATE_ROUTES)?;
        }
        if let DataSource::Fixture(path) = &self.amenity {
            Self::require_existing(path, ARG_RATE_AMENITIES)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match nestrank_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RateArgs> for RateConfig {
    type Error = CliError;

    fn try_from(args: RateArgs) -> Result<Self, Self::Error> {
        let properties_path = args.properties.ok_or(CliError::MissingArgument {
            field: ARG_RATE_PROPERTIES,
            env: ENV_RATE_PROPERTIES,
        })?;
        let pois_path = args.pois.ok_or(CliError::MissingArgument {
            field: ARG_RATE_POIS,
            env: ENV_RATE_POIS,
        })?;

        let mode = match args.mode {
            Some(raw) => TravelMode::from_str(&raw)
                .map_err(|_| CliError::InvalidTravelMode { value: raw })?,
            None => TravelMode::default(),
        };

        let default_base_url = HttpEndpointConfig::default().base_url;
        let routing = args.routes.map_or_else(
            || DataSource::Http(args.routing_url.unwrap_or_else(|| default_base_url.clone())),
            DataSource::Fixture,
        );
        let amenity = args.amenities.map_or_else(
            || DataSource::Http(args.amenities_url.unwrap_or(default_base_url)),
            DataSource::Fixture,
        );

        let mut weights = WeightConfig::default();
        for (factor, value) in [
            (WeightFactor::Distance, args.weight_distance),
            (WeightFactor::Price, args.weight_price),
            (WeightFactor::NeighborhoodSafety, args.weight_safety),
            (WeightFactor::Amenity, args.weight_amenity),
        ] {
            if let Some(value) = value {
                weights.set(factor, value);
            }
        }

        Ok(Self {
            properties_path,
            pois_path,
            selected_poi: args.poi,
            mode,
            routing,
            amenity,
            weights,
            output: args.output,
        })
    }
}

fn build_planner(source: &DataSource) -> Result<Box<dyn RoutePlanner>, CliError> {
    match source {
        DataSource::Fixture(path) => Ok(Box::new(FileRoutePlanner::from_path(path)?)),
        DataSource::Http(base_url) => HttpRoutePlanner::new(base_url.clone())
            .map(|planner| Box::new(planner) as Box<dyn RoutePlanner>)
            .map_err(|source| CliError::BuildProvider {
                base_url: base_url.clone(),
                source,
            }),
    }
}

fn build_amenity_provider(source: &DataSource) -> Result<Box<dyn AmenityProvider>, CliError> {
    match source {
        DataSource::Fixture(path) => Ok(Box::new(FileAmenityProvider::from_path(path)?)),
        DataSource::Http(base_url) => HttpAmenityProvider::new(base_url.clone())
            .map(|provider| Box::new(provider) as Box<dyn AmenityProvider>)
            .map_err(|source| CliError::BuildProvider {
                base_url: base_url.clone(),
                source,
            }),
    }
}

pub(crate) fn run_rate(args: RateArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;

    let report = execute_rate(&config)?;
    match &config.output {
        Some(path) => {
            let payload = report::render_report(&report)?;
            nestrank_fs::write_file(path, payload.as_bytes()).map_err(CliError::WriteReport)
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            report::write_report(&mut stdout, &report)
        }
    }
}

fn execute_rate(config: &RateConfig) -> Result<report::RatingReport, CliError> {
    let properties = input::load_properties(&config.properties_path)?;
    let pois = input::load_pois(&config.pois_path)?;

    let mut session =
        RatingSession::new(properties, pois).with_weights(config.weights);

    let selected_poi = resolve_selected_poi(&session, config.selected_poi.as_deref())?;

    let planner = build_planner(&config.routing)?;
    let provider = build_amenity_provider(&config.amenity)?;

    // The four factor scorers are order-independent; the aggregator runs
    // last. A distance failure is logged and leaves that factor unscored
    // rather than aborting the report.
    let poi = selected_poi
        .as_ref()
        .and_then(|id| session.poi(id).cloned());
    if let Err(error) = distance::score(&mut session, planner.as_ref(), poi.as_ref(), config.mode)
    {
        warn!("distance scoring failed: {error}");
    }
    price::score(&mut session);
    safety::score(&mut session);
    amenities::score(&mut session, provider.as_ref());
    total::score(&mut session);

    Ok(report::build_report(&session, config.mode, selected_poi))
}

/// Resolve the POI the distance factor scores against.
///
/// An explicit `--poi` must exist in the POI file; otherwise the first POI
/// is used, and a run with no POIs at all proceeds without distance scores.
fn resolve_selected_poi(
    session: &RatingSession,
    requested: Option<&str>,
) -> Result<Option<PoiId>, CliError> {
    match requested {
        Some(raw) => {
            let id = PoiId::new(raw);
            if session.poi(&id).is_none() {
                return Err(CliError::UnknownPoi {
                    id: raw.to_owned(),
                });
            }
            Ok(Some(id))
        }
        None => Ok(session.pois().first().map(|poi| poi.id.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use nestrank_core::{Poi, Property};
    use rstest::rstest;
    use tempfile::TempDir;

    fn base_args(temp: &TempDir) -> RateArgs {
        let properties = temp.path().join("properties.json");
        let pois = temp.path().join("pois.json");
        std::fs::write(
            &properties,
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
                {
                    "propertyId": "prop-2",
                    "address": "9 Low Rd",
                    "latitude": -33.8,
                    "longitude": 151.1,
                    "bedrooms": 1,
                    "bathrooms": 1,
                    "parkingSpaces": 0,
                    "weeklyRent": 480
                }
            ]"#,
        )
        .expect("write properties");
        std::fs::write(
            &pois,
            r#"[ { "poiId": "poi-1", "address": "1 Office Plaza", "type": "Work" } ]"#,
        )
        .expect("write pois");

        RateArgs {
            properties: Some(Utf8PathBuf::from_path_buf(properties).expect("utf8 path")),
            pois: Some(Utf8PathBuf::from_path_buf(pois).expect("utf8 path")),
            ..RateArgs::default()
        }
    }

    fn fixture_args(temp: &TempDir) -> RateArgs {
        let routes = temp.path().join("routes.json");
        let amenities = temp.path().join("amenities.json");
        std::fs::write(
            &routes,
            r#"{ "routes": [
                { "propertyId": "prop-1", "distanceMeters": 1000, "duration": "600s" },
                { "propertyId": "prop-2", "distanceMeters": 500, "duration": "300s" }
            ] }"#,
        )
        .expect("write routes");
        std::fs::write(
            &amenities,
            r#"[
                {
                    "lat": -33.9,
                    "lng": 151.2,
                    "amenities": {
                        "restaurant": { "count": 20, "places": [] },
                        "park": { "count": 8, "places": [] }
                    }
                },
                {
                    "lat": -33.8,
                    "lng": 151.1,
                    "amenities": {
                        "restaurant": { "count": 2, "places": [] }
                    }
                }
            ]"#,
        )
        .expect("write amenities");

        RateArgs {
            routes: Some(Utf8PathBuf::from_path_buf(routes).expect("utf8 path")),
            amenities: Some(Utf8PathBuf::from_path_buf(amenities).expect("utf8 path")),
            ..base_args(temp)
        }
    }

    fn config_from(args: RateArgs) -> RateConfig {
        RateConfig::try_from(args).expect("config should resolve")
    }

    #[rstest]
    fn missing_properties_argument_is_reported() {
        let err = RateConfig::try_from(RateArgs::default()).expect_err("should fail");
        assert!(matches!(
            err,
            CliError::MissingArgument {
                field: ARG_RATE_PROPERTIES,
                ..
            }
        ));
    }

    #[rstest]
    fn invalid_mode_is_rejected() {
        let temp = TempDir::new().expect("tempdir");
        let args = RateArgs {
            mode: Some("FLYING".to_owned()),
            ..base_args(&temp)
        };

        let err = RateConfig::try_from(args).expect_err("should fail");

        assert!(matches!(err, CliError::InvalidTravelMode { .. }));
    }

    #[rstest]
    fn fixtures_take_precedence_over_urls() {
        let temp = TempDir::new().expect("tempdir");
        let args = RateArgs {
            routing_url: Some("http://ignored.example.com".to_owned()),
            ..fixture_args(&temp)
        };

        let config = config_from(args);

        assert!(matches!(config.routing, DataSource::Fixture(_)));
        assert!(matches!(config.amenity, DataSource::Fixture(_)));
    }

    #[rstest]
    fn weight_flags_override_the_defaults() {
        let temp = TempDir::new().expect("tempdir");
        let args = RateArgs {
            weight_price: Some(0.9),
            weight_amenity: Some(0.1),
            ..base_args(&temp)
        };

        let config = config_from(args);

        assert_eq!(config.weights.get(WeightFactor::Price), 0.9);
        assert_eq!(config.weights.get(WeightFactor::Amenity), 0.1);
        assert_eq!(config.weights.get(WeightFactor::Distance), 0.5);
    }

    #[rstest]
    fn unknown_selected_poi_is_rejected() {
        let session = RatingSession::new(
            vec![Property::new("p1", "a")],
            vec![Poi::new("poi-1", "x")],
        );

        let err =
            resolve_selected_poi(&session, Some("poi-9")).expect_err("unknown POI should fail");

        assert!(matches!(err, CliError::UnknownPoi { .. }));
    }

    #[rstest]
    fn first_poi_is_selected_by_default() {
        let session = RatingSession::new(
            Vec::new(),
            vec![
                Poi::new("poi-1", "x").with_location(Coord { x: 1.0, y: 1.0 }),
                Poi::new("poi-2", "y"),
            ],
        );

        let selected = resolve_selected_poi(&session, None).expect("default should resolve");

        assert_eq!(selected, Some(PoiId::new("poi-1")));
    }

    #[rstest]
    fn end_to_end_rating_from_fixtures_ranks_every_candidate() {
        let temp = TempDir::new().expect("tempdir");
        let config = config_from(fixture_args(&temp));
        config.validate_sources().expect("sources should validate");

        let report = execute_rate(&config).expect("rating should succeed");

        assert_eq!(report.rankings.len(), 2);
        assert_eq!(report.scores.total_scores().len(), 2);
        assert_eq!(report.selected_poi, Some(PoiId::new("poi-1")));
        // prop-1 wins price per room, safety, and amenities; prop-2 only
        // wins distance. With two candidates the totals rescale across the
        // unit range, so the ranking pins to its ends.
        let best = &report.rankings[0];
        let worst = &report.rankings[1];
        assert_eq!(best.property_id.as_str(), "prop-1");
        assert_eq!(best.total_score, 1.0);
        assert_eq!(worst.total_score, 0.0);
    }
}
