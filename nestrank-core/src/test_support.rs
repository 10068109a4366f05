//! Test-only collaborator doubles used by unit and behaviour tests.

use geo::Coord;

use crate::amenity::{AmenityLookupError, AmenityProvider, AmenitySurvey};
use crate::poi::Poi;
use crate::property::Property;
use crate::routing::{RouteLeg, RoutePlanError, RoutePlanner};
use crate::travel_mode::TravelMode;

/// Planner returning a fixed set of legs regardless of POI and mode.
#[derive(Debug, Clone, Default)]
pub struct FixedRoutePlanner {
    legs: Vec<RouteLeg>,
}

impl FixedRoutePlanner {
    /// Create a planner that always answers with `legs`.
    #[must_use]
    pub fn with_legs(legs: Vec<RouteLeg>) -> Self {
        Self { legs }
    }
}

impl RoutePlanner for FixedRoutePlanner {
    fn plan_routes(
        &self,
        _poi: &Poi,
        _mode: TravelMode,
        properties: &[Property],
    ) -> Result<Vec<RouteLeg>, RoutePlanError> {
        if properties.is_empty() {
            return Err(RoutePlanError::EmptyInput);
        }
        Ok(self.legs.clone())
    }
}

/// Planner that always fails at the transport level.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingRoutePlanner;

impl RoutePlanner for FailingRoutePlanner {
    fn plan_routes(
        &self,
        _poi: &Poi,
        _mode: TravelMode,
        properties: &[Property],
    ) -> Result<Vec<RouteLeg>, RoutePlanError> {
        if properties.is_empty() {
            return Err(RoutePlanError::EmptyInput);
        }
        Err(RoutePlanError::Network {
            url: "http://planner.invalid".to_owned(),
            message: "connection refused".to_owned(),
        })
    }
}

/// Provider answering every location with the same survey.
#[derive(Debug, Clone, Default)]
pub struct FixedAmenityProvider {
    survey: AmenitySurvey,
}

impl FixedAmenityProvider {
    /// Create a provider that always answers with `survey`.
    #[must_use]
    pub fn with_survey(survey: AmenitySurvey) -> Self {
        Self { survey }
    }
}

impl AmenityProvider for FixedAmenityProvider {
    fn nearby_amenities(&self, _location: Coord<f64>) -> Result<AmenitySurvey, AmenityLookupError> {
        Ok(self.survey.clone())
    }
}

/// Provider that always reports data as unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingAmenityProvider;

impl AmenityProvider for FailingAmenityProvider {
    fn nearby_amenities(&self, location: Coord<f64>) -> Result<AmenitySurvey, AmenityLookupError> {
        Err(AmenityLookupError::Unavailable {
            message: format!("no survey for ({}, {})", location.y, location.x),
        })
    }
}
