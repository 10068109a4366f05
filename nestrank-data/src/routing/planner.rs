//! HTTP route planner blocking on async `reqwest` calls.

use std::collections::BTreeSet;

use nestrank_core::{Poi, Property, RouteLeg, RoutePlanError, RoutePlanner, TravelMode};

use crate::http::{HttpEndpointConfig, HttpTransport, ProviderBuildError};

use super::wire::{RoutesRequest, RoutesResponse};

/// Route planner backed by the backend's `/api/getDistance` endpoint.
///
/// # Example
///
/// ```no_run
/// use nestrank_core::{Poi, Property, RoutePlanner, TravelMode};
/// use nestrank_data::routing::HttpRoutePlanner;
///
/// let planner = HttpRoutePlanner::new("http://localhost:3000")?;
/// let poi = Poi::new("poi-1", "1 Office Plaza");
/// let properties = vec![Property::new("prop-1", "12 High St")];
///
/// let legs = planner.plan_routes(&poi, TravelMode::Walking, &properties)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct HttpRoutePlanner {
    transport: HttpTransport,
    config: HttpEndpointConfig,
}

impl HttpRoutePlanner {
    /// Create a planner with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpEndpointConfig::new(base_url))
    }

    /// Create a planner with explicit configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpEndpointConfig) -> Result<Self, ProviderBuildError> {
        let transport = HttpTransport::build(&config)?;
        Ok(Self { transport, config })
    }

    /// Build the directions endpoint URL.
    fn routes_url(&self) -> String {
        format!("{}/api/getDistance", self.config.trimmed_base_url())
    }

    /// Issue the POST and decode the leg batch.
    async fn fetch_routes(
        &self,
        poi: &Poi,
        mode: TravelMode,
        properties: &[Property],
    ) -> Result<Vec<RouteLeg>, RoutePlanError> {
        let url = self.routes_url();
        let request = RoutesRequest::new(poi, mode, properties);

        let response = self
            .transport
            .client()
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        let decoded: RoutesResponse =
            response
                .json()
                .await
                .map_err(|err| RoutePlanError::Decode {
                    message: err.to_string(),
                })?;

        Ok(decoded.routes)
    }

    /// Convert a reqwest error to a `RoutePlanError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> RoutePlanError {
        if error.is_timeout() {
            return RoutePlanError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return RoutePlanError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        RoutePlanError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}

impl RoutePlanner for HttpRoutePlanner {
    fn plan_routes(
        &self,
        poi: &Poi,
        mode: TravelMode,
        properties: &[Property],
    ) -> Result<Vec<RouteLeg>, RoutePlanError> {
        if properties.is_empty() {
            return Err(RoutePlanError::EmptyInput);
        }

        let legs = self
            .transport
            .run(self.fetch_routes(poi, mode, properties))?;
        Ok(fill_missing_with_sentinels(legs, properties))
    }
}

/// Append sentinel legs for requested properties the backend never answered
/// for, so a leg exists for every candidate in the request.
fn fill_missing_with_sentinels(
    mut legs: Vec<RouteLeg>,
    properties: &[Property],
) -> Vec<RouteLeg> {
    let answered: BTreeSet<_> = legs.iter().map(|leg| leg.property_id.clone()).collect();
    for property in properties {
        if !answered.contains(&property.id) {
            legs.push(RouteLeg::unroutable(property.id.clone()));
        }
    }
    legs
}
