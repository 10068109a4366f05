//! HTTP amenity provider blocking on async `reqwest` calls.

use geo::Coord;
use nestrank_core::{AmenityLookupError, AmenityProvider, AmenitySurvey};

use crate::http::{HttpEndpointConfig, HttpTransport, ProviderBuildError};

use super::wire::{SurveyWire, survey_from_wire};

/// Amenity provider backed by the backend's `/api/getAmenities` endpoint.
///
/// # Example
///
/// ```no_run
/// use geo::Coord;
/// use nestrank_core::AmenityProvider;
/// use nestrank_data::amenities::HttpAmenityProvider;
///
/// let provider = HttpAmenityProvider::new("http://localhost:3000")?;
/// let survey = provider.nearby_amenities(Coord { x: 151.2, y: -33.9 })?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct HttpAmenityProvider {
    transport: HttpTransport,
    config: HttpEndpointConfig,
}

impl HttpAmenityProvider {
    /// Create a provider with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpEndpointConfig::new(base_url))
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpEndpointConfig) -> Result<Self, ProviderBuildError> {
        let transport = HttpTransport::build(&config)?;
        Ok(Self { transport, config })
    }

    /// Build the places endpoint URL for one location.
    ///
    /// Coordinates follow the workspace convention (`x = longitude`,
    /// `y = latitude`); the endpoint takes them as `lat`/`lng` query
    /// parameters.
    fn amenities_url(&self, location: Coord<f64>) -> String {
        format!(
            "{}/api/getAmenities?lat={}&lng={}",
            self.config.trimmed_base_url(),
            location.y,
            location.x
        )
    }

    /// Issue the GET and decode the survey.
    async fn fetch_survey(
        &self,
        location: Coord<f64>,
    ) -> Result<AmenitySurvey, AmenityLookupError> {
        let url = self.amenities_url(location);

        let response = self
            .transport
            .client()
            .get(&url)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        let wire: SurveyWire =
            response
                .json()
                .await
                .map_err(|err| AmenityLookupError::Decode {
                    message: err.to_string(),
                })?;

        Ok(survey_from_wire(wire))
    }

    /// Convert a reqwest error to an `AmenityLookupError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> AmenityLookupError {
        if error.is_timeout() {
            return AmenityLookupError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return AmenityLookupError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        AmenityLookupError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}

impl AmenityProvider for HttpAmenityProvider {
    fn nearby_amenities(&self, location: Coord<f64>) -> Result<AmenitySurvey, AmenityLookupError> {
        if location.x == 0.0 && location.y == 0.0 {
            return Err(AmenityLookupError::InvalidLocation);
        }
        self.transport.run(self.fetch_survey(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn amenities_url_carries_lat_lng_query() {
        let provider =
            HttpAmenityProvider::new("http://backend.example.com").expect("provider should build");

        let url = provider.amenities_url(Coord { x: 151.2, y: -33.9 });

        assert_eq!(
            url,
            "http://backend.example.com/api/getAmenities?lat=-33.9&lng=151.2"
        );
    }

    #[rstest]
    fn placeholder_location_is_rejected_without_a_request() {
        let provider =
            HttpAmenityProvider::new("http://backend.invalid").expect("provider should build");

        let err = provider
            .nearby_amenities(Coord { x: 0.0, y: 0.0 })
            .expect_err("placeholder coordinates should be rejected");

        assert_eq!(err, AmenityLookupError::InvalidLocation);
    }
}
