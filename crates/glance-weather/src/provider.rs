//! HTTP provider for the Open-Meteo forecast endpoint.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::types::{CurrentObservation, ForecastResponse, WeatherError};

/// Open-Meteo API base URL
const OPEN_METEO_URL: &str = "https://api.open-meteo.com";

const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    base_url: Url,
}

impl WeatherProvider {
    /// Provider against the public Open-Meteo endpoint.
    pub fn new() -> Result<Self, WeatherError> {
        Self::with_base_url(OPEN_METEO_URL)
    }

    /// Provider against an alternate base URL. Tests point this at a local
    /// mock server.
    pub fn with_base_url(base: &str) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        let base_url = Url::parse(base).map_err(|e| WeatherError::Parse(e.to_string()))?;

        Ok(Self {
            client: Arc::new(client),
            base_url,
        })
    }

    fn forecast_url(
        &self,
        latitude: f64,
        longitude: f64,
        timezone: &str,
    ) -> Result<Url, WeatherError> {
        let mut url = self
            .base_url
            .join("/v1/forecast")
            .map_err(|e| WeatherError::Parse(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("latitude", &latitude.to_string())
            .append_pair("longitude", &longitude.to_string())
            .append_pair("current", "temperature_2m,weather_code")
            .append_pair("timezone", timezone);
        Ok(url)
    }

    /// Fetch current conditions for a coordinate pair.
    ///
    /// Non-2xx responses and malformed bodies are errors; the caller
    /// decides how failure is displayed.
    pub async fn fetch_current(
        &self,
        latitude: f64,
        longitude: f64,
        timezone: &str,
    ) -> Result<CurrentObservation, WeatherError> {
        let url = self.forecast_url(latitude, longitude, timezone)?;
        tracing::debug!("Fetching weather from {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status.as_u16()));
        }

        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        Ok(body.current)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_forecast_url_query() {
        let provider = WeatherProvider::new().unwrap();
        let url = provider
            .forecast_url(-37.8136, 144.9631, "Australia/Melbourne")
            .unwrap();

        assert!(url.as_str().starts_with("https://api.open-meteo.com/v1/forecast?"));
        let query: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(query.contains(&("latitude".into(), "-37.8136".into())));
        assert!(query.contains(&("longitude".into(), "144.9631".into())));
        assert!(query.contains(&("current".into(), "temperature_2m,weather_code".into())));
        assert!(query.contains(&("timezone".into(), "Australia/Melbourne".into())));
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let provider = WeatherProvider::with_base_url(&server.uri()).unwrap();
        let result = provider.fetch_current(1.0, 2.0, "UTC").await;
        assert!(matches!(result, Err(WeatherError::Status(503))));
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let provider = WeatherProvider::with_base_url(&server.uri()).unwrap();
        let result = provider.fetch_current(1.0, 2.0, "UTC").await;
        assert!(matches!(result, Err(WeatherError::Parse(_))));
    }
}
