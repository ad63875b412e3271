use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::model::{CurrentObservation, ObservationRequest};

use super::{FetchError, WeatherSource};

/// Open-Meteo API base URL. No API key required.
pub const OPEN_METEO_API_BASE: &str = "https://api.open-meteo.com/v1";

/// Weather source backed by the Open-Meteo forecast endpoint.
#[derive(Debug, Clone)]
pub struct OpenMeteoSource {
    http: Client,
    base_url: String,
}

impl OpenMeteoSource {
    pub fn new() -> Self {
        Self::with_base_url(OPEN_METEO_API_BASE)
    }

    /// Point the source at a different host. Used by tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { http: Client::new(), base_url: base_url.into() }
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.base_url)
    }
}

impl Default for OpenMeteoSource {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: CurrentObservation,
}

#[async_trait]
impl WeatherSource for OpenMeteoSource {
    async fn current(
        &self,
        request: &ObservationRequest,
    ) -> Result<CurrentObservation, FetchError> {
        let url = self.forecast_url();

        tracing::debug!(
            latitude = request.latitude,
            longitude = request.longitude,
            "Requesting current weather from Open-Meteo"
        );

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", request.latitude.to_string()),
                ("longitude", request.longitude.to_string()),
                ("current_weather", "true".to_string()),
                ("temperature_unit", request.temperature_unit.api_value().to_string()),
                ("windspeed_unit", request.windspeed_unit.api_value().to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            tracing::warn!(%status, "Open-Meteo request failed");
            return Err(FetchError::Status(status));
        }

        let body = res.text().await?;
        let parsed: ForecastResponse = serde_json::from_str(&body)?;

        Ok(parsed.current_weather)
    }
}
