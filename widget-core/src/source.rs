use async_trait::async_trait;
use std::fmt::Debug;

use crate::model::{CurrentObservation, ObservationRequest};

pub mod open_meteo;

/// Failure fetching an observation. Both kinds are non-fatal to the widget:
/// the controller converts them to display text and the timer keeps running.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The service answered with a non-success status.
    #[error("HTTP error: status {0}")]
    Status(reqwest::StatusCode),

    /// The request never completed (DNS, connect, TLS, body read).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The body was not the JSON shape we expect.
    #[error("Failed to parse weather response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A remote source of current weather observations.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn current(
        &self,
        request: &ObservationRequest,
    ) -> Result<CurrentObservation, FetchError>;
}
