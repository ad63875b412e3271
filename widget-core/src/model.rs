use serde::Deserialize;

use crate::config::{TemperatureUnit, WindspeedUnit};

/// Query fields a [`crate::source::WeatherSource`] needs to fetch one observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub temperature_unit: TemperatureUnit,
    pub windspeed_unit: WindspeedUnit,
}

/// One snapshot of current conditions, as returned by the remote source.
///
/// Transient: superseded by the next fetch, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CurrentObservation {
    pub temperature: f64,
    pub weathercode: u16,
    pub windspeed: f64,
    /// Wind direction in degrees, 0-360.
    pub winddirection: f64,
}

impl CurrentObservation {
    /// Compass point the wind is blowing from.
    pub fn wind_compass(&self) -> &'static str {
        compass_point(self.winddirection)
    }
}

/// Map degrees to one of the eight compass points.
pub fn compass_point(degrees: f64) -> &'static str {
    const DIRECTIONS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

    let index = (degrees / 45.0).round() as i64;
    DIRECTIONS[index.rem_euclid(8) as usize]
}
