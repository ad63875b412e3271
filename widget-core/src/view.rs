use chrono::{DateTime, Local};
use std::fmt;

use crate::{codes, config::WidgetConfig, model::CurrentObservation};

/// Fully-formatted render model for one observation.
///
/// Everything the display target prints is resolved here, so targets stay
/// dumb: they only place text.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherView {
    pub location_name: String,
    /// Local wall-clock time of the render, `HH:MM`.
    pub time: String,
    /// Temperature rounded to the nearest integer.
    pub temperature: i64,
    pub temperature_suffix: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub windspeed: f64,
    pub windspeed_suffix: &'static str,
    pub wind_compass: &'static str,
}

impl WeatherView {
    /// Build a view for `observation` stamped with the current local time.
    pub fn new(observation: &CurrentObservation, config: &WidgetConfig) -> Self {
        Self::at(observation, config, Local::now())
    }

    /// Build a view stamped with an explicit clock reading.
    pub fn at(
        observation: &CurrentObservation,
        config: &WidgetConfig,
        now: DateTime<Local>,
    ) -> Self {
        let code = codes::lookup(observation.weathercode);

        Self {
            location_name: config.location_name.clone(),
            time: now.format("%H:%M").to_string(),
            temperature: observation.temperature.round() as i64,
            temperature_suffix: config.temperature_unit.suffix(),
            icon: code.icon,
            description: code.description,
            windspeed: observation.windspeed,
            windspeed_suffix: config.windspeed_unit.suffix(),
            wind_compass: observation.wind_compass(),
        }
    }
}

impl fmt::Display for WeatherView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}  {}", self.location_name, self.time)?;
        writeln!(f, "{}{} {}", self.temperature, self.temperature_suffix, self.icon)?;
        writeln!(f, "{}", self.description)?;
        write!(
            f,
            "💨 {} {}  🧭 {}",
            self.windspeed, self.windspeed_suffix, self.wind_compass
        )
    }
}

/// Text shown in place of the view when a fetch fails.
pub fn error_text(message: &str) -> String {
    format!("Weather unavailable\n{message}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TemperatureUnit, WindspeedUnit};
    use chrono::TimeZone;

    fn observation() -> CurrentObservation {
        CurrentObservation {
            temperature: 72.4,
            weathercode: 0,
            windspeed: 5.3,
            winddirection: 315.0,
        }
    }

    fn fixed_clock() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 5, 14, 30, 0).unwrap()
    }

    #[test]
    fn view_resolves_code_and_units() {
        let view = WeatherView::at(&observation(), &WidgetConfig::default(), fixed_clock());

        assert_eq!(view.time, "14:30");
        assert_eq!(view.location_name, "Brighton, MI");
        assert_eq!(view.temperature, 72);
        assert_eq!(view.temperature_suffix, "°F");
        assert_eq!(view.icon, "☀️");
        assert_eq!(view.description, "Clear sky");
        assert_eq!(view.wind_compass, "NW");
    }

    #[test]
    fn temperature_rounds_to_nearest_integer() {
        let mut obs = observation();
        obs.temperature = 72.5;
        let view = WeatherView::at(&obs, &WidgetConfig::default(), fixed_clock());
        assert_eq!(view.temperature, 73);

        obs.temperature = -0.4;
        let view = WeatherView::at(&obs, &WidgetConfig::default(), fixed_clock());
        assert_eq!(view.temperature, 0);
    }

    #[test]
    fn celsius_and_kmh_suffixes() {
        let config = WidgetConfig {
            temperature_unit: TemperatureUnit::Celsius,
            windspeed_unit: WindspeedUnit::Kmh,
            ..WidgetConfig::default()
        };

        let view = WeatherView::at(&observation(), &config, fixed_clock());

        assert_eq!(view.temperature_suffix, "°C");
        assert_eq!(view.windspeed_suffix, "km/h");
    }

    #[test]
    fn unknown_code_renders_fallback_pair() {
        let mut obs = observation();
        obs.weathercode = 1000;

        let view = WeatherView::at(&obs, &WidgetConfig::default(), fixed_clock());

        assert_eq!(view.description, "Unknown");
        assert_eq!(view.icon, "❓");
    }

    #[test]
    fn display_lays_out_the_widget_block() {
        let view = WeatherView::at(&observation(), &WidgetConfig::default(), fixed_clock());
        let text = view.to_string();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Brighton, MI  14:30");
        assert_eq!(lines[1], "72°F ☀️");
        assert_eq!(lines[2], "Clear sky");
        assert_eq!(lines[3], "💨 5.3 mph  🧭 NW");
    }

    #[test]
    fn error_text_has_heading_and_message() {
        let text = error_text("HTTP error: status 500 Internal Server Error");

        assert!(text.starts_with("Weather unavailable\n"));
        assert!(text.contains("500"));
    }
}
