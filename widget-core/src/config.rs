use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use crate::model::ObservationRequest;

/// Temperature unit requested from the API and used for the rendered suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Fahrenheit,
    Celsius,
}

impl TemperatureUnit {
    /// Value sent as the `temperature_unit` query parameter.
    pub fn api_value(&self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Celsius => "celsius",
        }
    }

    /// Suffix appended to the rendered temperature.
    pub fn suffix(&self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Celsius => "°C",
        }
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.api_value())
    }
}

impl TryFrom<&str> for TemperatureUnit {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            "celsius" => Ok(TemperatureUnit::Celsius),
            _ => Err(anyhow!(
                "Unknown temperature unit '{value}'. Supported units: fahrenheit, celsius."
            )),
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

/// Wind-speed unit requested from the API and used for the rendered suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WindspeedUnit {
    #[default]
    Mph,
    Kmh,
}

impl WindspeedUnit {
    /// Value sent as the `windspeed_unit` query parameter.
    pub fn api_value(&self) -> &'static str {
        match self {
            WindspeedUnit::Mph => "mph",
            WindspeedUnit::Kmh => "kmh",
        }
    }

    /// Suffix appended to the rendered wind speed.
    pub fn suffix(&self) -> &'static str {
        match self {
            WindspeedUnit::Mph => "mph",
            WindspeedUnit::Kmh => "km/h",
        }
    }
}

impl std::fmt::Display for WindspeedUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.api_value())
    }
}

impl TryFrom<&str> for WindspeedUnit {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "mph" => Ok(WindspeedUnit::Mph),
            "kmh" => Ok(WindspeedUnit::Kmh),
            _ => Err(anyhow!("Unknown wind-speed unit '{value}'. Supported units: mph, kmh.")),
        }
    }
}

impl FromStr for WindspeedUnit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

/// Widget configuration. Created once; never mutated after the widget starts.
///
/// Every field has a default, so a partial config file (or none at all) is
/// valid. Example TOML:
///
/// ```toml
/// latitude = 42.5295
/// longitude = -83.7802
/// location_name = "Brighton, MI"
/// temperature_unit = "fahrenheit"
/// windspeed_unit = "mph"
/// update_interval_ms = 600000
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub latitude: f64,
    pub longitude: f64,
    /// Display-only label; never sent to the API.
    pub location_name: String,
    pub temperature_unit: TemperatureUnit,
    pub windspeed_unit: WindspeedUnit,
    /// Delay between scheduled refresh cycles, in milliseconds.
    pub update_interval_ms: u64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            latitude: 42.5295,
            longitude: -83.7802,
            location_name: "Brighton, MI".to_string(),
            temperature_unit: TemperatureUnit::Fahrenheit,
            windspeed_unit: WindspeedUnit::Mph,
            update_interval_ms: 600_000,
        }
    }
}

impl WidgetConfig {
    /// Scheduled refresh period.
    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }

    /// The query fields the observation source needs.
    pub fn request(&self) -> ObservationRequest {
        ObservationRequest {
            latitude: self.latitude,
            longitude: self.longitude,
            temperature_unit: self.temperature_unit,
            windspeed_unit: self.windspeed_unit,
        }
    }

    /// Reject values the widget cannot run with.
    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(anyhow!("Latitude {} is out of range -90..=90", self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(anyhow!("Longitude {} is out of range -180..=180", self.longitude));
        }
        if self.update_interval_ms == 0 {
            return Err(anyhow!("Update interval must be a positive number of milliseconds"));
        }
        Ok(())
    }

    /// Load config from disk, or return the defaults if no file exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, use defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: WidgetConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-widget", "weather-widget")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
