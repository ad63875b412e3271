use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use inquire::{CustomType, Select, Text};
use std::sync::Arc;

use widget_core::{
    OpenMeteoSource, TemperatureUnit, WeatherWidget, WidgetConfig, WidgetHandle, WindspeedUnit,
};

use crate::display::TerminalDisplay;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-widget", version, about = "Terminal weather widget")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Config keys accepted as flag overrides on top of the config file.
#[derive(Debug, Default, Args)]
pub struct ConfigOverrides {
    /// Latitude in degrees.
    #[arg(long)]
    latitude: Option<f64>,

    /// Longitude in degrees.
    #[arg(long)]
    longitude: Option<f64>,

    /// Display label for the location; never sent to the API.
    #[arg(long)]
    location_name: Option<String>,

    /// Temperature unit: fahrenheit or celsius.
    #[arg(long)]
    temperature_unit: Option<TemperatureUnit>,

    /// Wind-speed unit: mph or kmh.
    #[arg(long)]
    windspeed_unit: Option<WindspeedUnit>,

    /// Refresh interval in milliseconds.
    #[arg(long)]
    update_interval: Option<u64>,
}

impl ConfigOverrides {
    fn apply(&self, config: &mut WidgetConfig) {
        if let Some(latitude) = self.latitude {
            config.latitude = latitude;
        }
        if let Some(longitude) = self.longitude {
            config.longitude = longitude;
        }
        if let Some(location_name) = &self.location_name {
            config.location_name = location_name.clone();
        }
        if let Some(temperature_unit) = self.temperature_unit {
            config.temperature_unit = temperature_unit;
        }
        if let Some(windspeed_unit) = self.windspeed_unit {
            config.windspeed_unit = windspeed_unit;
        }
        if let Some(update_interval) = self.update_interval {
            config.update_interval_ms = update_interval;
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the widget: render immediately, then refresh on the configured
    /// interval until Ctrl-C.
    Run {
        #[command(flatten)]
        overrides: ConfigOverrides,
    },

    /// Fetch and render once, then exit.
    Show {
        #[command(flatten)]
        overrides: ConfigOverrides,
    },

    /// Interactively edit the config file.
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Run { overrides } => run_widget(&overrides).await,
            Command::Show { overrides } => show_once(&overrides).await,
            Command::Configure => configure(),
        }
    }
}

fn load_config(overrides: &ConfigOverrides) -> Result<WidgetConfig> {
    let mut config = WidgetConfig::load()?;
    overrides.apply(&mut config);
    config.validate()?;
    Ok(config)
}

fn build_widget(config: WidgetConfig) -> Arc<WeatherWidget> {
    Arc::new(WeatherWidget::new(
        config,
        Box::new(OpenMeteoSource::new()),
        Box::new(TerminalDisplay::new()),
    ))
}

async fn run_widget(overrides: &ConfigOverrides) -> Result<()> {
    let config = load_config(overrides)?;
    let widget = build_widget(config);

    let handle = WidgetHandle::start(Arc::clone(&widget));

    tokio::signal::ctrl_c().await?;
    tracing::debug!("Ctrl-C received; stopping widget");
    handle.stop().await;

    Ok(())
}

async fn show_once(overrides: &ConfigOverrides) -> Result<()> {
    let config = load_config(overrides)?;
    let widget = build_widget(config);
    widget.refresh().await;
    Ok(())
}

fn configure() -> Result<()> {
    let current = WidgetConfig::load()?;

    let latitude = CustomType::<f64>::new("Latitude:").with_default(current.latitude).prompt()?;
    let longitude =
        CustomType::<f64>::new("Longitude:").with_default(current.longitude).prompt()?;
    let location_name =
        Text::new("Location label:").with_default(&current.location_name).prompt()?;
    let temperature_unit = Select::new(
        "Temperature unit:",
        vec![TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius],
    )
    .prompt()?;
    let windspeed_unit =
        Select::new("Wind-speed unit:", vec![WindspeedUnit::Mph, WindspeedUnit::Kmh]).prompt()?;
    let update_interval_ms = CustomType::<u64>::new("Update interval (ms):")
        .with_default(current.update_interval_ms)
        .prompt()?;

    let config = WidgetConfig {
        latitude,
        longitude,
        location_name,
        temperature_unit,
        windspeed_unit,
        update_interval_ms,
    };
    config.validate()?;
    config.save()?;

    println!("Saved configuration to {}", WidgetConfig::config_file_path()?.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_only_given_flags() {
        let mut config = WidgetConfig::default();
        let overrides = ConfigOverrides {
            latitude: Some(52.52),
            temperature_unit: Some(TemperatureUnit::Celsius),
            ..ConfigOverrides::default()
        };

        overrides.apply(&mut config);

        assert_eq!(config.latitude, 52.52);
        assert_eq!(config.temperature_unit, TemperatureUnit::Celsius);
        // Untouched keys keep their defaults.
        assert_eq!(config.longitude, -83.7802);
        assert_eq!(config.windspeed_unit, WindspeedUnit::Mph);
        assert_eq!(config.update_interval_ms, 600_000);
    }

    #[test]
    fn empty_overrides_change_nothing() {
        let mut config = WidgetConfig::default();
        ConfigOverrides::default().apply(&mut config);
        assert_eq!(config, WidgetConfig::default());
    }

    #[test]
    fn run_parses_unit_flags() {
        let cli = Cli::try_parse_from([
            "weather-widget",
            "run",
            "--latitude",
            "48.8566",
            "--longitude",
            "2.3522",
            "--location-name",
            "Paris",
            "--temperature-unit",
            "celsius",
            "--windspeed-unit",
            "kmh",
            "--update-interval",
            "300000",
        ])
        .expect("flags parse");

        let Command::Run { overrides } = cli.command else {
            panic!("expected run command");
        };

        assert_eq!(overrides.latitude, Some(48.8566));
        assert_eq!(overrides.longitude, Some(2.3522));
        assert_eq!(overrides.location_name.as_deref(), Some("Paris"));
        assert_eq!(overrides.temperature_unit, Some(TemperatureUnit::Celsius));
        assert_eq!(overrides.windspeed_unit, Some(WindspeedUnit::Kmh));
        assert_eq!(overrides.update_interval, Some(300_000));
    }

    #[test]
    fn bad_unit_flag_is_rejected() {
        let parsed =
            Cli::try_parse_from(["weather-widget", "show", "--temperature-unit", "kelvin"]);
        assert!(parsed.is_err());
    }
}
