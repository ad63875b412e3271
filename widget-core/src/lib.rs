//! Core library for the weather widget.
//!
//! This crate defines:
//! - Configuration handling (defaults, overrides, on-disk TOML)
//! - The Open-Meteo observation source behind a trait seam
//! - The weather-code table and view formatting
//! - The widget controller: fetch/render cycle plus the refresh timer
//!
//! It is used by `widget-cli`, but can also be embedded in other front-ends
//! by providing a different [`DisplayTarget`].

pub mod codes;
pub mod config;
pub mod controller;
pub mod display;
pub mod model;
pub mod source;
pub mod view;

pub use config::{TemperatureUnit, WidgetConfig, WindspeedUnit};
pub use controller::{RefreshOutcome, WeatherWidget, WidgetHandle};
pub use display::DisplayTarget;
pub use model::{CurrentObservation, ObservationRequest};
pub use source::{FetchError, WeatherSource, open_meteo::OpenMeteoSource};
pub use view::WeatherView;
