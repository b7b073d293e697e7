//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Raw API payloads and the normalized forecast model
//! - Normalization of sparse payloads into a dense seven-day forecast
//! - Fetching from the forecast and geocoding APIs
//! - Configuration & credentials handling
//! - Application state transitions and display formatting
//!
//! It is used by `forecast-cli`, but can also be embedded in other front ends.

pub mod condition;
pub mod config;
pub mod format;
pub mod model;
pub mod normalize;
pub mod provider;
pub mod service;
pub mod state;
pub mod time_fields;

pub use condition::{WeatherCondition, classify};
pub use config::Config;
pub use model::{
    CurrentSummary, DailySeries, DayForecast, FORECAST_DAYS, GeoCodeResult, Location,
    RawCurrentForecast, RawWeekForecast,
};
pub use normalize::{match_humidity, normalize, resolve_location, summarize_current};
pub use provider::{FetchError, ForecastProvider, GeocodingProvider};
pub use service::WeatherService;
pub use state::{AppState, Event, Panel, reduce};
pub use time_fields::{UNAVAILABLE, time_of_day, weekday_name};
