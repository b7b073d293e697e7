use serde::{Deserialize, Serialize};

use crate::condition::WeatherCondition;

/// Number of days in a normalized week forecast; offset 0 is today.
pub const FORECAST_DAYS: usize = 7;

/// Current-weather payload as returned by the forecast API.
///
/// Every field is optional: the provider omits whatever it cannot supply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCurrentForecast {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(rename = "current_weather")]
    pub current: Option<CurrentObservation>,
    pub hourly: Option<HourlyHumidity>,
    #[serde(rename = "daily")]
    pub sun: Option<SunTimes>,
}

/// Temperature in °C, windspeed in km/h.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentObservation {
    pub temperature: Option<f64>,
    pub windspeed: Option<f64>,
    pub weathercode: Option<i32>,
    pub time: Option<String>,
}

/// Parallel hourly series of timestamps and relative humidity percentages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlyHumidity {
    pub time: Option<Vec<Option<String>>>,
    #[serde(rename = "relative_humidity_2m")]
    pub humidity: Option<Vec<Option<f64>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SunTimes {
    pub sunrise: Option<Vec<Option<String>>>,
    pub sunset: Option<Vec<Option<String>>>,
}

/// Seven-day forecast payload as returned by the forecast API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawWeekForecast {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub daily: Option<DailySeries>,
}

/// Daily parallel arrays, indexed by day offset. Any array may be missing
/// or shorter than [`FORECAST_DAYS`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: Option<Vec<Option<f64>>>,
    #[serde(rename = "temperature_2m_min")]
    pub temperature_min: Option<Vec<Option<f64>>>,
    #[serde(rename = "windspeed_10m_max")]
    pub windspeed_max: Option<Vec<Option<f64>>>,
    pub sunrise: Option<Vec<Option<String>>>,
    pub sunset: Option<Vec<Option<String>>>,
    #[serde(rename = "relative_humidity_2m_max")]
    pub humidity_max: Option<Vec<Option<f64>>>,
    pub weathercode: Option<Vec<Option<i32>>>,
}

/// One normalized day of the week forecast.
///
/// Numeric fields hold `f64::NAN` and string fields hold
/// [`UNAVAILABLE`](crate::time_fields::UNAVAILABLE) when the source had no
/// value. Use [`reading`](crate::format::reading) before doing arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct DayForecast {
    pub temperature_max: f64,
    pub temperature_min: f64,
    /// km/h
    pub windspeed: f64,
    pub sunrise: String,
    pub sunset: String,
    pub humidity: f64,
    pub week_day: String,
    pub weather_condition: WeatherCondition,
}

/// Presentation-ready view of the current-weather payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentSummary {
    pub temperature: Option<f64>,
    /// km/h
    pub windspeed: Option<f64>,
    pub humidity: Option<f64>,
    pub sunrise: String,
    pub sunset: String,
    pub weather_condition: WeatherCondition,
}

/// One entry of the geocoding API response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoCodeResult {
    pub name: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// A selected city and its coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for Location {
    fn default() -> Self {
        Self { city: "Tampere".to_string(), latitude: 61.49, longitude: 23.78 }
    }
}
