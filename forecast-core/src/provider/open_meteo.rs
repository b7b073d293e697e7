use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::model::{RawCurrentForecast, RawWeekForecast};

use super::{FetchError, ForecastProvider, get_json, join_url};

const FORECAST_PATH: &str = "v1/forecast";
const CURRENT_HOURLY_FIELDS: &str = "relative_humidity_2m";
const CURRENT_DAILY_FIELDS: &str = "sunrise,sunset";
const WEEK_DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,windspeed_10m_max,\
                                 sunrise,sunset,relative_humidity_2m_max,weathercode";

/// Open-Meteo forecast API. No key is required.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    http: Client,
    url: String,
}

impl OpenMeteoProvider {
    pub fn new(http: Client, base_url: &str) -> Self {
        Self { http, url: join_url(base_url, FORECAST_PATH) }
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoProvider {
    async fn current_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<RawCurrentForecast, FetchError> {
        debug!(latitude, longitude, "requesting current forecast");

        let request = self.http.get(&self.url).query(&[
            ("latitude", latitude.to_string().as_str()),
            ("longitude", longitude.to_string().as_str()),
            ("current_weather", "true"),
            ("hourly", CURRENT_HOURLY_FIELDS),
            ("daily", CURRENT_DAILY_FIELDS),
            ("timezone", "auto"),
        ]);

        get_json("Open-Meteo current forecast", request).await
    }

    async fn week_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<RawWeekForecast, FetchError> {
        debug!(latitude, longitude, "requesting week forecast");

        let request = self.http.get(&self.url).query(&[
            ("latitude", latitude.to_string().as_str()),
            ("longitude", longitude.to_string().as_str()),
            ("daily", WEEK_DAILY_FIELDS),
            ("timezone", "auto"),
        ]);

        get_json("Open-Meteo week forecast", request).await
    }
}
