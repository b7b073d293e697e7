use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use thiserror::Error;

use crate::{
    Config,
    model::{GeoCodeResult, RawCurrentForecast, RawWeekForecast},
};

pub mod open_meteo;
pub mod openweather;

pub use open_meteo::OpenMeteoProvider;
pub use openweather::OpenWeatherGeocoder;

/// Failure of a single request to one of the upstream APIs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error calling {endpoint}: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} request failed with status {status}: {body}")]
    Http { endpoint: &'static str, status: u16, body: String },

    #[error("failed to parse {endpoint} JSON: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Source of current and seven-day forecasts.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn current_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<RawCurrentForecast, FetchError>;

    async fn week_forecast(&self, latitude: f64, longitude: f64)
    -> Result<RawWeekForecast, FetchError>;
}

/// Resolves a city name into coordinates.
#[async_trait]
pub trait GeocodingProvider: Send + Sync + Debug {
    async fn coordinates(&self, city: &str) -> Result<Vec<GeoCodeResult>, FetchError>;
}

/// Builds the HTTP client shared by all providers.
pub fn http_client(config: &Config) -> anyhow::Result<Client> {
    Client::builder()
        .connect_timeout(config.http_timeout())
        .timeout(config.http_timeout())
        .build()
        .context("Failed to build HTTP client")
}

/// Construct the forecast provider from config.
pub fn forecast_provider_from_config(
    http: &Client,
    config: &Config,
) -> Box<dyn ForecastProvider> {
    Box::new(OpenMeteoProvider::new(http.clone(), &config.forecast_base_url))
}

/// Construct the geocoding provider from config; fails when no API key is available.
pub fn geocoding_provider_from_config(
    http: &Client,
    config: &Config,
) -> anyhow::Result<Box<dyn GeocodingProvider>> {
    let api_key = config.geocoding_api_key()?;

    Ok(Box::new(OpenWeatherGeocoder::new(http.clone(), &config.geocoding_base_url, api_key)))
}

/// Sends the request and decodes a successful JSON body.
pub(crate) async fn get_json<T: DeserializeOwned>(
    endpoint: &'static str,
    request: RequestBuilder,
) -> Result<T, FetchError> {
    let res = request
        .send()
        .await
        .map_err(|source| FetchError::Transport { endpoint, source })?;

    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|source| FetchError::Transport { endpoint, source })?;

    if !status.is_success() {
        return Err(FetchError::Http {
            endpoint,
            status: status.as_u16(),
            body: truncate_body(&body),
        });
    }

    serde_json::from_str(&body).map_err(|source| FetchError::Decode { endpoint, source })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
