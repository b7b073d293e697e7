use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::model::GeoCodeResult;

use super::{FetchError, GeocodingProvider, get_json, join_url};

const DIRECT_GEOCODING_PATH: &str = "geo/1.0/direct";

/// OpenWeatherMap direct geocoding. Only the best match is requested.
#[derive(Clone)]
pub struct OpenWeatherGeocoder {
    api_key: String,
    http: Client,
    url: String,
}

impl OpenWeatherGeocoder {
    pub fn new(http: Client, base_url: &str, api_key: String) -> Self {
        Self { api_key, http, url: join_url(base_url, DIRECT_GEOCODING_PATH) }
    }
}

// Keeps the API key out of logs.
impl std::fmt::Debug for OpenWeatherGeocoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherGeocoder")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl GeocodingProvider for OpenWeatherGeocoder {
    async fn coordinates(&self, city: &str) -> Result<Vec<GeoCodeResult>, FetchError> {
        debug!(city, "requesting coordinates");

        let request = self.http.get(&self.url).query(&[
            ("q", city),
            ("limit", "1"),
            ("appid", self.api_key.as_str()),
        ]);

        get_json("OpenWeatherMap geocoding", request).await
    }
}
