use tracing::{error, warn};

use crate::{
    model::Location,
    normalize::resolve_location,
    provider::{ForecastProvider, GeocodingProvider},
    state::{AppState, Event, reduce},
};

/// Runs the fetches and turns their outcome into state [`Event`]s.
///
/// Failed requests are logged and reported as "no data"; they are never
/// retried.
#[derive(Debug)]
pub struct WeatherService {
    forecast: Box<dyn ForecastProvider>,
    geocoding: Option<Box<dyn GeocodingProvider>>,
}

impl WeatherService {
    pub fn new(
        forecast: Box<dyn ForecastProvider>,
        geocoding: Option<Box<dyn GeocodingProvider>>,
    ) -> Self {
        Self { forecast, geocoding }
    }

    pub async fn search_city(&self, city: &str) -> Event {
        let Some(geocoding) = &self.geocoding else {
            warn!(city, "city search without a geocoding provider");
            return Event::LocationResolved(None);
        };

        let results = match geocoding.coordinates(city).await {
            Ok(results) => Some(results),
            Err(err) => {
                error!(city, error = %err, "geocoding request failed");
                None
            }
        };

        Event::LocationResolved(resolve_location(results.as_deref(), city))
    }

    pub async fn load_current(&self, location: &Location) -> Event {
        let forecast = self
            .forecast
            .current_forecast(location.latitude, location.longitude)
            .await
            .inspect_err(|err| error!(city = %location.city, error = %err, "current forecast request failed"))
            .ok();

        Event::CurrentLoaded(forecast)
    }

    pub async fn load_week(&self, location: &Location) -> Event {
        let forecast = self
            .forecast
            .week_forecast(location.latitude, location.longitude)
            .await
            .inspect_err(|err| error!(city = %location.city, error = %err, "week forecast request failed"))
            .ok();

        Event::WeekLoaded(forecast)
    }

    /// Fetches both forecasts for the state's location concurrently.
    pub async fn refresh(&self, state: &AppState) -> AppState {
        let (current, week) =
            tokio::join!(self.load_current(&state.location), self.load_week(&state.location));

        reduce(&reduce(state, current), week)
    }

    /// Searches for `city` and, when it resolves, loads its forecasts.
    pub async fn select_city(&self, state: &AppState, city: &str) -> AppState {
        let searching = reduce(state, Event::CitySearched(city.to_string()));
        let resolved = reduce(&searching, self.search_city(city).await);

        if resolved.alert.is_some() {
            return resolved;
        }

        self.refresh(&resolved).await
    }
}
