//! Application state as a pure function of events.
//!
//! The UI never mutates state directly: it feeds [`Event`]s to [`reduce`]
//! and renders the snapshot it gets back.

use tracing::info;

use crate::{
    model::{CurrentSummary, DayForecast, FORECAST_DAYS, Location, RawCurrentForecast, RawWeekForecast},
    normalize::{normalize, summarize_current},
};

pub const LOCATION_FAILED: &str = "Failed to fetch location.";
pub const CURRENT_FAILED: &str = "Failed to fetch weather data.";
pub const WEEK_FAILED: &str = "Failed to fetch week's weather data.";
pub const WEEK_MISSING: &str = "Weekly forecast data is unavailable";

/// Load status of one part of the screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel<T> {
    Loading,
    Ready(T),
    Failed(&'static str),
}

impl<T> Panel<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Panel::Ready(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The user submitted a city search.
    CitySearched(String),
    /// Geocoding finished; `None` when it failed or found nothing usable.
    LocationResolved(Option<Location>),
    CurrentLoaded(Option<RawCurrentForecast>),
    WeekLoaded(Option<RawWeekForecast>),
    /// Day offset picked from the week list.
    DaySelected(usize),
    AlertDismissed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub location: Location,
    /// City name of an in-flight search.
    pub pending_city: Option<String>,
    pub current: Panel<CurrentSummary>,
    pub week: Panel<[DayForecast; FORECAST_DAYS]>,
    pub selected_day: Option<usize>,
    pub alert: Option<&'static str>,
}

impl AppState {
    pub fn new(location: Location) -> Self {
        Self {
            location,
            pending_city: None,
            current: Panel::Loading,
            week: Panel::Loading,
            selected_day: None,
            alert: None,
        }
    }

    /// City to display: the pending search while one is in flight.
    pub fn city(&self) -> &str {
        self.pending_city.as_deref().unwrap_or(&self.location.city)
    }

    pub fn selected_day(&self) -> Option<&DayForecast> {
        self.week.ready()?.get(self.selected_day?)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Location::default())
    }
}

pub fn reduce(state: &AppState, event: Event) -> AppState {
    let mut next = state.clone();

    match event {
        Event::CitySearched(city) => {
            next.pending_city = Some(city);
        }
        Event::LocationResolved(Some(location)) => {
            info!(
                city = %location.city,
                latitude = location.latitude,
                longitude = location.longitude,
                "location changed"
            );
            next = AppState::new(location);
        }
        Event::LocationResolved(None) => {
            next.pending_city = None;
            next.alert = Some(LOCATION_FAILED);
        }
        Event::CurrentLoaded(Some(raw)) => {
            next.current = Panel::Ready(summarize_current(Some(&raw)));
        }
        Event::CurrentLoaded(None) => {
            next.current = Panel::Failed(CURRENT_FAILED);
        }
        Event::WeekLoaded(Some(raw)) => {
            next.week = match raw.daily {
                Some(daily) => Panel::Ready(normalize(Some(&daily))),
                None => Panel::Failed(WEEK_MISSING),
            };
            next.selected_day = None;
        }
        Event::WeekLoaded(None) => {
            next.week = Panel::Failed(WEEK_FAILED);
            next.selected_day = None;
        }
        Event::DaySelected(day) => {
            if state.week.ready().is_some() && day < FORECAST_DAYS {
                next.selected_day = Some(day);
            }
        }
        Event::AlertDismissed => {
            next.alert = None;
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        condition::WeatherCondition,
        model::{CurrentObservation, DailySeries},
    };

    fn helsinki() -> Location {
        Location { city: "Helsinki".to_string(), latitude: 60.17, longitude: 24.94 }
    }

    fn week() -> RawWeekForecast {
        RawWeekForecast {
            daily: Some(DailySeries {
                temperature_max: Some(vec![Some(14.0), Some(12.0)]),
                sunrise: Some(vec![
                    Some("2024-05-01T05:02".to_string()),
                    Some("2024-05-02T04:59".to_string()),
                ]),
                ..DailySeries::default()
            }),
            ..RawWeekForecast::default()
        }
    }

    #[test]
    fn initial_state_is_loading_default_city() {
        let state = AppState::default();

        assert_eq!(state.city(), "Tampere");
        assert_eq!(state.current, Panel::Loading);
        assert_eq!(state.week, Panel::Loading);
        assert_eq!(state.alert, None);
    }

    #[test]
    fn successful_search_replaces_location_and_reloads() {
        let loaded = reduce(&AppState::default(), Event::CurrentLoaded(None));
        let searching = reduce(&loaded, Event::CitySearched("helsinki".to_string()));
        assert_eq!(searching.city(), "helsinki");

        let resolved = reduce(&searching, Event::LocationResolved(Some(helsinki())));

        assert_eq!(resolved.city(), "Helsinki");
        assert_eq!(resolved.location, helsinki());
        assert_eq!(resolved.current, Panel::Loading);
        assert_eq!(resolved.pending_city, None);
    }

    #[test]
    fn failed_search_reverts_city_and_alerts() {
        let searching = reduce(&AppState::default(), Event::CitySearched("Atlantis".to_string()));
        let failed = reduce(&searching, Event::LocationResolved(None));

        assert_eq!(failed.city(), "Tampere");
        assert_eq!(failed.location, Location::default());
        assert_eq!(failed.alert, Some(LOCATION_FAILED));

        let dismissed = reduce(&failed, Event::AlertDismissed);
        assert_eq!(dismissed.alert, None);
    }

    #[test]
    fn fetch_results_fill_panels() {
        let raw = RawCurrentForecast {
            current: Some(CurrentObservation { weathercode: Some(0), ..CurrentObservation::default() }),
            ..RawCurrentForecast::default()
        };

        let state = reduce(&AppState::default(), Event::CurrentLoaded(Some(raw)));
        let state = reduce(&state, Event::WeekLoaded(Some(week())));

        let current = state.current.ready().unwrap();
        assert_eq!(current.weather_condition, WeatherCondition::Clear);

        let days = state.week.ready().unwrap();
        assert_eq!(days[0].week_day, "Today");
        assert_eq!(days[1].week_day, "Thursday");
        assert!(days[2].temperature_max.is_nan());
    }

    #[test]
    fn fetch_failures_use_fixed_messages() {
        let state = reduce(&AppState::default(), Event::CurrentLoaded(None));
        let state = reduce(&state, Event::WeekLoaded(None));

        assert_eq!(state.current, Panel::Failed(CURRENT_FAILED));
        assert_eq!(state.week, Panel::Failed(WEEK_FAILED));

        let state = reduce(&state, Event::WeekLoaded(Some(RawWeekForecast::default())));
        assert_eq!(state.week, Panel::Failed(WEEK_MISSING));
    }

    #[test]
    fn day_selection_requires_ready_week() {
        let state = reduce(&AppState::default(), Event::DaySelected(1));
        assert_eq!(state.selected_day(), None);

        let state = reduce(&state, Event::WeekLoaded(Some(week())));
        let state = reduce(&state, Event::DaySelected(1));
        assert_eq!(state.selected_day().map(|d| d.temperature_max), Some(12.0));

        let state = reduce(&state, Event::DaySelected(FORECAST_DAYS));
        assert_eq!(state.selected_day, Some(1));
    }

    #[test]
    fn reduce_leaves_previous_snapshot_untouched() {
        let before = AppState::default();
        let _ = reduce(&before, Event::CitySearched("Oulu".to_string()));

        assert_eq!(before, AppState::default());
    }
}
