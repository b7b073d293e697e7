//! Turns sparse, index-aligned API payloads into dense display records.
//!
//! Nothing here fails: every missing or malformed value is replaced by its
//! sentinel (`NaN` for numbers, [`UNAVAILABLE`](crate::time_fields::UNAVAILABLE)
//! for strings, [`WeatherCondition::Unknown`](crate::condition::WeatherCondition::Unknown)
//! for conditions).

use tracing::debug;

use crate::{
    condition::classify,
    model::{
        CurrentSummary, DailySeries, DayForecast, FORECAST_DAYS, GeoCodeResult, Location,
        RawCurrentForecast,
    },
    time_fields::{time_of_day, weekday_name},
};

const TODAY: &str = "Today";

/// Builds exactly [`FORECAST_DAYS`] records from the daily series, in day
/// offset order. Each array is indexed on its own, so arrays of unequal
/// length still yield a full week padded with sentinels.
pub fn normalize(daily: Option<&DailySeries>) -> [DayForecast; FORECAST_DAYS] {
    std::array::from_fn(|day| day_forecast(daily, day))
}

fn day_forecast(daily: Option<&DailySeries>, day: usize) -> DayForecast {
    let sunrise = daily.and_then(|d| element(&d.sunrise, day));
    let sunset = daily.and_then(|d| element(&d.sunset, day));

    let week_day = if day == 0 { TODAY.to_string() } else { weekday_name(sunrise.as_deref()) };

    DayForecast {
        temperature_max: number(daily.and_then(|d| element(&d.temperature_max, day))),
        temperature_min: number(daily.and_then(|d| element(&d.temperature_min, day))),
        windspeed: number(daily.and_then(|d| element(&d.windspeed_max, day))),
        sunrise: time_of_day(sunrise.as_deref()),
        sunset: time_of_day(sunset.as_deref()),
        humidity: number(daily.and_then(|d| element(&d.humidity_max, day))),
        week_day,
        weather_condition: classify(daily.and_then(|d| element(&d.weathercode, day))),
    }
}

fn element<T: Clone>(series: &Option<Vec<Option<T>>>, index: usize) -> Option<T> {
    series.as_ref()?.get(index)?.clone()
}

fn number(value: Option<f64>) -> f64 {
    value.unwrap_or(f64::NAN)
}

/// Finds the humidity sample for the current observation time.
///
/// An hourly timestamp matches when, with its last two characters dropped,
/// it is a prefix of `current_time` (`"2024-05-01T06:00"` is tested as
/// `"2024-05-01T06:"`). Only the first match counts.
pub fn match_humidity(
    current_time: Option<&str>,
    hourly_times: Option<&[Option<String>]>,
    hourly_humidity: Option<&[Option<f64>]>,
) -> Option<f64> {
    let current_time = current_time?;
    let hourly_humidity = hourly_humidity?;

    let index = hourly_times?.iter().position(|time| {
        time.as_deref()
            .is_some_and(|time| current_time.starts_with(drop_last_two(time)))
    })?;

    hourly_humidity.get(index).copied().flatten()
}

fn drop_last_two(value: &str) -> &str {
    match value.char_indices().rev().nth(1) {
        Some((cut, _)) => &value[..cut],
        None => "",
    }
}

/// Derives the current-weather scalars shown alongside the week forecast.
pub fn summarize_current(raw: Option<&RawCurrentForecast>) -> CurrentSummary {
    let current = raw.and_then(|r| r.current.as_ref());
    let hourly = raw.and_then(|r| r.hourly.as_ref());
    let sun = raw.and_then(|r| r.sun.as_ref());

    let humidity = match_humidity(
        current.and_then(|c| c.time.as_deref()),
        hourly.and_then(|h| h.time.as_deref()),
        hourly.and_then(|h| h.humidity.as_deref()),
    );

    let sunrise = sun.and_then(|s| element(&s.sunrise, 0));
    let sunset = sun.and_then(|s| element(&s.sunset, 0));

    CurrentSummary {
        temperature: current.and_then(|c| c.temperature),
        windspeed: current.and_then(|c| c.windspeed),
        humidity,
        sunrise: time_of_day(sunrise.as_deref()),
        sunset: time_of_day(sunset.as_deref()),
        weather_condition: classify(current.and_then(|c| c.weathercode)),
    }
}

/// Picks the location from a geocoding response. The first result must carry
/// both coordinates; its name falls back to the city that was searched for.
pub fn resolve_location(results: Option<&[GeoCodeResult]>, requested_city: &str) -> Option<Location> {
    let first = results?.first()?;

    let (Some(latitude), Some(longitude)) = (first.lat, first.lon) else {
        debug!(requested_city, "geocoding result has no coordinates");
        return None;
    };

    let city = first
        .name
        .clone()
        .unwrap_or_else(|| requested_city.to_string());

    Some(Location { city, latitude, longitude })
}
