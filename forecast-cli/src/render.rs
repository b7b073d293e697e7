//! Human-friendly text output.

use forecast_core::{
    CurrentSummary, DayForecast,
    format::{format_humidity, format_temperature, format_wind_speed, reading},
};

pub fn current(city: &str, summary: &CurrentSummary) -> String {
    format!(
        "{city}\n\
         {condition}\n\
         Temperature: {temperature}\n\
         Wind Speed:  {wind}\n\
         Humidity:    {humidity}\n\
         Sunrise: {sunrise}  Sunset: {sunset}\n",
        condition = summary.weather_condition,
        temperature = format_temperature(summary.temperature),
        wind = format_wind_speed(summary.windspeed),
        humidity = format_humidity(summary.humidity),
        sunrise = summary.sunrise,
        sunset = summary.sunset,
    )
}

pub fn week(city: &str, days: &[DayForecast]) -> String {
    let rows: String = days.iter().map(week_row).collect();

    format!("7-day forecast for {city}\n{rows}")
}

fn week_row(day: &DayForecast) -> String {
    format!(
        "{:<11} {:<14} {:>12} / {:<12} {}\n",
        day.week_day,
        day.weather_condition.label(),
        format_temperature(reading(day.temperature_max)),
        format_temperature(reading(day.temperature_min)),
        format_wind_speed(reading(day.windspeed)),
    )
}

pub fn day(city: &str, day: &DayForecast) -> String {
    format!(
        "{week_day} in {city}: {condition}\n\
         Lowest temperature:  {min}\n\
         Highest temperature: {max}\n\
         Wind speed:          {wind}\n\
         Humidity:            {humidity}\n\
         Sunrise:             {sunrise}\n\
         Sunset:              {sunset}\n",
        week_day = day.week_day,
        condition = day.weather_condition,
        min = format_temperature(reading(day.temperature_min)),
        max = format_temperature(reading(day.temperature_max)),
        wind = format_wind_speed(reading(day.windspeed)),
        humidity = format_humidity(reading(day.humidity)),
        sunrise = day.sunrise,
        sunset = day.sunset,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_core::{DailySeries, UNAVAILABLE, WeatherCondition, normalize};

    #[test]
    fn current_shows_converted_wind_and_sentinels() {
        let summary = CurrentSummary {
            temperature: Some(9.1),
            windspeed: Some(18.0),
            humidity: None,
            sunrise: "05:02".to_string(),
            sunset: UNAVAILABLE.to_string(),
            weather_condition: WeatherCondition::Foggy,
        };

        let text = current("Tampere", &summary);

        assert!(text.starts_with("Tampere\nFoggy\n"));
        assert!(text.contains("Temperature: 9.1°C"));
        assert!(text.contains("5.0 m/s"));
        assert!(text.contains("Humidity:    Unavailable"));
        assert!(text.contains("Sunset: Unavailable"));
    }

    #[test]
    fn week_lists_seven_days() {
        let daily = DailySeries {
            temperature_max: Some(vec![Some(14.0)]),
            windspeed_max: Some(vec![Some(36.0)]),
            ..DailySeries::default()
        };
        let days = normalize(Some(&daily));

        let text = week("Tampere", &days);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 8);
        assert!(lines[1].starts_with("Today"));
        assert!(lines[1].contains("14.0°C"));
        assert!(lines[1].contains("10.0 m/s"));
        assert!(lines[2].starts_with(UNAVAILABLE));
    }

    #[test]
    fn day_never_prints_nan() {
        let days = normalize(None);
        let text = day("Tampere", &days[3]);

        assert!(!text.contains("NaN"));
        assert!(text.contains("Humidity:            Unavailable"));
        assert!(text.contains("Sunrise:             Unavailable\n"));
        assert_eq!(text.lines().count(), 7);
    }

    #[test]
    fn current_lines_are_not_indented() {
        let summary = CurrentSummary {
            temperature: None,
            windspeed: None,
            humidity: Some(55.0),
            sunrise: UNAVAILABLE.to_string(),
            sunset: UNAVAILABLE.to_string(),
            weather_condition: WeatherCondition::Unknown,
        };

        let text = current("Oulu", &summary);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "Unknown");
        assert_eq!(lines[4], "Humidity:    55.0%");
        assert!(text.ends_with('\n'));
    }
}
