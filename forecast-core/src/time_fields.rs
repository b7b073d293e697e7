use chrono::NaiveDate;
use tracing::debug;

/// Placeholder shown wherever a string field has no usable source data.
pub const UNAVAILABLE: &str = "Unavailable";

const DATE_TIME_SEPARATOR: char = 'T';

/// Returns the time component of an ISO-8601 `date-Ttime` string,
/// e.g. `"06:12"` for `"2024-05-01T06:12"`.
pub fn time_of_day(timestamp: Option<&str>) -> String {
    timestamp
        .and_then(|ts| ts.split(DATE_TIME_SEPARATOR).nth(1))
        .unwrap_or(UNAVAILABLE)
        .to_string()
}

/// Returns the English weekday name of the date part of a timestamp.
pub fn weekday_name(timestamp: Option<&str>) -> String {
    let Some(timestamp) = timestamp else {
        return UNAVAILABLE.to_string();
    };

    let date = timestamp.split(DATE_TIME_SEPARATOR).next().unwrap_or_default();

    if !is_iso_date(date) {
        debug!(timestamp, "date is not in YYYY-MM-DD form");
        return UNAVAILABLE.to_string();
    }

    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(date) => date.format("%A").to_string(),
        Err(err) => {
            debug!(timestamp, %err, "failed to parse date for weekday");
            UNAVAILABLE.to_string()
        }
    }
}

/// Strict `YYYY-MM-DD` shape: no sign, padding or single-digit fields.
fn is_iso_date(date: &str) -> bool {
    let bytes = date.as_bytes();

    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_of_day_returns_time_component() {
        assert_eq!(time_of_day(Some("2024-05-01T06:12")), "06:12");
        assert_eq!(time_of_day(Some("2024-05-01T21:45:30")), "21:45:30");
    }

    #[test]
    fn time_of_day_without_separator_is_unavailable() {
        assert_eq!(time_of_day(None), UNAVAILABLE);
        assert_eq!(time_of_day(Some("2024-05-01")), UNAVAILABLE);
        assert_eq!(time_of_day(Some("")), UNAVAILABLE);
    }

    #[test]
    fn weekday_name_uses_full_english_name() {
        assert_eq!(weekday_name(Some("2024-05-01T06:12")), "Wednesday");
        assert_eq!(weekday_name(Some("2024-05-05T04:50")), "Sunday");
        assert_eq!(weekday_name(Some("2024-02-29")), "Thursday");
    }

    #[test]
    fn weekday_name_degrades_on_bad_input() {
        assert_eq!(weekday_name(None), UNAVAILABLE);
        assert_eq!(weekday_name(Some("not-a-date")), UNAVAILABLE);
        assert_eq!(weekday_name(Some("2023-02-30T06:00")), UNAVAILABLE);
        assert_eq!(weekday_name(Some("T06:00")), UNAVAILABLE);
        assert_eq!(weekday_name(Some("")), UNAVAILABLE);
    }

    #[test]
    fn weekday_name_requires_strict_iso_date() {
        assert_eq!(weekday_name(Some("2024-5-1T06:00")), UNAVAILABLE);
        assert_eq!(weekday_name(Some(" 2024-05-01T06:00")), UNAVAILABLE);
        assert_eq!(weekday_name(Some("+2024-05-01T06:00")), UNAVAILABLE);
        assert_eq!(weekday_name(Some("2024/05/01T06:00")), UNAVAILABLE);
        assert_eq!(weekday_name(Some("2024-05-01 06:00")), UNAVAILABLE);
        assert_eq!(weekday_name(Some("2024-05-01")), "Wednesday");
    }

    #[test]
    fn iso_date_shape() {
        assert!(is_iso_date("2024-05-01"));
        assert!(!is_iso_date("2024-05-1"));
        assert!(!is_iso_date("20240-5-01"));
        assert!(!is_iso_date("2024-05-01 "));
    }
}
