//! Display formatting. Unit conversion happens here and nowhere earlier:
//! all windspeeds in the model are km/h.

use crate::time_fields::UNAVAILABLE;

const KMH_PER_MS: f64 = 3.6;

/// Turns the `NaN` sentinel into `None`.
pub fn reading(value: f64) -> Option<f64> {
    if value.is_nan() { None } else { Some(value) }
}

pub fn wind_speed_ms(kmh: f64) -> f64 {
    kmh / KMH_PER_MS
}

pub fn format_wind_speed(kmh: Option<f64>) -> String {
    match kmh {
        Some(kmh) => format!("{:.1} m/s", wind_speed_ms(kmh)),
        None => UNAVAILABLE.to_string(),
    }
}

pub fn format_temperature(celsius: Option<f64>) -> String {
    match celsius {
        Some(c) => format!("{c:.1}°C"),
        None => UNAVAILABLE.to_string(),
    }
}

pub fn format_humidity(percent: Option<f64>) -> String {
    match percent {
        Some(p) => format!("{p:.1}%"),
        None => UNAVAILABLE.to_string(),
    }
}
