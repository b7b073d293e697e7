use std::fmt;

/// Weather condition derived from a WMO weather code.
///
/// Each condition carries a display label and the name of the icon asset
/// used to render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherCondition {
    Clear,
    PartlyCloudy,
    Overcast,
    Foggy,
    Drizzle,
    IcyDrizzle,
    Rain,
    IcyRain,
    Showers,
    Snow,
    SnowGrains,
    SnowShowers,
    ThunderStorm,
    Unknown,
}

impl WeatherCondition {
    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::PartlyCloudy => "Partly Cloudy",
            WeatherCondition::Overcast => "Overcast",
            WeatherCondition::Foggy => "Foggy",
            WeatherCondition::Drizzle => "Drizzle",
            WeatherCondition::IcyDrizzle => "Icy Drizzle",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::IcyRain => "Icy Rain",
            WeatherCondition::Showers => "Showers",
            WeatherCondition::Snow => "Snow",
            WeatherCondition::SnowGrains => "Snow Grains",
            WeatherCondition::SnowShowers => "Snow Showers",
            WeatherCondition::ThunderStorm => "Thunder Storm",
            WeatherCondition::Unknown => "Unknown",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "clear",
            WeatherCondition::PartlyCloudy => "partly_cloudy",
            WeatherCondition::Overcast => "overcast",
            WeatherCondition::Foggy => "foggy",
            WeatherCondition::Drizzle | WeatherCondition::IcyDrizzle => "drizzle",
            WeatherCondition::Rain | WeatherCondition::IcyRain => "rain",
            WeatherCondition::Showers => "showers",
            WeatherCondition::Snow | WeatherCondition::SnowGrains | WeatherCondition::SnowShowers => {
                "snow"
            }
            WeatherCondition::ThunderStorm => "thunder",
            WeatherCondition::Unknown => "error",
        }
    }

    pub const fn all() -> &'static [WeatherCondition] {
        &[
            WeatherCondition::Clear,
            WeatherCondition::PartlyCloudy,
            WeatherCondition::Overcast,
            WeatherCondition::Foggy,
            WeatherCondition::Drizzle,
            WeatherCondition::IcyDrizzle,
            WeatherCondition::Rain,
            WeatherCondition::IcyRain,
            WeatherCondition::Showers,
            WeatherCondition::Snow,
            WeatherCondition::SnowGrains,
            WeatherCondition::SnowShowers,
            WeatherCondition::ThunderStorm,
            WeatherCondition::Unknown,
        ]
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps a WMO weather code to its condition. Unrecognized or missing codes
/// map to [`WeatherCondition::Unknown`].
pub fn classify(code: Option<i32>) -> WeatherCondition {
    match code {
        Some(0) => WeatherCondition::Clear,
        Some(1 | 2) => WeatherCondition::PartlyCloudy,
        Some(3) => WeatherCondition::Overcast,
        Some(45 | 48) => WeatherCondition::Foggy,
        Some(51 | 53 | 55) => WeatherCondition::Drizzle,
        Some(56 | 57) => WeatherCondition::IcyDrizzle,
        Some(61 | 63 | 65) => WeatherCondition::Rain,
        Some(66 | 67) => WeatherCondition::IcyRain,
        Some(71 | 73 | 75) => WeatherCondition::Snow,
        Some(77) => WeatherCondition::SnowGrains,
        Some(80..=82) => WeatherCondition::Showers,
        Some(85 | 86) => WeatherCondition::SnowShowers,
        Some(95 | 96 | 99) => WeatherCondition::ThunderStorm,
        _ => WeatherCondition::Unknown,
    }
}
