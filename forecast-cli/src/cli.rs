use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use forecast_core::{
    AppState, Config, Event, Panel, WeatherService, reduce,
    provider::{forecast_provider_from_config, geocoding_provider_from_config, http_client},
};
use tracing::debug;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Current weather and 7-day forecast")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct CityArg {
    /// City to look up; defaults to the configured location.
    #[arg(long, short)]
    pub city: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the geocoding API key and an optional default city.
    Configure,

    /// Show the current weather.
    Current(CityArg),

    /// Show the 7-day forecast.
    Week(CityArg),

    /// Show details for one forecast day (0 = today).
    Day {
        #[arg(value_parser = clap::value_parser!(u8).range(0..7))]
        offset: u8,

        #[command(flatten)]
        city: CityArg,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;

        match self.command {
            Command::Configure => configure(config).await,
            Command::Current(CityArg { city }) => {
                let (service, state) = locate(&config, city.as_deref()).await?;
                let state = reduce(&state, service.load_current(&state.location).await);

                match &state.current {
                    Panel::Ready(summary) => print!("{}", render::current(state.city(), summary)),
                    Panel::Failed(message) => bail!(*message),
                    Panel::Loading => bail!("Current forecast did not load"),
                }
                Ok(())
            }
            Command::Week(CityArg { city }) => {
                let (service, state) = locate(&config, city.as_deref()).await?;
                let state = reduce(&state, service.load_week(&state.location).await);

                match &state.week {
                    Panel::Ready(days) => print!("{}", render::week(state.city(), days)),
                    Panel::Failed(message) => bail!(*message),
                    Panel::Loading => bail!("Week forecast did not load"),
                }
                Ok(())
            }
            Command::Day { offset, city: CityArg { city } } => {
                let (service, state) = locate(&config, city.as_deref()).await?;
                let state = reduce(&state, service.load_week(&state.location).await);

                if let Panel::Failed(message) = state.week {
                    bail!(message);
                }

                let state = reduce(&state, Event::DaySelected(offset.into()));
                let day = state
                    .selected_day()
                    .context("An error has occurred trying to access weather details.")?;

                print!("{}", render::day(state.city(), day));
                Ok(())
            }
        }
    }
}

/// Builds the service and resolves the location to report on.
async fn locate(config: &Config, city: Option<&str>) -> anyhow::Result<(WeatherService, AppState)> {
    let http = http_client(config)?;
    let forecast = forecast_provider_from_config(&http, config);
    let state = AppState::new(config.start_location());

    let Some(city) = city else {
        return Ok((WeatherService::new(forecast, None), state));
    };

    let geocoding = geocoding_provider_from_config(&http, config)?;
    let service = WeatherService::new(forecast, Some(geocoding));

    let state = reduce(&state, Event::CitySearched(city.to_string()));
    let state = reduce(&state, service.search_city(city).await);

    if let Some(alert) = state.alert {
        bail!(alert);
    }

    debug!(city = %state.location.city, "resolved location");
    Ok((service, state))
}

async fn configure(mut config: Config) -> anyhow::Result<()> {
    let api_key = inquire::Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .with_help_message("Used to look up city coordinates; leave empty to remove")
        .prompt()
        .context("Failed to read API key")?;
    config.set_geocoding_api_key(api_key);

    let city = inquire::Text::new("Default city:")
        .with_help_message("Leave empty to keep the current default")
        .prompt()
        .context("Failed to read default city")?;

    let city = city.trim();
    if !city.is_empty() {
        let (_, state) = locate(&config, Some(city)).await?;
        config.default_location = Some(state.location);
    }

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_week_with_city() {
        let cli = Cli::try_parse_from(["forecast", "week", "--city", "Helsinki"]).unwrap();

        match cli.command {
            Command::Week(CityArg { city }) => assert_eq!(city.as_deref(), Some("Helsinki")),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_day_offset_and_city() {
        let cli = Cli::try_parse_from(["forecast", "day", "3", "-c", "Oulu"]).unwrap();

        match cli.command {
            Command::Day { offset, city } => {
                assert_eq!(offset, 3);
                assert_eq!(city.city.as_deref(), Some("Oulu"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_day_outside_week() {
        assert!(Cli::try_parse_from(["forecast", "day", "7"]).is_err());
    }

    #[test]
    fn current_without_city_uses_default() {
        let cli = Cli::try_parse_from(["forecast", "current"]).unwrap();
        assert!(matches!(cli.command, Command::Current(CityArg { city: None })));
    }
}
