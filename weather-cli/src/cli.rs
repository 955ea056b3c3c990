use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use inquire::{InquireError, Password, Text};
use weather_core::{
    Config, Coordinates, Dashboard, FixedGeolocator, Geolocator, UiState, UnsupportedGeolocator,
    WeatherError,
};

use crate::output::TerminalPresenter;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-dash", version, about = "Current weather and a 3-day forecast")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and default city.
    Configure,

    /// Show weather for a city (the configured default city if omitted).
    Show {
        city: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show weather for the current position.
    Locate {
        /// Latitude; falls back to the configured `[location]`.
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude; falls back to the configured `[location]`.
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Load the default city, then keep prompting for cities.
    Interactive,
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Print the weather view as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, output } => {
                let config = Config::load()?;
                let mut dash = dashboard(&config, None, output.json)?;

                let state = match city {
                    None => dash.load_default().await,
                    Some(city) => match dash.search(&city).await {
                        Some(state) => state,
                        None => {
                            eprintln!("Error: {}", WeatherError::EmptyQuery);
                            return Ok(ExitCode::from(2));
                        }
                    },
                };

                Ok(exit_code(state))
            }
            Command::Locate { lat, lon, output } => {
                let config = Config::load()?;
                let position = lat.zip(lon).map(|(lat, lon)| Coordinates::new(lat, lon));
                let mut dash = dashboard(&config, position, output.json)?;

                Ok(exit_code(dash.locate().await))
            }
            Command::Interactive => interactive().await,
        }
    }
}

fn configure() -> anyhow::Result<ExitCode> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    config.set_api_key(api_key.trim().to_string());

    let city = Text::new("Default city:")
        .with_default(&config.default_city)
        .prompt()
        .context("Failed to read default city")?;
    if !city.trim().is_empty() {
        config.set_default_city(&city);
    }

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(ExitCode::SUCCESS)
}

async fn interactive() -> anyhow::Result<ExitCode> {
    let config = Config::load()?;
    let mut dash = dashboard(&config, None, false)?;

    dash.load_default().await;

    loop {
        let input = Text::new("City:")
            .with_help_message("Enter to search, `:locate` for your position, Esc to quit")
            .prompt();

        match input {
            Ok(input) if input.trim() == ":locate" => {
                dash.locate().await;
            }
            Ok(input) => {
                dash.search(&input).await;
            }
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read city"),
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn dashboard(
    config: &Config,
    position: Option<Coordinates>,
    json: bool,
) -> anyhow::Result<Dashboard<TerminalPresenter>> {
    let geolocator: Box<dyn Geolocator> = match position.or(config.location) {
        Some(coords) => Box::new(FixedGeolocator(coords)),
        None => Box::new(UnsupportedGeolocator),
    };

    Dashboard::from_config(config, geolocator, TerminalPresenter::new(json))
}

/// Exit status for the state a finished run settled in.
fn exit_code(state: &UiState) -> ExitCode {
    if matches!(state, UiState::Error(_)) { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
