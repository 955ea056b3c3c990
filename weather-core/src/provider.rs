use crate::{
    Config,
    error::WeatherError,
    model::{Coordinates, CurrentWeather, ForecastSample},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// A weather data source: geocoding plus current conditions and forecast by coordinates.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Resolves a city name to the service's top match.
    async fn geocode(&self, city: &str) -> Result<Coordinates, WeatherError>;

    async fn current(&self, coords: Coordinates) -> Result<CurrentWeather, WeatherError>;

    /// Raw three-hourly samples, in the order the service returns them.
    async fn forecast(&self, coords: Coordinates) -> Result<Vec<ForecastSample>, WeatherError>;
}

/// Fetches current conditions and the forecast concurrently.
///
/// Both must succeed; the first failure is returned and the other result discarded.
pub async fn weather_by_coords(
    provider: &dyn WeatherProvider,
    coords: Coordinates,
) -> Result<(CurrentWeather, Vec<ForecastSample>), WeatherError> {
    tokio::try_join!(provider.current(coords), provider.forecast(coords))
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key()?;

    Ok(Box::new(OpenWeatherProvider::with_base_url(
        api_key.to_owned(),
        &config.endpoints.api_base,
    )))
}
