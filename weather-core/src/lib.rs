//! Core library for the `weather-dash` weather dashboard.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather client (geocoding, current conditions, forecast)
//! - Forecast aggregation into daily summaries
//! - View-state building and the loading/error/content controller
//!
//! It is used by `weather-dash-cli`, but any front end implementing
//! [`Presenter`] can drive a [`Dashboard`].

pub mod config;
pub mod dashboard;
pub mod error;
pub mod forecast;
pub mod geolocation;
pub mod model;
pub mod presenter;
pub mod provider;
pub mod view;

pub use config::{Config, Endpoints};
pub use dashboard::Dashboard;
pub use error::{Endpoint, GeolocationError, WeatherError};
pub use geolocation::{FixedGeolocator, Geolocator, UnsupportedGeolocator};
pub use model::{
    Coordinates, CurrentWeather, DailyForecastSummary, ForecastSample, UiState, WeatherCondition,
};
pub use presenter::Presenter;
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
pub use view::{CurrentView, ForecastDayView, WeatherView};
