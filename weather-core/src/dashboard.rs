//! The UI state controller: owns the loading/error/content switch and drives
//! each lookup from input to rendered view.

use chrono::Local;
use tracing::{info, instrument, warn};

use crate::{
    Config,
    error::WeatherError,
    forecast::aggregate,
    geolocation::Geolocator,
    model::{Coordinates, UiState},
    presenter::Presenter,
    provider::{WeatherProvider, provider_from_config, weather_by_coords},
    view::{DEFAULT_ICON_BASE, WeatherView},
};

pub const DEFAULT_CITY: &str = "Islamabad";

/// Runs weather lookups and keeps a [`Presenter`] in exactly one display state.
///
/// Every entry point takes `&mut self`, so a run owns all state transitions
/// until it returns and two runs can never interleave.
#[derive(Debug)]
pub struct Dashboard<V: Presenter> {
    provider: Box<dyn WeatherProvider>,
    geolocator: Box<dyn Geolocator>,
    presenter: V,
    default_city: String,
    icon_base: String,
    state: UiState,
}

impl<V: Presenter> Dashboard<V> {
    pub fn new(
        provider: Box<dyn WeatherProvider>,
        geolocator: Box<dyn Geolocator>,
        presenter: V,
    ) -> Self {
        Self {
            provider,
            geolocator,
            presenter,
            default_city: DEFAULT_CITY.to_string(),
            icon_base: DEFAULT_ICON_BASE.to_string(),
            state: UiState::Loading,
        }
    }

    /// Builds a dashboard backed by OpenWeather, using the configured default city and icon host.
    pub fn from_config(
        config: &Config,
        geolocator: Box<dyn Geolocator>,
        presenter: V,
    ) -> anyhow::Result<Self> {
        let provider = provider_from_config(config)?;

        Ok(Self::new(provider, geolocator, presenter)
            .with_default_city(&config.default_city)
            .with_icon_base(&config.endpoints.icon_base))
    }

    pub fn with_default_city(mut self, city: &str) -> Self {
        self.default_city = city.to_string();
        self
    }

    pub fn with_icon_base(mut self, icon_base: &str) -> Self {
        self.icon_base = icon_base.to_string();
        self
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn presenter(&self) -> &V {
        &self.presenter
    }

    pub fn default_city(&self) -> &str {
        &self.default_city
    }

    /// Start-up lookup of the default city.
    pub async fn load_default(&mut self) -> &UiState {
        let city = self.default_city.clone();
        self.weather_by_city(&city).await
    }

    /// Handles a submitted search box. Blank input is ignored and returns `None`.
    pub async fn search(&mut self, input: &str) -> Option<&UiState> {
        let city = input.trim();
        if city.is_empty() {
            return None;
        }
        Some(self.weather_by_city(city).await)
    }

    #[instrument(skip(self))]
    pub async fn weather_by_city(&mut self, city: &str) -> &UiState {
        self.show_loading();

        let outcome = match self.provider.geocode(city).await {
            Ok(coords) => {
                info!(%coords, "resolved city");
                self.load(coords).await
            }
            Err(err) => Err(err),
        };

        self.finish(outcome)
    }

    #[instrument(skip(self, coords), fields(%coords))]
    pub async fn weather_by_coords(&mut self, coords: Coordinates) -> &UiState {
        self.show_loading();
        let outcome = self.load(coords).await;
        self.finish(outcome)
    }

    /// Looks up the weather wherever the geolocator says we are.
    #[instrument(skip(self))]
    pub async fn locate(&mut self) -> &UiState {
        self.show_loading();

        let outcome = match self.geolocator.current_position().await {
            Ok(coords) => self.load(coords).await,
            Err(err) => Err(err.into()),
        };

        self.finish(outcome)
    }

    async fn load(&self, coords: Coordinates) -> Result<WeatherView, WeatherError> {
        let (current, samples) = weather_by_coords(self.provider.as_ref(), coords).await?;

        let now = Local::now();
        let summaries = aggregate(&samples, &Local);

        Ok(WeatherView::build(&current, &summaries, now.date_naive(), &self.icon_base))
    }

    fn finish(&mut self, outcome: Result<WeatherView, WeatherError>) -> &UiState {
        match outcome {
            Ok(view) => {
                info!(location = %view.current.location, days = view.forecast.len(), "weather loaded");
                self.show_content(&view);
            }
            Err(err) => {
                warn!(error = %err, reason = err.reason().unwrap_or_default(), "weather lookup failed");
                self.show_error(err.to_string());
            }
        }
        &self.state
    }

    fn show_loading(&mut self) {
        self.state = UiState::Loading;
        self.presenter.show_loading();
    }

    fn show_error(&mut self, message: String) {
        self.presenter.show_error(&message);
        self.state = UiState::Error(message);
    }

    fn show_content(&mut self, view: &WeatherView) {
        self.state = UiState::Content;
        self.presenter.show_content(view);
    }
}
