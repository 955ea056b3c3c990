use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::{
    error::{Endpoint, WeatherError},
    model::{Coordinates, CurrentWeather, ForecastSample, WeatherCondition},
};

use super::WeatherProvider;

pub const DEFAULT_API_BASE: &str = "https://api.openweathermap.org";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    api_base: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_API_BASE)
    }

    /// Points the provider at another host, e.g. a proxy or a mock server.
    pub fn with_base_url(api_key: String, api_base: &str) -> Self {
        Self {
            api_key,
            api_base: api_base.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// GETs a data endpoint by coordinates and returns the body of a successful response.
    async fn fetch_data(
        &self,
        endpoint: Endpoint,
        path: &str,
        coords: Coordinates,
    ) -> Result<String, WeatherError> {
        let url = format!("{}{}", self.api_base, path);
        debug!(%url, %coords, "requesting OpenWeather {endpoint}");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("lat", coords.latitude.to_string()),
                ("lon", coords.longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await
            .map_err(|e| fetch_failure(endpoint, format!("request failed: {e}")))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| fetch_failure(endpoint, format!("failed to read body: {e}")))?;

        if !status.is_success() {
            return Err(fetch_failure(
                endpoint,
                format!("status {}: {}", status, truncate_body(&body)),
            ));
        }

        Ok(body)
    }
}

#[derive(Debug, Deserialize)]
struct OwGeoMatch {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    icon: String,
    description: String,
}

impl From<OwWeather> for WeatherCondition {
    fn from(w: OwWeather) -> Self {
        WeatherCondition { icon: w.icon, description: w.description }
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwForecastMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: i64,
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
    visibility: u32,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwForecastMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip(self))]
    async fn geocode(&self, city: &str) -> Result<Coordinates, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::EmptyQuery);
        }

        let url = format!("{}/geo/1.0/direct", self.api_base);

        let res = self
            .http
            .get(&url)
            .query(&[("q", city), ("limit", "1"), ("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| network_failure(format!("request failed: {e}")))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| network_failure(format!("failed to read body: {e}")))?;

        if !status.is_success() {
            return Err(network_failure(format!(
                "status {}: {}",
                status,
                truncate_body(&body)
            )));
        }

        let matches: Vec<OwGeoMatch> = serde_json::from_str(&body).map_err(|e| {
            fetch_failure(Endpoint::Geocoding, format!("unexpected geocoding JSON: {e}"))
        })?;

        let top = matches.into_iter().next().ok_or_else(|| {
            debug!(city, "geocoding returned no matches");
            WeatherError::NotFound { city: city.to_string() }
        })?;

        Ok(Coordinates::new(top.lat, top.lon))
    }

    #[instrument(skip(self, coords), fields(%coords))]
    async fn current(&self, coords: Coordinates) -> Result<CurrentWeather, WeatherError> {
        let body = self.fetch_data(Endpoint::Current, "/data/2.5/weather", coords).await?;

        let parsed: OwCurrentResponse = serde_json::from_str(&body).map_err(|e| {
            fetch_failure(Endpoint::Current, format!("unexpected current weather JSON: {e}"))
        })?;

        let condition = parsed
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| fetch_failure(Endpoint::Current, "response has no weather condition"))?;

        let observation_time = unix_to_utc(parsed.dt).ok_or_else(|| {
            fetch_failure(Endpoint::Current, format!("timestamp out of range: {}", parsed.dt))
        })?;

        Ok(CurrentWeather {
            city: parsed.name,
            country: parsed.sys.country,
            observation_time,
            temperature_c: parsed.main.temp,
            feels_like_c: parsed.main.feels_like,
            condition: condition.into(),
            visibility_m: parsed.visibility,
            humidity_pct: parsed.main.humidity,
            wind_speed_mps: parsed.wind.speed,
            pressure_hpa: parsed.main.pressure,
        })
    }

    #[instrument(skip(self, coords), fields(%coords))]
    async fn forecast(&self, coords: Coordinates) -> Result<Vec<ForecastSample>, WeatherError> {
        let body = self.fetch_data(Endpoint::Forecast, "/data/2.5/forecast", coords).await?;

        let parsed: OwForecastResponse = serde_json::from_str(&body).map_err(|e| {
            fetch_failure(Endpoint::Forecast, format!("unexpected forecast JSON: {e}"))
        })?;

        parsed
            .list
            .into_iter()
            .map(|entry| {
                let time = unix_to_utc(entry.dt).ok_or_else(|| {
                    fetch_failure(Endpoint::Forecast, format!("timestamp out of range: {}", entry.dt))
                })?;
                let condition = entry.weather.into_iter().next().ok_or_else(|| {
                    fetch_failure(Endpoint::Forecast, "forecast entry has no weather condition")
                })?;

                Ok(ForecastSample {
                    time,
                    temperature_c: entry.main.temp,
                    condition: condition.into(),
                    humidity_pct: entry.main.humidity,
                    wind_speed_mps: entry.wind.speed,
                })
            })
            .collect()
    }
}

fn fetch_failure(endpoint: Endpoint, reason: impl Into<String>) -> WeatherError {
    let err = WeatherError::fetch(endpoint, reason);
    warn!(%endpoint, reason = err.reason().unwrap_or_default(), "OpenWeather request failed");
    err
}

fn network_failure(reason: String) -> WeatherError {
    warn!(%reason, "OpenWeather geocoding request failed");
    WeatherError::Network { reason }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
