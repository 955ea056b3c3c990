use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A point on the globe, as produced by the geocoder or a geolocator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4},{:.4}", self.latitude, self.longitude)
    }
}

/// Icon code plus human description, e.g. `"04d"` / `"broken clouds"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub icon: String,
    pub description: String,
}

impl WeatherCondition {
    /// `<base>/<icon>@2x.png`
    pub fn icon_url(&self, icon_base: &str) -> String {
        format!("{}/{}@2x.png", icon_base.trim_end_matches('/'), self.icon)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub city: String,
    pub country: String,
    pub observation_time: DateTime<Utc>,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub condition: WeatherCondition,
    pub visibility_m: u32,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub pressure_hpa: u32,
}

/// One three-hourly entry of the forecast list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    pub time: DateTime<Utc>,
    pub temperature_c: f64,
    pub condition: WeatherCondition,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
}

/// One calendar day collapsed out of the forecast samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecastSummary {
    pub date: NaiveDate,
    pub condition: WeatherCondition,
    pub temp_max_c: i64,
    pub temp_min_c: i64,
    pub humidity_pct: u8,
    pub wind_kmh: i64,
}

/// Which of the three mutually exclusive displays is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiState {
    Loading,
    Error(String),
    Content,
}

/// Rounds the way the dashboard displays numbers: halves go up, so `-2.5` becomes `-2`.
pub fn round_display(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// m/s to km/h, rounded for display.
pub fn mps_to_kmh(speed_mps: f64) -> i64 {
    round_display(speed_mps * 3.6)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_url_appends_retina_suffix() {
        let cond = WeatherCondition { icon: "10d".into(), description: "light rain".into() };
        assert_eq!(
            cond.icon_url("https://openweathermap.org/img/wn/"),
            "https://openweathermap.org/img/wn/10d@2x.png"
        );
    }

    #[test]
    fn wind_conversion_rounds_to_kmh() {
        assert_eq!(mps_to_kmh(10.0), 36);
        assert_eq!(mps_to_kmh(3.6), 13);
        assert_eq!(mps_to_kmh(0.0), 0);
    }

    #[test]
    fn round_display_rounds_halves_up() {
        assert_eq!(round_display(2.5), 3);
        assert_eq!(round_display(-2.5), -2);
        assert_eq!(round_display(-2.6), -3);
    }
}
