//! Error kinds surfaced by a dashboard run.
//!
//! `Display` of every variant is the message shown to the user; the technical
//! detail travels in `reason` fields and is only logged.

use thiserror::Error;

/// The remote endpoint a [`WeatherError::Fetch`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Geocoding,
    Current,
    Forecast,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Geocoding => "geocoding",
            Endpoint::Current => "current weather",
            Endpoint::Forecast => "forecast",
        }
    }

    fn failure_message(&self) -> &'static str {
        match self {
            Endpoint::Geocoding => "Failed to look up the city. Please try again.",
            Endpoint::Current => "Failed to fetch weather data. Please try again.",
            Endpoint::Forecast => "Failed to fetch forecast data. Please try again.",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("Geolocation is not supported on this device.")]
    Unsupported,
    #[error("User denied the request for Geolocation.")]
    PermissionDenied,
    #[error("Location information is unavailable.")]
    PositionUnavailable,
    #[error("The request to get user location timed out.")]
    Timeout,
    #[error("An unknown error occurred.")]
    Unknown,
}

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Please enter a city name.")]
    EmptyQuery,

    #[error("City not found. Please check the spelling and try again.")]
    NotFound { city: String },

    #[error("Unable to reach the geocoding service. Please try again.")]
    Network { reason: String },

    #[error("{}", .endpoint.failure_message())]
    Fetch { endpoint: Endpoint, reason: String },

    #[error(transparent)]
    Geolocation(#[from] GeolocationError),
}

impl WeatherError {
    pub fn fetch(endpoint: Endpoint, reason: impl Into<String>) -> Self {
        Self::Fetch { endpoint, reason: reason.into() }
    }

    /// Technical detail behind the user-facing message, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            WeatherError::Network { reason } | WeatherError::Fetch { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_message_depends_on_endpoint() {
        let current = WeatherError::fetch(Endpoint::Current, "status 500");
        let forecast = WeatherError::fetch(Endpoint::Forecast, "status 500");

        assert_eq!(current.to_string(), "Failed to fetch weather data. Please try again.");
        assert_eq!(forecast.to_string(), "Failed to fetch forecast data. Please try again.");
        assert_eq!(forecast.reason(), Some("status 500"));
    }

    #[test]
    fn not_found_message_says_not_found() {
        let err = WeatherError::NotFound { city: "Atlantis".into() };
        assert!(err.to_string().to_lowercase().contains("not found"));
        assert_eq!(err.reason(), None);
    }

    #[test]
    fn geolocation_errors_pass_through_their_message() {
        let err = WeatherError::from(GeolocationError::Timeout);
        assert_eq!(err.to_string(), "The request to get user location timed out.");
    }
}
