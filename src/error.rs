//! Error types and handling for the skycast application

use thiserror::Error;

/// Main error type for the skycast application
///
/// Every variant is terminal for the current query: nothing is retried, and
/// the binary surfaces `user_message()` instead of rendering partial output.
#[derive(Error, Debug)]
pub enum SkycastError {
    /// Blank place name, rejected before any network call
    #[error("no place name given")]
    EmptyInput,

    /// Geocoding returned zero matches
    #[error("place not found: {name}")]
    PlaceNotFound { name: String },

    /// Forecast response lacks the daily component
    #[error("daily forecast data is not available")]
    ForecastUnavailable,

    /// Forecast response carried an explicit error field
    #[error("forecast service error: {reason}")]
    ForecastError { reason: String },

    /// Transport or parse failure on either API call
    #[error("network error: {message}")]
    Network { message: String },

    /// Configuration-related errors
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Chart or terminal output errors
    #[error("render error: {message}")]
    Render { message: String },
}

impl SkycastError {
    /// Create a new place-not-found error
    pub fn place_not_found<S: Into<String>>(name: S) -> Self {
        Self::PlaceNotFound { name: name.into() }
    }

    /// Create a new forecast-service error
    pub fn forecast_error<S: Into<String>>(reason: S) -> Self {
        Self::ForecastError {
            reason: reason.into(),
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new render error
    pub fn render<S: Into<String>>(message: S) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SkycastError::EmptyInput => "Please enter a city name.".to_string(),
            SkycastError::PlaceNotFound { name } => {
                format!("City not found: {name}")
            }
            SkycastError::ForecastUnavailable => {
                "Daily forecast data is not available.".to_string()
            }
            SkycastError::ForecastError { .. } => "Error fetching weather data.".to_string(),
            SkycastError::Network { message } => {
                format!("An error occurred: {message}")
            }
            SkycastError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            SkycastError::Render { message } => {
                format!("Failed to render output: {message}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let not_found = SkycastError::place_not_found("Atlantis");
        assert!(matches!(not_found, SkycastError::PlaceNotFound { .. }));

        let api_err = SkycastError::forecast_error("out of range");
        assert!(matches!(api_err, SkycastError::ForecastError { .. }));

        let net_err = SkycastError::network("connection refused");
        assert!(matches!(net_err, SkycastError::Network { .. }));
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            SkycastError::EmptyInput.user_message(),
            "Please enter a city name."
        );

        let not_found = SkycastError::place_not_found("Atlantis");
        assert!(not_found.user_message().contains("Atlantis"));

        let api_err = SkycastError::forecast_error("internal");
        assert_eq!(api_err.user_message(), "Error fetching weather data.");

        let net_err = SkycastError::network("timed out");
        assert!(net_err.user_message().contains("timed out"));
    }
}
