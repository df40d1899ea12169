//! Configuration management for the skycast application
//!
//! Handles loading configuration from a TOML file with per-field defaults
//! and provides validation for all configuration settings.

use crate::SkycastError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for the skycast application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkycastConfig {
    /// Weather API configuration
    #[serde(default)]
    pub api: ApiConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Temperature chart configuration
    #[serde(default)]
    pub chart: ChartConfig,
}

/// Weather API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the forecast API
    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,
    /// Base URL for the geocoding API
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,
    /// Request timeout in seconds (0 disables the timeout)
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Number of forecast days to request
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u32,
    /// Number of geocoding candidates to request
    #[serde(default = "default_geocode_matches")]
    pub geocode_matches: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or compact)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Temperature chart configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Output path of the rendered chart image
    #[serde(default = "default_chart_output")]
    pub output_path: PathBuf,
    /// Chart width in pixels
    #[serde(default = "default_chart_width")]
    pub width: u32,
    /// Chart height in pixels
    #[serde(default = "default_chart_height")]
    pub height: u32,
}

// Default value functions
fn default_forecast_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_geocoding_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_forecast_days() -> u32 {
    7
}

fn default_geocode_matches() -> u32 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_chart_output() -> PathBuf {
    PathBuf::from("temperature.png")
}

fn default_chart_width() -> u32 {
    1024
}

fn default_chart_height() -> u32 {
    768
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            forecast_url: default_forecast_url(),
            geocoding_url: default_geocoding_url(),
            timeout_seconds: default_timeout(),
            forecast_days: default_forecast_days(),
            geocode_matches: default_geocode_matches(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            output_path: default_chart_output(),
            width: default_chart_width(),
            height: default_chart_height(),
        }
    }
}

impl Default for SkycastConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            logging: LoggingConfig::default(),
            chart: ChartConfig::default(),
        }
    }
}

impl SkycastConfig {
    /// Load configuration from an optional TOML file.
    ///
    /// With no path (or a missing default file) every field falls back to its
    /// default; an explicitly given path must exist and parse.
    ///
    /// # Errors
    ///
    /// Returns `SkycastError::Config` when the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `SkycastError::Config` when the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            SkycastError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        toml::from_str(&raw)
            .map_err(|e| SkycastError::config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Validate all configuration settings
    ///
    /// # Errors
    ///
    /// Returns `SkycastError::Config` describing the first invalid setting.
    pub fn validate(&self) -> crate::Result<()> {
        if self.api.forecast_url.is_empty() || self.api.geocoding_url.is_empty() {
            return Err(SkycastError::config("API base URLs must not be empty"));
        }
        if !(1..=16).contains(&self.api.forecast_days) {
            return Err(SkycastError::config(format!(
                "forecast_days must be between 1 and 16, got {}",
                self.api.forecast_days
            )));
        }
        if self.api.geocode_matches == 0 {
            return Err(SkycastError::config("geocode_matches must be at least 1"));
        }
        if !["error", "warn", "info", "debug", "trace"].contains(&self.logging.level.as_str()) {
            return Err(SkycastError::config(format!(
                "unknown log level: {}",
                self.logging.level
            )));
        }
        if !["pretty", "compact"].contains(&self.logging.format.as_str()) {
            return Err(SkycastError::config(format!(
                "unknown log format: {}",
                self.logging.format
            )));
        }
        if self.chart.width == 0 || self.chart.height == 0 {
            return Err(SkycastError::config("chart dimensions must be non-zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = SkycastConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.forecast_days, 7);
        assert_eq!(config.api.forecast_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.chart.output_path, PathBuf::from("temperature.png"));
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = SkycastConfig::load(None).unwrap();
        assert_eq!(config.api.timeout_seconds, 30);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_file_keeps_defaults_for_missing_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nforecast_days = 3").unwrap();

        let config = SkycastConfig::from_file(file.path()).unwrap();
        assert_eq!(config.api.forecast_days, 3);
        assert_eq!(config.api.geocode_matches, 5);
        assert_eq!(config.chart.width, 1024);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = SkycastConfig::from_file(Path::new("/no/such/file.toml")).unwrap_err();
        assert!(matches!(err, SkycastError::Config { .. }));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = SkycastConfig::default();
        config.api.forecast_days = 0;
        assert!(config.validate().is_err());

        let mut config = SkycastConfig::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());

        let mut config = SkycastConfig::default();
        config.chart.width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_shipped_default_file_matches_defaults() {
        let config = SkycastConfig::from_file(Path::new("config/default.toml")).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.forecast_days, SkycastConfig::default().api.forecast_days);
    }
}
