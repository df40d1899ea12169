//! skycast - city weather forecasts in the terminal
//!
//! This library resolves a free-text place name to coordinates, fetches an
//! hourly and daily forecast from Open-Meteo, and prepares the data for the
//! three renderers: an hourly condition list for the rest of today, a
//! temperature chart, and a multi-day forecast card list.

pub mod api;
pub mod config;
pub mod error;
pub mod forecast;
pub mod models;
pub mod render;

// Re-export core types for public API
pub use api::WeatherApiClient;
pub use config::SkycastConfig;
pub use error::SkycastError;
pub use forecast::{DailyOutlook, ForecastReport, ForecastService, HourlyOutlook};
pub use models::{DailySeries, HourlySeries, Place, TimeWindow, WeatherCategory};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SkycastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
