//! Weather API client for Open-Meteo
//!
//! HTTP client for the Open-Meteo geocoding and forecast endpoints. Both
//! endpoints are free of API keys; failures are never retried. Error bodies
//! are parsed like any other response so the orchestrator can distinguish an
//! API-reported error from a transport failure.

use crate::config::ApiConfig;
use crate::models::{DailySeries, HourlySeries, Place};
use crate::{Result, SkycastError};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Weather API client for Open-Meteo
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    /// HTTP client
    client: Client,
    /// API configuration
    config: ApiConfig,
}

impl WeatherApiClient {
    /// Create a new weather API client
    ///
    /// # Errors
    ///
    /// Returns `SkycastError::Config` when the HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let mut builder =
            Client::builder().user_agent(concat!("skycast/", env!("CARGO_PKG_VERSION")));
        if config.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_seconds.into()));
        }
        let client = builder
            .build()
            .map_err(|e| SkycastError::config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Look up candidate places for a free-text name.
    ///
    /// Returns an empty vector when the geocoder knows no match; the caller
    /// decides whether that is an error.
    ///
    /// # Errors
    ///
    /// Returns `SkycastError::Network` on transport or parse failure.
    pub async fn geocode(&self, name: &str) -> Result<Vec<Place>> {
        let url = format!(
            "{}/search?name={}&count={}&language=en&format=json",
            self.config.geocoding_url.trim_end_matches('/'),
            urlencoding::encode(name),
            self.config.geocode_matches
        );
        debug!("geocoding request: {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SkycastError::network(e.to_string()))?;

        let body: openmeteo::GeocodingResponse = response
            .json()
            .await
            .map_err(|e| SkycastError::network(format!("invalid geocoding response: {e}")))?;

        let matches: Vec<Place> = body
            .results
            .unwrap_or_default()
            .into_iter()
            .map(Place::from)
            .collect();

        if matches.is_empty() {
            warn!("no geocoding results for '{name}'");
        } else {
            info!("found {} geocoding results for '{name}'", matches.len());
        }
        Ok(matches)
    }

    /// Fetch the hourly and daily forecast for a resolved place.
    ///
    /// The request asks for `timezone=auto`, so every timestamp in the
    /// response is already localized to the queried coordinates.
    ///
    /// # Errors
    ///
    /// Returns `SkycastError::Network` on transport or parse failure.
    pub async fn fetch_forecast(&self, place: &Place) -> Result<openmeteo::ForecastResponse> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&hourly=temperature_2m,weathercode&daily=temperature_2m_max,temperature_2m_min,weathercode&timezone=auto&forecast_days={}",
            self.config.forecast_url.trim_end_matches('/'),
            place.latitude,
            place.longitude,
            self.config.forecast_days
        );
        debug!("forecast request: {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SkycastError::network(e.to_string()))?;

        let body: openmeteo::ForecastResponse = response
            .json()
            .await
            .map_err(|e| SkycastError::network(format!("invalid forecast response: {e}")))?;

        info!(
            "forecast for {} carries {} hourly and {} daily entries",
            place.name,
            body.hourly.as_ref().map_or(0, |h| h.time.len()),
            body.daily.as_ref().map_or(0, |d| d.time.len()),
        );
        Ok(body)
    }
}

/// Open-Meteo API response structures and conversion utilities
pub mod openmeteo {
    use super::{DailySeries, HourlySeries, Place, Result, SkycastError};
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::Deserialize;

    /// Hourly timestamps arrive without seconds or offset, e.g. "2024-01-02T05:00"
    const HOURLY_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";
    /// Daily entries carry a bare date, e.g. "2024-01-02"
    const DAILY_DATE_FORMAT: &str = "%Y-%m-%d";

    /// Forecast response from Open-Meteo
    ///
    /// The error envelope (`error`/`reason`) shares the top level with the
    /// data fields; a rejected request sets `error` and omits the blocks.
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        /// Offset of the response's local timestamps from UTC
        #[serde(default)]
        pub utc_offset_seconds: i64,
        pub hourly: Option<HourlyBlock>,
        pub daily: Option<DailyBlock>,
        #[serde(default)]
        pub error: bool,
        pub reason: Option<String>,
    }

    /// Hourly data block from Open-Meteo
    #[derive(Debug, Deserialize)]
    pub struct HourlyBlock {
        pub time: Vec<String>,
        #[serde(rename = "temperature_2m", default)]
        pub temperature: Vec<f64>,
        #[serde(rename = "weathercode", default)]
        pub weather_code: Vec<i64>,
    }

    /// Daily data block from Open-Meteo
    #[derive(Debug, Deserialize)]
    pub struct DailyBlock {
        pub time: Vec<String>,
        #[serde(rename = "temperature_2m_max", default)]
        pub temperature_max: Vec<Option<f64>>,
        #[serde(rename = "temperature_2m_min", default)]
        pub temperature_min: Vec<Option<f64>>,
        #[serde(rename = "weathercode", default)]
        pub weather_code: Vec<Option<i64>>,
    }

    /// Geocoding response from Open-Meteo
    #[derive(Debug, Deserialize)]
    pub struct GeocodingResponse {
        pub results: Option<Vec<GeocodingResult>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct GeocodingResult {
        pub name: String,
        pub latitude: f64,
        pub longitude: f64,
        pub country: Option<String>,
    }

    impl From<GeocodingResult> for Place {
        fn from(result: GeocodingResult) -> Self {
            Place {
                latitude: result.latitude,
                longitude: result.longitude,
                name: result.name,
                country: result.country,
            }
        }
    }

    impl HourlyBlock {
        /// Convert into an index-aligned [`HourlySeries`].
        ///
        /// Value vectors shorter than the time vector truncate the series to
        /// the common length.
        ///
        /// # Errors
        ///
        /// Returns `SkycastError::Network` when a timestamp does not parse.
        pub fn to_series(&self) -> Result<HourlySeries> {
            let len = self
                .time
                .len()
                .min(self.temperature.len())
                .min(self.weather_code.len());

            let mut time = Vec::with_capacity(len);
            for raw in &self.time[..len] {
                let parsed = NaiveDateTime::parse_from_str(raw, HOURLY_TIME_FORMAT)
                    .map_err(|e| {
                        SkycastError::network(format!("invalid hourly timestamp '{raw}': {e}"))
                    })?;
                time.push(parsed);
            }

            Ok(HourlySeries::new(
                time,
                self.temperature[..len].to_vec(),
                self.weather_code[..len].to_vec(),
            ))
        }
    }

    impl DailyBlock {
        /// Convert into a [`DailySeries`]; the date vector keeps its full
        /// length even when the value vectors come up short.
        ///
        /// # Errors
        ///
        /// Returns `SkycastError::Network` when a date does not parse.
        pub fn to_series(&self) -> Result<DailySeries> {
            let mut date = Vec::with_capacity(self.time.len());
            for raw in &self.time {
                let parsed = NaiveDate::parse_from_str(raw, DAILY_DATE_FORMAT).map_err(|e| {
                    SkycastError::network(format!("invalid daily date '{raw}': {e}"))
                })?;
                date.push(parsed);
            }

            Ok(DailySeries {
                date,
                temperature_max: self.temperature_max.clone(),
                temperature_min: self.temperature_min.clone(),
                weather_code: self.weather_code.clone(),
            })
        }
    }

}
