//! Forecast orchestration
//!
//! Sequences the two dependent network calls (place lookup, then forecast
//! lookup), validates the response, applies the time-window and daily
//! selectors, and pairs every sample with its display category. The caller
//! supplies the reference instant; nothing here reads the ambient clock.

use crate::api::WeatherApiClient;
use crate::models::{classify, Place, TimeWindow, WeatherCategory};
use crate::{Result, SkycastError};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

/// One hourly sample selected for today's condition list and chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyOutlook {
    /// Sample instant, local to the queried place
    pub time: NaiveDateTime,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Display category for the sample's weather code
    pub category: WeatherCategory,
}

/// One selected day for the forecast card list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyOutlook {
    pub date: NaiveDate,
    /// Daily maximum temperature; `None` renders as "N/A"
    pub temperature_max: Option<f64>,
    /// Daily minimum temperature; `None` renders as "N/A"
    pub temperature_min: Option<f64>,
    pub category: WeatherCategory,
}

/// Everything one completed query hands to the renderers
#[derive(Debug, Clone, Serialize)]
pub struct ForecastReport {
    /// The resolved place the forecast applies to
    pub place: Place,
    /// Hourly samples from the reference instant until the next local midnight
    pub hours: Vec<HourlyOutlook>,
    /// Up to seven days starting today
    pub days: Vec<DailyOutlook>,
}

/// Forecast orchestration service
pub struct ForecastService {
    api: WeatherApiClient,
}

impl ForecastService {
    /// Create a new forecast service on top of an API client
    #[must_use]
    pub fn new(api: WeatherApiClient) -> Self {
        Self { api }
    }

    /// Resolve `place_name` and assemble a [`ForecastReport`] for it.
    ///
    /// `now` is the reference instant for "today": it is shifted into the
    /// forecast's own local frame using the UTC offset the forecast response
    /// reports, then used as the start of the hourly window and as the first
    /// qualifying date of the daily selection.
    ///
    /// # Errors
    ///
    /// `EmptyInput` for a blank name (before any network call),
    /// `PlaceNotFound` when geocoding yields no match, `ForecastUnavailable`
    /// when the response lacks the daily component, `ForecastError` when the
    /// response carries an error field, and `Network` for transport or parse
    /// failures on either call. No partial report is produced.
    pub async fn fetch_report(
        &self,
        place_name: &str,
        now: DateTime<Utc>,
    ) -> Result<ForecastReport> {
        let name = place_name.trim();
        if name.is_empty() {
            return Err(SkycastError::EmptyInput);
        }

        let matches = self.api.geocode(name).await?;
        let Some(place) = matches.into_iter().next() else {
            return Err(SkycastError::place_not_found(name));
        };
        info!(
            "resolved '{}' to {} ({})",
            name,
            place.label(),
            place.format_coordinates()
        );

        let response = self.api.fetch_forecast(&place).await?;

        let Some(daily_block) = &response.daily else {
            return Err(SkycastError::ForecastUnavailable);
        };
        if response.error {
            return Err(SkycastError::forecast_error(
                response.reason.clone().unwrap_or_else(|| "unspecified".to_string()),
            ));
        }

        let hourly = match &response.hourly {
            Some(block) => block.to_series()?,
            None => Default::default(),
        };
        let daily = daily_block.to_series()?;

        // Shift the reference instant into the response's local frame
        let local_now = (now + Duration::seconds(response.utc_offset_seconds)).naive_utc();
        let window = TimeWindow::until_midnight(local_now);
        debug!(
            "hourly window {} .. {} (utc offset {}s)",
            window.start, window.end, response.utc_offset_seconds
        );

        let todays = hourly.within(&window);
        let hours = todays
            .time
            .iter()
            .zip(&todays.temperature)
            .zip(&todays.weather_code)
            .map(|((&time, &temperature), &code)| HourlyOutlook {
                time,
                temperature,
                category: classify(code),
            })
            .collect();

        let days = daily
            .upcoming(local_now.date())
            .into_iter()
            .map(|entry| DailyOutlook {
                date: entry.date,
                temperature_max: entry.temperature_max,
                temperature_min: entry.temperature_min,
                category: entry
                    .weather_code
                    .map(classify)
                    .unwrap_or_else(WeatherCategory::unknown),
            })
            .collect();

        Ok(ForecastReport { place, hours, days })
    }
}
