//! Index-aligned hourly and daily forecast series and their selectors
//!
//! Timestamps live in the frame the forecast API returned them in (location-
//! local when requested with `timezone=auto`); window bounds must be supplied
//! in that same frame. Nothing here reads the ambient clock.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Maximum number of days returned by the daily selector
pub const MAX_FORECAST_DAYS: usize = 7;

/// Half-open time interval `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    /// Window from `now` until the midnight immediately following it.
    ///
    /// At exactly midnight the window spans the full day that starts there.
    #[must_use]
    pub fn until_midnight(now: NaiveDateTime) -> Self {
        let end = (now.date() + Days::new(1)).and_time(NaiveTime::MIN);
        Self { start: now, end }
    }

    /// Window covering the whole calendar day of `date`.
    #[must_use]
    pub fn calendar_day(date: NaiveDate) -> Self {
        Self {
            start: date.and_time(NaiveTime::MIN),
            end: (date + Days::new(1)).and_time(NaiveTime::MIN),
        }
    }

    /// Whether `t` lies inside the window (`start` inclusive, `end` exclusive)
    #[must_use]
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        self.start <= t && t < self.end
    }
}

/// Per-hour forecast samples as three parallel sequences.
///
/// Invariant: all three vectors share the same length, and index `i` of each
/// describes the same sample instant.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HourlySeries {
    /// Sample timestamps in the series' own reference frame
    pub time: Vec<NaiveDateTime>,
    /// Temperature in Celsius
    pub temperature: Vec<f64>,
    /// WMO weather code
    pub weather_code: Vec<i64>,
}

impl HourlySeries {
    /// Create a series from three equally long, index-aligned vectors.
    #[must_use]
    pub fn new(time: Vec<NaiveDateTime>, temperature: Vec<f64>, weather_code: Vec<i64>) -> Self {
        debug_assert_eq!(time.len(), temperature.len());
        debug_assert_eq!(time.len(), weather_code.len());
        Self {
            time,
            temperature,
            weather_code,
        }
    }

    /// Number of samples in the series
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Whether the series holds no samples
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Select the samples whose timestamp falls inside `window`.
    ///
    /// Each of the three sequences is filtered by the timestamp at its
    /// original index, so the result stays index-aligned and in input order.
    /// An empty result is valid.
    #[must_use]
    pub fn within(&self, window: &TimeWindow) -> Self {
        let keep: Vec<usize> = self
            .time
            .iter()
            .enumerate()
            .filter(|(_, t)| window.contains(**t))
            .map(|(i, _)| i)
            .collect();

        Self {
            time: keep.iter().filter_map(|&i| self.time.get(i).copied()).collect(),
            temperature: keep
                .iter()
                .filter_map(|&i| self.temperature.get(i).copied())
                .collect(),
            weather_code: keep
                .iter()
                .filter_map(|&i| self.weather_code.get(i).copied())
                .collect(),
        }
    }
}

/// Per-day forecast summaries as four parallel sequences.
///
/// The date vector is authoritative for length; the value vectors may come up
/// short (or hold nulls), in which case lookups yield `None` rather than
/// failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailySeries {
    /// Calendar dates in the series' own reference frame
    pub date: Vec<NaiveDate>,
    /// Daily maximum temperature in Celsius
    pub temperature_max: Vec<Option<f64>>,
    /// Daily minimum temperature in Celsius
    pub temperature_min: Vec<Option<f64>>,
    /// WMO weather code summarizing the day
    pub weather_code: Vec<Option<i64>>,
}

/// One selected day with values looked up at its original series index
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyEntry {
    pub date: NaiveDate,
    pub temperature_max: Option<f64>,
    pub temperature_min: Option<f64>,
    pub weather_code: Option<i64>,
}

impl DailySeries {
    /// Number of days in the series
    #[must_use]
    pub fn len(&self) -> usize {
        self.date.len()
    }

    /// Whether the series holds no days
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.date.is_empty()
    }

    /// Select up to [`MAX_FORECAST_DAYS`] days dated `today` or later,
    /// preserving input order. Fewer qualifying days yield fewer entries;
    /// value lookups past a short vector's end yield `None`.
    #[must_use]
    pub fn upcoming(&self, today: NaiveDate) -> Vec<DailyEntry> {
        let mut entries = Vec::new();
        for (i, &date) in self.date.iter().enumerate() {
            if date < today {
                continue;
            }
            entries.push(DailyEntry {
                date,
                temperature_max: self.temperature_max.get(i).copied().flatten(),
                temperature_min: self.temperature_min.get(i).copied().flatten(),
                weather_code: self.weather_code.get(i).copied().flatten(),
            });
            if entries.len() == MAX_FORECAST_DAYS {
                break;
            }
        }
        entries
    }
}
