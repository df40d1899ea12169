//! Data models for the skycast application
//!
//! Core domain models organized by concern:
//! - Location: resolved place coordinates and metadata
//! - Condition: weather-code classification into display categories
//! - Series: index-aligned hourly/daily forecast series and their selectors

pub mod condition;
pub mod location;
pub mod series;

// Re-export all public types for convenient access
pub use condition::{classify, condition_emoji, condition_label, WeatherCategory};
pub use location::Place;
pub use series::{DailyEntry, DailySeries, HourlySeries, TimeWindow, MAX_FORECAST_DAYS};
