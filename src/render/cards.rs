//! Multi-day forecast card list

use crate::forecast::ForecastReport;
use std::io::{self, Write};

/// Format an optional temperature, substituting "N/A" when the value is
/// missing from the daily series.
#[must_use]
pub fn format_temperature(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}°C"),
        None => "N/A".to_string(),
    }
}

/// Write one card per selected day: weekday, emoji, max/min temperatures.
pub fn write_forecast_cards<W: Write>(out: &mut W, report: &ForecastReport) -> io::Result<()> {
    writeln!(out, "\n{}-day forecast", report.days.len())?;

    for day in &report.days {
        let weekday = day.date.format("%A").to_string();
        writeln!(
            out,
            "  {weekday:<9}  {}  🔺 {:>7}  🔻 {:>7}",
            day.category.emoji,
            format_temperature(day.temperature_max),
            format_temperature(day.temperature_min),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::DailyOutlook;
    use crate::models::{classify, Place, WeatherCategory};
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_format_temperature() {
        assert_eq!(format_temperature(Some(21.25)), "21.2°C");
        assert_eq!(format_temperature(Some(-3.0)), "-3.0°C");
        assert_eq!(format_temperature(None), "N/A");
    }

    #[test]
    fn test_cards_show_weekday_and_markers() {
        let report = ForecastReport {
            place: Place::new(52.52, 13.405, "Berlin".into()),
            hours: vec![],
            days: vec![
                DailyOutlook {
                    // A Monday
                    date: date("2024-01-01"),
                    temperature_max: Some(4.2),
                    temperature_min: Some(-1.3),
                    category: classify(71),
                },
                DailyOutlook {
                    date: date("2024-01-02"),
                    temperature_max: None,
                    temperature_min: None,
                    category: WeatherCategory::unknown(),
                },
            ],
        };

        let mut buffer = Vec::new();
        write_forecast_cards(&mut buffer, &report).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("2-day forecast"));
        assert!(text.contains("Monday"));
        assert!(text.contains("🌨️"));
        assert!(text.contains("🔺"));
        assert!(text.contains("4.2°C"));
        assert!(text.contains("N/A"));
    }
}
