//! Hourly condition list for the rest of today

use crate::forecast::ForecastReport;
use std::io::{self, Write};

/// Write one line per remaining hourly sample: time, emoji, label.
pub fn write_condition_list<W: Write>(out: &mut W, report: &ForecastReport) -> io::Result<()> {
    writeln!(out, "Conditions for {} (until midnight)", report.place.label())?;

    if report.hours.is_empty() {
        writeln!(out, "  no hourly data left for today")?;
        return Ok(());
    }

    for hour in &report.hours {
        writeln!(
            out,
            "  {}  {}  {}",
            hour.time.format("%H:%M"),
            hour.category.emoji,
            hour.category.label
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::HourlyOutlook;
    use crate::models::{classify, Place};
    use chrono::NaiveDateTime;

    fn report_with_hours(hours: Vec<HourlyOutlook>) -> ForecastReport {
        ForecastReport {
            place: Place::with_country(52.52, 13.405, "Berlin".into(), "Germany".into()),
            hours,
            days: vec![],
        }
    }

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()
    }

    #[test]
    fn test_lists_each_hour_with_emoji_and_label() {
        let report = report_with_hours(vec![
            HourlyOutlook {
                time: ts("2024-01-02T14:00"),
                temperature: 3.5,
                category: classify(61),
            },
            HourlyOutlook {
                time: ts("2024-01-02T15:00"),
                temperature: 3.1,
                category: classify(0),
            },
        ]);

        let mut buffer = Vec::new();
        write_condition_list(&mut buffer, &report).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("Berlin, Germany"));
        assert!(text.contains("14:00  🌧️  Light rain"));
        assert!(text.contains("15:00  ☀️  Clear sky"));
    }

    #[test]
    fn test_empty_hours_prints_placeholder() {
        let report = report_with_hours(vec![]);

        let mut buffer = Vec::new();
        write_condition_list(&mut buffer, &report).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("no hourly data left for today"));
    }
}
