//! Presentation collaborators
//!
//! Three renderers consume a completed [`ForecastReport`]: the hourly
//! condition list and the forecast cards write to any `io::Write`, the
//! temperature chart rasterizes a PNG and owns the handle to its previous
//! output.

pub mod cards;
pub mod chart;
pub mod conditions;

pub use chart::TemperatureChart;

use crate::forecast::ForecastReport;
use crate::{Result, SkycastError};
use std::io::Write;

/// Render a report wholesale: condition list, chart, forecast cards.
///
/// # Errors
///
/// Returns `SkycastError::Render` when the terminal or chart output fails.
pub fn present<W: Write>(
    report: &ForecastReport,
    out: &mut W,
    chart: &mut TemperatureChart,
) -> Result<()> {
    conditions::write_condition_list(out, report)
        .map_err(|e| SkycastError::render(e.to_string()))?;

    let chart_path = chart.render(&report.hours)?;
    writeln!(out, "\nTemperature chart saved to {}", chart_path.display())
        .map_err(|e| SkycastError::render(e.to_string()))?;

    cards::write_forecast_cards(out, report).map_err(|e| SkycastError::render(e.to_string()))?;
    Ok(())
}
