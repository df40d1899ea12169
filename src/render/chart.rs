//! Temperature chart rendering
//!
//! Draws the filtered hourly temperatures as a PNG line chart. The renderer
//! owns the handle to its previous output and releases it (removes the file)
//! before drawing a replacement, so at most one chart exists per renderer.

use crate::config::ChartConfig;
use crate::forecast::HourlyOutlook;
use crate::{Result, SkycastError};
use plotters::prelude::*;
use std::fs;
use std::path::PathBuf;

/// Line and fill color, matching the classic bootstrap blue
const LINE_COLOR: RGBColor = RGBColor(0, 123, 255);

/// Temperature chart renderer with replace-on-render semantics
#[derive(Debug)]
pub struct TemperatureChart {
    output: PathBuf,
    width: u32,
    height: u32,
    previous: Option<PathBuf>,
}

impl TemperatureChart {
    /// Create a renderer targeting the configured output path
    #[must_use]
    pub fn new(config: &ChartConfig) -> Self {
        Self {
            output: config.output_path.clone(),
            width: config.width,
            height: config.height,
            previous: None,
        }
    }

    /// Path of the most recently rendered chart, if any
    #[must_use]
    pub fn last_rendered(&self) -> Option<&PathBuf> {
        self.previous.as_ref()
    }

    /// Render the hourly temperatures, replacing any previous chart.
    ///
    /// # Errors
    ///
    /// Returns `SkycastError::Render` when the image cannot be written.
    pub fn render(&mut self, hours: &[HourlyOutlook]) -> Result<PathBuf> {
        self.release_previous();

        if let Some(parent) = self.output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| SkycastError::render(format!("cannot create {}: {e}", parent.display())))?;
            }
        }

        self.draw(hours)?;
        self.previous = Some(self.output.clone());
        Ok(self.output.clone())
    }

    /// Release the previous chart instance by removing its file.
    fn release_previous(&mut self) {
        if let Some(previous) = self.previous.take() {
            let _ = fs::remove_file(previous);
        }
    }

    fn draw(&self, hours: &[HourlyOutlook]) -> Result<()> {
        let root =
            BitMapBackend::new(&self.output, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| SkycastError::render(e.to_string()))?;

        if !hours.is_empty() {
            let (min, max) = temperature_bounds(hours).unwrap_or((0.0, 1.0));
            let pad = ((max - min) * 0.1).max(1.0);
            let labels = time_labels(hours);
            let x_max = (hours.len() as i32 - 1).max(1);

            let mut chart = ChartBuilder::on(&root)
                .margin(24)
                .x_label_area_size(48)
                .y_label_area_size(48)
                .build_cartesian_2d(0..x_max, (min - pad)..(max + pad))
                .map_err(|e| SkycastError::render(e.to_string()))?;

            chart
                .configure_mesh()
                .disable_mesh()
                .x_labels(labels.len().min(12))
                .x_label_formatter(&|i| {
                    labels
                        .get(usize::try_from(*i).unwrap_or(usize::MAX))
                        .cloned()
                        .unwrap_or_default()
                })
                .y_label_formatter(&|t| format!("{t:.0}°C"))
                .draw()
                .map_err(|e| SkycastError::render(e.to_string()))?;

            let points: Vec<(i32, f64)> = hours
                .iter()
                .enumerate()
                .map(|(i, hour)| (i as i32, hour.temperature))
                .collect();

            chart
                .draw_series(AreaSeries::new(
                    points.iter().copied(),
                    min - pad,
                    LINE_COLOR.mix(0.2),
                ))
                .map_err(|e| SkycastError::render(e.to_string()))?;
            chart
                .draw_series(LineSeries::new(
                    points.iter().copied(),
                    LINE_COLOR.stroke_width(3),
                ))
                .map_err(|e| SkycastError::render(e.to_string()))?;
        }

        root.present()
            .map_err(|e| SkycastError::render(e.to_string()))
    }
}

/// Minimum and maximum temperature over the samples, `None` when empty
#[must_use]
pub fn temperature_bounds(hours: &[HourlyOutlook]) -> Option<(f64, f64)> {
    let mut iter = hours.iter().map(|hour| hour.temperature);
    let first = iter.next()?;
    let (min, max) = iter.fold((first, first), |(min, max), t| (min.min(t), max.max(t)));
    Some((min, max))
}

/// Axis labels, one "HH:MM" per sample
#[must_use]
pub fn time_labels(hours: &[HourlyOutlook]) -> Vec<String> {
    hours
        .iter()
        .map(|hour| hour.time.format("%H:%M").to_string())
        .collect()
}
