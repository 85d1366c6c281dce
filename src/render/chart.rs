//! SVG line chart of daily message volume.
//!
//! Drawing is kept apart from the analysis: the chart receives finished
//! `(day, value)` points and only decides how they look.

use std::error::Error;
use std::path::Path;

use log::info;
use plotters::prelude::*;

use crate::error::{AnalyzeError, Result};
use crate::models::SeriesPoint;
use crate::render::dates::{format_day, month_ticks};

/// Default output file, relative to the working directory
pub const DEFAULT_CHART_PATH: &str = "messages.svg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    pub caption: Option<String>,
    /// Months between x-axis labels
    pub tick_interval_months: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self { width: 1024, height: 576, caption: None, tick_interval_months: 3 }
    }
}

/// Write `points` as a thin line chart to `path`.
///
/// # Errors
///
/// Returns [`AnalyzeError::Chart`] when there is nothing to plot or the SVG
/// cannot be drawn or written.
pub fn render_chart(points: &[SeriesPoint], path: &Path, options: &ChartOptions) -> Result<()> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Err(AnalyzeError::Chart("no points to plot".to_string()));
    };

    draw(points, (first.day, last.day), path, options)
        .map_err(|e| AnalyzeError::Chart(format!("{}: {}", path.display(), e)))?;

    info!("Wrote chart with {} points to {}", points.len(), path.display());
    Ok(())
}

fn draw(
    points: &[SeriesPoint],
    (first_day, last_day): (i64, i64),
    path: &Path,
    options: &ChartOptions,
) -> std::result::Result<(), Box<dyn Error>> {
    let y_max = points.iter().map(|p| p.value).fold(0.0, f64::max);
    // Headroom above the peak; a flat zero series still needs a non-empty range
    let y_top = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };
    let ticks = month_ticks(first_day, last_day, options.tick_interval_months);

    let root = SVGBackend::new(path, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut builder = ChartBuilder::on(&root);
    builder.margin(10).x_label_area_size(70).y_label_area_size(50);
    if let Some(caption) = &options.caption {
        builder.caption(caption, ("sans-serif", 20));
    }

    let mut chart = builder
        .build_cartesian_2d((first_day..last_day + 1).with_key_points(ticks), 0f64..y_top)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Date")
        .y_desc("Messages per day")
        .x_label_formatter(&|day| format_day(*day))
        .x_label_style(("sans-serif", 12).into_font().transform(FontTransform::Rotate90))
        .draw()?;

    chart.draw_series(LineSeries::new(
        points.iter().map(|p| (p.day, p.value)),
        BLUE.stroke_width(1),
    ))?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_render_writes_svg() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("chart.svg");
        let points: Vec<SeriesPoint> = (18_000..18_400)
            .map(|day| SeriesPoint { day, value: ((day % 13) as f64) / 2.0 })
            .collect();

        render_chart(&points, &path, &ChartOptions::default()).unwrap();

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("polyline") || svg.contains("path"));
    }

    #[test]
    fn test_render_single_point() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("one.svg");
        let points = [SeriesPoint { day: 18_628, value: 0.0 }];
        assert!(render_chart(&points, &path, &ChartOptions::default()).is_ok());
    }

    #[test]
    fn test_render_empty_is_error() {
        let temp = TempDir::new().unwrap();
        let err = render_chart(&[], &temp.path().join("x.svg"), &ChartOptions::default())
            .unwrap_err();
        assert!(matches!(err, AnalyzeError::Chart(_)));
    }
}
