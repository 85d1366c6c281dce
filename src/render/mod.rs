//! Presentation of analysis results: the SVG activity chart and its date axis.

pub mod chart;
pub mod dates;

pub use chart::{ChartOptions, DEFAULT_CHART_PATH, render_chart};
pub use dates::{day_to_date, format_day, month_ticks};
