//! Analyses over a loaded [`Dataset`].
//!
//! Two independent branches read the same message list:
//!
//! - **Activity**: [`daily::aggregate`] buckets timestamps into a dense per-day
//!   series, then [`smoothing::smooth`] applies a trailing moving average.
//! - **Vocabulary**: [`words::count_words`] builds a token frequency table.
//!
//! [`analyze`] runs both and fails before anything is reported if either does.

pub mod daily;
pub mod smoothing;
pub mod words;

pub use daily::{aggregate, day_index};
pub use smoothing::smooth;
pub use words::{count_words, tokenize};

use log::info;

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::models::{DailyCountSeries, Dataset, SmoothedSeries};

/// Everything the presentation layer needs from one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Highest-count tokens, at most `top_n_words` of them
    pub top_words: Vec<(String, usize)>,
    pub total_messages: usize,
    pub daily: DailyCountSeries,
    pub smoothed: SmoothedSeries,
}

pub fn analyze(dataset: &Dataset, config: &AnalysisConfig) -> Result<Report> {
    let table = count_words(&dataset.messages, config.minimum_token_length);
    let top_words = table.top(config.top_n_words);

    let daily = aggregate(&dataset.messages)?;
    let smoothed = smooth(&daily, config.smoothing_window)?;

    info!(
        "Analysed {} messages: {} distinct words, {} days, {} smoothed points",
        dataset.message_count(),
        table.len(),
        daily.len(),
        smoothed.len()
    );

    Ok(Report { top_words, total_messages: dataset.message_count(), daily, smoothed })
}
