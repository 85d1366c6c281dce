use log::debug;

use crate::error::{AnalyzeError, Result};
use crate::models::{DailyCountSeries, Message};

pub const MS_PER_DAY: i64 = 86_400_000;

/// Longest series accepted: 100 years of days
pub const MAX_SERIES_DAYS: usize = 36_525;

/// Whole UTC days since 1970-01-01, rounding toward negative infinity.
pub fn day_index(timestamp_ms: i64) -> i64 {
    timestamp_ms.div_euclid(MS_PER_DAY)
}

/// Bucket messages into a dense per-day count series.
///
/// Messages without a usable `timestamp_ms` are skipped. The series runs from
/// the earliest to the latest message day inclusive, with zero for quiet days.
///
/// # Errors
///
/// Returns [`AnalyzeError::EmptySeries`] when no message has a timestamp, and
/// [`AnalyzeError::SpanTooLarge`] when the first and last day are more than
/// [`MAX_SERIES_DAYS`] apart.
pub fn aggregate(messages: &[Message]) -> Result<DailyCountSeries> {
    let mut days: Vec<i64> =
        messages.iter().filter_map(|m| m.timestamp_ms).map(day_index).collect();

    let skipped = messages.len() - days.len();
    if skipped > 0 {
        debug!("{} message(s) without timestamp_ms left out of the daily series", skipped);
    }

    days.sort_unstable();
    let (Some(&first), Some(&last)) = (days.first(), days.last()) else {
        return Err(AnalyzeError::EmptySeries);
    };

    let span = last
        .checked_sub(first)
        .and_then(|d| usize::try_from(d).ok())
        .and_then(|d| d.checked_add(1))
        .filter(|&len| len <= MAX_SERIES_DAYS)
        .ok_or(AnalyzeError::SpanTooLarge {
            first_day: first,
            last_day: last,
            max_days: MAX_SERIES_DAYS,
        })?;

    let mut counts = vec![0usize; span];
    for day in days {
        counts[(day - first) as usize] += 1;
    }

    debug!("Daily series spans {} day(s) starting at day {}", counts.len(), first);
    Ok(DailyCountSeries::new(first, counts))
}
