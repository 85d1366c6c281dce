use crate::error::{AnalyzeError, Result};
use crate::models::{DailyCountSeries, SeriesPoint, SmoothedSeries};

/// Trailing moving average over `window` days.
///
/// Each output point sits on the last day of its window, so the result starts
/// `window - 1` days after the input and has `len - window + 1` points.
/// A window of 0 or 1 returns the series unchanged.
///
/// # Errors
///
/// Returns [`AnalyzeError::InsufficientData`] when `window` exceeds the series length.
pub fn smooth(series: &DailyCountSeries, window: usize) -> Result<SmoothedSeries> {
    if window <= 1 {
        return Ok(SmoothedSeries::from(series));
    }

    let counts = series.counts();
    if window > counts.len() {
        return Err(AnalyzeError::InsufficientData { window, len: counts.len() });
    }

    let mut points = Vec::with_capacity(counts.len() - window + 1);
    let mut sum: usize = counts[..window - 1].iter().sum();
    for end in window - 1..counts.len() {
        sum += counts[end];
        points.push(SeriesPoint {
            day: series.first_day() + end as i64,
            value: sum as f64 / window as f64,
        });
        sum -= counts[end + 1 - window];
    }

    Ok(SmoothedSeries { points })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(counts: &[usize]) -> DailyCountSeries {
        DailyCountSeries::new(100, counts.to_vec())
    }

    #[test]
    fn test_window_one_is_identity() {
        let input = series(&[3, 0, 5]);
        assert_eq!(smooth(&input, 1).unwrap(), SmoothedSeries::from(&input));
        assert_eq!(smooth(&input, 0).unwrap(), SmoothedSeries::from(&input));
    }

    #[test]
    fn test_trailing_alignment() {
        let smoothed = smooth(&series(&[1, 2, 3, 4, 5]), 3).unwrap();
        assert_eq!(
            smoothed.points,
            vec![
                SeriesPoint { day: 102, value: 2.0 },
                SeriesPoint { day: 103, value: 3.0 },
                SeriesPoint { day: 104, value: 4.0 },
            ]
        );
    }

    #[test]
    fn test_window_equal_to_length() {
        let smoothed = smooth(&series(&[2, 4, 0, 6]), 4).unwrap();
        assert_eq!(smoothed.points, vec![SeriesPoint { day: 103, value: 3.0 }]);
    }

    #[test]
    fn test_window_longer_than_series() {
        let err = smooth(&series(&[1, 2]), 7).unwrap_err();
        assert!(matches!(err, AnalyzeError::InsufficientData { window: 7, len: 2 }));
    }

    #[test]
    fn test_matches_naive_mean() {
        let counts: Vec<usize> = (0..40).map(|i| (i * 7 + 3) % 11).collect();
        let input = series(&counts);
        for window in 2..=10 {
            let smoothed = smooth(&input, window).unwrap();
            assert_eq!(smoothed.len(), counts.len() - window + 1);
            for (k, point) in smoothed.points.iter().enumerate() {
                let slice = &counts[k..k + window];
                let mean = slice.iter().sum::<usize>() as f64 / window as f64;
                assert!((point.value - mean).abs() < 1e-9);
                assert_eq!(point.day, 100 + (k + window - 1) as i64);
            }
        }
    }
}
