use serde::{Deserialize, Serialize};

/// Message counts for every day from the first to the last observed day, inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCountSeries {
    start_day: i64,
    counts: Vec<usize>,
}

impl DailyCountSeries {
    pub fn new(start_day: i64, counts: Vec<usize>) -> Self {
        Self { start_day, counts }
    }

    pub fn first_day(&self) -> i64 {
        self.start_day
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all daily counts
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(day index, count)` pairs in chronological order
    pub fn iter(&self) -> impl Iterator<Item = (i64, usize)> + '_ {
        self.counts.iter().enumerate().map(move |(i, &count)| (self.start_day + i as i64, count))
    }
}

/// One plotted value, positioned at a day index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub day: i64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SmoothedSeries {
    pub points: Vec<SeriesPoint>,
}

impl SmoothedSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }
}

impl From<&DailyCountSeries> for SmoothedSeries {
    fn from(series: &DailyCountSeries) -> Self {
        let points =
            series.iter().map(|(day, count)| SeriesPoint { day, value: count as f64 }).collect();
        Self { points }
    }
}
