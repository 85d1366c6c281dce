use chrono::{DateTime, Datelike, Months, NaiveDate};

/// `num_days_from_ce` of 1970-01-01, the day-index epoch
const EPOCH_DAYS_FROM_CE: i64 = 719_163;

const SECONDS_PER_DAY: i64 = 86_400;

/// Calendar date of a day index, or `None` outside chrono's range.
pub fn day_to_date(day: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(day.checked_mul(SECONDS_PER_DAY)?, 0).map(|dt| dt.date_naive())
}

pub fn date_to_day(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - EPOCH_DAYS_FROM_CE
}

/// Axis label for a day index: "2021-04"
pub fn format_day(day: i64) -> String {
    match day_to_date(day) {
        Some(date) => date.format("%Y-%m").to_string(),
        None => day.to_string(),
    }
}

/// Day indices of month starts within `first..=last`, every `interval` months.
///
/// Ticks fall on months aligned to the interval (for 3: January, April, July,
/// October). Short ranges that contain no aligned month start get a single tick
/// on `first` so the axis is never unlabelled.
pub fn month_ticks(first: i64, last: i64, interval: u32) -> Vec<i64> {
    let interval = interval.max(1);
    let mut ticks = Vec::new();

    if let Some(start) = day_to_date(first) {
        let aligned_month = (start.month0() / interval) * interval + 1;
        let mut tick = NaiveDate::from_ymd_opt(start.year(), aligned_month, 1);

        while let Some(date) = tick {
            let day = date_to_day(date);
            if day > last {
                break;
            }
            if day >= first {
                ticks.push(day);
            }
            tick = date.checked_add_months(Months::new(interval));
        }
    }

    if ticks.is_empty() {
        ticks.push(first);
    }
    ticks
}
