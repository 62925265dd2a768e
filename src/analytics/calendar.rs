use crate::analytics::HOURS_PER_WORKING_DAY;
use chrono::{Datelike, NaiveDate, Weekday};

/// Counts Monday-Friday dates in the inclusive range `[start, end]`.
///
/// There is no holiday calendar; weekends are the only non-working days.
/// An inverted range (`start > end`) is treated as an empty range and
/// returns 0 rather than erroring. Callers that need a hard failure on
/// inversion validate the filter before getting here.
pub fn working_days(start: NaiveDate, end: NaiveDate) -> u32 {
    let mut count = 0;
    let mut day = start;
    while day <= end {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            count += 1;
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    count
}

/// Expected hours for a range, under the fixed 8-hour workday.
pub fn expected_hours(expected_days: u32) -> f64 {
    expected_days as f64 * HOURS_PER_WORKING_DAY
}
