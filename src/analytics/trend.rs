use crate::analytics::classify::{Outcome, classify};
use crate::analytics::pct;
use crate::model::attendance::AttendanceRecord;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Granularity for the trend series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Bucketing {
    Day,
    /// Records grouped by the Monday of their containing ISO week.
    Week,
}

/// One chronological point of the attendance time series.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TrendPoint {
    /// Bucket key formatted `YYYY-MM-DD` (the day itself, or the week's
    /// Monday).
    pub period_label: String,
    pub present_count: u32,
    pub absent_count: u32,
    pub late_count: u32,
    pub total_count: u32,
    pub attendance_rate: f64,
}

fn week_monday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

#[derive(Default)]
struct Bucket {
    present: u32,
    late: u32,
    total: u32,
}

/// Buckets records by day or ISO week and derives per-bucket counts and the
/// attendance rate against the active roster size. Output is ordered
/// chronologically.
///
/// Sparse data comes back sparse; any synthetic display series for thin
/// environments lives in the fixtures module, never here.
pub fn build_trend(
    records: &[AttendanceRecord],
    bucketing: Bucketing,
    total_active_employees: u32,
) -> Vec<TrendPoint> {
    let mut buckets: BTreeMap<NaiveDate, Bucket> = BTreeMap::new();

    for record in records {
        let key = match bucketing {
            Bucketing::Day => record.date,
            Bucketing::Week => week_monday(record.date),
        };
        let bucket = buckets.entry(key).or_default();
        bucket.total += 1;
        match classify(record) {
            Outcome::Present => bucket.present += 1,
            Outcome::Late => bucket.late += 1,
            Outcome::Absent | Outcome::Incomplete => {}
        }
    }

    buckets
        .into_iter()
        .map(|(key, b)| TrendPoint {
            period_label: key.format("%Y-%m-%d").to_string(),
            present_count: b.present,
            absent_count: total_active_employees.saturating_sub(b.total),
            late_count: b.late,
            total_count: b.total,
            attendance_rate: pct(b.total as f64, total_active_employees as f64),
        })
        .collect()
}
