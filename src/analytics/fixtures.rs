//! Deterministic sample-data builders for tests and demo environments.
//!
//! Compiled only for tests or under the `demo-data` feature; production
//! aggregation never reaches into this module, so sparse real data is
//! reported as-is instead of being padded with synthetic rows.

use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::employee::Employee;
use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

/// A bare record with the given punches; `present` status, no hour totals.
pub fn record(
    employee_id: u64,
    date: &str,
    check_in: Option<NaiveTime>,
    check_out: Option<NaiveTime>,
) -> AttendanceRecord {
    AttendanceRecord {
        id: employee_id * 1_000 + date.parse::<NaiveDate>().unwrap().day() as u64,
        employee_id,
        organization_id: 1,
        date: date.parse().unwrap(),
        check_in,
        check_out,
        work_hours: None,
        overtime_hours: None,
        status: AttendanceStatus::Present,
    }
}

/// A complete 08:00-17:00 day with explicit hour totals.
pub fn full_day(
    employee_id: u64,
    date: NaiveDate,
    work_hours: f64,
    overtime_hours: f64,
) -> AttendanceRecord {
    AttendanceRecord {
        id: employee_id * 1_000 + date.num_days_from_ce() as u64,
        employee_id,
        organization_id: 1,
        date,
        check_in: NaiveTime::from_hms_opt(8, 0, 0),
        check_out: NaiveTime::from_hms_opt(17, 0, 0),
        work_hours: Some(work_hours),
        overtime_hours: Some(overtime_hours),
        status: AttendanceStatus::Present,
    }
}

/// The first `count` weekdays starting at `from` (inclusive), skipping
/// weekends.
pub fn weekdays(from: &str, count: usize) -> Vec<NaiveDate> {
    let mut days = Vec::with_capacity(count);
    let mut day: NaiveDate = from.parse().unwrap();
    while days.len() < count {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            days.push(day);
        }
        day = day.succ_opt().expect("date overflow");
    }
    days
}

/// An active rostered employee.
pub fn employee(id: u64, department_id: Option<u64>) -> Employee {
    Employee {
        id,
        organization_id: 1,
        employee_code: format!("EMP-{id:03}"),
        full_name: format!("Empleado {id}"),
        department_id,
        position_id: None,
        is_active: true,
    }
}

/// A plausible seven-week attendance series for demo dashboards when the
/// real store is empty. Display-only; never merged with real aggregation
/// output.
#[cfg(feature = "demo-data")]
pub fn sample_weekly_trend(total_employees: u32) -> Vec<crate::analytics::trend::TrendPoint> {
    use crate::analytics::trend::TrendPoint;

    let mondays = [
        "2026-07-13",
        "2026-07-20",
        "2026-07-27",
        "2026-08-03",
        "2026-08-10",
        "2026-08-17",
        "2026-08-24",
    ];
    let presence = [0.91, 0.88, 0.93, 0.90, 0.86, 0.94, 0.92];
    mondays
        .iter()
        .zip(presence)
        .map(|(monday, rate)| {
            let total = (total_employees as f64 * rate).round() as u32;
            TrendPoint {
                period_label: (*monday).to_string(),
                present_count: total.saturating_sub(total / 10),
                absent_count: total_employees.saturating_sub(total),
                late_count: total / 10,
                total_count: total,
                attendance_rate: crate::analytics::pct(total as f64, total_employees as f64),
            }
        })
        .collect()
}
