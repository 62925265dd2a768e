use crate::analytics::calendar::{expected_hours, working_days};
use crate::analytics::classify::{Outcome, classify};
use crate::analytics::{pct, round2};
use crate::model::attendance::AttendanceRecord;
use crate::model::employee::Employee;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use utoipa::ToSchema;

/// Derived metrics for one employee over one period. Recomputed per request,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EmployeeMetrics {
    pub employee_id: u64,
    pub total_hours: f64,
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub late_arrivals: u32,
    pub absent_days: u32,
    pub present_days: u32,
    pub expected_days: u32,
    pub expected_hours: f64,
    /// Negative means under-worked relative to expected hours; not clamped.
    pub hours_deficit: f64,
    pub attendance_rate: f64,
    pub punctuality_rate: f64,
}

/// Per-employee metrics for a whole roster, plus counters for rows the
/// aggregation had to discard so the skips stay observable.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WorkforceMetrics {
    pub per_employee: Vec<EmployeeMetrics>,
    /// Records referencing an employee_id missing from the roster.
    pub skipped_orphans: u32,
    /// Extra rows for an (employee, date) pair already seen; first row wins.
    pub collapsed_duplicates: u32,
}

/// Folds one employee's records for the period into metrics.
///
/// `records` must already be narrowed to this employee and window; the store
/// layer owns that filtering. A second row for a date already seen is
/// ignored (first row wins), so a violated upstream uniqueness invariant
/// can never push `present_days` past `expected_days`.
pub fn aggregate_employee(
    employee_id: u64,
    records: &[AttendanceRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> EmployeeMetrics {
    let mut total_hours = 0.0;
    let mut regular_hours = 0.0;
    let mut overtime = 0.0;
    let mut late_arrivals = 0;
    let mut absent_days = 0;
    let mut present_days = 0;
    let mut seen_dates = HashSet::new();

    for record in records {
        if !seen_dates.insert(record.date) {
            continue;
        }
        let worked = record.work_hours.unwrap_or(0.0);
        let extra = record.overtime_hours.unwrap_or(0.0);
        total_hours += worked;
        overtime += extra;
        regular_hours += (worked - extra).max(0.0);

        match classify(record) {
            Outcome::Late => {
                late_arrivals += 1;
                present_days += 1;
            }
            Outcome::Absent => absent_days += 1,
            Outcome::Present | Outcome::Incomplete => present_days += 1,
        }
    }

    let expected_days = working_days(start, end);
    let expected = expected_hours(expected_days);

    EmployeeMetrics {
        employee_id,
        total_hours: round2(total_hours),
        regular_hours: round2(regular_hours),
        overtime_hours: round2(overtime),
        late_arrivals,
        absent_days,
        present_days,
        expected_days,
        expected_hours: expected,
        hours_deficit: round2(total_hours - expected),
        attendance_rate: pct(present_days as f64, expected_days as f64),
        punctuality_rate: pct((present_days - late_arrivals) as f64, present_days as f64),
    }
}

/// Aggregates every rostered employee over the period. Employees with no
/// records still get a (zeroed) metrics entry so downstream rollups account
/// for the whole roster.
///
/// Orphan records are skipped and counted rather than aborting the run, and
/// duplicate (employee, date) rows are collapsed to the first occurrence.
pub fn aggregate_workforce(
    records: &[AttendanceRecord],
    employees: &[Employee],
    start: NaiveDate,
    end: NaiveDate,
) -> WorkforceMetrics {
    let roster: HashSet<u64> = employees.iter().map(|e| e.id).collect();

    let mut by_employee: HashMap<u64, BTreeMap<NaiveDate, &AttendanceRecord>> = HashMap::new();
    let mut skipped_orphans = 0;
    let mut collapsed_duplicates = 0;

    for record in records {
        if !roster.contains(&record.employee_id) {
            tracing::warn!(
                employee_id = record.employee_id,
                record_id = record.id,
                "Skipping attendance record for unknown employee"
            );
            skipped_orphans += 1;
            continue;
        }
        let days = by_employee.entry(record.employee_id).or_default();
        if days.contains_key(&record.date) {
            tracing::warn!(
                employee_id = record.employee_id,
                date = %record.date,
                "Collapsing duplicate attendance row"
            );
            collapsed_duplicates += 1;
            continue;
        }
        days.insert(record.date, record);
    }

    let per_employee = employees
        .iter()
        .map(|employee| {
            let own: Vec<AttendanceRecord> = by_employee
                .get(&employee.id)
                .map(|days| days.values().map(|r| (*r).clone()).collect())
                .unwrap_or_default();
            aggregate_employee(employee.id, &own, start, end)
        })
        .collect();

    WorkforceMetrics {
        per_employee,
        skipped_orphans,
        collapsed_duplicates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::fixtures::{employee, full_day, weekdays};
    use crate::model::attendance::AttendanceStatus;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn full_week_yields_perfect_rates() {
        // Mon 2026-08-24 .. Fri 2026-08-28, 8h each day
        let records: Vec<_> = weekdays("2026-08-24", 5)
            .into_iter()
            .map(|date| full_day(7, date, 8.0, 0.0))
            .collect();

        let m = aggregate_employee(7, &records, d("2026-08-24"), d("2026-08-28"));
        assert_eq!(m.expected_days, 5);
        assert_eq!(m.expected_hours, 40.0);
        assert_eq!(m.total_hours, 40.0);
        assert_eq!(m.hours_deficit, 0.0);
        assert_eq!(m.present_days, 5);
        assert_eq!(m.attendance_rate, 100.0);
        assert_eq!(m.punctuality_rate, 100.0);
    }

    #[test]
    fn one_late_day_drops_punctuality_to_eighty() {
        let mut records: Vec<_> = weekdays("2026-08-24", 5)
            .into_iter()
            .map(|date| full_day(7, date, 8.0, 0.0))
            .collect();
        records[2].status = AttendanceStatus::Late;

        let m = aggregate_employee(7, &records, d("2026-08-24"), d("2026-08-28"));
        assert_eq!(m.present_days, 5);
        assert_eq!(m.late_arrivals, 1);
        assert_eq!(m.attendance_rate, 100.0);
        assert_eq!(m.punctuality_rate, 80.0);
    }

    #[test]
    fn absence_by_omission_lowers_attendance_rate() {
        // 10 business days, records for only 6 of them
        let records: Vec<_> = weekdays("2026-08-17", 6)
            .into_iter()
            .map(|date| full_day(7, date, 8.0, 0.0))
            .collect();

        let m = aggregate_employee(7, &records, d("2026-08-17"), d("2026-08-28"));
        assert_eq!(m.expected_days, 10);
        assert_eq!(m.present_days, 6);
        assert_eq!(m.attendance_rate, 60.0);
    }

    #[test]
    fn overtime_splits_out_of_regular_hours() {
        let records = vec![full_day(7, d("2026-08-24"), 10.0, 2.0)];
        let m = aggregate_employee(7, &records, d("2026-08-24"), d("2026-08-24"));
        assert_eq!(m.total_hours, 10.0);
        assert_eq!(m.overtime_hours, 2.0);
        assert_eq!(m.regular_hours, 8.0);
        assert_eq!(m.hours_deficit, 2.0);
    }

    #[test]
    fn missing_hours_count_as_zero() {
        let mut r = full_day(7, d("2026-08-24"), 8.0, 0.0);
        r.work_hours = None;
        r.overtime_hours = None;
        let m = aggregate_employee(7, &[r], d("2026-08-24"), d("2026-08-24"));
        assert_eq!(m.total_hours, 0.0);
        assert_eq!(m.hours_deficit, -8.0);
    }

    #[test]
    fn empty_period_yields_zero_rates_not_nan() {
        // weekend-only window: expected_days == 0
        let m = aggregate_employee(7, &[], d("2026-08-22"), d("2026-08-23"));
        assert_eq!(m.expected_days, 0);
        assert_eq!(m.attendance_rate, 0.0);
        assert_eq!(m.punctuality_rate, 0.0);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let records: Vec<_> = weekdays("2026-08-24", 5)
            .into_iter()
            .map(|date| full_day(7, date, 8.0, 0.5))
            .collect();
        let a = aggregate_employee(7, &records, d("2026-08-24"), d("2026-08-28"));
        let b = aggregate_employee(7, &records, d("2026-08-24"), d("2026-08-28"));
        assert_eq!(a, b);
    }

    #[test]
    fn rates_stay_within_bounds() {
        let mut records: Vec<_> = weekdays("2026-08-24", 5)
            .into_iter()
            .map(|date| full_day(7, date, 9.5, 1.5))
            .collect();
        for r in &mut records[..3] {
            r.status = AttendanceStatus::Late;
        }
        let m = aggregate_employee(7, &records, d("2026-08-24"), d("2026-08-28"));
        assert!(m.attendance_rate >= 0.0 && m.attendance_rate <= 100.0);
        assert!(m.punctuality_rate >= 0.0 && m.punctuality_rate <= 100.0);
    }

    #[test]
    fn workforce_skips_orphans_and_keeps_going() {
        let employees = vec![employee(1, Some(10)), employee(2, Some(10))];
        let mut records = vec![
            full_day(1, d("2026-08-24"), 8.0, 0.0),
            full_day(99, d("2026-08-24"), 8.0, 0.0), // not on the roster
            full_day(2, d("2026-08-24"), 8.0, 0.0),
        ];
        records[1].employee_id = 99;

        let wf = aggregate_workforce(&records, &employees, d("2026-08-24"), d("2026-08-24"));
        assert_eq!(wf.skipped_orphans, 1);
        assert_eq!(wf.per_employee.len(), 2);
        assert!(wf.per_employee.iter().all(|m| m.present_days == 1));
    }

    #[test]
    fn duplicate_dates_do_not_double_count() {
        // two rows for the same (employee, date); the second is ignored
        let records = vec![
            full_day(7, d("2026-08-24"), 8.0, 0.0),
            full_day(7, d("2026-08-24"), 4.0, 0.0),
        ];
        let m = aggregate_employee(7, &records, d("2026-08-24"), d("2026-08-24"));
        assert_eq!(m.present_days, 1);
        assert_eq!(m.total_hours, 8.0);
        assert_eq!(m.attendance_rate, 100.0);
    }

    #[test]
    fn workforce_collapses_duplicate_dates() {
        let employees = vec![employee(1, None)];
        let records = vec![
            full_day(1, d("2026-08-24"), 8.0, 0.0),
            full_day(1, d("2026-08-24"), 4.0, 0.0), // duplicate, dropped
        ];
        let wf = aggregate_workforce(&records, &employees, d("2026-08-24"), d("2026-08-24"));
        assert_eq!(wf.collapsed_duplicates, 1);
        assert_eq!(wf.per_employee[0].total_hours, 8.0);
        assert_eq!(wf.per_employee[0].present_days, 1);
    }

    #[test]
    fn rostered_employee_without_records_gets_zeroed_entry() {
        let employees = vec![employee(1, None), employee(2, None)];
        let records = vec![full_day(1, d("2026-08-24"), 8.0, 0.0)];
        let wf = aggregate_workforce(&records, &employees, d("2026-08-24"), d("2026-08-24"));
        assert_eq!(wf.per_employee.len(), 2);
        let idle = wf.per_employee.iter().find(|m| m.employee_id == 2).unwrap();
        assert_eq!(idle.present_days, 0);
        assert_eq!(idle.attendance_rate, 0.0);
    }
}
