use crate::analytics::alerts::{Alert, Severity};
use crate::analytics::classify::{Outcome, classify};
use crate::analytics::pct;
use crate::model::attendance::AttendanceRecord;
use serde::Serialize;
use utoipa::ToSchema;

/// Organization-wide dashboard KPIs for one day, with day-over-day deltas.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OrganizationKpis {
    pub total_employees: u32,
    pub present_today: u32,
    pub absent_today: u32,
    pub late_today: u32,
    pub attendance_rate: f64,
    pub punctuality_rate: f64,
    pub absenteeism_rate: f64,
    pub attendance_vs_yesterday: i32,
    pub late_vs_yesterday: i32,
    pub critical_alerts: u32,
    pub warning_alerts: u32,
}

fn count_outcome(records: &[AttendanceRecord], outcome: Outcome) -> u32 {
    records.iter().filter(|r| classify(r) == outcome).count() as u32
}

/// Folds today's and yesterday's record sets into the dashboard KPI snapshot.
///
/// Employees with no row today are absent by omission; explicit `absent` rows
/// do not add on top because `absent_today` is derived from the roster size
/// minus the rows that exist. Alert counters start at zero and are filled in
/// via [`OrganizationKpis::with_alert_counts`] once the Alert Generator has
/// run over this snapshot.
pub fn aggregate_organization(
    today: &[AttendanceRecord],
    yesterday: &[AttendanceRecord],
    total_active_employees: u32,
) -> OrganizationKpis {
    let present_today = count_outcome(today, Outcome::Present);
    let late_today = count_outcome(today, Outcome::Late);
    let absent_today = total_active_employees.saturating_sub(today.len() as u32);

    let present_yesterday = count_outcome(yesterday, Outcome::Present);
    let late_yesterday = count_outcome(yesterday, Outcome::Late);

    let total = total_active_employees as f64;

    OrganizationKpis {
        total_employees: total_active_employees,
        present_today,
        absent_today,
        late_today,
        attendance_rate: pct((present_today + late_today) as f64, total),
        punctuality_rate: pct(present_today as f64, total),
        absenteeism_rate: pct(absent_today as f64, total),
        attendance_vs_yesterday: present_today as i32 - present_yesterday as i32,
        late_vs_yesterday: late_today as i32 - late_yesterday as i32,
        critical_alerts: 0,
        warning_alerts: 0,
    }
}

impl OrganizationKpis {
    /// Copies the generated alert tallies into the snapshot for summary
    /// display.
    pub fn with_alert_counts(mut self, alerts: &[Alert]) -> Self {
        self.critical_alerts = alerts
            .iter()
            .filter(|a| a.severity == Severity::Critical)
            .count() as u32;
        self.warning_alerts = alerts
            .iter()
            .filter(|a| a.severity == Severity::Warning)
            .count() as u32;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::alerts::generate_alerts;
    use crate::analytics::fixtures::{full_day, record};
    use crate::model::attendance::AttendanceStatus;
    use chrono::{NaiveDate, NaiveTime};

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn t(h: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(h, 0, 0)
    }

    #[test]
    fn zero_employees_zero_records_is_all_zeros() {
        let kpis = aggregate_organization(&[], &[], 0);
        assert_eq!(kpis.attendance_rate, 0.0);
        assert_eq!(kpis.punctuality_rate, 0.0);
        assert_eq!(kpis.absenteeism_rate, 0.0);
        assert_eq!(kpis.absent_today, 0);
        assert_eq!(kpis.attendance_vs_yesterday, 0);
    }

    #[test]
    fn absent_by_omission_fills_the_gap() {
        // 10 on the roster, 6 rows today
        let today: Vec<_> = (1..=6).map(|id| full_day(id, d("2026-08-24"), 8.0, 0.0)).collect();
        let kpis = aggregate_organization(&today, &[], 10);
        assert_eq!(kpis.present_today, 6);
        assert_eq!(kpis.absent_today, 4);
        assert_eq!(kpis.attendance_rate, 60.0);
        assert_eq!(kpis.absenteeism_rate, 40.0);
    }

    #[test]
    fn late_rows_count_toward_attendance_not_punctuality() {
        let mut today: Vec<_> = (1..=4).map(|id| full_day(id, d("2026-08-24"), 8.0, 0.0)).collect();
        today[0].status = AttendanceStatus::Late;

        let kpis = aggregate_organization(&today, &[], 4);
        assert_eq!(kpis.present_today, 3);
        assert_eq!(kpis.late_today, 1);
        assert_eq!(kpis.attendance_rate, 100.0);
        assert_eq!(kpis.punctuality_rate, 75.0);
    }

    #[test]
    fn day_over_day_deltas_can_go_negative() {
        let today = vec![full_day(1, d("2026-08-25"), 8.0, 0.0)];
        let yesterday: Vec<_> =
            (1..=5).map(|id| full_day(id, d("2026-08-24"), 8.0, 0.0)).collect();

        let kpis = aggregate_organization(&today, &yesterday, 5);
        assert_eq!(kpis.attendance_vs_yesterday, -4);
        assert_eq!(kpis.late_vs_yesterday, 0);
    }

    #[test]
    fn incomplete_rows_are_not_counted_present() {
        // checked in, still working: attended but not "present" for the KPI
        let today = vec![record(1, "2026-08-24", t(8), None)];
        let kpis = aggregate_organization(&today, &[], 2);
        assert_eq!(kpis.present_today, 0);
        // the row exists, so its owner is not absent by omission
        assert_eq!(kpis.absent_today, 1);
    }

    #[test]
    fn alert_counts_are_copied_into_the_snapshot() {
        let today: Vec<_> = (1..=2).map(|id| full_day(id, d("2026-08-24"), 8.0, 0.0)).collect();
        // 8 missing out of 10 -> absenteeism 80%, critical
        let kpis = aggregate_organization(&today, &[], 10);
        let alerts = generate_alerts(&kpis);
        let kpis = kpis.with_alert_counts(&alerts);
        assert!(kpis.critical_alerts >= 1);
    }
}
