use crate::analytics::employee::EmployeeMetrics;
use crate::analytics::{pct, round2};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use utoipa::ToSchema;

/// Bucket for employees with no department assignment.
pub const NO_DEPARTMENT: &str = "Sin Departamento";

/// Comparative rollup of per-employee metrics for one department.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DepartmentMetric {
    pub department_name: String,
    pub employee_count: u32,
    pub avg_hours: f64,
    pub attendance_rate: f64,
    pub punctuality_rate: f64,
    pub total_late_arrivals: u32,
}

#[derive(Default)]
struct Rollup {
    employees: u32,
    total_hours: f64,
    present_days: u32,
    expected_days: u32,
    late_arrivals: u32,
}

/// Groups per-employee metrics by department name, sorted by name.
///
/// `department_of` maps employee id to department name; employees missing
/// from the map land in the [`NO_DEPARTMENT`] bucket, so every metrics entry
/// passed in is represented in exactly one group.
pub fn aggregate_departments(
    metrics: &[EmployeeMetrics],
    department_of: &HashMap<u64, String>,
) -> Vec<DepartmentMetric> {
    let mut groups: BTreeMap<String, Rollup> = BTreeMap::new();

    for m in metrics {
        let name = department_of
            .get(&m.employee_id)
            .cloned()
            .unwrap_or_else(|| NO_DEPARTMENT.to_string());
        let rollup = groups.entry(name).or_default();
        rollup.employees += 1;
        rollup.total_hours += m.total_hours;
        rollup.present_days += m.present_days;
        rollup.expected_days += m.expected_days;
        rollup.late_arrivals += m.late_arrivals;
    }

    groups
        .into_iter()
        .map(|(department_name, r)| DepartmentMetric {
            department_name,
            employee_count: r.employees,
            avg_hours: if r.employees == 0 {
                0.0
            } else {
                round2(r.total_hours / r.employees as f64)
            },
            attendance_rate: pct(r.present_days as f64, r.expected_days as f64),
            punctuality_rate: pct(
                (r.present_days - r.late_arrivals) as f64,
                r.present_days as f64,
            ),
            total_late_arrivals: r.late_arrivals,
        })
        .collect()
}
