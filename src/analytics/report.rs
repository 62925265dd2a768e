use crate::analytics::employee::WorkforceMetrics;
use crate::analytics::organization::OrganizationKpis;
use crate::model::attendance::AttendanceRecord;
use crate::model::filter::PeriodFilter;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub record_count: usize,
    pub employee_count: usize,
}

/// Exportable bundle handed to the rendering collaborator (PDF/Excel/CSV).
/// All numbers are final here; the renderer formats, it never re-aggregates.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AttendanceReport {
    pub records: Vec<AttendanceRecord>,
    pub employee_metrics: Option<WorkforceMetrics>,
    pub organization_kpis: Option<OrganizationKpis>,
    pub filters: PeriodFilter,
    pub metadata: ReportMetadata,
}

/// Combines the filtered records with whichever aggregates the caller
/// computed into one self-describing bundle.
pub fn assemble_report(
    records: Vec<AttendanceRecord>,
    employee_metrics: Option<WorkforceMetrics>,
    organization_kpis: Option<OrganizationKpis>,
    filters: PeriodFilter,
) -> AttendanceReport {
    let metadata = ReportMetadata {
        generated_at: Utc::now(),
        record_count: records.len(),
        employee_count: employee_metrics
            .as_ref()
            .map(|wf| wf.per_employee.len())
            .unwrap_or(0),
    };
    AttendanceReport {
        records,
        employee_metrics,
        organization_kpis,
        filters,
        metadata,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::employee::aggregate_workforce;
    use crate::analytics::fixtures::{employee, full_day};
    use chrono::NaiveDate;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn metadata_reflects_the_inputs() {
        let employees = vec![employee(1, None), employee(2, None)];
        let records = vec![
            full_day(1, d("2026-08-24"), 8.0, 0.0),
            full_day(2, d("2026-08-24"), 8.0, 0.0),
        ];
        let wf = aggregate_workforce(&records, &employees, d("2026-08-24"), d("2026-08-28"));
        let filter = PeriodFilter {
            start_date: d("2026-08-24"),
            end_date: d("2026-08-28"),
            employee_id: None,
            department_id: None,
            status: None,
        };

        let report = assemble_report(records, Some(wf), None, filter);
        assert_eq!(report.metadata.record_count, 2);
        assert_eq!(report.metadata.employee_count, 2);
        assert!(report.organization_kpis.is_none());
    }

    #[test]
    fn empty_report_is_well_formed() {
        let filter = PeriodFilter {
            start_date: d("2026-08-24"),
            end_date: d("2026-08-24"),
            employee_id: None,
            department_id: None,
            status: None,
        };
        let report = assemble_report(Vec::new(), None, None, filter);
        assert_eq!(report.metadata.record_count, 0);
        assert_eq!(report.metadata.employee_count, 0);
    }
}
