use crate::analytics::alerts::{Alert, Severity};
use crate::analytics::classify::Outcome;
use crate::analytics::department::DepartmentMetric;
use crate::analytics::employee::{EmployeeMetrics, WorkforceMetrics};
use crate::analytics::organization::OrganizationKpis;
use crate::analytics::report::{AttendanceReport, ReportMetadata};
use crate::analytics::trend::{Bucketing, TrendPoint};
use crate::api::attendance::{CheckInRequest, CheckOutRequest};
use crate::api::dashboard::{DashboardResponse, TrendResponse};
use crate::api::department::DepartmentMetricsResponse;
use crate::api::employee::RosterResponse;
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::department::Department;
use crate::model::employee::Employee;
use crate::model::filter::PeriodFilter;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Asistencia API",
        version = "1.0.0",
        description = r#"
## Employee Attendance & Analytics Service

Employees check in/out; the service turns raw attendance rows into derived
metrics for dashboards and reports.

### 🔹 Key Features
- **Attendance Tracking**
  - Daily check-in and check-out with automatic late stamping
- **Dashboard KPIs**
  - Organization-wide attendance, punctuality and absenteeism rates with
    day-over-day deltas and threshold alerts
- **Analytics**
  - Per-employee metrics, department rollups and weekly/daily trends
- **Reports**
  - Export-ready bundles consumed by the PDF/Excel renderer

### 📦 Response Format
- JSON-based RESTful responses

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::attendance::check_in,
        crate::api::attendance::check_out,
        crate::api::attendance::list_records,

        crate::api::employee::list_employees,
        crate::api::employee::employee_metrics,

        crate::api::dashboard::dashboard,
        crate::api::dashboard::trend,

        crate::api::department::department_metrics,

        crate::api::report::attendance_report
    ),
    components(
        schemas(
            AttendanceRecord,
            AttendanceStatus,
            Employee,
            Department,
            PeriodFilter,
            CheckInRequest,
            CheckOutRequest,
            Outcome,
            EmployeeMetrics,
            WorkforceMetrics,
            OrganizationKpis,
            Alert,
            Severity,
            TrendPoint,
            Bucketing,
            DepartmentMetric,
            DashboardResponse,
            TrendResponse,
            DepartmentMetricsResponse,
            RosterResponse,
            AttendanceReport,
            ReportMetadata
        )
    ),
    tags(
        (name = "Attendance", description = "Check-in/check-out and record listing"),
        (name = "Employee", description = "Roster and per-employee metrics"),
        (name = "Dashboard", description = "Organization KPIs, alerts and trends"),
        (name = "Departments", description = "Department rollups"),
        (name = "Reports", description = "Export bundles"),
    )
)]
pub struct ApiDoc;
