use crate::analytics::alerts::generate_alerts;
use crate::analytics::employee::aggregate_workforce;
use crate::analytics::organization::aggregate_organization;
use crate::analytics::report::{AttendanceReport, assemble_report};
use crate::model::attendance::AttendanceStatus;
use crate::model::filter::PeriodFilter;
use crate::store::Store;
use actix_web::{HttpResponse, Responder, web};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ReportQuery {
    pub organization_id: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub employee_id: Option<u64>,
    pub department_id: Option<u64>,
    pub status: Option<AttendanceStatus>,
    /// Also attach the dashboard KPI snapshot for today. Defaults to false.
    pub include_kpis: Option<bool>,
}

/// Assembled export bundle for the PDF/Excel rendering collaborator.
/// The renderer formats these values as-is; no aggregation happens past this
/// point.
#[utoipa::path(
    get,
    path = "/api/v1/reports/attendance",
    params(ReportQuery),
    responses(
        (status = 200, description = "Report bundle", body = AttendanceReport),
        (status = 400, description = "Invalid date range"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reports"
)]
pub async fn attendance_report(
    store: web::Data<Store>,
    query: web::Query<ReportQuery>,
) -> actix_web::Result<impl Responder> {
    let filter = PeriodFilter {
        start_date: query.start_date,
        end_date: query.end_date,
        employee_id: query.employee_id,
        department_id: query.department_id,
        status: query.status,
    };
    filter
        .validate()
        .map_err(actix_web::error::ErrorBadRequest)?;

    let organization_id = query.organization_id;
    let (records, employees) = futures::try_join!(
        store.records_in_period(organization_id, &filter),
        store.active_employees(organization_id),
    )
    .map_err(|e| {
        tracing::error!(error = %e, organization_id, "Report fetch failed");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    let workforce = aggregate_workforce(&records, &employees, filter.start_date, filter.end_date);

    let kpis = if query.include_kpis.unwrap_or(false) {
        let today = Local::now().date_naive();
        let yesterday = today.pred_opt().unwrap_or(today);
        let (today_rows, yesterday_rows) = futures::try_join!(
            store.records_on(organization_id, today),
            store.records_on(organization_id, yesterday),
        )
        .map_err(|e| {
            tracing::error!(error = %e, organization_id, "Report KPI fetch failed");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;
        let kpis = aggregate_organization(&today_rows, &yesterday_rows, employees.len() as u32);
        let alerts = generate_alerts(&kpis);
        Some(kpis.with_alert_counts(&alerts))
    } else {
        None
    };

    let report = assemble_report(records, Some(workforce), kpis, filter);
    Ok(HttpResponse::Ok().json(report))
}
