use crate::analytics::department::{DepartmentMetric, aggregate_departments};
use crate::analytics::employee::aggregate_workforce;
use crate::model::filter::PeriodFilter;
use crate::store::Store;
use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct DepartmentMetricsQuery {
    pub organization_id: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Serialize, ToSchema)]
pub struct DepartmentMetricsResponse {
    pub data: Vec<DepartmentMetric>,
    /// Records dropped because they referenced no rostered employee.
    pub skipped_orphans: u32,
}

/// Comparative per-department rollups over the requested period.
#[utoipa::path(
    get,
    path = "/api/v1/departments/metrics",
    params(DepartmentMetricsQuery),
    responses(
        (status = 200, description = "Department rollups", body = DepartmentMetricsResponse),
        (status = 400, description = "Invalid date range"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Departments"
)]
pub async fn department_metrics(
    store: web::Data<Store>,
    query: web::Query<DepartmentMetricsQuery>,
) -> actix_web::Result<impl Responder> {
    let filter = PeriodFilter {
        start_date: query.start_date,
        end_date: query.end_date,
        employee_id: None,
        department_id: None,
        status: None,
    };
    filter
        .validate()
        .map_err(actix_web::error::ErrorBadRequest)?;

    let organization_id = query.organization_id;
    let (records, employees, departments) = futures::try_join!(
        store.records_in_period(organization_id, &filter),
        store.active_employees(organization_id),
        store.department_names(organization_id),
    )
    .map_err(|e| {
        tracing::error!(error = %e, organization_id, "Department metrics fetch failed");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    let workforce = aggregate_workforce(&records, &employees, filter.start_date, filter.end_date);
    let data = aggregate_departments(&workforce.per_employee, &departments);

    Ok(HttpResponse::Ok().json(DepartmentMetricsResponse {
        data,
        skipped_orphans: workforce.skipped_orphans,
    }))
}
