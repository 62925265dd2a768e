use crate::analytics::employee::{EmployeeMetrics, aggregate_employee};
use crate::model::employee::Employee;
use crate::model::filter::PeriodFilter;
use crate::store::Store;
use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct RosterQuery {
    pub organization_id: u64,
}

#[derive(Serialize, ToSchema)]
pub struct RosterResponse {
    pub data: Vec<Employee>,
    pub total: usize,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct MetricsQuery {
    pub organization_id: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Active roster for the organization.
#[utoipa::path(
    get,
    path = "/api/v1/employees",
    params(RosterQuery),
    responses(
        (status = 200, description = "Active employees", body = RosterResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    store: web::Data<Store>,
    query: web::Query<RosterQuery>,
) -> actix_web::Result<impl Responder> {
    let employees = store
        .active_employees(query.organization_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch employees");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    let total = employees.len();
    Ok(HttpResponse::Ok().json(RosterResponse {
        data: employees,
        total,
    }))
}

/// Per-employee metrics over a period.
#[utoipa::path(
    get,
    path = "/api/v1/employees/{employee_id}/metrics",
    params(
        ("employee_id", Path, description = "Employee ID"),
        MetricsQuery
    ),
    responses(
        (status = 200, description = "Derived metrics for the employee", body = EmployeeMetrics),
        (status = 400, description = "Invalid date range"),
        (status = 404, description = "Employee not found or inactive"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn employee_metrics(
    store: web::Data<Store>,
    path: web::Path<u64>,
    query: web::Query<MetricsQuery>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();
    let filter = PeriodFilter {
        start_date: query.start_date,
        end_date: query.end_date,
        employee_id: Some(employee_id),
        department_id: None,
        status: None,
    };
    filter
        .validate()
        .map_err(actix_web::error::ErrorBadRequest)?;

    let organization_id = query.organization_id;
    let (records, roster) = futures::try_join!(
        store.records_in_period(organization_id, &filter),
        store.active_employees(organization_id),
    )
    .map_err(|e| {
        tracing::error!(error = %e, employee_id, "Failed to fetch employee metrics inputs");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    if !roster.iter().any(|e| e.id == employee_id) {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "message": "Employee not found"
        })));
    }

    let metrics = aggregate_employee(employee_id, &records, filter.start_date, filter.end_date);
    Ok(HttpResponse::Ok().json(metrics))
}
