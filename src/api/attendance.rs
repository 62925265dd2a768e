use crate::analytics::{LATE_CUTOFF_HOUR, round2};
use crate::model::attendance::AttendanceStatus;
use crate::model::filter::PeriodFilter;
use crate::store::Store;
use actix_web::{HttpResponse, Responder, web};
use chrono::{Local, NaiveDate, NaiveTime};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, ToSchema)]
pub struct CheckInRequest {
    #[schema(example = 42)]
    pub employee_id: u64,
    #[schema(example = 1)]
    pub organization_id: u64,
}

#[derive(Deserialize, ToSchema)]
pub struct CheckOutRequest {
    #[schema(example = 42)]
    pub employee_id: u64,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct RecordsQuery {
    pub organization_id: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub employee_id: Option<u64>,
    pub department_id: Option<u64>,
    pub status: Option<AttendanceStatus>,
}

impl RecordsQuery {
    pub fn filter(&self) -> PeriodFilter {
        PeriodFilter {
            start_date: self.start_date,
            end_date: self.end_date,
            employee_id: self.employee_id,
            department_id: self.department_id,
            status: self.status,
        }
    }
}

/// Check-in endpoint
#[utoipa::path(
    post,
    path = "/api/v1/attendance/check-in",
    request_body = CheckInRequest,
    responses(
        (status = 200, description = "Checked in successfully", body = Object, example = json!({
            "message": "Checked in successfully"
        })),
        (status = 400, description = "Already checked in today", body = Object, example = json!({
            "message": "Already checked in today"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn check_in(
    store: web::Data<Store>,
    payload: web::Json<CheckInRequest>,
) -> actix_web::Result<impl Responder> {
    let now = Local::now();
    let date = now.date_naive();
    let time = now.time();

    let cutoff = NaiveTime::from_hms_opt(LATE_CUTOFF_HOUR, 0, 0)
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("Internal Server Error"))?;
    let status = if time > cutoff {
        AttendanceStatus::Late
    } else {
        AttendanceStatus::Present
    };

    let result = store
        .insert_check_in(payload.organization_id, payload.employee_id, date, time, status)
        .await;

    match result {
        Ok(()) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": "Checked in successfully",
            "status": status
        }))),

        Err(e) => {
            // Duplicate check-in for same day
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.code().as_deref() == Some("23000") {
                    return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                        "message": "Already checked in today"
                    })));
                }
            }

            tracing::error!(error = %e, employee_id = payload.employee_id, "Check-in failed");
            Err(actix_web::error::ErrorInternalServerError(
                "Internal Server Error",
            ))
        }
    }
}

/// Check-out endpoint
#[utoipa::path(
    put,
    path = "/api/v1/attendance/check-out",
    request_body = CheckOutRequest,
    responses(
        (status = 200, description = "Checked out successfully", body = Object, example = json!({
            "message": "Checked out successfully"
        })),
        (status = 400, description = "No active check-in found for today", body = Object, example = json!({
            "message": "No active check-in found for today"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn check_out(
    store: web::Data<Store>,
    payload: web::Json<CheckOutRequest>,
) -> actix_web::Result<impl Responder> {
    let now = Local::now();
    let date = now.date_naive();
    let time = now.time();

    let check_in = store
        .open_check_in(payload.employee_id, date)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, employee_id = payload.employee_id, "Check-out lookup failed");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    let Some(check_in) = check_in else {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": "No active check-in found for today"
        })));
    };

    let worked = round2((time - check_in).num_seconds().max(0) as f64 / 3600.0);
    let overtime = round2((worked - crate::analytics::HOURS_PER_WORKING_DAY).max(0.0));

    let affected = store
        .close_check_out(payload.employee_id, date, time, worked, overtime)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, employee_id = payload.employee_id, "Check-out failed");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    if affected == 0 {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": "No active check-in found for today"
        })));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Checked out successfully",
        "work_hours": worked,
        "overtime_hours": overtime
    })))
}

/// Filtered record listing for roster views and exports.
#[utoipa::path(
    get,
    path = "/api/v1/attendance",
    params(RecordsQuery),
    responses(
        (status = 200, description = "Attendance records in the window"),
        (status = 400, description = "Invalid date range"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn list_records(
    store: web::Data<Store>,
    query: web::Query<RecordsQuery>,
) -> actix_web::Result<impl Responder> {
    let filter = query.filter();
    filter
        .validate()
        .map_err(actix_web::error::ErrorBadRequest)?;

    let records = store
        .records_in_period(query.organization_id, &filter)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch attendance records");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    let total = records.len();
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "data": records,
        "total": total
    })))
}
