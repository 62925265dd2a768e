use crate::analytics::alerts::{Alert, generate_alerts};
use crate::analytics::organization::{OrganizationKpis, aggregate_organization};
use crate::analytics::trend::{Bucketing, TrendPoint, build_trend};
use crate::model::filter::PeriodFilter;
use crate::store::Store;
use actix_web::{HttpResponse, Responder, web};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct DashboardQuery {
    pub organization_id: u64,
}

#[derive(Serialize, ToSchema)]
pub struct DashboardResponse {
    pub kpis: OrganizationKpis,
    pub alerts: Vec<Alert>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct TrendQuery {
    pub organization_id: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Defaults to weekly bucketing.
    pub bucket: Option<Bucketing>,
}

#[derive(Serialize, ToSchema)]
pub struct TrendResponse {
    pub data: Vec<TrendPoint>,
}

/// Today's organization KPIs plus threshold alerts.
///
/// The three reads are independent, so they run concurrently and join before
/// any aggregation happens.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Organization KPI snapshot", body = DashboardResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Dashboard"
)]
pub async fn dashboard(
    store: web::Data<Store>,
    query: web::Query<DashboardQuery>,
) -> actix_web::Result<impl Responder> {
    let organization_id = query.organization_id;
    let today = Local::now().date_naive();
    let yesterday = today.pred_opt().unwrap_or(today);

    let (today_rows, yesterday_rows, roster) = futures::try_join!(
        store.records_on(organization_id, today),
        store.records_on(organization_id, yesterday),
        store.active_employees(organization_id),
    )
    .map_err(|e| {
        tracing::error!(error = %e, organization_id, "Dashboard fetch failed");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    let kpis = aggregate_organization(&today_rows, &yesterday_rows, roster.len() as u32);
    let alerts = generate_alerts(&kpis);
    let kpis = kpis.with_alert_counts(&alerts);

    Ok(HttpResponse::Ok().json(DashboardResponse { kpis, alerts }))
}

/// Attendance time series bucketed by day or ISO week.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/trend",
    params(TrendQuery),
    responses(
        (status = 200, description = "Chronological trend points", body = TrendResponse),
        (status = 400, description = "Invalid date range"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Dashboard"
)]
pub async fn trend(
    store: web::Data<Store>,
    query: web::Query<TrendQuery>,
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
    let (records, roster) = futures::try_join!(
        store.records_in_period(organization_id, &filter),
        store.active_employees(organization_id),
    )
    .map_err(|e| {
        tracing::error!(error = %e, organization_id, "Trend fetch failed");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    let bucketing = query.bucket.unwrap_or(Bucketing::Week);
    let data = build_trend(&records, bucketing, roster.len() as u32);

    // Demo builds substitute a representative series when the real weekly
    // data is too sparse to chart; the sample never mixes with aggregation
    // output.
    #[cfg(feature = "demo-data")]
    let data = if bucketing == Bucketing::Week && data.len() < 7 {
        crate::analytics::fixtures::sample_weekly_trend(roster.len() as u32)
    } else {
        data
    };

    Ok(HttpResponse::Ok().json(TrendResponse { data }))
}
