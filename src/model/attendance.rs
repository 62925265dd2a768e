use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

/// Raw status stamped on an attendance row at check-in/check-out time.
///
/// Only `present`, `late` and `absent` drive the rate formulas; the remaining
/// variants are carried through and classified as present-like or absent-like
/// depending on whether a check-in exists.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    sqlx::Type,
    ToSchema,
    Display,
    EnumString,
    EnumIter,
    Default,
)]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AttendanceStatus {
    #[default]
    Present,
    Late,
    Absent,
    Incomplete,
    SickLeave,
    Vacation,
    Remote,
    Overtime,
}

/// One attendance row per (employee_id, date); uniqueness is enforced by the
/// database and defensively re-checked by the workforce aggregator.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct AttendanceRecord {
    pub id: u64,
    pub employee_id: u64,
    pub organization_id: u64,

    #[schema(example = "2026-08-24", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[schema(example = "09:02:17", value_type = String, nullable = true)]
    pub check_in: Option<NaiveTime>,

    #[schema(example = "17:45:00", value_type = String, nullable = true)]
    pub check_out: Option<NaiveTime>,

    #[schema(example = 8.71, nullable = true)]
    pub work_hours: Option<f64>,

    #[schema(example = 0.71, nullable = true)]
    pub overtime_hours: Option<f64>,

    #[schema(example = "late")]
    pub status: AttendanceStatus,
}
