use crate::analytics::error::AnalyticsError;
use crate::model::attendance::AttendanceStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Query window for record fetches and aggregation runs. Immutable once an
/// aggregation starts; validated at the API boundary before any query runs.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PeriodFilter {
    #[schema(example = "2026-08-01", value_type = String, format = "date")]
    pub start_date: NaiveDate,

    #[schema(example = "2026-08-31", value_type = String, format = "date")]
    pub end_date: NaiveDate,

    #[schema(example = 42, nullable = true)]
    pub employee_id: Option<u64>,

    #[schema(example = 10, nullable = true)]
    pub department_id: Option<u64>,

    #[schema(example = "late", nullable = true)]
    pub status: Option<AttendanceStatus>,
}

impl PeriodFilter {
    /// Rejects inverted ranges up front so the aggregators only ever see
    /// well-formed windows.
    pub fn validate(&self) -> Result<(), AnalyticsError> {
        if self.start_date > self.end_date {
            return Err(AnalyticsError::InvalidRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn inverted_range_is_rejected() {
        let filter = PeriodFilter {
            start_date: day(2026, 8, 10),
            end_date: day(2026, 8, 1),
            employee_id: None,
            department_id: None,
            status: None,
        };
        assert!(filter.validate().is_err());
    }

    #[test]
    fn single_day_range_is_valid() {
        let filter = PeriodFilter {
            start_date: day(2026, 8, 10),
            end_date: day(2026, 8, 10),
            employee_id: None,
            department_id: None,
            status: None,
        };
        assert!(filter.validate().is_ok());
    }
}
