use chrono::NaiveDate;
use derive_more::{Display, Error};

/// Errors surfaced by the aggregation core. Data sparsity (zero rows, zero
/// employees) is never an error; it resolves to zeroed results.
#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum AnalyticsError {
    #[display(fmt = "invalid period: start date {} is after end date {}", start, end)]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}
