use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One point of the portfolio value time series. The wire format carries the
/// date as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceDataPoint {
    pub date: NaiveDate,
    pub value: f64,
    pub pnl: f64,
    pub pnl_percent: f64,
}
