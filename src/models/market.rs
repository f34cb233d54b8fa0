use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// VN-Index snapshot from the market overview endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketOverview {
    pub index_name: String,
    pub value: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: i64,
    pub market_status: String,
    pub last_updated: DateTime<Utc>,
}
