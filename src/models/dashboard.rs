use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate portfolio state shown in the dashboard header. One instance,
/// refreshed on the controller's interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_portfolio_value: f64,
    pub cash_balance: f64,
    pub total_invested: f64,
    pub total_pnl: f64,
    pub total_pnl_percent: f64,
    pub num_positions: u32,
    pub market_status: String,
    pub ssi_connected: bool,
    pub auto_trading_enabled: bool,
    pub last_updated: DateTime<Utc>,
}
