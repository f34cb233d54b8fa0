use serde::{Deserialize, Serialize};

/// An open holding. Price-derived fields are null when no live quote is
/// available for the symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub symbol: String,
    pub quantity: i64,
    pub avg_buy_price: f64,
    pub current_price: Option<f64>,
    pub total_cost: f64,
    pub current_value: Option<f64>,
    pub unrealized_pnl: Option<f64>,
    pub unrealized_pnl_percent: Option<f64>,
}
