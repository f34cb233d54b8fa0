use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Trade,
    Signal,
    Deposit,
    Alert,
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityKind::Trade => write!(f, "trade"),
            ActivityKind::Signal => write!(f, "signal"),
            ActivityKind::Deposit => write!(f, "deposit"),
            ActivityKind::Alert => write!(f, "alert"),
        }
    }
}

/// One entry of the recent-activity feed, ordered by recency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub symbol: Option<String>,
    pub amount: Option<f64>,
}
