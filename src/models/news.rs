use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A news headline, ordered by recency. `published` is null when the source
/// did not report a timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub source: String,
    pub url: String,
    pub published: Option<DateTime<Utc>>,
    #[serde(default)]
    pub symbols: Vec<String>,
}
