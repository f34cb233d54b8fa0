//! The widget domains: each instantiates the resilient loader against its own
//! endpoint, fallback dataset, and emptiness predicate. Domains are
//! functionally independent; no widget's load cycle can affect another's.

use std::sync::Arc;

use crate::external::api_client::Transport;
use crate::models::{Activity, MarketOverview, NewsItem, PerformanceDataPoint, Position};
use crate::services::fallback_data;
use crate::services::widget_loader::WidgetLoader;

pub const ACTIVITY_ENDPOINT: &str = "/dashboard/activity?limit=10";
pub const PERFORMANCE_ENDPOINT: &str = "/dashboard/performance?days=30";
pub const POSITIONS_ENDPOINT: &str = "/portfolio/positions";
pub const MARKET_ENDPOINT: &str = "/market/overview";
pub const NEWS_ENDPOINT: &str = "/dashboard/news-feed?limit=5";

/// Trailing window of the performance chart, matching the default query.
pub const PERFORMANCE_WINDOW_DAYS: u32 = 30;

pub fn activity_feed(transport: Arc<dyn Transport>) -> WidgetLoader<Vec<Activity>> {
    WidgetLoader::new(
        transport,
        ACTIVITY_ENDPOINT,
        fallback_data::demo_activities,
        |items: &Vec<Activity>| items.is_empty(),
    )
}

pub fn performance_chart(transport: Arc<dyn Transport>) -> WidgetLoader<Vec<PerformanceDataPoint>> {
    WidgetLoader::new(
        transport,
        PERFORMANCE_ENDPOINT,
        || fallback_data::demo_performance(PERFORMANCE_WINDOW_DAYS),
        |points: &Vec<PerformanceDataPoint>| points.is_empty(),
    )
}

pub fn positions_table(transport: Arc<dyn Transport>) -> WidgetLoader<Vec<Position>> {
    WidgetLoader::new(
        transport,
        POSITIONS_ENDPOINT,
        fallback_data::demo_positions,
        |positions: &Vec<Position>| positions.is_empty(),
    )
}

/// Singleton domain: absence shows up as a null or undecodable body, which
/// the loader already degrades, so the emptiness predicate is trivial.
pub fn market_overview(transport: Arc<dyn Transport>) -> WidgetLoader<MarketOverview> {
    WidgetLoader::new(
        transport,
        MARKET_ENDPOINT,
        fallback_data::demo_market_overview,
        |_: &MarketOverview| false,
    )
}

pub fn news_feed(transport: Arc<dyn Transport>) -> WidgetLoader<Vec<NewsItem>> {
    WidgetLoader::new(
        transport,
        NEWS_ENDPOINT,
        fallback_data::demo_news,
        |items: &Vec<NewsItem>| items.is_empty(),
    )
}
