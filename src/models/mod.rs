mod activity;
mod dashboard;
mod market;
mod news;
mod performance;
mod position;

pub use activity::{Activity, ActivityKind};
pub use dashboard::DashboardSummary;
pub use market::MarketOverview;
pub use news::NewsItem;
pub use performance::PerformanceDataPoint;
pub use position::Position;
