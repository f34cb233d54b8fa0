use std::sync::Arc;

use tracing::{info, warn};

use vndash::config::AppConfig;
use vndash::external::api_client::ApiClient;
use vndash::logging::{init_logging, LoggingConfig};
use vndash::models::{Activity, DashboardSummary, MarketOverview, NewsItem, PerformanceDataPoint, Position};
use vndash::services::dashboard_controller::DashboardController;
use vndash::services::widget_loader::{WidgetLoader, WidgetState};
use vndash::services::widgets;
use vndash::state::AppState;
use vndash::utils::format;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_logging(LoggingConfig::from_env())
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    let config = AppConfig::from_env()?;
    info!("🚀 vndash starting against {}", config.base_url);

    let state = AppState {
        transport: Arc::new(ApiClient::new(&config)),
        config,
    };

    let controller = DashboardController::new(
        Arc::clone(&state.transport),
        state.config.refresh_interval,
    );
    controller.start();

    let activity = widgets::activity_feed(Arc::clone(&state.transport));
    let performance = widgets::performance_chart(Arc::clone(&state.transport));
    let positions = widgets::positions_table(Arc::clone(&state.transport));
    let market = widgets::market_overview(Arc::clone(&state.transport));
    let news = widgets::news_feed(Arc::clone(&state.transport));

    let render_loop = async {
        loop {
            futures::join!(
                activity.load(),
                performance.load(),
                positions.load(),
                market.load(),
                news.load(),
            );

            render_summary(&controller);
            render_market(&market);
            render_positions(&positions);
            render_performance(&performance);
            render_activity(&activity);
            render_news(&news);

            tokio::time::sleep(state.config.refresh_interval).await;
        }
    };

    tokio::select! {
        _ = render_loop => {}
        _ = tokio::signal::ctrl_c() => {
            info!("shutting down");
            controller.stop();
        }
    }

    Ok(())
}

fn render_summary(controller: &DashboardController) {
    if let Some(advisory) = controller.advisory() {
        warn!("{}", advisory);
    }

    match controller.state() {
        WidgetState::Loading => info!("portfolio: loading..."),
        WidgetState::Live(summary) | WidgetState::Fallback(summary) => log_summary(&summary),
    }
}

fn log_summary(summary: &DashboardSummary) {
    info!(
        "portfolio: {} (P&L {} / {}) | cash {} | {} positions | market {}",
        format::format_compact_currency(summary.total_portfolio_value),
        format::format_currency(summary.total_pnl, true),
        format::format_percent(summary.total_pnl_percent),
        format::format_compact_currency(summary.cash_balance),
        summary.num_positions,
        summary.market_status,
    );
}

fn render_market(market: &WidgetLoader<MarketOverview>) {
    let state = market.state();
    if let Some(overview) = state.data() {
        info!(
            "{}: {} ({} / {}) vol {}",
            overview.index_name,
            format::format_price(overview.value),
            format::format_currency(overview.change, true),
            format::format_percent(overview.change_percent),
            format::format_price(overview.volume as f64),
        );
    }
}

fn render_positions(positions: &WidgetLoader<Vec<Position>>) {
    let state = positions.state();
    if let Some(items) = state.data() {
        for position in items {
            info!(
                "  {} x{}: {} (P&L {})",
                position.symbol,
                position.quantity,
                position
                    .current_price
                    .map(format::format_price)
                    .unwrap_or_else(|| "n/a".to_string()),
                position
                    .unrealized_pnl_percent
                    .map(format::format_percent)
                    .unwrap_or_else(|| "n/a".to_string()),
            );
        }
    }
}

fn render_performance(performance: &WidgetLoader<Vec<PerformanceDataPoint>>) {
    let state = performance.state();
    if let Some(points) = state.data() {
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            info!(
                "performance ({} pts): {} -> {} ({})",
                points.len(),
                format::format_compact_currency(first.value),
                format::format_compact_currency(last.value),
                format::format_percent(last.pnl_percent),
            );
        }
    }
}

fn render_activity(activity: &WidgetLoader<Vec<Activity>>) {
    let now = chrono::Utc::now();
    let state = activity.state();
    if let Some(entries) = state.data() {
        for entry in entries.iter().take(3) {
            info!(
                "  [{}] {} ({})",
                entry.kind,
                entry.description,
                format::format_relative_time(entry.timestamp, now),
            );
        }
    }
}

fn render_news(news: &WidgetLoader<Vec<NewsItem>>) {
    let now = chrono::Utc::now();
    let state = news.state();
    if let Some(items) = state.data() {
        for item in items.iter().take(3) {
            let published = item
                .published
                .map(|ts| format::format_relative_time(ts, now))
                .unwrap_or_else(|| "undated".to_string());
            info!("  📰 {} - {} ({})", item.source, item.title, published);
        }
    }
}
