//! Hand-authored demonstration datasets, one per widget domain.
//!
//! These are what the dashboard shows whenever live data is unavailable or
//! empty, so they are deliberately plausible VN-market content rather than
//! obvious placeholders. All builders return identical values on every call
//! apart from now-relative timestamps; the performance series is the one
//! pseudo-random exception.

use chrono::{Duration, Utc};
use rand::Rng;

use crate::models::{
    Activity, ActivityKind, DashboardSummary, MarketOverview, NewsItem, PerformanceDataPoint,
    Position,
};

/// Starting portfolio value of the demo performance walk, in VND.
pub const DEMO_PERFORMANCE_ANCHOR: f64 = 5_000_000.0;

/// The walk never drops below this fraction of the anchor.
pub const DEMO_PERFORMANCE_FLOOR: f64 = 0.8;

pub fn demo_summary() -> DashboardSummary {
    DashboardSummary {
        total_portfolio_value: 5_250_000.0,
        cash_balance: 1_250_000.0,
        total_invested: 4_000_000.0,
        total_pnl: 250_000.0,
        total_pnl_percent: 6.25,
        num_positions: 3,
        market_status: "CLOSED".to_string(),
        ssi_connected: false,
        auto_trading_enabled: false,
        last_updated: Utc::now(),
    }
}

pub fn demo_positions() -> Vec<Position> {
    vec![
        Position {
            symbol: "VNM".to_string(),
            quantity: 20,
            avg_buy_price: 65_000.0,
            current_price: Some(67_500.0),
            total_cost: 1_300_000.0,
            current_value: Some(1_350_000.0),
            unrealized_pnl: Some(50_000.0),
            unrealized_pnl_percent: Some(3.85),
        },
        Position {
            symbol: "FPT".to_string(),
            quantity: 10,
            avg_buy_price: 125_000.0,
            current_price: Some(131_000.0),
            total_cost: 1_250_000.0,
            current_value: Some(1_310_000.0),
            unrealized_pnl: Some(60_000.0),
            unrealized_pnl_percent: Some(4.80),
        },
        Position {
            symbol: "HPG".to_string(),
            quantity: 50,
            avg_buy_price: 29_000.0,
            current_price: Some(28_400.0),
            total_cost: 1_450_000.0,
            current_value: Some(1_420_000.0),
            unrealized_pnl: Some(-30_000.0),
            unrealized_pnl_percent: Some(-2.07),
        },
    ]
}

pub fn demo_activities() -> Vec<Activity> {
    let now = Utc::now();
    vec![
        Activity {
            kind: ActivityKind::Trade,
            description: "BUY 10 FPT @ 131,000".to_string(),
            timestamp: now - Duration::hours(2),
            symbol: Some("FPT".to_string()),
            amount: Some(1_310_000.0),
        },
        Activity {
            kind: ActivityKind::Signal,
            description: "BUY signal for MWG (conf: 78%)".to_string(),
            timestamp: now - Duration::hours(5),
            symbol: Some("MWG".to_string()),
            amount: None,
        },
        Activity {
            kind: ActivityKind::Deposit,
            description: "Monthly deposit".to_string(),
            timestamp: now - Duration::days(1),
            symbol: None,
            amount: Some(2_000_000.0),
        },
        Activity {
            kind: ActivityKind::Alert,
            description: "HPG dropped below stop-loss threshold".to_string(),
            timestamp: now - Duration::days(2),
            symbol: Some("HPG".to_string()),
            amount: None,
        },
        Activity {
            kind: ActivityKind::Trade,
            description: "SELL 5 VNM @ 66,200".to_string(),
            timestamp: now - Duration::days(3),
            symbol: Some("VNM".to_string()),
            amount: Some(331_000.0),
        },
    ]
}

pub fn demo_market_overview() -> MarketOverview {
    MarketOverview {
        index_name: "VN-Index".to_string(),
        value: 1_275.6,
        change: 8.4,
        change_percent: 0.66,
        volume: 652_340_000,
        market_status: "CLOSED".to_string(),
        last_updated: Utc::now(),
    }
}

pub fn demo_news() -> Vec<NewsItem> {
    let now = Utc::now();
    vec![
        NewsItem {
            title: "VN-Index edges higher as banking stocks recover".to_string(),
            source: "CafeF".to_string(),
            url: "https://cafef.vn/vn-index-edges-higher.html".to_string(),
            published: Some(now - Duration::hours(3)),
            symbols: vec!["VCB".to_string(), "BID".to_string()],
        },
        NewsItem {
            title: "FPT signs AI infrastructure partnership with regional telcos".to_string(),
            source: "VnExpress".to_string(),
            url: "https://vnexpress.net/fpt-ai-partnership.html".to_string(),
            published: Some(now - Duration::hours(8)),
            symbols: vec!["FPT".to_string()],
        },
        NewsItem {
            title: "Steel demand outlook weighs on Hoa Phat shares".to_string(),
            source: "Vietstock".to_string(),
            url: "https://vietstock.vn/steel-demand-outlook.htm".to_string(),
            published: Some(now - Duration::days(1)),
            symbols: vec!["HPG".to_string()],
        },
        NewsItem {
            title: "Foreign investors return to HOSE after three-week selloff".to_string(),
            source: "Tuoi Tre".to_string(),
            url: "https://tuoitre.vn/foreign-investors-return.htm".to_string(),
            published: None,
            symbols: vec![],
        },
    ]
}

/// Synthesized performance series: a daily random walk over the trailing
/// `days` window, anchored at [`DEMO_PERFORMANCE_ANCHOR`] and clamped so the
/// value never drops below 80% of the anchor.
pub fn demo_performance(days: u32) -> Vec<PerformanceDataPoint> {
    demo_performance_with_rng(days, &mut rand::rng())
}

/// Same walk with a caller-supplied random source, so tests can seed it.
pub fn demo_performance_with_rng(days: u32, rng: &mut impl Rng) -> Vec<PerformanceDataPoint> {
    let floor = DEMO_PERFORMANCE_ANCHOR * DEMO_PERFORMANCE_FLOOR;
    let today = Utc::now().date_naive();

    let mut value = DEMO_PERFORMANCE_ANCHOR;
    let mut points = Vec::with_capacity(days as usize);

    for offset in (0..days as i64).rev() {
        value = (value * (1.0 + rng.random_range(-0.015..0.015))).max(floor);
        let pnl = value - DEMO_PERFORMANCE_ANCHOR;

        points.push(PerformanceDataPoint {
            date: today - Duration::days(offset),
            value,
            pnl,
            pnl_percent: pnl / DEMO_PERFORMANCE_ANCHOR * 100.0,
        });
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_demo_summary_fixed_fields() {
        let summary = demo_summary();
        assert_eq!(summary.total_portfolio_value, 5_250_000.0);
        assert_eq!(summary.market_status, "CLOSED");
        assert!(!summary.ssi_connected);
        assert!(!summary.auto_trading_enabled);
        assert_eq!(summary.num_positions, 3);
    }

    #[test]
    fn test_demo_positions_are_stable_across_calls() {
        assert_eq!(demo_positions(), demo_positions());
    }

    #[test]
    fn test_demo_activities_cover_all_kinds() {
        let kinds: Vec<ActivityKind> = demo_activities().iter().map(|a| a.kind).collect();
        for kind in [
            ActivityKind::Trade,
            ActivityKind::Signal,
            ActivityKind::Deposit,
            ActivityKind::Alert,
        ] {
            assert!(kinds.contains(&kind), "missing {} in demo activities", kind);
        }
    }

    #[test]
    fn test_performance_walk_is_deterministic_under_seeded_rng() {
        let a = demo_performance_with_rng(30, &mut StdRng::seed_from_u64(42));
        let b = demo_performance_with_rng(30, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_performance_walk_respects_floor_and_window() {
        let points = demo_performance_with_rng(30, &mut StdRng::seed_from_u64(7));
        assert_eq!(points.len(), 30);

        let floor = DEMO_PERFORMANCE_ANCHOR * DEMO_PERFORMANCE_FLOOR;
        for point in &points {
            assert!(point.value >= floor);
        }

        for pair in points.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
        assert_eq!(points.last().unwrap().date, Utc::now().date_naive());
    }
}
