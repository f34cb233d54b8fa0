use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::external::api_client::Transport;
use crate::models::DashboardSummary;
use crate::services::fallback_data;
use crate::services::widget_loader::{WidgetLoader, WidgetState};

pub const SUMMARY_ENDPOINT: &str = "/dashboard/summary";

/// Top-level coordinator: owns the summary load cycle and the recurring
/// refresh task. Widgets run their own independent cycles; the controller
/// only drives the aggregate summary.
pub struct DashboardController {
    loader: WidgetLoader<DashboardSummary>,
    base_url: String,
    refresh_interval: Duration,
    last_refresh: Arc<Mutex<Option<DateTime<Utc>>>>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl DashboardController {
    pub fn new(transport: Arc<dyn Transport>, refresh_interval: Duration) -> Self {
        let base_url = transport.base_url().to_string();
        let loader = WidgetLoader::new(
            Arc::clone(&transport),
            SUMMARY_ENDPOINT,
            fallback_data::demo_summary,
            |_: &DashboardSummary| false,
        );

        Self {
            loader,
            base_url,
            refresh_interval,
            last_refresh: Arc::new(Mutex::new(None)),
            task: Mutex::new(None),
        }
    }

    /// Spawn the recurring refresh: one cycle immediately, then one per
    /// interval until [`stop`](Self::stop) or drop. Calling `start` again
    /// replaces the previous task.
    pub fn start(&self) {
        let loader = self.loader.clone();
        let last_refresh = Arc::clone(&self.last_refresh);
        let period = self.refresh_interval;

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                loader.load().await;
                *last_refresh.lock() = Some(Utc::now());
                debug!("summary refresh cycle completed");
            }
        });

        if let Some(previous) = self.task.lock().replace(handle) {
            previous.abort();
        }
        info!(
            "dashboard controller started (refresh every {} ms)",
            period.as_millis()
        );
    }

    /// Cancel the recurring refresh task. In-flight HTTP calls are not
    /// aborted; their results are discarded by the loader's generation check
    /// if a newer cycle has started since.
    pub fn stop(&self) {
        if let Some(handle) = self.task.lock().take() {
            handle.abort();
            info!("dashboard controller stopped");
        }
    }

    /// Run a single summary cycle outside the recurring task (manual refresh).
    pub async fn refresh(&self) {
        self.loader.load().await;
        *self.last_refresh.lock() = Some(Utc::now());
    }

    pub fn state(&self) -> WidgetState<DashboardSummary> {
        self.loader.state()
    }

    pub fn is_loading(&self) -> bool {
        self.loader.is_loading()
    }

    /// Completion time of the most recent cycle, live or fallback.
    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        *self.last_refresh.lock()
    }

    /// Non-blocking notice shown while the summary is in fallback. Names the
    /// resolved base URL so a user can diagnose misconfiguration.
    pub fn advisory(&self) -> Option<String> {
        if self.loader.state().is_fallback() {
            Some(format!(
                "Live data unavailable from {}; showing demo data",
                self.base_url
            ))
        } else {
            None
        }
    }
}

impl Drop for DashboardController {
    fn drop(&mut self) {
        self.stop();
    }
}
