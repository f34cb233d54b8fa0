use std::sync::Arc;

use crate::config::AppConfig;
use crate::external::api_client::Transport;

/// Shared wiring handed to the controller and widgets: the transport and the
/// immutable configuration. Nothing else is shared between load cycles.
#[derive(Clone)]
pub struct AppState {
    pub transport: Arc<dyn Transport>,
    pub config: AppConfig,
}
