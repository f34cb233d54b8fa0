use std::sync::Arc;

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::external::api_client::Transport;

/// Presentation state of one widget domain.
///
/// A widget is either still waiting for its first cycle to finish, showing a
/// live payload verbatim, or showing the domain's demo dataset. A rendered
/// list is always entirely live or entirely fallback; the two are never
/// merged element-by-element.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetState<T> {
    Loading,
    Live(T),
    Fallback(T),
}

impl<T> WidgetState<T> {
    /// The render-ready dataset, if any cycle has completed.
    pub fn data(&self) -> Option<&T> {
        match self {
            WidgetState::Loading => None,
            WidgetState::Live(data) | WidgetState::Fallback(data) => Some(data),
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, WidgetState::Live(_))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, WidgetState::Fallback(_))
    }
}

struct LoaderInner<T> {
    state: WidgetState<T>,
    loading: bool,
    generation: u64,
}

type FallbackFn<T> = Arc<dyn Fn() -> T + Send + Sync>;
type EmptyFn<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// One resilient load cycle per data domain: fetch, evaluate, degrade.
///
/// Every cycle resolves to Live or Fallback; a transport failure, a non-2xx
/// status, an undecodable body, and a semantically empty payload all collapse
/// to the same outcome, so the widget never renders empty or broken. Clones
/// share the underlying state, which lets a spawned refresh task and the
/// owner observe the same widget.
pub struct WidgetLoader<T> {
    transport: Arc<dyn Transport>,
    endpoint: String,
    fallback: FallbackFn<T>,
    is_empty: EmptyFn<T>,
    inner: Arc<Mutex<LoaderInner<T>>>,
}

impl<T> Clone for WidgetLoader<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            endpoint: self.endpoint.clone(),
            fallback: Arc::clone(&self.fallback),
            is_empty: Arc::clone(&self.is_empty),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> WidgetLoader<T>
where
    T: DeserializeOwned + Clone + Send + 'static,
{
    pub fn new(
        transport: Arc<dyn Transport>,
        endpoint: impl Into<String>,
        fallback: impl Fn() -> T + Send + Sync + 'static,
        is_empty: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            fallback: Arc::new(fallback),
            is_empty: Arc::new(is_empty),
            inner: Arc::new(Mutex::new(LoaderInner {
                state: WidgetState::Loading,
                loading: true,
                generation: 0,
            })),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Snapshot of the current presentation state.
    pub fn state(&self) -> WidgetState<T> {
        self.inner.lock().state.clone()
    }

    /// True while a cycle is in flight (and before the first one starts).
    pub fn is_loading(&self) -> bool {
        self.inner.lock().loading
    }

    /// Run one full load cycle.
    ///
    /// Each cycle takes a generation number when it starts; starting a newer
    /// cycle invalidates any older in-flight one, whose result is discarded
    /// when it finally settles. The displayed state therefore always belongs
    /// to the most recently started cycle.
    pub async fn load(&self) {
        let generation = {
            let mut inner = self.inner.lock();
            inner.generation += 1;
            inner.loading = true;
            inner.generation
        };

        let outcome = self.transport.get_json(&self.endpoint).await;

        let resolved = match outcome {
            Ok(value) => match serde_json::from_value::<T>(value) {
                Ok(data) if (self.is_empty)(&data) => {
                    debug!("{}: empty payload, using demo data", self.endpoint);
                    WidgetState::Fallback((self.fallback)())
                }
                Ok(data) => WidgetState::Live(data),
                Err(e) => {
                    warn!("{}: undecodable payload ({}), using demo data", self.endpoint, e);
                    WidgetState::Fallback((self.fallback)())
                }
            },
            Err(e) => {
                warn!("{}: fetch failed ({}), using demo data", self.endpoint, e);
                WidgetState::Fallback((self.fallback)())
            }
        };

        let mut inner = self.inner.lock();
        if inner.generation != generation {
            debug!("{}: discarding superseded cycle {}", self.endpoint, generation);
            return;
        }
        inner.state = resolved;
        inner.loading = false;
    }
}
