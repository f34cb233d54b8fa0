use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::AppConfig;
use crate::errors::ApiError;

/// The seam between widget loaders and the HTTP layer. Tests substitute
/// in-memory implementations; production uses [`ApiClient`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `base_url + endpoint` and return the decoded JSON body.
    async fn get_json(&self, endpoint: &str) -> Result<Value, ApiError>;

    /// The resolved base URL, for diagnostics (advisory banner).
    fn base_url(&self) -> &str;
}

/// HTTP client for the dashboard backend. The base URL is fixed at
/// construction; per-call observable state is limited to the `loading` flag
/// and the last failure message.
///
/// No timeout, retry, or cancellation happens at this layer: a call that
/// never settles leaves `loading` true indefinitely.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
    loading: AtomicBool,
    last_error: Mutex<Option<String>>,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            loading: AtomicBool::new(false),
            last_error: Mutex::new(None),
        }
    }

    /// True strictly between request start and completion, success or failure.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Display message of the most recent failure, cleared at the start of
    /// every new call.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.lock().clone()
    }

    /// GET `endpoint` and decode the JSON body as `T`.
    pub async fn fetch_data<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.endpoint_url(endpoint)?;
        debug!("GET {}", url);
        let request = self.client.get(url);
        let body = self.execute(request).await?;
        serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// POST `body` as JSON to `endpoint` and decode the JSON response as `T`.
    pub async fn post_data<B, T>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint)?;
        debug!("POST {}", url);
        let request = self.client.post(url).json(body);
        let body = self.execute(request).await?;
        serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(endpoint)
            .map_err(|e| ApiError::Config(format!("bad endpoint '{}': {}", endpoint, e)))
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Value, ApiError> {
        self.loading.store(true, Ordering::SeqCst);
        *self.last_error.lock() = None;

        let outcome = Self::run(request).await;

        if let Err(e) = &outcome {
            *self.last_error.lock() = Some(e.to_string());
        }
        self.loading.store(false, Ordering::SeqCst);

        outcome
    }

    async fn run(request: reqwest::RequestBuilder) -> Result<Value, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn get_json(&self, endpoint: &str) -> Result<Value, ApiError> {
        self.fetch_data(endpoint).await
    }

    fn base_url(&self) -> &str {
        self.base_url.as_str()
    }
}
