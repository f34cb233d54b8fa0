use thiserror::Error;

/// Failures the data layer can observe. Everything here collapses to the
/// fallback dataset at the widget boundary; nothing reaches the rendering
/// layer as a raw error.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server returned status {0}")]
    Status(u16),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}
