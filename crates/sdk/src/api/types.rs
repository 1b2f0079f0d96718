use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct ApiBaseConfig {
    pub server_url: String,
}

#[derive(Error, Debug)]
pub enum ApiSdkError {
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-2xx response; `message` carries the server's `detail` field
    /// when the body had one.
    #[error("{message}")]
    ApiError { status: u16, message: String },

    /// The refresh token was missing or rejected. The stored credentials
    /// are already cleared and the session listener has run.
    #[error("session expired: sign in again")]
    SessionExpired,

    /// A request was replayed with a freshly refreshed token and the
    /// server still answered 401. Not retried further.
    #[error("request unauthorized after a successful token refresh")]
    StillUnauthorized,

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type ApiResult<T> = Result<T, ApiSdkError>;

/// The `{ "message": "..." }` shape update and delete endpoints answer with.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
