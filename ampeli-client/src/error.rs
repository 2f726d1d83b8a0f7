//! Client error types
//!
//! Failures are classified by the transport layer from the HTTP status code
//! into tagged variants. Callers match on the variant, never on message text.

use shared::ErrorCode;
use thiserror::Error;

/// Remote API client error
#[derive(Debug, Error)]
pub enum ClientError {
    /// 400 Bad Request
    #[error("bad request: {0}")]
    BadRequest(String),

    /// 401 Unauthorized
    #[error("unauthorized")]
    Unauthorized,

    /// 403 Forbidden
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// 404 Not Found
    #[error("not found: {0}")]
    NotFound(String),

    /// 409 Conflict
    #[error("conflict: {0}")]
    Conflict(String),

    /// 429 Too Many Requests
    #[error("rate limited")]
    RateLimited,

    /// 503 Service Unavailable
    #[error("service unavailable")]
    ServiceUnavailable,

    /// Any other 5xx
    #[error("server error ({status}): {body}")]
    Server { status: u16, body: String },

    /// Any remaining non-2xx status
    #[error("unexpected status {status}: {body}")]
    Unexpected { status: u16, body: String },

    /// Connection / timeout / TLS failure before a status was received
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// 2xx response whose body could not be decoded
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Map this error onto the workspace-wide [`ErrorCode`] taxonomy
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::BadRequest(_) => ErrorCode::RemoteRejected,
            Self::Unauthorized => ErrorCode::InvalidCredentials,
            Self::Forbidden(_) => ErrorCode::PermissionDenied,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::Conflict(_) => ErrorCode::AlreadyExists,
            Self::RateLimited => ErrorCode::RateLimited,
            Self::ServiceUnavailable => ErrorCode::RemoteUnavailable,
            Self::Server { .. } => ErrorCode::RemoteServerError,
            Self::Unexpected { .. } => ErrorCode::RemoteRejected,
            Self::Transport(_) => ErrorCode::ConnectionFailed,
            Self::InvalidResponse(_) => ErrorCode::InvalidResponse,
        }
    }
}
