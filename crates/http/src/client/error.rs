//! Errors returned by [`ApiClient`](super::ApiClient)

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never got an HTTP answer
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// 401: bad credentials, a bad 2FA code or an expired session
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 409, e.g. a username that is already taken
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Any other non-2xx answer
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// A 2xx body that is not what the endpoint promises
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Map a non-2xx status and the backend's error text
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Self::BadRequest(message),
            StatusCode::UNAUTHORIZED => Self::Unauthorized(message),
            StatusCode::CONFLICT => Self::Conflict(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Text shown next to a form; prefers what the backend said
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized(message)
            | Self::BadRequest(message)
            | Self::Conflict(message)
            | Self::ServerError { message, .. }
                if !message.is_empty() =>
            {
                message.clone()
            }
            Self::Unauthorized(_) => "Invalid username or password.".to_string(),
            Self::Request(_) => "Could not reach the server. Please try again.".to_string(),
            other => other.to_string(),
        }
    }
}
