use thiserror::Error;

/// Errors raised by the external collaborators (identity, collection,
/// message, profile).
///
/// `SessionAbsent` is the expected anonymous-visitor path and must never be
/// logged or surfaced as a fault; everything else is shown as a retryable
/// message at the boundary that issued the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No active session behind the transport cookie.
    #[error("no active session")]
    SessionAbsent,

    /// Credential verification rejected the login attempt.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Transport-level failure (DNS, connect, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected envelope.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Create an `Api` error from a status code and server-provided message.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        ApiError::Api {
            status,
            message: message.into(),
        }
    }

    pub fn is_session_absent(&self) -> bool {
        matches!(self, ApiError::SessionAbsent)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
