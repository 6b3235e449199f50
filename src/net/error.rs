//! Error taxonomy for the REST boundary.
//!
//! ERROR HANDLING
//! ==============
//! Callers decide policy: the session probe collapses every variant to
//! "logged out", the settings editor surfaces [`ApiError::Server`] messages
//! verbatim and falls back to a localized generic string for everything else.
//! Nothing here is fatal to the application.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure modes for a single HTTP call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never completed (DNS, connection reset, offline).
    #[error("network error: {0}")]
    Network(String),
    /// The server rejected the session (401/403).
    #[error("authentication required")]
    Auth,
    /// Non-success status without a usable error body.
    #[error("request failed with status {0}")]
    Status(u16),
    /// Business error reported by the server's JSON `error` field.
    #[error("{0}")]
    Server(String),
    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Stub result on non-browser builds.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Whether this failure means the session is gone.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth)
    }

    /// The server-provided business message, if there is one to surface
    /// verbatim.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server(message) => Some(message),
            _ => None,
        }
    }
}

/// Map a non-success HTTP status to an error variant.
pub fn classify_status(status: u16) -> ApiError {
    match status {
        401 | 403 => ApiError::Auth,
        other => ApiError::Status(other),
    }
}

/// Build the error for a non-success response, preferring the JSON `error`
/// field when the body carries one.
pub fn error_from_body(status: u16, body: &str) -> ApiError {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: Option<String>,
    }
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.error.filter(|m| !m.is_empty()) {
            return ApiError::Server(message);
        }
    }
    classify_status(status)
}
