//! Errors from the delegated login and callback flows.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failure of an auth flow step, optionally carrying the HTTP status to answer with.
///
/// The response body is the raw message, and the status falls back to
/// `500 Internal Server Error` when none was attached.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct AuthError {
    status: Option<StatusCode>,
    message: String,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    pub fn with_status(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::BAD_REQUEST, message)
    }

    pub fn session(e: tower_sessions::session::Error) -> Self {
        Self::new(format!("Session store error: {e}"))
    }

    /// Status to respond with.
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (self.status(), self.message).into_response()
    }
}
