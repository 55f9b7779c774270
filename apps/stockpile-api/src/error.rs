//! # API Error Type
//!
//! The one place HTTP semantics are decided for failures.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockpile                              │
//! │                                                                         │
//! │  InventoryService                       Handler                         │
//! │  ────────────────                       ───────                         │
//! │                                                                         │
//! │  Err(InventoryError) ─── kind() ───► status_for ───► ApiError          │
//! │                                                          │              │
//! │  bad path id / bad body ─► ValidationError ──────────────┤              │
//! │                                                          ▼              │
//! │                                  (status, plain-text rendered message)  │
//! │                                                                         │
//! │  ErrorKind           Status                                            │
//! │  ─────────           ──────                                            │
//! │  Validation          400 Bad Request                                   │
//! │  NotFound            404 Not Found                                     │
//! │  UniqueConstraint    400 Bad Request                                   │
//! │  InvalidState        400 Bad Request                                   │
//! │  NotImplemented      501 Not Implemented                               │
//! │  Other               500 Internal Server Error                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The body is the error's rendered message. No stack traces, no structured
//! error document.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use stockpile_core::{ErrorKind, InventoryError, ValidationError};
use tracing::{debug, error};

/// Maps a taxonomy kind to its HTTP status.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::UniqueConstraint => StatusCode::BAD_REQUEST,
        ErrorKind::InvalidState => StatusCode::BAD_REQUEST,
        ErrorKind::NotImplemented => StatusCode::NOT_IMPLEMENTED,
        ErrorKind::Other => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Error returned from HTTP handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Response status
    pub status: StatusCode,

    /// Plain-text response body
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError {
            status,
            message: message.into(),
        }
    }
}

impl From<InventoryError> for ApiError {
    fn from(err: InventoryError) -> Self {
        ApiError::new(status_for(err.kind()), err.to_string())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        InventoryError::from(err).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, message = %self.message, "Request failed");
        } else {
            debug!(status = %self.status, message = %self.message, "Request rejected");
        }

        (self.status, self.message).into_response()
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
