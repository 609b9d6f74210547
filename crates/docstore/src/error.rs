//! # API Error Types
//!
//! Maps store errors to HTTP status codes with JSON error bodies.
//! Caller-caused failures become 400; disk and index failures become 500,
//! with the details logged but never returned to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use docstoreapp::DocstoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`BAD_REQUEST` or `INTERNAL_ERROR`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Missing parameter, bad id, unknown document or unusable name (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Store I/O failure (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    /// Error for a required query parameter that is absent or empty.
    pub fn missing_param(name: &str) -> Self {
        Self::BadRequest(format!("missing required query parameter: {name}"))
    }
}

impl From<DocstoreError> for AppError {
    fn from(err: DocstoreError) -> Self {
        if err.is_client_error() {
            Self::BadRequest(err.to_string())
        } else {
            Self::Internal(err.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = match &self {
            Self::BadRequest(msg) => {
                tracing::warn!(%msg, "Rejected request");
                msg.clone()
            }
            Self::Internal(msg) => {
                tracing::error!(%msg, "Store operation failed");
                "internal server error".to_string()
            }
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };
        (status, Json(body)).into_response()
    }
}
