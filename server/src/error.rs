//! Conversion of every failure into the uniform JSON error body.
//!
//! # Design
//! Handlers return `Result<_, ApiError>`; this module is the only place that
//! decides status codes and writes `{"error": {"message", "status"}}`.
//! Logging happens here too, so a subscriber filtered to `off` (test mode)
//! silences diagnostics without touching the handlers.

use std::any::Any;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use shopping_core::ItemError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// An item operation failed.
    #[error(transparent)]
    Item(#[from] ItemError),

    /// No route matches the request path and method.
    #[error("Not Found")]
    RouteNotFound,

    /// The request body could not be decoded.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// Anything unclassified.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Item(err) => {
                StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Rejected { status, .. } => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Wire shape of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
    pub status: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = ?self, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), %message, "request rejected");
        }
        let body = ErrorBody {
            error: ErrorDetail {
                message,
                status: status.as_u16(),
            },
        };
        (status, Json(body)).into_response()
    }
}

/// Response for a handler that panicked, used with `CatchPanicLayer`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = detail, "handler panicked");
    ApiError::Internal("Internal Server Error".to_string()).into_response()
}
