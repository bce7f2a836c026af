//! Global application error types and handlers.
//!
//! Access decisions never produce an `AppError`; these cover startup, paths
//! that cannot be canonicalized, and the forwarding path. Responses reuse the
//! gateway's `{success, message}` shape.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::auth::RejectBody;
use crate::config::ConfigError;
use crate::middleware::path::PathError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("request body too large or unreadable: {0}")]
    Body(String),

    #[error("malformed request path: {0}")]
    Path(#[from] PathError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Upstream(_) => (StatusCode::BAD_GATEWAY, "upstream unavailable"),
            AppError::Body(_) => (StatusCode::PAYLOAD_TOO_LARGE, "request body rejected"),
            AppError::Path(_) => (StatusCode::BAD_REQUEST, "malformed path"),
            AppError::Config(_) | AppError::Io(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
            }
        };
        error!(error = %self, %status, "request failed");

        let body = RejectBody {
            success: false,
            message: message.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
