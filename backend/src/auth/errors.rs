//! Custom error types specific to authentication failures.
//!
//! Credential failures themselves live in the `credentials` crate; this module
//! adds the gateway-level role mismatch and the 401 response used on API paths.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use credentials::Role;
use thiserror::Error;

use super::models::{RejectBody, RejectReason};
use super::routes::Area;

/// A valid credential whose role does not belong in the requested area.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("role {role:?} is not allowed in {area:?}, redirecting to {redirect_to}")]
pub struct RoleMismatch {
    pub role: Role,
    pub area: Area,
    pub redirect_to: &'static str,
}

/// 401 with the `{success, message}` body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthRejection(pub RejectReason);

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, Json(RejectBody::from(self.0))).into_response()
    }
}
