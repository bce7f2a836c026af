//! Handler functions for session endpoints served by the gateway itself.
//!
//! Credentials are issued by the external auth server; the gateway only ever
//! takes them away.

use axum::response::{IntoResponse, Redirect, Response};
use tracing::debug;

use super::models::HOME_PATH;
use crate::middleware::cookies::append_clear_auth_cookie;

/// Expires `auth_token` and sends the browser home.
pub async fn logout() -> Response {
    debug!("logout requested");
    let mut response = Redirect::to(HOME_PATH).into_response();
    append_clear_auth_cookie(response.headers_mut());
    response
}
