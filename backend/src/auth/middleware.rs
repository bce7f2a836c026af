//! Middleware for protecting authenticated routes and handling authorization.
//!
//! Runs the [`AccessGateway`] on every request and turns its [`Disposition`]
//! into a response. Redirects are 307 with an empty body.
//!
//! The request URI is canonicalized before evaluation and the rewritten request
//! is what gets forwarded, so the upstream never sees a path the gateway did
//! not classify.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::{from_fn_with_state, Next},
    response::{IntoResponse, Redirect, Response},
    Router,
};
use tracing::debug;

use super::errors::AuthRejection;
use super::models::Disposition;
use super::service::AccessGateway;
use crate::errors::AppError;
use crate::middleware::cookies::{append_clear_auth_cookie, read_auth_cookie};
use crate::middleware::path::canonicalize_uri;

pub async fn access_gateway(
    State(gateway): State<Arc<AccessGateway>>,
    mut request: Request,
    next: Next,
) -> Response {
    let raw = request.uri().path().to_owned();
    let path = match canonicalize_uri(request.uri_mut()) {
        Ok(path) => path,
        Err(err) => return AppError::from(err).into_response(),
    };
    if path != raw {
        debug!(%raw, %path, "canonicalized request path");
    }

    let token = read_auth_cookie(request.headers());
    let disposition = gateway.evaluate(&path, token.as_deref());

    match disposition {
        Disposition::Forward => next.run(request).await,
        Disposition::Redirect(target) => Redirect::temporary(target).into_response(),
        Disposition::Reject(reason) => AuthRejection(reason).into_response(),
        Disposition::RedirectAndClearCookie(target) => {
            let mut response = Redirect::temporary(target).into_response();
            append_clear_auth_cookie(response.headers_mut());
            response
        }
    }
}

/// Puts every route of `router`, including its fallback, behind the gateway.
pub fn protect<S>(router: Router<S>, gateway: Arc<AccessGateway>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(from_fn_with_state(gateway, access_gateway))
}
